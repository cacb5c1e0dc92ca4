//! Stopword filtering
//!
//! This module provides the stop-word inventory consulted by frequency
//! analysis, backed by the `stop-words` crate with support for custom lists.
//! Membership is an exact match; callers lower-case tokens before asking.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::pipeline::traits::StopwordSet;

/// Language codes with a built-in inventory
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "pl",
    "ar", "zh", "ja",
];

/// A set of words to ignore when counting vocabulary
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Unknown languages fall back to English; see [`is_supported_language`].
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if an already lower-cased word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            "zh" | "chinese" => return Self::chinese_stopwords(),
            "ja" | "japanese" => return Self::japanese_stopwords(),
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }

    fn chinese_stopwords() -> FxHashSet<String> {
        [
            "的",
            "是",
            "在",
            "有",
            "和",
            "与",
            "或",
            "不",
            "了",
            "也",
            "就",
            "都",
            "而",
            "及",
            "这",
            "那",
            "个",
            "为",
            "以",
            "等",
            "但",
            "被",
            "给",
            "让",
            "把",
            "从",
            "到",
            "对",
            "将",
            "于",
            "能",
            "会",
            "可",
            "要",
            "很",
            "还",
            "更",
            "最",
            "只",
            "已",
            "又",
            "再",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn japanese_stopwords() -> FxHashSet<String> {
        [
            "の",
            "に",
            "は",
            "を",
            "た",
            "が",
            "で",
            "て",
            "と",
            "し",
            "れ",
            "さ",
            "ある",
            "いる",
            "も",
            "する",
            "から",
            "な",
            "こと",
            "として",
            "い",
            "や",
            "など",
            "なっ",
            "ない",
            "この",
            "ため",
            "その",
            "あっ",
            "よう",
            "また",
            "もの",
            "という",
            "あり",
            "まで",
            "られ",
            "なる",
            "へ",
            "か",
            "だ",
            "これ",
            "によって",
            "により",
            "おり",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

impl StopwordSet for StopwordFilter {
    fn contains(&self, word: &str) -> bool {
        self.is_stopword(word)
    }
}

/// Whether `language` (code or English name) has a built-in inventory
pub fn is_supported_language(language: &str) -> bool {
    let lower = language.to_lowercase();
    SUPPORTED_LANGUAGES.contains(&lower.as_str())
        || matches!(
            lower.as_str(),
            "english"
                | "german"
                | "french"
                | "spanish"
                | "italian"
                | "portuguese"
                | "dutch"
                | "russian"
                | "swedish"
                | "norwegian"
                | "danish"
                | "finnish"
                | "hungarian"
                | "turkish"
                | "polish"
                | "arabic"
                | "chinese"
                | "japanese"
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("a"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_membership_is_exact() {
        let filter = StopwordFilter::new("en");
        // Tokens are lower-cased before lookup; the filter does not fold case.
        assert!(!filter.is_stopword("The"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("maschine"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("klingon");
        assert!(filter.is_stopword("the"));
        assert!(!is_supported_language("klingon"));
    }

    #[test]
    fn test_supported_language_names() {
        assert!(is_supported_language("en"));
        assert!(is_supported_language("French"));
        assert!(is_supported_language("JA"));
    }

    #[test]
    fn test_cjk_stopwords() {
        assert!(StopwordFilter::new("zh").is_stopword("的"));
        assert!(StopwordFilter::new("ja").is_stopword("の"));
        assert!(StopwordFilter::new("ja").is_stopword("によって"));
        assert!(StopwordFilter::new("zh").is_stopword("再"));
    }

    #[test]
    fn test_stopword_set_trait() {
        let filter = StopwordFilter::from_list(&["and"]);
        let set: &dyn StopwordSet = &filter;
        assert!(set.contains("and"));
        assert!(!set.contains("rust"));
    }
}
