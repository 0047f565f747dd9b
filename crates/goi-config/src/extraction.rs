use std::env;

use serde::{Deserialize, Serialize};

fn default_min_word_len() -> usize {
    3
}

fn default_dictionary_path() -> String {
    "data/dictionary.json".to_string()
}

fn default_stopwords_path() -> String {
    "data/stopwords.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Tokens must be strictly longer than this to survive filtering.
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Count every surviving token instead of requiring dictionary
    /// membership. When false, an empty dictionary disables processing.
    #[serde(default)]
    pub dictionary_free: bool,
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: String,
    #[serde(default = "default_stopwords_path")]
    pub stopwords_path: String,
}

impl ExtractionConfig {
    pub fn new() -> Self {
        let min_word_len = env::var("GOI_MIN_WORD_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_min_word_len);

        let dictionary_free = env::var("GOI_DICTIONARY_FREE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        let dictionary_path =
            env::var("GOI_DICTIONARY_PATH").unwrap_or_else(|_| default_dictionary_path());

        let stopwords_path =
            env::var("GOI_STOPWORDS_PATH").unwrap_or_else(|_| default_stopwords_path());

        Self {
            min_word_len,
            dictionary_free,
            dictionary_path,
            stopwords_path,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new()
    }
}
