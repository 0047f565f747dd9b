use std::env;

use goi_types::Language;
use serde::{Deserialize, Serialize};

fn default_relay_url() -> String {
    "https://api.allorigins.win/raw".to_string()
}

fn default_enja_url() -> String {
    "https://api.excelapi.org/dictionary/enja".to_string()
}

fn default_en_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_language() -> Language {
    Language::Ja
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// CORS relay the Japanese endpoint is fetched through.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    #[serde(default = "default_enja_url")]
    pub enja_url: String,
    #[serde(default = "default_en_url")]
    pub en_url: String,
    /// Per-request timeout applied on the HTTP client.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Language the session starts in.
    #[serde(default = "default_language")]
    pub language: Language,
}

impl LookupConfig {
    pub fn new() -> Self {
        let relay_url = env::var("GOI_RELAY_URL").unwrap_or_else(|_| default_relay_url());
        let enja_url = env::var("GOI_ENJA_URL").unwrap_or_else(|_| default_enja_url());
        let en_url = env::var("GOI_EN_URL").unwrap_or_else(|_| default_en_url());

        let timeout_ms = env::var("GOI_LOOKUP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_ms);

        Self {
            relay_url,
            enja_url,
            en_url,
            timeout_ms,
            language: default_language(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}
