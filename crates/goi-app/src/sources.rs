use std::collections::HashSet;
use std::path::Path;

use goi_core::error::LoadError;
use serde::Deserialize;

#[derive(Deserialize)]
struct DictionaryFile {
    dictionary: Vec<String>,
}

#[derive(Deserialize)]
struct StopwordFile {
    stopwords: Vec<String>,
}

/// Parse the dictionary JSON envelope: `{ "dictionary": ["word", ...] }`.
pub fn parse_dictionary(json: &str) -> Result<Vec<String>, LoadError> {
    let file: DictionaryFile =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;
    Ok(file.dictionary)
}

/// Parse the stopword JSON envelope: `{ "stopwords": ["word", ...] }`.
pub fn parse_stopwords(json: &str) -> Result<HashSet<String>, LoadError> {
    let file: StopwordFile =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;
    Ok(file.stopwords.into_iter().collect())
}

/// Load the session vocabulary. Loaded once at startup; a failure leaves
/// the dictionary empty and processing disabled until retried.
pub fn load_dictionary(path: &Path) -> Result<Vec<String>, LoadError> {
    let json = std::fs::read_to_string(path)
        .map_err(|_| LoadError::FileNotFound(path.display().to_string()))?;
    parse_dictionary(&json)
}

/// Load the bundled stopword list.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>, LoadError> {
    let json = std::fs::read_to_string(path)
        .map_err(|_| LoadError::FileNotFound(path.display().to_string()))?;
    parse_stopwords(&json)
}
