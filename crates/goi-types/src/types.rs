use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Lookup language for the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English -> Japanese (raw-text endpoint)
    Ja,
    /// English definitions (JSON endpoint)
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }
}

/// Where the next extraction run reads its text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    PastedText,
    PdfFile,
}

/// One piece of a lookup result, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Definition {
    /// A plain sense/translation string.
    Sense(String),
    /// A part-of-speech header grouping the senses that follow it.
    PartOfSpeech(String),
    /// A sense carrying a usage example.
    SenseWithExample { sense: String, example: String },
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definition::Sense(s) => write!(f, "{s}"),
            Definition::PartOfSpeech(pos) => write!(f, "**{pos}**"),
            Definition::SenseWithExample { sense, example } => {
                write!(f, "{sense}\n   e.g., \"{example}\"")
            }
        }
    }
}

/// Outcome of a single provider fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Vec<Definition>),
    NotFound,
}

/// Which query string finally produced definitions for a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchedAs {
    /// The literal word matched; no fallback needed.
    Original,
    /// A morphological variant matched.
    Variant(String),
    /// Neither the word nor any variant had an entry.
    Nothing,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    SetPastedText(String),
    SelectFile(PathBuf),
    SetInputMode(InputMode),
    SetLanguage(Language),
    /// Run extraction on the current input.
    Process,
    /// Open or close a word's definition panel.
    ToggleLookup(String),
    ShowResults(Vec<DisplayRow>),
    LookupResolved { word: String },
    ExtractionFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub word: String,
    pub count: u64,
}
