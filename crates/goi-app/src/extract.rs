use std::path::Path;

use goi_core::error::ExtractError;

/// Opaque file-to-text seam. The PDF decoder sits behind this trait so the
/// pipeline and its tests never touch binary decoding.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Reads the file as UTF-8 text. Stands in for the PDF decoder in tests and
/// handles plain-text uploads directly.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path)?;
        String::from_utf8(bytes).map_err(|e| ExtractError::DecodeError(e.to_string()))
    }
}
