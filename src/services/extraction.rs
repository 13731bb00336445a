use crate::error::EngineError;

const UTF8_BOM: char = '\u{feff}';

/// Turns an uploaded document into plain text
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, EngineError>;
}

/// Extractor for documents that are already plain UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, EngineError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| EngineError::UnreadableDocument(format!("not valid UTF-8 text: {}", e)))?;

        if text.contains('\0') {
            return Err(EngineError::UnreadableDocument(
                "binary content is not supported".to_string(),
            ));
        }

        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
    }
}
