use crate::error::Result;
use crate::models::Article;
use crate::utils::encoding::decode_document;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Reads plain-text documents: one fragment per non-empty line, document id
/// taken from the file name.
pub struct TextReader;

impl TextReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_fragments(&self, path: &Path) -> Result<Article> {
        let bytes = fs::read(path)?;
        let decoded = decode_document(&bytes);
        if decoded.had_errors {
            warn!(
                "{}: malformed {} sequences replaced during decoding",
                path.display(),
                decoded.encoding
            );
        }

        let document_id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Article::new(document_id, path).with_fragments(Self::split_fragments(&decoded.text)))
    }

    pub fn split_fragments(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for TextReader {
    fn default() -> Self {
        Self::new()
    }
}
