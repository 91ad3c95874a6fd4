use crate::error::{ExtractError, Result};
use crate::models::Article;
use crate::utils::encoding::decode_document;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads JATS-style article XML into plain-text fragments.
pub struct ArticleReader {
    require_document_id: bool,
}

/// An `<article-id>` element seen while reading.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ArticleId {
    id_type: Option<String>,
    value: String,
}

impl ArticleReader {
    pub fn new() -> Self {
        Self {
            require_document_id: false,
        }
    }

    pub fn with_require_document_id(require_document_id: bool) -> Self {
        Self {
            require_document_id,
        }
    }

    /// List article files in `dir` with the given extension, sorted by name.
    pub fn find_articles(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(ExtractError::InvalidInput(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case(extension))
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();

        debug!("Found {} .{} files in {}", paths.len(), extension, dir.display());
        Ok(paths)
    }

    /// Read one article file.
    pub fn read_article(&self, path: &Path) -> Result<Article> {
        let bytes = fs::read(path)?;
        let decoded = decode_document(&bytes);
        if decoded.had_errors {
            warn!(
                "{}: malformed {} sequences replaced during decoding",
                path.display(),
                decoded.encoding
            );
        }
        self.parse_article(&decoded.text, path)
    }

    /// Parse article XML already decoded to text.
    pub fn parse_article(&self, xml: &str, path: &Path) -> Result<Article> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        reader.check_end_names(false);

        let mut all_fragments = Vec::new();
        let mut article_fragments = Vec::new();
        let mut article_ids = Vec::new();
        let mut article_depth = 0usize;
        let mut seen_article = false;
        let mut current_id: Option<ArticleId> = None;

        loop {
            let text = match reader.read_event() {
                Ok(Event::Start(e)) => {
                    match e.local_name().as_ref() {
                        b"article" => {
                            article_depth += 1;
                            seen_article = true;
                        }
                        b"article-id" => {
                            current_id = Some(ArticleId {
                                id_type: id_type(&e),
                                value: String::new(),
                            });
                        }
                        _ => {}
                    }
                    continue;
                }
                Ok(Event::End(e)) => {
                    match e.local_name().as_ref() {
                        b"article" => article_depth = article_depth.saturating_sub(1),
                        b"article-id" => {
                            if let Some(id) = current_id.take() {
                                article_ids.push(id);
                            }
                        }
                        _ => {}
                    }
                    continue;
                }
                Ok(Event::Text(e)) => match e.unescape() {
                    Ok(text) => text.into_owned(),
                    Err(_) => String::from_utf8_lossy(&e).into_owned(),
                },
                Ok(Event::CData(e)) => String::from_utf8_lossy(&e).into_owned(),
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractError::Xml {
                        path: path.display().to_string(),
                        message: format!(
                            "error at position {}: {}",
                            reader.buffer_position(),
                            e
                        ),
                    })
                }
                _ => continue,
            };

            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            if let Some(id) = current_id.as_mut() {
                id.value.push_str(text);
            }
            if article_depth > 0 {
                article_fragments.push(text.to_string());
            }
            all_fragments.push(text.to_string());
        }

        let fragments = if seen_article {
            article_fragments
        } else {
            all_fragments
        };
        let document_id = self.document_id(&article_ids, path)?;
        debug!(
            "{}: document id {}, {} fragments",
            path.display(),
            document_id,
            fragments.len()
        );

        Ok(Article::new(document_id, path).with_fragments(fragments))
    }

    /// Prefer the DOI-typed id, then the second id (publisher layouts put
    /// the DOI there), then the first, then the file stem.
    fn document_id(&self, ids: &[ArticleId], path: &Path) -> Result<String> {
        let chosen = ids
            .iter()
            .find(|id| {
                id.id_type
                    .as_deref()
                    .map(|t| t.eq_ignore_ascii_case("doi"))
                    .unwrap_or(false)
            })
            .or_else(|| ids.get(1))
            .or_else(|| ids.first())
            .filter(|id| !id.value.is_empty());

        if let Some(id) = chosen {
            return Ok(id.value.clone());
        }
        if self.require_document_id {
            return Err(ExtractError::MissingDocumentId(path.display().to_string()));
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        warn!(
            "{}: no article-id found, using file name as document id",
            path.display()
        );
        Ok(stem)
    }
}

fn id_type(element: &BytesStart<'_>) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"pub-id-type")
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

impl Default for ArticleReader {
    fn default() -> Self {
        Self::new()
    }
}
