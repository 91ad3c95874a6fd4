pub mod article_reader;
pub mod text_reader;

pub use article_reader::ArticleReader;
pub use text_reader::TextReader;

use crate::error::Result;
use crate::models::Article;
use std::path::Path;

/// Read one document, choosing the reader from the file extension: `.xml` and
/// `.nxml` are articles, anything else is line-per-fragment text.
pub fn read_document(path: &Path, require_document_id: bool) -> Result<Article> {
    let is_xml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("xml") || ext.eq_ignore_ascii_case("nxml"))
        .unwrap_or(false);

    if is_xml {
        ArticleReader::with_require_document_id(require_document_id).read_article(path)
    } else {
        TextReader::new().read_fragments(path)
    }
}
