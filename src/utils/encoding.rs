use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;

/// Bytes read from disk, decoded to text.
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode document bytes.
///
/// A byte-order mark wins, then an XML declaration's `encoding="..."`,
/// then UTF-8.
pub fn decode_document(bytes: &[u8]) -> DecodedText {
    let fallback = declared_encoding(bytes).unwrap_or(UTF_8);
    let (text, encoding, had_errors) = fallback.decode(bytes);
    DecodedText {
        text: match text {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => s,
        },
        encoding: encoding.name(),
        had_errors,
    }
}

/// Encoding named in an `<?xml ... encoding="..."?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(256)];
    let head = String::from_utf8_lossy(head);
    let declaration = head.strip_prefix("<?xml")?;
    let declaration = &declaration[..declaration.find("?>")?];
    let value = declaration.split("encoding").nth(1)?;
    let value = value.trim_start().strip_prefix('=')?.trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let label = value[1..].split(quote).next()?;
    Encoding::for_label(label.trim().as_bytes())
}
