//! PDF text extraction.
//!
//! Stateless: bytes in, text out. Only a buffer that does not load as a PDF
//! at all is an error; a page whose text cannot be decoded contributes an
//! empty line and extraction carries on.

use lopdf::Document;
use tracing::{debug, warn};

use crate::DocumentError;

/// Extracts visible text, one line per page in page order, with the tokens
/// of each page joined by single spaces.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    if bytes.is_empty() {
        return Err(DocumentError::new("empty buffer"));
    }

    let document = Document::load_mem(bytes)
        .map_err(|error| DocumentError::new(format!("not a PDF document: {error}")))?;

    let pages = document.get_pages();
    debug!(pages = pages.len(), "extracting bulletin text");

    let mut lines = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let raw = match document.extract_text(&[*page_number]) {
            Ok(text) => text,
            Err(error) => {
                warn!(page = *page_number, %error, "page text unreadable, skipping");
                String::new()
            }
        };
        lines.push(join_tokens(&raw));
    }

    Ok(lines.join("\n"))
}

fn join_tokens(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
