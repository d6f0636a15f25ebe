use serde::Serialize;

pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSettings {
    /// Documents longer than this (in bytes of UTF-8) are rejected before parsing.
    pub max_document_bytes: usize,
    /// Reject documents for which the HTML5 parser had to recover from markup errors.
    pub strict_markup: bool,
    /// Upper bound on URLs collected per link/image query; `None` keeps all of them.
    pub max_urls: Option<usize>,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            strict_markup: false,
            max_urls: None,
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("document too large (max {max_bytes} bytes, actual {actual})")]
    DocumentTooLarge { max_bytes: usize, actual: usize },
    #[error("markup errors in strict mode: {}", .errors.join("; "))]
    Markup { errors: Vec<String> },
}

/// Everything the extractor knows about one page, gathered from a single parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    pub url: String,
    pub heading: String,
    pub first_paragraph: String,
    pub outgoing_links: Vec<String>,
    pub image_urls: Vec<String>,
}
