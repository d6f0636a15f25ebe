//! Crawl extraction: HTML content queries and canonical URL keys.
mod decode;
mod document;
mod extract;
mod normalize;
mod reference;
mod resolve;
mod types;

pub use decode::{decode_html, tld_hint, DecodeError, DecodedHtml};
pub use extract::{
    extract_heading, extract_images, extract_lead_paragraph, extract_links, PageExtractor,
};
pub use normalize::{normalize_url, normalize_url_parsed, NormalizeError};
pub use resolve::resolve_reference;
pub use types::{ExtractError, ExtractSettings, PageData, DEFAULT_MAX_DOCUMENT_BYTES};

pub use url::Url;
