use url::Url;

use crate::reference::ReferenceParts;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid url {input:?}: {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },
    #[error("url {input:?} has no host to build a key from")]
    MissingHost { input: String },
}

/// Canonical comparison key for a URL: lowercase host plus path, without
/// scheme, credentials, query, fragment or a trailing slash.
///
/// `https://BLOG.Boot.Dev/Path/` and `http://blog.boot.dev/Path?x=1` both map
/// to `blog.boot.dev/Path`. Host and path are taken as written: path case,
/// explicit ports (default ones included), dot segments, duplicate slashes and
/// percent-encoding all survive. Only one trailing slash is removed. URLs
/// without an authority (`mailto:`, `data:`) are rejected.
pub fn normalize_url(input: &str) -> Result<String, NormalizeError> {
    Url::parse(input).map_err(|source| NormalizeError::InvalidUrl {
        input: input.to_string(),
        source,
    })?;
    key_for(input.trim_matches(|c: char| c <= ' '))
}

/// [`normalize_url`] for a URL that is already parsed.
///
/// The key is built from `Url`'s serialization, which has already dropped
/// default ports and dot segments.
pub fn normalize_url_parsed(url: &Url) -> Result<String, NormalizeError> {
    key_for(url.as_str())
}

fn key_for(input: &str) -> Result<String, NormalizeError> {
    let parts = ReferenceParts::split(input);
    let host = parts
        .host_port()
        .ok_or_else(|| NormalizeError::MissingHost {
            input: input.to_string(),
        })?
        .to_lowercase();
    let host = host.strip_suffix('/').unwrap_or(&host);
    let path = parts.path.strip_suffix('/').unwrap_or(parts.path);
    Ok(format!("{host}{path}"))
}
