use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown charset label {label:?}")]
    UnknownCharset { label: String },
    #[error("failed to decode bytes with {encoding}: malformed byte sequence")]
    DecodeFailure { encoding: String },
}

/// Decode raw document bytes into UTF-8.
///
/// Order of precedence: byte order mark, then the caller's `charset` label,
/// then chardetng detection (hinted with the page's top-level domain).
pub fn decode_html(
    bytes: &[u8],
    charset: Option<&str>,
    tld: Option<&str>,
) -> Result<DecodedHtml, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = charset {
        let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            DecodeError::UnknownCharset {
                label: label.to_string(),
            }
        })?;
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(tld.map(str::as_bytes), true);
    crawl_logging::crawl_debug!("detected document encoding {}", encoding.name());
    decode_with(bytes, encoding)
}

/// Top-level domain of `url`'s host, for use as a detection hint.
pub fn tld_hint(url: &Url) -> Option<&str> {
    url.domain()
        .and_then(|domain| domain.rsplit('.').next())
        .filter(|label| {
            // chardetng only accepts lower-case ASCII labels.
            !label.is_empty()
                && label
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedHtml, DecodeError> {
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: used.name().to_string(),
        });
    }
    Ok(DecodedHtml {
        html: text.into_owned(),
        encoding_label: used.name().to_string(),
    })
}
