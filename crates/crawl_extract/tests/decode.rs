use crawl_extract::{decode_html, tld_hint, DecodeError, Url};
use pretty_assertions::assert_eq;

#[test]
fn decode_respects_explicit_charset() {
    let bytes = b"caf\xe9"; // iso-8859-1
    let decoded = decode_html(bytes, Some("ISO-8859-1"), None).unwrap();
    assert_eq!(decoded.html, "café");
    assert!(decoded.encoding_label.eq_ignore_ascii_case("windows-1252"));
}

#[test]
fn bom_wins_over_explicit_charset() {
    let bytes = b"\xEF\xBB\xBFhello";
    let decoded = decode_html(bytes, Some("ISO-8859-1"), None).unwrap();
    assert_eq!(decoded.html, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn unknown_charset_label_is_an_error() {
    let err = decode_html(b"hello", Some("klingon"), None).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownCharset {
            label: "klingon".to_string()
        }
    );
}

#[test]
fn malformed_utf8_is_an_error() {
    let err = decode_html(b"\xEF\xBB\xBFok\xFF", None, None).unwrap_err();
    assert_eq!(
        err,
        DecodeError::DecodeFailure {
            encoding: "UTF-8".to_string()
        }
    );
}

#[test]
fn detection_handles_plain_utf8() {
    let html = "<p>naïve café</p>";
    let decoded = decode_html(html.as_bytes(), None, Some("dev")).unwrap();
    assert_eq!(decoded.html, html);
}

#[test]
fn tld_hint_uses_last_domain_label() {
    let url = Url::parse("https://blog.boot.dev/posts/").unwrap();
    assert_eq!(tld_hint(&url), Some("dev"));

    let ip = Url::parse("http://127.0.0.1/").unwrap();
    assert_eq!(tld_hint(&ip), None);
}
