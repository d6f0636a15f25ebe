use std::collections::HashSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use crawl_extract::{decode_html, normalize_url, tld_hint, PageData, PageExtractor, Url};
use crawl_logging::{crawl_debug, crawl_info};

use crate::cli::{ExtractArgs, NormalizeArgs};

pub fn run_normalize(args: &NormalizeArgs, out: &mut impl Write) -> Result<()> {
    let mut seen = HashSet::new();
    for raw in &args.urls {
        let key = normalize_url(raw).with_context(|| format!("cannot normalize {raw:?}"))?;
        if args.unique && !seen.insert(key.clone()) {
            crawl_debug!("duplicate key {key} for {raw}");
            continue;
        }
        writeln!(out, "{key}")?;
    }
    Ok(())
}

pub fn run_extract(args: &ExtractArgs, out: &mut impl Write) -> Result<()> {
    let page_url =
        Url::parse(&args.url).with_context(|| format!("invalid page url {:?}", args.url))?;
    let bytes = read_input(args.input.as_deref())?;
    let decoded = decode_html(&bytes, args.charset.as_deref(), tld_hint(&page_url))
        .context("cannot decode document")?;
    crawl_info!(
        "extracting {} ({} bytes, {})",
        page_url,
        bytes.len(),
        decoded.encoding_label
    );

    let extractor = PageExtractor::with_settings(args.settings());
    let data = extractor
        .page_data(&decoded.html, &page_url)
        .with_context(|| format!("cannot extract {page_url}"))?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &data)?;
        writeln!(out)?;
    } else {
        write_text(&data, out)?;
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("cannot read stdin")?;
            Ok(bytes)
        }
    }
}

fn write_text(data: &PageData, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "url: {}", data.url)?;
    writeln!(out, "heading: {}", data.heading)?;
    writeln!(out, "first_paragraph: {}", data.first_paragraph)?;
    writeln!(out, "links:")?;
    for link in &data.outgoing_links {
        writeln!(out, "  {link}")?;
    }
    writeln!(out, "images:")?;
    for image in &data.image_urls {
        writeln!(out, "  {image}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract_args(url: &str, input: &Path) -> ExtractArgs {
        ExtractArgs {
            url: url.to_string(),
            input: Some(input.to_path_buf()),
            charset: None,
            json: false,
            strict: false,
            max_bytes: crawl_extract::DEFAULT_MAX_DOCUMENT_BYTES,
            max_urls: None,
        }
    }

    #[test]
    fn normalize_prints_one_key_per_url() {
        let args = NormalizeArgs {
            urls: vec![
                "https://BLOG.Boot.Dev/Path/".to_string(),
                "https://blog.boot.dev".to_string(),
            ],
            unique: false,
        };
        let mut out = Vec::new();
        run_normalize(&args, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "blog.boot.dev/Path\nblog.boot.dev\n"
        );
    }

    #[test]
    fn normalize_unique_suppresses_repeated_keys() {
        let args = NormalizeArgs {
            urls: vec![
                "https://blog.boot.dev/path".to_string(),
                "http://BLOG.boot.dev/path/".to_string(),
                "https://blog.boot.dev/other".to_string(),
            ],
            unique: true,
        };
        let mut out = Vec::new();
        run_normalize(&args, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "blog.boot.dev/path\nblog.boot.dev/other\n"
        );
    }

    #[test]
    fn normalize_reports_invalid_url() {
        let args = NormalizeArgs {
            urls: vec!["not a url".to_string()],
            unique: false,
        };
        let err = run_normalize(&args, &mut io::sink()).unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn extract_prints_text_summary_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(
            &path,
            r#"<h1>Title</h1><main><p>Lead</p><a href="/a">a</a><img src="i.png"></main>"#,
        )
        .unwrap();

        let mut out = Vec::new();
        run_extract(&extract_args("https://blog.boot.dev/posts/", &path), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "url: https://blog.boot.dev/posts/\n\
             heading: Title\n\
             first_paragraph: Lead\n\
             links:\n  https://blog.boot.dev/a\n\
             images:\n  https://blog.boot.dev/posts/i.png\n"
        );
    }

    #[test]
    fn extract_prints_json_with_charset_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        fs::write(&path, b"<h1>caf\xe9</h1>").unwrap();

        let mut args = extract_args("https://example.fr/", &path);
        args.json = true;
        args.charset = Some("iso-8859-1".to_string());
        let mut out: Vec<u8> = Vec::new();
        run_extract(&args, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["heading"], "café");
        assert_eq!(value["outgoing_links"], serde_json::json!([]));
    }

    #[test]
    fn extract_fails_on_invalid_page_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<p>x</p>").unwrap();
        let err = run_extract(&extract_args("relative/path", &path), &mut io::sink()).unwrap_err();
        assert!(err.to_string().contains("invalid page url"));
    }

    #[test]
    fn extract_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.html");
        let args = extract_args("https://a.test/", &path);
        let err = run_extract(&args, &mut io::sink()).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
