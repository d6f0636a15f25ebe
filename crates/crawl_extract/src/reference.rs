//! Raw RFC 3986 component split, without the WHATWG canonicalization `Url` applies.

use std::sync::LazyLock;

use regex::Regex;

// RFC 3986, appendix B.
const URI_REFERENCE_PATTERN: &str =
    r"(?s)^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$";

static URI_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(URI_REFERENCE_PATTERN)
        .expect("RFC 3986 reference pattern should always compile - this is a programming error")
});

/// Components of a URI reference exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReferenceParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> ReferenceParts<'a> {
    pub(crate) fn split(reference: &'a str) -> Self {
        // The pattern matches every string, so a miss only happens on a
        // regex engine limit; treat the whole input as a path then.
        let Some(caps) = URI_REFERENCE.captures(reference) else {
            return Self {
                scheme: None,
                authority: None,
                path: reference,
                query: None,
                fragment: None,
            };
        };
        let group = |i: usize| caps.get(i).map(|m| m.as_str());
        Self {
            scheme: group(1),
            authority: group(2),
            path: group(3).unwrap_or_default(),
            query: group(4),
            fragment: group(5),
        }
    }

    /// Host and port of the authority, without user-info.
    pub(crate) fn host_port(&self) -> Option<&'a str> {
        self.authority
            .map(|authority| authority.rsplit_once('@').map_or(authority, |(_, host)| host))
    }
}

/// RFC 3986 section 5.2.4.
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output: Vec<&str> = Vec::new();

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            output.pop();
        } else if input == "/.." {
            input = "/";
            output.pop();
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // Move the first segment, with its leading '/', to the output.
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| i + start);
            output.push(&input[..end]);
            input = &input[end..];
        }
    }

    output.concat()
}
