use url::Url;

use crate::reference::{remove_dot_segments, ReferenceParts};

/// Resolve an attribute value against `base` using RFC 3986 reference resolution.
///
/// References that carry their own scheme or authority keep their spelling:
/// only the scheme is lower-cased and dot segments are removed, so
/// `https://Example.COM` comes back as written. Relative references (path-only,
/// path+query) are merged with the base. Returns `None` when the value cannot
/// be parsed as a URL reference.
pub fn resolve_reference(reference: &str, base: &Url) -> Option<String> {
    let reference = reference.trim_matches(|c: char| c <= ' ');
    let resolved = match base.join(reference) {
        Ok(url) => url,
        Err(err) => {
            crawl_logging::crawl_debug!("skipping unresolvable reference {reference:?}: {err}");
            return None;
        }
    };

    let parts = ReferenceParts::split(reference);
    if parts.scheme.is_none() && parts.authority.is_none() {
        return Some(resolved.into());
    }

    let scheme = parts
        .scheme
        .map_or_else(|| resolved.scheme().to_string(), str::to_ascii_lowercase);
    let mut absolute = format!("{scheme}:");
    if let Some(authority) = parts.authority {
        absolute.push_str("//");
        absolute.push_str(authority);
    }
    absolute.push_str(&remove_dot_segments(parts.path));
    if let Some(query) = parts.query {
        absolute.push('?');
        absolute.push_str(query);
    }
    if let Some(fragment) = parts.fragment {
        absolute.push('#');
        absolute.push_str(fragment);
    }
    Some(absolute)
}
