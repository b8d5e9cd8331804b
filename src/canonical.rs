//! Canonical URL comparison.
//!
//! Rules:
//! - absolute `http`/`https` URLs are normalized: scheme and host lowercased,
//!   default port dropped, query and fragment dropped, path ends with `/`
//! - anything else is read as a bare path: query and fragment dropped,
//!   leading and trailing `/` enforced
//! - two absolute URLs compare by normalized form; if either side is a bare
//!   path, only paths are compared

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum CanonicalUrlError {
    #[error("Invalid URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("Not an absolute http(s) URL: {0}")]
    NotAbsolute(String),
}

fn parse_absolute(raw: &str) -> Option<Url> {
    Url::parse(raw.trim())
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Normalized absolute form of `raw`.
pub fn normalize(raw: &str) -> Result<String, CanonicalUrlError> {
    let mut url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(CanonicalUrlError::NotAbsolute(raw.to_string()));
    }
    url.set_query(None);
    url.set_fragment(None);
    let path = with_trailing_slash(url.path());
    url.set_path(&path);
    Ok(url.to_string())
}

/// Normalized path of an absolute URL or a bare path.
pub fn path_of(raw: &str) -> String {
    if let Some(url) = parse_absolute(raw) {
        return with_trailing_slash(url.path());
    }

    let raw = raw.trim();
    let end = raw.find(|c: char| c == '?' || c == '#').unwrap_or(raw.len());
    let path = &raw[..end];
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    with_trailing_slash(&path)
}

/// Whether `canonical` points at the page identified by `current`.
pub fn is_self_referential(canonical: &str, current: &str) -> bool {
    match (normalize(canonical), normalize(current)) {
        (Ok(a), Ok(b)) => a == b,
        _ => path_of(canonical) == path_of(current),
    }
}
