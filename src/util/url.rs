//! Query-string helpers shared by every loader and poller.
//!
//! Server URLs arrive from `data-*` attributes and may or may not already
//! carry a query string, so every extension goes through [`with_query`].

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Query flag asking the server for the inner fragment only.
pub const ONLY_CONTENT_PARAM: &str = "only_content";

/// Append `key=value`, choosing `?` or `&` depending on the existing URL.
pub fn with_query(url: &str, key: &str, value: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{key}={}", urlencoding::encode(value))
}

/// Append the content-only flag used for fullscreen bodies and page reloads.
pub fn only_content(url: &str) -> String {
    with_query(url, ONLY_CONTENT_PARAM, "true")
}

/// Join a path segment onto a URL, keeping any query string after it.
pub fn with_segment(url: &str, segment: &str) -> String {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };
    let mut joined = format!("{}/{}", path.trim_end_matches('/'), urlencoding::encode(segment));
    if let Some(query) = query {
        joined.push('?');
        joined.push_str(query);
    }
    joined
}
