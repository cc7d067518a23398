//! Path-segment encoding and well-formedness check for image URLs.

use std::borrow::Cow;
use url::Url;

/// Byte range of the raw (undecoded) path component of `url`.
fn path_span(url: &str) -> (usize, usize) {
    let authority_start = match url.find("://") {
        Some(i) => Some(i + 3),
        None if url.starts_with("//") => Some(2),
        None => None,
    };
    let start = match authority_start {
        // An authority followed directly by `?` or `#` has an empty path.
        Some(a) => url[a..].find(['/', '?', '#']).map_or(url.len(), |i| a + i),
        None => 0,
    };
    let end = url[start..]
        .find(['?', '#'])
        .map_or(url.len(), |i| start + i);
    (start, end)
}

fn encode_segment(segment: &str) -> Cow<'_, str> {
    // Decode first so segments that are already escaped are not escaped twice.
    match urlencoding::decode(segment) {
        Ok(decoded) => Cow::Owned(urlencoding::encode(&decoded).into_owned()),
        Err(_) => urlencoding::encode(segment),
    }
}

/// Percent-encodes every `/`-delimited segment of the URL path, leaving the
/// scheme, authority, query and fragment untouched.
///
/// # Examples
///
/// - `"https://cdn.example.com/img/my photo.jpg"` → `"https://cdn.example.com/img/my%20photo.jpg"`
/// - `"https://cdn.example.com/a%20b.png?w=10"` → unchanged
pub fn encode_url_path(url: &str) -> String {
    let (start, end) = path_span(url);
    let path = &url[start..end];
    let encoded: Vec<Cow<'_, str>> = path.split('/').map(encode_segment).collect();

    let mut out = String::with_capacity(url.len() + 16);
    out.push_str(&url[..start]);
    out.push_str(&encoded.join("/"));
    out.push_str(&url[end..]);
    out
}

/// True if `url` is an absolute http(s) URL with a host.
pub fn is_well_formed(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.has_host(),
        Err(_) => false,
    }
}
