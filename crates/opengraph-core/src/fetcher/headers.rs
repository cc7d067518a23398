//! Request header lines for the page fetch.

pub(crate) const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Builds the `Name: value` header lines sent with the page request.
/// `Accept-Language` is only added when a non-empty language hint is given.
pub(crate) fn request_headers(lang: Option<&str>, user_agent: &str) -> Vec<String> {
    let mut headers = vec![
        format!("Accept: {}", ACCEPT),
        "Cache-Control: no-cache".to_string(),
        format!("User-Agent: {}", user_agent.trim()),
    ];
    if let Some(lang) = lang.map(str::trim).filter(|l| !l.is_empty()) {
        headers.push(format!("Accept-Language: {}", lang));
    }
    headers
}
