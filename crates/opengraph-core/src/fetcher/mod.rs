//! HTTP GET of the page to extract metadata from.
//!
//! Uses the curl crate (libcurl) with the browser-like `Accept` header set,
//! redirect following and a total timeout. HTTP error statuses are returned to
//! the caller like any other response; only transport failures are errors.

mod headers;

use crate::config::FetchConfig;
use crate::error::{FetchError, TransferInfo};
use curl::easy::{Easy, HttpVersion, List};

/// Response of the page request.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final HTTP status (after redirects).
    pub status: u32,
    /// URL the body was served from, after redirects.
    pub effective_url: Option<String>,
    /// Response body, decoded as UTF-8 with invalid sequences replaced.
    pub body: String,
}

/// Performs the GET request and returns the body.
///
/// Runs in the current thread and blocks until the response completes or
/// `cfg.timeout_secs` elapses.
pub fn fetch_html(
    url: &str,
    lang: Option<&str>,
    user_agent: &str,
    cfg: &FetchConfig,
) -> Result<FetchedPage, FetchError> {
    let mut easy = Easy::new();
    let mut body: Vec<u8> = Vec::new();

    let outcome = configure(&mut easy, url, lang, user_agent, cfg).and_then(|()| {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    });

    if let Err(e) = outcome {
        let info = TransferInfo::from_easy(&mut easy);
        tracing::warn!(url = %url, code = e.code(), %info, "page fetch failed: {}", e);
        return Err(FetchError::new(url, e, info));
    }

    let status = easy.response_code().unwrap_or(0);
    let effective_url = easy.effective_url().ok().flatten().map(str::to_string);
    tracing::debug!(
        url = %url,
        status,
        bytes = body.len(),
        "fetched page"
    );

    Ok(FetchedPage {
        status,
        effective_url,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn configure(
    easy: &mut Easy,
    url: &str,
    lang: Option<&str>,
    user_agent: &str,
    cfg: &FetchConfig,
) -> Result<(), curl::Error> {
    easy.url(url)?;
    easy.get(true)?;
    easy.fail_on_error(false)?;
    easy.follow_location(true)?;
    easy.max_redirections(cfg.max_redirects)?;
    easy.ssl_verify_peer(cfg.verify_tls)?;
    easy.ssl_verify_host(cfg.verify_tls)?;
    // Empty string asks for every encoding libcurl can decode.
    easy.accept_encoding("")?;
    easy.timeout(cfg.timeout())?;
    easy.http_version(HttpVersion::V11)?;

    let mut list = List::new();
    for line in headers::request_headers(lang, user_agent) {
        list.append(&line)?;
    }
    easy.http_headers(list)?;
    Ok(())
}
