//! Image URL existence check.
//!
//! Encodes the URL path, rejects malformed URLs without touching the network,
//! then issues a full GET with the curl crate and accepts only HTTP 200.

mod encode;

pub use encode::{encode_url_path, is_well_formed};

use crate::config::FetchConfig;
use curl::easy::Easy;

/// Returns true if `url` (after path encoding) answers a GET with status 200.
///
/// Never fails: malformed URLs and transport errors yield `false`, with the
/// cause logged.
pub fn verify_image_url(url: &str, cfg: &FetchConfig) -> bool {
    let encoded = encode_url_path(url);
    if !is_well_formed(&encoded) {
        tracing::debug!(url = %url, "image url is not a valid http(s) url");
        return false;
    }

    match image_status(&encoded, cfg) {
        Ok(200) => true,
        Ok(code) => {
            tracing::debug!(url = %encoded, code, "image url returned non-200");
            false
        }
        Err(e) => {
            tracing::error!(url = %encoded, code = e.code(), "image check failed: {}", e);
            false
        }
    }
}

/// GETs `url`, discarding the body, and returns the final status code.
fn image_status(url: &str, cfg: &FetchConfig) -> Result<u32, curl::Error> {
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(cfg.image_max_redirects)?;
    easy.ssl_verify_peer(cfg.verify_image_tls)?;
    easy.ssl_verify_host(cfg.verify_image_tls)?;
    easy.timeout(cfg.image_timeout())?;
    easy.useragent(&cfg.user_agent)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    easy.response_code()
}
