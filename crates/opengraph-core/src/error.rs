//! Error type for the primary page fetch.

use std::fmt;
use std::time::Duration;

/// Response metadata libcurl had collected when a transfer stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferInfo {
    /// Last HTTP status received, 0 if none.
    pub response_code: u32,
    /// URL of the last request made (after redirects), if known.
    pub effective_url: Option<String>,
    /// Number of redirects followed before the failure.
    pub redirect_count: u32,
    /// Total time spent on the transfer.
    pub total_time: Duration,
}

impl TransferInfo {
    pub(crate) fn from_easy(easy: &mut curl::easy::Easy) -> Self {
        Self {
            response_code: easy.response_code().unwrap_or(0),
            effective_url: easy.effective_url().ok().flatten().map(str::to_string),
            redirect_count: easy.redirect_count().unwrap_or(0),
            total_time: easy.total_time().unwrap_or_default(),
        }
    }
}

impl fmt::Display for TransferInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status={} redirects={} elapsed={:.3}s",
            self.response_code,
            self.redirect_count,
            self.total_time.as_secs_f64()
        )?;
        if let Some(url) = &self.effective_url {
            write!(f, " url={}", url)?;
        }
        Ok(())
    }
}

/// Transport-level failure fetching the primary page (DNS, connect, TLS, timeout,
/// redirect limit, malformed URL). HTTP error statuses are not failures.
#[derive(Debug, thiserror::Error)]
#[error("fetch {url} failed (curl {code}): {message}")]
pub struct FetchError {
    /// URL the caller asked for.
    pub url: String,
    /// libcurl error code (`CURLcode`).
    pub code: u32,
    /// libcurl's description of the error, including extra detail when present.
    pub message: String,
    /// Whatever response metadata was available when the transfer stopped.
    pub info: TransferInfo,
    #[source]
    source: curl::Error,
}

impl FetchError {
    pub(crate) fn new(url: &str, source: curl::Error, info: TransferInfo) -> Self {
        let message = match source.extra_description() {
            Some(extra) => format!("{}: {}", source.description(), extra),
            None => source.description().to_string(),
        };
        Self {
            url: url.to_string(),
            code: source.code() as u32,
            message,
            info,
            source,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.source.is_operation_timedout()
    }

    /// True for DNS and connect failures.
    pub fn is_connection(&self) -> bool {
        self.source.is_couldnt_connect()
            || self.source.is_couldnt_resolve_host()
            || self.source.is_couldnt_resolve_proxy()
    }

    pub fn is_too_many_redirects(&self) -> bool {
        self.source.is_too_many_redirects()
    }

    pub fn curl_error(&self) -> &curl::Error {
        &self.source
    }
}
