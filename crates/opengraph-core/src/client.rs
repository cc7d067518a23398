//! Public entry point: fetch a page and return its metadata.

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::extract::{self, ParserOptions};
use crate::fetcher;
use crate::image;
use crate::metadata::MetadataMap;

/// One metadata request. Built with [`FetchRequest::new`] and the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    /// Collect every named meta tag, not only `og:` properties.
    pub all_meta: bool,
    /// Sent as `Accept-Language` when set.
    pub lang: Option<String>,
    pub parser_options: ParserOptions,
    /// Overrides [`FetchConfig::user_agent`] when set.
    pub user_agent: Option<String>,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            all_meta: false,
            lang: None,
            parser_options: ParserOptions::default(),
            user_agent: None,
        }
    }

    pub fn with_all_meta(mut self, all_meta: bool) -> Self {
        self.all_meta = all_meta;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_parser_options(mut self, options: ParserOptions) -> Self {
        self.parser_options = options;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Metadata fetcher. Holds only configuration, so one instance can serve
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct OpenGraph {
    config: FetchConfig,
}

impl OpenGraph {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches `request.url` and extracts its metadata.
    ///
    /// Fails only when the page cannot be retrieved at transport level. An
    /// unreachable `image` is returned as the empty string.
    pub fn fetch(&self, request: &FetchRequest) -> Result<MetadataMap, FetchError> {
        let user_agent = request
            .user_agent
            .as_deref()
            .unwrap_or(&self.config.user_agent);
        let page = fetcher::fetch_html(
            &request.url,
            request.lang.as_deref(),
            user_agent,
            &self.config,
        )?;
        let served_from = page.effective_url.as_deref().unwrap_or(&request.url);
        if served_from != request.url {
            tracing::debug!(url = %request.url, effective_url = %served_from, "followed redirects");
        }
        if !(200..300).contains(&page.status) {
            tracing::debug!(
                url = %request.url,
                effective_url = %served_from,
                status = page.status,
                "extracting from non-2xx response"
            );
        }

        let metadata = self.extract_with_options(&page.body, request.all_meta, &request.parser_options);
        tracing::info!(url = %request.url, entries = metadata.len(), "extracted metadata");
        Ok(metadata)
    }

    /// Extracts metadata from `html` and verifies the `image` entry.
    pub fn extract(&self, html: &str, all_meta: bool) -> MetadataMap {
        self.extract_with_options(html, all_meta, &ParserOptions::default())
    }

    pub fn extract_with_options(
        &self,
        html: &str,
        all_meta: bool,
        options: &ParserOptions,
    ) -> MetadataMap {
        let mut metadata = extract::extract_metadata(html, all_meta, options);
        extract::check_image(&mut metadata, |url| {
            image::verify_image_url(url, &self.config)
        });
        metadata
    }

    /// Checks that `url` answers a GET with HTTP 200.
    pub fn verify_image_url(&self, url: &str) -> bool {
        image::verify_image_url(url, &self.config)
    }
}
