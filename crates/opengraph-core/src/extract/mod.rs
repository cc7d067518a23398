//! `<meta>` tag extraction.
//!
//! Parses HTML leniently with `scraper` (html5ever), walks every `meta`
//! element in document order and builds a [`MetadataMap`].

mod rule;

use crate::metadata::MetadataMap;
use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

/// Declaration prepended to every document so it is always read as UTF-8.
pub const ENCODING_DECLARATION: &str = r#"<?xml encoding="utf-8" ?>"#;

/// Key of the entry whose URL is checked for reachability.
pub const IMAGE_KEY: &str = "image";

/// Controls what happens with parser diagnostics. Malformed markup never fails
/// extraction; diagnostics are only logged when neither flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Suppress parser warnings.
    pub no_warning: bool,
    /// Suppress recoverable parser errors.
    pub no_error: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            no_warning: true,
            no_error: true,
        }
    }
}

impl ParserOptions {
    /// Options that log every parser diagnostic.
    pub fn report_all() -> Self {
        Self {
            no_warning: false,
            no_error: false,
        }
    }

    pub fn reports_diagnostics(&self) -> bool {
        !self.no_warning && !self.no_error
    }
}

/// Parses `html` and collects metadata from its `meta` tags.
///
/// Does not touch the network: the `image` entry is returned as found. See
/// [`crate::OpenGraph::extract`] for the variant that verifies it.
pub fn extract_metadata(html: &str, all_meta: bool, options: &ParserOptions) -> MetadataMap {
    let mut source = String::with_capacity(ENCODING_DECLARATION.len() + html.len());
    source.push_str(ENCODING_DECLARATION);
    source.push_str(html);

    let document = parse_document(source);
    if options.reports_diagnostics() {
        for diagnostic in &document.errors {
            tracing::warn!("html parse: {}", diagnostic);
        }
    }

    let mut metadata = MetadataMap::new();
    for el in meta_elements(&document) {
        let tag = el.value();
        let key = rule::meta_key(tag, all_meta);
        let value = key.as_ref().map(|_| rule::meta_value(tag));
        if let (Some(key), Some(value)) = (key, value) {
            metadata.insert(key, value);
        }
    }
    metadata
}

/// Replaces the `image` entry with the empty string when `verify` rejects it.
pub fn check_image<F>(metadata: &mut MetadataMap, verify: F)
where
    F: FnOnce(&str) -> bool,
{
    if let Some(image) = metadata.get_mut(IMAGE_KEY) {
        if !verify(image.as_str()) {
            tracing::debug!(image = %image, "dropping unreachable image");
            image.clear();
        }
    }
}

/// Parses with scripting disabled so `<noscript>` children are real elements
/// rather than raw text.
fn parse_document(source: String) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(Html::new_document(), opts).one(source)
}

fn meta_elements(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case("meta"))
}
