//! `opengraph fetch <url>` – print a page's metadata as JSON.

use anyhow::{Context, Result};
use clap::Args;
use opengraph_core::extract::ParserOptions;
use opengraph_core::{FetchRequest, OpenGraph};

#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Page URL.
    pub url: String,

    /// Collect every named meta tag, not only og: properties.
    #[arg(long)]
    pub all_meta: bool,

    /// Accept-Language value sent with the request.
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// User-Agent sent with the request (default from config).
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Log HTML parser diagnostics instead of suppressing them.
    #[arg(long)]
    pub report_parse_errors: bool,
}

impl FetchArgs {
    pub fn to_request(&self) -> FetchRequest {
        let mut request = FetchRequest::new(&self.url).with_all_meta(self.all_meta);
        if let Some(lang) = &self.lang {
            request = request.with_lang(lang);
        }
        if let Some(ua) = &self.user_agent {
            request = request.with_user_agent(ua);
        }
        if self.report_parse_errors {
            request = request.with_parser_options(ParserOptions::report_all());
        }
        request
    }
}

pub fn run_fetch(og: &OpenGraph, args: &FetchArgs) -> Result<i32> {
    let metadata = og.fetch(&args.to_request())?;
    let json = serde_json::to_string_pretty(&metadata).context("serialize metadata")?;
    println!("{}", json);
    Ok(0)
}
