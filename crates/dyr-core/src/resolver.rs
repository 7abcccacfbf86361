//! Share-text resolution pipeline.
//!
//! Link extraction → redirect fetch → canonical page fetch → router data →
//! media fields. Strictly linear; the first failing stage ends the call and
//! nothing is retried. A resolver holds no per-call state and can be reused.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::DyrConfig;
use crate::error::{ResolveError, ResolveFailure};
use crate::fetch::{CurlFetcher, Fetch};
use crate::response::ShareResponse;
use crate::{link, page, redirect, schema, title};

/// Pipeline states, in the order a successful call passes through them.
///
/// A failed call stops in the state it had reached; see [`ResolveFailure::stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Start,
    LinkFound,
    RedirectResolved,
    PageFetched,
    SchemaParsed,
    BranchSelected,
    Done,
}

/// Direct media URL and metadata for one share text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Watermark-free play URL.
    pub media_url: String,
    /// Description or synthesized fallback, safe as a file name component.
    pub title: String,
    pub content_id: String,
}

pub struct ShareResolver<F = CurlFetcher> {
    fetcher: F,
    config: DyrConfig,
}

impl ShareResolver<CurlFetcher> {
    /// Resolver backed by libcurl with the timeouts from `config`.
    pub fn new(config: DyrConfig) -> Self {
        let fetcher = CurlFetcher::from_config(&config);
        Self { fetcher, config }
    }
}

impl<F: Fetch> ShareResolver<F> {
    pub fn with_fetcher(fetcher: F, config: DyrConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &DyrConfig {
        &self.config
    }

    /// Resolves `share_text` to a media URL, title and content ID.
    pub fn resolve(&self, share_text: &str) -> Result<ResolutionResult, ResolveFailure> {
        let result = self.run(share_text);
        if let Err(f) = &result {
            warn!(stage = ?f.stage(), error = %f, "resolution failed");
        }
        result
    }

    fn run(&self, share_text: &str) -> Result<ResolutionResult, ResolveFailure> {
        info!(chars = share_text.chars().count(), "resolving share text");
        let headers = self.config.request_headers();

        let share_url = link::extract_first_link(share_text).map_err(at(Stage::Start))?;
        debug!(stage = ?Stage::LinkFound, share_url);

        let content_id = redirect::resolve_content_id(&self.fetcher, share_url, &headers)
            .map_err(at(Stage::LinkFound))?;
        debug!(stage = ?Stage::RedirectResolved, %content_id);

        let html = page::fetch_page(
            &self.fetcher,
            &self.config.page_base_url,
            &content_id,
            &headers,
        )
        .map_err(at(Stage::RedirectResolved))?;
        debug!(stage = ?Stage::PageFetched, bytes = html.len());

        let router = schema::extract_router_data(&html).map_err(at(Stage::PageFetched))?;
        debug!(stage = ?Stage::SchemaParsed);

        let (variant, branch) = schema::select_branch(&router).map_err(at(Stage::SchemaParsed))?;
        debug!(stage = ?Stage::BranchSelected, %variant);

        let fields = schema::read_fields(variant, branch).map_err(at(Stage::BranchSelected))?;
        let title = title::derive_title(
            fields.description.as_deref(),
            &self.config.title_prefix,
            &content_id,
        );

        info!(stage = ?Stage::Done, %content_id, %title, "share text resolved");
        Ok(ResolutionResult {
            media_url: fields.media_url,
            title,
            content_id,
        })
    }
}

fn at(stage: Stage) -> impl FnOnce(ResolveError) -> ResolveFailure {
    move |kind| ResolveFailure::new(stage, kind)
}

/// Resolves with a libcurl resolver and converts the outcome to the uniform
/// response shape. Never fails.
pub fn resolve_share_text(share_text: &str, config: &DyrConfig) -> ShareResponse {
    ShareResponse::from_result(ShareResolver::new(config.clone()).resolve(share_text))
}
