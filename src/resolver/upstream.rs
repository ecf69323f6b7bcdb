//! Upstream platform client
//!
//! The pipeline never talks to the network directly; it goes through the
//! [`UpstreamClient`] trait so tests can substitute canned responses.
//! [`HttpUpstreamClient`] is the production implementation over reqwest.

use crate::{
    Result,
    config::UpstreamSettings,
    types::{ApiEnvelope, PageInfo, PlayInfo, ViewInfo},
};
use async_trait::async_trait;
use reqwest::{Client, header::REFERER};

/// Injected remote-fetch capability for the three platform endpoints
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Page-list lookup: enumerate the playable sub-items of a video
    async fn page_list(&self, bvid: &str) -> Result<ApiEnvelope<Vec<PageInfo>>>;

    /// View-info lookup: title and duration metadata
    async fn view_info(&self, bvid: &str) -> Result<ApiEnvelope<ViewInfo>>;

    /// Play-address lookup for one sub-item. The stream endpoint
    /// validates the referer against the requesting page, so `referer`
    /// carries the caller's original URL rather than the static one.
    async fn play_url(
        &self,
        bvid: &str,
        cid: i64,
        qn: u32,
        referer: &str,
    ) -> Result<ApiEnvelope<PlayInfo>>;
}

/// Production upstream client over reqwest
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    /// HTTP client, carries the browser user agent and per-call timeout
    client: Client,
    /// Base URL of the platform API
    api_base: String,
    /// Static referer for the page-list and view-info calls
    referer: String,
}

impl HttpUpstreamClient {
    /// Create a new upstream client from configuration
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            referer: settings.referer.clone(),
        })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn page_list(&self, bvid: &str) -> Result<ApiEnvelope<Vec<PageInfo>>> {
        let response = self
            .client
            .get(format!("{}/x/player/pagelist", self.api_base))
            .query(&[("bvid", bvid)])
            .header(REFERER, &self.referer)
            .send()
            .await?;

        Ok(response.json().await?)
    }

    async fn view_info(&self, bvid: &str) -> Result<ApiEnvelope<ViewInfo>> {
        let response = self
            .client
            .get(format!("{}/x/web-interface/view", self.api_base))
            .query(&[("bvid", bvid)])
            .header(REFERER, &self.referer)
            .send()
            .await?;

        Ok(response.json().await?)
    }

    async fn play_url(
        &self,
        bvid: &str,
        cid: i64,
        qn: u32,
        referer: &str,
    ) -> Result<ApiEnvelope<PlayInfo>> {
        let response = self
            .client
            .get(format!("{}/x/player/playurl", self.api_base))
            .query(&[
                ("bvid", bvid.to_string()),
                ("cid", cid.to_string()),
                ("qn", qn.to_string()),
                // Fixed format parameters: request both the direct-file
                // and the adaptive shapes so the fallback has something
                // to fall back to.
                ("fnval", "4048".to_string()),
                ("fnver", "0".to_string()),
                ("fourk", "1".to_string()),
            ])
            .header(REFERER, referer)
            .send()
            .await?;

        Ok(response.json().await?)
    }
}
