//! Resolution pipeline
//!
//! Orchestrates the three strictly sequential upstream lookups:
//! page list → view info → play address. Each step needs data from the
//! previous one, so there is nothing to parallelize. The middle step is
//! the only non-fatal one; its failure is logged and replaced with
//! sentinel metadata.

use crate::{
    Error, Result,
    resolver::{
        format::{format_duration, quality_label},
        upstream::UpstreamClient,
    },
    types::{PlayInfo, ViewInfo},
};
use std::sync::Arc;

/// Title used when the metadata lookup fails or omits the field
pub const UNKNOWN_TITLE: &str = "unknown title";

/// Terminal output of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackResult {
    /// Directly fetchable CDN address, never a manifest reference
    pub cdn_url: String,
    /// Video title, possibly the sentinel
    pub title: String,
    /// Label of the quality tier the upstream actually returned
    pub quality_label: String,
    /// Formatted duration text
    pub duration_formatted: String,
    /// The identifier that was resolved
    pub identifier: String,
}

/// Resolves a video identifier to a playable CDN address
#[derive(Clone)]
pub struct Resolver {
    /// Injected remote-fetch capability
    upstream: Arc<dyn UpstreamClient>,
    /// Quality hint sent to the play-address endpoint, also the tier
    /// assumed when the response omits one
    preferred_quality: u32,
}

impl Resolver {
    /// Create a new resolver over the given upstream client
    pub fn new(upstream: Arc<dyn UpstreamClient>, preferred_quality: u32) -> Self {
        Self {
            upstream,
            preferred_quality,
        }
    }

    /// Resolve an identifier to a playable CDN address.
    ///
    /// `original_url` is the caller-supplied page URL; the stream
    /// endpoint validates its referer against it, so it is forwarded on
    /// the third call only.
    pub async fn resolve(&self, bvid: &str, original_url: &str) -> Result<PlaybackResult> {
        // Step 1: page list. Only the first sub-item is ever selected.
        let pages = self.upstream.page_list(bvid).await?;
        if !pages.is_ok() {
            return Err(Error::upstream_info(pages.message_or_code()));
        }
        let cid = pages
            .data
            .as_ref()
            .and_then(|pages| pages.first())
            .map(|page| page.cid)
            .ok_or_else(|| Error::upstream_info("empty page list"))?;
        tracing::debug!("page list for {bvid} resolved to cid {cid}");

        // Step 2: view info. Non-fatal; any failure falls back to the
        // sentinel metadata and the pipeline continues.
        let metadata = match self.upstream.view_info(bvid).await {
            Ok(env) if env.is_ok() => env.data.unwrap_or_default(),
            Ok(env) => {
                tracing::warn!(
                    "view-info lookup for {bvid} failed ({}), using defaults",
                    env.message_or_code()
                );
                ViewInfo::default()
            }
            Err(e) => {
                tracing::warn!("view-info lookup for {bvid} failed ({e}), using defaults");
                ViewInfo::default()
            }
        };
        let title = metadata
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        let duration_seconds = metadata.duration.unwrap_or(0);

        // Step 3: play address, with the caller's URL as referer.
        let play = self
            .upstream
            .play_url(bvid, cid, self.preferred_quality, original_url)
            .await?;
        if !play.is_ok() {
            return Err(Error::upstream_playback(play.message_or_code()));
        }

        // Step 4: format selection, direct file before adaptive track.
        let (cdn_url, tier) = match play.data {
            Some(info) => select_format(info, self.preferred_quality)?,
            None => return Err(Error::NoPlayableSource),
        };

        Ok(PlaybackResult {
            cdn_url,
            title,
            quality_label: quality_label(tier),
            duration_formatted: format_duration(duration_seconds),
            identifier: bvid.to_string(),
        })
    }
}

/// Pick the CDN address and the tier to label it with.
///
/// Direct-file entries win over adaptive tracks. The direct-file path
/// labels with the response-level quality; the adaptive path labels with
/// the chosen track's own id. Either way the tier comes from the
/// response, never from the request hint, which the upstream is free to
/// silently downgrade.
fn select_format(info: PlayInfo, fallback_tier: u32) -> Result<(String, u32)> {
    if let Some(file) = info.durl.as_ref().and_then(|durl| durl.first()) {
        let tier = info.quality.unwrap_or(fallback_tier);
        return Ok((file.url.clone(), tier));
    }

    if let Some(track) = info.dash.as_ref().and_then(|dash| dash.video.first()) {
        // Only the first variant's base URL, not a full manifest.
        let tier = track.id.unwrap_or(fallback_tier);
        return Ok((track.base_url.clone(), tier));
    }

    Err(Error::NoPlayableSource)
}
