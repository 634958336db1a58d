// YouTube Data API v3 client: plain HTTPS GETs with an API key.
//
// A thin reqwest wrapper with one generic GET helper. The key and base URL
// are injected at construction so tests and mocks can point it elsewhere.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{ChannelItem, ListResponse, PlaylistItem, SearchItem, VideoItem};
use super::traits::YoutubeApi;
use crate::config::Config;
use crate::error::CheckError;

/// Default Data API endpoint.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Every channel part the snapshot reads.
const CHANNEL_PARTS: &str = "snippet,statistics,status,contentDetails,topicDetails,brandingSettings";
const VIDEO_PARTS: &str = "snippet,statistics,contentDetails";

/// HTTP client for the YouTube Data API.
pub struct YoutubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YoutubeClient {
    /// Create a client for the given base URL and API key.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("ytmonetize/0.1 (monetization-checker)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, &config.api_key)
    }

    /// GET `{base}/{endpoint}` with the API key appended and return `items`.
    async fn list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, CheckError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        debug!(endpoint = endpoint, "YouTube API GET request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(endpoint = endpoint, status = status.as_u16(), "YouTube API error");
            return Err(CheckError::UpstreamFailure {
                status: status.as_u16(),
            });
        }

        let body: ListResponse<T> = response
            .json()
            .await
            .map_err(|e| CheckError::Transport(format!("Failed to decode {endpoint}: {e}")))?;
        Ok(body.items)
    }
}

#[async_trait]
impl YoutubeApi for YoutubeClient {
    async fn channels_by_id(&self, channel_id: &str) -> Result<Vec<ChannelItem>, CheckError> {
        self.list("channels", &[("part", CHANNEL_PARTS), ("id", channel_id)])
            .await
    }

    async fn channels_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<ChannelItem>, CheckError> {
        self.list(
            "channels",
            &[("part", CHANNEL_PARTS), ("forUsername", username)],
        )
        .await
    }

    async fn search_channels(&self, query: &str) -> Result<Vec<SearchItem>, CheckError> {
        self.list(
            "search",
            &[
                ("part", "snippet"),
                ("type", "channel"),
                ("maxResults", "1"),
                ("q", query),
            ],
        )
        .await
    }

    async fn videos_by_id(&self, video_ids: &[String]) -> Result<Vec<VideoItem>, CheckError> {
        let ids = video_ids.join(",");
        self.list("videos", &[("part", VIDEO_PARTS), ("id", ids.as_str())])
            .await
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>, CheckError> {
        let max = max_results.to_string();
        self.list(
            "playlistItems",
            &[
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", max.as_str()),
            ],
        )
        .await
    }
}
