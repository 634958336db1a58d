// Shared fixtures: a recording fake YoutubeApi and item builders.
//
// The fake answers from in-memory maps and logs every call so tests can
// assert the exact order of the fallback chain without network access.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use ytmonetize::error::CheckError;
use ytmonetize::youtube::models::{ChannelItem, PlaylistItem, SearchItem, VideoItem};
use ytmonetize::youtube::traits::YoutubeApi;

#[derive(Default)]
pub struct FakeApi {
    pub channels: HashMap<String, ChannelItem>,
    pub usernames: HashMap<String, ChannelItem>,
    /// search query -> channel id of the first hit
    pub search_hits: HashMap<String, String>,
    pub videos: HashMap<String, VideoItem>,
    /// playlist id -> video ids
    pub playlists: HashMap<String, Vec<String>>,
    /// When set, playlistItems fails with this status.
    pub playlist_failure: Option<u16>,
    /// When set, every channels call fails with this status.
    pub channel_failure: Option<u16>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn with_channel(mut self, item: ChannelItem) -> Self {
        self.channels.insert(item.id.clone(), item);
        self
    }

    pub fn with_username(mut self, name: &str, item: ChannelItem) -> Self {
        self.usernames.insert(name.to_string(), item);
        self
    }

    pub fn with_search_hit(mut self, query: &str, channel_id: &str) -> Self {
        self.search_hits
            .insert(query.to_string(), channel_id.to_string());
        self
    }

    pub fn with_video(mut self, item: VideoItem) -> Self {
        self.videos.insert(item.id.clone(), item);
        self
    }

    pub fn with_playlist(mut self, playlist_id: &str, video_ids: &[&str]) -> Self {
        self.playlists.insert(
            playlist_id.to_string(),
            video_ids.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl YoutubeApi for FakeApi {
    async fn channels_by_id(&self, channel_id: &str) -> Result<Vec<ChannelItem>, CheckError> {
        self.record(format!("channels_by_id:{channel_id}"));
        if let Some(status) = self.channel_failure {
            return Err(CheckError::UpstreamFailure { status });
        }
        Ok(self.channels.get(channel_id).cloned().into_iter().collect())
    }

    async fn channels_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<ChannelItem>, CheckError> {
        self.record(format!("channels_by_username:{username}"));
        if let Some(status) = self.channel_failure {
            return Err(CheckError::UpstreamFailure { status });
        }
        Ok(self.usernames.get(username).cloned().into_iter().collect())
    }

    async fn search_channels(&self, query: &str) -> Result<Vec<SearchItem>, CheckError> {
        self.record(format!("search:{query}"));
        Ok(self
            .search_hits
            .get(query)
            .map(|id| {
                serde_json::from_value(json!({ "id": { "kind": "youtube#channel", "channelId": id } }))
                    .unwrap()
            })
            .into_iter()
            .collect())
    }

    async fn videos_by_id(&self, video_ids: &[String]) -> Result<Vec<VideoItem>, CheckError> {
        self.record(format!("videos:{}", video_ids.join(",")));
        Ok(video_ids
            .iter()
            .filter_map(|id| self.videos.get(id).cloned())
            .collect())
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>, CheckError> {
        self.record(format!("playlist:{playlist_id}"));
        if let Some(status) = self.playlist_failure {
            return Err(CheckError::UpstreamFailure { status });
        }
        Ok(self
            .playlists
            .get(playlist_id)
            .map(|ids| {
                ids.iter()
                    .take(max_results as usize)
                    .map(|id| {
                        serde_json::from_value(json!({ "contentDetails": { "videoId": id } }))
                            .unwrap()
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// A channel item with string-encoded statistics, as YouTube sends them.
pub fn channel_item(
    id: &str,
    subscribers: u64,
    videos: u64,
    views: u64,
    description: &str,
    uploads: Option<&str>,
) -> ChannelItem {
    let mut value = json!({
        "id": id,
        "snippet": {
            "title": format!("Channel {id}"),
            "description": description,
            "publishedAt": "2019-06-01T12:00:00Z",
            "country": "US",
            "defaultLanguage": "en"
        },
        "statistics": {
            "viewCount": views.to_string(),
            "subscriberCount": subscribers.to_string(),
            "hiddenSubscriberCount": false,
            "videoCount": videos.to_string()
        }
    });
    if let Some(uploads) = uploads {
        value["contentDetails"] = json!({ "relatedPlaylists": { "uploads": uploads } });
    }
    serde_json::from_value(value).unwrap()
}

/// A video item owned by `channel_id`.
pub fn video_item(id: &str, channel_id: &str, views: u64, duration: &str) -> VideoItem {
    serde_json::from_value(json!({
        "id": id,
        "snippet": {
            "title": format!("Video {id}"),
            "description": "",
            "channelId": channel_id,
            "publishedAt": "2024-01-01T00:00:00Z"
        },
        "statistics": {
            "viewCount": views.to_string(),
            "likeCount": "10",
            "commentCount": "2"
        },
        "contentDetails": { "duration": duration }
    }))
    .unwrap()
}
