// Snapshots: the flattened, zero-defaulted view of what YouTube returned.
//
// Built once per request from the raw API items and never persisted.
// Scoring only ever sees these types, so no Option<count> reaches the
// arithmetic.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::youtube::duration::parse_iso8601_seconds;
use crate::youtube::models::{ChannelItem, VideoItem};

/// A channel as seen at request time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChannelSnapshot {
    pub id: String,
    pub title: String,
    pub custom_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: String,
    pub subscriber_count: u64,
    pub hidden_subscriber_count: bool,
    pub view_count: u64,
    pub video_count: u64,
    pub country: Option<String>,
    pub default_language: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub age_days: i64,
    pub keywords: Option<String>,
    pub topic_categories: Vec<String>,
    pub made_for_kids: Option<bool>,
    pub uploads_playlist: Option<String>,
    pub sampled_videos: Vec<VideoSummary>,
    pub average_duration_seconds: f64,
}

/// One recent upload, kept only for the average duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub duration_seconds: u64,
    pub view_count: u64,
}

/// A single video plus its owning channel.
#[derive(Debug, Clone, Serialize)]
pub struct VideoSnapshot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    pub duration_seconds: u64,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub tags: Vec<String>,
    pub channel: ChannelSnapshot,
}

impl ChannelSnapshot {
    /// Flatten a `channels.list` item. `now` anchors the channel age.
    pub fn from_item(item: ChannelItem, now: DateTime<Utc>) -> Self {
        let published_at = item.snippet.published_at.as_deref().and_then(parse_timestamp);
        let age_days = published_at
            .map(|p| (now - p).num_days().max(0))
            .unwrap_or(0);

        Self {
            thumbnail_url: item.snippet.thumbnails.best_url().map(str::to_string),
            id: item.id,
            title: item.snippet.title,
            custom_url: item.snippet.custom_url,
            description: item.snippet.description,
            subscriber_count: item.statistics.subscriber_count,
            hidden_subscriber_count: item.statistics.hidden_subscriber_count,
            view_count: item.statistics.view_count,
            video_count: item.statistics.video_count,
            country: item.snippet.country,
            default_language: item.snippet.default_language,
            published_at,
            age_days,
            keywords: item.branding_settings.channel.keywords,
            topic_categories: item.topic_details.topic_categories,
            made_for_kids: item.status.made_for_kids,
            uploads_playlist: item.content_details.related_playlists.uploads,
            sampled_videos: Vec::new(),
            average_duration_seconds: 0.0,
        }
    }

    /// Attach the recent-upload sample and recompute the average duration.
    pub fn with_sample(mut self, sample: Vec<VideoSummary>) -> Self {
        self.average_duration_seconds = average_duration(&sample);
        self.sampled_videos = sample;
        self
    }
}

impl VideoSummary {
    pub fn from_item(item: &VideoItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.snippet.title.clone(),
            duration_seconds: item
                .content_details
                .duration
                .as_deref()
                .map(parse_iso8601_seconds)
                .unwrap_or(0),
            view_count: item.statistics.view_count,
        }
    }
}

impl VideoSnapshot {
    pub fn from_item(item: VideoItem, channel: ChannelSnapshot) -> Self {
        let duration_seconds = item
            .content_details
            .duration
            .as_deref()
            .map(parse_iso8601_seconds)
            .unwrap_or(0);

        Self {
            published_at: item.snippet.published_at.as_deref().and_then(parse_timestamp),
            id: item.id,
            title: item.snippet.title,
            description: item.snippet.description,
            duration_seconds,
            view_count: item.statistics.view_count,
            like_count: item.statistics.like_count,
            comment_count: item.statistics.comment_count,
            tags: item.snippet.tags,
            channel,
        }
    }
}

/// Mean duration in seconds, 0.0 for an empty sample.
pub fn average_duration(sample: &[VideoSummary]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().map(|v| v.duration_seconds as f64).sum::<f64>() / sample.len() as f64
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::models::ListResponse;

    fn channel_json() -> &'static str {
        r#"{
            "items": [{
                "id": "UC123",
                "snippet": {
                    "title": "Test Channel",
                    "description": "Cooking every week",
                    "publishedAt": "2020-01-01T00:00:00Z",
                    "country": "US",
                    "thumbnails": {"default": {"url": "https://img/d.jpg"}, "high": {"url": "https://img/h.jpg"}}
                },
                "statistics": {"viewCount": "200000", "subscriberCount": "2000", "videoCount": "50"},
                "contentDetails": {"relatedPlaylists": {"uploads": "UU123"}}
            }]
        }"#
    }

    #[test]
    fn flattens_channel_item() {
        let resp: ListResponse<ChannelItem> = serde_json::from_str(channel_json()).unwrap();
        let now = DateTime::parse_from_rfc3339("2020-01-11T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let snap = ChannelSnapshot::from_item(resp.items.into_iter().next().unwrap(), now);

        assert_eq!(snap.id, "UC123");
        assert_eq!(snap.subscriber_count, 2000);
        assert_eq!(snap.view_count, 200_000);
        assert_eq!(snap.video_count, 50);
        assert_eq!(snap.age_days, 10);
        assert_eq!(snap.uploads_playlist.as_deref(), Some("UU123"));
        assert_eq!(snap.thumbnail_url.as_deref(), Some("https://img/h.jpg"));
    }

    #[test]
    fn missing_statistics_default_to_zero() {
        let json = r#"{"items": [{"id": "UCx", "snippet": {"title": "Bare"}}]}"#;
        let resp: ListResponse<ChannelItem> = serde_json::from_str(json).unwrap();
        let snap = ChannelSnapshot::from_item(resp.items.into_iter().next().unwrap(), Utc::now());
        assert_eq!(snap.subscriber_count, 0);
        assert_eq!(snap.view_count, 0);
        assert_eq!(snap.video_count, 0);
        assert_eq!(snap.age_days, 0);
    }

    #[test]
    fn average_of_empty_sample_is_zero() {
        assert_eq!(average_duration(&[]), 0.0);
    }

    #[test]
    fn with_sample_sets_average() {
        let sample = vec![
            VideoSummary {
                id: "a".into(),
                title: "A".into(),
                duration_seconds: 300,
                view_count: 10,
            },
            VideoSummary {
                id: "b".into(),
                title: "B".into(),
                duration_seconds: 900,
                view_count: 10,
            },
        ];
        let snap = ChannelSnapshot::default().with_sample(sample);
        assert_eq!(snap.average_duration_seconds, 600.0);
        assert_eq!(snap.sampled_videos.len(), 2);
    }
}
