// Fetch chain: turn a resolved reference into raw API items.
//
// Channel lookups walk a fixed fallback chain:
//   canonical ID -> channels?id
//   anything else -> channels?forUsername -> search?q (once) -> channels?id
// Every failure aborts the check except upload sampling, which degrades
// to an empty sample.

use tracing::{debug, warn};

use super::models::{ChannelItem, VideoItem};
use super::traits::YoutubeApi;
use super::url::ChannelRef;
use crate::config::MAX_SAMPLE_SIZE;
use crate::error::{CheckError, Resource};
use crate::snapshot::VideoSummary;

/// Look up a channel, falling back from username to search when needed.
pub async fn fetch_channel(
    api: &dyn YoutubeApi,
    reference: &ChannelRef,
) -> Result<ChannelItem, CheckError> {
    if reference.is_canonical_id() {
        return fetch_channel_by_id(api, reference.as_str()).await;
    }

    let name = reference.as_str();
    debug!(name = name, "Looking up channel by username");
    if let Some(item) = api.channels_by_username(name).await?.into_iter().next() {
        return Ok(item);
    }

    debug!(name = name, "Username lookup empty, searching by name");
    let channel_id = api
        .search_channels(name)
        .await?
        .into_iter()
        .next()
        .and_then(|hit| hit.id.channel_id)
        .ok_or(CheckError::NotFound(Resource::Channel))?;

    fetch_channel_by_id(api, &channel_id).await
}

async fn fetch_channel_by_id(
    api: &dyn YoutubeApi,
    channel_id: &str,
) -> Result<ChannelItem, CheckError> {
    api.channels_by_id(channel_id)
        .await?
        .into_iter()
        .next()
        .ok_or(CheckError::NotFound(Resource::Channel))
}

/// Look up a video and its owning channel.
///
/// The channel is always fetched: monetization factors are channel-level.
pub async fn fetch_video(
    api: &dyn YoutubeApi,
    video_id: &str,
) -> Result<(VideoItem, ChannelItem), CheckError> {
    let video = api
        .videos_by_id(&[video_id.to_string()])
        .await?
        .into_iter()
        .next()
        .ok_or(CheckError::NotFound(Resource::Video))?;

    if video.snippet.channel_id.is_empty() {
        warn!(video = video_id, "Video has no owning channel id");
        return Err(CheckError::NotFound(Resource::Channel));
    }

    let channel = fetch_channel_by_id(api, &video.snippet.channel_id).await?;

    Ok((video, channel))
}

/// Fetch up to `max` recent uploads for the average-duration signal.
///
/// Never fails: any error or an empty playlist yields an empty sample.
pub async fn sample_recent_videos(
    api: &dyn YoutubeApi,
    uploads_playlist: Option<&str>,
    max: u32,
) -> Vec<VideoSummary> {
    let Some(playlist_id) = uploads_playlist else {
        debug!("Channel has no uploads playlist, skipping sample");
        return Vec::new();
    };

    match try_sample(api, playlist_id, max.clamp(1, MAX_SAMPLE_SIZE)).await {
        Ok(sample) => sample,
        Err(e) => {
            warn!(playlist = playlist_id, error = %e, "Failed to sample recent videos, using zero duration");
            Vec::new()
        }
    }
}

async fn try_sample(
    api: &dyn YoutubeApi,
    playlist_id: &str,
    max: u32,
) -> Result<Vec<VideoSummary>, CheckError> {
    let ids: Vec<String> = api
        .playlist_items(playlist_id, max)
        .await?
        .into_iter()
        .map(|item| item.content_details.video_id)
        .take(max as usize)
        .collect();

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let videos = api.videos_by_id(&ids).await?;
    Ok(videos.iter().map(VideoSummary::from_item).collect())
}
