// The YouTube API trait: the seam between the fallback chain and HTTP.
//
// `YoutubeClient` is the real implementation. Tests plug in a recording
// fake so the fallback order can be asserted call by call.

use async_trait::async_trait;

use super::models::{ChannelItem, PlaylistItem, SearchItem, VideoItem};
use crate::error::CheckError;

/// The four Data API endpoints the checker needs, one method per lookup.
///
/// Implementations return the raw `items` list; deciding whether an empty
/// list means "not found" belongs to the caller.
#[async_trait]
pub trait YoutubeApi: Send + Sync {
    /// `channels.list?id=…`
    async fn channels_by_id(&self, channel_id: &str) -> Result<Vec<ChannelItem>, CheckError>;

    /// `channels.list?forUsername=…`
    async fn channels_by_username(&self, username: &str)
        -> Result<Vec<ChannelItem>, CheckError>;

    /// `search.list?type=channel&q=…`, first result only.
    async fn search_channels(&self, query: &str) -> Result<Vec<SearchItem>, CheckError>;

    /// `videos.list?id=a,b,c`
    async fn videos_by_id(&self, video_ids: &[String]) -> Result<Vec<VideoItem>, CheckError>;

    /// `playlistItems.list?playlistId=…`
    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>, CheckError>;
}
