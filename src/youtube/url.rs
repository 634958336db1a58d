// URL resolution: classify free text as a channel or video reference.
//
// Channel and video patterns are tried independently, each in a fixed
// order, and each category keeps its first match. There is no fuzzy
// matching: input that hits neither list is rejected before any network
// call happens.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex_lite::Regex;
use serde::Serialize;

use crate::error::CheckError;

/// Prefix shared by every canonical channel ID.
pub const CHANNEL_ID_PREFIX: &str = "UC";

/// How a URL referred to a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChannelRef {
    /// `/channel/ID`
    Id(String),
    /// `/c/NAME`, `/user/NAME` or `/@handle`, resolved by name lookup
    Name(String),
}

impl ChannelRef {
    /// The raw identifier, whichever way it was given.
    pub fn as_str(&self) -> &str {
        match self {
            ChannelRef::Id(s) | ChannelRef::Name(s) => s,
        }
    }

    /// True when the identifier can be fetched directly by ID.
    pub fn is_canonical_id(&self) -> bool {
        matches!(self, ChannelRef::Id(id) if id.starts_with(CHANNEL_ID_PREFIX))
    }
}

/// What a check request is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Target {
    Channel { reference: ChannelRef },
    Video { id: String },
}

/// Raw result of running both pattern lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub channel: Option<ChannelRef>,
    pub video: Option<String>,
}

#[derive(Clone, Copy)]
enum ChannelPattern {
    Id,
    Name,
}

static CHANNEL_PATTERNS: LazyLock<Vec<(Regex, ChannelPattern)>> = LazyLock::new(|| {
    [
        (r"youtube\.com/channel/([A-Za-z0-9_-]+)", ChannelPattern::Id),
        (r"youtube\.com/c/([^/?#&]+)", ChannelPattern::Name),
        (r"youtube\.com/user/([^/?#&]+)", ChannelPattern::Name),
        (r"youtube\.com/@([^/?#&]+)", ChannelPattern::Name),
    ]
    .into_iter()
    .map(|(re, kind)| (Regex::new(re).expect("valid channel regex"), kind))
    .collect()
});

static VIDEO_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"youtube\.com/watch\?(?:[^#]*&)?v=([A-Za-z0-9_-]{11})",
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        r"youtube\.com/embed/([A-Za-z0-9_-]{11})",
        r"youtube\.com/shorts/([A-Za-z0-9_-]{11})",
    ]
    .into_iter()
    .map(|re| Regex::new(re).expect("valid video regex"))
    .collect()
});

/// Run both pattern lists over `input`. Either side may be `None`.
pub fn resolve(input: &str) -> ResolvedUrl {
    let input = input.trim();

    let channel = CHANNEL_PATTERNS.iter().find_map(|(re, kind)| {
        let raw = re.captures(input)?.get(1)?.as_str();
        Some(match kind {
            ChannelPattern::Id => ChannelRef::Id(raw.to_string()),
            // Browsers copy non-ASCII handles percent-encoded
            ChannelPattern::Name => {
                ChannelRef::Name(percent_decode_str(raw).decode_utf8_lossy().into_owned())
            }
        })
    });

    let video = VIDEO_PATTERNS
        .iter()
        .find_map(|re| Some(re.captures(input)?.get(1)?.as_str().to_string()));

    ResolvedUrl { channel, video }
}

/// Decide what a check request targets.
///
/// A video match wins over a channel match. Input matching neither is
/// `CheckError::InvalidInput`.
pub fn classify(input: &str) -> Result<Target, CheckError> {
    let resolved = resolve(input);
    match (resolved.video, resolved.channel) {
        (Some(id), _) => Ok(Target::Video { id }),
        (None, Some(reference)) => Ok(Target::Channel { reference }),
        (None, None) => Err(CheckError::InvalidInput),
    }
}
