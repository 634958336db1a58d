// Monetization heuristic: six independent signals and a weighted vote.
//
// Each factor is a cheap proxy for a YouTube Partner Program requirement
// or a sign that a channel already earns. The verdict is a fixed linear
// classifier: sum the weights of the true factors, compare to a threshold.
//
// The MCN keyword match is deliberately loose. Generic words like
// "sponsored" fire on plenty of ordinary channel bios.

use serde::Serialize;

/// Description phrases taken as a hint of network/ads partnership.
pub const MCN_KEYWORDS: [&str; 15] = [
    "mcn",
    "multi-channel network",
    "multi channel network",
    "network partner",
    "partnered with",
    "adsense",
    "monetization",
    "monetized",
    "sponsored",
    "sponsorship",
    "brand deal",
    "business inquiries",
    "for business",
    "affiliate",
    "partner program",
];

pub const JOIN_BUTTON_MIN_SUBSCRIBERS: u64 = 1_000;
pub const JOIN_BUTTON_MIN_VIDEOS: u64 = 10;
pub const ADS_MIN_VIEWS_PER_VIDEO: f64 = 1_000.0;
pub const AUTHENTICITY_MIN_SUBSCRIBERS: u64 = 100;
pub const AUTHENTICITY_MIN_VIDEOS: u64 = 3;
pub const YPP_MIN_SUBSCRIBERS: u64 = 1_000;
pub const YPP_MIN_WATCH_HOURS: f64 = 4_000.0;

/// Everything the scorer reads. Counts are already zero-defaulted.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
    pub description: &'a str,
    pub average_duration_seconds: f64,
}

/// The six factors, always in this order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonetizationFactors {
    pub has_join_button: bool,
    pub has_ads_in_videos: bool,
    pub has_mcn_partnership: bool,
    pub passes_authenticity: bool,
    pub has_enough_subscribers: bool,
    pub has_enough_watch_time: bool,
}

impl MonetizationFactors {
    pub fn as_array(&self) -> [bool; 6] {
        [
            self.has_join_button,
            self.has_ads_in_videos,
            self.has_mcn_partnership,
            self.passes_authenticity,
            self.has_enough_subscribers,
            self.has_enough_watch_time,
        ]
    }

    pub fn from_array(flags: [bool; 6]) -> Self {
        Self {
            has_join_button: flags[0],
            has_ads_in_videos: flags[1],
            has_mcn_partnership: flags[2],
            passes_authenticity: flags[3],
            has_enough_subscribers: flags[4],
            has_enough_watch_time: flags[5],
        }
    }
}

/// Per-factor weights and the verdict threshold.
///
/// Indexed in the same order as `MonetizationFactors::as_array`.
#[derive(Debug, Clone)]
pub struct MonetizationWeights {
    pub weights: [u32; 6],
    /// Minimum summed weight for a "monetized" verdict (default 7).
    pub threshold: u32,
}

impl Default for MonetizationWeights {
    fn default() -> Self {
        Self {
            // join, ads, mcn, authenticity, subscribers, watch time
            weights: [2, 1, 2, 1, 3, 3],
            threshold: 7,
        }
    }
}

impl MonetizationWeights {
    pub fn max_score(&self) -> u32 {
        self.weights.iter().sum()
    }
}

/// Verdict plus the numbers behind it.
#[derive(Debug, Clone, Serialize)]
pub struct MonetizationVerdict {
    pub factors: MonetizationFactors,
    pub score: u32,
    pub max_score: u32,
    pub is_monetized: bool,
    pub estimated_watch_time_hours: f64,
}

/// `(avg seconds / 60) * views / 60`: every view assumed to watch the whole
/// average-length video.
pub fn estimated_watch_time_hours(average_duration_seconds: f64, view_count: u64) -> f64 {
    (average_duration_seconds / 60.0) * view_count as f64 / 60.0
}

/// Case-insensitive keyword scan of a channel description.
pub fn has_mcn_keyword(description: &str) -> bool {
    let lowered = description.to_lowercase();
    MCN_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Evaluate all six factors. No short-circuiting between them.
pub fn compute_factors(input: &ScoringInput<'_>) -> MonetizationFactors {
    let subs = input.subscriber_count;
    let videos = input.video_count;

    let has_ads_in_videos = videos > 0
        && (input.view_count as f64 / videos as f64) > ADS_MIN_VIEWS_PER_VIDEO;

    let watch_hours =
        estimated_watch_time_hours(input.average_duration_seconds, input.view_count);

    MonetizationFactors {
        has_join_button: subs >= JOIN_BUTTON_MIN_SUBSCRIBERS && videos >= JOIN_BUTTON_MIN_VIDEOS,
        has_ads_in_videos,
        has_mcn_partnership: has_mcn_keyword(input.description),
        passes_authenticity: subs > AUTHENTICITY_MIN_SUBSCRIBERS
            && videos >= AUTHENTICITY_MIN_VIDEOS,
        has_enough_subscribers: subs >= YPP_MIN_SUBSCRIBERS,
        has_enough_watch_time: watch_hours > YPP_MIN_WATCH_HOURS,
    }
}

/// Sum the weights of the true factors.
pub fn weighted_score(factors: &MonetizationFactors, weights: &MonetizationWeights) -> u32 {
    factors
        .as_array()
        .iter()
        .zip(weights.weights.iter())
        .filter(|(on, _)| **on)
        .map(|(_, w)| *w)
        .sum()
}

/// Score a channel and return the full verdict.
pub fn assess(input: &ScoringInput<'_>, weights: &MonetizationWeights) -> MonetizationVerdict {
    let factors = compute_factors(input);
    let score = weighted_score(&factors, weights);

    MonetizationVerdict {
        factors,
        score,
        max_score: weights.max_score(),
        is_monetized: score >= weights.threshold,
        estimated_watch_time_hours: estimated_watch_time_hours(
            input.average_duration_seconds,
            input.view_count,
        ),
    }
}
