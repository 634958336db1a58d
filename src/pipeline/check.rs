// Check pipeline: the one entry point the CLI and web layer call.
//
// Given a raw URL:
// 1. Classify it (no network call if it's not a YouTube URL)
// 2. Fetch the channel, or the video and its channel
// 3. Sample recent uploads for the average duration (never fatal)
// 4. Score the channel and estimate revenue
// 5. Return a complete MonetizationAssessment
//
// Every call is independent: nothing is cached, so identical input re-fetches
// and re-draws the random figures.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::error::CheckError;
use crate::scoring::lookups::{self, CountryInfo, CreatorTier, LanguageInfo};
use crate::scoring::monetization::{self, MonetizationVerdict, MonetizationWeights, ScoringInput};
use crate::scoring::revenue::{self, RevenueEstimate, RevenueInput};
use crate::snapshot::{ChannelSnapshot, VideoSnapshot};
use crate::youtube::fetch;
use crate::youtube::traits::YoutubeApi;
use crate::youtube::url::{self, Target};

/// Tunables for a single check.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Recent uploads to sample (clamped to 1..=10 by the fetcher).
    pub sample_size: u32,
    pub weights: MonetizationWeights,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            sample_size: crate::config::MAX_SAMPLE_SIZE,
            weights: MonetizationWeights::default(),
        }
    }
}

/// What was checked.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Subject {
    Channel(ChannelSnapshot),
    Video(VideoSnapshot),
}

impl Subject {
    /// The channel whose factors drive the verdict.
    pub fn channel(&self) -> &ChannelSnapshot {
        match self {
            Subject::Channel(c) => c,
            Subject::Video(v) => &v.channel,
        }
    }

    /// Views the revenue projections are based on.
    pub fn revenue_views(&self) -> u64 {
        match self {
            Subject::Channel(c) => c.view_count,
            Subject::Video(v) => v.view_count,
        }
    }
}

/// The complete result of one check.
#[derive(Debug, Clone, Serialize)]
pub struct MonetizationAssessment {
    pub subject: Subject,
    #[serde(flatten)]
    pub verdict: MonetizationVerdict,
    pub revenue: RevenueEstimate,
    pub tier: CreatorTier,
    pub country: CountryInfo,
    pub language: LanguageInfo,
    pub checked_at: DateTime<Utc>,
}

/// Run the full check for a raw URL.
pub async fn check_url<R: Rng + ?Sized>(
    api: &dyn YoutubeApi,
    input: &str,
    options: &CheckOptions,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<MonetizationAssessment, CheckError> {
    let target = url::classify(input)?;

    let subject = match target {
        Target::Channel { reference } => {
            let item = fetch::fetch_channel(api, &reference).await?;
            let channel = ChannelSnapshot::from_item(item, now);
            let sample = fetch::sample_recent_videos(
                api,
                channel.uploads_playlist.as_deref(),
                options.sample_size,
            )
            .await;
            Subject::Channel(channel.with_sample(sample))
        }
        Target::Video { id } => {
            let (video_item, channel_item) = fetch::fetch_video(api, &id).await?;
            let channel = ChannelSnapshot::from_item(channel_item, now);
            let sample = fetch::sample_recent_videos(
                api,
                channel.uploads_playlist.as_deref(),
                options.sample_size,
            )
            .await;
            Subject::Video(VideoSnapshot::from_item(
                video_item,
                channel.with_sample(sample),
            ))
        }
    };

    Ok(assess(subject, options, rng, now))
}

/// Score an already-fetched subject. Pure apart from the random source.
pub fn assess<R: Rng + ?Sized>(
    subject: Subject,
    options: &CheckOptions,
    rng: &mut R,
    now: DateTime<Utc>,
) -> MonetizationAssessment {
    let channel = subject.channel();

    let verdict = monetization::assess(
        &ScoringInput {
            subscriber_count: channel.subscriber_count,
            video_count: channel.video_count,
            view_count: channel.view_count,
            description: &channel.description,
            average_duration_seconds: channel.average_duration_seconds,
        },
        &options.weights,
    );

    let revenue = revenue::estimate(
        &RevenueInput {
            subscriber_count: channel.subscriber_count,
            video_count: channel.video_count,
            channel_view_count: channel.view_count,
            views: subject.revenue_views(),
        },
        now.date_naive(),
        rng,
    );

    let tier = CreatorTier::from_subscribers(channel.subscriber_count);
    let country = lookups::country(channel.country.as_deref());
    let language = lookups::language(channel.default_language.as_deref());

    info!(
        channel = channel.id.as_str(),
        score = verdict.score,
        monetized = verdict.is_monetized,
        watch_hours = verdict.estimated_watch_time_hours.round(),
        cpm = revenue::round2(revenue.cpm),
        "Assessed channel"
    );

    MonetizationAssessment {
        subject,
        verdict,
        revenue,
        tier,
        country,
        language,
        checked_at: now,
    }
}
