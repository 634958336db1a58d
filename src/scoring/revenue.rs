// Revenue estimation: illustrative figures from static rate tables.
//
// Nothing here is a financial calculation. Every dollar figure is
// `views * rate / 1000`; the only variation comes from the category table
// and an injected random source (CPM jitter, CTR, synthetic history).
// A seeded `StdRng` makes the whole estimate reproducible.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

/// Flat RPM (USD per 1000 views) per content category, cheapest first.
pub const CATEGORY_RPM: [(&str, f64); 14] = [
    ("Shorts", 0.08),
    ("Music", 0.50),
    ("Entertainment", 1.00),
    ("Comedy", 1.20),
    ("Gaming", 1.50),
    ("Vlogs", 2.00),
    ("Sports", 2.50),
    ("Food & Cooking", 3.00),
    ("Travel", 3.50),
    ("Beauty & Fashion", 4.00),
    ("Education", 5.00),
    ("Health & Fitness", 6.00),
    ("Technology", 8.00),
    ("Finance", 10.00),
];

pub const BASE_CPM: f64 = 0.25;
/// CPM jitter is drawn from `[0, CPM_JITTER)`.
pub const CPM_JITTER: f64 = 0.5;
/// CTR percentage range, `[low, high)`.
pub const CTR_RANGE: (f64, f64) = (2.0, 10.0);
/// Days in the synthetic history series.
pub const HISTORY_DAYS: usize = 31;
/// Per-day view jitter for the synthetic history (±20%).
pub const HISTORY_JITTER: f64 = 0.2;

/// Revenue for one content category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRevenue {
    pub category: &'static str,
    pub rpm: f64,
    pub revenue: f64,
}

/// Daily / monthly / yearly projection at a single CPM.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub daily_views: f64,
    pub monthly_views: f64,
    pub yearly_views: f64,
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// One fabricated day of chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub views: u64,
    pub revenue: f64,
}

/// The full revenue block of an assessment.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueEstimate {
    pub cpm: f64,
    pub ctr: f64,
    pub projection: Projection,
    pub by_category: Vec<CategoryRevenue>,
    pub history: Vec<HistoryPoint>,
}

/// What the estimator reads.
#[derive(Debug, Clone, Copy)]
pub struct RevenueInput {
    pub subscriber_count: u64,
    pub video_count: u64,
    /// Channel lifetime views, used for the views-per-video CPM tier.
    pub channel_view_count: u64,
    /// Views the projections are computed over (channel or single video).
    pub views: u64,
}

/// Round to cents.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// `views * rate / 1000`, the single revenue formula.
pub fn revenue_for(views: f64, rate: f64) -> f64 {
    views * rate / 1000.0
}

fn views_per_video(views: u64, videos: u64) -> f64 {
    if videos == 0 {
        0.0
    } else {
        views as f64 / videos as f64
    }
}

/// CPM before jitter: base plus a subscriber tier plus a views-per-video tier.
pub fn base_cpm(subscriber_count: u64, channel_view_count: u64, video_count: u64) -> f64 {
    let mut cpm = BASE_CPM;

    cpm += match subscriber_count {
        s if s > 100_000 => 1.50,
        s if s > 10_000 => 0.75,
        s if s > 1_000 => 0.25,
        _ => 0.0,
    };

    let vpv = views_per_video(channel_view_count, video_count);
    cpm += match vpv {
        v if v > 10_000.0 => 1.50,
        v if v > 5_000.0 => 1.00,
        v if v > 1_000.0 => 0.50,
        _ => 0.0,
    };

    cpm
}

/// Base CPM plus jitter in `[0, 0.5)`.
pub fn estimate_cpm<R: Rng + ?Sized>(
    subscriber_count: u64,
    channel_view_count: u64,
    video_count: u64,
    rng: &mut R,
) -> f64 {
    base_cpm(subscriber_count, channel_view_count, video_count)
        + rng.random_range(0.0..CPM_JITTER)
}

/// Click-through rate as a percentage in `[2, 10)`.
pub fn estimate_ctr<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(CTR_RANGE.0..CTR_RANGE.1)
}

/// Revenue across every category, in table order.
pub fn revenue_by_category(views: u64) -> Vec<CategoryRevenue> {
    CATEGORY_RPM
        .iter()
        .map(|&(category, rpm)| CategoryRevenue {
            category,
            rpm,
            revenue: round2(revenue_for(views as f64, rpm)),
        })
        .collect()
}

/// Daily views are `total / 365`; months are 30 days.
pub fn project(total_views: u64, cpm: f64) -> Projection {
    let daily_views = total_views as f64 / 365.0;
    let monthly_views = daily_views * 30.0;
    let yearly_views = daily_views * 365.0;

    Projection {
        daily_views,
        monthly_views,
        yearly_views,
        daily: round2(revenue_for(daily_views, cpm)),
        monthly: round2(revenue_for(monthly_views, cpm)),
        yearly: round2(revenue_for(yearly_views, cpm)),
    }
}

/// 31 fabricated days ending on `end_date`, views jittered ±20%.
pub fn synthetic_history<R: Rng + ?Sized>(
    daily_views: f64,
    cpm: f64,
    end_date: NaiveDate,
    rng: &mut R,
) -> Vec<HistoryPoint> {
    (0..HISTORY_DAYS)
        .map(|i| {
            let offset = (HISTORY_DAYS - 1 - i) as i64;
            let factor = rng.random_range((1.0 - HISTORY_JITTER)..(1.0 + HISTORY_JITTER));
            let views = (daily_views * factor).round().max(0.0) as u64;
            HistoryPoint {
                date: end_date - Duration::days(offset),
                views,
                revenue: round2(revenue_for(views as f64, cpm)),
            }
        })
        .collect()
}

/// Build the full revenue block. Draws CPM jitter, then CTR, then history.
pub fn estimate<R: Rng + ?Sized>(
    input: &RevenueInput,
    end_date: NaiveDate,
    rng: &mut R,
) -> RevenueEstimate {
    let cpm = estimate_cpm(
        input.subscriber_count,
        input.channel_view_count,
        input.video_count,
        rng,
    );
    let ctr = estimate_ctr(rng);
    let projection = project(input.views, cpm);
    let history = synthetic_history(projection.daily_views, cpm, end_date, rng);

    RevenueEstimate {
        cpm,
        ctr,
        projection,
        by_category: revenue_by_category(input.views),
        history,
    }
}
