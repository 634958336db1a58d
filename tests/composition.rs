// Composition tests: the full check pipeline against a recording fake API.
//
// These exercise URL resolution -> fallback chain -> sampling -> scoring
// -> revenue without any network access. The fake logs every call so the
// fallback order can be asserted exactly.

mod common;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{channel_item, video_item, FakeApi};
use ytmonetize::error::{CheckError, Resource};
use ytmonetize::pipeline::check::{check_url, CheckOptions, Subject};
use ytmonetize::scoring::revenue::{round2, CATEGORY_RPM};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-31T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// The documented reference channel: 2000 subs, 50 videos, 200k views,
/// "sponsored" in the bio, 10-minute average upload.
fn reference_api() -> FakeApi {
    FakeApi::default()
        .with_channel(channel_item(
            "UCreference",
            2_000,
            50,
            200_000,
            "New videos weekly. This channel is sponsored by coffee.",
            Some("UUreference"),
        ))
        .with_playlist("UUreference", &["v1", "v2"])
        .with_video(video_item("v1", "UCreference", 4_000, "PT5M"))
        .with_video(video_item("v2", "UCreference", 4_000, "PT15M"))
}

// ============================================================
// Input validation
// ============================================================

#[tokio::test]
async fn invalid_url_rejected_before_any_call() {
    let api = FakeApi::default();
    let err = check_url(&api, "https://example.com/foo", &CheckOptions::default(), &mut rng(), now())
        .await
        .unwrap_err();

    assert!(matches!(err, CheckError::InvalidInput));
    assert!(api.calls().is_empty(), "unexpected calls: {:?}", api.calls());
}

#[tokio::test]
async fn plain_text_rejected_before_any_call() {
    let api = FakeApi::default();
    let err = check_url(&api, "not a url at all", &CheckOptions::default(), &mut rng(), now())
        .await
        .unwrap_err();
    assert!(matches!(err, CheckError::InvalidInput));
    assert!(api.calls().is_empty());
}

// ============================================================
// Channel fallback chain
// ============================================================

#[tokio::test]
async fn canonical_id_fetches_directly() {
    let api = reference_api();
    let a = check_url(
        &api,
        "https://www.youtube.com/channel/UCreference",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    assert_eq!(
        api.calls(),
        vec![
            "channels_by_id:UCreference",
            "playlist:UUreference",
            "videos:v1,v2",
        ]
    );
    assert_eq!(api.count_calls("channels_by_username"), 0);
    assert_eq!(a.subject.channel().id, "UCreference");
}

#[tokio::test]
async fn username_miss_triggers_exactly_one_search() {
    let api = reference_api().with_search_hit("coffeechannel", "UCreference");

    let a = check_url(
        &api,
        "https://www.youtube.com/@coffeechannel",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    assert_eq!(api.count_calls("channels_by_username"), 1);
    assert_eq!(api.count_calls("search"), 1);
    assert_eq!(
        &api.calls()[..3],
        &[
            "channels_by_username:coffeechannel",
            "search:coffeechannel",
            "channels_by_id:UCreference",
        ]
    );
    assert_eq!(a.subject.channel().id, "UCreference");
}

#[tokio::test]
async fn encoded_handle_is_looked_up_decoded() {
    let api = FakeApi::default().with_username(
        "Some One",
        channel_item("UCsomeone", 500, 5, 1_000, "", None),
    );

    let a = check_url(
        &api,
        "https://www.youtube.com/@Some%20One",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    assert_eq!(api.calls(), vec!["channels_by_username:Some One"]);
    assert_eq!(a.subject.channel().id, "UCsomeone");
}

#[tokio::test]
async fn username_hit_skips_search() {
    let api = FakeApi::default().with_username(
        "oldschool",
        channel_item("UColdschool", 500, 5, 1_000, "", None),
    );

    let a = check_url(
        &api,
        "https://www.youtube.com/user/oldschool",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    assert_eq!(api.calls(), vec!["channels_by_username:oldschool"]);
    assert_eq!(a.subject.channel().id, "UColdschool");
}

#[tokio::test]
async fn custom_url_goes_through_name_lookup() {
    // /c/ paths are names even when they look like an ID
    let api = reference_api();
    let err = check_url(
        &api,
        "https://www.youtube.com/c/UCreference",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CheckError::NotFound(Resource::Channel)));
    assert_eq!(
        api.calls(),
        vec!["channels_by_username:UCreference", "search:UCreference"]
    );
}

#[tokio::test]
async fn exhausted_chain_is_channel_not_found() {
    let api = FakeApi::default();
    let err = check_url(
        &api,
        "https://www.youtube.com/@nobody",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CheckError::NotFound(Resource::Channel)));
    assert_eq!(err.to_string(), "Channel not found");
}

#[tokio::test]
async fn upstream_failure_aborts_with_status() {
    let api = FakeApi {
        channel_failure: Some(403),
        ..FakeApi::default()
    };
    let err = check_url(
        &api,
        "https://www.youtube.com/channel/UCanything",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CheckError::UpstreamFailure { status: 403 }));
    assert_eq!(err.to_string(), "API error: 403");
}

// ============================================================
// Video flow
// ============================================================

#[tokio::test]
async fn video_fetches_owner_channel() {
    let api = reference_api().with_video(video_item("dQw4w9WgXcQ", "UCreference", 90_000, "PT3M33S"));

    let a = check_url(
        &api,
        "https://youtu.be/dQw4w9WgXcQ",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    assert_eq!(
        &api.calls()[..2],
        &["videos:dQw4w9WgXcQ", "channels_by_id:UCreference"]
    );
    match &a.subject {
        Subject::Video(v) => {
            assert_eq!(v.id, "dQw4w9WgXcQ");
            assert_eq!(v.duration_seconds, 213);
            assert_eq!(v.channel.id, "UCreference");
        }
        other => panic!("expected video subject, got {other:?}"),
    }
    // Factors are channel-level, revenue is video-level
    assert_eq!(a.verdict.score, 12);
    let finance = a.revenue.by_category.last().unwrap();
    assert_eq!(finance.revenue, round2(90_000.0 * 10.0 / 1000.0));
}

#[tokio::test]
async fn missing_video_is_video_not_found() {
    let api = reference_api();
    let err = check_url(
        &api,
        "https://www.youtube.com/watch?v=AAAAAAAAAAA",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CheckError::NotFound(Resource::Video)));
    assert_eq!(api.calls(), vec!["videos:AAAAAAAAAAA"]);
}

#[tokio::test]
async fn video_without_owner_skips_channel_lookup() {
    let api = FakeApi::default().with_video(video_item("orphanvideo", "", 5_000, "PT1M"));
    let err = check_url(
        &api,
        "https://youtu.be/orphanvideo",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CheckError::NotFound(Resource::Channel)));
    assert_eq!(api.calls(), vec!["videos:orphanvideo"]);
}

// ============================================================
// Sampling and scoring
// ============================================================

#[tokio::test]
async fn reference_channel_scores_twelve() {
    let api = reference_api();
    let a = check_url(
        &api,
        "https://www.youtube.com/channel/UCreference",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    let channel = a.subject.channel();
    assert_eq!(channel.sampled_videos.len(), 2);
    assert_eq!(channel.average_duration_seconds, 600.0);
    assert_eq!(a.verdict.score, 12);
    assert!(a.verdict.is_monetized);
    assert!(a.verdict.estimated_watch_time_hours > 33_333.0);
    assert_eq!(a.country.name, "United States");
    assert_eq!(a.language.name, "English");
    assert_eq!(a.tier.as_str(), "Opal");
}

#[tokio::test]
async fn sampling_failure_degrades_to_zero_duration() {
    let api = FakeApi {
        playlist_failure: Some(500),
        ..reference_api()
    };

    let a = check_url(
        &api,
        "https://www.youtube.com/channel/UCreference",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    let channel = a.subject.channel();
    assert!(channel.sampled_videos.is_empty());
    assert_eq!(channel.average_duration_seconds, 0.0);
    // Watch-time factor (3) drops out: 12 - 3
    assert!(!a.verdict.factors.has_enough_watch_time);
    assert_eq!(a.verdict.score, 9);
}

#[tokio::test]
async fn sample_size_caps_playlist_request() {
    let api = reference_api();
    let options = CheckOptions {
        sample_size: 1,
        ..CheckOptions::default()
    };
    let a = check_url(
        &api,
        "https://www.youtube.com/channel/UCreference",
        &options,
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    assert!(api.calls().contains(&"videos:v1".to_string()));
    assert_eq!(a.subject.channel().sampled_videos.len(), 1);
    assert_eq!(a.subject.channel().average_duration_seconds, 300.0);
}

// ============================================================
// Revenue block
// ============================================================

#[tokio::test]
async fn category_table_matches_formula() {
    let api = reference_api();
    let a = check_url(
        &api,
        "https://www.youtube.com/channel/UCreference",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    assert_eq!(a.revenue.by_category.len(), 14);
    for (row, (name, rpm)) in a.revenue.by_category.iter().zip(CATEGORY_RPM.iter()) {
        assert_eq!(row.category, *name);
        assert_eq!(row.revenue, round2(200_000.0 * rpm / 1000.0));
    }
    assert_eq!(a.revenue.history.len(), 31);
    assert_eq!(a.revenue.history.last().unwrap().date, now().date_naive());
}

#[tokio::test]
async fn same_seed_same_figures() {
    let url = "https://www.youtube.com/channel/UCreference";
    let api = reference_api();

    let a = check_url(&api, url, &CheckOptions::default(), &mut StdRng::seed_from_u64(9), now())
        .await
        .unwrap();
    let b = check_url(&api, url, &CheckOptions::default(), &mut StdRng::seed_from_u64(9), now())
        .await
        .unwrap();

    assert_eq!(a.revenue.cpm, b.revenue.cpm);
    assert_eq!(a.revenue.ctr, b.revenue.ctr);
    assert_eq!(a.revenue.history, b.revenue.history);
}

#[tokio::test]
async fn assessment_serializes_to_json() {
    let api = reference_api();
    let a = check_url(
        &api,
        "https://www.youtube.com/channel/UCreference",
        &CheckOptions::default(),
        &mut rng(),
        now(),
    )
    .await
    .unwrap();

    let value = serde_json::to_value(&a).unwrap();
    assert_eq!(value["subject"]["type"], "channel");
    assert_eq!(value["score"], 12);
    assert_eq!(value["is_monetized"], true);
    assert_eq!(value["factors"]["has_mcn_partnership"], true);
    assert_eq!(value["tier"], "Opal");
    assert_eq!(value["revenue"]["by_category"][0]["category"], "Shorts");
}
