// ISO-8601 duration parsing for `contentDetails.duration`.

use std::sync::LazyLock;

use regex_lite::Regex;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").expect("valid regex")
});

/// Convert `P1DT2H3M4S`-style durations to seconds. Malformed input is 0.
pub fn parse_iso8601_seconds(raw: &str) -> u64 {
    let Some(caps) = DURATION_RE.captures(raw.trim()) else {
        return 0;
    };

    let part = |i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    part(1) * 86_400 + part(2) * 3_600 + part(3) * 60 + part(4)
}
