// Colored terminal output for assessments and the category table.
//
// This module handles all terminal-specific formatting. main.rs only
// decides between this and JSON.

use colored::Colorize;

use super::{group_thousands, truncate_chars};
use crate::pipeline::check::{MonetizationAssessment, Subject};
use crate::scoring::lookups::CreatorTier;
use crate::scoring::revenue::{CategoryRevenue, CATEGORY_RPM};

/// Display a full assessment.
pub fn display_assessment(a: &MonetizationAssessment) {
    let channel = a.subject.channel();

    match &a.subject {
        Subject::Channel(_) => {
            println!("\n{}", format!("=== {} ===", channel.title).bold());
        }
        Subject::Video(v) => {
            println!("\n{}", format!("=== {} ===", v.title).bold());
            println!("  by {}", channel.title);
            println!(
                "  Views: {}  Likes: {}  Comments: {}  Length: {}",
                group_thousands(v.view_count),
                group_thousands(v.like_count),
                group_thousands(v.comment_count),
                format_duration(v.duration_seconds),
            );
        }
    }

    if let Some(url) = &channel.custom_url {
        println!("  {}", url.dimmed());
    }
    println!(
        "  Subscribers: {}{}  Videos: {}  Views: {}",
        group_thousands(channel.subscriber_count),
        if channel.hidden_subscriber_count { " (hidden)" } else { "" },
        group_thousands(channel.video_count),
        group_thousands(channel.view_count),
    );
    println!(
        "  Tier: {}  Country: {}  Language: {}  Age: {} days",
        colorize_tier(a.tier),
        a.country.name,
        a.language.name,
        channel.age_days,
    );
    if !channel.description.is_empty() {
        println!(
            "  {}",
            truncate_chars(&channel.description.replace('\n', " "), 120).dimmed()
        );
    }

    // Verdict
    let verdict = if a.verdict.is_monetized {
        "MONETIZED (likely)".green().bold()
    } else {
        "NOT MONETIZED (likely)".red().bold()
    };
    println!("\n  Verdict: {verdict}");
    println!(
        "  Score: {}/{}  Est. watch time: {} h",
        a.verdict.score,
        a.verdict.max_score,
        group_thousands(a.verdict.estimated_watch_time_hours.round() as u64),
    );

    let f = &a.verdict.factors;
    println!();
    print_factor("Channel memberships (join button)", f.has_join_button);
    print_factor("Ads in videos", f.has_ads_in_videos);
    print_factor("MCN / partnership keywords", f.has_mcn_partnership);
    print_factor("Passes authenticity check", f.passes_authenticity);
    print_factor("1,000+ subscribers", f.has_enough_subscribers);
    print_factor("4,000+ watch hours", f.has_enough_watch_time);

    // Revenue
    let r = &a.revenue;
    println!("\n{}", "=== Estimated Revenue ===".bold());
    println!("  CPM: ${:.2}  CTR: {:.1}%", r.cpm, r.ctr);
    println!(
        "  Daily:   ${:>12.2}  ({} views)",
        r.projection.daily,
        group_thousands(r.projection.daily_views.round() as u64)
    );
    println!(
        "  Monthly: ${:>12.2}  ({} views)",
        r.projection.monthly,
        group_thousands(r.projection.monthly_views.round() as u64)
    );
    println!("  Yearly:  ${:>12.2}", r.projection.yearly);

    println!("\n  By category:");
    display_category_rows(&r.by_category);

    if !channel.sampled_videos.is_empty() {
        println!(
            "\n  {}",
            format!(
                "Average of {} recent uploads: {}",
                channel.sampled_videos.len(),
                format_duration(channel.average_duration_seconds.round() as u64)
            )
            .dimmed()
        );
    }
    println!(
        "  {}",
        "Estimates only. Figures are illustrative, not real earnings.".dimmed()
    );
}

/// Display the flat RPM table.
pub fn display_categories() {
    println!("\n{}", "=== RPM by category (USD per 1,000 views) ===".bold());
    for (name, rpm) in CATEGORY_RPM.iter() {
        println!("  {:<20} ${:>6.2}", name, rpm);
    }
}

fn display_category_rows(rows: &[CategoryRevenue]) {
    for row in rows {
        println!(
            "    {:<20} {:>8}  ${:>12.2}",
            row.category,
            format!("${:.2}", row.rpm).dimmed(),
            row.revenue
        );
    }
}

fn print_factor(label: &str, on: bool) {
    let mark = if on { "✓".green() } else { "✗".red() };
    println!("  {mark} {label}");
}

/// `h:mm:ss` for an hour or more, `m:ss` otherwise.
fn format_duration(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// Colorize a creator tier.
fn colorize_tier(tier: CreatorTier) -> colored::ColoredString {
    let s = tier.as_str();
    match tier {
        CreatorTier::RedDiamond => s.red().bold(),
        CreatorTier::Diamond => s.cyan().bold(),
        CreatorTier::Gold => s.yellow().bold(),
        CreatorTier::Silver => s.white(),
        CreatorTier::Bronze => s.yellow(),
        _ => s.dimmed(),
    }
}
