use std::env;

use anyhow::{Context, Result};

use crate::youtube::client::DEFAULT_API_URL;

/// Largest number of recent uploads sampled for the average duration.
pub const MAX_SAMPLE_SIZE: u32 = 10;

/// Central configuration loaded from environment variables.
///
/// The API key comes from the environment (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API v3 key (YOUTUBE_API_KEY).
    pub api_key: String,
    /// Base URL of the Data API. Point this at a mock server for testing.
    pub api_url: String,
    /// How many recent uploads to sample (1..=10).
    pub sample_size: u32,
    /// Fixed RNG seed for reproducible CPM/CTR/history output.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API key has a default; call `require_api_key`
    /// before any operation that talks to YouTube.
    pub fn load() -> Result<Self> {
        let sample_size = match env::var("YTMONETIZE_SAMPLE_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("YTMONETIZE_SAMPLE_SIZE is not a number: {raw}"))?,
            Err(_) => MAX_SAMPLE_SIZE,
        };

        let seed = match env::var("YTMONETIZE_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("YTMONETIZE_SEED is not a u64: {raw}"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            api_url: env::var("YOUTUBE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            sample_size: clamp_sample_size(sample_size),
            seed,
        })
    }

    /// Check that the YouTube API key is configured.
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "YOUTUBE_API_KEY not set. Add it to your .env file.\n\
                 Create a key at https://console.cloud.google.com/apis/credentials"
            );
        }
        Ok(())
    }
}

fn clamp_sample_size(n: u32) -> u32 {
    n.clamp(1, MAX_SAMPLE_SIZE)
}
