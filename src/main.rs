use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use ytmonetize::config::Config;
use ytmonetize::pipeline::check::{self, CheckOptions};
use ytmonetize::youtube::client::YoutubeClient;

/// ytmonetize: is this YouTube channel monetized?
///
/// Fetches public channel or video data from the YouTube Data API and
/// combines it into a heuristic monetization verdict plus illustrative
/// revenue estimates.
#[derive(Parser)]
#[command(name = "ytmonetize", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a channel or video URL
    Check {
        /// Channel (/channel/, /c/, /user/, /@handle) or video URL
        url: String,

        /// Print the assessment as JSON instead of a report
        #[arg(long)]
        json: bool,

        /// Seed the random source for reproducible revenue figures
        #[arg(long)]
        seed: Option<u64>,

        /// Recent uploads to sample for the average duration (max 10)
        #[arg(long)]
        sample: Option<u32>,
    },

    /// Show the RPM-by-category table
    Categories,

    /// Serve the JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ytmonetize=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            url,
            json,
            seed,
            sample,
        } => {
            let config = Config::load()?;
            config.require_api_key()?;
            info!(url = url.as_str(), "Checking URL");

            let client = YoutubeClient::from_config(&config)?;
            let options = CheckOptions {
                sample_size: sample.unwrap_or(config.sample_size),
                ..CheckOptions::default()
            };
            let mut rng = match seed.or(config.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let spinner = (!json).then(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("  {spinner} {msg}")
                        .expect("valid template"),
                );
                pb.set_message("Fetching channel data...");
                pb.enable_steady_tick(std::time::Duration::from_millis(100));
                pb
            });

            let result = check::check_url(&client, &url, &options, &mut rng, Utc::now()).await;

            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            let assessment = match result {
                Ok(a) => a,
                Err(e) => {
                    if json {
                        println!("{}", serde_json::json!({ "error": e.to_string() }));
                    } else {
                        println!("{} {}", "Error:".red().bold(), e);
                    }
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                ytmonetize::output::terminal::display_assessment(&assessment);
            }
        }

        Commands::Categories => {
            ytmonetize::output::terminal::display_categories();
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            use std::sync::Arc;

            let config = Config::load()?;
            config.require_api_key()?;
            info!("Starting web server");

            let client = YoutubeClient::from_config(&config)?;
            let state = ytmonetize::web::AppState {
                api: Arc::new(client),
                options: Arc::new(CheckOptions {
                    sample_size: config.sample_size,
                    ..CheckOptions::default()
                }),
                seed: config.seed,
            };
            ytmonetize::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}
