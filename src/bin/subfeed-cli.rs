//! Manual end-to-end driver: aggregate one subscription feed and print it.
//!
//! Reads the bearer token from `YOUTUBE_ACCESS_TOKEN`; request knobs come
//! from flags. Obtain a token however your deployment does (for a quick
//! manual run, the OAuth playground works).

use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_subfeed::{FeedRequest, SubscriptionFeed, YouTubeClient};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let request = parse_args(std::env::args().skip(1))?;
    let token = std::env::var("YOUTUBE_ACCESS_TOKEN")
        .context("read YOUTUBE_ACCESS_TOKEN from the environment")?;

    let client = YouTubeClient::new(token, reqwest::Client::new());
    let feed = SubscriptionFeed::new(client);

    let response = feed
        .aggregate(&request)
        .await
        .context("aggregate subscription feed")?;

    eprintln!(
        "==> {} video(s) for {} quota unit(s)",
        response.count, response.quota_units_spent
    );
    for video in &response.videos {
        println!(
            "{}  {:<12}  [{}] {}",
            video.published_at, video.id, video.channel_title, video.title
        );
    }

    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> eyre::Result<FeedRequest> {
    let mut request = FeedRequest::default();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--max-results" => {
                request.max_results = next_value(&mut args, &flag)?
                    .parse()
                    .context("parse --max-results")?;
            }
            "--max-channels" => {
                request.max_channels = next_value(&mut args, &flag)?
                    .parse()
                    .context("parse --max-channels")?;
            }
            "--before" => {
                request.published_before = Some(
                    next_value(&mut args, &flag)?
                        .parse()
                        .context("parse --before as an RFC 3339 timestamp")?,
                );
            }
            "--exclude" => {
                request.exclude.extend(
                    next_value(&mut args, &flag)?
                        .split(',')
                        .map(str::to_string),
                );
            }
            _ => eyre::bail!(
                "unknown flag {flag}; known flags: --max-results, --max-channels, --before, --exclude"
            ),
        }
    }
    Ok(request)
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> eyre::Result<String> {
    args.next()
        .ok_or_else(|| eyre::eyre!("{flag} requires a value"))
}
