//! Quota-budgeted aggregation of recent uploads across a user's
//! subscribed YouTube channels.
//!
//! The YouTube Data API charges every call against a small daily quota,
//! so a "what's new across my subscriptions" feed has to be deliberate
//! about each request it makes. This crate builds that feed from three
//! one-unit calls: one subscription enumeration, one activity page per
//! selected channel (bounded fan-out), and one detail lookup per batch of
//! up to 50 videos. Per-channel and per-batch failures degrade to missing
//! entries instead of failing the run.
//!
//! [`feed::SubscriptionFeed`] is the entry point; it talks to the API
//! through the [`feed::UploadsSource`] trait, implemented for
//! [`youtube_api::YouTubeClient`].
//!
//! ```rust,no_run
//! use youtube_subfeed::{FeedRequest, SubscriptionFeed, YouTubeClient};
//!
//! # async fn example() -> Result<(), youtube_subfeed::FeedError> {
//! let client = YouTubeClient::new("ya29.some-bearer-token".into(), reqwest::Client::new());
//! let feed = SubscriptionFeed::new(client);
//!
//! let response = feed.aggregate(&FeedRequest::default()).await?;
//! for video in &response.videos {
//!     println!("{}  [{}] {}", video.published_at, video.channel_title, video.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod feed;
pub mod youtube_api;

pub use feed::{
    FeedConfig, FeedError, FeedRequest, FeedResponse, SubscriptionFeed, UploadsSource, VideoDetail,
};
pub use youtube_api::{ApiError, YouTubeClient};
