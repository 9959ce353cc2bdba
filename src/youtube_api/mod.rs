//! YouTube Data API v3 client library.
//!
//! This module provides a client for the read-only slice of the YouTube
//! Data API v3 that feed aggregation needs: enumerating the authenticated
//! user's subscriptions, listing a channel's recent activities, and
//! fetching batched video details.
//!
//! The client authenticates with an opaque bearer credential supplied by
//! the caller. Acquiring and refreshing that credential (OAuth) is an
//! external concern; when the API rejects the credential the call fails
//! with [`ApiError::Auth`] and it is up to the surrounding service to
//! obtain a fresh one.
//!
//! Every endpoint wrapper fetches exactly one page. The three endpoints
//! used here each cost one quota unit per call, which is what makes
//! call-count budgeting in the [`feed`](crate::feed) layer meaningful.

pub mod activities;
pub mod client;
pub mod error;
pub mod subscriptions;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::YouTubeClient;
pub use error::ApiError;
pub use types::{PageInfo, Thumbnail, ThumbnailSet};

pub use activities::{
    Activity, ActivityContentDetails, ActivityListResponse, ActivitySnippet, ActivityType,
    ActivityUpload,
};
pub use subscriptions::{ResourceId, Subscription, SubscriptionListResponse, SubscriptionSnippet};
pub use videos::{Video, VideoContentDetails, VideoListResponse, VideoSnippet};
