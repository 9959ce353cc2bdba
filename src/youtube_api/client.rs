//! Core YouTube API client functionality.

use crate::youtube_api::activities::ActivityListResponse;
use crate::youtube_api::error::ApiError;
use crate::youtube_api::subscriptions::SubscriptionListResponse;
use crate::youtube_api::videos::VideoListResponse;
use http::Method;
use jiff::Timestamp;
use std::fmt;
use tracing::instrument;

/// Client for the YouTube Data API v3 read endpoints this crate needs.
///
/// The client carries an opaque bearer credential supplied by the caller;
/// minting and refreshing that credential is someone else's job, so the
/// client never inspects it and treats a rejection as [`ApiError::Auth`].
///
/// Cloning is cheap: the underlying [`reqwest::Client`] is already a
/// shared handle, so one client can be handed to many tasks.
#[derive(Clone)]
pub struct YouTubeClient {
    /// Opaque bearer token placed on the `Authorization` header.
    credential: String,
    /// HTTP client for API requests.
    client: reqwest::Client,
}

impl fmt::Debug for YouTubeClient {
    // The credential must never end up in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("credential", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Creates a new client from a bearer credential and a shared HTTP client.
    ///
    /// The credential is used as-is for every request. Callers that want
    /// per-request timeouts configure them on `client`; a timed-out call
    /// surfaces as [`ApiError::Transient`] like any other network failure.
    pub fn new(credential: String, client: reqwest::Client) -> Self {
        Self { credential, client }
    }

    /// Makes an authenticated GET-style request to the YouTube API with
    /// common error handling.
    ///
    /// This consolidates the shared logic across all API requests:
    /// - Authorization header setup
    /// - Query parameters
    /// - Status code validation and error classification
    ///
    /// # Returns
    ///
    /// The raw [`reqwest::Response`] for method-specific JSON parsing.
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn make_authenticated_request(
        &self,
        method: Method,
        url: &str,
        query_params: &[(&str, &str)],
    ) -> Result<reqwest::Response, ApiError> {
        let response = self
            .client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.credential))
            .query(query_params)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::from_status(status_code, &error_text));
        }

        Ok(response)
    }

    /// Lists the authenticated user's channel subscriptions, one page only.
    ///
    /// Uses the `subscriptions.list` API with `mine=true`. Upstream order
    /// is preserved as given; the API's notion of ordering is not part of
    /// this client's contract.
    ///
    /// # Arguments
    ///
    /// * `max_results` - Maximum number of subscriptions to return (1-50)
    ///
    /// # API Cost
    ///
    /// This operation costs 1 quota unit per call.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube.readonly`
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/subscriptions/list>
    #[instrument(skip(self))]
    pub async fn list_my_subscriptions(
        &self,
        max_results: u32,
    ) -> Result<SubscriptionListResponse, ApiError> {
        let url = "https://www.googleapis.com/youtube/v3/subscriptions";
        let max_results_string = max_results.to_string();
        let query_params = [
            ("part", "snippet"),
            ("mine", "true"),
            ("maxResults", max_results_string.as_str()),
        ];

        let response = self
            .make_authenticated_request(Method::GET, url, &query_params)
            .await?;

        let subscriptions: SubscriptionListResponse =
            response.json().await.map_err(ApiError::Decode)?;

        tracing::debug!(
            total_results = subscriptions.page_info.total_results,
            returned_items = subscriptions.items.len(),
            "fetched subscriptions"
        );

        Ok(subscriptions)
    }

    /// Lists a channel's recent activities, one page only.
    ///
    /// Uses the `activities.list` API. The response mixes activity kinds;
    /// callers that only care about uploads filter on
    /// [`ActivityType::Upload`](crate::youtube_api::activities::ActivityType).
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The channel whose activities to list
    /// * `max_results` - Maximum number of activities to return (1-50)
    /// * `published_before` - Only activities that occurred before this instant
    ///
    /// # API Cost
    ///
    /// This operation costs 1 quota unit per call.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/activities/list>
    #[instrument(skip(self))]
    pub async fn list_channel_activities(
        &self,
        channel_id: &str,
        max_results: u32,
        published_before: Option<Timestamp>,
    ) -> Result<ActivityListResponse, ApiError> {
        let url = "https://www.googleapis.com/youtube/v3/activities";
        let max_results_string = max_results.to_string();
        let cutoff_string = published_before.map(|cutoff| cutoff.to_string());
        let mut query_params = vec![
            ("part", "snippet,contentDetails"),
            ("channelId", channel_id),
            ("maxResults", max_results_string.as_str()),
        ];

        // publishedBefore takes an RFC 3339 timestamp
        if let Some(ref cutoff) = cutoff_string {
            query_params.push(("publishedBefore", cutoff.as_str()));
        }

        let response = self
            .make_authenticated_request(Method::GET, url, &query_params)
            .await?;

        let activities: ActivityListResponse = response.json().await.map_err(ApiError::Decode)?;

        tracing::debug!(
            channel_id,
            total_results = activities.page_info.total_results,
            returned_items = activities.items.len(),
            "fetched channel activities"
        );

        Ok(activities)
    }

    /// Fetches full video records for up to 50 video ids in one call.
    ///
    /// Uses the `videos.list` API with a comma-joined id filter, which is
    /// the endpoint's batched form: one quota unit buys details for the
    /// whole id set. Ids the API does not recognize are silently absent
    /// from the response.
    ///
    /// # Arguments
    ///
    /// * `video_ids` - The video ids to look up; at most 50 per call
    ///
    /// # API Cost
    ///
    /// This operation costs 1 quota unit per call, irrespective of how
    /// many ids it carries.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, video_ids), fields(requested = video_ids.len()))]
    pub async fn list_videos(&self, video_ids: &[String]) -> Result<VideoListResponse, ApiError> {
        let url = "https://www.googleapis.com/youtube/v3/videos";
        let ids = video_ids.join(",");
        let query_params = [("part", "snippet,contentDetails"), ("id", ids.as_str())];

        let response = self
            .make_authenticated_request(Method::GET, url, &query_params)
            .await?;

        let videos: VideoListResponse = response.json().await.map_err(ApiError::Decode)?;

        tracing::debug!(
            requested = video_ids.len(),
            returned_items = videos.items.len(),
            "fetched video details"
        );

        Ok(videos)
    }
}
