//! YouTube Subscriptions API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};

/// Response structure for the `subscriptions.list` API call.
///
/// Contains a list of [`Subscription`] resources that match the request
/// criteria, along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/subscriptions/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptionListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#subscriptionListResponse`.
    pub kind: String,
    /// A list of subscriptions that match the request criteria.
    pub items: Vec<Subscription>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `subscription` resource records that a user subscribes to a channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/subscriptions#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Subscription {
    /// The ID that YouTube uses to uniquely identify the subscription.
    pub id: String,
    /// Contains basic details about the subscription.
    pub snippet: SubscriptionSnippet,
}

/// The snippet object contains basic details about the subscription,
/// including the title and the channel the user subscribed to.
///
/// See: <https://developers.google.com/youtube/v3/docs/subscriptions#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptionSnippet {
    /// The subscription's title, which is the title of the subscribed channel.
    pub title: String,
    /// The id object identifies the resource the user subscribed to.
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

/// Identifies the resource a subscription points at. For channel
/// subscriptions the channel id is present; other resource kinds are not
/// useful here and leave it empty.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceId {
    /// The type of the API resource, e.g. `youtube#channel`.
    pub kind: String,
    /// The ID that YouTube uses to uniquely identify the subscribed channel.
    #[serde(rename = "channelId", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}
