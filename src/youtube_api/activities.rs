//! YouTube Activities API types.

use crate::youtube_api::types::{PageInfo, ThumbnailSet};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response structure for the `activities.list` API call.
///
/// Contains a list of [`Activity`] resources that match the request
/// criteria, along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/activities/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#activityListResponse`.
    pub kind: String,
    /// A list of activities that match the request criteria.
    pub items: Vec<Activity>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// An `activity` resource records an action a channel took: uploading a
/// video, adding to a playlist, liking, and so on.
///
/// Only upload activities carry a video id, inside
/// [`ActivityContentDetails::upload`].
///
/// See: <https://developers.google.com/youtube/v3/docs/activities#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Activity {
    /// The ID that YouTube uses to uniquely identify the activity.
    pub id: String,
    /// Contains basic details about the activity, including its type.
    pub snippet: ActivitySnippet,
    /// Identifies the resource associated with the activity. Absent for
    /// activity kinds that have no associated resource.
    #[serde(rename = "contentDetails", skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ActivityContentDetails>,
}

/// The snippet object contains basic details about the activity.
///
/// See: <https://developers.google.com/youtube/v3/docs/activities#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivitySnippet {
    /// The type of activity the resource describes.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// The title of the resource primarily associated with the activity.
    pub title: String,
    /// Channel title for the channel responsible for this activity.
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    /// The date and time that the activity occurred.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// A map of thumbnail images associated with the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailSet>,
}

/// The type of activity the resource describes.
///
/// Unrecognized values deserialize to [`ActivityType::Unknown`] so a new
/// activity kind on the wire never breaks a whole page of results.
///
/// See: <https://developers.google.com/youtube/v3/docs/activities#snippet.type>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    Upload,
    Bulletin,
    ChannelItem,
    Comment,
    Favorite,
    Like,
    PlaylistItem,
    PromotedItem,
    Recommendation,
    Social,
    Subscription,
    #[serde(other)]
    Unknown,
}

/// The contentDetails object contains information about the resource
/// associated with the activity.
///
/// See: <https://developers.google.com/youtube/v3/docs/activities#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityContentDetails {
    /// Information about the uploaded video. Only present when the
    /// activity's type is `upload`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<ActivityUpload>,
}

/// The upload object, identifying the video the channel uploaded.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityUpload {
    /// The ID that YouTube uses to uniquely identify the uploaded video.
    #[serde(rename = "videoId")]
    pub video_id: String,
}
