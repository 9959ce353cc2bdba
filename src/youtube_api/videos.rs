//! YouTube Videos API types.

use crate::youtube_api::types::{PageInfo, ThumbnailSet};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response structure for the `videos.list` API call.
///
/// Contains a list of [`Video`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    pub kind: String,
    /// A list of videos that match the request criteria.
    pub items: Vec<Video>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `video` resource represents a YouTube video.
///
/// Carries the snippet and content details needed to render a feed entry;
/// statistics and other parts are not requested.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Contains basic details about the video.
    pub snippet: VideoSnippet,
    /// Contains information about the video content, including its length.
    #[serde(rename = "contentDetails")]
    pub content_details: VideoContentDetails,
}

/// The snippet object contains basic details about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoSnippet {
    /// The video's title.
    pub title: String,
    /// The video's description.
    #[serde(default)]
    pub description: String,
    /// Channel title for the channel that the video belongs to.
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    /// The date and time that the video was published.
    ///
    /// Note that this time might be different than the time that the video
    /// was uploaded, e.g. for videos that premiered.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// A map of thumbnail images associated with the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailSet>,
    /// The default language of the video's audio track, when the uploader
    /// declared one.
    #[serde(rename = "defaultAudioLanguage", skip_serializing_if = "Option::is_none")]
    pub default_audio_language: Option<String>,
    /// The language of the video's default metadata (title and description).
    #[serde(rename = "defaultLanguage", skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}

/// The contentDetails object contains information about the video content.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoContentDetails {
    /// The length of the video as an ISO 8601 duration, e.g. `PT4M13S`.
    pub duration: String,
}
