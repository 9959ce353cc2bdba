//! The upstream collaborator seam and the records that cross it.
//!
//! The aggregator never talks to the YouTube API directly; it consumes
//! the three read capabilities below through [`UploadsSource`]. The
//! production implementation is [`YouTubeClient`]; tests substitute a
//! scripted in-memory source.

use crate::youtube_api::activities::{Activity, ActivityType};
use crate::youtube_api::client::YouTubeClient;
use crate::youtube_api::error::ApiError;
use crate::youtube_api::videos::Video;
use jiff::Timestamp;
use serde::Serialize;

/// One upload notification extracted from a channel's recent activity.
///
/// Short-lived: the aggregator reads the video id off it and discards the
/// rest once details are fetched.
#[derive(Debug, Clone)]
pub struct UploadEvent {
    /// Id of the uploaded video.
    pub video_id: String,
    /// Title of the uploaded video.
    pub title: String,
    /// Title of the channel that uploaded it.
    pub channel_title: String,
    /// When the upload happened.
    pub published_at: Timestamp,
    /// Preferred thumbnail URL, when the activity carried one.
    pub thumbnail_url: Option<String>,
}

/// Enriched record for one video, as handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDetail {
    /// Id of the video.
    pub id: String,
    /// The video's title.
    pub title: String,
    /// The video's description.
    pub description: String,
    /// Preferred thumbnail URL, when the video has one.
    pub thumbnail_url: Option<String>,
    /// The video's length as an ISO 8601 duration, e.g. `PT4M13S`.
    pub duration: String,
    /// Title of the channel the video belongs to.
    pub channel_title: String,
    /// When the video was published.
    pub published_at: Timestamp,
    /// Best-effort language of the video, when the uploader declared one.
    pub language: Option<String>,
}

/// Read capabilities the aggregator needs from the upstream catalog.
///
/// Each method corresponds to one upstream call costing one quota unit;
/// the aggregator does its own accounting around them. Implementations
/// fetch a single page and never retry.
#[allow(async_fn_in_trait)] // futures are polled in-task, no Send bound needed
pub trait UploadsSource {
    /// The caller's subscribed channel ids, at most `limit`, in whatever
    /// order the upstream returns them.
    async fn subscribed_channels(&self, limit: u32) -> Result<Vec<String>, ApiError>;

    /// A channel's most recent uploads, at most `limit`, optionally only
    /// those published before `published_before`. Non-upload channel
    /// activity is not reported.
    async fn recent_uploads(
        &self,
        channel_id: &str,
        limit: u32,
        published_before: Option<Timestamp>,
    ) -> Result<Vec<UploadEvent>, ApiError>;

    /// Full detail records for `video_ids` (at most 50 per call). Ids the
    /// upstream does not recognize are absent from the result.
    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>, ApiError>;
}

impl UploadsSource for YouTubeClient {
    async fn subscribed_channels(&self, limit: u32) -> Result<Vec<String>, ApiError> {
        let subscriptions = self.list_my_subscriptions(limit).await?;
        Ok(subscriptions
            .items
            .into_iter()
            .filter_map(|subscription| {
                let channel_id = subscription.snippet.resource_id.channel_id;
                if channel_id.is_none() {
                    // Subscriptions can point at non-channel resources.
                    tracing::debug!(
                        subscription = %subscription.id,
                        "subscription without a channel id, skipping"
                    );
                }
                channel_id
            })
            .collect())
    }

    async fn recent_uploads(
        &self,
        channel_id: &str,
        limit: u32,
        published_before: Option<Timestamp>,
    ) -> Result<Vec<UploadEvent>, ApiError> {
        let activities = self
            .list_channel_activities(channel_id, limit, published_before)
            .await?;
        Ok(activities
            .items
            .into_iter()
            .filter_map(upload_event)
            .collect())
    }

    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>, ApiError> {
        let videos = self.list_videos(video_ids).await?;
        Ok(videos.items.into_iter().map(VideoDetail::from).collect())
    }
}

/// Converts an activity into an upload event, dropping everything that is
/// not an upload (playlist adds, likes, ...) or that lacks the uploaded
/// video's id.
fn upload_event(activity: Activity) -> Option<UploadEvent> {
    if activity.snippet.kind != ActivityType::Upload {
        return None;
    }
    let Some(upload) = activity
        .content_details
        .and_then(|details| details.upload)
    else {
        tracing::debug!(activity = %activity.id, "upload activity without a video id, skipping");
        return None;
    };
    let thumbnail_url = activity
        .snippet
        .thumbnails
        .as_ref()
        .and_then(|thumbnails| thumbnails.preferred_url())
        .map(str::to_string);
    Some(UploadEvent {
        video_id: upload.video_id,
        title: activity.snippet.title,
        channel_title: activity.snippet.channel_title,
        published_at: activity.snippet.published_at,
        thumbnail_url,
    })
}

impl From<Video> for VideoDetail {
    fn from(video: Video) -> Self {
        let thumbnail_url = video
            .snippet
            .thumbnails
            .as_ref()
            .and_then(|thumbnails| thumbnails.preferred_url())
            .map(str::to_string);
        VideoDetail {
            id: video.id,
            title: video.snippet.title,
            description: video.snippet.description,
            thumbnail_url,
            duration: video.content_details.duration,
            channel_title: video.snippet.channel_title,
            published_at: video.snippet.published_at,
            language: video
                .snippet
                .default_audio_language
                .or(video.snippet.default_language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::activities::{ActivityContentDetails, ActivitySnippet, ActivityUpload};
    use crate::youtube_api::videos::{VideoContentDetails, VideoSnippet};
    use pretty_assertions::assert_eq;

    fn activity(kind: ActivityType, video_id: Option<&str>) -> Activity {
        Activity {
            id: "act".into(),
            snippet: ActivitySnippet {
                kind,
                title: "a title".into(),
                channel_title: "a channel".into(),
                published_at: Timestamp::from_second(1_714_561_200).unwrap(),
                thumbnails: None,
            },
            content_details: video_id.map(|id| ActivityContentDetails {
                upload: Some(ActivityUpload {
                    video_id: id.into(),
                }),
            }),
        }
    }

    #[test]
    fn only_uploads_become_events() {
        assert_eq!(
            upload_event(activity(ActivityType::Upload, Some("v1")))
                .map(|event| event.video_id),
            Some("v1".to_string())
        );
        assert!(upload_event(activity(ActivityType::PlaylistItem, Some("v1"))).is_none());
        assert!(upload_event(activity(ActivityType::Like, None)).is_none());
        // Declared an upload but the id is missing from contentDetails.
        assert!(upload_event(activity(ActivityType::Upload, None)).is_none());
    }

    #[test]
    fn video_detail_conversion_falls_back_for_language() {
        let video = Video {
            id: "v1".into(),
            snippet: VideoSnippet {
                title: "t".into(),
                description: "d".into(),
                channel_title: "c".into(),
                published_at: Timestamp::from_second(1_714_561_200).unwrap(),
                thumbnails: None,
                default_audio_language: None,
                default_language: Some("sv".into()),
            },
            content_details: VideoContentDetails {
                duration: "PT1M".into(),
            },
        };

        let detail = VideoDetail::from(video);
        assert_eq!(detail.language.as_deref(), Some("sv"));
        assert_eq!(detail.duration, "PT1M");
        assert_eq!(detail.thumbnail_url, None);
    }
}
