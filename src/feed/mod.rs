//! Quota-budgeted aggregation of recent uploads across subscribed channels.
//!
//! The pipeline turns "the caller's subscription list" into a
//! deduplicated, recency-sorted, size-bounded list of video details while
//! spending as few upstream calls as possible:
//!
//! 1. enumerate subscribed channels, capped by the request's channel budget
//! 2. fan out per-channel activity fetches with bounded concurrency
//! 3. drop video ids the caller has already seen, before paying for details
//! 4. fetch full details in batches of up to 50 ids
//! 5. sort by recency and truncate to the requested size
//!
//! Partial failure is the norm on this path: a channel or detail batch
//! that fails contributes nothing and the run carries on. Only two things
//! abort a run: a request that fails validation, and a failed subscription
//! enumeration (with no channels, no feed is possible).

mod quota;
mod source;

pub use quota::QuotaLedger;
pub use source::{UploadEvent, UploadsSource, VideoDetail};

use crate::youtube_api::error::ApiError;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Hard range for [`FeedRequest::max_results`].
const MAX_RESULTS_RANGE: RangeInclusive<u32> = 1..=100;
/// Hard range for [`FeedRequest::max_channels`].
const MAX_CHANNELS_RANGE: RangeInclusive<u32> = 1..=50;
/// The `videos.list` endpoint accepts at most this many ids per call.
const DETAIL_BATCH_SIZE: usize = 50;
/// Activity events requested per channel are capped here no matter how
/// many results the caller asked for overall.
const ACTIVITIES_PER_CHANNEL: u32 = 10;
/// One page of subscriptions.
const SUBSCRIPTION_PAGE_LIMIT: u32 = 50;

/// Why an aggregation run produced no feed at all.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The request failed validation; nothing was sent upstream.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Subscription enumeration failed. Without the channel list no data
    /// is possible, so the error kind is surfaced as-is.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The caller's query.
#[derive(Debug, Clone)]
pub struct FeedRequest {
    /// Upper bound on returned videos, within 1..=100.
    pub max_results: u32,
    /// Upper bound on the number of channels ever queried for uploads,
    /// within 1..=50, regardless of how many subscriptions exist.
    pub max_channels: u32,
    /// Only consider uploads published before this instant.
    pub published_before: Option<jiff::Timestamp>,
    /// Video ids the caller has already seen; these are dropped before
    /// details are fetched and never appear in the response.
    pub exclude: HashSet<String>,
}

impl Default for FeedRequest {
    fn default() -> Self {
        Self {
            max_results: 25,
            max_channels: 15,
            published_before: None,
            exclude: HashSet::new(),
        }
    }
}

impl FeedRequest {
    fn validate(&self) -> Result<(), FeedError> {
        if !MAX_RESULTS_RANGE.contains(&self.max_results) {
            return Err(FeedError::InvalidRequest(format!(
                "max_results must be within {}..={}, got {}",
                MAX_RESULTS_RANGE.start(),
                MAX_RESULTS_RANGE.end(),
                self.max_results
            )));
        }
        if !MAX_CHANNELS_RANGE.contains(&self.max_channels) {
            return Err(FeedError::InvalidRequest(format!(
                "max_channels must be within {}..={}, got {}",
                MAX_CHANNELS_RANGE.start(),
                MAX_CHANNELS_RANGE.end(),
                self.max_channels
            )));
        }
        Ok(())
    }
}

/// Tunables that belong to the deployment, not to any one request.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Maximum concurrent per-channel activity fetches.
    pub fan_out: usize,
    /// Upstream call-cost budget for one run. `None` means the ledger
    /// only observes; `Some(n)` stops new upstream calls from being
    /// issued once `n` units are spent, returning whatever was already
    /// assembled.
    pub quota_budget: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            fan_out: 10,
            quota_budget: None,
        }
    }
}

/// Aggregated feed for one request.
#[derive(Debug, Clone, Serialize)]
pub struct FeedResponse {
    /// Upload details, most recent first.
    pub videos: Vec<VideoDetail>,
    /// Convenience copy of `videos.len()`.
    pub count: usize,
    /// Upstream call-cost units this run consumed.
    pub quota_units_spent: u64,
}

/// The aggregator: an upstream source plus deployment tunables.
///
/// Stateless across runs; every [`aggregate`](SubscriptionFeed::aggregate)
/// call starts a fresh quota ledger and shares nothing with other calls.
#[derive(Debug, Clone)]
pub struct SubscriptionFeed<S> {
    source: S,
    config: FeedConfig,
}

impl<S: UploadsSource> SubscriptionFeed<S> {
    /// Creates an aggregator with the default tunables.
    pub fn new(source: S) -> Self {
        Self::with_config(source, FeedConfig::default())
    }

    /// Creates an aggregator with explicit tunables.
    pub fn with_config(source: S, config: FeedConfig) -> Self {
        Self { source, config }
    }

    /// Aggregates recent uploads across the caller's subscriptions.
    ///
    /// Returns an empty feed (not an error) when the user has no
    /// subscriptions, when every channel fetch fails, or when the quota
    /// budget ran out before any details could be fetched: the feed
    /// favors availability over completeness everywhere past
    /// enumeration.
    pub async fn aggregate(&self, request: &FeedRequest) -> Result<FeedResponse, FeedError> {
        request.validate()?;

        let ledger = match self.config.quota_budget {
            Some(units) => QuotaLedger::with_budget(units),
            None => QuotaLedger::observing(),
        };

        let channels = self.enumerate_channels(request, &ledger).await?;
        let uploads = self.fetch_recent_uploads(&channels, request, &ledger).await;
        let wanted = unseen_video_ids(uploads, &request.exclude);
        let details = self.fetch_details(&wanted, &ledger).await;
        let videos = assemble(details, request.max_results as usize);

        tracing::info!(
            videos = videos.len(),
            channels = channels.len(),
            quota_units = ledger.spent(),
            "assembled subscription feed"
        );

        Ok(FeedResponse {
            count: videos.len(),
            quota_units_spent: ledger.spent(),
            videos,
        })
    }

    /// Resolves the subscription list into at most `max_channels` channel
    /// ids. Enumeration over-fetches (twice the channel budget, capped at
    /// one page) so that truncation still has something to choose from
    /// when some entries are unusable.
    async fn enumerate_channels(
        &self,
        request: &FeedRequest,
        ledger: &QuotaLedger,
    ) -> Result<Vec<String>, FeedError> {
        if !ledger.try_reserve(1) {
            tracing::warn!("quota budget cannot cover subscription enumeration");
            return Ok(Vec::new());
        }
        let fetch_limit = (request.max_channels * 2).min(SUBSCRIPTION_PAGE_LIMIT);
        let mut channels = self.source.subscribed_channels(fetch_limit).await?;
        channels.truncate(request.max_channels as usize);
        tracing::debug!(channels = channels.len(), "selected channels for fan-out");
        Ok(channels)
    }

    /// Fetches recent uploads for every selected channel, at most
    /// `fan_out` in flight at a time. The bounded stream yields results
    /// in channel order, which keeps the eventual tie-break stable.
    ///
    /// A channel that fails, for whatever reason, contributes zero
    /// events; the failure is logged and the run continues.
    async fn fetch_recent_uploads(
        &self,
        channels: &[String],
        request: &FeedRequest,
        ledger: &QuotaLedger,
    ) -> Vec<UploadEvent> {
        let per_channel = request.max_results.min(ACTIVITIES_PER_CHANNEL);
        let per_channel_events: Vec<Vec<UploadEvent>> =
            stream::iter(channels.iter().map(|channel_id| async move {
                if !ledger.try_reserve(1) {
                    tracing::warn!(channel = %channel_id, "quota budget spent, skipping channel");
                    return Vec::new();
                }
                match self
                    .source
                    .recent_uploads(channel_id, per_channel, request.published_before)
                    .await
                {
                    Ok(events) => events,
                    Err(error) => {
                        tracing::warn!(channel = %channel_id, %error, "activity fetch failed");
                        Vec::new()
                    }
                }
            }))
            .buffered(self.config.fan_out.max(1))
            .collect()
            .await;

        per_channel_events.into_iter().flatten().collect()
    }

    /// Fetches detail records for `video_ids` in sequential batches.
    /// A failed batch is logged and its videos are simply absent.
    async fn fetch_details(&self, video_ids: &[String], ledger: &QuotaLedger) -> Vec<VideoDetail> {
        let mut details = Vec::with_capacity(video_ids.len());
        for batch in video_ids.chunks(DETAIL_BATCH_SIZE) {
            if !ledger.may_spend(1) {
                tracing::warn!(
                    skipped = video_ids.len() - details.len(),
                    "quota budget spent, skipping remaining detail batches"
                );
                break;
            }
            match self.source.video_details(batch).await {
                Ok(mut found) => {
                    ledger.record(1);
                    details.append(&mut found);
                }
                Err(error) => {
                    tracing::warn!(batch_size = batch.len(), %error, "detail batch failed");
                }
            }
        }
        details
    }
}

/// First-seen-order video ids with the caller's exclusions and duplicates
/// removed. Filtering happens here, before the detail fetch, so no detail
/// quota is spent on videos the caller will not get back.
fn unseen_video_ids(uploads: Vec<UploadEvent>, exclude: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(uploads.len());
    let mut ids = Vec::new();
    for event in uploads {
        if exclude.contains(&event.video_id) || !seen.insert(event.video_id.clone()) {
            continue;
        }
        ids.push(event.video_id);
    }
    ids
}

/// Recency sort and truncation. The sort is stable, so videos published
/// at the same instant keep their arrival order.
fn assemble(mut details: Vec<VideoDetail>, max_results: usize) -> Vec<VideoDetail> {
    details.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    details.truncate(max_results);
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use jiff::Timestamp;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn ts(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    fn upload(id: &str, published: i64) -> UploadEvent {
        UploadEvent {
            video_id: id.to_string(),
            title: format!("{id} title"),
            channel_title: "some channel".to_string(),
            published_at: ts(published),
            thumbnail_url: None,
        }
    }

    fn detail(id: &str, published: i64) -> VideoDetail {
        VideoDetail {
            id: id.to_string(),
            title: format!("{id} title"),
            description: String::new(),
            thumbnail_url: None,
            duration: "PT10M".to_string(),
            channel_title: "some channel".to_string(),
            published_at: ts(published),
            language: None,
        }
    }

    #[derive(Default)]
    struct CallLog {
        enumeration_limits: Vec<u32>,
        activity_calls: Vec<(String, u32, Option<Timestamp>)>,
        detail_batches: Vec<Vec<String>>,
    }

    /// In-memory [`UploadsSource`] with programmable failures and a call
    /// log, standing in for the upstream API.
    #[derive(Default)]
    struct ScriptedSource {
        channels: Vec<String>,
        deny_enumeration: bool,
        uploads: HashMap<String, Vec<UploadEvent>>,
        broken_channels: HashSet<String>,
        details: HashMap<String, VideoDetail>,
        fail_batches_containing: HashSet<String>,
        log: Mutex<CallLog>,
    }

    impl UploadsSource for &ScriptedSource {
        async fn subscribed_channels(&self, limit: u32) -> Result<Vec<String>, ApiError> {
            self.log.lock().unwrap().enumeration_limits.push(limit);
            if self.deny_enumeration {
                return Err(ApiError::Auth {
                    status: StatusCode::UNAUTHORIZED,
                    message: "Invalid Credentials".to_string(),
                });
            }
            Ok(self
                .channels
                .iter()
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn recent_uploads(
            &self,
            channel_id: &str,
            limit: u32,
            published_before: Option<Timestamp>,
        ) -> Result<Vec<UploadEvent>, ApiError> {
            self.log.lock().unwrap().activity_calls.push((
                channel_id.to_string(),
                limit,
                published_before,
            ));
            if self.broken_channels.contains(channel_id) {
                return Err(ApiError::Transient {
                    message: "connection reset by peer".to_string(),
                });
            }
            let mut events = self.uploads.get(channel_id).cloned().unwrap_or_default();
            events.truncate(limit as usize);
            Ok(events)
        }

        async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>, ApiError> {
            self.log
                .lock()
                .unwrap()
                .detail_batches
                .push(video_ids.to_vec());
            if video_ids
                .iter()
                .any(|id| self.fail_batches_containing.contains(id))
            {
                return Err(ApiError::Transient {
                    message: "backend error".to_string(),
                });
            }
            Ok(video_ids
                .iter()
                .filter_map(|id| self.details.get(id).cloned())
                .collect())
        }
    }

    /// Builds a source where each channel has the given uploads and every
    /// upload has a matching detail record.
    fn scripted(channels: &[(&str, &[(&str, i64)])]) -> ScriptedSource {
        let mut source = ScriptedSource::default();
        for (channel, videos) in channels {
            source.channels.push(channel.to_string());
            let mut events = Vec::new();
            for (id, published) in *videos {
                events.push(upload(id, *published));
                source.details.insert(id.to_string(), detail(id, *published));
            }
            source.uploads.insert(channel.to_string(), events);
        }
        source
    }

    fn video_ids(response: &FeedResponse) -> Vec<&str> {
        response
            .videos
            .iter()
            .map(|video| video.id.as_str())
            .collect()
    }

    #[tokio::test]
    async fn caps_results_and_mirrors_count() {
        // Newest first, the order the activity endpoint reports in.
        let source = scripted(&[("c1", &[("v2", 300), ("v3", 200), ("v1", 100)])]);
        let feed = SubscriptionFeed::new(&source);

        let response = feed
            .aggregate(&FeedRequest {
                max_results: 2,
                ..FeedRequest::default()
            })
            .await
            .unwrap();

        assert_eq!(video_ids(&response), vec!["v2", "v3"]);
        assert_eq!(response.count, response.videos.len());
        // Per-channel activity fetches never ask for more than the caller wants.
        let log = source.log.lock().unwrap();
        assert_eq!(log.activity_calls[0].1, 2);
    }

    #[tokio::test]
    async fn excluded_ids_are_dropped_before_the_detail_fetch() {
        let source = scripted(&[
            ("c1", &[("v1", 300), ("v2", 100)]),
            ("c2", &[("v3", 200)]),
        ]);
        let feed = SubscriptionFeed::new(&source);

        let response = feed
            .aggregate(&FeedRequest {
                max_results: 5,
                exclude: HashSet::from(["v1".to_string()]),
                ..FeedRequest::default()
            })
            .await
            .unwrap();

        assert_eq!(video_ids(&response), vec!["v3", "v2"]);
        assert_eq!(response.count, 2);
        // The excluded id never reached a detail batch.
        let log = source.log.lock().unwrap();
        assert_eq!(log.detail_batches, vec![vec!["v2".to_string(), "v3".to_string()]]);
    }

    #[tokio::test]
    async fn results_are_sorted_by_recency_with_stable_ties() {
        let source = scripted(&[
            ("c1", &[("a", 100), ("b", 300)]),
            ("c2", &[("c", 200), ("d", 300)]),
        ]);
        let feed = SubscriptionFeed::new(&source);

        let response = feed.aggregate(&FeedRequest::default()).await.unwrap();

        // b and d tie at 300; b entered first (channel order) and stays first.
        assert_eq!(video_ids(&response), vec!["b", "d", "c", "a"]);
        let published: Vec<_> = response
            .videos
            .iter()
            .map(|video| video.published_at)
            .collect();
        assert!(published.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[tokio::test]
    async fn failing_channels_degrade_to_empty_contributions() {
        let mut source = scripted(&[
            ("c1", &[("v1", 100)]),
            ("c2", &[("v2", 200)]),
            ("c3", &[("v3", 300)]),
            ("c4", &[("v4", 400)]),
            ("c5", &[("v5", 500)]),
        ]);
        source.broken_channels = HashSet::from(["c2".to_string(), "c4".to_string()]);
        let feed = SubscriptionFeed::new(&source);

        let response = feed.aggregate(&FeedRequest::default()).await.unwrap();

        assert_eq!(video_ids(&response), vec!["v5", "v3", "v1"]);
        // 1 enumeration + 5 activity calls (failed ones included) + 1 batch.
        assert_eq!(response.quota_units_spent, 7);
    }

    #[tokio::test]
    async fn every_channel_failing_still_returns_an_empty_feed() {
        let mut source = scripted(&[("c1", &[("v1", 100)]), ("c2", &[("v2", 200)])]);
        source.broken_channels = HashSet::from(["c1".to_string(), "c2".to_string()]);
        let feed = SubscriptionFeed::new(&source);

        let response = feed.aggregate(&FeedRequest::default()).await.unwrap();

        assert_eq!(response.count, 0);
        assert!(response.videos.is_empty());
        assert_eq!(response.quota_units_spent, 3);
    }

    #[tokio::test]
    async fn zero_subscriptions_is_success() {
        let source = ScriptedSource::default();
        let feed = SubscriptionFeed::new(&source);

        let response = feed.aggregate(&FeedRequest::default()).await.unwrap();

        assert_eq!(response.count, 0);
        assert_eq!(response.quota_units_spent, 1);
        assert!(source.log.lock().unwrap().activity_calls.is_empty());
    }

    #[tokio::test]
    async fn enumeration_auth_failure_fails_fast() {
        let mut source = scripted(&[("c1", &[("v1", 100)])]);
        source.deny_enumeration = true;
        let feed = SubscriptionFeed::new(&source);

        let error = feed.aggregate(&FeedRequest::default()).await.unwrap_err();

        assert!(
            matches!(error, FeedError::Api(ApiError::Auth { .. })),
            "{error:?}"
        );
        let log = source.log.lock().unwrap();
        assert!(log.activity_calls.is_empty());
        assert!(log.detail_batches.is_empty());
    }

    #[tokio::test]
    async fn channel_budget_bounds_channels_queried() {
        let channels: Vec<(String, Vec<(String, i64)>)> = (0..10)
            .map(|i| (format!("c{i}"), vec![(format!("v{i}"), i64::from(i))]))
            .collect();
        let mut source = ScriptedSource::default();
        for (channel, videos) in &channels {
            source.channels.push(channel.clone());
            let events = videos
                .iter()
                .map(|(id, published)| upload(id, *published))
                .collect();
            source.uploads.insert(channel.clone(), events);
            for (id, published) in videos {
                source.details.insert(id.clone(), detail(id, *published));
            }
        }
        let feed = SubscriptionFeed::new(&source);

        let response = feed
            .aggregate(&FeedRequest {
                max_channels: 1,
                ..FeedRequest::default()
            })
            .await
            .unwrap();

        assert_eq!(video_ids(&response), vec!["v0"]);
        let log = source.log.lock().unwrap();
        // Enumeration over-fetches to twice the budget, then exactly one
        // channel is queried.
        assert_eq!(log.enumeration_limits, vec![2]);
        assert_eq!(log.activity_calls.len(), 1);
        assert_eq!(log.activity_calls[0].0, "c0");
    }

    #[tokio::test]
    async fn asking_for_more_than_exists_returns_what_exists() {
        let source = scripted(&[("c1", &[("v1", 100), ("v2", 200), ("v3", 300)])]);
        let feed = SubscriptionFeed::new(&source);

        let response = feed
            .aggregate(&FeedRequest {
                max_results: 100,
                ..FeedRequest::default()
            })
            .await
            .unwrap();

        assert_eq!(response.count, 3);
    }

    #[tokio::test]
    async fn duplicate_uploads_across_channels_collapse() {
        // The same video shows up in two channels' activity (e.g. a
        // collaboration posted to both).
        let source = scripted(&[
            ("c1", &[("shared", 300), ("v1", 100)]),
            ("c2", &[("shared", 300)]),
        ]);
        let feed = SubscriptionFeed::new(&source);

        let response = feed.aggregate(&FeedRequest::default()).await.unwrap();

        assert_eq!(video_ids(&response), vec!["shared", "v1"]);
        let log = source.log.lock().unwrap();
        assert_eq!(
            log.detail_batches,
            vec![vec!["shared".to_string(), "v1".to_string()]]
        );
    }

    #[tokio::test]
    async fn out_of_range_requests_are_rejected_before_any_call() {
        let source = scripted(&[("c1", &[("v1", 100)])]);
        let feed = SubscriptionFeed::new(&source);

        for request in [
            FeedRequest {
                max_results: 0,
                ..FeedRequest::default()
            },
            FeedRequest {
                max_results: 101,
                ..FeedRequest::default()
            },
            FeedRequest {
                max_channels: 0,
                ..FeedRequest::default()
            },
            FeedRequest {
                max_channels: 51,
                ..FeedRequest::default()
            },
        ] {
            let error = feed.aggregate(&request).await.unwrap_err();
            assert!(
                matches!(error, FeedError::InvalidRequest(_)),
                "{request:?} -> {error:?}"
            );
        }
        assert!(source.log.lock().unwrap().enumeration_limits.is_empty());
    }

    #[tokio::test]
    async fn cutoff_is_forwarded_to_every_channel_fetch() {
        let source = scripted(&[("c1", &[("v1", 100)]), ("c2", &[("v2", 200)])]);
        let feed = SubscriptionFeed::new(&source);
        let cutoff = ts(250);

        feed.aggregate(&FeedRequest {
            published_before: Some(cutoff),
            ..FeedRequest::default()
        })
        .await
        .unwrap();

        let log = source.log.lock().unwrap();
        assert_eq!(log.activity_calls.len(), 2);
        assert!(log
            .activity_calls
            .iter()
            .all(|(_, _, published_before)| *published_before == Some(cutoff)));
    }

    #[tokio::test]
    async fn quota_budget_stops_new_calls_but_not_the_run() {
        let source = scripted(&[
            ("c1", &[("v1", 100)]),
            ("c2", &[("v2", 200)]),
            ("c3", &[("v3", 300)]),
            ("c4", &[("v4", 400)]),
        ]);
        // Budget covers enumeration plus two channels, nothing more.
        let feed = SubscriptionFeed::with_config(
            &source,
            FeedConfig {
                fan_out: 1,
                quota_budget: Some(3),
            },
        );

        let response = feed.aggregate(&FeedRequest::default()).await.unwrap();

        assert_eq!(response.quota_units_spent, 3);
        assert_eq!(response.count, 0);
        let log = source.log.lock().unwrap();
        let queried: Vec<_> = log
            .activity_calls
            .iter()
            .map(|(channel, _, _)| channel.as_str())
            .collect();
        assert_eq!(queried, vec!["c1", "c2"]);
        // The detail batch would have been the fourth unit; it was never issued.
        assert!(log.detail_batches.is_empty());
    }

    #[tokio::test]
    async fn failed_detail_batch_drops_only_its_own_videos() {
        let mut source = ScriptedSource::default();
        // Six channels with ten uploads each: 60 distinct ids, two batches.
        for channel_index in 0..6i64 {
            let channel = format!("c{channel_index}");
            source.channels.push(channel.clone());
            let mut events = Vec::new();
            for video_index in 0..10i64 {
                let n = channel_index * 10 + video_index;
                let id = format!("v{n:02}");
                events.push(upload(&id, n));
                source.details.insert(id.clone(), detail(&id, n));
            }
            source.uploads.insert(channel, events);
        }
        source.fail_batches_containing = HashSet::from(["v59".to_string()]);
        let feed = SubscriptionFeed::new(&source);

        let response = feed
            .aggregate(&FeedRequest {
                max_results: 100,
                ..FeedRequest::default()
            })
            .await
            .unwrap();

        // The second batch (ids 50..59) failed; the first batch survives.
        assert_eq!(response.count, 50);
        assert!(response.videos.iter().all(|video| video.id.as_str() < "v50"));
        // 1 enumeration + 6 activity calls + 1 successful batch; the
        // failed batch is not charged.
        assert_eq!(response.quota_units_spent, 8);
        assert_eq!(source.log.lock().unwrap().detail_batches.len(), 2);
    }

    #[tokio::test]
    async fn repeated_runs_over_a_fixed_snapshot_agree() {
        let source = scripted(&[
            ("c1", &[("v1", 300), ("v2", 100)]),
            ("c2", &[("v3", 200)]),
        ]);
        let feed = SubscriptionFeed::new(&source);
        let request = FeedRequest::default();

        let first = feed.aggregate(&request).await.unwrap();
        let second = feed.aggregate(&request).await.unwrap();

        assert_eq!(video_ids(&first), video_ids(&second));
        assert_eq!(first.quota_units_spent, second.quota_units_spent);
    }
}
