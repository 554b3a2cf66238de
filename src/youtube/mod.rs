//! Functionality for interfacing with the YouTube Data API (e.g. view counts).

mod response;

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use tracing::instrument;
use url::Url;

use crate::error::YoutubeError;
pub use response::{Count, Video, VideoListResponse, VideoStatistics};

/// The `videos.list` endpoint.
pub const VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Performs a GET and hands back the parsed json body.
///
/// Implemented for [reqwest::Client]. Anything else (e.g. a canned response in tests)
/// can be plugged into [YoutubeClient] through [YoutubeClient::builder].
#[async_trait]
pub trait FetchJson: Send + Sync {
    async fn fetch_json(&self, url: Url) -> Result<Value, YoutubeError>;
}

#[async_trait]
impl FetchJson for reqwest::Client {
    async fn fetch_json(&self, url: Url) -> Result<Value, YoutubeError> {
        // The url carries the api key, keep it out of error messages.
        let response = self.get(url).send().await.map_err(|e| e.without_url())?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(YoutubeError::Api { status, body });
        }

        let json = response.json().await.map_err(|e| e.without_url())?;
        Ok(json)
    }
}

/// Client for the statistics part of the YouTube Data API v3.
///
/// Cheap to clone, clones share the same [FetchJson] (and so the same connection pool).
/// The api key is optional at construction, a missing key is only reported when a request
/// is attempted.
#[derive(Clone, bon::Builder)]
pub struct YoutubeClient {
    /// Api key sent with every request.
    #[builder(into)]
    api_key: Option<String>,
    /// Transport used for requests, a fresh [reqwest::Client] by default.
    #[builder(default = default_fetcher())]
    fetcher: Arc<dyn FetchJson>,
    /// Where `videos.list` lives, [VIDEOS_ENDPOINT] by default.
    #[builder(default = videos_endpoint())]
    endpoint: Url,
}

impl YoutubeClient {
    /// Retrieves the view count of a video.
    ///
    /// Fails with [YoutubeError::MissingCredential] without sending anything if no api key
    /// is set, and with [YoutubeError::VideoNotFound] if the api returns no items.
    #[instrument(skip(self), err)]
    pub async fn view_count(&self, video_id: &str) -> Result<u64, YoutubeError> {
        let api_key = match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => return Err(YoutubeError::MissingCredential),
        };

        let url = self.request_url(video_id, api_key);
        debug!("Requesting statistics of {video_id}.");

        let json = self.fetcher.fetch_json(url).await?;
        let view_count = VideoListResponse::from_json(json)?.view_count(video_id)?;

        debug!(video_id, view_count, "Fetched view count.");
        Ok(view_count)
    }

    /// Retrieves the view counts of several videos concurrently.
    ///
    /// Still one request per video. Results are in the same order as `video_ids`,
    /// the first failure is returned.
    pub async fn view_counts<I>(&self, video_ids: I) -> Result<Vec<u64>, YoutubeError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let requests = video_ids
            .into_iter()
            .map(|id| async move { self.view_count(id.as_ref()).await });
        futures::future::try_join_all(requests).await
    }

    /// Is a non-blank api key set.
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// `{endpoint}?part=statistics&id={video_id}&key={api_key}`
    fn request_url(&self, video_id: &str, api_key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("part", "statistics")
            .append_pair("id", video_id)
            .append_pair("key", api_key);
        url
    }
}

impl Debug for YoutubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key itself.
        f.debug_struct("YoutubeClient")
            .field("has_credential", &self.has_credential())
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

fn default_fetcher() -> Arc<dyn FetchJson> {
    Arc::new(reqwest::Client::new())
}

fn videos_endpoint() -> Url {
    Url::parse(VIDEOS_ENDPOINT).expect("endpoint is a valid url")
}
