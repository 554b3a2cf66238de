//! The parts of a `videos.list` response this crate reads.
//!
//! See <https://developers.google.com/youtube/v3/docs/videos/list>

use serde::Deserialize;
use serde_json::Value;

use crate::error::YoutubeError;

/// Response of `videos.list?part=statistics`.
/// `items` is missing entirely when nothing matched.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Option<Vec<Video>>,
}

/// A single `video` resource, only its statistics are requested.
#[derive(Debug, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

/// Statistics about the video.
#[derive(Debug, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount", default)]
    pub view_count: Option<Count>,
}

/// The API sends counts as strings, but plain numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(u64),
    Text(String),
}

impl VideoListResponse {
    /// Deserialize from raw json, reporting the path of any mismatch.
    pub fn from_json(json: Value) -> Result<Self, YoutubeError> {
        Ok(serde_path_to_error::deserialize(json)?)
    }

    /// The view count of the first item.
    pub fn view_count(self, video_id: &str) -> Result<u64, YoutubeError> {
        let first = self
            .items
            .and_then(|items| items.into_iter().next())
            .ok_or_else(|| YoutubeError::VideoNotFound {
                video_id: video_id.to_string(),
            })?;

        let count = first
            .statistics
            .and_then(|stats| stats.view_count)
            .ok_or_else(|| YoutubeError::MissingViewCount {
                video_id: video_id.to_string(),
            })?;

        match count {
            Count::Number(n) => Ok(n),
            Count::Text(raw) => raw
                .trim()
                .parse()
                .map_err(|_| YoutubeError::InvalidViewCount {
                    video_id: video_id.to_string(),
                    raw,
                }),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn view_count(json: Value) -> Result<u64, YoutubeError> {
        VideoListResponse::from_json(json)?.view_count("abc123")
    }

    #[test]
    fn reads_string_count() {
        let json = json!({ "items": [{ "statistics": { "viewCount": "12345" } }] });
        assert_eq!(view_count(json).unwrap(), 12345);
    }

    #[test]
    fn reads_numeric_count() {
        let json = json!({ "items": [{ "statistics": { "viewCount": 12345 } }] });
        assert_eq!(view_count(json).unwrap(), 12345);
    }

    #[test]
    fn uses_first_item() {
        let json = json!({ "items": [
            { "statistics": { "viewCount": "1" } },
            { "statistics": { "viewCount": "2" } },
        ] });
        assert_eq!(view_count(json).unwrap(), 1);
    }

    #[test]
    fn missing_items_is_not_found() {
        let json = json!({ "kind": "youtube#videoListResponse" });
        let err = view_count(json).unwrap_err();
        assert!(matches!(err, YoutubeError::VideoNotFound { ref video_id } if video_id == "abc123"));
    }

    #[test]
    fn empty_items_is_not_found() {
        let err = view_count(json!({ "items": [] })).unwrap_err();
        assert!(matches!(err, YoutubeError::VideoNotFound { .. }));
    }

    #[test]
    fn missing_statistics() {
        let err = view_count(json!({ "items": [{ "id": "abc123" }] })).unwrap_err();
        assert!(matches!(err, YoutubeError::MissingViewCount { .. }));
    }

    #[test]
    fn malformed_count() {
        let json = json!({ "items": [{ "statistics": { "viewCount": "lots" } }] });
        let err = view_count(json).unwrap_err();
        assert!(matches!(err, YoutubeError::InvalidViewCount { ref raw, .. } if raw == "lots"));
    }

    #[test]
    fn wrong_shape_reports_path() {
        let err = view_count(json!({ "items": "nope" })).unwrap_err();
        match err {
            YoutubeError::Parse(e) => assert_eq!(e.path().to_string(), "items"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
