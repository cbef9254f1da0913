/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::Post;

/// One page of the `/{wall_id}/posts` feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub data: Vec<Post>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// Pagination descriptor attached to a feed page.
///
/// `previous`/`next` are fully-formed follow-up URLs; either is absent at the
/// corresponding end of the feed. `cursors` is the opaque cursor pair the
/// URLs were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursors: Option<PagingCursors>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingCursors {
    pub before: String,
    pub after: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_response_parses_data_and_paging() {
        let raw = r#"{
            "data": [
                {"id": "10", "message": "hi", "type": "status"}
            ],
            "paging": {
                "previous": "https://graph.example/feed?before=P1",
                "next": "https://graph.example/feed?after=N1",
                "cursors": {"before": "P1", "after": "N1"}
            }
        }"#;

        let response: FeedResponse = serde_json::from_str(raw).expect("feed response");

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "10");

        let paging = response.paging.expect("paging");
        assert_eq!(paging.next.as_deref(), Some("https://graph.example/feed?after=N1"));
        assert_eq!(paging.cursors.expect("cursors").after, "N1");
    }

    #[test]
    fn feed_response_tolerates_missing_paging() {
        let response: FeedResponse = serde_json::from_str(r#"{"data": []}"#).expect("feed response");
        assert!(response.data.is_empty());
        assert!(response.paging.is_none());
    }
}
