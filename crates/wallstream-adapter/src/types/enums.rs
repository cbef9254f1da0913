/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Post `type` tag returned in the feed.
///
/// Unknown tags deserialize as `Other` rather than failing the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Link,
    Status,
    Photo,
    Video,
    Offer,
    #[serde(other)]
    Other,
}

/// Direction of a cursor navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageDirection::Next => write!(f, "next"),
            PageDirection::Previous => write!(f, "previous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("link", PostType::Link)]
    #[case("status", PostType::Status)]
    #[case("photo", PostType::Photo)]
    #[case("video", PostType::Video)]
    #[case("offer", PostType::Offer)]
    fn post_type_wire_names(#[case] wire: &str, #[case] expected: PostType) {
        let parsed: PostType = serde_json::from_value(serde_json::json!(wire)).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn unknown_post_type_maps_to_other() {
        let parsed: PostType = serde_json::from_value(serde_json::json!("reel")).unwrap();
        assert_eq!(parsed, PostType::Other);
    }

    #[test]
    fn page_direction_display() {
        assert_eq!(PageDirection::Next.to_string(), "next");
        assert_eq!(PageDirection::Previous.to_string(), "previous");
    }
}
