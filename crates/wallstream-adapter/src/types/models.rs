/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: 2026-07-21 Added typed timestamp accessors on Post
*/

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::PostType;

// Graph timestamps carry a numeric offset without a colon, e.g. "2015-04-01T12:00:00+0000"
const GRAPH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Single feed post: `id` plus whatever fields the API chose to return.
///
/// The field set varies per post and per request; everything beyond `id` is
/// kept as a dynamic map in response order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl Post {
    /// Raw field value, if the API returned it
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// String field value
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.text_field("message")
    }

    pub fn picture(&self) -> Option<&str> {
        self.text_field("picture")
    }

    pub fn link(&self) -> Option<&str> {
        self.text_field("link")
    }

    pub fn icon(&self) -> Option<&str> {
        self.text_field("icon")
    }

    /// Post type tag, when present and recognized
    pub fn post_type(&self) -> Option<PostType> {
        self.field("type")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn created_time(&self) -> Option<DateTime<FixedOffset>> {
        self.time_field("created_time")
    }

    pub fn updated_time(&self) -> Option<DateTime<FixedOffset>> {
        self.time_field("updated_time")
    }

    fn time_field(&self, name: &str) -> Option<DateTime<FixedOffset>> {
        self.text_field(name)
            .and_then(|raw| DateTime::parse_from_str(raw, GRAPH_TIME_FORMAT).ok())
    }
}

/// One page of wall posts, keyed by post id with response order preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostPage {
    posts: IndexMap<String, Post>,
}

impl PostPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key each record under its `id`, keeping response order.
    ///
    /// A duplicate id overwrites the earlier record in place, as keyed
    /// assignment would.
    pub fn from_records(records: Vec<Post>) -> Self {
        let mut posts = IndexMap::with_capacity(records.len());
        for record in records {
            posts.insert(record.id.clone(), record);
        }
        Self { posts }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.posts.keys().map(String::as_str)
    }

    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Post)> {
        self.posts.iter().map(|(id, post)| (id.as_str(), post))
    }
}

impl IntoIterator for PostPage {
    type Item = (String, Post);
    type IntoIter = indexmap::map::IntoIter<String, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

impl<'a> IntoIterator for &'a PostPage {
    type Item = (&'a String, &'a Post);
    type IntoIter = indexmap::map::Iter<'a, String, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(value: serde_json::Value) -> Post {
        serde_json::from_value(value).expect("post")
    }

    #[test]
    fn page_keys_records_by_id_in_response_order() {
        let records = vec![
            post(json!({"id": "30", "message": "third"})),
            post(json!({"id": "10", "message": "first"})),
            post(json!({"id": "20", "message": "second"})),
        ];

        let page = PostPage::from_records(records);

        assert_eq!(page.len(), 3);
        assert_eq!(page.ids().collect::<Vec<_>>(), vec!["30", "10", "20"]);
        assert_eq!(page.get("10").unwrap().message(), Some("first"));
    }

    #[test]
    fn duplicate_id_keeps_later_record_in_first_position() {
        let records = vec![
            post(json!({"id": "10", "message": "early"})),
            post(json!({"id": "20", "message": "middle"})),
            post(json!({"id": "10", "message": "late"})),
        ];

        let page = PostPage::from_records(records);

        assert_eq!(page.len(), 2);
        assert_eq!(page.ids().collect::<Vec<_>>(), vec!["10", "20"]);
        assert_eq!(page.get("10").unwrap().message(), Some("late"));
    }

    #[test]
    fn post_exposes_returned_fields_only() {
        let record = post(json!({
            "id": "123_456",
            "message": "hi",
            "type": "status",
            "created_time": "2015-04-01T12:00:00+0000"
        }));

        assert_eq!(record.message(), Some("hi"));
        assert_eq!(record.post_type(), Some(crate::types::PostType::Status));
        assert_eq!(record.picture(), None);
        assert_eq!(record.link(), None);

        let created = record.created_time().expect("created_time");
        assert_eq!(created.to_rfc3339(), "2015-04-01T12:00:00+00:00");
        assert_eq!(record.updated_time(), None);
    }

    #[test]
    fn malformed_timestamp_reads_as_absent() {
        let record = post(json!({"id": "1", "created_time": "yesterday"}));
        assert_eq!(record.created_time(), None);
    }
}
