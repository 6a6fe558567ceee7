//! Identity of one stream entry.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies one post within a stream.
///
/// A post is addressed either by blog (`blog_id` + `post_id`) or by feed
/// (`feed_id` + `post_id`); `date` is the post's publication time and drives
/// ordering and update-gap detection. Two keys are equal iff every field
/// matches, which is the rule used for de-duplication everywhere in this
/// crate.
///
/// Field names follow the feed API payloads (`postId`, `blogId`, …) on the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_id: Option<String>,
    pub date: DateTime<Utc>,
}

impl PostKey {
    /// Key for a post addressed by blog.
    pub fn blog(blog_id: impl Into<String>, post_id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            post_id: Some(post_id.into()),
            blog_id: Some(blog_id.into()),
            feed_id: None,
            date,
        }
    }

    /// Key for a post addressed by feed.
    pub fn feed(feed_id: impl Into<String>, post_id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            post_id: Some(post_id.into()),
            blog_id: None,
            feed_id: Some(feed_id.into()),
            date,
        }
    }
}

/// Marks unretrieved coverage between two known timestamps.
///
/// Produced when a poll comes back with items that do not reach far enough
/// back to overlap what was already seen; the consumer renders it as a
/// "load posts between..." affordance instead of presenting a discontinuous
/// feed as continuous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GapMarker {
    /// Newest timestamp covered before the gap.
    pub from: DateTime<Utc>,
    /// Newest timestamp observed by the poll that created the gap.
    pub to: DateTime<Utc>,
}

/// One entry in the pending buffer: a post, or a gap in coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEntry {
    Post(Arc<PostKey>),
    Gap(GapMarker),
}

impl StreamEntry {
    /// The post key, if this entry is a post.
    pub fn as_post(&self) -> Option<&Arc<PostKey>> {
        match self {
            StreamEntry::Post(key) => Some(key),
            StreamEntry::Gap(_) => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, StreamEntry::Gap(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 1, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn keys_equal_when_all_fields_match() {
        assert_eq!(PostKey::blog("2", "1", date(1)), PostKey::blog("2", "1", date(1)));
    }

    #[test]
    fn keys_differ_on_any_field() {
        let key = PostKey::blog("2", "1", date(1));
        assert_ne!(key, PostKey::blog("2", "9", date(1)));
        assert_ne!(key, PostKey::blog("9", "1", date(1)));
        assert_ne!(key, PostKey::blog("2", "1", date(2)));
        // blog-addressed vs feed-addressed are never equal
        assert_ne!(key, PostKey::feed("2", "1", date(1)));
    }

    #[test]
    fn deserializes_wire_shape() {
        let key: PostKey =
            serde_json::from_str(r#"{"postId":"1","blogId":"2","date":"2018-01-01T00:00:00.000Z"}"#)
                .unwrap();
        assert_eq!(key, PostKey::blog("2", "1", date(1)));
    }

    #[test]
    fn absent_ids_stay_off_the_wire() {
        let json = serde_json::to_string(&PostKey::feed("4", "3", date(2))).unwrap();
        assert!(!json.contains("blogId"));
    }

    #[test]
    fn entry_accessors() {
        let post = StreamEntry::Post(Arc::new(PostKey::feed("4", "3", date(1))));
        let gap = StreamEntry::Gap(GapMarker { from: date(1), to: date(2) });
        assert!(post.as_post().is_some());
        assert!(!post.is_gap());
        assert!(gap.as_post().is_none());
        assert!(gap.is_gap());
    }
}
