//! Stream addressing.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors from parsing a stream key string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamKeyError {
    /// The key names a stream type this crate does not know.
    #[error("unknown stream type: '{0}'")]
    UnknownStream(String),

    /// A keyed stream (`feed:`, `blog:`, `search:`) with an empty identifier.
    #[error("stream key '{0}' is missing an identifier")]
    MissingId(String),
}

/// Identifies one stream.
///
/// The wire form is the original string key: a bare word for the built-in
/// streams (`following`, `conversations`, `likes`) or a `type:id` pair for
/// the keyed ones (`feed:1234`, `blog:5678`, `search:cats`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StreamKey {
    Following,
    Conversations,
    Likes,
    Feed(String),
    Blog(String),
    Search(String),
}

impl FromStr for StreamKey {
    type Err = StreamKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "following" => return Ok(StreamKey::Following),
            "conversations" => return Ok(StreamKey::Conversations),
            "likes" => return Ok(StreamKey::Likes),
            _ => {}
        }
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| StreamKeyError::UnknownStream(s.to_owned()))?;
        if id.is_empty() {
            return Err(StreamKeyError::MissingId(s.to_owned()));
        }
        match kind {
            "feed" => Ok(StreamKey::Feed(id.to_owned())),
            "blog" => Ok(StreamKey::Blog(id.to_owned())),
            "search" => Ok(StreamKey::Search(id.to_owned())),
            _ => Err(StreamKeyError::UnknownStream(s.to_owned())),
        }
    }
}

impl fmt::Display for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKey::Following => f.write_str("following"),
            StreamKey::Conversations => f.write_str("conversations"),
            StreamKey::Likes => f.write_str("likes"),
            StreamKey::Feed(id) => write!(f, "feed:{id}"),
            StreamKey::Blog(id) => write!(f, "blog:{id}"),
            StreamKey::Search(query) => write!(f, "search:{query}"),
        }
    }
}

impl Serialize for StreamKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StreamKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_builtin_streams() {
        assert_eq!("following".parse(), Ok(StreamKey::Following));
        assert_eq!("conversations".parse(), Ok(StreamKey::Conversations));
        assert_eq!("likes".parse(), Ok(StreamKey::Likes));
    }

    #[test]
    fn parses_keyed_streams() {
        assert_eq!("feed:1234".parse(), Ok(StreamKey::Feed("1234".into())));
        assert_eq!("blog:5678".parse(), Ok(StreamKey::Blog("5678".into())));
        assert_eq!("search:cat pictures".parse(), Ok(StreamKey::Search("cat pictures".into())));
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert_eq!(
            "recommended".parse::<StreamKey>(),
            Err(StreamKeyError::UnknownStream("recommended".into()))
        );
        assert_eq!(
            "tag:rust".parse::<StreamKey>(),
            Err(StreamKeyError::UnknownStream("tag:rust".into()))
        );
        assert_eq!(
            "feed:".parse::<StreamKey>(),
            Err(StreamKeyError::MissingId("feed:".into()))
        );
    }

    #[test]
    fn display_round_trips() {
        for key in [
            StreamKey::Following,
            StreamKey::Feed("1234".into()),
            StreamKey::Search("rust".into()),
        ] {
            assert_eq!(key.to_string().parse::<StreamKey>().as_ref(), Ok(&key));
        }
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&StreamKey::Blog("5678".into())).unwrap();
        assert_eq!(json, r#""blog:5678""#);
        let key: StreamKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, StreamKey::Blog("5678".into()));
    }
}
