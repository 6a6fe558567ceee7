//! Shared test fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use reader_streams::streams::{PostKey, StreamIntent, StreamKey};

pub fn time1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap()
}

pub fn time2() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 1, 2, 0, 0, 0).unwrap()
}

pub fn time3() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 1, 3, 0, 0, 0).unwrap()
}

/// Blog post "1" on blog "2", dated [`time1`].
pub fn time1_post_key() -> Arc<PostKey> {
    Arc::new(PostKey::blog("2", "1", time1()))
}

/// Feed post "2" on feed "2", dated [`time2`].
pub fn time2_post_key() -> Arc<PostKey> {
    Arc::new(PostKey::feed("2", "2", time2()))
}

pub fn receive_page(stream_items: Vec<Arc<PostKey>>) -> StreamIntent {
    StreamIntent::ReceivePage {
        stream_key: StreamKey::Following,
        stream_items,
        page_handle: None,
    }
}

pub fn receive_updates(stream_items: Vec<Arc<PostKey>>) -> StreamIntent {
    StreamIntent::ReceiveUpdates { stream_items }
}

/// An intent no reducer in the aggregate reacts to beyond passing state
/// through; stands in for the original suite's empty action.
pub fn unrelated_intent() -> StreamIntent {
    StreamIntent::ReceiveUpdates {
        stream_items: Vec::new(),
    }
}
