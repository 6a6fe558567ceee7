//! State for one reader stream.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::store::State;

use super::post_key::{PostKey, StreamEntry};

/// Holding area for freshly polled items not yet shown in the visible list.
///
/// `items` is newest-first and may contain [`StreamEntry::Gap`] markers where
/// a poll did not reach far enough back to overlap prior coverage.
/// `last_updated` is the newest post date ever observed by a poll; it only
/// moves forward.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PendingBuffer {
    pub items: Arc<Vec<StreamEntry>>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl PendingBuffer {
    /// Number of actual posts waiting (gap markers excluded).
    pub fn post_count(&self) -> usize {
        self.items.iter().filter(|entry| entry.as_post().is_some()).count()
    }

    pub fn has_gap(&self) -> bool {
        self.items.iter().any(StreamEntry::is_gap)
    }
}

/// Complete state of one stream.
///
/// Owned by the surrounding application; every transition receives the whole
/// previous value and returns a whole new one. Post keys are shared via `Arc`
/// so an unchanged sub-state keeps its allocation (consumers skip re-rendering
/// on pointer equality).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamState {
    /// Ordered visible entries, newest-first, no duplicate keys.
    pub items: Vec<Arc<PostKey>>,
    /// Polled items waiting to be merged into `items`.
    pub pending_items: PendingBuffer,
    /// The currently highlighted entry, if any.
    pub selected: Option<Arc<PostKey>>,
    /// Opaque next-page token handed back by the data layer.
    pub page_handle: Option<serde_json::Value>,
    /// True while a page fetch is in flight.
    pub is_requesting: bool,
    /// True once a fetch came back with zero new items.
    pub last_page: bool,
}

impl State for StreamState {}

impl StreamState {
    /// Whether the visible list already contains `key`.
    pub fn contains(&self, key: &PostKey) -> bool {
        self.items.iter().any(|item| item.as_ref() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::post_key::GapMarker;
    use chrono::TimeZone;

    #[test]
    fn default_is_empty_and_idle() {
        let state = StreamState::default();
        assert!(state.items.is_empty());
        assert_eq!(state.pending_items, PendingBuffer::default());
        assert_eq!(state.selected, None);
        assert_eq!(state.page_handle, None);
        assert!(!state.is_requesting);
        assert!(!state.last_page);
    }

    #[test]
    fn pending_counts_skip_gaps() {
        let t1 = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2018, 1, 2, 0, 0, 0).unwrap();
        let buffer = PendingBuffer {
            items: Arc::new(vec![
                StreamEntry::Post(Arc::new(PostKey::feed("4", "3", t2))),
                StreamEntry::Gap(GapMarker { from: t1, to: t2 }),
            ]),
            last_updated: Some(t2),
        };
        assert_eq!(buffer.post_count(), 1);
        assert!(buffer.has_gap());
    }
}
