//! Reducer for the reader stream.
//!
//! The aggregate state is reduced field by field, each field by its own pure
//! function; [`StreamsReducer`] stitches them together. Every function
//! returns its input unchanged (same allocation, same `Arc`s) when the
//! intent does not concern it, so consumers can cheaply detect "nothing
//! happened" by pointer comparison.

use std::sync::Arc;

use tracing::warn;

use crate::store::Reducer;

use super::intent::StreamIntent;
use super::post_key::{GapMarker, PostKey, StreamEntry};
use super::state::{PendingBuffer, StreamState};

/// Reducer over the whole [`StreamState`].
pub struct StreamsReducer;

impl Reducer for StreamsReducer {
    type State = StreamState;
    type Intent = StreamIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let StreamState {
            items: prev_items,
            pending_items: prev_pending,
            selected: prev_selected,
            page_handle: prev_handle,
            is_requesting: prev_requesting,
            last_page: prev_last_page,
        } = state;
        StreamState {
            items: items(prev_items, &intent),
            pending_items: pending_items(prev_pending, &intent),
            selected: selected(prev_selected, &intent),
            page_handle: page_handle(prev_handle, &intent),
            is_requesting: is_requesting(prev_requesting, &intent),
            last_page: last_page(prev_last_page, &intent),
        }
    }
}

/// Visible item list.
///
/// A received page is unioned onto the existing list: existing entries keep
/// their positions, incoming entries not already present are appended in
/// the order the page delivered them. Shown updates are newer than anything
/// visible and go in front. Entries only ever leave the list when a fresh
/// state is built from scratch.
pub fn items(prev: Vec<Arc<PostKey>>, intent: &StreamIntent) -> Vec<Arc<PostKey>> {
    match intent {
        StreamIntent::ReceivePage { stream_items, .. } => {
            let mut merged = prev;
            for key in stream_items {
                if !merged.contains(key) {
                    merged.push(Arc::clone(key));
                }
            }
            merged
        }
        StreamIntent::ShowUpdates { items: updates } => {
            let mut merged = Vec::with_capacity(updates.len() + prev.len());
            for key in updates {
                if !merged.contains(key) {
                    merged.push(Arc::clone(key));
                }
            }
            for key in prev {
                if !merged.contains(&key) {
                    merged.push(key);
                }
            }
            merged
        }
        _ => prev,
    }
}

/// Pending buffer: freshly polled items plus coverage-gap markers.
pub fn pending_items(prev: PendingBuffer, intent: &StreamIntent) -> PendingBuffer {
    match intent {
        StreamIntent::ReceivePage { stream_items, .. } => advance_coverage(prev, stream_items),
        StreamIntent::ReceiveUpdates { stream_items } => receive_updates(prev, stream_items),
        StreamIntent::ShowUpdates { .. } => {
            if prev.items.is_empty() {
                prev
            } else {
                PendingBuffer {
                    items: Arc::new(Vec::new()),
                    last_updated: prev.last_updated,
                }
            }
        }
        _ => prev,
    }
}

/// A received page extends known coverage: polls only need to reach back to
/// the newest item the page delivered.
fn advance_coverage(prev: PendingBuffer, page: &[Arc<PostKey>]) -> PendingBuffer {
    let Some(newest) = page.iter().map(|key| key.date).max() else {
        return prev;
    };
    if prev.last_updated.map_or(false, |last| newest <= last) {
        return prev;
    }
    PendingBuffer {
        items: prev.items,
        last_updated: Some(newest),
    }
}

fn receive_updates(prev: PendingBuffer, incoming: &[Arc<PostKey>]) -> PendingBuffer {
    let Some(newest) = incoming.iter().map(|key| key.date).max() else {
        // empty poll: nothing to merge, nothing learned
        return prev;
    };
    if let Some(last_updated) = prev.last_updated {
        // poll covered nothing beyond what we already saw
        if newest <= last_updated {
            return prev;
        }
    }

    // Only items strictly newer than prior coverage belong in the buffer;
    // anything older is already represented in the visible list.
    let mut fresh: Vec<&Arc<PostKey>> = incoming
        .iter()
        .filter(|key| prev.last_updated.map_or(true, |last| key.date > last))
        .collect();
    fresh.sort_by(|a, b| b.date.cmp(&a.date));

    let mut merged: Vec<StreamEntry> = Vec::with_capacity(fresh.len() + prev.items.len() + 1);
    for key in fresh {
        let entry = StreamEntry::Post(Arc::clone(key));
        if !merged.contains(&entry) {
            merged.push(entry);
        }
    }

    // Continuity check uses the whole poll, not just the kept items: if even
    // the oldest polled item is newer than prior coverage, the poll skipped
    // over an unknown span and the buffer must say so.
    if let Some(last_updated) = prev.last_updated {
        let oldest = incoming.iter().map(|key| key.date).min().unwrap_or(newest);
        if oldest > last_updated {
            merged.push(StreamEntry::Gap(GapMarker {
                from: last_updated,
                to: newest,
            }));
        }
    }

    for entry in prev.items.iter() {
        if !merged.contains(entry) {
            merged.push(entry.clone());
        }
    }

    PendingBuffer {
        items: Arc::new(merged),
        last_updated: Some(newest),
    }
}

/// Selection cursor.
///
/// Next/prev navigate within the list the intent supplies and clamp at its
/// ends; the boundary cases hand back the previous selection untouched.
/// Selection never moves on data arrival.
pub fn selected(prev: Option<Arc<PostKey>>, intent: &StreamIntent) -> Option<Arc<PostKey>> {
    match intent {
        StreamIntent::SelectItem { post_key } => Some(Arc::clone(post_key)),
        StreamIntent::SelectNextItem { items } => step_selection(prev, items, Step::Next),
        StreamIntent::SelectPrevItem { items } => step_selection(prev, items, Step::Prev),
        _ => prev,
    }
}

enum Step {
    Next,
    Prev,
}

fn step_selection(
    prev: Option<Arc<PostKey>>,
    list: &[Arc<PostKey>],
    step: Step,
) -> Option<Arc<PostKey>> {
    let Some(current) = prev else {
        return None;
    };
    let Some(index) = list.iter().position(|key| *key == current) else {
        warn!("selected item is not in the navigation list");
        return Some(current);
    };
    let target = match step {
        Step::Next if index + 1 < list.len() => index + 1,
        Step::Prev if index > 0 => index - 1,
        _ => return Some(current),
    };
    Some(Arc::clone(&list[target]))
}

/// Opaque next-page token. Only a page that carries one replaces it.
pub fn page_handle(
    prev: Option<serde_json::Value>,
    intent: &StreamIntent,
) -> Option<serde_json::Value> {
    match intent {
        StreamIntent::ReceivePage {
            page_handle: Some(handle),
            ..
        } => Some(handle.clone()),
        _ => prev,
    }
}

/// In-flight flag: set on request, cleared on receive.
pub fn is_requesting(prev: bool, intent: &StreamIntent) -> bool {
    match intent {
        StreamIntent::RequestPage { .. } => true,
        StreamIntent::ReceivePage { .. } => false,
        _ => prev,
    }
}

/// Terminal-page flag: an empty page means the stream is exhausted.
pub fn last_page(prev: bool, intent: &StreamIntent) -> bool {
    match intent {
        StreamIntent::ReceivePage { stream_items, .. } => stream_items.is_empty(),
        _ => prev,
    }
}
