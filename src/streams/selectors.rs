//! Derived reads over [`StreamState`].
//!
//! Pure lookups used by the consuming layer.

use std::sync::Arc;

use super::post_key::PostKey;
use super::state::StreamState;

/// Position of the selected entry within the visible list.
pub fn selected_index(state: &StreamState) -> Option<usize> {
    let selected = state.selected.as_ref()?;
    state.items.iter().position(|item| item == selected)
}

/// Number of polled posts waiting to be shown ("N new posts").
pub fn pending_post_count(state: &StreamState) -> usize {
    state.pending_items.post_count()
}

/// Whether the pending buffer contains a coverage gap.
pub fn has_pending_gap(state: &StreamState) -> bool {
    state.pending_items.has_gap()
}

/// The pending posts, in buffer order; this is the payload for
/// [`StreamIntent::ShowUpdates`](crate::streams::StreamIntent::ShowUpdates).
pub fn pending_post_keys(state: &StreamState) -> Vec<Arc<PostKey>> {
    state
        .pending_items
        .items
        .iter()
        .filter_map(|entry| entry.as_post().cloned())
        .collect()
}

/// Whether the consumer should kick off another page fetch.
pub fn should_request_page(state: &StreamState) -> bool {
    !state.is_requesting && !state.last_page
}
