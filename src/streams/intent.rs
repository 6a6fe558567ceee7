//! Intents for the reader stream.

use std::sync::Arc;

use crate::store::Intent;

use super::post_key::PostKey;
use super::stream_key::StreamKey;

/// Intents that can be dispatched to the stream reducer.
///
/// The data-layer intents (`RequestPage`, `ReceivePage`, `ReceiveUpdates`)
/// are produced by the fetch machinery around the store; the selection
/// intents come from user input. Missing data degrades to a no-op rather
/// than an error: a page with no items simply marks the last page.
#[derive(Debug)]
pub enum StreamIntent {
    /// A page fetch was started.
    RequestPage { stream_key: StreamKey },

    /// A page fetch came back.
    ReceivePage {
        stream_key: StreamKey,
        stream_items: Vec<Arc<PostKey>>,
        /// Next-page token; `None` leaves the stored handle untouched.
        page_handle: Option<serde_json::Value>,
    },

    /// A poll for new posts came back.
    ReceiveUpdates { stream_items: Vec<Arc<PostKey>> },

    /// Move the pending posts into the visible list.
    ///
    /// Carries the posts to merge (the caller reads them off the pending
    /// buffer) so the item-list transition stays independent of the buffer's
    /// state, like the selection intents carry their navigation list.
    ShowUpdates { items: Vec<Arc<PostKey>> },

    /// An entry was explicitly selected.
    SelectItem { post_key: Arc<PostKey> },

    /// Move the selection one entry down the given list.
    SelectNextItem { items: Vec<Arc<PostKey>> },

    /// Move the selection one entry up the given list.
    SelectPrevItem { items: Vec<Arc<PostKey>> },
}

impl Intent for StreamIntent {}
