//! The reader stream feature: a paginated, append-only list of posts with a
//! pending-update buffer and a selection cursor.

mod intent;
mod post_key;
pub mod reducer;
pub mod selectors;
mod state;
mod stream_key;

pub use intent::StreamIntent;
pub use post_key::{GapMarker, PostKey, StreamEntry};
pub use reducer::StreamsReducer;
pub use state::{PendingBuffer, StreamState};
pub use stream_key::{StreamKey, StreamKeyError};
