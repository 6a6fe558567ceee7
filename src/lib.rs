//! State container for a paginated reader stream.
//!
//! The crate is split into two layers:
//!
//! - [`store`] — architecture primitives: the `State`/`Intent`/`Reducer`
//!   traits and a thread-safe [`store::Store`] that owns one state value and
//!   applies reducers to it.
//! - [`streams`] — the reader stream feature: the ordered item list, the
//!   pending-update buffer with gap markers, the selection cursor, and the
//!   pagination/request flags, all driven by a single [`streams::StreamIntent`]
//!   enum.
//!
//! The surrounding application owns exactly one [`streams::StreamState`] per
//! stream and feeds intents through a dispatcher; every transition is a pure
//! function of the previous state and the intent.

pub mod store;
pub mod streams;
