//! Base trait for intents.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (selecting an item, paging)
/// - Data arrival (a page of items, a poll result)
///
/// Intents are processed by reducers to produce new states. The `Debug`
/// bound exists so dispatch can be traced.
pub trait Intent: Debug + Send + 'static {}
