//! Unidirectional data-flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Consumer
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one feature's data
//! - **Intent**: something that happened (user action, data arrival)
//! - **Reducer**: pure function that transforms state based on intents
//! - **Store**: thread-safe owner of the current state

mod dispatch;
mod intent;
mod reducer;
mod state;

pub use dispatch::Store;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
