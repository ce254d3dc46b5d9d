//! Narrative engine for Nebelwald.
//!
//! Walks a fixed [`nw_core::StoryGraph`]: render the current node, apply one
//! validated choice, repeat until an ending. One terminal node may carry a
//! random epilogue, drawn from a seeded RNG on arrival.

/// Configuration for a play session.
pub mod config;
/// Error types for the narrative engine.
pub mod error;
/// Play session management.
pub mod session;
/// The built-in "misty forest" story.
pub mod story;

pub use config::PlayConfig;
pub use error::{PlayError, PlayResult};
pub use session::Session;
