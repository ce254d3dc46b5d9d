//! Core types for Nebelwald: story nodes, choices, and the story graph.
//!
//! This crate defines the data model the player traverses. A [`StoryGraph`]
//! is constructed once, validated for closure (every choice resolves to a
//! node in the graph), and never mutated afterwards — the only mutable play
//! state lives in the session that walks it.

/// Error types used throughout the crate.
pub mod error;
/// The immutable story graph keyed by node identifier.
pub mod graph;
/// Story nodes and the choices that connect them.
pub mod node;

/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export the story graph.
pub use graph::StoryGraph;
/// Re-export node types.
pub use node::{Choice, Node, NodeBody};
