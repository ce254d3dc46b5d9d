//! Error types for the narrative engine.

use thiserror::Error;

use nw_core::StoryError;

/// Result type for play operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur while playing a story.
#[derive(Debug, Error)]
pub enum PlayError {
    /// The input did not match any choice key on the current node.
    /// Recoverable: the session stays on the same node.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// A choice was made after the story reached an ending.
    #[error("the story is already over")]
    SessionOver,

    /// Story graph error (failed validation, or a missing node at lookup).
    #[error("{0}")]
    Story(#[from] StoryError),
}
