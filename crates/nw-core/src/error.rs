//! Error types used throughout the crate.

use thiserror::Error;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur when building or validating a story graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    /// A node with the same identifier already exists.
    #[error("duplicate node: \"{0}\"")]
    DuplicateNode(String),

    /// The designated start node is missing from the graph.
    #[error("start node \"{0}\" not found")]
    MissingStart(String),

    /// A choice points to a node identifier that does not exist.
    #[error("node \"{node}\" choice \"{key}\" leads to missing node \"{next}\"")]
    DanglingChoice {
        /// The node holding the broken choice.
        node: String,
        /// The choice key as shown to the player.
        key: String,
        /// The unresolved destination identifier.
        next: String,
    },

    /// Two choices on the same node share a key.
    #[error("node \"{node}\" has duplicate choice key \"{key}\"")]
    DuplicateChoiceKey {
        /// The node holding the clashing choices.
        node: String,
        /// The repeated key.
        key: String,
    },

    /// A branching node was built with no choices; use an ending node instead.
    #[error("branching node \"{0}\" has no choices")]
    NoChoices(String),

    /// The requested node identifier does not exist in the graph.
    #[error("node not found: \"{0}\"")]
    NodeNotFound(String),
}
