//! The story graph: an immutable mapping from node identifiers to nodes.

use std::collections::HashMap;

use crate::error::{StoryError, StoryResult};
use crate::node::{Node, NodeBody};

/// A fixed graph of story nodes.
///
/// Built once at startup and then only read. Nodes are keyed by identifier;
/// insertion order is preserved for display purposes.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    start: String,
    nodes: HashMap<String, Node>,
    order: Vec<String>,
}

impl StoryGraph {
    /// Create an empty graph with the given entry-node identifier.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The identifier of the entry node.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Add a node to the graph.
    pub fn add_node(&mut self, node: Node) -> StoryResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(StoryError::DuplicateNode(node.id.clone()));
        }
        self.order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Builder-style [`StoryGraph::add_node`] for static story definitions.
    ///
    /// # Panics
    /// Panics on a duplicate identifier; fixed stories are authored in code,
    /// so a duplicate is a programming error caught by the story's own tests.
    #[must_use]
    pub fn with_node(mut self, node: Node) -> Self {
        self.add_node(node).expect("duplicate node id in story");
        self
    }

    /// Get a node by identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a node by identifier, or a [`StoryError::NodeNotFound`].
    ///
    /// Unreachable for a validated graph; kept as a defensive check at the
    /// traversal's lookup site.
    pub fn require_node(&self, id: &str) -> StoryResult<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| StoryError::NodeNotFound(id.to_string()))
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of terminal nodes.
    pub fn ending_count(&self) -> usize {
        self.nodes().filter(|n| n.is_terminal()).count()
    }

    /// Check the graph's structural invariants.
    ///
    /// Verifies that the start node exists, that every choice resolves to a
    /// node in the graph (closure invariant), that no node carries two
    /// choices with the same key, and that branching nodes offer at least
    /// one choice. Run once before play begins so broken graphs fail fast
    /// instead of mid-session.
    pub fn validate(&self) -> StoryResult<()> {
        if !self.nodes.contains_key(&self.start) {
            return Err(StoryError::MissingStart(self.start.clone()));
        }

        for node in self.nodes() {
            if let NodeBody::Branch(choices) = &node.body {
                if choices.is_empty() {
                    return Err(StoryError::NoChoices(node.id.clone()));
                }
                for (i, choice) in choices.iter().enumerate() {
                    if choices[..i].iter().any(|c| c.key == choice.key) {
                        return Err(StoryError::DuplicateChoiceKey {
                            node: node.id.clone(),
                            key: choice.key.clone(),
                        });
                    }
                    if !self.nodes.contains_key(&choice.next) {
                        return Err(StoryError::DanglingChoice {
                            node: node.id.clone(),
                            key: choice.key.clone(),
                            next: choice.next.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
