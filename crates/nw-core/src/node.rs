//! Story nodes and the choices that connect them.

/// A single choice offered at a story node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The key the player types to select this choice (e.g. `"1"`).
    pub key: String,
    /// The text shown next to the key.
    pub text: String,
    /// Identifier of the node this choice leads to.
    pub next: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(key: impl Into<String>, text: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            next: next.into(),
        }
    }
}

/// The body of a node: either a set of outgoing choices or an ending.
///
/// Terminal nodes are a distinct variant rather than a node with an empty
/// choice list, so a randomized epilogue travels with the node that owns it
/// and the traversal loop never has to compare identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// An interior node with ordered choices (display order = insertion order).
    Branch(Vec<Choice>),
    /// A terminal node. When `outcomes` is non-empty, one entry is drawn
    /// uniformly at random on arrival and shown after the description.
    End {
        /// Possible epilogue texts; empty for a plain ending.
        outcomes: Vec<String>,
    },
}

/// A point in the story graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique identifier of this node within the graph.
    pub id: String,
    /// The text shown when the story reaches this node.
    pub description: String,
    /// Choices leading onward, or an ending.
    pub body: NodeBody,
}

impl Node {
    /// Create an interior node with no choices yet; add them with
    /// [`Node::with_choice`].
    pub fn branch(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            body: NodeBody::Branch(Vec::new()),
        }
    }

    /// Create a terminal node whose description is the whole ending.
    pub fn end(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            body: NodeBody::End {
                outcomes: Vec::new(),
            },
        }
    }

    /// Create a terminal node with a random epilogue drawn from `outcomes`.
    pub fn end_random<I, S>(
        id: impl Into<String>,
        description: impl Into<String>,
        outcomes: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            description: description.into(),
            body: NodeBody::End {
                outcomes: outcomes.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Append a choice. Has no effect on terminal nodes.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        if let NodeBody::Branch(choices) = &mut self.body {
            choices.push(choice);
        }
        self
    }

    /// Whether this node ends the story.
    pub fn is_terminal(&self) -> bool {
        matches!(self.body, NodeBody::End { .. })
    }

    /// The node's choices, in display order. Empty for terminal nodes.
    pub fn choices(&self) -> &[Choice] {
        match &self.body {
            NodeBody::Branch(choices) => choices,
            NodeBody::End { .. } => &[],
        }
    }

    /// The choice matching `key` exactly, if any.
    pub fn choice(&self, key: &str) -> Option<&Choice> {
        self.choices().iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_builder() {
        let node = Node::branch("fork", "A fork in the road.")
            .with_choice(Choice::new("1", "Go left", "left"))
            .with_choice(Choice::new("2", "Go right", "right"));

        assert_eq!(node.id, "fork");
        assert!(!node.is_terminal());
        assert_eq!(node.choices().len(), 2);
        assert_eq!(node.choice("2").unwrap().next, "right");
        assert!(node.choice("3").is_none());
    }

    #[test]
    fn choices_keep_insertion_order() {
        let node = Node::branch("fork", "Pick one.")
            .with_choice(Choice::new("b", "Second", "y"))
            .with_choice(Choice::new("a", "First", "x"));

        let keys: Vec<&str> = node.choices().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn end_node_has_no_choices() {
        let node = Node::end("finale", "The end.");
        assert!(node.is_terminal());
        assert!(node.choices().is_empty());
        assert!(node.choice("1").is_none());
    }

    #[test]
    fn with_choice_ignored_on_terminal() {
        let node = Node::end("finale", "The end.").with_choice(Choice::new("1", "Go", "nowhere"));
        assert!(node.choices().is_empty());
    }

    #[test]
    fn end_random_collects_outcomes() {
        let node = Node::end_random("beach", "The tide turns.", ["Saved!", "Lost."]);
        assert!(node.is_terminal());
        match node.body {
            NodeBody::End { outcomes } => assert_eq!(outcomes.len(), 2),
            NodeBody::Branch(_) => unreachable!(),
        }
    }
}
