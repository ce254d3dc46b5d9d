//! Play session management.
//!
//! A [`Session`] owns a validated [`StoryGraph`] and walks it one choice at
//! a time. The current-node identifier is the only mutable traversal state;
//! the graph itself is never touched after construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nw_core::{NodeBody, StoryGraph};

use crate::config::PlayConfig;
use crate::error::{PlayError, PlayResult};

/// One traversal of a story graph, from the start node to an ending.
#[derive(Debug)]
pub struct Session {
    graph: StoryGraph,
    current: String,
    epilogue: Option<String>,
    over: bool,
    rng: StdRng,
}

impl Session {
    /// Create a new session at the graph's start node.
    ///
    /// Validates the graph once up front, so every later lookup is known to
    /// resolve. If the start node is itself terminal the session is over
    /// immediately (its epilogue, if any, already drawn).
    pub fn new(graph: StoryGraph, config: PlayConfig) -> PlayResult<Self> {
        graph.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let start = graph.start().to_string();

        let mut session = Self {
            graph,
            current: start.clone(),
            epilogue: None,
            over: false,
            rng: StdRng::seed_from_u64(seed),
        };
        session.enter(&start)?;
        Ok(session)
    }

    /// The graph being played.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    /// Identifier of the node the session is currently on.
    pub fn current_id(&self) -> &str {
        &self.current
    }

    /// Whether an ending has been reached.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The epilogue drawn for the current node, if it has one.
    pub fn epilogue(&self) -> Option<&str> {
        self.epilogue.as_deref()
    }

    /// Render the current node: its description, then either its choices as
    /// "`key`: `text`" lines in display order, or the drawn epilogue.
    ///
    /// Repeatable without side effects; the play loop re-prints it after an
    /// invalid choice.
    pub fn view(&self) -> PlayResult<String> {
        let node = self.graph.require_node(&self.current)?;
        let mut out = node.description.clone();

        match &node.body {
            NodeBody::Branch(choices) => {
                for choice in choices {
                    out.push('\n');
                    out.push_str(&format!("{}: {}", choice.key, choice.text));
                }
            }
            NodeBody::End { .. } => {
                if let Some(epilogue) = &self.epilogue {
                    out.push('\n');
                    out.push_str(epilogue);
                }
            }
        }

        Ok(out)
    }

    /// Apply one line of player input.
    ///
    /// The input must exactly match one of the current node's choice keys.
    /// On a match the session advances to the choice's destination; on a
    /// mismatch it returns [`PlayError::InvalidChoice`] and stays put.
    pub fn choose(&mut self, input: &str) -> PlayResult<()> {
        if self.over {
            return Err(PlayError::SessionOver);
        }

        let node = self.graph.require_node(&self.current)?;
        let next = match node.choice(input) {
            Some(choice) => choice.next.clone(),
            None => return Err(PlayError::InvalidChoice(input.to_string())),
        };

        self.enter(&next)
    }

    /// Move to `id`, drawing the epilogue once if it is a terminal node
    /// with outcomes.
    fn enter(&mut self, id: &str) -> PlayResult<()> {
        let node = self.graph.require_node(id)?;

        self.over = node.is_terminal();
        self.epilogue = match &node.body {
            NodeBody::End { outcomes } if !outcomes.is_empty() => {
                Some(outcomes[self.rng.random_range(0..outcomes.len())].clone())
            }
            _ => None,
        };

        self.current = id.to_string();
        Ok(())
    }
}
