//! The built-in "misty forest" story.
//!
//! A small fixed graph: two branching layers, four endings, one of which
//! resolves a random epilogue. Authored in code; the graph's own tests and
//! `nw check` hold it to the closure invariant.

use nw_core::{Choice, Node, StoryGraph};

/// Outcomes for the shore encounter, drawn uniformly at random.
pub const SHORE_OUTCOMES: [&str; 2] = [
    "You drive the beast off and find a hidden cache of treasure!",
    "The beast overpowers you. The story ends here.",
];

/// Build the misty forest story graph.
pub fn misty_forest() -> StoryGraph {
    StoryGraph::new("start")
        .with_node(
            Node::branch(
                "start",
                "You wake in a mysterious forest. Mist curls between the trees, \
                 and two paths lead away: left toward a river, right toward a cave. \
                 Which do you take?",
            )
            .with_choice(Choice::new("1", "Go to the river", "river"))
            .with_choice(Choice::new("2", "Go to the cave", "cave")),
        )
        .with_node(
            Node::branch(
                "river",
                "You reach the riverbank and find a small boat. You could row \
                 across, or follow the shore on foot.",
            )
            .with_choice(Choice::new("1", "Row across the river", "cross_river"))
            .with_choice(Choice::new("2", "Walk along the shore", "shore")),
        )
        .with_node(
            Node::branch(
                "cave",
                "The cave is pitch black. You light a torch and find a treasure \
                 chest with a monster guarding it. What do you do?",
            )
            .with_choice(Choice::new("1", "Open the chest", "treasure"))
            .with_choice(Choice::new("2", "Fight the monster", "monster")),
        )
        .with_node(Node::end(
            "cross_river",
            "You make it across and find a castle on the far bank. \
             The story ends: you become a hero!",
        ))
        .with_node(Node::end_random(
            "shore",
            "Following the shore, you run into a wild beast. Fate decides:",
            SHORE_OUTCOMES,
        ))
        .with_node(Node::end(
            "treasure",
            "The chest is full of gold, but opening it springs a trap. \
             You escape, wounded. The story ends.",
        ))
        .with_node(Node::end(
            "monster",
            "You fight the monster bravely, but it is too strong. The story ends.",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_is_closed() {
        misty_forest().validate().unwrap();
    }

    #[test]
    fn has_expected_shape() {
        let graph = misty_forest();
        assert_eq!(graph.len(), 7);
        assert_eq!(graph.ending_count(), 4);
        assert_eq!(graph.start(), "start");
    }

    #[test]
    fn endings_are_the_known_four() {
        let graph = misty_forest();
        for id in ["cross_river", "shore", "treasure", "monster"] {
            assert!(graph.node(id).unwrap().is_terminal(), "{id} should end the story");
        }
    }

    #[test]
    fn shore_carries_two_outcomes() {
        let graph = misty_forest();
        match &graph.node("shore").unwrap().body {
            nw_core::NodeBody::End { outcomes } => assert_eq!(outcomes.len(), 2),
            nw_core::NodeBody::Branch(_) => unreachable!(),
        }
    }
}
