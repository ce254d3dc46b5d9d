//! Print the story graph structure.

use colored::Colorize;

use nw_core::NodeBody;
use nw_play::story;

/// Print every node in insertion order with its choices and destinations.
pub fn run() -> Result<(), String> {
    let graph = story::misty_forest();
    graph.validate().map_err(|e| e.to_string())?;

    println!(
        "Story graph: {} nodes, start at '{}'\n",
        graph.len(),
        graph.start()
    );

    for node in graph.nodes() {
        match &node.body {
            NodeBody::Branch(choices) => {
                println!("  {}", node.id.bold());
                for choice in choices {
                    println!("    {}: {} -> {}", choice.key, choice.text, choice.next);
                }
            }
            NodeBody::End { outcomes } if outcomes.is_empty() => {
                println!("  {} (ending)", node.id.bold());
            }
            NodeBody::End { outcomes } => {
                println!(
                    "  {} (ending, {} random outcomes)",
                    node.id.bold(),
                    outcomes.len()
                );
            }
        }
    }

    Ok(())
}
