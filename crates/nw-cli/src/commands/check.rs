//! Validate the built-in story graph.

use nw_play::story;

/// Run the graph's structural checks and print a summary.
pub fn run() -> Result<(), String> {
    let graph = story::misty_forest();
    graph.validate().map_err(|e| e.to_string())?;

    println!("  All checks passed for the misty forest.");
    println!("  {} nodes, {} endings", graph.len(), graph.ending_count());

    Ok(())
}
