//! Interactive play loop for the built-in story.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use nw_play::{PlayConfig, PlayError, Session, story};

/// Play the story on stdin/stdout until an ending or end-of-input.
pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut config = PlayConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::new(story::misty_forest(), config)
        .map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} the misty forest", "Entering".bold());
    println!("  Answer with the number of a choice. End-of-input leaves the story.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        println!("{}\n", session.view().map_err(|e| e.to_string())?);
        if session.is_over() {
            break;
        }

        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF ends the session cleanly
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.choose(input) {
            Ok(()) => {}
            Err(PlayError::InvalidChoice(_)) => {
                println!("{}\n", "Invalid choice, try again.".yellow());
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}
