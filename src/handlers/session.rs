use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::core::config::DisplayConfig;
use crate::handlers::command::Command;
use crate::handlers::sort_toggle::SortToggle;
use crate::render::table::render;
use crate::stores::leaderboard_store::LeaderboardStore;

/// Drive the leaderboard from line-based input until `quit` or end of input
///
/// The table is written after every command. Unparseable lines are reported
/// on the output and otherwise ignored.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut LeaderboardStore,
    display: &DisplayConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut toggle = SortToggle::new();

    output
        .write_all(render(&store.state(), display).as_bytes())
        .context("Failed to write leaderboard")?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, input = %line, "Rejected command");
                writeln!(output, "error: {e}").context("Failed to write leaderboard")?;
                continue;
            }
        };

        if command == Command::Quit {
            debug!("Session ended by quit command");
            break;
        }

        let state = match command.into_action(&mut toggle) {
            Some(action) => store.dispatch(&action),
            None => store.state(),
        };

        output
            .write_all(render(&state, display).as_bytes())
            .context("Failed to write leaderboard")?;
    }

    output.flush().context("Failed to flush output")?;

    Ok(())
}
