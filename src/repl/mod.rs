//! REPL Module
//!
//! The interactive prompt: reads commands line by line and runs them
//! against a [`Session`].
//!
//! # Commands
//! - `help`, `exit`
//! - `map`, `mapb` - Page forward/back through location areas
//! - `explore <area>` - List Pokemon in an area
//! - `catch <pokemon>`, `inspect <pokemon>`, `pokedex`

pub mod command;
pub mod pokedex;
pub mod session;

pub use command::{clean_input, Command, COMMANDS};
pub use pokedex::{CaughtPokemon, Pokedex};
pub use session::{catch_chance, Outcome, Session};

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::{PokedexError, Result};

/// Prompt printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Runs the prompt loop until `exit` or end of input.
///
/// Command failures are reported on `out` and the loop carries on; only
/// failing to read `input` or write `out` ends it with an error.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input, leaving the REPL");
            writeln!(out)?;
            break;
        };

        let command = match Command::parse(&line) {
            None => {
                writeln!(out, "No command entered.")?;
                continue;
            }
            Some(Err(PokedexError::UnknownCommand(name))) => {
                debug!("Unknown command: {}", name);
                writeln!(out, "Unknown command. Type 'help' to see available commands.")?;
                continue;
            }
            Some(Err(err)) => {
                writeln!(out, "Error: {}", err)?;
                continue;
            }
            Some(Ok(command)) => command,
        };

        match session.execute(command, out).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => break,
            Err(PokedexError::Io(err)) => return Err(err.into()),
            Err(err) => {
                debug!("Command failed: {}", err);
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}
