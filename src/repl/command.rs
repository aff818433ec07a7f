//! Command parsing
//!
//! Turns a line of user input into a [`Command`].

use crate::error::{PokedexError, Result};

/// Name and description of every command, in the order `help` lists them.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show the list of available commands"),
    ("exit", "Exit the Pokedex"),
    ("map", "Show the next page of location areas"),
    ("mapb", "Show the previous page of location areas"),
    ("explore", "List the Pokemon found in a location area: explore <area>"),
    ("catch", "Throw a Pokeball at a Pokemon: catch <pokemon>"),
    ("inspect", "Show details of a caught Pokemon: inspect <pokemon>"),
    ("pokedex", "List every Pokemon you have caught"),
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

impl Command {
    /// Parses one line of input.
    ///
    /// Returns `None` for blank input. Words after the ones a command uses
    /// are ignored.
    pub fn parse(input: &str) -> Option<Result<Self>> {
        let words = clean_input(input);
        let (name, args) = words.split_first()?;
        Some(Self::from_words(name, args))
    }

    fn from_words(name: &str, args: &[String]) -> Result<Self> {
        let command = match name {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required(args, "explore", "location area")?),
            "catch" => Command::Catch(required(args, "catch", "pokemon")?),
            "inspect" => Command::Inspect(required(args, "inspect", "pokemon")?),
            "pokedex" => Command::Pokedex,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn required(args: &[String], command: &'static str, argument: &'static str) -> Result<String> {
    args.first()
        .cloned()
        .ok_or(PokedexError::MissingArgument { command, argument })
}

/// Lowercases `text` and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}
