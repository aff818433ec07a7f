//! REPL session state and command execution

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::Result;
use crate::repl::command::{Command, COMMANDS};
use crate::repl::pokedex::Pokedex;

/// What the loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Percent chance of catching a Pokemon with the given base experience.
///
/// Lower experience is easier to catch; 100 or more can never be caught.
pub fn catch_chance(base_experience: Option<u32>) -> u32 {
    100u32.saturating_sub(base_experience.unwrap_or(0))
}

/// State carried between commands: pagination cursors and caught Pokemon.
pub struct Session {
    client: PokeApiClient,
    next: Option<String>,
    previous: Option<String>,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Session {
    /// Creates a session whose first `map` fetches `page_size` areas from offset 0.
    pub fn new(client: PokeApiClient, page_size: u32) -> Self {
        Self::with_rng(client, page_size, StdRng::from_entropy())
    }

    /// Same as [`new`](Self::new) with a caller-supplied catch roll source.
    pub fn with_rng(client: PokeApiClient, page_size: u32, rng: StdRng) -> Self {
        let first_page = client.location_areas_url(0, page_size);
        Self {
            client,
            next: Some(first_page),
            previous: None,
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// URL the next `map` will fetch, if any.
    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// URL the next `mapb` will fetch, if any.
    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Runs `command`, writing everything it displays to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Outcome> {
        debug!("Executing {:?}", command);
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Outcome::Exit);
            }
            Command::Map => match self.next.clone() {
                Some(url) => self.show_page(&url, out).await?,
                None => writeln!(out, "No more pages to fetch.")?,
            },
            Command::MapBack => match self.previous.clone() {
                Some(url) => self.show_page(&url, out).await?,
                None => writeln!(out, "No previous pages to fetch.")?,
            },
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }
        Ok(Outcome::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Available commands:")?;
        for (name, description) in COMMANDS {
            writeln!(out, "- {}: {}", name, description)?;
        }
        Ok(())
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url).await?;

        writeln!(out, "Location Areas:")?;
        for area in &page.results {
            writeln!(out, "- {}", area.name)?;
        }

        self.next = page.next;
        self.previous = page.previous;

        if self.next.is_some() {
            writeln!(out, "Type 'map' to see the next page of locations.")?;
        } else {
            writeln!(out, "No more pages available.")?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        let location = self.client.location_area(area).await?;

        writeln!(out, "Pokemon encounters in {}:", area)?;
        for name in location.pokemon_names() {
            writeln!(out, "- {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;

        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let chance = catch_chance(pokemon.base_experience);
        let roll = self.rng.gen_range(0..100);
        debug!("Catch roll for {}: {} against chance {}", name, roll, chance);

        if roll < chance {
            writeln!(out, "{} was caught!", name)?;
            self.pokedex.insert(name, pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(caught) = self.pokedex.get(name) else {
            writeln!(out, "You have not caught {} yet.", name)?;
            return Ok(());
        };
        let pokemon = &caught.pokemon;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(
            out,
            "Caught: {}",
            caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty.")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for (name, _) in self.pokedex.iter() {
            writeln!(out, "  - {}", name)?;
        }
        Ok(())
    }
}
