//! The interactive planner shell.
//!
//! This module drives the text menu over standard input/output. The shell
//! owns the itinerary container handed to it by the caller; nothing here is
//! global or static. It is generic over its reader and writer so tests can
//! run whole sessions against in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::array::DynArray;
use crate::config::Config;
use crate::destination::Destination;
use crate::error::Result;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// The interactive menu session.
#[derive(Debug)]
pub struct Shell<R, W> {
    reader: R,
    writer: W,
    config: Config,
    itinerary: DynArray<Destination>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a new shell session around an itinerary and an I/O pair.
    #[must_use]
    pub fn new(config: Config, itinerary: DynArray<Destination>, reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            config,
            itinerary,
        }
    }

    /// The itinerary this session operates on.
    #[must_use]
    pub fn itinerary(&self) -> &DynArray<Destination> {
        &self.itinerary
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the console fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.config.ui.clear_screen {
                write!(self.writer, "{CLEAR_SCREEN}")?;
            }
            self.print_menu()?;

            let Some(choice) = self.prompt("Select an option: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.add_destination()?,
                "2" => self.list_destinations()?,
                "3" => self.search_by_name()?,
                "4" => self.remove_by_name()?,
                "5" => self.demo_with_ints()?,
                "0" => return Ok(()),
                _ => writeln!(self.writer, "Invalid option. Try again.")?,
            }

            if !self.pause()? {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.writer, "=== Travel Itinerary Planner ===")?;
        writeln!(self.writer, "1) Add destination")?;
        writeln!(self.writer, "2) List destinations")?;
        writeln!(self.writer, "3) Search destination by name")?;
        writeln!(self.writer, "4) Remove destination by name")?;
        writeln!(self.writer, "5) Demo: use DynArray<i32>")?;
        writeln!(self.writer, "0) Exit")?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Write a prompt and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_destination(&mut self) -> Result<()> {
        let limit = self.config.itinerary.max_entries;
        if limit != 0 && self.itinerary.len() >= limit {
            writeln!(self.writer, "Itinerary is full (max {limit} entries).")?;
            return Ok(());
        }

        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(country) = self.prompt("Country: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(());
        };

        let destination = Destination::new(&name, &country, &description);
        debug!("adding destination: {}", destination);
        self.itinerary.push(destination);
        writeln!(self.writer, "Added.")?;
        Ok(())
    }

    fn list_destinations(&mut self) -> Result<()> {
        writeln!(self.writer, "--- Current Itinerary ---")?;
        writeln!(self.writer, "{}", self.itinerary)?;
        Ok(())
    }

    fn search_by_name(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter name to search: ")? else {
            return Ok(());
        };

        // Matches on the name field only; the country is ignored here.
        match self.itinerary.find(|d| d.matches_name(&name)) {
            Some(found) => writeln!(self.writer, "Found: {found}")?,
            None => writeln!(self.writer, "No match found.")?,
        }
        Ok(())
    }

    fn remove_by_name(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter name to remove: ")? else {
            return Ok(());
        };

        let index = self.itinerary.iter().position(|d| d.matches_name(&name));
        match index {
            Some(index) => {
                let removed = self.itinerary.remove_at(index)?;
                debug!("removed destination at index {}", index);
                writeln!(self.writer, "Removed: {removed}")?;
            }
            None => writeln!(self.writer, "No destination with that name was found.")?,
        }
        Ok(())
    }

    /// Scripted run against an integer-typed array, demonstrating growth,
    /// search, and removal without touching the itinerary.
    fn demo_with_ints(&mut self) -> Result<()> {
        let mut numbers = DynArray::with_capacity(2);
        numbers.push(10);
        numbers.push(20);
        numbers.push(30); // third push doubles the capacity

        writeln!(
            self.writer,
            "Count={}, Capacity={}",
            numbers.len(),
            numbers.capacity()
        )?;
        writeln!(self.writer, "{numbers}")?;

        writeln!(self.writer, "Contains 20? {}", numbers.contains(&20))?;
        numbers.remove(&20);
        writeln!(self.writer, "After removing 20:")?;
        writeln!(self.writer, "{numbers}")?;
        Ok(())
    }

    /// Wait for ENTER. Returns `false` when input has ended.
    fn pause(&mut self) -> Result<bool> {
        writeln!(self.writer)?;
        write!(self.writer, "Press ENTER to continue...")?;
        self.writer.flush()?;

        let mut line = String::new();
        Ok(self.reader.read_line(&mut line)? != 0)
    }
}
