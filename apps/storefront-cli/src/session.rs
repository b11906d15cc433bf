//! # Menu Session
//!
//! The interactive loop. Generic over its input and output so tests can
//! drive it with in-memory buffers.
//!
//! ## Flow
//! ```text
//! ┌──────────┐   1   ┌───────────────┐
//! │          │──────►│ list products │
//! │          │   2   ├───────────────┤
//! │   menu   │──────►│  show total   │
//! │          │   3   ├───────────────┤      empty + empty
//! │          │──────►│  order entry  │─────────────────────► checkout
//! │          │   4   └───────────────┘
//! │          │──────► quit (also on end of input)
//! └──────────┘
//! ```
//!
//! ## Error Reporting
//! Bad menu choices and bad order lines are reported and the loop keeps
//! going. A failed checkout prints the core error message and returns to
//! the menu. Only terminal I/O failures end the session with an error.

use std::io::{BufRead, Write};

use storefront_core::{OrderLine, ProductId, Store};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::CliError;
use crate::input::{parse_menu_choice, parse_order_entry, MenuChoice, OrderEntry};

/// A running menu session over a store.
pub struct Session<R, W> {
    store: Store,
    store_name: String,
    atomic_checkout: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, config: &AppConfig, input: R, output: W) -> Self {
        Session {
            store,
            store_name: config.store_name.clone(),
            atomic_checkout: config.atomic_checkout,
            input,
            output,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consumes the session, returning the store and the output sink.
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.output)
    }

    /// Runs the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Welcome to {}!", self.store_name)?;
        writeln!(self.output)?;

        loop {
            self.display_menu()?;
            let Some(line) = self.prompt("Please choose a number: ")? else {
                debug!("input closed at menu");
                break;
            };

            let choice = match parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    debug!(input = %line, error = %e, "rejected menu choice");
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number between 1 and {}.",
                        MenuChoice::ALL.len()
                    )?;
                    continue;
                }
            };

            debug!(?choice, "menu choice");
            match choice {
                MenuChoice::ListProducts => {
                    self.list_products()?;
                }
                MenuChoice::ShowTotal => self.show_total()?,
                MenuChoice::MakeOrder => self.make_order()?,
                MenuChoice::Quit => break,
            }
        }

        writeln!(self.output, "Thank you for shopping at {}!", self.store_name)?;
        self.output.flush()?;
        Ok(())
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn display_menu(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "      Store Menu")?;
        writeln!(self.output, "     ------------")?;
        for (number, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, choice.label())?;
        }
        Ok(())
    }

    /// Prints the active listing and returns the ids in listing order.
    fn list_products(&mut self) -> Result<Vec<ProductId>, CliError> {
        let listed = self.store.list_active_products();

        writeln!(self.output, "------")?;
        for (number, product) in listed.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, product)?;
        }
        writeln!(self.output, "------")?;

        Ok(listed.iter().map(|p| p.id()).collect())
    }

    fn show_total(&mut self) -> Result<(), CliError> {
        writeln!(
            self.output,
            "Total of {} items in store.",
            self.store.total_quantity()
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    fn make_order(&mut self) -> Result<(), CliError> {
        let listed = self.list_products()?;
        writeln!(self.output, "When you want to finish order, enter empty text.")?;

        let mut lines = Vec::new();
        loop {
            let Some(product) = self.prompt("Which product # do you want? ")? else {
                debug!(lines = lines.len(), "input closed during order entry");
                return Ok(());
            };
            let Some(amount) = self.prompt("What amount do you want? ")? else {
                debug!(lines = lines.len(), "input closed during order entry");
                return Ok(());
            };

            match parse_order_entry(&product, &amount, listed.len()) {
                Ok(OrderEntry::Finish) => break,
                Ok(OrderEntry::Line { index, quantity }) => {
                    lines.push(OrderLine::new(listed[index], quantity));
                    writeln!(self.output, "Product added to list!")?;
                    writeln!(self.output)?;
                }
                Err(e) => {
                    debug!(error = %e, "rejected order line");
                    writeln!(self.output, "Invalid input. Please try again.")?;
                }
            }
        }

        writeln!(self.output, "********")?;
        let result = if self.atomic_checkout {
            self.store.checkout_atomic(&lines)
        } else {
            self.store.checkout(&lines)
        };

        match result {
            Ok(total) => {
                info!(lines = lines.len(), %total, "order made");
                writeln!(self.output, "Order made! Total payment: {total}")?;
            }
            Err(e) => {
                let err = CliError::from(e);
                warn!(code = %err.code(), error = %err, "order failed");
                writeln!(self.output, "Error while making order! {err}")?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    // =========================================================================
    // Terminal Helpers
    // =========================================================================

    /// Writes `text`, then reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
