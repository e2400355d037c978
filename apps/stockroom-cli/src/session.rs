//! # Session
//!
//! The interactive command loop.
//!
//! ## Loop Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  print menu + "Enter command: "                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read line ── EOF ──────────────────────────────────────────► end      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::parse ── None ──► "Invalid command." ──► loop                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read every prompt for the command ── EOF ──────────────────► end      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse numbers (lenient: bad → 0 │ strict: bad → message, abandon)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inventory operation ──► print result ──► loop                          │
//! │                                                                         │
//! │  exit ──► "Exiting..." ──► end                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests can drive a session with a
//! `Cursor` and capture everything written into a `Vec<u8>`.

use std::io::{BufRead, Write};

use stockroom_core::validation::{
    parse_int_or_zero, parse_price, parse_price_or_zero, parse_quantity, parse_stock,
    validate_price, validate_product_name, validate_quantity, validate_sort_criteria,
    validate_stock,
};
use stockroom_core::{CoreError, CoreResult, Inventory, Product, Transaction};
use tracing::{debug, info, warn};

use crate::command::{Command, MENU};
use crate::config::CliConfig;
use crate::error::CliResult;

const ADD_PROMPTS: [&str; 5] = [
    "Enter product name: ",
    "Enter product brand: ",
    "Enter product type: ",
    "Enter product price: ",
    "Enter product stock: ",
];

const UPDATE_PROMPTS: [&str; 6] = [
    "Enter product name to update: ",
    "Enter new product name: ",
    "Enter new product brand: ",
    "Enter new product type: ",
    "Enter new product price: ",
    "Enter new product stock: ",
];

const TRANSACTION_PROMPTS: [&str; 2] = ["Enter product name for transaction: ", "Enter quantity: "];

const NOT_FOUND: &str = "Product not found.";

/// Whether the loop keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive run over an owned inventory.
pub struct Session<R, W> {
    input: R,
    output: W,
    inventory: Inventory,
    config: CliConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty inventory.
    pub fn new(input: R, output: W, config: CliConfig) -> Self {
        Self::with_inventory(input, output, config, Inventory::new())
    }

    /// Creates a session starting from an existing inventory.
    pub fn with_inventory(input: R, output: W, config: CliConfig, inventory: Inventory) -> Self {
        Session {
            input,
            output,
            inventory,
            config,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs commands until `exit` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        info!(strict = self.config.strict, "Session started");

        loop {
            write!(self.output, "\n{MENU}\n")?;

            let Some(line) = self.prompt("Enter command: ")? else {
                debug!("End of input at command prompt");
                break;
            };

            let flow = match Command::parse(&line) {
                Some(command) => {
                    debug!(%command, "Dispatching command");
                    self.dispatch(command)?
                }
                None => {
                    debug!(input = %line, "Unknown command");
                    self.say("Invalid command.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!(products = self.inventory.len(), "Session ended");
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> CliResult<Flow> {
        match command {
            Command::Add => self.add(),
            Command::Find => self.find(),
            Command::Update => self.update(),
            Command::Delete => self.delete(),
            Command::Sort => self.sort(),
            Command::Transaction => self.transaction(),
            Command::Display => {
                let table = self.inventory.to_table(self.config.price_decimals);
                self.output.write_all(table.as_bytes())?;
                Ok(Flow::Continue)
            }
            Command::Exit => {
                self.say("Exiting...")?;
                Ok(Flow::Exit)
            }
        }
    }

    // =========================================================================
    // Command Handlers
    // =========================================================================

    fn add(&mut self) -> CliResult<Flow> {
        let Some([name, brand, kind, price, stock]) = self.prompt_all(ADD_PROMPTS)? else {
            return Ok(Flow::Exit);
        };

        match self.build_product(name, brand, kind, &price, &stock) {
            Ok(product) => {
                debug!(name = %product.name, "Product added");
                self.inventory.add(product);
                self.say("Product added successfully.")?;
            }
            Err(err) => self.reject("add", &err)?,
        }

        Ok(Flow::Continue)
    }

    fn find(&mut self) -> CliResult<Flow> {
        let Some(name) = self.prompt("Enter product name to find: ")? else {
            return Ok(Flow::Exit);
        };

        let message = match self.inventory.find(&name) {
            Some(product) => format!("Product found: {product}"),
            None => NOT_FOUND.to_string(),
        };
        self.say(&message)?;

        Ok(Flow::Continue)
    }

    fn update(&mut self) -> CliResult<Flow> {
        let Some([target, name, brand, kind, price, stock]) = self.prompt_all(UPDATE_PROMPTS)?
        else {
            return Ok(Flow::Exit);
        };

        match self.build_product(name, brand, kind, &price, &stock) {
            Ok(product) => {
                if self.inventory.update(&target, product) {
                    debug!(%target, "Product updated");
                    self.say("Product updated successfully.")?;
                } else {
                    self.say(NOT_FOUND)?;
                }
            }
            Err(err) => self.reject("update", &err)?,
        }

        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> CliResult<Flow> {
        let Some(name) = self.prompt("Enter product name to delete: ")? else {
            return Ok(Flow::Exit);
        };

        if self.inventory.delete(&name) {
            debug!(%name, "Product deleted");
            self.say("Product deleted successfully.")?;
        } else {
            self.say(NOT_FOUND)?;
        }

        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> CliResult<Flow> {
        let Some(criteria) = self.prompt("Enter criteria to sort by (price, name, brand): ")?
        else {
            return Ok(Flow::Exit);
        };

        if self.config.strict {
            match validate_sort_criteria(&criteria) {
                Ok(criterion) => self.inventory.sort_by(criterion),
                Err(err) => {
                    self.reject("sort", &err.into())?;
                    return Ok(Flow::Continue);
                }
            }
        } else if self.inventory.sort_by_criteria(&criteria).is_none() {
            warn!(%criteria, "Unrecognized sort criteria, order unchanged");
        }

        self.say("Products sorted successfully.")?;
        Ok(Flow::Continue)
    }

    fn transaction(&mut self) -> CliResult<Flow> {
        let Some([name, quantity]) = self.prompt_all(TRANSACTION_PROMPTS)? else {
            return Ok(Flow::Exit);
        };

        let result = self
            .parse_quantity(&quantity)
            .and_then(|quantity| {
                self.inventory
                    .record_transaction(&Transaction::new(name, quantity))
            });

        match result {
            Ok(remaining) => {
                debug!(remaining, "Transaction recorded");
                self.say("Transaction recorded successfully.")?;
            }
            Err(err) => {
                self.reject("transaction", &err)?;
                self.say("Transaction failed.")?;
            }
        }

        Ok(Flow::Continue)
    }

    // =========================================================================
    // Input Parsing
    // =========================================================================

    /// Builds a product from prompt answers, honouring strict mode.
    fn build_product(
        &self,
        name: String,
        brand: String,
        kind: String,
        price: &str,
        stock: &str,
    ) -> CoreResult<Product> {
        if !self.config.strict {
            return Ok(Product::new(
                name,
                brand,
                kind,
                parse_price_or_zero(price),
                parse_int_or_zero(stock),
            ));
        }

        validate_product_name(&name)?;
        let price = parse_price(price)?;
        validate_price(price)?;
        let stock = parse_stock(stock)?;
        validate_stock(stock)?;

        Ok(Product::new(name, brand, kind, price, stock))
    }

    fn parse_quantity(&self, input: &str) -> CoreResult<i64> {
        if !self.config.strict {
            return Ok(parse_int_or_zero(input));
        }

        let quantity = parse_quantity(input)?;
        validate_quantity(quantity)?;
        Ok(quantity)
    }

    // =========================================================================
    // Terminal I/O
    // =========================================================================

    /// Prints `text` without a newline and reads one line.
    ///
    /// Returns `None` at end of input. The trailing line ending is removed.
    fn prompt(&mut self, text: &str) -> CliResult<Option<String>> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }

    /// Asks every prompt in order. `None` if input ends part way.
    fn prompt_all<const N: usize>(
        &mut self,
        prompts: [&str; N],
    ) -> CliResult<Option<[String; N]>> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());

        for (answer, text) in answers.iter_mut().zip(prompts) {
            match self.prompt(text)? {
                Some(line) => *answer = line,
                None => return Ok(None),
            }
        }

        Ok(Some(answers))
    }

    fn say(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn reject(&mut self, operation: &str, err: &CoreError) -> CliResult<()> {
        warn!(operation, error = %err, "Operation rejected");
        self.say(&err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
