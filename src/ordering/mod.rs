//! # Order Taker
//!
//! Builds one [`Order`] from a fixed, already loaded menu. The menu is read-only here:
//! dish numbers shown to the customer are 1-based positions in it.
//!
//! Input at the main prompt:
//!
//! | Input | Effect |
//! |-------|--------|
//! | `0`   | finish and print the summary |
//! | `-1`  | ask for a dish number and show its description |
//! | `1..=n` | add that dish to the order |
//! | anything else | error message, prompt again |

pub mod error;

pub use error::*;

use crate::console::{Console, LineSource, PromptError};
use crate::model::{format_price, Dish, Order, OrderItem};
use std::io::Write;
use tracing::{debug, info};

/// What a number typed at the main prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Finish,
    Inspect,
    Select(i64),
}

impl From<i64> for Choice {
    fn from(input: i64) -> Self {
        match input {
            0 => Choice::Finish,
            -1 => Choice::Inspect,
            other => Choice::Select(other),
        }
    }
}

pub struct OrderTaker<R, W> {
    menu: Vec<Dish>,
    order: Order,
    console: Console<R, W>,
}

impl<R: LineSource, W: Write> OrderTaker<R, W> {
    pub fn new(menu: Vec<Dish>, console: Console<R, W>) -> Self {
        Self {
            menu,
            order: Order::new(),
            console,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    fn dish(&self, choice: i64) -> Result<&Dish, OrderError> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.menu.get(index))
            .ok_or(OrderError::OutOfRange {
                choice,
                len: self.menu.len(),
            })
    }

    /// Prints the numbered menu.
    pub fn display_menu(&mut self) -> Result<(), PromptError> {
        let mut listing = String::from("MENU:\n");
        for (index, dish) in self.menu.iter().enumerate() {
            listing.push_str(&format!(
                "{}. {} - {}\n",
                index + 1,
                dish.name,
                format_price(dish.price())
            ));
        }
        self.console.say(listing)
    }

    /// Adds the dish with 1-based number `choice` and prints the current order.
    pub fn select(&mut self, choice: i64) -> Result<OrderItem, OrderError> {
        let dish = self.dish(choice)?.clone();
        let line = self.order.add(&dish).clone();
        info!(choice, name = %line.name, quantity = line.quantity, "Added to order");

        self.console.say(format!("Added to order: {}", dish.name))?;
        self.console.say(self.order.render_current())?;
        Ok(line)
    }

    /// Prints the description of the dish with 1-based number `choice` without ordering it.
    pub fn inspect(&mut self, choice: i64) -> Result<String, OrderError> {
        let description = self.dish(choice)?.description.clone();
        debug!(choice, "Description shown");
        self.console.say(&description)?;
        Ok(description)
    }

    /// Main loop. Ends on `0` or when the input is closed, then prints the summary.
    pub fn run(&mut self) -> Result<(), OrderError> {
        if self.menu.is_empty() {
            self.console
                .say("The menu is empty, there is nothing to order.")?;
        }

        loop {
            self.console
                .say("Select a dish from the menu (enter number) to add to your order.")?;
            self.console.say("Enter 0 to complete ordering.")?;
            self.console.say("Type -1 to see the description of the dish.")?;
            self.display_menu()?;

            let input = match self.console.ask_parsed::<i64>("> ", "a dish number") {
                Ok(input) => input,
                Err(PromptError::Closed) => break,
                Err(PromptError::Format { .. }) => {
                    self.console.say("Invalid input. Try again.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match Choice::from(input) {
                Choice::Finish => break,
                Choice::Inspect => {
                    let choice = match self.console.ask_parsed::<i64>(
                        "Enter the dish number to see the description: ",
                        "a dish number",
                    ) {
                        Ok(choice) => choice,
                        Err(PromptError::Closed) => break,
                        Err(PromptError::Format { .. }) => {
                            self.console.say("Invalid dish number.")?;
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    };
                    match self.inspect(choice) {
                        Ok(_) => {}
                        Err(OrderError::OutOfRange { .. }) => {
                            self.console.say("Invalid dish number.")?;
                        }
                        Err(e) => return Err(e),
                    }
                }
                Choice::Select(choice) => match self.select(choice) {
                    Ok(_) => {}
                    Err(OrderError::OutOfRange { .. }) => {
                        self.console.say("Incorrect selection. Try again.")?;
                    }
                    Err(e) => return Err(e),
                },
            }
        }

        self.finish()
    }

    /// Prints the final summary and waits for Enter.
    pub fn finish(&mut self) -> Result<(), OrderError> {
        info!(
            lines = self.order.items().len(),
            total = self.order.total(),
            "Order completed"
        );
        self.console.say(self.order.summary())?;
        self.console.say("Thank you for your order!")?;
        match self.console.ask("Press Enter to end...") {
            Ok(_) | Err(PromptError::Closed | PromptError::Format { .. }) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
