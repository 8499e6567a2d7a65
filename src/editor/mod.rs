//! # Menu Editor
//!
//! Interactive add / delete / modify / display over the menu held by the Dish actor,
//! and saving it to the menu file.
//!
//! Every operation gathers all of its input before sending a single request to the actor,
//! so an operation that fails part way (bad number, negative price, unknown category,
//! out-of-range dish number) leaves the menu exactly as it was.
//!
//! The operation numbers are 1 to 4 and 6; there is no operation 5.

pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::console::{Console, LineSource, PromptError};
use crate::dish_actor::DishError;
use crate::model::{Category, Dish, DishCreate, DishKind, DishUpdate};
use crate::storage;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Operations offered by the editor's main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Delete,
    Modify,
    Display,
    SaveAndExit,
}

impl Operation {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Operation::Add),
            2 => Some(Operation::Delete),
            3 => Some(Operation::Modify),
            4 => Some(Operation::Display),
            6 => Some(Operation::SaveAndExit),
            _ => None,
        }
    }
}

const OPERATIONS: &str = "Available operations:\n\
    1. Add a new dish\n\
    2. Delete a dish\n\
    3. Modify a dish\n\
    4. Display the menu\n\
    6. Finish and save all modifications";

pub struct MenuEditor<R, W> {
    client: MenuClient,
    console: Console<R, W>,
    menu_path: PathBuf,
}

impl<R: LineSource, W: Write> MenuEditor<R, W> {
    pub fn new(client: MenuClient, console: Console<R, W>, menu_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            console,
            menu_path: menu_path.into(),
        }
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Main loop. Returns once the menu is saved or the input is closed.
    ///
    /// Errors from a single operation are reported and the loop continues; only a
    /// broken console or a dead dish actor end it with `Err`.
    pub async fn run(&mut self) -> Result<(), EditorError> {
        loop {
            match self.step().await {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(EditorError::Prompt(PromptError::Closed)) => {
                    warn!("Input closed, exiting without saving");
                    self.console.say("Input closed. Exiting without saving.")?;
                    return Ok(());
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.report(&e)?,
            }
        }
    }

    // One pass of the main loop; `Ok(true)` once the menu has been saved.
    async fn step(&mut self) -> Result<bool, EditorError> {
        self.console.say(OPERATIONS)?;
        let choice = self
            .console
            .ask_parsed::<i64>("Select operation (enter number): ", "an operation number")?;

        match Operation::from_choice(choice) {
            Some(Operation::Add) => {
                self.add_dish().await?;
            }
            Some(Operation::Delete) => {
                self.delete_dish().await?;
            }
            Some(Operation::Modify) => {
                self.modify_dish().await?;
            }
            Some(Operation::Display) => {
                self.display_menu().await?;
            }
            Some(Operation::SaveAndExit) => {
                self.save().await?;
                return Ok(true);
            }
            None => {
                self.console.say("Invalid operation number. Try again.")?;
            }
        }
        Ok(false)
    }

    fn report(&mut self, error: &EditorError) -> Result<(), PromptError> {
        warn!(error = %error, "Operation cancelled");
        let message = match error {
            EditorError::Prompt(PromptError::Format { .. }) => format!("Data format error: {error}"),
            _ => format!("Error: {error}"),
        };
        self.console.say(message)?;
        self.console.say("Operation cancelled.")
    }

    fn ask_price(&mut self, prompt: &str) -> Result<f64, PromptError> {
        let input = self.console.ask(prompt)?;
        match input.trim().replace(',', ".").parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(price),
            _ => Err(PromptError::Format {
                input,
                expected: "a price",
            }),
        }
    }

    fn ask_index(&mut self, prompt: &str) -> Result<usize, EditorError> {
        let number = self.console.ask_parsed::<i64>(prompt, "a dish number")?;
        usize::try_from(number).map_err(|_| EditorError::NegativeIndex(number))
    }

    /// Prompts for a new dish and appends it; returns its position.
    pub async fn add_dish(&mut self) -> Result<usize, EditorError> {
        self.console.say("Adding a new dish to the menu:")?;
        let name = self.console.ask("Enter the dish name: ")?;
        let price = self.ask_price("Enter the dish price: ")?;
        let description = self.console.ask("Enter the dish description: ")?;
        let selector = self.console.ask_parsed::<i64>(
            "Enter the dish category (1 - Soup, 2 - Main Dish, 3 - Dessert): ",
            "a category number",
        )?;

        let kind = match Category::from_selector(selector)? {
            Category::Soup => DishKind::Soup {
                spiciness: self.console.ask("Enter the soup spiciness: ")?,
            },
            Category::MainDish => DishKind::MainDish,
            Category::Dessert => DishKind::Dessert,
        };

        let params = DishCreate {
            name: name.clone(),
            price,
            description,
            kind,
        };
        let index = self.client.add_dish(params).await?;
        info!(index, name = %name, "Dish added");
        self.console
            .say(format!("Dish '{name}' has been added to the menu."))?;
        Ok(index)
    }

    /// Shows the menu, prompts for a 0-based dish number and removes that dish.
    pub async fn delete_dish(&mut self) -> Result<Dish, EditorError> {
        self.console.say("Deleting a dish from the menu:")?;
        self.display_menu().await?;

        let index = self.ask_index("Enter the number of the dish to delete: ")?;
        let removed = self.client.remove_dish(index).await?;
        info!(index, name = %removed.name, "Dish deleted");
        self.console.say(format!(
            "Dish '{}' has been removed from the menu.",
            removed.name
        ))?;
        Ok(removed)
    }

    /// Shows the menu, prompts for a dish number and replaces its fields.
    ///
    /// Name, price and description are always overwritten; spiciness is asked for soups only.
    pub async fn modify_dish(&mut self) -> Result<Dish, EditorError> {
        self.console.say("Modifying a dish on the menu:")?;
        let menu = self.display_menu().await?;

        let index = self.ask_index("Enter the number of the dish to modify: ")?;
        let selected = menu.get(index).ok_or(DishError::OutOfRange {
            index,
            len: menu.len(),
        })?;
        self.console
            .say(format!("Modifying the dish: {}", selected.display()))?;

        let name = self.console.ask("Enter a new name for the dish: ")?;
        let price = self.ask_price("Enter the new price of the dish: ")?;
        let description = self.console.ask("Enter a new description of the dish: ")?;
        let spiciness = if selected.is_soup() {
            Some(self.console.ask("Enter a new soup spiciness: ")?)
        } else {
            None
        };

        let update = DishUpdate {
            name,
            price,
            description,
            spiciness,
        };
        let modified = self.client.modify_dish(index, update).await?;
        info!(index, name = %modified.name, "Dish modified");
        self.console.say(format!(
            "Dish '{}' modified successfully.",
            modified.name
        ))?;
        Ok(modified)
    }

    /// Prints every dish with its 0-based number and returns the menu shown.
    pub async fn display_menu(&mut self) -> Result<Vec<Dish>, EditorError> {
        let menu = self.client.menu().await?;
        self.console.say("Current menu:")?;
        if menu.is_empty() {
            self.console.say("(no dishes yet)")?;
        }
        for (index, dish) in menu.iter().enumerate() {
            self.console.say(format!("[{index}] {dish}\n"))?;
        }
        Ok(menu)
    }

    /// Writes the current menu to the menu file.
    pub async fn save(&mut self) -> Result<(), EditorError> {
        let menu = self.client.menu().await?;
        storage::save_menu(&self.menu_path, &menu).await?;
        self.console.say(format!(
            "Menu saved to file: {}",
            self.menu_path.display()
        ))?;
        Ok(())
    }
}
