//! Orders placed against a loaded menu.
//!
//! An [`Order`] is built in memory during one ordering session and is never saved.

use crate::model::dish::{format_price, Dish};
use std::fmt::{self, Display};

const SEPARATOR: &str = "---------------------------------------------------------------";

/// One aggregated line of an order.
///
/// `unit_price` is copied from the dish when the line is first created and is
/// never read from the menu again.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    fn line_text(&self) -> String {
        format!(
            "{} - Quantity: {} - Price: {}",
            self.name,
            self.quantity,
            format_price(self.unit_price)
        )
    }
}

/// The lines of a single ordering session, keyed by dish name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one portion of `dish` and returns the affected line.
    ///
    /// A dish already on the order bumps its line's quantity; its unit price stays
    /// the one captured on first selection.
    pub fn add(&mut self, dish: &Dish) -> &OrderItem {
        let position = match self.items.iter().position(|item| item.name == dish.name) {
            Some(position) => {
                self.items[position].quantity += 1;
                position
            }
            None => {
                self.items.push(OrderItem {
                    name: dish.name.clone(),
                    quantity: 1,
                    unit_price: dish.price(),
                });
                self.items.len() - 1
            }
        };
        &self.items[position]
    }

    /// Sum of quantity times unit price over every line.
    ///
    /// Prices are binary floats, so the sum can drift in the last bits (0.1 + 0.2 is
    /// not 0.3). It is only rounded when shown through [`format_price`]; compare
    /// totals with a tolerance, or move prices to integer grosze, before doing
    /// arithmetic on the result.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    fn body(&self) -> String {
        let mut body = String::from("CURRENT ORDER:\n");
        for item in &self.items {
            body.push_str(&item.line_text());
            body.push('\n');
        }
        body.push_str(&format!("Total Price: {}\n", format_price(self.total())));
        body
    }

    /// Bordered block printed after every addition.
    pub fn render_current(&self) -> String {
        format!("{SEPARATOR}\n{}{SEPARATOR}", self.body())
    }

    /// Final summary printed when ordering is finished.
    pub fn summary(&self) -> String {
        self.body()
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
