//! Menu dishes and the record format they are saved in.

use crate::dish_actor::DishError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Currency suffix used wherever a price is shown.
pub const CURRENCY: &str = "zł";

/// Formats a price the way every screen shows it.
pub fn format_price(price: f64) -> String {
    format!("{price:.2} {CURRENCY}")
}

/// The three menu sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Soup,
    MainDish,
    Dessert,
}

impl Category {
    /// The name stored in the menu file and shown to the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Soup => "Soup",
            Category::MainDish => "Main Dish",
            Category::Dessert => "Dessert",
        }
    }

    /// Maps the editor's category selector: 1 Soup, 2 Main Dish, 3 Dessert.
    pub fn from_selector(selector: i64) -> Result<Self, DishError> {
        match selector {
            1 => Ok(Category::Soup),
            2 => Ok(Category::MainDish),
            3 => Ok(Category::Dessert),
            other => Err(DishError::UnknownCategory(other.to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Soup" => Ok(Category::Soup),
            "Main Dish" => Ok(Category::MainDish),
            "Dessert" => Ok(Category::Dessert),
            other => Err(DishError::UnknownCategory(other.to_string())),
        }
    }
}

/// Variant-specific part of a dish. Only soups carry extra data.
#[derive(Debug, Clone, PartialEq)]
pub enum DishKind {
    Soup { spiciness: String },
    MainDish,
    Dessert,
}

impl DishKind {
    pub fn category(&self) -> Category {
        match self {
            DishKind::Soup { .. } => Category::Soup,
            DishKind::MainDish => Category::MainDish,
            DishKind::Dessert => Category::Dessert,
        }
    }
}

/// A single entry on the restaurant menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be kept in a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for details on:
/// - Creation parameters ([`DishCreate`])
/// - Update parameters ([`DishUpdate`])
///
/// # Menu File
/// On disk a dish is a [`DishRecord`]. Deserialization goes through `TryFrom<DishRecord>`,
/// so a file can never produce a dish with a negative price or an unknown category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DishRecord", into = "DishRecord")]
pub struct Dish {
    pub name: String,
    price: f64,
    pub description: String,
    pub kind: DishKind,
}

fn validate_price(price: f64) -> Result<f64, DishError> {
    if price.is_nan() || price < 0.0 {
        return Err(DishError::InvalidPrice(price));
    }
    Ok(price)
}

impl Dish {
    /// Creates a dish, rejecting a negative price.
    ///
    /// # Arguments
    /// * `name` - Dish name as shown on the menu
    /// * `price` - Unit price, must be `>= 0`
    /// * `description` - Free text shown on request
    /// * `kind` - Variant, carrying spiciness for soups
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        kind: DishKind,
    ) -> Result<Self, DishError> {
        Ok(Self {
            name: name.into(),
            price: validate_price(price)?,
            description: description.into(),
            kind,
        })
    }

    pub fn soup(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        spiciness: impl Into<String>,
    ) -> Result<Self, DishError> {
        let spiciness = spiciness.into();
        Self::new(name, price, description, DishKind::Soup { spiciness })
    }

    pub fn main_dish(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Result<Self, DishError> {
        Self::new(name, price, description, DishKind::MainDish)
    }

    pub fn dessert(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Result<Self, DishError> {
        Self::new(name, price, description, DishKind::Dessert)
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Replaces the price; a negative value leaves the dish unchanged.
    pub fn set_price(&mut self, price: f64) -> Result<(), DishError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn is_soup(&self) -> bool {
        matches!(self.kind, DishKind::Soup { .. })
    }

    pub fn spiciness(&self) -> Option<&str> {
        match &self.kind {
            DishKind::Soup { spiciness } => Some(spiciness),
            _ => None,
        }
    }

    pub fn set_spiciness(&mut self, value: impl Into<String>) -> Result<(), DishError> {
        match &mut self.kind {
            DishKind::Soup { spiciness } => {
                *spiciness = value.into();
                Ok(())
            }
            _ => Err(DishError::SpicinessNotApplicable(self.name.clone())),
        }
    }

    // Shared by every variant; never mentions spiciness.
    fn base_display(&self) -> String {
        format!(
            "{}: {}\nDescription: {}\nCategory: {}",
            self.name,
            format_price(self.price),
            self.description,
            self.category()
        )
    }

    /// Multi-line description of the dish: the base block wrapped by its variant.
    pub fn display(&self) -> String {
        let base = self.base_display();
        match &self.kind {
            DishKind::Soup { spiciness } => format!("Soup: {base}\nSpiciness: {spiciness}"),
            DishKind::MainDish => format!("Main Dish: {base}"),
            DishKind::Dessert => format!("Dessert: {base}"),
        }
    }
}

impl Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// One record of the menu file.
///
/// Field names are the contract between the editor and the order taker.
/// `spiciness` is `null` for non-soups and may be missing altogether.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub spiciness: Option<String>,
}

impl TryFrom<DishRecord> for Dish {
    type Error = DishError;

    fn try_from(record: DishRecord) -> Result<Self, Self::Error> {
        let kind = match record.category.parse::<Category>()? {
            Category::Soup => DishKind::Soup {
                spiciness: record.spiciness.unwrap_or_default(),
            },
            Category::MainDish => DishKind::MainDish,
            Category::Dessert => DishKind::Dessert,
        };
        Dish::new(record.name, record.price, record.description, kind)
    }
}

impl From<Dish> for DishRecord {
    fn from(dish: Dish) -> Self {
        let category = dish.category().as_str().to_string();
        let spiciness = match dish.kind {
            DishKind::Soup { spiciness } => Some(spiciness),
            DishKind::MainDish | DishKind::Dessert => None,
        };
        Self {
            name: dish.name,
            category,
            price: dish.price,
            description: dish.description,
            spiciness,
        }
    }
}

/// Payload for adding a dish to the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct DishCreate {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub kind: DishKind,
}

/// Payload for modifying a dish.
///
/// Name, price and description are always replaced. `spiciness` must be `None`
/// unless the dish is a soup.
#[derive(Debug, Clone, PartialEq)]
pub struct DishUpdate {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub spiciness: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_price_is_rejected_by_every_constructor() {
        assert_eq!(
            Dish::soup("Tomato", -0.01, "desc", "mild"),
            Err(DishError::InvalidPrice(-0.01))
        );
        assert!(Dish::main_dish("Steak", -45.0, "desc").is_err());
        assert!(Dish::dessert("Cake", -1.0, "desc").is_err());
        assert!(Dish::main_dish("Steak", f64::NAN, "desc").is_err());
    }

    #[test]
    fn test_zero_and_positive_prices_are_accepted() {
        assert_eq!(Dish::dessert("Water ice", 0.0, "free").unwrap().price(), 0.0);
        assert_eq!(Dish::main_dish("Steak", 45.0, "desc").unwrap().price(), 45.0);
    }

    #[test]
    fn test_set_price_rejects_negative_and_keeps_old_value() {
        let mut dish = Dish::main_dish("Steak", 45.0, "desc").unwrap();
        assert_eq!(dish.set_price(-3.0), Err(DishError::InvalidPrice(-3.0)));
        assert_eq!(dish.price(), 45.0);

        dish.set_price(50.5).unwrap();
        assert_eq!(dish.price(), 50.5);
    }

    #[test]
    fn test_soup_display_wraps_base_and_adds_spiciness() {
        let soup = Dish::soup("Tomato", 12.5, "Creamy", "mild").unwrap();
        assert_eq!(
            soup.display(),
            "Soup: Tomato: 12.50 zł\nDescription: Creamy\nCategory: Soup\nSpiciness: mild"
        );
        assert_eq!(soup.to_string(), soup.display());
    }

    #[test]
    fn test_non_soup_display_never_mentions_spiciness() {
        let steak = Dish::main_dish("Steak", 45.0, "Rare").unwrap();
        let cake = Dish::dessert("Cake", 9.99, "Chocolate").unwrap();

        assert_eq!(
            steak.display(),
            "Main Dish: Steak: 45.00 zł\nDescription: Rare\nCategory: Main Dish"
        );
        assert!(cake.display().starts_with("Dessert: Cake: 9.99 zł"));
        assert!(!steak.display().to_lowercase().contains("spiciness"));
        assert!(!cake.display().to_lowercase().contains("spiciness"));
    }

    #[test]
    fn test_spiciness_only_settable_on_soups() {
        let mut soup = Dish::soup("Tomato", 12.5, "desc", "mild").unwrap();
        soup.set_spiciness("hot").unwrap();
        assert_eq!(soup.spiciness(), Some("hot"));

        let mut steak = Dish::main_dish("Steak", 45.0, "desc").unwrap();
        assert!(matches!(
            steak.set_spiciness("hot"),
            Err(DishError::SpicinessNotApplicable(_))
        ));
        assert_eq!(steak.spiciness(), None);
    }

    #[test]
    fn test_category_selector_and_names() {
        assert_eq!(Category::from_selector(1), Ok(Category::Soup));
        assert_eq!(Category::from_selector(2), Ok(Category::MainDish));
        assert_eq!(Category::from_selector(3), Ok(Category::Dessert));
        assert!(Category::from_selector(4).is_err());
        assert_eq!("Main Dish".parse::<Category>(), Ok(Category::MainDish));
        assert!("Appetizer".parse::<Category>().is_err());
    }

    #[test]
    fn test_record_without_spiciness_field_loads() {
        let json = r#"{"name":"Steak","category":"Main Dish","price":45.0,"description":"Rare"}"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish, Dish::main_dish("Steak", 45.0, "Rare").unwrap());
    }

    #[test]
    fn test_record_with_negative_price_is_rejected() {
        let json = r#"{"name":"Steak","category":"Main Dish","price":-1.0,"description":"","spiciness":null}"#;
        assert!(serde_json::from_str::<Dish>(json).is_err());
    }

    #[test]
    fn test_non_soup_serializes_null_spiciness() {
        let cake = Dish::dessert("Cake", 9.99, "Chocolate").unwrap();
        let value = serde_json::to_value(&cake).unwrap();
        assert_eq!(value["category"], "Dessert");
        assert!(value["spiciness"].is_null());
    }
}
