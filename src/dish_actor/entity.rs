//! ActorEntity trait implementation for the Dish domain type.
//!
//! Creation and update both validate before anything is stored, so a rejected request
//! never leaves a half-modified dish behind.

use super::DishError;
use crate::framework::ActorEntity;
use crate::model::{Dish, DishCreate, DishUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Dish {
    type Create = DishCreate;
    type Update = DishUpdate;
    type Error = DishError;

    /// Creates a new Dish from creation parameters, rejecting a negative price.
    fn from_create_params(params: DishCreate) -> Result<Self, DishError> {
        Dish::new(params.name, params.price, params.description, params.kind)
    }

    /// Replaces name, price and description, and spiciness for soups.
    ///
    /// The update is checked as a whole first: a negative price, or a spiciness
    /// sent to a non-soup, leaves every field untouched.
    async fn on_update(&mut self, update: DishUpdate) -> Result<(), DishError> {
        let mut next = self.clone();
        next.set_price(update.price)?;
        if let Some(spiciness) = update.spiciness {
            next.set_spiciness(spiciness)?;
        }
        next.name = update.name;
        next.description = update.description;
        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DishKind;

    fn update(price: f64, spiciness: Option<&str>) -> DishUpdate {
        DishUpdate {
            name: "Renamed".to_string(),
            price,
            description: "New description".to_string(),
            spiciness: spiciness.map(str::to_string),
        }
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let params = DishCreate {
            name: "Steak".to_string(),
            price: -5.0,
            description: "desc".to_string(),
            kind: DishKind::MainDish,
        };
        assert_eq!(
            Dish::from_create_params(params),
            Err(DishError::InvalidPrice(-5.0))
        );
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_of_a_soup() {
        let mut soup = Dish::soup("Tomato", 12.5, "desc", "mild").unwrap();
        soup.on_update(update(14.0, Some("hot"))).await.unwrap();

        assert_eq!(soup, Dish::soup("Renamed", 14.0, "New description", "hot").unwrap());
    }

    #[tokio::test]
    async fn test_failed_update_leaves_dish_unchanged() {
        let original = Dish::soup("Tomato", 12.5, "desc", "mild").unwrap();
        let mut soup = original.clone();

        let result = soup.on_update(update(-1.0, Some("hot"))).await;

        assert_eq!(result, Err(DishError::InvalidPrice(-1.0)));
        assert_eq!(soup, original);
    }

    #[tokio::test]
    async fn test_spiciness_update_rejected_for_main_dish() {
        let original = Dish::main_dish("Steak", 45.0, "desc").unwrap();
        let mut steak = original.clone();

        let result = steak.on_update(update(50.0, Some("hot"))).await;

        assert!(matches!(result, Err(DishError::SpicinessNotApplicable(_))));
        assert_eq!(steak, original);
    }
}
