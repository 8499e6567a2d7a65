//! # Dish Actor
//!
//! The resource actor that holds the editor's menu: an ordered list of [`Dish`] entries
//! addressed by their 0-based position.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Dish`]
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client, seeded with a loaded menu
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_menu::clients::MenuClient;
//! use restaurant_menu::dish_actor;
//! use restaurant_menu::model::{DishCreate, DishKind};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = dish_actor::new(Vec::new());
//!     let client = MenuClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let index = client
//!         .add_dish(DishCreate {
//!             name: "Tomato".to_string(),
//!             price: 12.5,
//!             description: "Creamy".to_string(),
//!             kind: DishKind::Soup { spiciness: "mild".to_string() },
//!         })
//!         .await?;
//!     assert_eq!(index, 0);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Dish;

/// Creates a new Dish actor holding `menu`, and its client.
pub fn new(menu: Vec<Dish>) -> (ResourceActor<Dish>, ResourceClient<Dish>) {
    ResourceActor::with_entries(32, menu)
}
