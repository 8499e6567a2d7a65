//! Domain-specific clients wrapping the generic [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod menu_client;

pub use actor_client::ActorClient;
pub use menu_client::MenuClient;
