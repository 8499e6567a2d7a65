//! # System Lifecycle
//!
//! Starting and stopping the pieces both programs share.
//!
//! - [`MenuSystem`] spawns the Dish actor with the loaded menu and shuts it down.
//! - [`setup_tracing`] installs the log subscriber; call it once at the top of `main`.
//!
//! The binaries run on a `current_thread` runtime: the console loop and the Dish actor
//! take turns on one thread, and the actor only runs while the loop awaits a reply.

pub mod menu_system;
pub mod tracing;

pub use self::menu_system::*;
pub use self::tracing::*;
