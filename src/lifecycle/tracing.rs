//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber used by both binaries.
//!
//! ## Configuration
//!
//! - **Level** comes from `RUST_LOG`; without it only warnings and errors are shown.
//! - **Output** goes to stderr, so log lines never land in the middle of a prompt on stdout.
//! - **Format** is compact and hides the module path (`with_target(false)`).
//!
//! ## Usage Examples
//!
//! ```bash
//! # Show every menu change the Dish actor applies
//! RUST_LOG=info cargo run --bin menu-editor
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run --bin menu-editor
//!
//! # Only the storage layer
//! RUST_LOG=restaurant_menu::storage=debug cargo run --bin order-taker
//! ```
//!
//! With `RUST_LOG=info`, adding a dish and saving shows:
//!
//! ```text
//! INFO Actor started entity_type="Dish" size=2
//! INFO Created entity_type="Dish" index=2 size=3
//! INFO Dish added index=2 name=Tomato
//! INFO Menu saved path=menu.json size=3
//! ```

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
