//! # Order Taker
//!
//! Loads the menu file saved by the editor and takes one order from the console.

use clap::Parser;
use restaurant_menu::config::Config;
use restaurant_menu::console::Console;
use restaurant_menu::lifecycle::setup_tracing;
use restaurant_menu::ordering::OrderTaker;
use restaurant_menu::storage;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = Config::parse();

    info!(path = %config.menu.display(), "Starting order taker");
    let menu = storage::load_menu(&config.menu).await;

    let mut taker = OrderTaker::new(menu, Console::terminal()?);
    taker.run()?;

    info!("Order taker finished");
    Ok(())
}
