//! # Menu Editor
//!
//! Loads the menu file (or starts empty), runs the interactive editor, and saves on exit.

use clap::Parser;
use restaurant_menu::config::Config;
use restaurant_menu::console::Console;
use restaurant_menu::editor::MenuEditor;
use restaurant_menu::lifecycle::{setup_tracing, MenuSystem};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = Config::parse();

    info!(path = %config.menu.display(), "Starting menu editor");
    let system = MenuSystem::load(&config.menu).await;

    {
        let mut editor = MenuEditor::new(
            system.menu_client.clone(),
            Console::terminal()?,
            config.menu.clone(),
        );
        editor.run().await?;
    }

    system.shutdown().await?;
    info!("Menu editor finished");
    Ok(())
}
