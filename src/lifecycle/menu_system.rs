use crate::clients::MenuClient;
use crate::dish_actor;
use crate::model::Dish;
use crate::storage;
use std::path::Path;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Runtime orchestrator for the Menu Editor.
///
/// `MenuSystem` owns the Dish actor task and hands out [`MenuClient`]s to talk to it.
///
/// # Shutdown
///
/// The actor stops once every client is dropped. Drop any clones handed out (for
/// example the one inside a `MenuEditor`) before calling [`MenuSystem::shutdown`],
/// otherwise it waits forever.
///
/// ```ignore
/// let system = MenuSystem::load(Path::new("menu.json")).await;
/// {
///     let mut editor = MenuEditor::new(system.menu_client.clone(), Console::terminal()?, "menu.json");
///     editor.run().await?;
/// }
/// system.shutdown().await?;
/// ```
pub struct MenuSystem {
    /// Client for the Dish actor.
    pub menu_client: MenuClient,

    handle: JoinHandle<()>,
}

impl MenuSystem {
    /// Spawns the Dish actor seeded with `menu`.
    pub fn start(menu: Vec<Dish>) -> Self {
        info!(size = menu.len(), "Starting menu system");
        let (actor, client) = dish_actor::new(menu);
        let handle = tokio::spawn(actor.run());
        Self {
            menu_client: MenuClient::new(client),
            handle,
        }
    }

    /// Loads the menu file leniently (a missing or corrupt file gives an empty menu) and starts.
    pub async fn load(path: &Path) -> Self {
        Self::start(storage::load_menu(path).await)
    }

    /// Drops the system's client and waits for the actor task to finish.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down menu system...");
        drop(self.menu_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e);
        }

        info!("Menu system shutdown complete.");
        Ok(())
    }
}
