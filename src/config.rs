//! Command-line configuration shared by both programs.

use clap::Parser;
use std::path::PathBuf;

/// Default location of the menu file, relative to the working directory.
pub const DEFAULT_MENU_PATH: &str = "menu.json";

#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Path of the menu file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MENU_PATH)]
    pub menu: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_path_defaults_to_menu_json() {
        let config = Config::parse_from(["menu-editor"]);
        assert_eq!(config.menu, PathBuf::from("menu.json"));
    }

    #[test]
    fn test_menu_path_can_be_overridden() {
        let config = Config::parse_from(["order-taker", "--menu", "/srv/restaurant/menu.json"]);
        assert_eq!(config.menu, PathBuf::from("/srv/restaurant/menu.json"));
    }
}
