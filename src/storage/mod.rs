//! # Menu File Storage
//!
//! The menu file is a pretty-printed JSON array of [`DishRecord`](crate::model::DishRecord)s.
//! It is the only thing the editor and the order taker share.
//!
//! Two loaders are offered:
//!
//! - [`try_load_menu`] tells a missing file, an unreadable file and a corrupt file apart.
//! - [`load_menu`] never fails: every problem is logged and the menu starts empty.
//!   Both binaries use this one, so a corrupt file is treated like a missing one.

pub mod error;

pub use error::*;

use crate::model::Dish;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Reads and parses the menu file.
pub async fn try_load_menu(path: &Path) -> Result<Vec<Dish>, StorageError> {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StorageError::Missing(path.to_path_buf()))
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&json).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the menu, falling back to an empty one on any failure.
pub async fn load_menu(path: &Path) -> Vec<Dish> {
    match try_load_menu(path).await {
        Ok(menu) => {
            info!(path = %path.display(), size = menu.len(), "Menu loaded");
            menu
        }
        Err(StorageError::Missing(_)) => {
            info!(path = %path.display(), "Menu file not found, starting with an empty menu");
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, "Failed to load menu, starting with an empty menu");
            Vec::new()
        }
    }
}

/// Writes the whole menu to `path`, replacing its previous content.
pub async fn save_menu(path: &Path, menu: &[Dish]) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(menu)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), size = menu.len(), "Menu saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");

        assert!(matches!(
            try_load_menu(&path).await,
            Err(StorageError::Missing(_))
        ));
        assert!(load_menu(&path).await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_as_empty_menu() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        tokio::fs::write(&path, "[{\"name\": \"Steak\",").await.unwrap();

        assert!(matches!(
            try_load_menu(&path).await,
            Err(StorageError::Parse { .. })
        ));
        assert!(load_menu(&path).await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_makes_file_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        let json = r#"[{"name":"Bruschetta","category":"Appetizer","price":9.0,"description":"","spiciness":null}]"#;
        tokio::fs::write(&path, json).await.unwrap();

        assert!(matches!(
            try_load_menu(&path).await,
            Err(StorageError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_saved_file_uses_record_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        let menu = vec![Dish::soup("Tomato", 12.5, "Creamy", "mild").unwrap()];

        save_menu(&path, &menu).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{
                "name": "Tomato",
                "category": "Soup",
                "price": 12.5,
                "description": "Creamy",
                "spiciness": "mild"
            }])
        );
    }
}
