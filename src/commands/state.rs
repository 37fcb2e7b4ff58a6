use std::path::PathBuf;

use crate::config;
use crate::interactions::InteractionCatalog;

/// Global application state managed by Tauri: where the database lives and
/// the interaction catalog loaded once at startup. Everything else is read
/// per command from the database.
pub struct AppState {
    pub db_path: PathBuf,
    pub catalog: InteractionCatalog,
}

impl AppState {
    pub fn new(catalog: InteractionCatalog) -> Self {
        Self {
            db_path: config::database_path(),
            catalog,
        }
    }
}
