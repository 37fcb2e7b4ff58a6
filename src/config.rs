use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Pastillero";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,pastillero_lib=debug"
}

/// Get the application data directory
/// ~/Pastillero/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Pastillero")
}

/// Path of the single-user database file.
pub fn database_path() -> PathBuf {
    app_data_dir().join("pastillero.db")
}
