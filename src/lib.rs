pub mod commands;
pub mod config;
pub mod db;
pub mod interactions;
pub mod medications;
pub mod models;
pub mod schedule;

use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Pastillero starting v{}", config::APP_VERSION);

    std::fs::create_dir_all(config::app_data_dir())
        .expect("cannot create application data directory");

    let catalog = interactions::InteractionCatalog::load_bundled()
        .expect("bundled interaction catalog is invalid");
    tracing::info!(entries = catalog.len(), "Interaction catalog loaded");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(commands::state::AppState::new(catalog))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::medications::list_medications,
            commands::medications::add_medication,
            commands::medications::delete_medication,
            commands::interactions::check_interactions,
            commands::interactions::schedule_conflicts,
            commands::interactions::suggest_time,
            commands::schedule::todays_schedule,
            commands::schedule::mark_dose_taken,
            commands::schedule::mark_dose_skipped,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Pastillero");
}
