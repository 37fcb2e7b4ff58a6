//! Medication roster — Tauri IPC commands.

use chrono::Local;
use tauri::State;
use uuid::Uuid;

use crate::db::sqlite::open_database;
use crate::medications::{
    add_medication as add_to_roster, list_roster, remove_medication, AddMedicationResult,
    MedicationListEntry,
};
use crate::models::NewMedication;

use super::state::AppState;

/// Fetches the roster for the list tab.
#[tauri::command]
pub fn list_medications(
    state: State<'_, AppState>,
) -> Result<Vec<MedicationListEntry>, String> {
    let conn = open_database(&state.db_path).map_err(|e| e.to_string())?;
    list_roster(&conn).map_err(|e| e.to_string())
}

/// Validates and stores a new medication; returns it together with every
/// interaction detected across the updated roster. The frontend decides
/// whether to ask the user for confirmation.
#[tauri::command]
pub fn add_medication(
    input: NewMedication,
    state: State<'_, AppState>,
) -> Result<AddMedicationResult, String> {
    let conn = open_database(&state.db_path).map_err(|e| e.to_string())?;
    let today = Local::now().date_naive();
    add_to_roster(&conn, &state.catalog, &input, today).map_err(|e| e.to_string())
}

/// Deletes a medication and its dose logs.
#[tauri::command]
pub fn delete_medication(
    medication_id: String,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let id = Uuid::parse_str(&medication_id)
        .map_err(|e| format!("Invalid medication ID: {e}"))?;
    let conn = open_database(&state.db_path).map_err(|e| e.to_string())?;
    remove_medication(&conn, &id).map_err(|e| e.to_string())
}
