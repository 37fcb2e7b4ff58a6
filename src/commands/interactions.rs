//! Interaction checking — Tauri IPC commands.

use tauri::State;

use crate::db::repository;
use crate::db::sqlite::open_database;
use crate::interactions::{
    check_schedule_conflicts, find_all_interactions, suggest_adjusted_time, ConflictWarning,
    DrugInteraction, MIN_GAP_MINUTES,
};
use crate::schedule::time::ClockTime;

use super::state::AppState;

/// Every known interaction across the stored roster, for the alert banner
/// and the interactions tab.
#[tauri::command]
pub fn check_interactions(
    state: State<'_, AppState>,
) -> Result<Vec<DrugInteraction>, String> {
    let conn = open_database(&state.db_path).map_err(|e| e.to_string())?;
    let meds = repository::list_medications(&conn).map_err(|e| e.to_string())?;
    let names: Vec<String> = meds.into_iter().map(|m| m.name).collect();
    Ok(find_all_interactions(&state.catalog, &names))
}

/// Live dose-timing warnings while the user fills in the add form.
#[tauri::command]
pub fn schedule_conflicts(
    candidate_name: String,
    candidate_times: Vec<String>,
    state: State<'_, AppState>,
) -> Result<Vec<ConflictWarning>, String> {
    let conn = open_database(&state.db_path).map_err(|e| e.to_string())?;
    let existing = repository::list_medications(&conn).map_err(|e| e.to_string())?;
    check_schedule_conflicts(&state.catalog, &candidate_name, &candidate_times, &existing)
        .map_err(|e| format!("Horario inválido: {e}"))
}

/// Suggest a dose time at least two hours from `anchor`.
#[tauri::command]
pub fn suggest_time(anchor: String, candidate: String) -> Result<String, String> {
    let anchor: ClockTime = anchor
        .parse()
        .map_err(|_| format!("Horario inválido: {anchor}"))?;
    let candidate: ClockTime = candidate
        .parse()
        .map_err(|_| format!("Horario inválido: {candidate}"))?;
    Ok(suggest_adjusted_time(anchor, candidate, MIN_GAP_MINUTES).to_string())
}
