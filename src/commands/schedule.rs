//! Daily schedule — Tauri IPC commands.
//!
//! The only place the wall clock is read; the schedule core takes the date
//! and time as parameters.

use chrono::{Local, Timelike};
use serde::Serialize;
use tauri::State;
use uuid::Uuid;

use crate::db::repository;
use crate::db::sqlite::open_database;
use crate::medications::record_dose;
use crate::models::{LogStatus, MedicationLog};
use crate::schedule::{build_daily_schedule, count_statuses, DoseCounts, ScheduledDose};
use crate::schedule::time::ClockTime;

use super::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyScheduleData {
    pub doses: Vec<ScheduledDose>,
    pub counts: DoseCounts,
}

fn now_clock() -> ClockTime {
    let now = Local::now();
    // Hour and minute from chrono are always in range.
    ClockTime::from_hm(now.hour() as u8, now.minute() as u8)
        .unwrap_or_else(|| ClockTime::from_minutes_wrapping(0))
}

/// Today's dose list with header counts.
#[tauri::command]
pub fn todays_schedule(state: State<'_, AppState>) -> Result<DailyScheduleData, String> {
    let conn = open_database(&state.db_path).map_err(|e| e.to_string())?;
    let today = Local::now().date_naive();

    let medications = repository::list_medications(&conn).map_err(|e| e.to_string())?;
    let logs = repository::logs_for_date(&conn, today).map_err(|e| e.to_string())?;

    let doses = build_daily_schedule(&medications, &logs, today, now_clock());
    let counts = count_statuses(&doses);

    Ok(DailyScheduleData { doses, counts })
}

/// Marks a scheduled dose as taken now.
#[tauri::command]
pub fn mark_dose_taken(
    medication_id: String,
    time: String,
    state: State<'_, AppState>,
) -> Result<MedicationLog, String> {
    let id = Uuid::parse_str(&medication_id)
        .map_err(|e| format!("Invalid medication ID: {e}"))?;
    let scheduled: ClockTime = time
        .parse()
        .map_err(|_| format!("Horario inválido: {time}"))?;

    let conn = open_database(&state.db_path).map_err(|e| e.to_string())?;
    record_dose(
        &conn,
        &id,
        scheduled,
        LogStatus::Taken,
        Some(now_clock()),
        Local::now().date_naive(),
    )
    .map_err(|e| e.to_string())
}

/// Marks a scheduled dose as deliberately skipped.
#[tauri::command]
pub fn mark_dose_skipped(
    medication_id: String,
    time: String,
    state: State<'_, AppState>,
) -> Result<MedicationLog, String> {
    let id = Uuid::parse_str(&medication_id)
        .map_err(|e| format!("Invalid medication ID: {e}"))?;
    let scheduled: ClockTime = time
        .parse()
        .map_err(|_| format!("Horario inválido: {time}"))?;

    let conn = open_database(&state.db_path).map_err(|e| e.to_string())?;
    record_dose(
        &conn,
        &id,
        scheduled,
        LogStatus::Skipped,
        None,
        Local::now().date_naive(),
    )
    .map_err(|e| e.to_string())
}
