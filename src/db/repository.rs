//! Repository functions for the medication roster and dose logs.
//!
//! All functions take an open connection and return explicit results; the
//! command layer owns opening the database and surfacing errors.

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::models::{LogStatus, Medication, MedicationLog};
use crate::schedule::time::ClockTime;

use super::DatabaseError;

/// Wrap a per-column decode failure in the rusqlite error rows carry.
fn column_err(
    idx: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
}

fn map_medication(row: &Row<'_>) -> rusqlite::Result<Medication> {
    let id: String = row.get(0)?;
    let times_json: String = row.get(4)?;
    let interactions_json: String = row.get(7)?;
    Ok(Medication {
        id: Uuid::parse_str(&id).map_err(|e| column_err(0, e))?,
        name: row.get(1)?,
        dosage: row.get(2)?,
        frequency: row.get(3)?,
        times: serde_json::from_str(&times_json).map_err(|e| column_err(4, e))?,
        start_date: row.get(5)?,
        notes: row.get(6)?,
        interactions: serde_json::from_str(&interactions_json)
            .map_err(|e| column_err(7, e))?,
    })
}

fn map_log(row: &Row<'_>) -> rusqlite::Result<MedicationLog> {
    let id: String = row.get(0)?;
    let medication_id: String = row.get(1)?;
    let scheduled: String = row.get(2)?;
    let taken: Option<String> = row.get(3)?;
    let status: String = row.get(4)?;
    Ok(MedicationLog {
        id: Uuid::parse_str(&id).map_err(|e| column_err(0, e))?,
        medication_id: Uuid::parse_str(&medication_id).map_err(|e| column_err(1, e))?,
        scheduled_time: scheduled.parse::<ClockTime>().map_err(|e| column_err(2, e))?,
        taken_time: taken
            .map(|t| t.parse::<ClockTime>().map_err(|e| column_err(3, e)))
            .transpose()?,
        status: LogStatus::from_str(&status).map_err(|e| column_err(4, e))?,
        date: row.get(5)?,
    })
}

pub fn insert_medication(conn: &Connection, med: &Medication) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO medications (id, name, dosage, frequency, times, start_date, notes, interactions)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            med.id.to_string(),
            med.name,
            med.dosage,
            med.frequency,
            serde_json::to_string(&med.times)?,
            med.start_date,
            med.notes,
            serde_json::to_string(&med.interactions)?,
        ],
    )?;
    Ok(())
}

/// Fetch the roster in the order medications were added.
pub fn list_medications(conn: &Connection) -> Result<Vec<Medication>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, dosage, frequency, times, start_date, notes, interactions
         FROM medications
         ORDER BY rowid ASC",
    )?;
    let meds = stmt
        .query_map([], map_medication)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(meds)
}

pub fn get_medication(
    conn: &Connection,
    id: &Uuid,
) -> Result<Option<Medication>, DatabaseError> {
    let result = conn.query_row(
        "SELECT id, name, dosage, frequency, times, start_date, notes, interactions
         FROM medications
         WHERE id = ?1",
        params![id.to_string()],
        map_medication,
    );
    match result {
        Ok(med) => Ok(Some(med)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::from(e)),
    }
}

/// Delete a medication. Its logs go with it (ON DELETE CASCADE).
/// Returns false if no row matched.
pub fn delete_medication(conn: &Connection, id: &Uuid) -> Result<bool, DatabaseError> {
    let affected = conn.execute(
        "DELETE FROM medications WHERE id = ?1",
        params![id.to_string()],
    )?;
    Ok(affected > 0)
}

/// Insert a dose log. A second log for the same (medication, time, date)
/// violates the UNIQUE constraint and is reported as such.
pub fn insert_log(conn: &Connection, log: &MedicationLog) -> Result<(), DatabaseError> {
    let result = conn.execute(
        "INSERT INTO medication_logs (id, medication_id, scheduled_time, taken_time, status, date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            log.id.to_string(),
            log.medication_id.to_string(),
            log.scheduled_time.to_string(),
            log.taken_time.map(|t| t.to_string()),
            log.status.as_str(),
            log.date,
        ],
    );
    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(DatabaseError::ConstraintViolation(format!(
                "dose log already exists for medication {} at {} on {}",
                log.medication_id, log.scheduled_time, log.date,
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// Fetch all logs for a calendar date, oldest first.
pub fn logs_for_date(
    conn: &Connection,
    date: NaiveDate,
) -> Result<Vec<MedicationLog>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, medication_id, scheduled_time, taken_time, status, date
         FROM medication_logs
         WHERE date = ?1
         ORDER BY rowid ASC",
    )?;
    let logs = stmt
        .query_map(params![date], map_log)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(logs)
}

pub fn log_exists(
    conn: &Connection,
    medication_id: &Uuid,
    scheduled_time: ClockTime,
    date: NaiveDate,
) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM medication_logs
         WHERE medication_id = ?1 AND scheduled_time = ?2 AND date = ?3",
        params![medication_id.to_string(), scheduled_time.to_string(), date],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    fn sample_medication(name: &str, times: &[&str]) -> Medication {
        Medication {
            id: Uuid::new_v4(),
            name: name.into(),
            dosage: "100mg".into(),
            frequency: "Cada 12 horas".into(),
            times: times.iter().map(|t| t.parse().unwrap()).collect(),
            start_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            notes: Some("Con alimentos".into()),
            interactions: vec!["Warfarina".into()],
        }
    }

    fn sample_log(med: &Medication, time: &str, status: LogStatus) -> MedicationLog {
        MedicationLog {
            id: Uuid::new_v4(),
            medication_id: med.id,
            scheduled_time: time.parse().unwrap(),
            taken_time: (status == LogStatus::Taken).then(|| "08:10".parse().unwrap()),
            status,
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        }
    }

    #[test]
    fn medication_round_trips() {
        let conn = open_memory_database().unwrap();
        let med = sample_medication("Aspirina", &["08:00", "20:00"]);
        insert_medication(&conn, &med).unwrap();

        let fetched = get_medication(&conn, &med.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Aspirina");
        assert_eq!(fetched.times.len(), 2);
        assert_eq!(fetched.times[0].to_string(), "08:00");
        assert_eq!(fetched.notes.as_deref(), Some("Con alimentos"));
        assert_eq!(fetched.interactions, vec!["Warfarina".to_string()]);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let conn = open_memory_database().unwrap();
        for name in ["Warfarina", "Aspirina", "Metformina"] {
            insert_medication(&conn, &sample_medication(name, &["08:00"])).unwrap();
        }
        let names: Vec<String> = list_medications(&conn)
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["Warfarina", "Aspirina", "Metformina"]);
    }

    #[test]
    fn get_missing_medication_is_none() {
        let conn = open_memory_database().unwrap();
        assert!(get_medication(&conn, &Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn delete_cascades_to_logs() {
        let conn = open_memory_database().unwrap();
        let med = sample_medication("Aspirina", &["08:00"]);
        insert_medication(&conn, &med).unwrap();
        insert_log(&conn, &sample_log(&med, "08:00", LogStatus::Taken)).unwrap();

        assert!(delete_medication(&conn, &med.id).unwrap());

        let remaining: i64 = conn
            .query_row("SELECT COUNT(*) FROM medication_logs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[test]
    fn delete_missing_medication_returns_false() {
        let conn = open_memory_database().unwrap();
        assert!(!delete_medication(&conn, &Uuid::new_v4()).unwrap());
    }

    #[test]
    fn duplicate_log_is_a_constraint_violation() {
        let conn = open_memory_database().unwrap();
        let med = sample_medication("Aspirina", &["08:00"]);
        insert_medication(&conn, &med).unwrap();

        insert_log(&conn, &sample_log(&med, "08:00", LogStatus::Taken)).unwrap();
        let second = insert_log(&conn, &sample_log(&med, "08:00", LogStatus::Taken));
        assert!(matches!(
            second,
            Err(DatabaseError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn logs_for_date_filters_by_date() {
        let conn = open_memory_database().unwrap();
        let med = sample_medication("Aspirina", &["08:00", "20:00"]);
        insert_medication(&conn, &med).unwrap();

        insert_log(&conn, &sample_log(&med, "08:00", LogStatus::Taken)).unwrap();
        let mut other_day = sample_log(&med, "20:00", LogStatus::Skipped);
        other_day.date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        insert_log(&conn, &other_day).unwrap();

        let today = logs_for_date(&conn, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()).unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].status, LogStatus::Taken);
        assert_eq!(today[0].scheduled_time.to_string(), "08:00");
    }

    #[test]
    fn log_exists_matches_exact_tuple() {
        let conn = open_memory_database().unwrap();
        let med = sample_medication("Aspirina", &["08:00"]);
        insert_medication(&conn, &med).unwrap();
        insert_log(&conn, &sample_log(&med, "08:00", LogStatus::Taken)).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert!(log_exists(&conn, &med.id, "08:00".parse().unwrap(), date).unwrap());
        assert!(!log_exists(&conn, &med.id, "20:00".parse().unwrap(), date).unwrap());
    }
}
