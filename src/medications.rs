//! Medication roster — view types and operations.
//!
//! The add flow is where interaction detection hooks into CRUD: on
//! submission the full roster plus the candidate goes through the engine,
//! and the names of interacting partners are recorded on the new
//! medication. Whether to go ahead despite interactions is the frontend's
//! call; this layer only reports what it found.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::db::{repository, DatabaseError};
use crate::interactions::catalog::normalized;
use crate::interactions::{find_all_interactions, DrugInteraction, InteractionCatalog};
use crate::models::{LogStatus, Medication, MedicationLog, NewMedication};
use crate::schedule::time::ClockTime;

#[derive(Error, Debug)]
pub enum RosterError {
    /// User-correctable input problem; the message is shown as-is.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// One roster row for the list tab.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationListEntry {
    #[serde(flatten)]
    pub medication: Medication,
    /// Earliest dose time of the day.
    pub next_dose: Option<ClockTime>,
    pub has_interactions: bool,
}

/// Result of a successful add: the stored record plus every interaction
/// the new roster now contains, so the UI can decide whether to warn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMedicationResult {
    pub medication: Medication,
    pub interactions: Vec<DrugInteraction>,
}

/// Fetch the roster with per-row display data.
pub fn list_roster(conn: &Connection) -> Result<Vec<MedicationListEntry>, RosterError> {
    let meds = repository::list_medications(conn)?;
    Ok(meds
        .into_iter()
        .map(|medication| MedicationListEntry {
            next_dose: medication.times.iter().min().copied(),
            has_interactions: !medication.interactions.is_empty(),
            medication,
        })
        .collect())
}

/// Validate the form input, detect interactions against the roster, and
/// store the new medication.
pub fn add_medication(
    conn: &Connection,
    catalog: &InteractionCatalog,
    input: &NewMedication,
    start_date: NaiveDate,
) -> Result<AddMedicationResult, RosterError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(RosterError::Validation(
            "El nombre del medicamento es obligatorio".into(),
        ));
    }
    if name.len() > 200 {
        return Err(RosterError::Validation(
            "El nombre del medicamento es demasiado largo (máximo 200 caracteres)".into(),
        ));
    }
    let dosage = input.dosage.trim();
    if dosage.is_empty() {
        return Err(RosterError::Validation("La dosis es obligatoria".into()));
    }
    if dosage.len() > 100 {
        return Err(RosterError::Validation(
            "La dosis es demasiado larga (máximo 100 caracteres)".into(),
        ));
    }
    let frequency = input.frequency.trim();
    if frequency.len() > 200 {
        return Err(RosterError::Validation(
            "La frecuencia es demasiado larga (máximo 200 caracteres)".into(),
        ));
    }
    if let Some(notes) = &input.notes {
        if notes.len() > 1000 {
            return Err(RosterError::Validation(
                "Las notas son demasiado largas (máximo 1000 caracteres)".into(),
            ));
        }
    }

    // Blank time rows are unfilled form slots; everything else must parse.
    let mut times: Vec<ClockTime> = Vec::new();
    for raw in &input.times {
        if raw.trim().is_empty() {
            continue;
        }
        let time = raw.parse::<ClockTime>().map_err(|_| {
            RosterError::Validation(format!("Horario inválido: {raw} (usa el formato HH:MM)"))
        })?;
        times.push(time);
    }
    if times.is_empty() {
        return Err(RosterError::Validation(
            "Agrega al menos un horario de toma".into(),
        ));
    }

    let existing = repository::list_medications(conn)?;
    let mut names = Vec::with_capacity(existing.len() + 1);
    names.push(name.to_string());
    names.extend(existing.iter().map(|m| m.name.clone()));
    let interactions = find_all_interactions(catalog, &names);

    let medication = Medication {
        id: Uuid::new_v4(),
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        times,
        start_date,
        notes: input
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from),
        interactions: interaction_partners(name, &interactions),
    };

    repository::insert_medication(conn, &medication)?;

    tracing::info!(
        medication_id = %medication.id,
        name = %medication.name,
        interactions = medication.interactions.len(),
        "Medication added"
    );

    Ok(AddMedicationResult {
        medication,
        interactions,
    })
}

/// The names flagged on a new medication: for each detected interaction,
/// the side that is not the candidate, deduplicated in detection order.
fn interaction_partners(candidate: &str, interactions: &[DrugInteraction]) -> Vec<String> {
    let candidate_norm = normalized(candidate);
    let mut partners: Vec<String> = Vec::new();
    for interaction in interactions {
        let other = if normalized(&interaction.drug1) == candidate_norm {
            &interaction.drug2
        } else {
            &interaction.drug1
        };
        if !partners.iter().any(|p| normalized(p) == normalized(other)) {
            partners.push(other.clone());
        }
    }
    partners
}

/// Delete a medication and, through the cascade, its dose logs.
pub fn remove_medication(conn: &Connection, id: &Uuid) -> Result<(), RosterError> {
    if !repository::delete_medication(conn, id)? {
        return Err(RosterError::Database(DatabaseError::NotFound {
            entity_type: "medication".into(),
            id: id.to_string(),
        }));
    }
    tracing::info!(medication_id = %id, "Medication deleted");
    Ok(())
}

/// Record a dose event for an existing medication.
///
/// The log is immutable once written; marking the same dose twice on one
/// day surfaces the UNIQUE violation to the caller.
pub fn record_dose(
    conn: &Connection,
    medication_id: &Uuid,
    scheduled_time: ClockTime,
    status: LogStatus,
    taken_time: Option<ClockTime>,
    date: NaiveDate,
) -> Result<MedicationLog, RosterError> {
    let medication = repository::get_medication(conn, medication_id)?.ok_or_else(|| {
        DatabaseError::NotFound {
            entity_type: "medication".into(),
            id: medication_id.to_string(),
        }
    })?;

    let log = MedicationLog {
        id: Uuid::new_v4(),
        medication_id: medication.id,
        scheduled_time,
        taken_time,
        status,
        date,
    };
    repository::insert_log(conn, &log)?;

    tracing::info!(
        medication_id = %medication.id,
        name = %medication.name,
        time = %scheduled_time,
        status = status.as_str(),
        "Dose recorded"
    );

    Ok(log)
}
