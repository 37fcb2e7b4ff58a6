use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::LogStatus;
use crate::schedule::time::ClockTime;

/// A medication in the user's roster.
///
/// Never mutated in place: edits replace the record wholesale, and deleting
/// it cascades to its dose logs. Field names on the wire are camelCase to
/// match what the frontend stores and renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// Dose times in the order the user entered them. Always non-empty.
    pub times: Vec<ClockTime>,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
    /// Names of roster medications this one was flagged against at creation.
    pub interactions: Vec<String>,
}

/// One dose event: created when the user marks a scheduled dose, never
/// mutated afterwards. At most one log per (medication, time, date).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationLog {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub scheduled_time: ClockTime,
    pub taken_time: Option<ClockTime>,
    pub status: LogStatus,
    pub date: NaiveDate,
}

/// Input shape of the add-medication form. Times arrive as raw strings;
/// validation happens in the command before a `Medication` is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
    pub times: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medication_wire_shape_is_camel_case() {
        let med = Medication {
            id: Uuid::nil(),
            name: "Aspirina".into(),
            dosage: "100mg".into(),
            frequency: "Cada 24 horas".into(),
            times: vec!["08:00".parse().unwrap()],
            start_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            notes: None,
            interactions: vec!["Warfarina".into()],
        };
        let json = serde_json::to_value(&med).unwrap();
        assert_eq!(json["startDate"], "2026-08-01");
        assert_eq!(json["times"][0], "08:00");
        assert_eq!(json["interactions"][0], "Warfarina");
    }

    #[test]
    fn log_wire_shape_is_camel_case() {
        let log = MedicationLog {
            id: Uuid::nil(),
            medication_id: Uuid::nil(),
            scheduled_time: "08:00".parse().unwrap(),
            taken_time: Some("08:10".parse().unwrap()),
            status: LogStatus::Taken,
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        };
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["medicationId"], Uuid::nil().to_string());
        assert_eq!(json["scheduledTime"], "08:00");
        assert_eq!(json["takenTime"], "08:10");
        assert_eq!(json["status"], "taken");
    }

    #[test]
    fn new_medication_deserializes_with_defaults() {
        let input: NewMedication = serde_json::from_str(
            r#"{"name":"Aspirina","dosage":"100mg","times":["08:00",""]}"#,
        )
        .unwrap();
        assert_eq!(input.frequency, "");
        assert!(input.notes.is_none());
        assert_eq!(input.times.len(), 2);
    }
}
