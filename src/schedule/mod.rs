//! Daily dose schedule derivation.
//!
//! Turns the roster plus today's logs into the "Hoy" tab: one row per
//! (medication, dose time), with a status derived from the logs and the
//! current clock. The clock and date are injected so callers and tests
//! control them.

pub mod time;

pub use time::{ClockTime, TimeParseError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{LogStatus, Medication, MedicationLog};

/// Minutes after the scheduled time before an untaken dose counts as
/// overdue.
pub const GRACE_PERIOD_MINUTES: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseStatus {
    Pending,
    Taken,
    Overdue,
}

/// One row of today's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledDose {
    pub medication_id: Uuid,
    pub medication_name: String,
    pub dosage: String,
    pub time: ClockTime,
    pub status: DoseStatus,
    /// Whether this medication was flagged against another roster drug;
    /// the UI highlights such doses.
    pub has_interaction: bool,
}

/// Header counters for the schedule view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseCounts {
    pub taken: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Build the day's dose list, sorted by scheduled time.
///
/// A dose is `taken` if a taken-log exists for its (medication, time) on
/// `today`; otherwise `overdue` once `now` is more than the grace period
/// past the scheduled time; otherwise `pending`. The sort is stable, so
/// doses sharing a time keep roster order.
pub fn build_daily_schedule(
    medications: &[Medication],
    logs: &[MedicationLog],
    today: NaiveDate,
    now: ClockTime,
) -> Vec<ScheduledDose> {
    let mut schedule = Vec::new();

    for med in medications {
        for &dose_time in &med.times {
            let taken = logs.iter().any(|log| {
                log.medication_id == med.id
                    && log.scheduled_time == dose_time
                    && log.date == today
                    && log.status == LogStatus::Taken
            });

            let status = if taken {
                DoseStatus::Taken
            } else if i32::from(dose_time.minutes())
                < i32::from(now.minutes()) - i32::from(GRACE_PERIOD_MINUTES)
            {
                DoseStatus::Overdue
            } else {
                DoseStatus::Pending
            };

            schedule.push(ScheduledDose {
                medication_id: med.id,
                medication_name: med.name.clone(),
                dosage: med.dosage.clone(),
                time: dose_time,
                status,
                has_interaction: !med.interactions.is_empty(),
            });
        }
    }

    schedule.sort_by_key(|dose| dose.time);
    schedule
}

pub fn count_statuses(schedule: &[ScheduledDose]) -> DoseCounts {
    let mut counts = DoseCounts::default();
    for dose in schedule {
        match dose.status {
            DoseStatus::Taken => counts.taken += 1,
            DoseStatus::Pending => counts.pending += 1,
            DoseStatus::Overdue => counts.overdue += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medication(name: &str, times: &[&str], interactions: &[&str]) -> Medication {
        Medication {
            id: Uuid::new_v4(),
            name: name.into(),
            dosage: "100mg".into(),
            frequency: String::new(),
            times: times.iter().map(|t| t.parse().unwrap()).collect(),
            start_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            notes: None,
            interactions: interactions.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn taken_log(med: &Medication, time: &str, date: NaiveDate) -> MedicationLog {
        MedicationLog {
            id: Uuid::new_v4(),
            medication_id: med.id,
            scheduled_time: time.parse().unwrap(),
            taken_time: Some(time.parse().unwrap()),
            status: LogStatus::Taken,
            date,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn dose_within_grace_period_is_pending() {
        let meds = vec![medication("Aspirina", &["08:00"], &[])];
        let schedule =
            build_daily_schedule(&meds, &[], today(), "08:20".parse().unwrap());
        assert_eq!(schedule[0].status, DoseStatus::Pending);

        // A dose whose time has not arrived yet is pending too.
        let schedule =
            build_daily_schedule(&meds, &[], today(), "07:00".parse().unwrap());
        assert_eq!(schedule[0].status, DoseStatus::Pending);
    }

    #[test]
    fn dose_past_grace_period_is_overdue() {
        let meds = vec![medication("Aspirina", &["08:00"], &[])];
        for now in ["09:00", "09:31", "23:59"] {
            let schedule =
                build_daily_schedule(&meds, &[], today(), now.parse().unwrap());
            assert_eq!(schedule[0].status, DoseStatus::Overdue, "at {now}");
        }
    }

    #[test]
    fn grace_boundary_is_strict() {
        let meds = vec![medication("Aspirina", &["08:00"], &[])];
        // Exactly 30 minutes late: 480 < 510 - 30 is false.
        let schedule =
            build_daily_schedule(&meds, &[], today(), "08:30".parse().unwrap());
        assert_eq!(schedule[0].status, DoseStatus::Pending);
        // One minute past the grace window.
        let schedule =
            build_daily_schedule(&meds, &[], today(), "08:31".parse().unwrap());
        assert_eq!(schedule[0].status, DoseStatus::Overdue);
    }

    #[test]
    fn taken_log_wins_over_overdue() {
        let meds = vec![medication("Aspirina", &["08:00"], &[])];
        let logs = vec![taken_log(&meds[0], "08:00", today())];
        let schedule =
            build_daily_schedule(&meds, &logs, today(), "12:00".parse().unwrap());
        assert_eq!(schedule[0].status, DoseStatus::Taken);
    }

    #[test]
    fn log_from_another_day_does_not_count() {
        let meds = vec![medication("Aspirina", &["08:00"], &[])];
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let logs = vec![taken_log(&meds[0], "08:00", yesterday)];
        let schedule =
            build_daily_schedule(&meds, &logs, today(), "12:00".parse().unwrap());
        assert_eq!(schedule[0].status, DoseStatus::Overdue);
    }

    #[test]
    fn skipped_log_is_not_taken() {
        let meds = vec![medication("Aspirina", &["08:00"], &[])];
        let mut log = taken_log(&meds[0], "08:00", today());
        log.status = LogStatus::Skipped;
        log.taken_time = None;
        let schedule =
            build_daily_schedule(&meds, &[log], today(), "12:00".parse().unwrap());
        assert_eq!(schedule[0].status, DoseStatus::Overdue);
    }

    #[test]
    fn schedule_sorts_by_time_with_stable_ties() {
        let meds = vec![
            medication("Noche", &["20:00"], &[]),
            medication("Primera", &["08:00"], &[]),
            medication("Segunda", &["08:00"], &[]),
        ];
        let schedule =
            build_daily_schedule(&meds, &[], today(), "07:00".parse().unwrap());
        let names: Vec<&str> = schedule.iter().map(|d| d.medication_name.as_str()).collect();
        // Ties at 08:00 keep roster order.
        assert_eq!(names, ["Primera", "Segunda", "Noche"]);
    }

    #[test]
    fn interaction_flag_carries_through() {
        let meds = vec![
            medication("Aspirina", &["08:00"], &["Warfarina"]),
            medication("Paracetamol", &["09:00"], &[]),
        ];
        let schedule =
            build_daily_schedule(&meds, &[], today(), "07:00".parse().unwrap());
        assert!(schedule[0].has_interaction);
        assert!(!schedule[1].has_interaction);
    }

    #[test]
    fn counts_tally_statuses() {
        let meds = vec![medication("Aspirina", &["06:00", "12:00", "22:00"], &[])];
        let logs = vec![taken_log(&meds[0], "06:00", today())];
        let schedule =
            build_daily_schedule(&meds, &logs, today(), "13:00".parse().unwrap());
        let counts = count_statuses(&schedule);
        assert_eq!(
            counts,
            DoseCounts {
                taken: 1,
                pending: 1,
                overdue: 1,
            }
        );
    }

    #[test]
    fn empty_roster_yields_empty_schedule() {
        let schedule =
            build_daily_schedule(&[], &[], today(), "08:00".parse().unwrap());
        assert!(schedule.is_empty());
        assert_eq!(count_statuses(&schedule), DoseCounts::default());
    }
}
