//! Dose-schedule conflict checking.
//!
//! Run live while the user fills in the add-medication form: given the
//! candidate name and its proposed dose times, warn about any dose that
//! lands within two hours of a dose of an interacting roster medication.

use crate::models::Medication;
use crate::schedule::time::{ClockTime, TimeParseError, MINUTES_PER_DAY};

use super::catalog::{normalized, InteractionCatalog};
use super::engine::find_all_interactions;
use super::messages::MessageTemplates;
use super::types::{ConflictWarning, DrugInteraction};

/// Doses of interacting medications closer than this are a conflict.
pub const MIN_GAP_MINUTES: u16 = 120;

/// Check the candidate's proposed dose times against the roster.
///
/// A blank candidate name returns no warnings: the user has not typed a
/// drug yet, so there is nothing to compare. Blank time entries are
/// in-progress form rows and are skipped; any other malformed time is
/// rejected before arithmetic happens.
///
/// Warnings come out in a fixed order: interactions as the engine found
/// them, then the roster medication's dose times in stored order, then the
/// candidate times in proposed order.
pub fn check_schedule_conflicts(
    catalog: &InteractionCatalog,
    candidate_name: &str,
    candidate_times: &[String],
    existing: &[Medication],
) -> Result<Vec<ConflictWarning>, TimeParseError> {
    if candidate_name.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut proposed = Vec::with_capacity(candidate_times.len());
    for raw in candidate_times {
        if raw.trim().is_empty() {
            continue;
        }
        proposed.push(raw.parse::<ClockTime>()?);
    }

    let mut names = Vec::with_capacity(existing.len() + 1);
    names.push(candidate_name.to_string());
    names.extend(existing.iter().map(|m| m.name.clone()));

    let interactions = find_all_interactions(catalog, &names);
    let candidate_norm = normalized(candidate_name);

    let mut warnings = Vec::new();
    for interaction in &interactions {
        let Some(med) = involved_medication(interaction, &candidate_norm, existing) else {
            continue;
        };
        for existing_time in &med.times {
            for candidate_time in &proposed {
                if existing_time.abs_diff(*candidate_time) < MIN_GAP_MINUTES {
                    warnings.push(ConflictWarning {
                        severity: interaction.severity,
                        candidate_name: candidate_name.to_string(),
                        medication_name: med.name.clone(),
                        message: MessageTemplates::schedule_conflict(
                            interaction.severity,
                            candidate_name,
                            &med.name,
                        ),
                    });
                }
            }
        }
    }

    Ok(warnings)
}

/// The roster medication an interaction refers to: the first whose name
/// matches a side of the pair that is not the candidate.
///
/// When a pair joins two roster medications (candidate on neither side),
/// the first match wins — the warning is still worth surfacing, attributed
/// to one of them.
fn involved_medication<'a>(
    interaction: &DrugInteraction,
    candidate_norm: &str,
    existing: &'a [Medication],
) -> Option<&'a Medication> {
    let side_a = normalized(&interaction.drug1);
    let side_b = normalized(&interaction.drug2);
    existing.iter().find(|m| {
        let name = normalized(&m.name);
        (name == side_a || name == side_b) && name != candidate_norm
    })
}

/// Suggest a candidate dose time at least `min_gap` minutes from `anchor`.
///
/// If the gap is already wide enough the candidate comes back unchanged;
/// otherwise the suggestion is `anchor + min_gap`, wrapped past midnight.
/// This only pushes forward from the anchor — it never searches backwards,
/// and the suggested slot is not re-checked against other medications, so
/// it can itself conflict with a third drug. Callers re-run the conflict
/// check on whatever the user accepts.
pub fn suggest_adjusted_time(anchor: ClockTime, candidate: ClockTime, min_gap: u16) -> ClockTime {
    if anchor.abs_diff(candidate) >= min_gap {
        return candidate;
    }

    let mut adjusted = u32::from(anchor.minutes()) + u32::from(min_gap);
    if adjusted >= u32::from(MINUTES_PER_DAY) {
        adjusted -= u32::from(MINUTES_PER_DAY);
    }
    ClockTime::from_minutes_wrapping(adjusted)
}
