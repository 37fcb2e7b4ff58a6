use serde::{Deserialize, Serialize};

/// Qualitative risk level of a known interaction.
///
/// Ordered so `High` compares greatest; the UI groups alerts by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// A catalog-defined interaction between two drugs.
///
/// The pair is unordered: `(drug1, drug2)` and `(drug2, drug1)` name the
/// same interaction, and matching is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugInteraction {
    pub drug1: String,
    pub drug2: String,
    pub severity: Severity,
    pub description: String,
}

/// A dose-timing warning: the candidate medication has a dose scheduled too
/// close to a dose of an interacting roster medication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictWarning {
    pub severity: Severity,
    pub candidate_name: String,
    pub medication_name: String,
    pub message: String,
}
