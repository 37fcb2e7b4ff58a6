//! Pairwise interaction detection over a medication name list.

use super::catalog::InteractionCatalog;
use super::types::DrugInteraction;

/// Find every known interacting pair in `names`.
///
/// Each unordered pair of distinct positions `(i, j)`, `i < j`, is checked
/// exactly once, enumerated i-ascending then j-ascending; matches are
/// returned in that order. Duplicated names are distinct positions, so a
/// list containing the same drug twice reports its interactions once per
/// qualifying position pair.
///
/// Quadratic in the list length with an indexed lookup per pair — fine at
/// personal-roster scale.
pub fn find_all_interactions(
    catalog: &InteractionCatalog,
    names: &[String],
) -> Vec<DrugInteraction> {
    let mut found = Vec::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            if let Some(interaction) = catalog.lookup(&names[i], &names[j]) {
                found.push(interaction.clone());
            }
        }
    }
    found
}
