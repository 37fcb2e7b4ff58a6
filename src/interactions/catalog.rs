//! The known drug-pair interaction table.
//!
//! Bundled reference data, not a pharmacological database: a short list of
//! common interacting pairs shipped with the app. Loaded once at startup and
//! indexed by normalized name pair, so lookups stay constant-time however
//! large the bundled list grows.

use std::collections::HashMap;

use thiserror::Error;

use super::types::DrugInteraction;

const BUNDLED_CATALOG: &str = include_str!("../../resources/interactions.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse interaction catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable lookup table of known interacting drug pairs.
pub struct InteractionCatalog {
    entries: Vec<DrugInteraction>,
    index: HashMap<(String, String), usize>,
}

impl InteractionCatalog {
    /// Load the catalog bundled with the application.
    pub fn load_bundled() -> Result<Self, CatalogError> {
        let entries: Vec<DrugInteraction> = serde_json::from_str(BUNDLED_CATALOG)?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: Vec<DrugInteraction>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.insert(pair_key(&entry.drug1, &entry.drug2), i);
        }
        Self { entries, index }
    }

    /// Look up the interaction between two drugs, in either order.
    ///
    /// Names are trimmed and lowercased before matching. Absence of a match
    /// is the expected common case, not an error.
    pub fn lookup(&self, drug_a: &str, drug_b: &str) -> Option<&DrugInteraction> {
        self.index
            .get(&pair_key(drug_a, drug_b))
            .map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[DrugInteraction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trim and lowercase a drug name for matching.
pub(crate) fn normalized(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Order-independent index key for a drug pair.
fn pair_key(a: &str, b: &str) -> (String, String) {
    let a = normalized(a);
    let b = normalized(b);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
