//! Drug-interaction detection and dose-schedule conflict checking.
//!
//! A bundled catalog of known interacting pairs feeds two pure checks: the
//! pairwise engine over the full roster, and the schedule-conflict scan run
//! live while the user edits dose times. No state beyond the catalog loaded
//! at startup; every call reads its inputs and returns fresh values, so the
//! whole module is safe to share across threads.

pub mod catalog;
pub mod conflicts;
pub mod engine;
pub mod messages;
pub mod types;

pub use catalog::{CatalogError, InteractionCatalog};
pub use conflicts::{check_schedule_conflicts, suggest_adjusted_time, MIN_GAP_MINUTES};
pub use engine::find_all_interactions;
pub use types::{ConflictWarning, DrugInteraction, Severity};
