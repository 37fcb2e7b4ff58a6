pub mod enums;
pub mod medication;

pub use enums::LogStatus;
pub use medication::{Medication, MedicationLog, NewMedication};
