use super::types::Severity;

/// Fixed user-facing message templates.
///
/// The wording is part of the product surface the UI has always shown, in
/// the user's language; treat it as data, not log text.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Severity label shown on a schedule-conflict warning.
    pub fn severity_label(severity: Severity) -> &'static str {
        match severity {
            Severity::High => "ALERTA CRÍTICA",
            Severity::Moderate | Severity::Low => "Advertencia",
        }
    }

    /// Warning shown while the user edits dose times: the candidate and an
    /// interacting roster medication are scheduled too close together.
    pub fn schedule_conflict(severity: Severity, candidate: &str, existing: &str) -> String {
        format!(
            "⚠️ {}: {} interactúa con {}. Separar al menos 2 horas.",
            Self::severity_label(severity),
            candidate,
            existing,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_severity_gets_critical_label() {
        assert_eq!(MessageTemplates::severity_label(Severity::High), "ALERTA CRÍTICA");
        assert_eq!(MessageTemplates::severity_label(Severity::Moderate), "Advertencia");
        assert_eq!(MessageTemplates::severity_label(Severity::Low), "Advertencia");
    }

    #[test]
    fn conflict_message_names_both_drugs() {
        let msg = MessageTemplates::schedule_conflict(Severity::High, "Aspirina", "Warfarina");
        assert_eq!(
            msg,
            "⚠️ ALERTA CRÍTICA: Aspirina interactúa con Warfarina. Separar al menos 2 horas."
        );
    }
}
