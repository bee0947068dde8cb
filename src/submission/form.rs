use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Incident, IncidentStatus, IncidentType, Severity};

/// Raw state of the "register casualty" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CasualtyForm {
    pub name: String,
    pub injury_type: IncidentType,
    pub severity: Severity,
    pub location: String,
    pub notes: String,
}

impl Default for CasualtyForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            injury_type: IncidentType::Falling,
            severity: Severity::High,
            location: String::new(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("يرجى إدخال اسم المصاب")]
    MissingName,
    #[error("يرجى إدخال موقع الحادثة")]
    MissingLocation,
}

/// A form that passed validation. Text fields are trimmed and blank notes
/// become `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCasualty {
    pub name: String,
    pub injury_type: IncidentType,
    pub severity: Severity,
    pub location: String,
    pub notes: Option<String>,
}

impl CasualtyForm {
    /// Checks required fields in form order: name, then location.
    pub fn validate(&self) -> Result<ValidatedCasualty, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let location = self.location.trim();
        if location.is_empty() {
            return Err(ValidationError::MissingLocation);
        }

        let notes = self.notes.trim();
        Ok(ValidatedCasualty {
            name: name.to_string(),
            injury_type: self.injury_type,
            severity: self.severity,
            location: location.to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

impl ValidatedCasualty {
    /// Incident log entry for a freshly registered casualty. It has no
    /// responders yet and stays `Ongoing` until someone resolves it.
    pub fn into_incident(self, reported_at: DateTime<Utc>) -> Incident {
        let id = Uuid::new_v4();
        let short = id.simple().to_string()[..8].to_uppercase();

        Incident {
            id: format!("INC-{short}"),
            report_number: format!("RPT-{}-{short}", reported_at.year()),
            personnel_name: self.name,
            personnel_id: String::new(),
            kind: self.injury_type,
            severity: self.severity,
            timestamp: reported_at,
            location: self.location,
            coordinates: None,
            description: self.notes.clone().unwrap_or_default(),
            response_time: 0.0,
            status: IncidentStatus::Ongoing,
            responders: Vec::new(),
            notes: self.notes.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> CasualtyForm {
        CasualtyForm {
            name: "  سعد الدوسري ".into(),
            injury_type: IncidentType::Impact,
            severity: Severity::Critical,
            location: "حي النخيل".into(),
            notes: "   ".into(),
        }
    }

    #[test]
    fn blank_name_is_rejected_first() {
        let form = CasualtyForm {
            name: "   ".into(),
            location: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn blank_location_is_rejected() {
        let form = CasualtyForm {
            location: "\t".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingLocation));
    }

    #[test]
    fn valid_form_is_trimmed_and_notes_are_optional() {
        let casualty = filled().validate().unwrap();
        assert_eq!(casualty.name, "سعد الدوسري");
        assert_eq!(casualty.notes, None);
        assert_eq!(casualty.severity, Severity::Critical);
    }

    #[test]
    fn defaults_match_the_empty_form() {
        let form = CasualtyForm::default();
        assert_eq!(form.injury_type, IncidentType::Falling);
        assert_eq!(form.severity, Severity::High);
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ValidationError::MissingName.to_string(), "يرجى إدخال اسم المصاب");
    }

    #[test]
    fn casualty_becomes_an_ongoing_incident() {
        let reported_at = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let mut form = filled();
        form.notes = "كسر في الذراع".into();

        let incident = form.validate().unwrap().into_incident(reported_at);

        assert!(incident.id.starts_with("INC-"));
        assert!(incident.report_number.starts_with("RPT-2025-"));
        assert_eq!(incident.status, IncidentStatus::Ongoing);
        assert_eq!(incident.timestamp, reported_at);
        assert_eq!(incident.kind, IncidentType::Impact);
        assert_eq!(incident.notes, "كسر في الذراع");
        assert!(incident.responders.is_empty());
    }

    #[test]
    fn form_deserializes_from_camel_case() {
        let form: CasualtyForm = serde_json::from_str(
            r#"{"name":"x","injuryType":"health_alert","severity":"low","location":"y"}"#,
        )
        .unwrap();
        assert_eq!(form.injury_type, IncidentType::HealthAlert);
        assert!(form.notes.is_empty());
    }
}
