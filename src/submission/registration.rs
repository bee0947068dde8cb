use chrono::{DateTime, Utc};
use log::info;

use super::form::ValidatedCasualty;
use crate::audio::{AlertKind, AudioAlertHandle};
use crate::models::{Incident, Severity};
use crate::settings::AlertSoundSettings;

/// Alert sound a completed registration triggers, if any. Only critical
/// casualties sound the danger alert.
pub fn alert_for(casualty: &ValidatedCasualty) -> Option<AlertKind> {
    match casualty.severity {
        Severity::Critical => Some(AlertKind::Danger),
        Severity::High | Severity::Medium | Severity::Low => None,
    }
}

/// Completion step of a submission: sounds the alert the casualty calls for
/// and returns the incident log entry.
pub fn register(
    casualty: ValidatedCasualty,
    audio: &AudioAlertHandle,
    sound: &AlertSoundSettings,
    reported_at: DateTime<Utc>,
) -> Incident {
    if let Some(kind) = alert_for(&casualty) {
        audio.play(kind, sound);
    }
    let incident = casualty.into_incident(reported_at);
    info!("Registered {} for {}", incident.id, incident.personnel_name);
    incident
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncidentStatus, IncidentType};

    fn casualty(severity: Severity) -> ValidatedCasualty {
        ValidatedCasualty {
            name: "نايف العتيبي".into(),
            injury_type: IncidentType::Assault,
            severity,
            location: "منطقة الملز".into(),
            notes: None,
        }
    }

    #[test]
    fn only_critical_casualties_raise_the_danger_alert() {
        assert_eq!(alert_for(&casualty(Severity::Critical)), Some(AlertKind::Danger));
        assert_eq!(alert_for(&casualty(Severity::High)), None);
        assert_eq!(alert_for(&casualty(Severity::Low)), None);
    }

    #[test]
    fn critical_registration_reaches_the_audio_thread() {
        let audio = AudioAlertHandle::new();
        let incident = register(
            casualty(Severity::Critical),
            &audio,
            &AlertSoundSettings::default(),
            Utc::now(),
        );

        assert!(audio.is_running());
        assert_eq!(incident.status, IncidentStatus::Ongoing);
        assert_eq!(incident.severity, Severity::Critical);
        audio.shutdown();
    }

    #[test]
    fn non_critical_registration_stays_quiet() {
        let audio = AudioAlertHandle::new();
        let incident = register(
            casualty(Severity::Medium),
            &audio,
            &AlertSoundSettings::default(),
            Utc::now(),
        );

        assert!(!audio.is_running());
        assert_eq!(incident.personnel_name, "نايف العتيبي");
    }
}
