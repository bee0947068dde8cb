//! Incident log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinates, Variant};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    Falling,
    Impact,
    Assault,
    HealthAlert,
    Other,
}

impl Variant for IncidentType {
    const ALL: &'static [Self] = &[
        IncidentType::Falling,
        IncidentType::Impact,
        IncidentType::Assault,
        IncidentType::HealthAlert,
        IncidentType::Other,
    ];

    fn key(&self) -> &'static str {
        match self {
            IncidentType::Falling => "falling",
            IncidentType::Impact => "impact",
            IncidentType::Assault => "assault",
            IncidentType::HealthAlert => "health_alert",
            IncidentType::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IncidentType::Falling => "سقوط",
            IncidentType::Impact => "اصطدام",
            IncidentType::Assault => "اعتداء",
            IncidentType::HealthAlert => "تنبيه صحي",
            IncidentType::Other => "أخرى",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Variant for Severity {
    const ALL: &'static [Self] = &[
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    fn key(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "حرج",
            Severity::High => "مرتفع",
            Severity::Medium => "متوسط",
            Severity::Low => "منخفض",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Resolved,
    Ongoing,
    Pending,
}

impl Variant for IncidentStatus {
    const ALL: &'static [Self] = &[
        IncidentStatus::Resolved,
        IncidentStatus::Ongoing,
        IncidentStatus::Pending,
    ];

    fn key(&self) -> &'static str {
        match self {
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Ongoing => "ongoing",
            IncidentStatus::Pending => "pending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Resolved => "محلول",
            IncidentStatus::Ongoing => "جاري",
            IncidentStatus::Pending => "قيد الانتظار",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub report_number: String,
    pub personnel_name: String,
    pub personnel_id: String,
    #[serde(rename = "type")]
    pub kind: IncidentType,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub description: String,
    /// Minutes from detection to first responder contact.
    pub response_time: f64,
    pub status: IncidentStatus,
    pub responders: Vec<String>,
    pub notes: String,
}
