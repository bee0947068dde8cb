//! Row shapes handed to the web view tables.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Incident, IncidentType, Personnel, PersonnelStatus, Severity, Variant};
use crate::utils::time::{full_label, relative_label};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRow {
    pub id: String,
    pub report_number: String,
    pub personnel_name: String,
    #[serde(rename = "type")]
    pub kind: IncidentType,
    pub type_label: &'static str,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub status_label: &'static str,
    pub location: String,
    pub reported: String,
    pub reported_at: String,
    pub response_time: f64,
}

impl IncidentRow {
    pub fn new(incident: &Incident, now: DateTime<Utc>) -> Self {
        Self {
            id: incident.id.clone(),
            report_number: incident.report_number.clone(),
            personnel_name: incident.personnel_name.clone(),
            kind: incident.kind,
            type_label: incident.kind.label(),
            severity: incident.severity,
            severity_label: incident.severity.label(),
            status_label: incident.status.label(),
            location: incident.location.clone(),
            reported: relative_label(incident.timestamp, now),
            reported_at: full_label(incident.timestamp),
            response_time: incident.response_time,
        }
    }
}

pub fn incident_rows(incidents: &[&Incident], now: DateTime<Utc>) -> Vec<IncidentRow> {
    incidents
        .iter()
        .map(|incident| IncidentRow::new(incident, now))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelCard {
    pub id: String,
    pub name: String,
    pub status: PersonnelStatus,
    pub status_label: &'static str,
    pub action_label: &'static str,
    pub risk_label: &'static str,
    pub risk_level: u8,
    pub battery: u8,
    pub battery_low: bool,
    pub heart_rate: u16,
    pub last_seen: String,
}

impl PersonnelCard {
    pub fn new(person: &Personnel, now: DateTime<Utc>) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
            status: person.status,
            status_label: person.status.label(),
            action_label: person.action.label(),
            risk_label: person.risk_band().label(),
            risk_level: person.risk_level,
            battery: person.battery,
            battery_low: person.battery_low(),
            heart_rate: person.heart_rate,
            last_seen: relative_label(person.last_seen, now),
        }
    }
}

pub fn personnel_cards(personnel: &[&Personnel], now: DateTime<Utc>) -> Vec<PersonnelCard> {
    personnel
        .iter()
        .map(|person| PersonnelCard::new(person, now))
        .collect()
}
