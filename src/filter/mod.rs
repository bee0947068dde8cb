//! Client-side filtering and aggregation over the in-memory collections.
//!
//! Every function here is pure: the source slice is only borrowed, `now` is
//! passed in explicitly, and the result is a fresh ordered view of references
//! into the source.

pub mod aggregate;
pub mod criteria;
pub mod personnel;
pub mod teams;

pub use aggregate::{
    apply, breakdown, category_breakdown, round1, severity_breakdown, summarize, Bucket,
    IncidentSummary, Summary,
};
pub use criteria::{Choice, Criteria, DateRange, IncidentCriteria};
pub use personnel::{active_alerts, dashboard_view, MonitoringSummary};
pub use teams::{filter_teams, tasks_for, team_loads, TeamFilter, TeamLoad, TeamSummary};

use chrono::{DateTime, Utc};

use crate::models::{
    Action, Coordinates, Incident, IncidentStatus, IncidentType, Personnel, PersonnelStatus,
    RiskBand, Severity, Variant,
};

/// The filterable shape shared by incidents and personnel.
pub trait Record {
    type Category: Variant;
    type Severity: Variant;
    type Status: Variant;

    fn id(&self) -> &str;
    fn category(&self) -> Self::Category;
    fn severity(&self) -> Self::Severity;
    fn status(&self) -> Self::Status;
    fn timestamp(&self) -> DateTime<Utc>;
    fn coordinates(&self) -> Option<Coordinates>;

    /// Human-readable fields eligible for substring search.
    fn search_fields(&self) -> Vec<&str>;

    /// The numeric metric averaged by the summary, if the record carries one.
    fn metric(&self) -> Option<f64> {
        None
    }

    /// Case-sensitive substring match against any search field. An empty term
    /// matches every record.
    fn matches_text(&self, term: &str) -> bool {
        term.is_empty() || self.search_fields().iter().any(|field| field.contains(term))
    }
}

impl Record for Incident {
    type Category = IncidentType;
    type Severity = Severity;
    type Status = IncidentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> IncidentType {
        self.kind
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn status(&self) -> IncidentStatus {
        self.status
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.personnel_name.as_str(),
            self.report_number.as_str(),
            self.location.as_str(),
        ]
    }

    fn metric(&self) -> Option<f64> {
        Some(self.response_time)
    }
}

impl Record for Personnel {
    type Category = Action;
    type Severity = RiskBand;
    type Status = PersonnelStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Action {
        self.action
    }

    fn severity(&self) -> RiskBand {
        self.risk_band()
    }

    fn status(&self) -> PersonnelStatus {
        self.status
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.last_seen
    }

    fn coordinates(&self) -> Option<Coordinates> {
        Some(self.location)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str()]
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.heart_rate))
    }
}
