pub mod geo;
pub mod incident;
pub mod personnel;
pub mod team;

pub use geo::Coordinates;
pub use incident::{Incident, IncidentStatus, IncidentType, Severity};
pub use personnel::{Action, Personnel, PersonnelStatus, RiskBand};
pub use team::{MemberStatus, Priority, Task, TaskStatus, Team, TeamMember, TeamStatus, TeamType};

/// A closed enumeration shown in the dashboard.
///
/// `key` is the wire form (matches the serde representation) and `label` the
/// Arabic text the UI renders. `ALL` lists every variant in display order so
/// breakdowns and selects can enumerate them.
pub trait Variant: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn key(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.key() == key)
    }
}
