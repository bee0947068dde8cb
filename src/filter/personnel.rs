//! Views behind the live dashboard and the realtime monitoring board.

use serde::Serialize;

use super::Choice;
use crate::models::{Personnel, PersonnelStatus, RiskBand};

/// Personnel admitted by `filter`, danger first, then warning, then normal.
/// Within a status the source order is kept.
pub fn dashboard_view<'a>(
    personnel: &'a [Personnel],
    filter: Choice<PersonnelStatus>,
) -> Vec<&'a Personnel> {
    let mut view: Vec<&Personnel> = personnel
        .iter()
        .filter(|person| filter.admits(&person.status))
        .collect();
    view.sort_by(|a, b| b.status.priority().cmp(&a.status.priority()));
    view
}

/// Everyone in danger, whatever the dashboard filter shows.
pub fn active_alerts(personnel: &[Personnel]) -> Vec<&Personnel> {
    personnel
        .iter()
        .filter(|person| person.status == PersonnelStatus::Danger)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSummary {
    pub total: usize,
    pub danger: usize,
    pub warning: usize,
    pub normal: usize,
    /// Personnel whose risk score sits in the critical band.
    pub critical_risk: usize,
    pub low_battery: usize,
}

impl MonitoringSummary {
    pub fn from_personnel(personnel: &[Personnel]) -> Self {
        personnel
            .iter()
            .fold(Self::default(), |mut summary, person| {
                summary.total += 1;
                match person.status {
                    PersonnelStatus::Danger => summary.danger += 1,
                    PersonnelStatus::Warning => summary.warning += 1,
                    PersonnelStatus::Normal => summary.normal += 1,
                }
                if person.risk_band() == RiskBand::Critical {
                    summary.critical_risk += 1;
                }
                if person.battery_low() {
                    summary.low_battery += 1;
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply, Criteria};
    use crate::models::Action;
    use crate::sample::sample_personnel;
    use chrono::{TimeZone, Utc};

    fn ids(view: &[&Personnel]) -> Vec<String> {
        view.iter().map(|person| person.id.clone()).collect()
    }

    #[test]
    fn dashboard_sorts_danger_first_and_keeps_order_within_status() {
        let personnel = sample_personnel(Utc::now());
        let view = dashboard_view(&personnel, Choice::All);

        assert_eq!(
            ids(&view),
            vec!["SEC-002", "SEC-004", "SEC-001", "SEC-003", "SEC-005"]
        );
    }

    #[test]
    fn dashboard_filter_narrows_to_one_status() {
        let personnel = sample_personnel(Utc::now());

        let warning = dashboard_view(&personnel, Choice::Only(PersonnelStatus::Warning));
        assert_eq!(ids(&warning), vec!["SEC-004"]);

        let danger = dashboard_view(&personnel, Choice::Only(PersonnelStatus::Danger));
        assert_eq!(ids(&danger), vec!["SEC-002"]);
    }

    #[test]
    fn alerts_ignore_the_dashboard_filter() {
        let personnel = sample_personnel(Utc::now());
        let alerts = active_alerts(&personnel);
        assert_eq!(ids(&alerts), vec!["SEC-002"]);
    }

    #[test]
    fn monitoring_counts() {
        let personnel = sample_personnel(Utc::now());
        let summary = MonitoringSummary::from_personnel(&personnel);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.danger, 1);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.normal, 3);
        assert_eq!(summary.critical_risk, 1);
        assert_eq!(summary.low_battery, 1);
    }

    #[test]
    fn personnel_share_the_generic_filter() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let personnel = sample_personnel(now);
        let criteria: Criteria<Action, RiskBand, PersonnelStatus> =
            Criteria::default().with_category(Action::Walking);

        let view = apply(&personnel, &criteria, now);
        let mut walking = ids(&view);
        walking.sort();
        assert_eq!(walking, vec!["SEC-001", "SEC-005"]);

        let by_name = apply(&personnel, &Criteria::default().with_search("القحطاني"), now);
        assert_eq!(ids(&by_name), vec!["SEC-003"]);
    }
}
