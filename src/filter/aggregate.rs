use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Criteria, Record};
use crate::models::{Incident, IncidentStatus, Severity, Variant};
use crate::module_log;

const ENABLE_LOGS: bool = false;

/// Records matching every active criterion, newest first. Ties keep their
/// source order.
pub fn apply<'a, R: Record>(
    source: &'a [R],
    criteria: &Criteria<R::Category, R::Severity, R::Status>,
    now: DateTime<Utc>,
) -> Vec<&'a R> {
    let mut view: Vec<&R> = source
        .iter()
        .filter(|record| criteria.matches(*record, now))
        .collect();

    // `sort_by` is stable, which is what keeps equal timestamps in order.
    view.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

    module_log!(debug, "filter kept {} of {} records", view.len(), source.len());
    view
}

/// Rounds to one decimal place, the precision the stat cards show.
///
/// The value is scaled by ten and rounded half away from zero, so `1.15`
/// (stored as 1.149999..., scaled to exactly 11.5) becomes `1.2`. This is
/// not the shortest-decimal `{:.1}` rendering, which would print `1.1`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket<K> {
    pub key: K,
    pub label: &'static str,
    pub count: usize,
}

/// Counts per variant of `K`, in `K::ALL` order. Variants with no records are
/// kept with a zero count so chart series stay aligned.
pub fn breakdown<R, K, F>(source: &[R], key_of: F) -> Vec<Bucket<K>>
where
    K: Variant,
    F: Fn(&R) -> K,
{
    K::ALL
        .iter()
        .map(|variant| Bucket {
            key: *variant,
            label: variant.label(),
            count: source.iter().filter(|record| key_of(*record) == *variant).count(),
        })
        .collect()
}

/// Per-category counts for the "incident types" chart.
pub fn category_breakdown<R: Record>(source: &[R]) -> Vec<Bucket<R::Category>> {
    breakdown(source, Record::category)
}

/// Per-severity counts for the severity distribution chart.
pub fn severity_breakdown<R: Record>(source: &[R]) -> Vec<Bucket<R::Severity>> {
    breakdown(source, Record::severity)
}

/// Statistics over a whole collection, independent of any active filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary<S> {
    pub total: usize,
    pub by_severity: Vec<Bucket<S>>,
    /// Mean of the record metric, one decimal. Zero for an empty source.
    pub average_metric: f64,
    pub terminal: usize,
}

impl<S: Variant> Summary<S> {
    pub fn count(&self, severity: S) -> usize {
        self.by_severity
            .iter()
            .find(|bucket| bucket.key == severity)
            .map(|bucket| bucket.count)
            .unwrap_or(0)
    }
}

pub fn summarize<R: Record>(source: &[R], terminal: R::Status) -> Summary<R::Severity> {
    let metrics: Vec<f64> = source.iter().filter_map(Record::metric).collect();
    let average_metric = if metrics.is_empty() {
        0.0
    } else {
        round1(metrics.iter().sum::<f64>() / metrics.len() as f64)
    };

    Summary {
        total: source.len(),
        by_severity: severity_breakdown(source),
        average_metric,
        terminal: source
            .iter()
            .filter(|record| record.status() == terminal)
            .count(),
    }
}

/// The four stat cards above the incident log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentSummary {
    pub total: usize,
    pub critical: usize,
    /// Minutes, one decimal.
    pub avg_response_time: f64,
    pub resolved: usize,
    pub by_severity: Vec<Bucket<Severity>>,
}

impl IncidentSummary {
    pub fn from_incidents(incidents: &[Incident]) -> Self {
        let summary = summarize(incidents, IncidentStatus::Resolved);
        Self {
            total: summary.total,
            critical: summary.count(Severity::Critical),
            avg_response_time: summary.average_metric,
            resolved: summary.terminal,
            by_severity: summary.by_severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Choice, DateRange, IncidentCriteria};
    use crate::models::IncidentType;
    use crate::sample::sample_incidents;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn ids(view: &[&Incident]) -> Vec<String> {
        view.iter().map(|incident| incident.id.clone()).collect()
    }

    #[test]
    fn no_criteria_returns_everything_newest_first() {
        let now = now();
        let mut incidents = sample_incidents(now);
        incidents.reverse();

        let view = apply(&incidents, &IncidentCriteria::default(), now);

        assert_eq!(view.len(), incidents.len());
        assert!(view
            .windows(2)
            .all(|pair| pair[0].timestamp >= pair[1].timestamp));
        assert_eq!(
            ids(&view),
            vec!["INC-001", "INC-002", "INC-003", "INC-004", "INC-005", "INC-006"]
        );
    }

    #[test]
    fn critical_filter_returns_falling_and_assault() {
        let now = now();
        let incidents = sample_incidents(now);
        let criteria = IncidentCriteria::default().with_severity(Severity::Critical);

        let view = apply(&incidents, &criteria, now);

        assert_eq!(ids(&view), vec!["INC-001", "INC-004"]);
        assert_eq!(view[0].kind, IncidentType::Falling);
        assert_eq!(view[1].kind, IncidentType::Assault);
    }

    #[test]
    fn search_is_case_sensitive_substring_of_any_field() {
        let now = now();
        let incidents = sample_incidents(now);

        let by_report = apply(
            &incidents,
            &IncidentCriteria::default().with_search("RPT-2025-003"),
            now,
        );
        assert_eq!(ids(&by_report), vec!["INC-003"]);

        let lowercase = apply(
            &incidents,
            &IncidentCriteria::default().with_search("rpt-2025"),
            now,
        );
        assert!(lowercase.is_empty());

        // Same name on two incidents.
        let by_name = apply(
            &incidents,
            &IncidentCriteria::default().with_search("خالد عبدالله"),
            now,
        );
        assert_eq!(ids(&by_name), vec!["INC-001", "INC-006"]);

        let by_location = apply(
            &incidents,
            &IncidentCriteria::default().with_search("الدرعية"),
            now,
        );
        assert_eq!(ids(&by_location), vec!["INC-004"]);
    }

    #[test]
    fn search_does_not_look_at_description() {
        let now = now();
        let incidents = sample_incidents(now);
        let view = apply(
            &incidents,
            &IncidentCriteria::default().with_search("اعتداء جسدي"),
            now,
        );
        assert!(view.is_empty());
    }

    #[test]
    fn composed_criteria_equal_the_intersection() {
        let now = now();
        let incidents = sample_incidents(now);

        let by_kind = ids(&apply(
            &incidents,
            &IncidentCriteria::default().with_category(IncidentType::Falling),
            now,
        ));
        let by_severity = ids(&apply(
            &incidents,
            &IncidentCriteria::default().with_severity(Severity::Critical),
            now,
        ));
        let both = ids(&apply(
            &incidents,
            &IncidentCriteria::default()
                .with_category(IncidentType::Falling)
                .with_severity(Severity::Critical),
            now,
        ));

        let intersection: Vec<String> = by_kind
            .into_iter()
            .filter(|id| by_severity.contains(id))
            .collect();
        assert_eq!(both, intersection);
        assert_eq!(both, vec!["INC-001"]);
    }

    #[test]
    fn today_drops_the_day_old_incidents() {
        let now = now();
        let incidents = sample_incidents(now);
        let view = apply(
            &incidents,
            &IncidentCriteria::default().with_date_range(DateRange::Today),
            now,
        );
        // INC-005 is exactly 24h old, INC-006 is 36h old.
        assert_eq!(ids(&view), vec!["INC-001", "INC-002", "INC-003", "INC-004"]);
    }

    #[test]
    fn applying_twice_is_identical_and_leaves_source_alone() {
        let now = now();
        let incidents = sample_incidents(now);
        let before = incidents.clone();
        let criteria = IncidentCriteria::default()
            .with_status(IncidentStatus::Resolved)
            .with_date_range(DateRange::Week);

        let first = ids(&apply(&incidents, &criteria, now));
        let second = ids(&apply(&incidents, &criteria, now));

        assert_eq!(first, second);
        assert_eq!(incidents, before);
    }

    #[test]
    fn equal_timestamps_keep_source_order() {
        let now = now();
        let mut incidents = sample_incidents(now);
        for incident in incidents.iter_mut() {
            incident.timestamp = now - Duration::hours(1);
        }

        let view = apply(&incidents, &IncidentCriteria::default(), now);
        let source_order: Vec<String> = incidents.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids(&view), source_order);
    }

    #[test]
    fn status_filter_with_no_matches_is_empty() {
        let now = now();
        let incidents = sample_incidents(now);
        let mut criteria = IncidentCriteria::default();
        criteria.status = Choice::Only(IncidentStatus::Pending);

        assert!(apply(&incidents, &criteria, now).is_empty());
    }

    #[test]
    fn summary_ignores_filters_and_averages_response_time() {
        let incidents = sample_incidents(now());
        let summary = IncidentSummary::from_incidents(&incidents);

        // (1.2 + 0.8 + 2.5 + 0.5 + 5.0 + 1.5) / 6 = 1.9166..
        assert_eq!(summary.avg_response_time, 1.9);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.critical, 2);
        assert_eq!(summary.resolved, 6);
        assert_eq!(
            summary
                .by_severity
                .iter()
                .map(|bucket| bucket.count)
                .collect::<Vec<_>>(),
            vec![2, 2, 2, 0]
        );
    }

    #[test]
    fn empty_source_is_safe() {
        let incidents: Vec<Incident> = Vec::new();

        assert!(apply(&incidents, &IncidentCriteria::default(), now()).is_empty());

        let summary = IncidentSummary::from_incidents(&incidents);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_response_time, 0.0);
        assert_eq!(summary.resolved, 0);
    }

    #[test]
    fn breakdown_keeps_zero_buckets() {
        let incidents = sample_incidents(now());
        let by_kind = breakdown(&incidents, |incident: &Incident| incident.kind);

        assert_eq!(by_kind.len(), IncidentType::ALL.len());
        let counts: Vec<usize> = by_kind.iter().map(|bucket| bucket.count).collect();
        assert_eq!(counts, vec![2, 1, 1, 1, 1]);
        assert_eq!(by_kind[0].label, "سقوط");
    }

    #[test]
    fn round1_matches_stat_card_precision() {
        assert_eq!(round1(11.5 / 6.0), 1.9);
        assert_eq!(round1(2.25), 2.3);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn round1_rounds_scaled_halves_up() {
        assert_eq!(round1(1.15), 1.2);
        assert_eq!(round1(1.25), 1.3);

        let mut incidents = sample_incidents(now());
        incidents.truncate(1);
        incidents[0].response_time = 1.15;
        assert_eq!(IncidentSummary::from_incidents(&incidents).avg_response_time, 1.2);
    }

    #[test]
    fn chart_breakdowns_follow_variant_order() {
        let incidents = sample_incidents(now());

        let kinds: Vec<(IncidentType, usize)> = category_breakdown(&incidents)
            .into_iter()
            .map(|bucket| (bucket.key, bucket.count))
            .collect();
        assert_eq!(kinds[0], (IncidentType::Falling, 2));
        assert_eq!(kinds.len(), IncidentType::ALL.len());

        let severities = severity_breakdown(&incidents);
        assert_eq!(severities[0].key, Severity::Critical);
        assert_eq!(severities[0].count, 2);
        assert_eq!(severities[3].count, 0);
    }
}
