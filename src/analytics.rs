//! Datasets behind the analytics page.
//!
//! The historical series are fixed figures for the reporting period. The
//! response-time histogram and the session breakdowns are computed from the
//! incidents loaded for the current session.

use serde::Serialize;

use crate::filter::{category_breakdown, round1, severity_breakdown, Bucket};
use crate::models::{Coordinates, Incident, IncidentType, Severity};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourCount {
    pub hour: &'static str,
    pub incidents: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTrend {
    pub day: &'static str,
    pub incidents: u32,
    pub resolved: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerousArea {
    pub name: &'static str,
    pub incidents: u32,
    pub coordinates: Coordinates,
    pub severity: Severity,
}

/// One bar of the response-time histogram. `upper` is exclusive and `None`
/// for the open-ended last bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBucket {
    pub label: &'static str,
    pub lower: f64,
    pub upper: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_incidents: u32,
    /// Percent of incidents resolved over the week, one decimal.
    pub resolution_rate: f64,
    pub sensitive_areas: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub kpis: Kpis,
    pub incident_types: Vec<Bucket<IncidentType>>,
    pub severity_distribution: Vec<Bucket<Severity>>,
    pub peak_hours: Vec<HourCount>,
    pub daily_trend: Vec<DayTrend>,
    pub dangerous_areas: Vec<DangerousArea>,
    pub response_times: Vec<ResponseBucket>,
    pub session_types: Vec<Bucket<IncidentType>>,
    pub session_severity: Vec<Bucket<Severity>>,
}

const RESPONSE_BUCKETS: [(&str, f64, Option<f64>); 5] = [
    ("0-1", 0.0, Some(1.0)),
    ("1-2", 1.0, Some(2.0)),
    ("2-3", 2.0, Some(3.0)),
    ("3-5", 3.0, Some(5.0)),
    ("5+", 5.0, None),
];

fn historical<K: crate::models::Variant>(counts: &[(K, usize)]) -> Vec<Bucket<K>> {
    counts
        .iter()
        .map(|&(key, count)| Bucket {
            key,
            label: key.label(),
            count,
        })
        .collect()
}

pub fn incident_types() -> Vec<Bucket<IncidentType>> {
    historical(&[
        (IncidentType::Falling, 24),
        (IncidentType::Impact, 18),
        (IncidentType::Assault, 12),
        (IncidentType::HealthAlert, 15),
        (IncidentType::Other, 8),
    ])
}

pub fn severity_distribution() -> Vec<Bucket<Severity>> {
    historical(&[
        (Severity::Critical, 18),
        (Severity::High, 35),
        (Severity::Medium, 32),
        (Severity::Low, 15),
    ])
}

pub fn peak_hours() -> Vec<HourCount> {
    [
        ("00:00", 2),
        ("04:00", 1),
        ("08:00", 5),
        ("12:00", 8),
        ("16:00", 12),
        ("20:00", 9),
        ("23:00", 4),
    ]
    .into_iter()
    .map(|(hour, incidents)| HourCount { hour, incidents })
    .collect()
}

pub fn daily_trend() -> Vec<DayTrend> {
    [
        ("السبت", 8, 7),
        ("الأحد", 12, 11),
        ("الاثنين", 15, 14),
        ("الثلاثاء", 10, 9),
        ("الأربعاء", 18, 17),
        ("الخميس", 14, 13),
        ("الجمعة", 9, 8),
    ]
    .into_iter()
    .map(|(day, incidents, resolved)| DayTrend {
        day,
        incidents,
        resolved,
    })
    .collect()
}

pub fn dangerous_areas() -> Vec<DangerousArea> {
    [
        ("شارع الملك فهد", 12, 24.7236, 46.6853, Severity::High),
        ("ساحة الملك عبدالعزيز", 8, 24.7336, 46.6953, Severity::High),
        ("حي النخيل", 6, 24.7136, 46.6753, Severity::Medium),
        ("منطقة الدرعية", 9, 24.7036, 46.6653, Severity::High),
        ("منطقة الملز", 5, 24.6936, 46.6553, Severity::Medium),
    ]
    .into_iter()
    .map(|(name, incidents, lat, lng, severity)| DangerousArea {
        name,
        incidents,
        coordinates: Coordinates::new(lat, lng),
        severity,
    })
    .collect()
}

/// Histogram of response times in minutes. Bounds are `[lower, upper)`.
pub fn response_times(incidents: &[Incident]) -> Vec<ResponseBucket> {
    RESPONSE_BUCKETS
        .iter()
        .map(|&(label, lower, upper)| ResponseBucket {
            label,
            lower,
            upper,
            count: incidents
                .iter()
                .filter(|incident| {
                    let minutes = incident.response_time;
                    minutes >= lower && upper.map_or(true, |upper| minutes < upper)
                })
                .count(),
        })
        .collect()
}

impl Kpis {
    pub fn from_trend(trend: &[DayTrend], areas: &[DangerousArea]) -> Self {
        let total: u32 = trend.iter().map(|day| day.incidents).sum();
        let resolved: u32 = trend.iter().map(|day| day.resolved).sum();
        let resolution_rate = if total == 0 {
            0.0
        } else {
            round1(f64::from(resolved) * 100.0 / f64::from(total))
        };

        Self {
            total_incidents: total,
            resolution_rate,
            sensitive_areas: areas.len(),
        }
    }
}

impl AnalyticsReport {
    pub fn build(incidents: &[Incident]) -> Self {
        let daily_trend = daily_trend();
        let dangerous_areas = dangerous_areas();

        Self {
            kpis: Kpis::from_trend(&daily_trend, &dangerous_areas),
            incident_types: incident_types(),
            severity_distribution: severity_distribution(),
            peak_hours: peak_hours(),
            daily_trend,
            dangerous_areas,
            response_times: response_times(incidents),
            session_types: category_breakdown(incidents),
            session_severity: severity_breakdown(incidents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_incidents;
    use crate::models::Variant;
    use chrono::Utc;

    #[test]
    fn response_times_bucket_the_session_incidents() {
        // 1.2, 0.8, 2.5, 0.5, 5.0, 1.5
        let incidents = sample_incidents(Utc::now());
        let counts: Vec<(&str, usize)> = response_times(&incidents)
            .iter()
            .map(|bucket| (bucket.label, bucket.count))
            .collect();

        assert_eq!(
            counts,
            vec![("0-1", 2), ("1-2", 2), ("2-3", 1), ("3-5", 0), ("5+", 1)]
        );
    }

    #[test]
    fn bucket_edges_are_lower_inclusive() {
        let mut incidents = sample_incidents(Utc::now());
        incidents.truncate(2);
        incidents[0].response_time = 1.0;
        incidents[1].response_time = 3.0;

        let buckets = response_times(&incidents);
        assert_eq!(buckets[0].count, 0);
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets[3].count, 1);
    }

    #[test]
    fn historical_series_keep_chart_order() {
        let types = incident_types();
        assert_eq!(types.iter().map(|b| b.count).sum::<usize>(), 77);
        assert_eq!(types[0].label, IncidentType::Falling.label());

        let severity = severity_distribution();
        assert_eq!(
            severity.iter().map(|b| b.count).collect::<Vec<_>>(),
            vec![18, 35, 32, 15]
        );

        assert_eq!(peak_hours().len(), 7);
        assert_eq!(peak_hours()[4].incidents, 12);
    }

    #[test]
    fn report_combines_history_and_session() {
        let incidents = sample_incidents(Utc::now());
        let report = AnalyticsReport::build(&incidents);

        // 79 of 86 resolved over the week.
        assert_eq!(report.kpis.total_incidents, 86);
        assert_eq!(report.kpis.resolution_rate, 91.9);
        assert_eq!(report.kpis.sensitive_areas, 5);
        assert_eq!(report.dangerous_areas[3].coordinates, Coordinates::new(24.7036, 46.6653));
        assert_eq!(
            report.session_types.iter().map(|b| b.count).sum::<usize>(),
            incidents.len()
        );
    }

    #[test]
    fn empty_session_still_has_history() {
        let report = AnalyticsReport::build(&[]);
        assert!(report.response_times.iter().all(|bucket| bucket.count == 0));
        assert_eq!(report.daily_trend.len(), 7);
    }

    #[test]
    fn report_serializes_camel_case() {
        let value = serde_json::to_value(AnalyticsReport::build(&[])).unwrap();
        assert!(value.get("severityDistribution").is_some());
        assert_eq!(value["responseTimes"][4]["upper"], serde_json::Value::Null);
        assert_eq!(value["incidentTypes"][0]["key"], "falling");
    }
}
