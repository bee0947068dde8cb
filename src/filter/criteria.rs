use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::Record;
use crate::models::{IncidentStatus, IncidentType, Severity, Variant};

/// A single select: either everything, or one exact value.
///
/// On the wire `All` is the string `"all"` and `Only(v)` is `v`'s key, which
/// is what the select widgets send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: Eq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: Variant> Serialize for Choice<T> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self {
            Choice::All => serializer.serialize_str("all"),
            Choice::Only(value) => serializer.serialize_str(value.key()),
        }
    }
}

impl<'de, T: Variant> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "all" {
            return Ok(Choice::All);
        }
        T::from_key(&raw)
            .map(Choice::Only)
            .ok_or_else(|| de::Error::custom(format!("unknown filter value '{raw}'")))
    }
}

/// Rolling time window. Windows are elapsed time back from `now`, not
/// calendar days: "today" is the last 24 hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub fn window(&self) -> Option<Duration> {
        match self {
            DateRange::All => None,
            DateRange::Today => Some(Duration::days(1)),
            DateRange::Week => Some(Duration::days(7)),
            DateRange::Month => Some(Duration::days(30)),
        }
    }

    /// Strictly inside the window: a record exactly one window old is out.
    pub fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.window() {
            None => true,
            Some(window) => now.signed_duration_since(timestamp) < window,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "الكل",
            DateRange::Today => "اليوم",
            DateRange::Week => "هذا الأسبوع",
            DateRange::Month => "هذا الشهر",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        };
        f.write_str(key)
    }
}

/// The active filter selections. Every field is independent and they combine
/// with AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(
        serialize = "C: Variant, S: Variant, St: Variant",
        deserialize = "C: Variant, S: Variant, St: Variant"
    )
)]
pub struct Criteria<C, S, St> {
    #[serde(default)]
    pub category: Choice<C>,
    #[serde(default)]
    pub severity: Choice<S>,
    #[serde(default)]
    pub status: Choice<St>,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub search: String,
}

pub type IncidentCriteria = Criteria<IncidentType, Severity, IncidentStatus>;

impl<C, S, St> Default for Criteria<C, S, St> {
    fn default() -> Self {
        Self {
            category: Choice::All,
            severity: Choice::All,
            status: Choice::All,
            date_range: DateRange::All,
            search: String::new(),
        }
    }
}

impl<C, S, St> Criteria<C, S, St> {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any selection narrows the view; drives the "reset" button.
    pub fn is_active(&self) -> bool {
        !matches!(self.category, Choice::All)
            || !matches!(self.severity, Choice::All)
            || !matches!(self.status, Choice::All)
            || self.date_range != DateRange::All
            || !self.search.is_empty()
    }

    pub fn with_category(mut self, category: C) -> Self {
        self.category = Choice::Only(category);
        self
    }

    pub fn with_severity(mut self, severity: S) -> Self {
        self.severity = Choice::Only(severity);
        self
    }

    pub fn with_status(mut self, status: St) -> Self {
        self.status = Choice::Only(status);
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

impl<C: Eq, S: Eq, St: Eq> Criteria<C, S, St> {
    pub fn matches<R>(&self, record: &R, now: DateTime<Utc>) -> bool
    where
        R: Record<Category = C, Severity = S, Status = St>,
    {
        self.category.admits(&record.category())
            && self.severity.admits(&record.severity())
            && self.status.admits(&record.status())
            && self.date_range.contains(record.timestamp(), now)
            && record.matches_text(&self.search)
    }
}
