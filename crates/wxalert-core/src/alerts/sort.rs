//! On-demand ordering of a normalized batch.
//!
//! Sorting is stable and uses `util::collate`, so alerts with equal field
//! values keep the order they arrived in. There is no secondary key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alerts::model::NormalizedAlert;
use crate::util::collate;

/// Field an alert list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Orders by `event`.
    Type,
    /// Orders by `area`.
    Area,
    /// Orders by `severity`.
    Severity,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Type => "type",
            SortField::Area => "area",
            SortField::Severity => "severity",
        }
    }

    fn value(self, alert: &NormalizedAlert) -> &str {
        match self {
            SortField::Type => &alert.event,
            SortField::Area => &alert.area,
            SortField::Severity => &alert.severity,
        }
    }
}

/// Selected ordering for an alert list.
///
/// `Unsorted` is the initial selection and leaves the batch in the order it
/// was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Unsorted,
    By(SortField),
}

impl SortOrder {
    /// Textual form used in reports: `none`, `type`, `area` or `severity`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Unsorted => "none",
            SortOrder::By(field) => field.as_str(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing never fails: any key outside `type`, `area`, `severity`
/// (including the empty string) selects `Unsorted`.
impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(match key {
            "type" => SortOrder::By(SortField::Type),
            "area" => SortOrder::By(SortField::Area),
            "severity" => SortOrder::By(SortField::Severity),
            _ => SortOrder::Unsorted,
        })
    }
}

impl From<&str> for SortOrder {
    fn from(key: &str) -> Self {
        match key.parse() {
            Ok(order) => order,
            Err(never) => match never {},
        }
    }
}

impl Serialize for SortOrder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(SortOrder::from(key.as_str()))
    }
}

/// Returns a new list ordered by `order`; `alerts` is left untouched.
pub fn sort_by(alerts: &[NormalizedAlert], order: SortOrder) -> Vec<NormalizedAlert> {
    let mut sorted = alerts.to_vec();

    if let SortOrder::By(field) = order {
        // Stable: ties keep input order.
        sorted.sort_by(|a, b| collate::compare(field.value(a), field.value(b)));
    }

    tracing::debug!(order = %order, count = sorted.len(), "sorted alert list");
    sorted
}
