//! Filter criteria and tally records
//!
//! Every field of [`FilterOptions`] is optional; an absent field places no
//! constraint on the visible rows.

use super::platform::Platform;
use super::status::StatusTag;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date range; either bound may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Inclusive amount range in currency units; either bound may be open
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AmountRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl AmountRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Filter bar state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_range: Option<AmountRange>,
}

impl FilterOptions {
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_status(mut self, status: impl Into<StatusTag>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_amount_range(mut self, range: AmountRange) -> Self {
        self.amount_range = Some(range);
        self
    }

    /// Search text as typed; blank counts as unset
    pub fn query(&self) -> Option<&str> {
        self.search_query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
    }

    /// True when no field constrains the rows
    pub fn is_empty(&self) -> bool {
        self.platform.is_none()
            && self.status.is_none()
            && self.query().is_none()
            && self.date_range.is_none_or(|r| r.is_unbounded())
            && self.amount_range.is_none_or(|r| r.is_unbounded())
    }
}

/// One badge of the status strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: StatusTag,
    pub count: usize,
    pub label: String,
}

impl StatusCount {
    pub fn new(status: impl Into<StatusTag>, count: usize) -> Self {
        let status = status.into();
        Self {
            status,
            count,
            label: status.label().to_string(),
        }
    }
}
