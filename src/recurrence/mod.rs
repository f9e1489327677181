//! Recurrence rules attached to spending plan events.
//!
//! A rule describes when a plan event repeats. Rules are built once from the
//! stored columns (see [`builder`]), compared and sorted for listings (see
//! [`ordering`]) and rendered as text (see [`describe`]).
use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use getset::{CopyGetters, Getters};
use thiserror::Error;

use crate::archive::ArchiveError;

pub mod builder;
pub mod consts;
pub mod describe;
pub mod extract;
pub mod ordering;

#[cfg(test)]
mod describe_tests;

pub use builder::{parse_dateymd, RuleRow};
pub use describe::{describe, describe_fill};
pub use ordering::{compare, sort_rules, unique_rules};

/// Column a rule failed to decode from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    DaysOfTheMonth,
    DaysOfTheWeek,
    MonthsOfTheYear,
    WeekdaysOfTheMonth,
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleField::DaysOfTheMonth => "days of the month",
            RuleField::DaysOfTheWeek => "days of the week",
            RuleField::MonthsOfTheYear => "months of the year",
            RuleField::WeekdaysOfTheMonth => "weekdays of the month",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum RecurrenceError {
    #[error("failed to decode {field}")]
    Field {
        field: RuleField,
        #[source]
        source: ArchiveError,
    },
    #[error("failed to parse end date {0}")]
    InvalidEndDate(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecurrenceType {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// A type code this crate does not know about.
    Unknown(i64),
}

impl RecurrenceType {
    pub fn code(&self) -> i64 {
        match self {
            RecurrenceType::Daily => consts::RECURRENCE_TYPE_DAILY,
            RecurrenceType::Weekly => consts::RECURRENCE_TYPE_WEEKLY,
            RecurrenceType::Monthly => consts::RECURRENCE_TYPE_MONTHLY,
            RecurrenceType::Yearly => consts::RECURRENCE_TYPE_YEARLY,
            RecurrenceType::Unknown(code) => *code,
        }
    }
}

impl From<i64> for RecurrenceType {
    fn from(code: i64) -> Self {
        match code {
            consts::RECURRENCE_TYPE_DAILY => RecurrenceType::Daily,
            consts::RECURRENCE_TYPE_WEEKLY => RecurrenceType::Weekly,
            consts::RECURRENCE_TYPE_MONTHLY => RecurrenceType::Monthly,
            consts::RECURRENCE_TYPE_YEARLY => RecurrenceType::Yearly,
            code => RecurrenceType::Unknown(code),
        }
    }
}

/// The "2nd Tuesday" style selector of monthly and yearly rules. Both fields
/// are zero when the rule has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OnThe {
    pub day_of_the_week: i64,
    pub week_number: i64,
}

impl OnThe {
    pub fn new(day_of_the_week: i64, week_number: i64) -> OnThe {
        OnThe {
            day_of_the_week,
            week_number,
        }
    }
}

/// A decoded recurrence rule.
///
/// Equality ignores the primary key. `weekdays_of_the_month` is carried along
/// but never populated from storage nor used when describing a rule.
#[derive(Debug, Clone, Default, Getters, CopyGetters)]
pub struct RecurrenceRule {
    #[getset(get_copy = "pub")]
    primary_key: i64,
    #[getset(get_copy = "pub")]
    end_date: Option<NaiveDate>,
    #[getset(get_copy = "pub")]
    first_day_of_the_week: i64,
    #[getset(get_copy = "pub")]
    occurrence_count: i64,
    #[getset(get_copy = "pub")]
    recurrence_interval: i64,
    #[getset(get_copy = "pub")]
    recurrence_type: RecurrenceType,
    #[getset(get = "pub")]
    days_of_the_month: Vec<i64>,
    #[getset(get = "pub")]
    days_of_the_week: Vec<i64>,
    #[getset(get = "pub")]
    months_of_the_year: Vec<i64>,
    #[getset(get_copy = "pub")]
    on_the: OnThe,
    #[getset(get = "pub")]
    weekdays_of_the_month: Vec<i64>,
}

impl RecurrenceRule {
    pub fn new(recurrence_type: RecurrenceType, recurrence_interval: i64) -> RecurrenceRule {
        RecurrenceRule {
            recurrence_type,
            recurrence_interval,
            ..RecurrenceRule::default()
        }
    }

    pub fn with_primary_key(mut self, primary_key: i64) -> Self {
        self.primary_key = primary_key;
        self
    }

    pub fn with_end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn with_first_day_of_the_week(mut self, first_day_of_the_week: i64) -> Self {
        self.first_day_of_the_week = first_day_of_the_week;
        self
    }

    pub fn with_occurrence_count(mut self, occurrence_count: i64) -> Self {
        self.occurrence_count = occurrence_count;
        self
    }

    pub fn with_days_of_the_month(mut self, days: Vec<i64>) -> Self {
        self.days_of_the_month = days;
        self
    }

    pub fn with_days_of_the_week(mut self, days: Vec<i64>) -> Self {
        self.days_of_the_week = days;
        self
    }

    pub fn with_months_of_the_year(mut self, months: Vec<i64>) -> Self {
        self.months_of_the_year = months;
        self
    }

    pub fn with_on_the(mut self, on_the: OnThe) -> Self {
        self.on_the = on_the;
        self
    }

    pub fn with_weekdays_of_the_month(mut self, weekdays: Vec<i64>) -> Self {
        self.weekdays_of_the_month = weekdays;
        self
    }
}

impl PartialEq for RecurrenceRule {
    fn eq(&self, other: &Self) -> bool {
        self.end_date == other.end_date
            && self.first_day_of_the_week == other.first_day_of_the_week
            && self.occurrence_count == other.occurrence_count
            && self.recurrence_interval == other.recurrence_interval
            && self.recurrence_type == other.recurrence_type
            && self.days_of_the_month == other.days_of_the_month
            && self.days_of_the_week == other.days_of_the_week
            && self.months_of_the_year == other.months_of_the_year
            && self.on_the == other.on_the
            && self.weekdays_of_the_month == other.weekdays_of_the_month
    }
}

impl Eq for RecurrenceRule {}

/// Indexes rules by primary key. A later rule replaces an earlier one with the
/// same key.
pub fn index_by_key(rules: Vec<RecurrenceRule>) -> HashMap<i64, RecurrenceRule> {
    rules.into_iter().map(|rule| (rule.primary_key, rule)).collect()
}
