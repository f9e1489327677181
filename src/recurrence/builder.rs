//! Assembles a [`RecurrenceRule`] from the columns of a stored rule.
use chrono::NaiveDate;
use log::trace;

use crate::archive::ArchiveError;

use super::extract;
use super::{RecurrenceError, RecurrenceRule, RuleField};

/// One stored rule, as read from the `ZRECURRENCERULE` table.
///
/// Blob columns hold keyed archives and are `None` when the column is NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleRow {
    pub primary_key: i64,
    /// `YYYYMMDD`, with `None` or `0` meaning no end date.
    pub end_date_ymd: Option<i64>,
    pub first_day_of_the_week: i64,
    pub occurrence_count: i64,
    pub recurrence_interval: i64,
    pub recurrence_type: i64,
    pub days_of_the_month: Option<Vec<u8>>,
    pub days_of_the_week: Option<Vec<u8>>,
    pub months_of_the_year: Option<Vec<u8>>,
    pub weekdays_of_the_month: Option<Vec<u8>>,
}

/// Parses a `YYYYMMDD` integer. Zero means no date.
pub fn parse_dateymd(dateymd: i64) -> Result<Option<NaiveDate>, RecurrenceError> {
    if dateymd == 0 {
        return Ok(None);
    }
    if !(10_000_101..=99_991_231).contains(&dateymd) {
        return Err(RecurrenceError::InvalidEndDate(dateymd));
    }

    let year = (dateymd / 10_000) as i32;
    let month = (dateymd / 100 % 100) as u32;
    let day = (dateymd % 100) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or(RecurrenceError::InvalidEndDate(dateymd))
}

fn field<T>(field: RuleField, result: Result<T, ArchiveError>) -> Result<T, RecurrenceError> {
    result.map_err(|source| RecurrenceError::Field { field, source })
}

impl TryFrom<&RuleRow> for RecurrenceRule {
    type Error = RecurrenceError;

    fn try_from(row: &RuleRow) -> Result<Self, Self::Error> {
        let end_date = parse_dateymd(row.end_date_ymd.unwrap_or(0))?;

        let days_of_the_month = field(
            RuleField::DaysOfTheMonth,
            extract::integers(row.days_of_the_month.as_deref()),
        )?;
        let days_of_the_week = field(
            RuleField::DaysOfTheWeek,
            extract::integers(row.days_of_the_week.as_deref()),
        )?;
        let months_of_the_year = field(
            RuleField::MonthsOfTheYear,
            extract::integers(row.months_of_the_year.as_deref()),
        )?;
        let on_the = field(
            RuleField::WeekdaysOfTheMonth,
            extract::weekday_selector(row.weekdays_of_the_month.as_deref()),
        )?;

        trace!("built recurrence rule, pk={}", row.primary_key);

        Ok(RecurrenceRule::new(row.recurrence_type.into(), row.recurrence_interval)
            .with_primary_key(row.primary_key)
            .with_end_date(end_date)
            .with_first_day_of_the_week(row.first_day_of_the_week)
            .with_occurrence_count(row.occurrence_count)
            .with_days_of_the_month(days_of_the_month)
            .with_days_of_the_week(days_of_the_week)
            .with_months_of_the_year(months_of_the_year)
            .with_on_the(on_the))
    }
}
