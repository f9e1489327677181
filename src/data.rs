//! CSV exports of a ledger document and the listings built from them.
//!
//! Rule rows are expected in the column layout of the `ZRECURRENCERULE`
//! table with archive blobs hex encoded, e.g.
//!
//! ```sql
//! SELECT Z_PK, ZENDDATEYMD, ZFIRSTDAYOFTHEWEEK, ZOCCURRENCECOUNT,
//!        ZRECURRENCEINTERVAL, ZRECURRENCETYPE,
//!        hex(ZDAYSOFTHEMONTH) AS ZDAYSOFTHEMONTH,
//!        hex(ZDAYSOFTHEWEEK) AS ZDAYSOFTHEWEEK,
//!        hex(ZMONTHSOFTHEYEAR) AS ZMONTHSOFTHEYEAR,
//!        hex(ZNTHWEEKDAYSOFTHEMONTH) AS ZNTHWEEKDAYSOFTHEMONTH
//! FROM ZRECURRENCERULE ORDER BY Z_PK;
//! ```
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recurrence::{self, RecurrenceRule, RuleRow};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("column {column} is not valid hex")]
    InvalidHex {
        column: &'static str,
        #[source]
        source: hex::FromHexError,
    },
}

#[derive(Debug, Deserialize)]
pub struct RuleRecord {
    #[serde(rename = "Z_PK")]
    pub id: i64,
    #[serde(rename = "ZENDDATEYMD", default)]
    pub end_date: Option<i64>,
    #[serde(rename = "ZFIRSTDAYOFTHEWEEK")]
    pub first_day_of_the_week: i64,
    #[serde(rename = "ZOCCURRENCECOUNT")]
    pub occurrence_count: i64,
    #[serde(rename = "ZRECURRENCEINTERVAL")]
    pub interval: i64,
    #[serde(rename = "ZRECURRENCETYPE")]
    pub type_: i64,
    #[serde(rename = "ZDAYSOFTHEMONTH", default)]
    pub days_of_the_month: Option<String>,
    #[serde(rename = "ZDAYSOFTHEWEEK", default)]
    pub days_of_the_week: Option<String>,
    #[serde(rename = "ZMONTHSOFTHEYEAR", default)]
    pub months_of_the_year: Option<String>,
    #[serde(rename = "ZNTHWEEKDAYSOFTHEMONTH", default)]
    pub weekdays_of_the_month: Option<String>,
}

/// A spending plan event referencing its repeat and fill rules.
#[derive(Debug, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Z_PK")]
    pub id: i64,
    #[serde(rename = "ZPAYEE", default)]
    pub name: String,
    #[serde(rename = "ZRECURRENCERULE", default)]
    pub recurrence_rule: Option<i64>,
    #[serde(rename = "ZFILLRECURRENCERULE", default)]
    pub fill_recurrence_rule: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PlanRecord {
    pub event: i64,
    pub name: String,
    pub recurrence: String,
    pub fill: String,
}

fn blob(column: &'static str, value: Option<String>) -> Result<Option<Vec<u8>>, RecordError> {
    value
        .filter(|hex| !hex.is_empty())
        .map(|hex| hex::decode(hex).map_err(|source| RecordError::InvalidHex { column, source }))
        .transpose()
}

impl TryFrom<RuleRecord> for RuleRow {
    type Error = RecordError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        Ok(RuleRow {
            primary_key: record.id,
            end_date_ymd: record.end_date,
            first_day_of_the_week: record.first_day_of_the_week,
            occurrence_count: record.occurrence_count,
            recurrence_interval: record.interval,
            recurrence_type: record.type_,
            days_of_the_month: blob("ZDAYSOFTHEMONTH", record.days_of_the_month)?,
            days_of_the_week: blob("ZDAYSOFTHEWEEK", record.days_of_the_week)?,
            months_of_the_year: blob("ZMONTHSOFTHEYEAR", record.months_of_the_year)?,
            weekdays_of_the_month: blob("ZNTHWEEKDAYSOFTHEMONTH", record.weekdays_of_the_month)?,
        })
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader)
}

/// Reads every rule of a rule export. The first row that fails to decode
/// fails the whole read.
pub fn read_rules<R: Read>(reader: R) -> Result<Vec<RecurrenceRule>> {
    let mut rules = Vec::new();

    for (line, record) in csv_reader(reader).deserialize::<RuleRecord>().enumerate() {
        let record = record.with_context(|| format!("failed to deserialize rule record {}", line + 1))?;
        let id = record.id;

        let row = RuleRow::try_from(record).with_context(|| format!("invalid recurrence rule, pk={id}"))?;
        let rule = RecurrenceRule::try_from(&row).with_context(|| format!("failed to build recurrence rule, pk={id}"))?;
        rules.push(rule);
    }

    debug!("read recurrence rules, count={}", rules.len());

    Ok(rules)
}

pub fn load_rules(path: &Path) -> Result<Vec<RecurrenceRule>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_rules(file)
}

/// Writes one description per line in canonical order, dropping duplicates
/// when `unique` is set and appending primary keys when `verbose` is set.
pub fn list_rules<W: Write>(rules: Vec<RecurrenceRule>, unique: bool, verbose: bool, mut out: W) -> Result<()> {
    let rules = if unique {
        recurrence::unique_rules(rules)
    } else {
        let mut rules = rules;
        recurrence::sort_rules(&mut rules);
        rules
    };

    for rule in &rules {
        if verbose {
            writeln!(out, "{} [{}]", recurrence::describe(rule), rule.primary_key())?;
        } else {
            writeln!(out, "{}", recurrence::describe(rule))?;
        }
    }

    out.flush()?;

    Ok(())
}

/// Describes the repeat and fill rules of each event. Events pointing at a
/// missing rule are described with the zero rule.
pub fn export_plan<R: Read, W: Write>(events: R, rules: &HashMap<i64, RecurrenceRule>, out: W) -> Result<()> {
    let zero = RecurrenceRule::default();
    let lookup = |key: Option<i64>| match key {
        Some(key) => rules.get(&key).unwrap_or_else(|| {
            warn!("recurrence rule not found, pk={key}");
            &zero
        }),
        None => &zero,
    };

    let mut csv_writer = csv::WriterBuilder::new().from_writer(out);
    for record in csv_reader(events).deserialize::<EventRecord>() {
        let event = record.context("failed to deserialize event record")?;

        csv_writer.serialize(PlanRecord {
            event: event.id,
            recurrence: recurrence::describe(lookup(event.recurrence_rule)),
            fill: recurrence::describe_fill(lookup(event.fill_recurrence_rule)),
            name: event.name,
        })?;
    }

    csv_writer.flush()?;

    Ok(())
}
