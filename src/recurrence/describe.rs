//! Renders rules the way the ledger application words them, e.g.
//! "Every month on the 1st and 16th" or "Every week, ending on 2018-06-02".
//!
//! Rendering never fails: values outside the known tables come out as
//! "Unknown".
use super::consts::*;
use super::{RecurrenceRule, RecurrenceType};

pub fn day_of_the_week_name(day: i64) -> &'static str {
    match day {
        DAY_OF_THE_WEEK_SUNDAY..=DAY_OF_THE_WEEK_SATURDAY => DAY_NAMES[(day - DAY_OF_THE_WEEK_SUNDAY) as usize],
        _ => UNKNOWN,
    }
}

pub fn month_name(month: i64) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => UNKNOWN,
    }
}

/// Suffixes a number by its last digit. Teens are not special cased, so 11
/// becomes "11st".
pub fn ordinal(n: i64) -> String {
    let suffix = match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Joins words with commas, except for the last two which are joined by "and".
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut joined = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            joined.push_str(if i == words.len() - 1 { " and " } else { ", " });
        }
        joined.push_str(word.as_ref());
    }
    joined
}

fn every(interval: i64, unit: &str) -> String {
    if interval == 1 {
        format!("Every {unit}")
    } else {
        format!("Every {interval} {unit}s")
    }
}

/// Appends " day", " week day", " weekend day" or a weekday name.
fn push_selected_day(s: &mut String, day_of_the_week: i64) {
    let day = match day_of_the_week {
        DAY_OF_THE_WEEK_DAY => "day",
        DAY_OF_THE_WEEK_WEEKDAY => "week day",
        DAY_OF_THE_WEEK_WEEKEND_DAY => "weekend day",
        DAY_OF_THE_WEEK_SUNDAY..=DAY_OF_THE_WEEK_SATURDAY => day_of_the_week_name(day_of_the_week),
        _ => return,
    };
    s.push(' ');
    s.push_str(day);
}

fn describe_weekly(rule: &RecurrenceRule) -> String {
    let mut s = every(rule.recurrence_interval, "week");

    if !rule.days_of_the_week.is_empty() {
        let days: Vec<&str> = rule.days_of_the_week.iter().map(|day| day_of_the_week_name(*day)).collect();
        s.push_str(" on ");
        s.push_str(&join_words(&days));
    }

    s
}

fn describe_monthly(rule: &RecurrenceRule) -> String {
    let mut s = every(rule.recurrence_interval, "month");

    match rule.on_the.week_number {
        WEEK_NUMBER_FIRST..=WEEK_NUMBER_FOURTH => {
            s.push_str(" on the ");
            s.push_str(&ordinal(rule.on_the.week_number));
        },
        WEEK_NUMBER_LAST => s.push_str(" on the last"),
        _ => {},
    }

    push_selected_day(&mut s, rule.on_the.day_of_the_week);

    if rule.on_the.day_of_the_week == DAY_OF_THE_WEEK_NONE && !rule.days_of_the_month.is_empty() {
        let days: Vec<String> = rule.days_of_the_month.iter().map(|day| ordinal(*day)).collect();
        s.push_str(" on the ");
        s.push_str(&join_words(&days));
    }

    s
}

fn describe_yearly(rule: &RecurrenceRule) -> String {
    let mut s = every(rule.recurrence_interval, "year");

    let week = match rule.on_the.week_number {
        WEEK_NUMBER_FIRST => " on the 1st",
        WEEK_NUMBER_SECOND => " on the 2nd",
        WEEK_NUMBER_THIRD => " on the 3rd",
        WEEK_NUMBER_FOURTH => " on the 4th",
        WEEK_NUMBER_LAST => " on the last",
        _ => "",
    };
    s.push_str(week);

    push_selected_day(&mut s, rule.on_the.day_of_the_week);

    if !rule.months_of_the_year.is_empty() {
        s.push_str(if rule.on_the.day_of_the_week == DAY_OF_THE_WEEK_NONE {
            " in "
        } else {
            " of "
        });

        let months: Vec<&str> = rule.months_of_the_year.iter().map(|month| month_name(*month)).collect();
        s.push_str(&join_words(&months));
    }

    s
}

/// Describes how often a rule repeats and when it stops.
pub fn describe(rule: &RecurrenceRule) -> String {
    let mut s = match rule.recurrence_type {
        RecurrenceType::Daily => match rule.recurrence_interval {
            0 => "Never".to_string(),
            interval => every(interval, "day"),
        },
        RecurrenceType::Weekly => describe_weekly(rule),
        RecurrenceType::Monthly => describe_monthly(rule),
        RecurrenceType::Yearly => describe_yearly(rule),
        RecurrenceType::Unknown(_) => UNKNOWN.to_string(),
    };

    if rule.occurrence_count > 0 {
        let plural = if rule.occurrence_count > 1 { "s" } else { "" };
        s.push_str(&format!(", ending after {} time{plural}", rule.occurrence_count));
    } else if let Some(end_date) = rule.end_date {
        s.push_str(&format!(", ending on {}", end_date.format("%Y-%m-%d")));
    }

    s
}

/// Describes a fill rule, the rule deciding when the next occurrence of a plan
/// event is generated. A daily rule with no interval fills on each event date.
pub fn describe_fill(rule: &RecurrenceRule) -> String {
    if rule.recurrence_type == RecurrenceType::Daily && rule.recurrence_interval == 0 {
        return "Every Event Date".to_string();
    }

    describe(rule)
}
