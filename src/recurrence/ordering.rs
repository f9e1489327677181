//! Canonical order of rules in listings.
use std::cmp::Ordering;

use super::{RecurrenceRule, RecurrenceType};

/// Compares two sequences position by position. A proper prefix sorts first
/// and the first differing element decides otherwise. Returns `None` when the
/// sequences are identical so the caller can fall through to its next key.
///
/// Sequences are compared as stored: permutations of the same values are not
/// considered equal.
pub fn compare_sequences(a: &[i64], b: &[i64]) -> Option<Ordering> {
    match a.cmp(b) {
        Ordering::Equal => None,
        ordering => Some(ordering),
    }
}

/// Orders rules by type, then interval, then a type specific key, then
/// occurrence count and finally end date (no end date first).
///
/// Rules that differ only in fields this order ignores compare equal.
pub fn compare(a: &RecurrenceRule, b: &RecurrenceRule) -> Ordering {
    let ordering = a
        .recurrence_type
        .code()
        .cmp(&b.recurrence_type.code())
        .then(a.recurrence_interval.cmp(&b.recurrence_interval));
    if ordering.is_ne() {
        return ordering;
    }

    let tiebreak = match a.recurrence_type {
        RecurrenceType::Weekly => compare_sequences(&a.days_of_the_week, &b.days_of_the_week),
        RecurrenceType::Monthly => compare_sequences(&a.days_of_the_month, &b.days_of_the_month).or_else(|| {
            Some(a.on_the.day_of_the_week.cmp(&b.on_the.day_of_the_week)).filter(|ordering| ordering.is_ne())
        }),
        RecurrenceType::Yearly => compare_sequences(&a.months_of_the_year, &b.months_of_the_year),
        RecurrenceType::Daily | RecurrenceType::Unknown(_) => None,
    };
    if let Some(ordering) = tiebreak {
        return ordering;
    }

    a.occurrence_count
        .cmp(&b.occurrence_count)
        .then(a.end_date.cmp(&b.end_date))
}

/// Stable sort into canonical order.
pub fn sort_rules(rules: &mut [RecurrenceRule]) {
    rules.sort_by(compare);
}

/// Sorts rules and drops each rule equal to the one before it.
pub fn unique_rules(mut rules: Vec<RecurrenceRule>) -> Vec<RecurrenceRule> {
    sort_rules(&mut rules);
    rules.dedup();
    rules
}
