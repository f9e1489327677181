use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use super::consts::*;
use super::describe::{day_of_the_week_name, join_words, month_name, ordinal};
use super::*;

#[test]
fn test_ordinal() {
    assert_eq!(ordinal(1), "1st");
    assert_eq!(ordinal(2), "2nd");
    assert_eq!(ordinal(3), "3rd");
    assert_eq!(ordinal(4), "4th");
    assert_eq!(ordinal(11), "11st");
    assert_eq!(ordinal(12), "12nd");
    assert_eq!(ordinal(13), "13rd");
    assert_eq!(ordinal(20), "20th");
    assert_eq!(ordinal(21), "21st");
    assert_eq!(ordinal(31), "31st");
}

#[test]
fn test_join_words() {
    assert_eq!(join_words::<&str>(&[]), "");
    assert_eq!(join_words(&["A"]), "A");
    assert_eq!(join_words(&["A", "B"]), "A and B");
    assert_eq!(join_words(&["A", "B", "C"]), "A, B and C");
    assert_eq!(join_words(&["A", "B", "C", "D"]), "A, B, C and D");
}

#[test]
fn test_names() {
    assert_eq!(day_of_the_week_name(DAY_OF_THE_WEEK_SUNDAY), "Sunday");
    assert_eq!(day_of_the_week_name(DAY_OF_THE_WEEK_SATURDAY), "Saturday");
    assert_eq!(day_of_the_week_name(0), "Unknown");
    assert_eq!(day_of_the_week_name(8), "Unknown");
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(13), "Unknown");
}

#[test]
fn test_describe_daily() {
    assert_eq!(describe(&RecurrenceRule::new(RecurrenceType::Daily, 0)), "Never");
    assert_eq!(describe(&RecurrenceRule::new(RecurrenceType::Daily, 1)), "Every day");
    assert_eq!(describe(&RecurrenceRule::new(RecurrenceType::Daily, 2)), "Every 2 days");
}

#[test]
fn test_describe_weekly() {
    assert_eq!(describe(&RecurrenceRule::new(RecurrenceType::Weekly, 1)), "Every week");
    assert_eq!(describe(&RecurrenceRule::new(RecurrenceType::Weekly, 3)), "Every 3 weeks");
    assert_eq!(
        describe(&RecurrenceRule::new(RecurrenceType::Weekly, 1).with_days_of_the_week(vec![1, 2, 4, 6])),
        "Every week on Sunday, Monday, Wednesday and Friday"
    );
    assert_eq!(
        describe(&RecurrenceRule::new(RecurrenceType::Weekly, 2).with_days_of_the_week(vec![3, 5, 7])),
        "Every 2 weeks on Tuesday, Thursday and Saturday"
    );
    assert_eq!(
        describe(&RecurrenceRule::new(RecurrenceType::Weekly, 1).with_days_of_the_week(vec![9])),
        "Every week on Unknown"
    );
}

#[test]
fn test_describe_monthly() {
    let monthly = RecurrenceRule::new(RecurrenceType::Monthly, 1);

    assert_eq!(describe(&monthly), "Every month");
    assert_eq!(describe(&RecurrenceRule::new(RecurrenceType::Monthly, 6)), "Every 6 months");
    assert_eq!(
        describe(&monthly.clone().with_days_of_the_month(vec![1, 16])),
        "Every month on the 1st and 16th"
    );
    assert_eq!(
        describe(&monthly.clone().with_days_of_the_month(vec![15, 31])),
        "Every month on the 15th and 31st"
    );
    assert_eq!(
        describe(
            &monthly
                .clone()
                .with_days_of_the_month(vec![10])
                .with_on_the(OnThe::new(DAY_OF_THE_WEEK_DAY, WEEK_NUMBER_SECOND))
        ),
        "Every month on the 2nd day"
    );
    assert_eq!(
        describe(&monthly.clone().with_on_the(OnThe::new(DAY_OF_THE_WEEK_WEEKDAY, WEEK_NUMBER_THIRD))),
        "Every month on the 3rd week day"
    );
    assert_eq!(
        describe(&monthly.clone().with_on_the(OnThe::new(DAY_OF_THE_WEEK_WEEKEND_DAY, WEEK_NUMBER_LAST))),
        "Every month on the last weekend day"
    );
    assert_eq!(
        describe(&monthly.clone().with_on_the(OnThe::new(DAY_OF_THE_WEEK_TUESDAY, WEEK_NUMBER_FOURTH))),
        "Every month on the 4th Tuesday"
    );
    // A week number without a day, and an unknown day, add nothing beyond the week.
    assert_eq!(
        describe(&monthly.clone().with_on_the(OnThe::new(DAY_OF_THE_WEEK_NONE, WEEK_NUMBER_FIRST))),
        "Every month on the 1st"
    );
    assert_eq!(
        describe(&monthly.with_on_the(OnThe::new(12, WEEK_NUMBER_NONE))),
        "Every month"
    );
}

#[test]
fn test_describe_yearly() {
    let yearly = RecurrenceRule::new(RecurrenceType::Yearly, 1);

    assert_eq!(describe(&yearly), "Every year");
    assert_eq!(describe(&RecurrenceRule::new(RecurrenceType::Yearly, 2)), "Every 2 years");
    assert_eq!(
        describe(&yearly.clone().with_months_of_the_year(vec![1, 7])),
        "Every year in January and July"
    );
    assert_eq!(
        describe(
            &yearly
                .clone()
                .with_months_of_the_year(vec![3, 4])
                .with_on_the(OnThe::new(DAY_OF_THE_WEEK_FRIDAY, WEEK_NUMBER_LAST))
        ),
        "Every year on the last Friday of March and April"
    );
    assert_eq!(
        describe(
            &yearly
                .clone()
                .with_months_of_the_year(vec![11])
                .with_on_the(OnThe::new(DAY_OF_THE_WEEK_WEEKDAY, WEEK_NUMBER_FIRST))
        ),
        "Every year on the 1st week day of November"
    );
    assert_eq!(
        describe(&yearly.with_on_the(OnThe::new(DAY_OF_THE_WEEK_DAY, WEEK_NUMBER_SECOND))),
        "Every year on the 2nd day"
    );
}

#[test]
fn test_describe_unknown_type() {
    assert_eq!(describe(&RecurrenceRule::new(RecurrenceType::Unknown(5), 1)), "Unknown");
    assert_eq!(
        describe(&RecurrenceRule::new(RecurrenceType::Unknown(5), 1).with_occurrence_count(2)),
        "Unknown, ending after 2 times"
    );
}

#[test]
fn test_describe_end_conditions() {
    let end_date = NaiveDate::from_ymd_opt(2018, 6, 2);

    assert_eq!(
        describe(&RecurrenceRule::new(RecurrenceType::Daily, 1).with_occurrence_count(11)),
        "Every day, ending after 11 times"
    );
    assert_eq!(
        describe(&RecurrenceRule::new(RecurrenceType::Daily, 1).with_occurrence_count(1)),
        "Every day, ending after 1 time"
    );
    assert_eq!(
        describe(&RecurrenceRule::new(RecurrenceType::Weekly, 1).with_end_date(end_date)),
        "Every week, ending on 2018-06-02"
    );
    // The occurrence count wins when both are set.
    assert_eq!(
        describe(
            &RecurrenceRule::new(RecurrenceType::Weekly, 1)
                .with_end_date(end_date)
                .with_occurrence_count(3)
        ),
        "Every week, ending after 3 times"
    );
}

#[test]
fn test_describe_fill() {
    let never = RecurrenceRule::new(RecurrenceType::Daily, 0);

    assert_eq!(describe(&never), "Never");
    assert_eq!(describe_fill(&never), "Every Event Date");
    assert_eq!(describe_fill(&RecurrenceRule::default()), "Every Event Date");
    assert_eq!(describe_fill(&RecurrenceRule::new(RecurrenceType::Daily, 1)), "Every day");
    assert_eq!(describe_fill(&RecurrenceRule::new(RecurrenceType::Weekly, 0)), "Every 0 weeks");
}

#[test]
fn test_describe_depends_on_value_only() {
    let a = RecurrenceRule::new(RecurrenceType::Monthly, 1)
        .with_primary_key(3)
        .with_days_of_the_month(vec![1, 16]);
    let b = a.clone().with_primary_key(21);

    assert_eq!(describe(&a), describe(&a));
    assert_eq!(describe(&a), describe(&b));
}
