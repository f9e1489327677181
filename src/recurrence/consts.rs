pub const RECURRENCE_TYPE_DAILY: i64 = 0;
pub const RECURRENCE_TYPE_WEEKLY: i64 = 1;
pub const RECURRENCE_TYPE_MONTHLY: i64 = 2;
pub const RECURRENCE_TYPE_YEARLY: i64 = 3;

pub const WEEK_NUMBER_NONE: i64 = 0;
pub const WEEK_NUMBER_FIRST: i64 = 1;
pub const WEEK_NUMBER_SECOND: i64 = 2;
pub const WEEK_NUMBER_THIRD: i64 = 3;
pub const WEEK_NUMBER_FOURTH: i64 = 4;
pub const WEEK_NUMBER_LAST: i64 = -1;

pub const DAY_OF_THE_WEEK_NONE: i64 = 0;
pub const DAY_OF_THE_WEEK_SUNDAY: i64 = 1;
pub const DAY_OF_THE_WEEK_MONDAY: i64 = 2;
pub const DAY_OF_THE_WEEK_TUESDAY: i64 = 3;
pub const DAY_OF_THE_WEEK_WEDNESDAY: i64 = 4;
pub const DAY_OF_THE_WEEK_THURSDAY: i64 = 5;
pub const DAY_OF_THE_WEEK_FRIDAY: i64 = 6;
pub const DAY_OF_THE_WEEK_SATURDAY: i64 = 7;
/// "day" in "the 2nd day".
pub const DAY_OF_THE_WEEK_DAY: i64 = -1;
/// "week day" in "the 3rd week day".
pub const DAY_OF_THE_WEEK_WEEKDAY: i64 = -2;
/// "weekend day" in "the last weekend day".
pub const DAY_OF_THE_WEEK_WEEKEND_DAY: i64 = -3;

/// Class reference tagging the selector object inside an archive.
pub const SELECTOR_CLASS_UID: u64 = 2;

/// Day names indexed by `day - DAY_OF_THE_WEEK_SUNDAY`.
pub const DAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Month names indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const UNKNOWN: &str = "Unknown";
