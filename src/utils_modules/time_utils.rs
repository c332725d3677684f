use crate::common::*;

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

pub const MONTH_ABBRS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/* Monday first, matching `day_num` */
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[doc = "Full month name for a 1-based month number"]
pub fn month_name(month_num: u32) -> &'static str {
    MONTH_NAMES
        .get(month_num.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

#[doc = "Three-letter month abbreviation for a 1-based month number"]
pub fn month_abbr(month_num: u32) -> &'static str {
    MONTH_ABBRS
        .get(month_num.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

#[doc = "Weekday name for a Monday=0 day number"]
pub fn weekday_name(day_num: u32) -> &'static str {
    WEEKDAY_NAMES.get(day_num as usize).copied().unwrap_or("")
}

#[doc = "Monday=0 ... Sunday=6"]
pub fn day_num_of(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}
