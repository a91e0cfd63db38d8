use chrono::{DateTime, NaiveDate, Utc};

/// First instant of `year` in UTC (Jan 1, 00:00:00.000).
pub fn year_start(year: i32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Last represented instant of `year` in UTC (Dec 31, 23:59:59.999).
/// Millisecond precision matches the persisted timestamp resolution; the
/// range check is inclusive on both ends.
pub fn year_end(year: i32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .unwrap()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap()
        .and_utc()
}

/// English long-form month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("chrono months are 1-12"),
    }
}

/// Column key for a year in monthly/radar rows, e.g. `year_2023`.
pub fn year_key(year: i32) -> String {
    format!("year_{}", year)
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
