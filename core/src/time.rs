use chrono::NaiveDate;

use crate::service::period::Selection;

/// Parses the date part of a `call_date` such as `12/5/25`, `12-5-25` or
/// `12/5/25 14:03`. Two-digit years are taken as 20YY.
pub fn parse_call_date(call_date: &str) -> Option<NaiveDate> {
    let date_part = call_date.split_whitespace().next()?;
    let parts: Vec<&str> = date_part.split(['/', '-']).collect();
    if parts.len() != 3 {
        return None;
    }

    let month: u32 = parts[0].parse().ok()?;
    let day: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    let year = match parts[2].len() {
        1 | 2 => 2000 + year,
        4 => year,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Long label such as "Friday, 5 December 2025".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Label for the selected period. Falls back to the raw day key whenever the
/// first record's date cannot be read.
pub fn date_label(selection: &Selection, first_call_date: Option<&str>) -> String {
    match selection {
        Selection::AllDays => selection.label().to_string(),
        Selection::Day(key) => first_call_date
            .and_then(parse_call_date)
            .map(long_date)
            .unwrap_or_else(|| key.clone()),
    }
}
