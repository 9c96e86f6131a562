use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const INVALID_DATE: &str = "Invalid Date";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// Render a timestamp as e.g. `Jan 15, 2024, 02:30 PM`, or `Invalid Date`.
pub fn format_date(date_string: &str) -> String {
    match parse_local(date_string.trim()) {
        Some(datetime) => datetime.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_local(input: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.with_timezone(&Local).naive_local());
    }

    if let Some(utc) = input.strip_suffix(['Z', 'z']) {
        let datetime = parse_naive(utc)?;
        return Some(utc_to_local(datetime));
    }

    if let Some(datetime) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(input, format).ok())
    {
        return Some(datetime.with_timezone(&Local).naive_local());
    }

    // no offset given: wall-clock time
    if let Some(datetime) = parse_naive(input) {
        return Some(datetime);
    }

    // date-only forms are UTC midnight
    parse_date(input).map(|date| utc_to_local(date.and_time(NaiveTime::MIN)))
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`; missing fields default to the first.
fn parse_date(input: &str) -> Option<NaiveDate> {
    let full = match input.len() {
        4 if input.bytes().all(|b| b.is_ascii_digit()) => format!("{input}-01-01"),
        7 => format!("{input}-01"),
        10 => input.to_owned(),
        _ => return None,
    };
    NaiveDate::parse_from_str(&full, "%Y-%m-%d").ok()
}

fn utc_to_local(datetime: NaiveDateTime) -> NaiveDateTime {
    Utc.from_utc_datetime(&datetime)
        .with_timezone(&Local)
        .naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon() {
        let formatted = format_date("2024-01-15T14:30:00");
        assert_eq!(formatted, "Jan 15, 2024, 02:30 PM");
        assert!(formatted.contains("Jan") && formatted.contains("15") && formatted.contains("2024"));
    }

    #[test]
    fn space_separated_without_seconds() {
        assert_eq!(format_date("2023-11-03 09:05"), "Nov 3, 2023, 09:05 AM");
    }

    #[test]
    fn fractional_seconds() {
        assert_eq!(
            format_date("2024-06-30T00:07:59.123"),
            "Jun 30, 2024, 12:07 AM"
        );
    }

    #[test]
    fn offset_is_converted_to_local() {
        let formatted = format_date("2024-07-15T12:00:00Z");
        assert!(formatted.starts_with("Jul 1"), "{formatted}");
        assert!(formatted.contains("2024"));
    }

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> String {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string()
    }

    #[test]
    fn utc_designator_without_seconds() {
        assert_eq!(format_date("2024-01-15T14:30Z"), local(2024, 1, 15, 14, 30));
        assert_eq!(
            format_date("2024-01-15T14:30:00.000Z"),
            local(2024, 1, 15, 14, 30)
        );
    }

    #[test]
    fn numeric_offsets() {
        assert_eq!(
            format_date("2024-01-15T14:30:00+0100"),
            local(2024, 1, 15, 13, 30)
        );
        assert_eq!(
            format_date("2024-01-15T14:30-05:00"),
            local(2024, 1, 15, 19, 30)
        );
    }

    #[test]
    fn partial_dates_are_utc() {
        assert_eq!(format_date("2024-01-15"), local(2024, 1, 15, 0, 0));
        assert_eq!(format_date("2024-01"), local(2024, 1, 1, 0, 0));
        assert_eq!(format_date("2024"), local(2024, 1, 1, 0, 0));
    }

    #[test]
    fn invalid() {
        assert_eq!(format_date("24"), "Invalid Date");
        assert_eq!(format_date("2024-1x"), "Invalid Date");
        assert_eq!(format_date("not a date"), "Invalid Date");
        assert_eq!(format_date(""), "Invalid Date");
        assert_eq!(format_date("2024-13-45T10:00:00"), "Invalid Date");
    }
}
