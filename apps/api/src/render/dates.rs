//! Display formatting for stored ISO dates. Dates are persisted as
//! `YYYY-MM-DD` strings and are never shown in that raw form: work experience
//! and projects display month/year, education displays year only. An entry
//! with no end date is ongoing.

use chrono::NaiveDate;

/// Marker shown in place of a missing end date.
pub const ONGOING: &str = "Hiện tại";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    MonthYear,
    Year,
}

/// Formats one stored date for display. A value that does not parse as an ISO
/// date is shown as-is rather than failing the render.
pub fn format_display(raw: &str, style: DateStyle) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => match style {
            DateStyle::MonthYear => date.format("%m/%Y").to_string(),
            DateStyle::Year => date.format("%Y").to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

/// Formats a date range for display.
///
/// Both absent yields nothing; a present start with no end is ongoing, never a
/// blank range.
pub fn format_range(
    start: Option<&str>,
    end: Option<&str>,
    style: DateStyle,
) -> Option<String> {
    match (start, end) {
        (None, None) => None,
        (Some(start), Some(end)) => Some(format!(
            "{} - {}",
            format_display(start, style),
            format_display(end, style)
        )),
        (Some(start), None) => Some(format!("{} - {}", format_display(start, style), ONGOING)),
        (None, Some(end)) => Some(format_display(end, style)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_formatting() {
        assert_eq!(format_display("2021-01-01", DateStyle::MonthYear), "01/2021");
    }

    #[test]
    fn test_year_formatting() {
        assert_eq!(format_display("2018-05-31", DateStyle::Year), "2018");
    }

    #[test]
    fn test_unparseable_value_falls_back_to_raw() {
        assert_eq!(format_display("mùa thu 2019", DateStyle::Year), "mùa thu 2019");
    }

    #[test]
    fn test_missing_end_date_is_ongoing() {
        assert_eq!(
            format_range(Some("2021-01-01"), None, DateStyle::MonthYear).as_deref(),
            Some("01/2021 - Hiện tại")
        );
    }

    #[test]
    fn test_full_range() {
        assert_eq!(
            format_range(
                Some("2014-09-01"),
                Some("2018-05-31"),
                DateStyle::Year
            )
            .as_deref(),
            Some("2014 - 2018")
        );
    }

    #[test]
    fn test_no_dates_renders_nothing() {
        assert_eq!(format_range(None, None, DateStyle::MonthYear), None);
    }

    #[test]
    fn test_end_only_is_shown_alone() {
        assert_eq!(
            format_range(None, Some("2018-03-15"), DateStyle::Year).as_deref(),
            Some("2018")
        );
    }
}
