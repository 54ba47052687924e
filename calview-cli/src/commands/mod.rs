pub mod config;
pub mod delete;
pub mod edit;
pub mod new;
pub mod next;
pub mod show;

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Parse YYYY-MM-DDTHH:MM (a space instead of `T` is accepted too)
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| anyhow!("Invalid date/time '{}'. Expected YYYY-MM-DDTHH:MM", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2024").is_err());
    }

    #[test]
    fn parses_datetimes_with_t_or_space() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parse_datetime("2024-01-01T10:30").unwrap(), expected);
        assert_eq!(parse_datetime("2024-01-01 10:30").unwrap(), expected);
        assert_eq!(parse_datetime("2024-01-01T10:30:00").unwrap(), expected);
        assert!(parse_datetime("2024-01-01").is_err());
    }
}
