use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Format a date the way the catalogue expects it on the wire.
pub fn wire_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse user-facing date inputs:
/// - "YYYY-MM-DD"
/// - "YYYYMMDD"
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(d);
    }

    if trimmed.len() == 8 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = trimmed[0..4]
            .parse()
            .map_err(|_| Error::InvalidQuery(format!("invalid YYYYMMDD date: {trimmed}")))?;
        let month: u32 = trimmed[4..6]
            .parse()
            .map_err(|_| Error::InvalidQuery(format!("invalid YYYYMMDD date: {trimmed}")))?;
        let day: u32 = trimmed[6..8]
            .parse()
            .map_err(|_| Error::InvalidQuery(format!("invalid YYYYMMDD date: {trimmed}")))?;
        return NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| Error::InvalidQuery(format!("invalid date components: {trimmed}")));
    }

    Err(Error::InvalidQuery(format!(
        "unsupported date format: {trimmed}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dashed_dates() {
        assert_eq!(
            parse_date("2023-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
    }

    #[test]
    fn parses_compact_dates() {
        assert_eq!(
            parse_date("20230601").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("june 1st").is_err());
        assert!(parse_date("20231345").is_err());
    }

    #[test]
    fn wire_format_is_dashed() {
        let d = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert_eq!(wire_date(&d), "2023-06-01");
    }
}
