//! Result row types for the Olympic winners dataset.
//!
//! The dataset is a flat JSON array of result rows. Every field is present
//! in the feed except `age`, which is null for a handful of historical
//! records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the feed's `date` field (e.g. `24/08/2008`).
const DATE_FORMAT: &str = "%d/%m/%Y";

/// One Olympic result row.
///
/// Rows are immutable once loaded; the full set lives in memory for the
/// lifetime of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowData {
    /// The athlete's name.
    pub athlete: String,
    /// The athlete's age at the time, absent for some old records.
    #[serde(default)]
    pub age: Option<u32>,
    /// The country the athlete competed for.
    pub country: String,
    /// The year of the games.
    pub year: u32,
    /// The event date as `dd/mm/yyyy`.
    pub date: String,
    /// The sport.
    pub sport: String,
    /// Gold medals won.
    pub gold: u32,
    /// Silver medals won.
    pub silver: u32,
    /// Bronze medals won.
    pub bronze: u32,
    /// Total medals won.
    pub total: u32,
}

impl RowData {
    /// The age as display text, empty when the feed had no value.
    pub fn age_display(&self) -> String {
        self.age.map(|a| a.to_string()).unwrap_or_default()
    }

    /// Parse the `date` field, if it is well-formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"[
        {
            "athlete": "Michael Phelps",
            "age": 23,
            "country": "United States",
            "year": 2008,
            "date": "24/08/2008",
            "sport": "Swimming",
            "gold": 8,
            "silver": 0,
            "bronze": 0,
            "total": 8
        },
        {
            "athlete": "Aleksey Nemov",
            "age": null,
            "country": "Russia",
            "year": 2000,
            "date": "01/10/2000",
            "sport": "Gymnastics",
            "gold": 2,
            "silver": 1,
            "bronze": 3,
            "total": 6
        }
    ]"#;

    #[test]
    fn test_deserialize_rows() {
        let rows: Vec<RowData> = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].athlete, "Michael Phelps");
        assert_eq!(rows[0].age, Some(23));
        assert_eq!(rows[0].gold, 8);
        assert_eq!(rows[1].country, "Russia");
    }

    #[test]
    fn test_null_age_tolerated() {
        let rows: Vec<RowData> = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(rows[1].age, None);
        assert_eq!(rows[1].age_display(), "");
    }

    #[test]
    fn test_age_display() {
        let rows: Vec<RowData> = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(rows[0].age_display(), "23");
    }

    #[test]
    fn test_parsed_date() {
        let rows: Vec<RowData> = serde_json::from_str(SAMPLE_JSON).unwrap();
        let date = rows[0].parsed_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2008, 8, 24).unwrap());
    }

    #[test]
    fn test_parsed_date_malformed() {
        let mut rows: Vec<RowData> = serde_json::from_str(SAMPLE_JSON).unwrap();
        rows[0].date = "2008-08-24".to_string();
        assert!(rows[0].parsed_date().is_none());
    }

    #[test]
    fn test_round_trip_preserves_null_age() {
        let rows: Vec<RowData> = serde_json::from_str(SAMPLE_JSON).unwrap();
        let json = serde_json::to_string(&rows[1]).unwrap();
        let back: RowData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.age, None);
    }
}
