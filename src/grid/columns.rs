//! Column definitions for the results grid.
//!
//! Each column binds one [`RowData`] field to a title, a filter kind
//! chosen per value kind, and value accessors used by the filter engine
//! and the table renderer.

use chrono::NaiveDate;

use crate::api::types::RowData;

/// Minimum column width in terminal cells. Resizing clamps here.
pub const MIN_COLUMN_WIDTH: u16 = 5;

/// The kind of filter a column supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring match.
    Text,
    /// Inclusive numeric range.
    Number,
    /// Inclusive date range.
    Date,
}

/// A column of the results grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Athlete,
    Age,
    Country,
    Year,
    Date,
    Sport,
    Gold,
    Silver,
    Bronze,
    Total,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 10] = [
        Column::Athlete,
        Column::Age,
        Column::Country,
        Column::Year,
        Column::Date,
        Column::Sport,
        Column::Gold,
        Column::Silver,
        Column::Bronze,
        Column::Total,
    ];

    /// The header title.
    pub fn title(&self) -> &'static str {
        match self {
            Column::Athlete => "Athlete",
            Column::Age => "Age",
            Column::Country => "Country",
            Column::Year => "Year",
            Column::Date => "Date",
            Column::Sport => "Sport",
            Column::Gold => "Gold",
            Column::Silver => "Silver",
            Column::Bronze => "Bronze",
            Column::Total => "Total",
        }
    }

    /// The filter kind: text columns get substring filters, integer
    /// columns get range filters, the date column gets a date filter.
    pub fn filter_kind(&self) -> FilterKind {
        match self {
            Column::Athlete | Column::Country | Column::Sport => FilterKind::Text,
            Column::Date => FilterKind::Date,
            Column::Age
            | Column::Year
            | Column::Gold
            | Column::Silver
            | Column::Bronze
            | Column::Total => FilterKind::Number,
        }
    }

    /// The cell text for a row, as rendered and as matched by the quick
    /// filter.
    pub fn display(&self, row: &RowData) -> String {
        match self {
            Column::Athlete => row.athlete.clone(),
            Column::Age => row.age_display(),
            Column::Country => row.country.clone(),
            Column::Year => row.year.to_string(),
            Column::Date => row.date.clone(),
            Column::Sport => row.sport.clone(),
            Column::Gold => row.gold.to_string(),
            Column::Silver => row.silver.to_string(),
            Column::Bronze => row.bronze.to_string(),
            Column::Total => row.total.to_string(),
        }
    }

    /// The numeric value for a row, for columns with a number filter.
    pub fn number(&self, row: &RowData) -> Option<i64> {
        match self {
            Column::Age => row.age.map(i64::from),
            Column::Year => Some(i64::from(row.year)),
            Column::Gold => Some(i64::from(row.gold)),
            Column::Silver => Some(i64::from(row.silver)),
            Column::Bronze => Some(i64::from(row.bronze)),
            Column::Total => Some(i64::from(row.total)),
            _ => None,
        }
    }

    /// The parsed date for a row, for the date column.
    pub fn date(&self, row: &RowData) -> Option<NaiveDate> {
        match self {
            Column::Date => row.parsed_date(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> RowData {
        RowData {
            athlete: "Michael Phelps".to_string(),
            age: Some(23),
            country: "United States".to_string(),
            year: 2008,
            date: "24/08/2008".to_string(),
            sport: "Swimming".to_string(),
            gold: 8,
            silver: 0,
            bronze: 0,
            total: 8,
        }
    }

    #[test]
    fn test_ten_columns() {
        assert_eq!(Column::ALL.len(), 10);
    }

    #[test]
    fn test_filter_kinds_per_value_kind() {
        assert_eq!(Column::Athlete.filter_kind(), FilterKind::Text);
        assert_eq!(Column::Country.filter_kind(), FilterKind::Text);
        assert_eq!(Column::Sport.filter_kind(), FilterKind::Text);
        assert_eq!(Column::Date.filter_kind(), FilterKind::Date);
        for col in [
            Column::Age,
            Column::Year,
            Column::Gold,
            Column::Silver,
            Column::Bronze,
            Column::Total,
        ] {
            assert_eq!(col.filter_kind(), FilterKind::Number);
        }
    }

    #[test]
    fn test_display_values() {
        let row = sample_row();
        assert_eq!(Column::Athlete.display(&row), "Michael Phelps");
        assert_eq!(Column::Age.display(&row), "23");
        assert_eq!(Column::Year.display(&row), "2008");
        assert_eq!(Column::Gold.display(&row), "8");
        assert_eq!(Column::Date.display(&row), "24/08/2008");
    }

    #[test]
    fn test_display_missing_age_is_empty() {
        let mut row = sample_row();
        row.age = None;
        assert_eq!(Column::Age.display(&row), "");
    }

    #[test]
    fn test_number_accessor() {
        let row = sample_row();
        assert_eq!(Column::Age.number(&row), Some(23));
        assert_eq!(Column::Total.number(&row), Some(8));
        assert_eq!(Column::Athlete.number(&row), None);
        assert_eq!(Column::Date.number(&row), None);
    }

    #[test]
    fn test_date_accessor() {
        let row = sample_row();
        assert!(Column::Date.date(&row).is_some());
        assert!(Column::Year.date(&row).is_none());
    }
}
