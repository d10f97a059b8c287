//! Quick filter and the per-column filter model.
//!
//! Two independent mechanisms, matching the grid they emulate:
//!
//! - the **quick filter** is one free-text query matched
//!   case-insensitively against every column's display text;
//! - the **filter model** is the structured per-column configuration
//!   (contains / numeric range / date range), kept separate so that
//!   "clear filters" can reset it without touching the search text.
//!
//! A row is visible when it passes both.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::api::types::RowData;
use crate::grid::columns::Column;

/// Check a row against the quick-filter query.
///
/// The query is trimmed and lowercased; an effectively empty query
/// matches everything. (The "no rows while the search box is empty" rule
/// lives in the view layer, not here.)
pub fn quick_filter_matches(row: &RowData, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    Column::ALL
        .iter()
        .any(|col| col.display(row).to_lowercase().contains(&needle))
}

/// A single column's filter configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFilter {
    /// Case-insensitive substring match against the cell text.
    Text { contains: String },
    /// Inclusive numeric range; either bound may be open.
    Number { min: Option<i64>, max: Option<i64> },
    /// Inclusive date range; either bound may be open.
    Date {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl ColumnFilter {
    /// Check a row's value in `column` against this filter.
    ///
    /// Rows with no value in a filtered numeric or date column fail the
    /// filter.
    pub fn matches(&self, column: Column, row: &RowData) -> bool {
        match self {
            ColumnFilter::Text { contains } => {
                let needle = contains.trim().to_lowercase();
                needle.is_empty() || column.display(row).to_lowercase().contains(&needle)
            }
            ColumnFilter::Number { min, max } => match column.number(row) {
                Some(value) => {
                    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
                }
                None => false,
            },
            ColumnFilter::Date { from, to } => match column.date(row) {
                Some(value) => {
                    from.map_or(true, |d| value >= d) && to.map_or(true, |d| value <= d)
                }
                None => false,
            },
        }
    }

    /// Whether this filter constrains anything at all.
    pub fn is_active(&self) -> bool {
        match self {
            ColumnFilter::Text { contains } => !contains.trim().is_empty(),
            ColumnFilter::Number { min, max } => min.is_some() || max.is_some(),
            ColumnFilter::Date { from, to } => from.is_some() || to.is_some(),
        }
    }
}

/// The structured per-column filter configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterModel {
    filters: BTreeMap<Column, ColumnFilter>,
}

impl FilterModel {
    /// Create an empty filter model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter for a column. A filter that constrains nothing is
    /// treated as a removal.
    pub fn set(&mut self, column: Column, filter: ColumnFilter) {
        if filter.is_active() {
            self.filters.insert(column, filter);
        } else {
            self.filters.remove(&column);
        }
    }

    /// Discard every per-column filter.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Whether any column filter is set.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// The number of active column filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// The filter for a column, if set.
    pub fn get(&self, column: Column) -> Option<&ColumnFilter> {
        self.filters.get(&column)
    }

    /// Check a row against every active column filter.
    pub fn matches(&self, row: &RowData) -> bool {
        self.filters
            .iter()
            .all(|(column, filter)| filter.matches(*column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(athlete: &str, age: Option<u32>, country: &str, year: u32, date: &str) -> RowData {
        RowData {
            athlete: athlete.to_string(),
            age,
            country: country.to_string(),
            year,
            date: date.to_string(),
            sport: "Swimming".to_string(),
            gold: 1,
            silver: 2,
            bronze: 0,
            total: 3,
        }
    }

    #[test]
    fn test_quick_filter_empty_matches_all() {
        let r = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        assert!(quick_filter_matches(&r, ""));
        assert!(quick_filter_matches(&r, "   "));
    }

    #[test]
    fn test_quick_filter_case_insensitive() {
        let r = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        assert!(quick_filter_matches(&r, "phelps"));
        assert!(quick_filter_matches(&r, "PHELPS"));
        assert!(quick_filter_matches(&r, "united"));
    }

    #[test]
    fn test_quick_filter_matches_any_column() {
        let r = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        // Year, medal counts, and date are all searchable text.
        assert!(quick_filter_matches(&r, "2008"));
        assert!(quick_filter_matches(&r, "swimming"));
        assert!(quick_filter_matches(&r, "24/08"));
        assert!(!quick_filter_matches(&r, "curling"));
    }

    #[test]
    fn test_quick_filter_trims_query() {
        let r = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        assert!(quick_filter_matches(&r, "  phelps  "));
    }

    #[test]
    fn test_text_filter_contains() {
        let r = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        let f = ColumnFilter::Text {
            contains: "helps".to_string(),
        };
        assert!(f.matches(Column::Athlete, &r));
        assert!(!f.matches(Column::Country, &r));
    }

    #[test]
    fn test_number_filter_inclusive_bounds() {
        let r = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        let f = ColumnFilter::Number {
            min: Some(23),
            max: Some(23),
        };
        assert!(f.matches(Column::Age, &r));

        let f = ColumnFilter::Number {
            min: Some(24),
            max: None,
        };
        assert!(!f.matches(Column::Age, &r));

        let f = ColumnFilter::Number {
            min: None,
            max: Some(22),
        };
        assert!(!f.matches(Column::Age, &r));
    }

    #[test]
    fn test_number_filter_missing_value_fails() {
        let r = row("Nemov", None, "Russia", 2000, "01/10/2000");
        let f = ColumnFilter::Number {
            min: Some(0),
            max: None,
        };
        assert!(!f.matches(Column::Age, &r));
    }

    #[test]
    fn test_date_filter_range() {
        let r = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        let f = ColumnFilter::Date {
            from: NaiveDate::from_ymd_opt(2008, 1, 1),
            to: NaiveDate::from_ymd_opt(2008, 12, 31),
        };
        assert!(f.matches(Column::Date, &r));

        let f = ColumnFilter::Date {
            from: NaiveDate::from_ymd_opt(2009, 1, 1),
            to: None,
        };
        assert!(!f.matches(Column::Date, &r));
    }

    #[test]
    fn test_date_filter_malformed_date_fails() {
        let r = row("Phelps", Some(23), "United States", 2008, "not-a-date");
        let f = ColumnFilter::Date {
            from: NaiveDate::from_ymd_opt(2000, 1, 1),
            to: None,
        };
        assert!(!f.matches(Column::Date, &r));
    }

    #[test]
    fn test_is_active() {
        assert!(!ColumnFilter::Text {
            contains: "  ".to_string()
        }
        .is_active());
        assert!(ColumnFilter::Text {
            contains: "x".to_string()
        }
        .is_active());
        assert!(!ColumnFilter::Number {
            min: None,
            max: None
        }
        .is_active());
        assert!(ColumnFilter::Date {
            from: NaiveDate::from_ymd_opt(2000, 1, 1),
            to: None
        }
        .is_active());
    }

    #[test]
    fn test_model_set_and_clear() {
        let mut model = FilterModel::new();
        assert!(model.is_empty());

        model.set(
            Column::Country,
            ColumnFilter::Text {
                contains: "united".to_string(),
            },
        );
        model.set(
            Column::Gold,
            ColumnFilter::Number {
                min: Some(1),
                max: None,
            },
        );
        assert_eq!(model.len(), 2);

        model.clear();
        assert!(model.is_empty());
    }

    #[test]
    fn test_model_inactive_filter_is_removed() {
        let mut model = FilterModel::new();
        model.set(
            Column::Athlete,
            ColumnFilter::Text {
                contains: "x".to_string(),
            },
        );
        assert_eq!(model.len(), 1);

        // Overwriting with an empty filter removes the entry.
        model.set(
            Column::Athlete,
            ColumnFilter::Text {
                contains: String::new(),
            },
        );
        assert!(model.is_empty());
    }

    #[test]
    fn test_model_matches_conjunction() {
        let mut model = FilterModel::new();
        model.set(
            Column::Country,
            ColumnFilter::Text {
                contains: "united".to_string(),
            },
        );
        model.set(
            Column::Year,
            ColumnFilter::Number {
                min: Some(2004),
                max: Some(2012),
            },
        );

        let hit = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        let wrong_year = row("Phelps", Some(19), "United States", 2000, "01/10/2000");
        let wrong_country = row("Nemov", Some(24), "Russia", 2008, "24/08/2008");

        assert!(model.matches(&hit));
        assert!(!model.matches(&wrong_year));
        assert!(!model.matches(&wrong_country));
    }

    #[test]
    fn test_empty_model_matches_everything() {
        let model = FilterModel::new();
        let r = row("Phelps", Some(23), "United States", 2008, "24/08/2008");
        assert!(model.matches(&r));
    }
}
