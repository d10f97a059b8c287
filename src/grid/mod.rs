//! The grid engine: column definitions, the quick filter, the per-column
//! filter model, and client-side pagination.
//!
//! The UI layer binds this engine to a ratatui table; nothing in here
//! renders.

pub mod columns;
pub mod filter;
pub mod pagination;

pub use columns::{Column, FilterKind, MIN_COLUMN_WIDTH};
pub use filter::{quick_filter_matches, ColumnFilter, FilterModel};
pub use pagination::{Paginator, DEFAULT_PAGE_SIZE};
