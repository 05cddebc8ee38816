//! Raw-SQL query modules, one per table.

pub mod feature_rows;
pub mod lag_stats;
