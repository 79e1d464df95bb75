//! SQL fragment generation for typed operation requests.
//!
//! Converts [`Op`] values into dialect-correct SQL strings.

pub mod audit;
pub mod bigquery;
pub mod postgres;
pub mod snowflake;
pub mod traits;


use crate::dialect::Dialect;
use crate::ops::{MaskType, Op};
pub use traits::{EMAIL_PATTERN, SqlGenerator};

/// Trait for rendering requests to SQL text.
pub trait ToSql {
    /// Render using the default dialect.
    fn to_sql(&self) -> String {
        self.to_sql_with_dialect(Dialect::default())
    }
    /// Render for a specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> String;
}

impl ToSql for Op {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> String {
        let g = dialect.generator();
        match self {
            Op::FormatDate { column, format } => g.format_date(column, format),
            Op::DateRange {
                start,
                end,
                interval,
            } => g.date_range(start, end, interval),
            Op::BusinessDay { column } => g.business_day_filter(column),
            Op::FiscalYearStart {
                column,
                start_month,
            } => g.fiscal_year_start(column, *start_month),
            Op::CleanString { column } => g.clean_string(column),
            Op::ExtractEmailDomain { column } => g.email_domain(column),
            Op::MaskSensitive { column, mask } => match mask {
                MaskType::Email => g.mask_email(column),
                MaskType::Phone => g.mask_phone(column),
                // Pass-through, not an error.
                MaskType::Other(_) => column.clone(),
            },
            Op::ValidateEmail { column } => g.validate_email(column),
            Op::DataQuality {
                table,
                column,
                check,
            } => audit::build_data_quality(table, column, check),
            Op::RowCount { table } => audit::build_row_count(table),
            Op::CompareSizes { first, second } => audit::build_compare_sizes(first, second),
        }
    }
}
