//! Typed operation requests.
//!
//! Each supported operation is one variant of [`Op`]; dialect dispatch over
//! the variants is exhaustive at compile time. Caller-supplied tokens are
//! trusted developer-authored column and table references, carried verbatim.

use crate::error::{SqlfragError, SqlfragResult};

/// Date format applied when the caller omits one.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

/// Series step applied when date_range gets no interval.
pub const DEFAULT_INTERVAL: &str = "1 day";

/// Fiscal-year start month applied when the caller omits one (July).
pub const DEFAULT_FISCAL_START_MONTH: u32 = 7;

/// How mask_sensitive_data obscures a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskType {
    Email,
    Phone,
    /// Unrecognized mask types render the column untouched, so a
    /// misconfigured model keeps compiling instead of failing the pipeline.
    Other(String),
}

impl MaskType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "email" => Self::Email,
            "phone" => Self::Phone,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Data-quality check mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Count rows where the column is null.
    NotNull,
    /// Count values that occur more than once.
    Unique,
    /// Count rows whose value falls outside the allow-list. The list is
    /// always caller-supplied; there is no default.
    AcceptedValues(Vec<String>),
}

impl Validation {
    /// Parse a validation mode name, attaching the allow-list where one is
    /// required.
    pub fn from_name(name: &str, accepted: Option<Vec<String>>) -> SqlfragResult<Self> {
        match name {
            "not_null" => Ok(Self::NotNull),
            "unique" => Ok(Self::Unique),
            "accepted_values" => match accepted {
                Some(values) => Ok(Self::AcceptedValues(values)),
                None => Err(SqlfragError::MissingAcceptedValues),
            },
            other => Err(SqlfragError::UnsupportedValidationType(other.to_string())),
        }
    }
}

/// A single fragment request.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Render a date column as text in the given format.
    FormatDate { column: String, format: String },
    /// Generate a series of dates between two bounds as a `date_day` column.
    DateRange {
        start: String,
        end: String,
        interval: String,
    },
    /// Filter expression that is true Monday through Friday.
    BusinessDay { column: String },
    /// Start date of the fiscal year containing the column's date.
    FiscalYearStart { column: String, start_month: u32 },
    /// Collapse whitespace runs to a single space and trim both ends.
    CleanString { column: String },
    /// Substring after the first '@'.
    ExtractEmailDomain { column: String },
    /// Obscure a sensitive column according to the mask type.
    MaskSensitive { column: String, mask: MaskType },
    /// Pattern-match the column against an RFC-loose email shape.
    ValidateEmail { column: String },
    /// Failure-count query for one data-quality check.
    DataQuality {
        table: String,
        column: String,
        check: Validation,
    },
    /// Count rows in a relation.
    RowCount { table: String },
    /// Labeled row counts for two relations, side by side.
    CompareSizes { first: String, second: String },
}

impl Op {
    /// Canonical operation names accepted by the stringly entry point.
    pub const NAMES: [&'static str; 11] = [
        "format_date",
        "date_range",
        "business_day",
        "fiscal_year_start",
        "clean_string",
        "extract_email_domain",
        "mask_sensitive_data",
        "validate_email",
        "validate_data_quality",
        "row_count",
        "compare_sizes",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Op::FormatDate { .. } => "format_date",
            Op::DateRange { .. } => "date_range",
            Op::BusinessDay { .. } => "business_day",
            Op::FiscalYearStart { .. } => "fiscal_year_start",
            Op::CleanString { .. } => "clean_string",
            Op::ExtractEmailDomain { .. } => "extract_email_domain",
            Op::MaskSensitive { .. } => "mask_sensitive_data",
            Op::ValidateEmail { .. } => "validate_email",
            Op::DataQuality { .. } => "validate_data_quality",
            Op::RowCount { .. } => "row_count",
            Op::CompareSizes { .. } => "compare_sizes",
        }
    }
}
