//! String-keyed entry point for templating hosts.
//!
//! The host hands over an operation name, the active dialect from its
//! connection configuration, positional text arguments, and optional keyword
//! defaults. All name, dialect, and arity validation happens here; the typed
//! layer underneath is infallible.

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::dialect::Dialect;
use crate::error::{SqlfragError, SqlfragResult};
use crate::ops::{
    DEFAULT_DATE_FORMAT, DEFAULT_FISCAL_START_MONTH, DEFAULT_INTERVAL, MaskType, Op, Validation,
};
use crate::sqlgen::ToSql;

/// Optional keyword arguments with per-operation defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kwargs {
    /// Date format for format_date. Defaults to `YYYY-MM-DD`.
    pub format: Option<String>,
    /// Series step for date_range. Defaults to `1 day`.
    pub interval: Option<String>,
    /// Fiscal-year start month (1-12) for fiscal_year_start. Defaults to 7.
    pub fiscal_start_month: Option<u32>,
    /// Mask mode for mask_sensitive_data. Defaults to `email`.
    pub mask_type: Option<String>,
    /// Allow-list for the accepted_values validation. Required for that
    /// validation; there is no default list.
    pub accepted_values: Option<Vec<String>>,
}

/// Resolve one operation request to SQL text.
///
/// Stateless: identical inputs always produce byte-identical output.
pub fn resolve(
    operation: &str,
    dialect: &str,
    args: &[&str],
    kwargs: &Kwargs,
) -> SqlfragResult<String> {
    Resolver::new(dialect).resolve(operation, args, kwargs)
}

/// Host-configured resolver: a dialect name plus an optional mapping from
/// logical table names to fully-qualified physical identifiers.
pub struct Resolver {
    dialect: String,
    namer: Option<Box<dyn Fn(&str) -> String + Send + Sync>>,
}

impl Resolver {
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            namer: None,
        }
    }

    /// Install the host's logical-to-physical table-name mapping. Applied to
    /// the table arguments of audit operations; column tokens stay verbatim.
    pub fn with_namer(mut self, namer: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.namer = Some(Box::new(namer));
        self
    }

    pub fn resolve(&self, operation: &str, args: &[&str], kwargs: &Kwargs) -> SqlfragResult<String> {
        let dialect = Dialect::from_name(&self.dialect)
            .ok_or_else(|| SqlfragError::unsupported_dialect(&self.dialect, operation))?;
        let op = self.build_op(operation, args, kwargs)?;
        Ok(op.to_sql_with_dialect(dialect))
    }

    fn table(&self, name: &str) -> String {
        match &self.namer {
            Some(namer) => namer(name),
            None => name.to_string(),
        }
    }

    fn build_op(&self, operation: &str, args: &[&str], kwargs: &Kwargs) -> SqlfragResult<Op> {
        // Operation names arrive hyphenated from some hosts.
        let name = operation.replace('-', "_");
        match name.as_str() {
            "format_date" => {
                let args = need(&name, args, 1)?;
                Ok(Op::FormatDate {
                    column: args[0].to_string(),
                    format: args
                        .get(1)
                        .map(|s| s.to_string())
                        .or_else(|| kwargs.format.clone())
                        .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
                })
            }
            "date_range" | "generate_date_range" => {
                let args = need(&name, args, 2)?;
                Ok(Op::DateRange {
                    start: args[0].to_string(),
                    end: args[1].to_string(),
                    interval: args
                        .get(2)
                        .map(|s| s.to_string())
                        .or_else(|| kwargs.interval.clone())
                        .unwrap_or_else(|| DEFAULT_INTERVAL.to_string()),
                })
            }
            "business_day" | "business_day_check" => {
                let args = need(&name, args, 1)?;
                Ok(Op::BusinessDay {
                    column: args[0].to_string(),
                })
            }
            "fiscal_year_start" => {
                let args = need(&name, args, 1)?;
                Ok(Op::FiscalYearStart {
                    column: args[0].to_string(),
                    start_month: kwargs
                        .fiscal_start_month
                        .unwrap_or(DEFAULT_FISCAL_START_MONTH),
                })
            }
            "clean_string" => {
                let args = need(&name, args, 1)?;
                Ok(Op::CleanString {
                    column: args[0].to_string(),
                })
            }
            "extract_email_domain" => {
                let args = need(&name, args, 1)?;
                Ok(Op::ExtractEmailDomain {
                    column: args[0].to_string(),
                })
            }
            "mask_sensitive_data" => {
                let args = need(&name, args, 1)?;
                let mask = args
                    .get(1)
                    .map(|s| s.to_string())
                    .or_else(|| kwargs.mask_type.clone())
                    .unwrap_or_else(|| "email".to_string());
                Ok(Op::MaskSensitive {
                    column: args[0].to_string(),
                    mask: MaskType::from_name(&mask),
                })
            }
            "validate_email" => {
                let args = need(&name, args, 1)?;
                Ok(Op::ValidateEmail {
                    column: args[0].to_string(),
                })
            }
            "validate_data_quality" => {
                let args = need(&name, args, 3)?;
                Ok(Op::DataQuality {
                    table: self.table(args[0]),
                    column: args[1].to_string(),
                    check: Validation::from_name(args[2], kwargs.accepted_values.clone())?,
                })
            }
            "row_count" => {
                let args = need(&name, args, 1)?;
                Ok(Op::RowCount {
                    table: self.table(args[0]),
                })
            }
            "compare_sizes" => {
                let args = need(&name, args, 2)?;
                Ok(Op::CompareSizes {
                    first: self.table(args[0]),
                    second: self.table(args[1]),
                })
            }
            other => Err(SqlfragError::unknown_operation(
                operation,
                did_you_mean(other, &Op::NAMES),
            )),
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("dialect", &self.dialect)
            .field("namer", &self.namer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

fn need<'a>(operation: &str, args: &'a [&'a str], expected: usize) -> SqlfragResult<&'a [&'a str]> {
    if args.len() < expected {
        return Err(SqlfragError::MissingArgument {
            operation: operation.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(args)
}

/// Find the closest operation name within a length-scaled edit distance.
fn did_you_mean(input: &str, candidates: &[&str]) -> Option<String> {
    let mut best_match = None;
    let mut min_dist = usize::MAX;

    for cand in candidates {
        let dist = levenshtein(input, cand);
        let threshold = match input.len() {
            0..=2 => 0,
            3..=5 => 2,
            _ => 3,
        };
        if dist <= threshold && dist < min_dist {
            min_dist = dist;
            best_match = Some(cand.to_string());
        }
    }

    best_match
}
