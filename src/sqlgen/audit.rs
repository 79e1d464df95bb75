//! Audit and data-quality query generation.
//!
//! These queries are plain ANSI constructs that all three engines accept
//! unchanged, so they bypass the per-dialect generators.

use crate::ops::Validation;

/// Count rows in a relation.
pub fn build_row_count(table: &str) -> String {
    format!("SELECT COUNT(*) AS row_count FROM {}", table)
}

/// Labeled row counts for two relations, union'd for side-by-side comparison.
pub fn build_compare_sizes(first: &str, second: &str) -> String {
    format!(
        "SELECT '{0}' AS relation, COUNT(*) AS row_count FROM {0} \
         UNION ALL \
         SELECT '{1}' AS relation, COUNT(*) AS row_count FROM {1}",
        first, second
    )
}

/// Failure-count query for one data-quality check. Zero failures means the
/// check passes.
pub fn build_data_quality(table: &str, column: &str, check: &Validation) -> String {
    match check {
        Validation::NotNull => format!(
            "SELECT COUNT(*) AS failures FROM {} WHERE {} IS NULL",
            table, column
        ),
        Validation::Unique => format!(
            "SELECT COUNT(*) AS failures FROM \
             (SELECT {col} FROM {table} GROUP BY {col} HAVING COUNT(*) > 1) AS duplicates",
            table = table,
            col = column
        ),
        Validation::AcceptedValues(values) => {
            let list = values
                .iter()
                .map(|v| format!("'{}'", v))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "SELECT COUNT(*) AS failures FROM {} WHERE {} NOT IN ({})",
                table, column, list
            )
        }
    }
}
