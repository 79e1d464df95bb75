//! Dialect syntax seams.

/// RFC-loose email shape shared by all dialects. Intentionally not
/// RFC-complete; it matches the common `local@domain.tld` case.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Trait for dialect-specific SQL fragment generation.
///
/// One method per place where the three engines diverge. Column, bound, and
/// format tokens are substituted verbatim: they are developer-authored
/// identifiers and literals, not end-user data, so no escaping is applied.
pub trait SqlGenerator {
    /// Native date-formatting call. Function name and argument order differ
    /// per engine.
    fn format_date(&self, column: &str, format: &str) -> String;

    /// Series-generation query emitting one `date_day` column per date
    /// between the bounds (inclusive).
    fn date_range(&self, start: &str, end: &str, interval: &str) -> String;

    /// Filter expression excluding Saturday and Sunday. Day-of-week codes
    /// differ: Postgres DOW runs 0=Sunday..6=Saturday, while Snowflake
    /// DAYOFWEEK and BigQuery DAYOFWEEK run 1=Sunday..7=Saturday.
    fn business_day_filter(&self, column: &str) -> String;

    /// Start date of the fiscal year containing the column's date. For a
    /// date in or after the start month, the year boundary is found by
    /// truncating `column + (12 - start_month) months`; earlier dates
    /// subtract `(start_month - 1)` months from the truncated calendar year.
    fn fiscal_year_start(&self, column: &str, start_month: u32) -> String;

    /// Collapse whitespace runs to a single space and trim both ends.
    fn clean_string(&self, column: &str) -> String;

    /// Substring after the first '@'.
    fn email_domain(&self, column: &str) -> String;

    /// Replace the local part of an email with '***', keeping the domain.
    fn mask_email(&self, column: &str) -> String;

    /// Replace all but the last four digits of a ten-digit phone number.
    fn mask_phone(&self, column: &str) -> String;

    /// Boolean expression matching the column against [`EMAIL_PATTERN`].
    fn validate_email(&self, column: &str) -> String;

    /// Literal for an ISO-8601 UTC timestamp.
    fn timestamp_literal(&self, ts: &str) -> String;
}

/// Month offsets for the fiscal-year CASE arms. Saturates rather than
/// validating; month range is the caller's responsibility.
pub(crate) fn fiscal_offsets(start_month: u32) -> (u32, u32) {
    (12u32.saturating_sub(start_month), start_month.saturating_sub(1))
}
