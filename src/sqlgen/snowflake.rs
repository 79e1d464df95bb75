use crate::sqlgen::traits::{EMAIL_PATTERN, SqlGenerator, fiscal_offsets};

pub struct SnowflakeGenerator;

impl SqlGenerator for SnowflakeGenerator {
    fn format_date(&self, column: &str, format: &str) -> String {
        format!("TO_VARCHAR({}, '{}')", column, format)
    }

    fn date_range(&self, start: &str, end: &str, _interval: &str) -> String {
        // Day-grained: GENERATOR produces a fixed row count, so the step is
        // always one day regardless of the requested interval.
        format!(
            "SELECT DATEADD('day', SEQ4(), {start}::date) AS date_day \
             FROM TABLE(GENERATOR(ROWCOUNT => DATEDIFF('day', {start}::date, {end}::date) + 1))",
            start = start,
            end = end
        )
    }

    fn business_day_filter(&self, column: &str) -> String {
        // DAYOFWEEK: 1 = Sunday, 7 = Saturday
        format!("DAYOFWEEK({}) NOT IN (1, 7)", column)
    }

    fn fiscal_year_start(&self, column: &str, start_month: u32) -> String {
        let (ahead, back) = fiscal_offsets(start_month);
        format!(
            "CASE WHEN MONTH({col}) >= {m} \
             THEN DATE_TRUNC('year', DATEADD(month, {ahead}, {col})) \
             ELSE DATEADD(month, -{back}, DATE_TRUNC('year', {col})) END",
            col = column,
            m = start_month,
            ahead = ahead,
            back = back
        )
    }

    fn clean_string(&self, column: &str) -> String {
        // Backslashes doubled for Snowflake string-literal escaping.
        format!(r"TRIM(REGEXP_REPLACE({}, '\\s+', ' '))", column)
    }

    fn email_domain(&self, column: &str) -> String {
        format!("SPLIT_PART({}, '@', 2)", column)
    }

    fn mask_email(&self, column: &str) -> String {
        format!("REGEXP_REPLACE({}, '^[^@]+', '***')", column)
    }

    fn mask_phone(&self, column: &str) -> String {
        format!("CONCAT('***-***-', RIGHT({}, 4))", column)
    }

    fn validate_email(&self, column: &str) -> String {
        format!(
            "REGEXP_LIKE({}, '{}')",
            column,
            EMAIL_PATTERN.replace('\\', r"\\")
        )
    }

    fn timestamp_literal(&self, ts: &str) -> String {
        format!("'{}'::TIMESTAMP_NTZ", ts)
    }
}
