use crate::sqlgen::traits::{EMAIL_PATTERN, SqlGenerator, fiscal_offsets};

pub struct PostgresGenerator;

impl SqlGenerator for PostgresGenerator {
    fn format_date(&self, column: &str, format: &str) -> String {
        format!("TO_CHAR({}, '{}')", column, format)
    }

    fn date_range(&self, start: &str, end: &str, interval: &str) -> String {
        format!(
            "SELECT GENERATE_SERIES({}::date, {}::date, '{}'::interval)::date AS date_day",
            start, end, interval
        )
    }

    fn business_day_filter(&self, column: &str) -> String {
        // DOW: 0 = Sunday, 6 = Saturday
        format!("EXTRACT(DOW FROM {}) NOT IN (0, 6)", column)
    }

    fn fiscal_year_start(&self, column: &str, start_month: u32) -> String {
        let (ahead, back) = fiscal_offsets(start_month);
        format!(
            "CASE WHEN EXTRACT(MONTH FROM {col}) >= {m} \
             THEN DATE_TRUNC('year', {col} + INTERVAL '{ahead} months') \
             ELSE DATE_TRUNC('year', {col}) - INTERVAL '{back} months' END",
            col = column,
            m = start_month,
            ahead = ahead,
            back = back
        )
    }

    fn clean_string(&self, column: &str) -> String {
        format!(r"TRIM(REGEXP_REPLACE({}, '\s+', ' ', 'g'))", column)
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
        format!("{} ~* '{}'", column, EMAIL_PATTERN)
    }

    fn timestamp_literal(&self, ts: &str) -> String {
        format!("TIMESTAMP '{}'", ts)
    }
}
