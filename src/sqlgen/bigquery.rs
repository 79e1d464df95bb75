use crate::sqlgen::traits::{EMAIL_PATTERN, SqlGenerator, fiscal_offsets};

pub struct BigQueryGenerator;

impl SqlGenerator for BigQueryGenerator {
    fn format_date(&self, column: &str, format: &str) -> String {
        // Format string comes first in BigQuery.
        format!("FORMAT_DATE('{}', {})", format, column)
    }

    fn date_range(&self, start: &str, end: &str, interval: &str) -> String {
        format!(
            "SELECT date_day FROM UNNEST(GENERATE_DATE_ARRAY({}, {}, INTERVAL {})) AS date_day",
            start, end, interval
        )
    }

    fn business_day_filter(&self, column: &str) -> String {
        // DAYOFWEEK: 1 = Sunday, 7 = Saturday
        format!("EXTRACT(DAYOFWEEK FROM {}) NOT IN (1, 7)", column)
    }

    fn fiscal_year_start(&self, column: &str, start_month: u32) -> String {
        let (ahead, back) = fiscal_offsets(start_month);
        format!(
            "CASE WHEN EXTRACT(MONTH FROM {col}) >= {m} \
             THEN DATE_TRUNC(DATE_ADD({col}, INTERVAL {ahead} MONTH), YEAR) \
             ELSE DATE_SUB(DATE_TRUNC({col}, YEAR), INTERVAL {back} MONTH) END",
            col = column,
            m = start_month,
            ahead = ahead,
            back = back
        )
    }

    fn clean_string(&self, column: &str) -> String {
        format!(r"TRIM(REGEXP_REPLACE({}, r'\s+', ' '))", column)
    }

    fn email_domain(&self, column: &str) -> String {
        format!("SPLIT({}, '@')[SAFE_OFFSET(1)]", column)
    }

    fn mask_email(&self, column: &str) -> String {
        format!("REGEXP_REPLACE({}, r'^[^@]+', '***')", column)
    }

    fn mask_phone(&self, column: &str) -> String {
        format!("CONCAT('***-***-', SUBSTR({}, -4))", column)
    }

    fn validate_email(&self, column: &str) -> String {
        format!("REGEXP_CONTAINS({}, r'{}')", column, EMAIL_PATTERN)
    }

    fn timestamp_literal(&self, ts: &str) -> String {
        format!("TIMESTAMP '{}'", ts)
    }
}
