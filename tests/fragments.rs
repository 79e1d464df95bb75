//! Integration checks for generated fragments.
//!
//! Statements are run through sqlparser with the matching dialect to catch
//! syntax regressions, and the emitted regex patterns are exercised against
//! sample data with the regex crate.

use pretty_assertions::assert_eq;
use sqlparser::dialect::{BigQueryDialect, Dialect as ParserDialect, PostgreSqlDialect, SnowflakeDialect};
use sqlparser::parser::Parser;

use sqlfrag::prelude::*;
use sqlfrag::sqlgen::EMAIL_PATTERN;

fn parser_for(dialect: Dialect) -> Box<dyn ParserDialect> {
    match dialect {
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        Dialect::Snowflake => Box::new(SnowflakeDialect {}),
        Dialect::BigQuery => Box::new(BigQueryDialect {}),
    }
}

fn assert_parses(sql: &str, dialect: Dialect) {
    let parsed = Parser::parse_sql(&*parser_for(dialect), sql);
    assert!(
        parsed.is_ok(),
        "generated SQL failed to parse for {}: {}\n{:?}",
        dialect,
        sql,
        parsed.err()
    );
}

#[test]
fn audit_queries_parse_under_every_dialect() {
    let ops = [
        Op::RowCount {
            table: "orders".to_string(),
        },
        Op::CompareSizes {
            first: "orders".to_string(),
            second: "orders_snapshot".to_string(),
        },
        Op::DataQuality {
            table: "orders".to_string(),
            column: "customer_id".to_string(),
            check: Validation::NotNull,
        },
        Op::DataQuality {
            table: "orders".to_string(),
            column: "order_id".to_string(),
            check: Validation::Unique,
        },
        Op::DataQuality {
            table: "orders".to_string(),
            column: "status".to_string(),
            check: Validation::AcceptedValues(vec!["placed".to_string(), "shipped".to_string()]),
        },
    ];
    for op in &ops {
        for dialect in Dialect::ALL {
            assert_parses(&op.to_sql_with_dialect(dialect), dialect);
        }
    }
}

#[test]
fn postgres_fragments_parse() {
    let range = Op::DateRange {
        start: "'2024-01-01'".to_string(),
        end: "'2024-03-31'".to_string(),
        interval: "1 day".to_string(),
    };
    assert_parses(&range.to_sql_with_dialect(Dialect::Postgres), Dialect::Postgres);

    let exprs = [
        Op::FormatDate {
            column: "created_at".to_string(),
            format: "YYYY-MM-DD".to_string(),
        },
        Op::BusinessDay {
            column: "order_date".to_string(),
        },
        Op::FiscalYearStart {
            column: "order_date".to_string(),
            start_month: 7,
        },
        Op::CleanString {
            column: "notes".to_string(),
        },
        Op::ExtractEmailDomain {
            column: "email".to_string(),
        },
        Op::MaskSensitive {
            column: "email".to_string(),
            mask: MaskType::Email,
        },
        Op::ValidateEmail {
            column: "email".to_string(),
        },
    ];
    for op in &exprs {
        let sql = format!("SELECT {} FROM t", op.to_sql_with_dialect(Dialect::Postgres));
        assert_parses(&sql, Dialect::Postgres);
    }
}

#[test]
fn snowflake_fragments_parse() {
    let exprs = [
        Op::FormatDate {
            column: "created_at".to_string(),
            format: "YYYY-MM-DD".to_string(),
        },
        Op::BusinessDay {
            column: "order_date".to_string(),
        },
        Op::FiscalYearStart {
            column: "order_date".to_string(),
            start_month: 7,
        },
        Op::ExtractEmailDomain {
            column: "email".to_string(),
        },
        Op::ValidateEmail {
            column: "email".to_string(),
        },
    ];
    for op in &exprs {
        let sql = format!("SELECT {} FROM t", op.to_sql_with_dialect(Dialect::Snowflake));
        assert_parses(&sql, Dialect::Snowflake);
    }
}

#[test]
fn bigquery_fragments_parse() {
    let range = Op::DateRange {
        start: "'2024-01-01'".to_string(),
        end: "'2024-03-31'".to_string(),
        interval: "1 day".to_string(),
    };
    assert_parses(&range.to_sql_with_dialect(Dialect::BigQuery), Dialect::BigQuery);

    let exprs = [
        Op::FormatDate {
            column: "created_at".to_string(),
            format: "%Y-%m-%d".to_string(),
        },
        Op::BusinessDay {
            column: "order_date".to_string(),
        },
        Op::FiscalYearStart {
            column: "order_date".to_string(),
            start_month: 7,
        },
    ];
    for op in &exprs {
        let sql = format!("SELECT {} FROM t", op.to_sql_with_dialect(Dialect::BigQuery));
        assert_parses(&sql, Dialect::BigQuery);
    }
}

#[test]
fn email_pattern_matches_expected_shapes() {
    let email = regex::Regex::new(EMAIL_PATTERN).unwrap();
    assert!(email.is_match("user@example.com"));
    assert!(email.is_match("first.last+tag@sub.domain.co"));
    assert!(!email.is_match("not-an-email"));
    assert!(!email.is_match("missing@tld"));
    assert!(!email.is_match("@example.com"));
}

#[test]
fn mask_email_regex_preserves_domain() {
    // Same replacement the generated SQL performs.
    let local_part = regex::Regex::new("^[^@]+").unwrap();
    let masked = local_part.replace("jane.doe@example.com", "***");
    assert_eq!(masked, "***@example.com");
}

#[test]
fn resolve_round_trip_is_byte_identical() {
    let kwargs = Kwargs::default();
    for dialect in ["postgres", "snowflake", "bigquery"] {
        let first = resolve("clean_string", dialect, &["notes"], &kwargs).unwrap();
        let second = resolve("clean_string", dialect, &["notes"], &kwargs).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}

#[test]
fn run_context_parses_in_a_select() {
    let ctx = RunContext::new("stg_orders");
    for dialect in Dialect::ALL {
        let sql = format!("SELECT {} FROM t", ctx.audit_columns(dialect));
        assert_parses(&sql, dialect);
    }
}
