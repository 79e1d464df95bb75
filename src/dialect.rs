//! Supported SQL dialects.

use serde::{Deserialize, Serialize};

use crate::sqlgen::SqlGenerator;
use crate::sqlgen::bigquery::BigQueryGenerator;
use crate::sqlgen::postgres::PostgresGenerator;
use crate::sqlgen::snowflake::SnowflakeGenerator;

/// A target SQL engine's syntax variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    Snowflake,
    BigQuery,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::Postgres
    }
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Postgres, Dialect::Snowflake, Dialect::BigQuery];

    /// Parse a dialect name as supplied by the host's connection configuration.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "postgres" => Some(Self::Postgres),
            "snowflake" => Some(Self::Snowflake),
            "bigquery" => Some(Self::BigQuery),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Snowflake => "snowflake",
            Self::BigQuery => "bigquery",
        }
    }

    pub fn generator(&self) -> Box<dyn SqlGenerator> {
        match self {
            Dialect::Postgres => Box::new(PostgresGenerator),
            Dialect::Snowflake => Box::new(SnowflakeGenerator),
            Dialect::BigQuery => Box::new(BigQueryGenerator),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
