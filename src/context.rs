//! Per-run audit context.
//!
//! The host supplies run identity explicitly instead of the library reading
//! ambient state. One context stamps provenance columns onto any number of
//! generated queries for the same model.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dialect::Dialect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunContext {
    /// Unique identifier of the host's compilation run.
    pub run_id: Uuid,
    /// Identifier of the model being compiled.
    pub model: String,
    /// When the run started, UTC.
    pub started_at: DateTime<Utc>,
}

impl RunContext {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            model: model.into(),
            started_at: Utc::now(),
        }
    }

    /// Use the host's run id instead of a fresh one.
    pub fn with_run_id(mut self, run_id: Uuid) -> Self {
        self.run_id = run_id;
        self
    }

    /// SELECT-list fragment adding provenance columns to a model.
    pub fn audit_columns(&self, dialect: Dialect) -> String {
        let g = dialect.generator();
        let ts = self.started_at.to_rfc3339_opts(SecondsFormat::Micros, true);
        format!(
            "'{}' AS _audit_run_id, '{}' AS _audit_model, {} AS _audit_loaded_at",
            self.run_id,
            self.model,
            g.timestamp_literal(&ts)
        )
    }
}
