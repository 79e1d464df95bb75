//! Dialect-aware SQL fragment generation for data-transformation pipelines.
//!
//! Builds small SQL text fragments (date helpers, string cleaning and
//! masking, audit and data-quality queries) for PostgreSQL, Snowflake, and
//! BigQuery. Fragments come back as strings for a templating host to embed
//! into larger queries; nothing here talks to a database.
//!
//! ```
//! use sqlfrag::prelude::*;
//!
//! let op = Op::BusinessDay { column: "order_date".into() };
//! assert_eq!(
//!     op.to_sql_with_dialect(Dialect::Postgres),
//!     "EXTRACT(DOW FROM order_date) NOT IN (0, 6)"
//! );
//! ```

pub mod context;
pub mod dialect;
pub mod error;
pub mod ops;
pub mod resolver;
pub mod slug;
pub mod sqlgen;

pub use resolver::resolve;

pub mod prelude {
    pub use crate::context::RunContext;
    pub use crate::dialect::Dialect;
    pub use crate::error::{SqlfragError, SqlfragResult};
    pub use crate::ops::{MaskType, Op, Validation};
    pub use crate::resolver::{Kwargs, Resolver, resolve};
    pub use crate::slug::slugify;
    pub use crate::sqlgen::ToSql;
}
