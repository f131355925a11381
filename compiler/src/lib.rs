//! Dialect-aware SQL for data profiling metrics.
//!
//! ```
//! use profiler_sql::{ColumnRef, Compiler, DialectName, MatchRegexCount, Metric};
//!
//! let compiler = Compiler::new(DialectName::BigQuery.into());
//! let metric = MatchRegexCount::new(ColumnRef::new("name"), "^J");
//! let sql = compiler.compile_expr(&metric.expr()).unwrap();
//! assert_eq!(sql, "SUM(CASE WHEN REGEXP_CONTAINS(name, r'^J') THEN 1 ELSE 0 END)");
//! ```

pub mod ast;
mod compiler;
mod errors;
pub mod metrics;
mod options;
pub mod sql;
mod tests;
mod utils;

pub use ast::{ColumnRef, Expr, MatchRegexFn};
pub use compiler::{Compiler, PrimitiveRequest, ProfileRequest};
pub use errors::{Error, ErrorKind};
pub use metrics::{
    build_metric, MatchRegexCount, Metric, MetricConfig, MetricType, NotMatchRegexCount,
    RowCount,
};
pub use options::{IdentifierQuoting, Options};
pub use sql::{BigQuery, Dialect, DialectName, Postgres};
