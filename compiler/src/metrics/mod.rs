//! Profiling metrics expressed as unrendered SQL expressions.
//!
//! A metric is fully configured when it is constructed. Requests that arrive as data go through
//! [`build_metric`], which reports a missing property as a configuration error instead of
//! producing a half-built metric.

mod regex_count;
mod row_count;

use std::fmt::Debug;

use serde::Deserialize;

use crate::{
    ast::Expr,
    errors::{Error, ErrorKind},
};

pub use regex_count::{MatchRegexCount, NotMatchRegexCount};
pub use row_count::RowCount;

/// The type of the scalar a metric produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Integer,
}

pub trait Metric: Debug {
    /// Stable identifier, also used as the alias of the result column.
    fn name(&self) -> &'static str;

    fn metric_type(&self) -> MetricType;

    /// Build the aggregate expression which computes this metric over a table.
    fn expr(&self) -> Expr;
}

/// Properties for one metric, as found in a profile request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetricConfig {
    pub metric: String,
    pub column: Option<String>,
    pub expression: Option<String>,
}

pub fn build_metric(config: &MetricConfig) -> Result<Box<dyn Metric>, Error> {
    let metric: Box<dyn Metric> = match config.metric.as_str() {
        MatchRegexCount::NAME => Box::new(MatchRegexCount::from_config(config)?),
        NotMatchRegexCount::NAME => Box::new(NotMatchRegexCount::from_config(config)?),
        RowCount::NAME => Box::new(RowCount),
        name => return Err(Error::new(ErrorKind::UnknownMetric(name.to_owned()))),
    };
    Ok(metric)
}
