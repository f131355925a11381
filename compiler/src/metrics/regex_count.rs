use log::trace;

use crate::{
    ast::{ColumnRef, Expr},
    errors::Error,
};

use super::{Metric, MetricConfig, MetricType};

/// Number of rows in which some part of `column` matches the regular expression `expression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRegexCount {
    column: ColumnRef,
    expression: String,
}

/// Number of rows in which no part of `column` matches the regular expression `expression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotMatchRegexCount {
    column: ColumnRef,
    expression: String,
}

impl MatchRegexCount {
    pub const NAME: &'static str = "matchRegexCount";

    pub fn new(column: ColumnRef, expression: impl Into<String>) -> Self {
        Self {
            column,
            expression: expression.into(),
        }
    }

    pub fn from_config(config: &MetricConfig) -> Result<Self, Error> {
        let (column, expression) = regex_props(Self::NAME, config)?;
        Ok(Self::new(column, expression))
    }

    pub fn column(&self) -> &ColumnRef {
        &self.column
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl NotMatchRegexCount {
    pub const NAME: &'static str = "notMatchRegexCount";

    pub fn new(column: ColumnRef, expression: impl Into<String>) -> Self {
        Self {
            column,
            expression: expression.into(),
        }
    }

    pub fn from_config(config: &MetricConfig) -> Result<Self, Error> {
        let (column, expression) = regex_props(Self::NAME, config)?;
        Ok(Self::new(column, expression))
    }

    pub fn column(&self) -> &ColumnRef {
        &self.column
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl Metric for MatchRegexCount {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn metric_type(&self) -> MetricType {
        MetricType::Integer
    }

    /// `SUM(CASE WHEN <column matches expression> THEN 1 ELSE 0 END)`
    fn expr(&self) -> Expr {
        sum_of_matches(&self.column, &self.expression, 1, 0)
    }
}

impl Metric for NotMatchRegexCount {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn metric_type(&self) -> MetricType {
        MetricType::Integer
    }

    /// `SUM(CASE WHEN <column matches expression> THEN 0 ELSE 1 END)`
    fn expr(&self) -> Expr {
        sum_of_matches(&self.column, &self.expression, 0, 1)
    }
}

fn sum_of_matches(column: &ColumnRef, expression: &str, on_match: i64, otherwise: i64) -> Expr {
    trace!("regex count on `{}` for pattern `{}`", column.name, expression);
    Expr::sum(Expr::case(
        column.match_regex(expression),
        Expr::Integer(on_match),
        Expr::Integer(otherwise),
    ))
}

fn regex_props(metric: &str, config: &MetricConfig) -> Result<(ColumnRef, String), Error> {
    let column = config
        .column
        .as_deref()
        .ok_or_else(|| Error::missing_property(metric, "column"))?;
    let expression = config
        .expression
        .as_deref()
        .ok_or_else(|| Error::missing_property(metric, "expression"))?;
    Ok((ColumnRef::new(column), expression.to_owned()))
}
