use std::error;
use std::fmt;

use super::msg;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    pub(crate) fn missing_property(metric: &str, property: &str) -> Error {
        Error::new(ErrorKind::MissingProperty {
            metric: metric.to_owned(),
            property: property.to_owned(),
        })
    }

    pub(crate) fn unsupported_expression(dialect: &str, expression: &str) -> Error {
        Error::new(ErrorKind::UnsupportedExpression {
            dialect: dialect.to_owned(),
            expression: expression.to_owned(),
        })
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// True when the error comes from an incomplete metric configuration rather than from
    /// rendering SQL.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingProperty { .. })
    }
}

/// The kind of an error that can occur.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A metric was configured without a property it needs.
    MissingProperty { metric: String, property: String },
    /// A profile request named a metric we don't know how to build.
    UnknownMetric(String),
    /// No dialect is registered under the given name.
    UnknownDialect(String),
    /// The dialect has no rendering for an expression node.
    UnsupportedExpression { dialect: String, expression: String },
    /// The profile request could not be deserialized or is empty.
    InvalidRequest(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match &self.kind {
            ErrorKind::MissingProperty { metric, property } => {
                msg::missing_property(metric, property)
            }
            ErrorKind::UnknownMetric(name) => msg::unknown_metric(name),
            ErrorKind::UnknownDialect(name) => msg::unknown_dialect(name),
            ErrorKind::UnsupportedExpression {
                dialect,
                expression,
            } => msg::unsupported_expression(dialect, expression),
            ErrorKind::InvalidRequest(detail) => detail.clone(),
        };
        write!(f, "{message}")
    }
}
