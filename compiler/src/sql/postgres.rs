use crate::errors::Error;

use super::{
    dialect::{backslash_escaped_string, double_quoted, standard_string, Dialect},
    expr::{build::cmp::comparison, SqlExpr},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Postgres();

// Assumes `standard_conforming_strings` is on, which has been the default since Postgres 9.1.
// With it on, backslashes inside '...' are literal, so regex escapes pass through unchanged.
impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        double_quoted(ident)
    }

    fn quote_string(&self, string: &str) -> String {
        standard_string(string)
    }

    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error> {
        Ok(comparison(value, "~", regex))
    }
}

/// Redshift shares the POSIX `~` operator with Postgres but treats backslash as an escape
/// character within string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redshift();

impl Dialect for Redshift {
    fn name(&self) -> &'static str {
        "redshift"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        double_quoted(ident)
    }

    fn quote_string(&self, string: &str) -> String {
        backslash_escaped_string(string)
    }

    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error> {
        Ok(comparison(value, "~", regex))
    }
}
