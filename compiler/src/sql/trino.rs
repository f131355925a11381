use crate::errors::Error;

use super::{
    dialect::{double_quoted, standard_string, Dialect},
    expr::{build::sql_func, SqlExpr},
};

/// Trino, and by extension Presto and Athena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trino();

impl Dialect for Trino {
    fn name(&self) -> &'static str {
        "trino"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        double_quoted(ident)
    }

    fn quote_string(&self, string: &str) -> String {
        standard_string(string)
    }

    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error> {
        Ok(sql_func("regexp_like", [value, regex]))
    }
}
