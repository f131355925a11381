use crate::errors::Error;

use super::{
    dialect::{backslash_escaped_string, backtick_quoted, Dialect},
    expr::{build::cmp::comparison, SqlExpr},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MySql();

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        backtick_quoted(ident)
    }

    fn quote_string(&self, string: &str) -> String {
        backslash_escaped_string(string)
    }

    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error> {
        Ok(comparison(value, "REGEXP", regex))
    }
}
