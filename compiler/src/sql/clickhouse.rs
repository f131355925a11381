use crate::errors::Error;

use super::{
    dialect::{backslash_escaped_string, backtick_quoted, Dialect},
    expr::{build::sql_func, SqlExpr},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickHouse();

impl Dialect for ClickHouse {
    fn name(&self) -> &'static str {
        "clickhouse"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        backtick_quoted(ident)
    }

    fn quote_string(&self, string: &str) -> String {
        backslash_escaped_string(string)
    }

    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error> {
        Ok(sql_func("match", [value, regex]))
    }
}
