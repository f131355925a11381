use crate::errors::Error;

use super::{
    dialect::{double_quoted, standard_string, Dialect},
    expr::{build::sql_func, SqlExpr},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuckDb();

impl Dialect for DuckDb {
    fn name(&self) -> &'static str {
        "duckdb"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        double_quoted(ident)
    }

    fn quote_string(&self, string: &str) -> String {
        standard_string(string)
    }

    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error> {
        Ok(sql_func("regexp_matches", [value, regex]))
    }
}
