use crate::{
    errors::Error,
    utils::{is_plain_identifier, FoldedCase},
};

use super::{
    dialect::{backslash_escaped_string, double_quoted, Dialect},
    expr::{
        build::{cmp::gt, sql_func, value::zero},
        SqlExpr,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snowflake();

impl Dialect for Snowflake {
    fn name(&self) -> &'static str {
        "snowflake"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        double_quoted(ident)
    }

    /// Snowflake folds unquoted identifiers to uppercase, so a bare `name` would refer to `NAME`.
    fn is_plain_identifier(&self, ident: &str) -> bool {
        is_plain_identifier(ident, FoldedCase::Upper)
    }

    fn quote_string(&self, string: &str) -> String {
        backslash_escaped_string(string)
    }

    /// `REGEXP_LIKE` is implicitly anchored at both ends in Snowflake, so we look for the
    /// position of the first match instead.
    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error> {
        Ok(gt(sql_func("REGEXP_INSTR", [value, regex]), zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_regex_is_unanchored() {
        let d = Snowflake();
        let regex = SqlExpr::atom(d.regex_literal("^J"));
        let sql = d.match_regex(SqlExpr::atom("name".to_string()), regex).unwrap();
        assert_eq!(sql.content, "REGEXP_INSTR(name, '^J') > 0");
    }

    #[test]
    fn test_only_uppercase_identifiers_are_plain() {
        assert!(Snowflake().is_plain_identifier("NAME"));
        assert!(!Snowflake().is_plain_identifier("name"));
    }
}
