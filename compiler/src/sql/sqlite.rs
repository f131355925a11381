use crate::{ast::MatchRegexFn, errors::Error};

use super::{
    dialect::{double_quoted, standard_string, Dialect},
    expr::SqlExpr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sqlite();

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        double_quoted(ident)
    }

    fn quote_string(&self, string: &str) -> String {
        standard_string(string)
    }

    /// SQLite parses `X REGEXP Y` but ships no `regexp()` function, so the query would fail at
    /// execution time unless the connection happens to load an extension.
    fn match_regex(&self, _: SqlExpr, _: SqlExpr) -> Result<SqlExpr, Error> {
        Err(Error::unsupported_expression(self.name(), MatchRegexFn::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_match_regex_is_unsupported() {
        let result = Sqlite().match_regex(SqlExpr::default(), SqlExpr::default());
        let Err(error) = result else {
            panic!("expected an error");
        };
        assert_eq!(
            error.kind(),
            &ErrorKind::UnsupportedExpression {
                dialect: "sqlite".to_string(),
                expression: "match_regex".to_string(),
            }
        );
    }
}
