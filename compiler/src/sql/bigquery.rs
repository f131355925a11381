use crate::errors::Error;

use super::{
    dialect::{backslash_escaped_string, Dialect},
    expr::{build::sql_func, SqlExpr},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigQuery();

impl Dialect for BigQuery {
    fn name(&self) -> &'static str {
        "bigquery"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('\\', r"\\").replace('`', r"\`"))
    }

    fn quote_string(&self, string: &str) -> String {
        backslash_escaped_string(string)
    }

    /// Patterns are rendered as raw strings (`r'...'`) so regex escapes reach RE2 untouched.
    ///
    /// Inside a raw string a backslash still pairs with the character after it, so a quote or a
    /// trailing backslash can't be represented safely. Those patterns use an escaped string.
    fn regex_literal(&self, pattern: &str) -> String {
        if pattern.contains('\'') || pattern.ends_with('\\') || pattern.contains('\n') {
            return self.quote_string(pattern);
        }
        format!("r'{pattern}'")
    }

    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error> {
        Ok(sql_func("REGEXP_CONTAINS", [value, regex]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(s: &str) -> SqlExpr {
        SqlExpr::atom(s.to_string())
    }

    #[test]
    fn test_regex_contains() {
        let d = BigQuery();
        let regex = atom(&d.regex_literal("^J"));
        let sql = d.match_regex(atom("name"), regex).unwrap();
        assert_eq!(sql.content, "REGEXP_CONTAINS(name, r'^J')");
    }

    #[test]
    fn test_regex_literal() {
        let d = BigQuery();
        assert_eq!(d.regex_literal(r"\d+"), r"r'\d+'");
        assert_eq!(d.regex_literal("it's"), r"'it\'s'");
        assert_eq!(d.regex_literal(r"a\"), r"'a\\'");
    }

    /// Index of the quote which closes the literal starting at `sql`, following BigQuery's
    /// lexing rules where a backslash always pairs with the next character.
    fn closing_quote(sql: &str) -> usize {
        let body = sql.strip_prefix('r').unwrap_or(sql);
        let offset = sql.len() - body.len();
        let mut chars = body.char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '\'' => return offset + i,
                _ => {}
            }
        }
        panic!("unterminated literal: {sql}");
    }

    #[test]
    fn test_regex_literal_cannot_be_closed_early() {
        let d = BigQuery();
        for pattern in [r"x\' OR TRUE --", "' OR TRUE --", r"\\' --", r"a\\\'b", "plain"] {
            let literal = d.regex_literal(pattern);
            assert_eq!(closing_quote(&literal), literal.len() - 1, "{literal}");
        }
        assert_eq!(d.regex_literal(r"x\' OR TRUE --"), r"'x\\\' OR TRUE --'");
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(BigQuery().quote_identifier("my-project"), "`my-project`");
        assert_eq!(BigQuery().quote_identifier("a`b"), r"`a\`b`");
    }
}
