use crate::{
    errors::Error,
    utils::{is_plain_identifier, FoldedCase},
};

use super::expr::SqlExpr;

pub trait Dialect {
    /// The name under which this dialect is registered, e.g. `bigquery`.
    fn name(&self) -> &'static str;

    /// Quote a table or column for use in SQL.
    fn quote_identifier(&self, ident: &str) -> String;

    /// True when `ident` may be written without quotes. By default that means lowercase and not
    /// reserved, which suits dialects that fold unquoted names to lowercase or don't fold them.
    fn is_plain_identifier(&self, ident: &str) -> bool {
        is_plain_identifier(ident, FoldedCase::Lower)
    }

    /// Quote a string for use in SQL.
    fn quote_string(&self, string: &str) -> String;

    /// Render a string literal which will be used as a regular expression pattern.
    ///
    /// Dialects which offer a literal form that leaves backslashes alone should override this
    /// so that patterns like `\d+` survive without double escaping.
    fn regex_literal(&self, pattern: &str) -> String {
        self.quote_string(pattern)
    }

    /// Render a predicate which is true when some part of `value` matches `regex`.
    ///
    /// * `value` - The rendered value being tested, usually a column.
    /// * `regex` - The rendered pattern. For string literals this has already passed through
    ///   [`Dialect::regex_literal`].
    ///
    /// There is intentionally no default here. A dialect without a native regex operator must
    /// return an error instead of falling back to some generic syntax.
    fn match_regex(&self, value: SqlExpr, regex: SqlExpr) -> Result<SqlExpr, Error>;
}

/// `"ident"` with embedded double quotes doubled. Standard SQL.
pub(crate) fn double_quoted(ident: &str) -> String {
    format!(r#""{}""#, ident.replace('"', r#""""#))
}

/// `` `ident` `` with embedded backticks doubled, as MySQL and ClickHouse expect.
pub(crate) fn backtick_quoted(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// `'string'` with embedded single quotes doubled and backslashes left alone. Standard SQL.
pub(crate) fn standard_string(string: &str) -> String {
    format!("'{}'", string.replace('\'', "''"))
}

/// `'string'` for engines which treat backslash as an escape character inside literals.
pub(crate) fn backslash_escaped_string(string: &str) -> String {
    format!("'{}'", string.replace('\\', r"\\").replace('\'', r"\'"))
}
