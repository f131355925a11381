//! Expression nodes which have not been rendered yet.
//!
//! Nothing here knows about SQL syntax. A tree of [`Expr`] only becomes SQL text when a
//! [`Compiler`](crate::Compiler) renders it for a specific dialect.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub name: String,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// A predicate which is true when this column contains a match for `pattern`.
    pub fn match_regex(&self, pattern: impl Into<String>) -> Expr {
        Expr::MatchRegex(MatchRegexFn::new(
            Expr::Column(self.clone()),
            Expr::String(pattern.into()),
        ))
    }
}

impl From<ColumnRef> for Expr {
    fn from(column: ColumnRef) -> Self {
        Expr::Column(column)
    }
}

/// Regular expression containment test. Neither operand is validated here; a bad pattern is
/// reported by the database engine when the query runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRegexFn {
    pub value: Box<Expr>,
    pub regex: Box<Expr>,
}

impl MatchRegexFn {
    pub const NAME: &'static str = "match_regex";

    pub fn new(value: Expr, regex: Expr) -> Self {
        Self {
            value: Box::new(value),
            regex: Box::new(regex),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// `(condition, result)` pairs, tested in order
    pub whens: Vec<(Expr, Expr)>,
    pub else_: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Column(ColumnRef),
    String(String),
    Integer(i64),
    MatchRegex(MatchRegexFn),
    Case(Case),
    Sum(Box<Expr>),
    CountStar,
}

impl Expr {
    /// `CASE WHEN condition THEN then ELSE else_ END`
    pub fn case(condition: Expr, then: Expr, else_: Expr) -> Expr {
        Expr::Case(Case {
            whens: vec![(condition, then)],
            else_: Some(Box::new(else_)),
        })
    }

    pub fn sum(expr: Expr) -> Expr {
        Expr::Sum(Box::new(expr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_regex_stores_operands_unchanged() {
        let column = ColumnRef::qualified("users", "name");
        let Expr::MatchRegex(m) = column.match_regex("[") else {
            panic!("expected a regex match node");
        };
        assert_eq!(*m.value, Expr::Column(column));
        assert_eq!(*m.regex, Expr::String("[".to_string()));
    }
}
