use std::fmt::{Display, Formatter};

/// A fragment of rendered SQL, along with enough information to know whether it needs
/// parentheses when it is embedded in a larger expression.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SqlExpr {
    pub content: String,
    pub precedence: SqlExprPrecedence,
}

impl SqlExpr {
    pub fn atom(content: String) -> SqlExpr {
        SqlExpr {
            content,
            precedence: SqlExprPrecedence::Atom,
        }
    }

    fn parenthesize(&mut self) {
        self.content = format!("({})", self.content);
        self.precedence = SqlExprPrecedence::Atom;
    }

    pub fn for_precedence(mut self, precedence: SqlExprPrecedence) -> SqlExpr {
        if precedence > self.precedence {
            self.parenthesize();
        }
        self
    }
}

impl Display for SqlExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// https://www.postgresql.org/docs/current/sql-syntax-lexical.html#SQL-PRECEDENCE
pub enum SqlExprPrecedence {
    /// A literal value, a column name, a function call, a `CASE` expression, or parentheses.
    Atom = 0,
    /// `=` `<>` `>` `>=` `<` `<=` `~` `REGEXP`
    Comparison = -3,
}

impl Default for SqlExprPrecedence {
    fn default() -> Self {
        Self::Atom
    }
}
