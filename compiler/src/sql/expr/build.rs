use itertools::Itertools;

use super::{SqlExpr, SqlExprPrecedence};

fn binary_op(a: SqlExpr, op: &str, b: SqlExpr, precedence: SqlExprPrecedence) -> SqlExpr {
    SqlExpr {
        content: format!(
            "{} {} {}",
            a.for_precedence(precedence),
            op,
            b.for_precedence(precedence)
        ),
        precedence,
    }
}

pub fn sql_func(name: &str, args: impl IntoIterator<Item = SqlExpr>) -> SqlExpr {
    SqlExpr::atom(format!("{}({})", name, args.into_iter().join(", ")))
}

pub mod agg {
    use super::*;

    pub fn count_star() -> SqlExpr {
        SqlExpr::atom("COUNT(*)".to_string())
    }

    pub fn sum(a: SqlExpr) -> SqlExpr {
        sql_func("SUM", [a])
    }
}

pub mod cmp {
    use super::*;

    pub fn comparison(a: SqlExpr, op: &str, b: SqlExpr) -> SqlExpr {
        binary_op(a, op, b, SqlExprPrecedence::Comparison)
    }

    pub fn gt(a: SqlExpr, b: SqlExpr) -> SqlExpr {
        comparison(a, ">", b)
    }
}

pub mod cond {
    use super::*;

    /// `CASE WHEN .. THEN .. [ELSE ..] END`
    ///
    /// Every branch is self-delimited by keywords, so operands never need parentheses.
    pub fn case_when(
        whens: impl IntoIterator<Item = (SqlExpr, SqlExpr)>,
        else_: Option<SqlExpr>,
    ) -> SqlExpr {
        let branches = whens
            .into_iter()
            .map(|(condition, result)| format!("WHEN {condition} THEN {result}"))
            .join(" ");
        let else_ = else_.map(|e| format!(" ELSE {e}")).unwrap_or_default();
        SqlExpr::atom(format!("CASE {branches}{else_} END"))
    }
}

pub mod value {
    use super::*;

    pub fn int(n: i64) -> SqlExpr {
        SqlExpr::atom(n.to_string())
    }

    pub fn zero() -> SqlExpr {
        int(0)
    }
}
