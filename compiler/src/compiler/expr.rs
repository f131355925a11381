use log::trace;

use crate::{
    ast::{Case, Expr, MatchRegexFn},
    errors::Error,
    sql::expr::{build::*, SqlExpr},
    Options,
};

/// Convert an expression tree to SQL for the dialect in `options`
pub fn convert_expr(expr: &Expr, options: &Options) -> Result<SqlExpr, Error> {
    match expr {
        Expr::Column(c) => Ok(SqlExpr::atom(options.column(c))),
        Expr::String(s) => Ok(SqlExpr::atom(options.dialect.quote_string(s))),
        Expr::Integer(n) => Ok(value::int(*n)),
        Expr::MatchRegex(m) => convert_match_regex(m, options),
        Expr::Case(c) => convert_case(c, options),
        Expr::Sum(e) => Ok(agg::sum(convert_expr(e, options)?)),
        Expr::CountStar => Ok(agg::count_star()),
    }
}

fn convert_match_regex(m: &MatchRegexFn, options: &Options) -> Result<SqlExpr, Error> {
    let value = convert_expr(&m.value, options)?;
    let regex = match m.regex.as_ref() {
        Expr::String(pattern) => SqlExpr::atom(options.dialect.regex_literal(pattern)),
        other => convert_expr(other, options)?,
    };
    let sql = options.dialect.match_regex(value, regex)?;
    trace!("{} rendered as `{}`", MatchRegexFn::NAME, sql);
    Ok(sql)
}

fn convert_case(case: &Case, options: &Options) -> Result<SqlExpr, Error> {
    let mut whens = Vec::<(SqlExpr, SqlExpr)>::new();
    for (condition, result) in case.whens.iter() {
        whens.push((
            convert_expr(condition, options)?,
            convert_expr(result, options)?,
        ));
    }
    let else_ = match &case.else_ {
        Some(e) => Some(convert_expr(e, options)?),
        None => None,
    };
    Ok(cond::case_when(whens, else_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::ColumnRef,
        errors::ErrorKind,
        sql::{BigQuery, Postgres, Sqlite},
    };

    fn render(expr: &Expr, options: &Options) -> String {
        convert_expr(expr, options).unwrap().content
    }

    #[test]
    fn test_match_regex_bigquery() {
        let options = Options::new(Box::new(BigQuery()));
        let expr = ColumnRef::new("name").match_regex("^J");
        assert_eq!(render(&expr, &options), "REGEXP_CONTAINS(name, r'^J')");
    }

    #[test]
    fn test_match_regex_operands_are_rendered_recursively() {
        let options = Options::new(Box::new(BigQuery()));
        let expr = Expr::MatchRegex(MatchRegexFn::new(
            ColumnRef::qualified("people", "Full Name").into(),
            ColumnRef::qualified("rules", "pattern").into(),
        ));
        assert_eq!(
            render(&expr, &options),
            "REGEXP_CONTAINS(people.`Full Name`, rules.pattern)"
        );
    }

    #[test]
    fn test_nested_match_regex() {
        let options = Options::new(Box::new(Postgres()));
        let inner = ColumnRef::new("flag").match_regex("^y");
        let expr = Expr::MatchRegex(MatchRegexFn::new(
            Expr::case(inner, Expr::String("yes".to_string()), Expr::String("no".to_string())),
            Expr::String("es$".to_string()),
        ));
        assert_eq!(
            render(&expr, &options),
            "CASE WHEN flag ~ '^y' THEN 'yes' ELSE 'no' END ~ 'es$'"
        );
    }

    #[test]
    fn test_unsupported_dialect_fails_to_compile() {
        let options = Options::new(Box::new(Sqlite()));
        let expr = Expr::sum(Expr::case(
            ColumnRef::new("name").match_regex("^J"),
            Expr::Integer(1),
            Expr::Integer(0),
        ));
        let error = convert_expr(&expr, &options).unwrap_err();
        assert!(matches!(
            error.kind(),
            ErrorKind::UnsupportedExpression { dialect, .. } if dialect == "sqlite"
        ));
    }
}
