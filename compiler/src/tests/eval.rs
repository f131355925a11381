//! A tiny in-memory interpreter for expression trees, so metric semantics can be checked
//! without a database. Follows SQL's NULL handling where it matters for the metrics.

use std::collections::HashMap;

use regex::Regex;

use crate::ast::{Case, Expr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

pub type Row = HashMap<String, Option<String>>;

pub fn eval_scalar(expr: &Expr, row: &Row) -> Value {
    match expr {
        Expr::Column(c) => match row.get(&c.name) {
            Some(Some(text)) => Value::Text(text.clone()),
            _ => Value::Null,
        },
        Expr::String(s) => Value::Text(s.clone()),
        Expr::Integer(n) => Value::Int(*n),
        Expr::MatchRegex(m) => match (eval_scalar(&m.value, row), eval_scalar(&m.regex, row)) {
            (Value::Text(value), Value::Text(pattern)) => {
                let regex = Regex::new(&pattern).unwrap();
                Value::Bool(regex.is_match(&value))
            }
            _ => Value::Null,
        },
        Expr::Case(c) => eval_case(c, row),
        Expr::Sum(_) | Expr::CountStar => panic!("aggregate used in a scalar context"),
    }
}

fn eval_case(case: &Case, row: &Row) -> Value {
    for (condition, result) in case.whens.iter() {
        if eval_scalar(condition, row) == Value::Bool(true) {
            return eval_scalar(result, row);
        }
    }
    match &case.else_ {
        Some(e) => eval_scalar(e, row),
        None => Value::Null,
    }
}

pub fn eval_aggregate(expr: &Expr, rows: &[Row]) -> Value {
    match expr {
        Expr::CountStar => Value::Int(rows.len() as i64),
        Expr::Sum(e) => {
            let values = rows
                .iter()
                .filter_map(|row| match eval_scalar(e, row) {
                    Value::Int(n) => Some(n),
                    Value::Null => None,
                    other => panic!("cannot sum {other:?}"),
                })
                .collect::<Vec<_>>();
            if values.is_empty() {
                Value::Null
            } else {
                Value::Int(values.into_iter().sum())
            }
        }
        _ => panic!("not an aggregate: {expr:?}"),
    }
}

/// Rows holding a single column called `column`
pub fn rows(column: &str, values: &[Option<String>]) -> Vec<Row> {
    values
        .iter()
        .map(|v| HashMap::from([(column.to_string(), v.clone())]))
        .collect()
}
