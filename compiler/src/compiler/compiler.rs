use log::debug;

use crate::{
    ast::Expr,
    errors::{msg, Error, ErrorKind},
    metrics::Metric,
    sql::tree::{Column, Select},
    Options,
};

use super::{expr::convert_expr, rendering::Render, request::ProfileRequest};

pub struct Compiler {
    options: Options,
}

impl Compiler {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Compile a JSON profile request into a single aggregate query.
    pub fn compile(&self, request_json: &str) -> Result<String, Error> {
        let request = ProfileRequest::from_json(request_json)?;
        self.compile_request(&request)
    }

    pub fn compile_request(&self, request: &ProfileRequest) -> Result<String, Error> {
        self.compile_metrics(&request.table, &request.metrics)
    }

    /// `SELECT <metric> AS <metric name>, ... FROM <table>;`
    pub fn compile_metrics(
        &self,
        table: &str,
        metrics: &[Box<dyn Metric>],
    ) -> Result<String, Error> {
        if metrics.is_empty() {
            return Err(Error::new(ErrorKind::InvalidRequest(msg::no_metrics())));
        }
        debug!(
            "compiling {} metric(s) over `{}` for {}",
            metrics.len(),
            table,
            self.options.dialect.name()
        );
        let mut select = Select::from(table.to_owned());
        for metric in metrics {
            let expr = convert_expr(&metric.expr(), &self.options)?;
            debug!("{} => {}", metric.name(), expr);
            select
                .columns
                .push(Column::new(expr, Some(metric.name().to_owned())));
        }
        Ok(format!("{};", select.render(&self.options)))
    }

    /// Render one expression on its own, without any surrounding query.
    pub fn compile_expr(&self, expr: &Expr) -> Result<String, Error> {
        Ok(convert_expr(expr, &self.options)?.render(&self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::ColumnRef,
        metrics::{MatchRegexCount, NotMatchRegexCount},
        sql::{BigQuery, DialectName},
    };

    #[test]
    fn test_compile_expr() {
        let compiler = Compiler::new(Options::new(Box::new(BigQuery())));
        let metric = MatchRegexCount::new(ColumnRef::new("name"), "^J");
        assert_eq!(
            compiler.compile_expr(&metric.expr()).unwrap(),
            "SUM(CASE WHEN REGEXP_CONTAINS(name, r'^J') THEN 1 ELSE 0 END)"
        );
    }

    #[test]
    fn test_compile_metrics() {
        let compiler = Compiler::new(DialectName::Postgres.into());
        let metrics: Vec<Box<dyn Metric>> = vec![
            Box::new(MatchRegexCount::new(ColumnRef::new("email"), "@example\\.com$")),
            Box::new(NotMatchRegexCount::new(ColumnRef::new("email"), "@example\\.com$")),
        ];
        let sql = compiler.compile_metrics("users", &metrics).unwrap();
        assert_eq!(
            sql,
            [
                "SELECT",
                "  SUM(CASE WHEN email ~ '@example\\.com$' THEN 1 ELSE 0 END) AS \"matchRegexCount\",",
                "  SUM(CASE WHEN email ~ '@example\\.com$' THEN 0 ELSE 1 END) AS \"notMatchRegexCount\"",
                "FROM users;",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_compile_metrics_requires_a_metric() {
        let compiler = Compiler::new(DialectName::BigQuery.into());
        let error = compiler.compile_metrics("users", &[]).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::InvalidRequest(msg::no_metrics())
        );
    }

    #[test]
    fn test_compile_fails_for_dialect_without_regex() {
        let compiler = Compiler::new(DialectName::Sqlite.into());
        let request = r#"{"table": "t", "metrics": [{"metric": "matchRegexCount", "column": "c", "expression": "x"}]}"#;
        let error = compiler.compile(request).unwrap_err();
        assert!(!error.is_configuration());
    }
}
