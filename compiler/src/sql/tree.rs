pub use super::expr::{SqlExpr, SqlExprPrecedence};

#[derive(Debug)]
pub struct Select {
    /// Possibly qualified, e.g. `project.dataset.table`. Each part is quoted separately.
    pub base_table: String,
    pub columns: Vec<Column>,
}

#[derive(Debug)]
pub struct Column {
    pub expr: SqlExpr,
    pub alias: Option<String>,
}

impl Column {
    pub fn new(expr: SqlExpr, alias: Option<String>) -> Self {
        Self { expr, alias }
    }
}

impl From<String> for Select {
    fn from(base_table: String) -> Self {
        Self {
            base_table,
            columns: vec![],
        }
    }
}
