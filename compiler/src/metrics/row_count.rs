use crate::ast::Expr;

use super::{Metric, MetricType};

/// `COUNT(*)`, the total against which regex counts are usually compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount;

impl RowCount {
    pub const NAME: &'static str = "rowCount";
}

impl Metric for RowCount {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn metric_type(&self) -> MetricType {
        MetricType::Integer
    }

    fn expr(&self) -> Expr {
        Expr::CountStar
    }
}
