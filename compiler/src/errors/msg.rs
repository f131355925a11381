pub fn missing_property(metric: &str, property: &str) -> String {
    format!("Metric `{metric}` requires the `{property}` property to be set.")
}

pub fn unknown_metric(metric_name: &str) -> String {
    format!("Metric `{}` does not exist.", metric_name)
}

pub fn unknown_dialect(dialect_name: &str) -> String {
    format!("Dialect `{}` is not supported.", dialect_name)
}

pub fn unsupported_expression(dialect_name: &str, expression_name: &str) -> String {
    format!(
        "No rendering of `{}` exists for the {} dialect.",
        expression_name, dialect_name
    )
}

pub fn invalid_request(detail: &str) -> String {
    format!("Profile request is not valid JSON: {detail}")
}

pub fn no_metrics() -> String {
    "A profile request must contain at least one metric.".to_string()
}
