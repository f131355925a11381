use profiler_sql::{Compiler, DialectName, Options};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn compile(request_json: &str, dialect: &str) -> Result<String, String> {
    let dialect = dialect.parse::<DialectName>().map_err(|e| e.to_string())?;
    let compiler = Compiler::new(Options::from(dialect));
    compiler.compile(request_json).map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub fn dialects() -> Vec<String> {
    DialectName::ALL.iter().map(|d| d.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile() {
        let request = r#"{"table": "users", "metrics": [{"metric": "rowCount"}]}"#;
        let sql = compile(request, "bigquery").unwrap();
        assert_eq!(sql, "SELECT\n  COUNT(*) AS `rowCount`\nFROM users;");
    }

    #[test]
    fn test_unknown_dialect() {
        let error = compile("{}", "oracle").unwrap_err();
        assert_eq!(error, "Dialect `oracle` is not supported.");
    }
}
