use itertools::Itertools;

use crate::{sql::tree::*, Options};

use super::constants::INDENT_SPACER;

pub trait Render {
    fn render(&self, options: &Options) -> String;
}

impl Render for SqlExpr {
    fn render(&self, _: &Options) -> String {
        self.to_string()
    }
}

impl Render for Select {
    fn render(&self, options: &Options) -> String {
        let select = "SELECT".to_string();
        let columns = indent(self.columns.render(options));
        let from = format!("FROM {}", options.table(&self.base_table));
        [select, columns, from]
            .into_iter()
            .filter(|s| !s.is_empty())
            .join("\n")
    }
}

impl Render for Vec<Column> {
    fn render(&self, options: &Options) -> String {
        self.iter()
            .map(|c| c.render(options))
            .filter(|s| !s.is_empty())
            .join(",\n")
    }
}

impl Render for Column {
    fn render(&self, options: &Options) -> String {
        let alias = self
            .alias
            .as_ref()
            .map(|a| options.identifier(a))
            .map(|alias| format!(" AS {}", alias))
            .unwrap_or_default();
        format!("{}{}", self.expr.render(options), alias)
    }
}

fn indent(s: String) -> String {
    s.lines()
        .map(|line| format!("{}{}", INDENT_SPACER, line))
        .join("\n")
}
