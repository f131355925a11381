use itertools::Itertools;

use crate::{
    ast::ColumnRef,
    sql::{Dialect, DialectName},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierQuoting {
    /// Quote only identifiers that would otherwise be misread. On Postgres that gives
    /// `"firstName"` but `name`.
    AsNeeded,
    /// Quote every identifier.
    Always,
}

impl Default for IdentifierQuoting {
    fn default() -> Self {
        IdentifierQuoting::AsNeeded
    }
}

pub struct Options {
    pub dialect: Box<dyn Dialect>,
    pub identifier_quoting: IdentifierQuoting,
}

impl Options {
    pub fn new(dialect: Box<dyn Dialect>) -> Self {
        Self {
            dialect,
            identifier_quoting: IdentifierQuoting::default(),
        }
    }

    /// Render a single identifier such as a column name or an alias.
    pub fn identifier(&self, ident: &str) -> String {
        match self.identifier_quoting {
            IdentifierQuoting::AsNeeded if self.dialect.is_plain_identifier(ident) => {
                ident.to_owned()
            }
            _ => self.dialect.quote_identifier(ident),
        }
    }

    /// Render a possibly qualified table name, quoting each dot-separated part on its own.
    pub fn table(&self, name: &str) -> String {
        name.split('.').map(|part| self.identifier(part)).join(".")
    }

    pub fn column(&self, column: &ColumnRef) -> String {
        let name = self.identifier(&column.name);
        match &column.table {
            Some(table) => format!("{}.{}", self.table(table), name),
            None => name,
        }
    }
}

impl From<DialectName> for Options {
    fn from(dialect_name: DialectName) -> Self {
        Options::new(dialect_name.dialect())
    }
}
