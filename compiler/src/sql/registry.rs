use std::{fmt, str::FromStr};

use crate::errors::{Error, ErrorKind};

use super::{
    BigQuery, ClickHouse, Dialect, DuckDb, MySql, Postgres, Redshift, Snowflake, Sqlite, Trino,
};

/// Every dialect we know how to render, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectName {
    BigQuery,
    ClickHouse,
    DuckDb,
    MySql,
    Postgres,
    Redshift,
    Snowflake,
    Sqlite,
    Trino,
}

impl DialectName {
    pub const ALL: [DialectName; 9] = [
        DialectName::BigQuery,
        DialectName::ClickHouse,
        DialectName::DuckDb,
        DialectName::MySql,
        DialectName::Postgres,
        DialectName::Redshift,
        DialectName::Snowflake,
        DialectName::Sqlite,
        DialectName::Trino,
    ];

    pub fn dialect(self) -> Box<dyn Dialect> {
        match self {
            DialectName::BigQuery => Box::new(BigQuery()),
            DialectName::ClickHouse => Box::new(ClickHouse()),
            DialectName::DuckDb => Box::new(DuckDb()),
            DialectName::MySql => Box::new(MySql()),
            DialectName::Postgres => Box::new(Postgres()),
            DialectName::Redshift => Box::new(Redshift()),
            DialectName::Snowflake => Box::new(Snowflake()),
            DialectName::Sqlite => Box::new(Sqlite()),
            DialectName::Trino => Box::new(Trino()),
        }
    }

    pub fn as_str(self) -> &'static str {
        self.dialect().name()
    }
}

impl FromStr for DialectName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        DialectName::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::new(ErrorKind::UnknownDialect(name.to_owned())))
    }
}

impl fmt::Display for DialectName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
