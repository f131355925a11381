mod bigquery;
mod clickhouse;
mod dialect;
mod duckdb;
mod mysql;
mod postgres;
mod registry;
mod snowflake;
mod sqlite;
mod trino;

pub mod expr;
pub mod tree;

pub use bigquery::*;
pub use clickhouse::*;
pub use dialect::Dialect;
pub use duckdb::*;
pub use mysql::*;
pub use postgres::*;
pub use registry::*;
pub use snowflake::*;
pub use sqlite::*;
pub use trino::*;
