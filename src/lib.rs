pub mod api;
pub mod error;
pub mod postgres;
pub mod results;
pub mod script;
pub mod types;

pub use error::TodoDbError;
pub use postgres::config::DbConfig;
pub use postgres::executor::{exec_commit, exec_get_one};
pub use postgres::provider::{ConnectionProvider, PgConnectionProvider, PgSession};
pub use results::Row;
pub use script::{exec_sql_file, split_statements};
pub use types::RowValues;
