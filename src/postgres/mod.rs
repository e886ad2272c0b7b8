// PostgreSQL module - everything that talks to the database lives here.
//
// Split into sub-modules:
// - config: the five-key connection configuration and TOML loading
// - params: parameter conversion between RowValues and tokio-postgres types
// - query: extraction of driver rows into Row values
// - provider: per-call connection acquisition (ConnectionProvider / PgSession)
// - executor: the single-statement helpers exec_get_one / exec_commit

pub mod config;
pub mod executor;
pub mod params;
pub mod provider;
pub mod query;

pub use config::DbConfig;
pub use executor::{exec_commit, exec_get_one};
pub use params::Params;
pub use provider::{ConnectionProvider, PgConnectionProvider, PgSession};
