use async_trait::async_trait;
use tokio_postgres::{Client, NoTls};

use crate::error::TodoDbError;
use crate::postgres::config::DbConfig;
use crate::postgres::params::Params;
use crate::postgres::query::row_from_pg;
use crate::results::Row;
use crate::types::RowValues;

/// Source of fresh database sessions.
///
/// Every call to `connect` opens a new, exclusively-owned session; nothing is
/// cached or shared between calls. A pool could later implement this same
/// trait without changing any call site.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Open a new session.
    ///
    /// # Errors
    /// Returns `TodoDbError::ConnectionError` when the database refuses the
    /// session (bad credentials, unreachable host, etc.).
    async fn connect(&self) -> Result<PgSession, TodoDbError>;
}

/// Opens one unpooled `tokio_postgres` session per `connect` call.
#[derive(Debug, Clone)]
pub struct PgConnectionProvider {
    config: DbConfig,
}

impl PgConnectionProvider {
    #[must_use]
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ConnectionProvider for PgConnectionProvider {
    async fn connect(&self) -> Result<PgSession, TodoDbError> {
        let (client, connection) = self
            .config
            .pg_config()
            .connect(NoTls)
            .await
            .map_err(|e| TodoDbError::ConnectionError(format!("failed to connect: {e}")))?;

        // The connection future drives the socket; it resolves once the
        // client is dropped.
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::warn!("postgres connection error: {e}");
            }
        });

        Ok(PgSession { client, driver })
    }
}

/// One live, exclusively-owned session.
///
/// Release is tied to scope: dropping the session on any exit path, success
/// or error, closes the client and stops the driver task. Callers never need
/// an explicit close call.
pub struct PgSession {
    client: Client,
    driver: tokio::task::JoinHandle<()>,
}

impl PgSession {
    /// Run a parameterized query and return the first row, or `None` when the
    /// query matches nothing.
    ///
    /// # Errors
    /// Returns the driver error when the SQL is invalid or execution fails.
    pub async fn query_opt(
        &self,
        sql: &str,
        params: &[RowValues],
    ) -> Result<Option<Row>, TodoDbError> {
        let converted = Params::convert(params);
        let rows = self.client.query(sql, converted.as_refs()).await?;
        rows.first().map(row_from_pg).transpose()
    }

    /// Run a parameterized DML statement inside an explicit transaction and
    /// commit it, returning the affected row count.
    ///
    /// On failure the transaction guard is dropped unconsumed, which rolls
    /// the statement back: only full success commits.
    ///
    /// # Errors
    /// Returns the driver error on statement or commit failure.
    pub async fn execute_commit(
        &mut self,
        sql: &str,
        params: &[RowValues],
    ) -> Result<usize, TodoDbError> {
        let tx = self.client.transaction().await?;
        let converted = Params::convert(params);
        let rows = tx.execute(sql, converted.as_refs()).await?;
        tx.commit().await?;

        usize::try_from(rows)
            .map_err(|e| TodoDbError::ExecutionError(format!("invalid rows affected count: {e}")))
    }

    /// Run one statement with no parameters outside any explicit transaction,
    /// so the server wraps it in its own implicit one (autocommit).
    ///
    /// # Errors
    /// Returns the raw driver error so callers can wrap it.
    pub async fn execute_autocommit(&self, sql: &str) -> Result<(), tokio_postgres::Error> {
        self.client.batch_execute(sql).await
    }
}

impl Drop for PgSession {
    fn drop(&mut self) {
        self.driver.abort();
    }
}
