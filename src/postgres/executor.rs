use crate::error::TodoDbError;
use crate::postgres::provider::ConnectionProvider;
use crate::results::Row;
use crate::types::RowValues;

/// Execute a parameterized query and return the first result row, or `None`
/// when nothing matches.
///
/// Opens a fresh session for this one call and releases it on every exit
/// path, including query failure. Placeholders are `$1..$n`.
///
/// # Errors
/// Returns `TodoDbError::ConnectionError` when no session can be opened, or
/// the driver error when the query fails.
pub async fn exec_get_one(
    provider: &impl ConnectionProvider,
    sql: &str,
    params: &[RowValues],
) -> Result<Option<Row>, TodoDbError> {
    let session = provider.connect().await?;
    session.query_opt(sql, params).await
}

/// Execute a parameterized DML statement (INSERT/UPDATE/DELETE-class) and
/// commit it, returning the affected row count.
///
/// The statement runs inside an explicit transaction; on failure it is rolled
/// back, so partial effects never commit. The session is released on every
/// exit path.
///
/// # Errors
/// Returns `TodoDbError::ConnectionError` when no session can be opened, or
/// the driver error when the statement fails.
pub async fn exec_commit(
    provider: &impl ConnectionProvider,
    sql: &str,
    params: &[RowValues],
) -> Result<usize, TodoDbError> {
    let mut session = provider.connect().await?;
    session.execute_commit(sql, params).await
}
