//! SQL seed-script loading.
//!
//! Scripts are split into individual statements on the literal `;` and each
//! statement commits independently (autocommit-per-statement). A failing
//! statement therefore never undoes earlier ones: with `stop_on_error` the
//! loader reports the failure and abandons the rest, without it the failure
//! is logged and skipped while the count of successes keeps growing.

use std::fs;
use std::path::Path;

use crate::error::TodoDbError;
use crate::postgres::provider::ConnectionProvider;

/// Split raw script text into trimmed, non-empty statements.
///
/// The split is purely lexical: a `;` inside a quoted string, a comment, or a
/// procedural body is treated as a statement boundary too. That is a known,
/// accepted limitation for the simple schema/seed files this is meant for.
#[must_use]
pub fn split_statements(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Execute the SQL statements in the file at `path`, one autocommitted
/// statement at a time, and return how many executed without error.
///
/// One session is opened for the whole batch; it is released on every exit
/// path. An empty or whitespace-only script returns 0 without opening a
/// session at all.
///
/// # Errors
/// - `TodoDbError::ScriptNotFound` if `path` does not exist (checked before
///   any connection is opened).
/// - `TodoDbError::ConnectionError` if no session can be opened.
/// - `TodoDbError::ScriptError` wrapping the first statement failure when
///   `stop_on_error` is true; statements that already ran stay committed.
///   When `stop_on_error` is false, statement failures are logged and
///   skipped instead.
pub async fn exec_sql_file(
    provider: &impl ConnectionProvider,
    path: impl AsRef<Path>,
    stop_on_error: bool,
) -> Result<usize, TodoDbError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TodoDbError::ScriptNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let statements = split_statements(&content);
    if statements.is_empty() {
        return Ok(0);
    }

    let session = provider.connect().await?;
    let mut executed = 0;

    for (index, stmt) in statements.iter().enumerate() {
        match session.execute_autocommit(stmt).await {
            Ok(()) => executed += 1,
            Err(source) => {
                if stop_on_error {
                    return Err(TodoDbError::ScriptError { index, source });
                }
                tracing::warn!(index, error = %source, "skipping failed script statement");
            }
        }
    }

    tracing::debug!(executed, path = %path.display(), "script executed");
    Ok(executed)
}
