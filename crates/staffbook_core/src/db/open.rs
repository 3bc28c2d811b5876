//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Create the `employees` table before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have the employee schema fully applied.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const EMPLOYEES_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    lastName TEXT NOT NULL,
    birthDate TIMESTAMP NOT NULL,
    gender INTEGER NOT NULL,
    birthCity TEXT NOT NULL
);";

/// Opens a SQLite database file and ensures the employee schema exists.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    bootstrap_connection(conn, started_at, "file")
}

/// Opens an in-memory SQLite database and ensures the employee schema exists.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    bootstrap_connection(conn, started_at, "memory")
}

/// Idempotently creates the `employees` table on the given connection.
///
/// Failure is reported as [`DbError::Schema`] carrying the engine's error
/// text, so callers can distinguish schema bootstrap problems from plain
/// statement errors later in the connection's life.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(EMPLOYEES_SCHEMA_SQL)
        .map_err(|err| DbError::Schema(err.to_string()))
}

fn bootstrap_connection(conn: Connection, started_at: Instant, mode: &str) -> DbResult<Connection> {
    conn.busy_timeout(Duration::from_secs(5))?;
    match ensure_schema(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
