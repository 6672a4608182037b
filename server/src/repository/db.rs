//! Database Connection and Setup
//!
//! Opens the SQLite database and creates the task table. The schema models a
//! partitioned table: the composite primary key is (family_code, task_id).

use std::path::Path;

use rusqlite::Connection;

/// Opens (or creates) the database file and runs schema setup
pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// In-memory database, used by tests
pub fn open_in_memory() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS family_tasks (
            family_code      TEXT NOT NULL,
            task_id          TEXT NOT NULL,
            title            TEXT NOT NULL,
            date             TEXT NOT NULL,
            is_completed     INTEGER NOT NULL DEFAULT 0,
            assignee         TEXT NOT NULL,
            start_time       TEXT,
            duration_minutes INTEGER,
            category         TEXT,
            PRIMARY KEY (family_code, task_id)
        );
        CREATE INDEX IF NOT EXISTS idx_family_tasks_date
            ON family_tasks(family_code, date);",
    )
}
