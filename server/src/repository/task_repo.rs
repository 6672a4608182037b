//! Task Repository
//!
//! SQLite-backed implementation of the partitioned task store. A single
//! connection is shared behind an async mutex; every statement is
//! partition-scoped by the family code.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use super::traits::TaskStore;
use crate::domain::{Assignee, Category, DomainError, DomainResult, Task};

const TASK_COLUMNS: &str =
    "family_code, task_id, title, date, is_completed, assignee, start_time, duration_minutes, category";

/// SQLite implementation of the task store
#[derive(Clone)]
pub struct SqliteTaskStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTaskStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

/// Raw column values as stored, before enum/date decoding
type TaskRow = (
    String,
    String,
    String,
    String,
    bool,
    String,
    Option<String>,
    Option<u32>,
    Option<String>,
);

fn decode_row(row: TaskRow) -> DomainResult<Task> {
    let (family_code, id, title, date, is_completed, assignee, start_time, duration_minutes, category) =
        row;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|e| DomainError::Internal(format!("stored date '{}' is invalid: {}", date, e)))?;
    let assignee = Assignee::from_str(&assignee)
        .ok_or_else(|| DomainError::Internal(format!("unknown stored assignee '{}'", assignee)))?;
    let category = match category {
        Some(c) => Some(
            Category::from_str(&c)
                .ok_or_else(|| DomainError::Internal(format!("unknown stored category '{}'", c)))?,
        ),
        None => None,
    };
    Ok(Task {
        family_code,
        id,
        title,
        date,
        is_completed,
        assignee,
        start_time,
        duration_minutes,
        category,
    })
}

fn internal(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

fn write_row(conn: &Connection, sql: &str, task: &Task) -> rusqlite::Result<usize> {
    conn.execute(
        sql,
        params![
            task.family_code,
            task.id,
            task.title,
            task.date.to_string(),
            task.is_completed,
            task.assignee.as_str(),
            task.start_time,
            task.duration_minutes,
            task.category.map(|c| c.as_str()),
        ],
    )
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn list_by_family(&self, family_code: &str) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM family_tasks WHERE family_code = ?1
                 ORDER BY date, start_time IS NULL, start_time, task_id",
                TASK_COLUMNS
            ))
            .map_err(internal)?;
        let rows = stmt
            .query_map(params![family_code], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                    row.get(8)?,
                ))
            })
            .map_err(internal)?
            .collect::<rusqlite::Result<Vec<TaskRow>>>()
            .map_err(internal)?;
        rows.into_iter().map(decode_row).collect()
    }

    async fn insert(&self, task: &Task) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let sql = format!(
            "INSERT INTO family_tasks ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            TASK_COLUMNS
        );
        match write_row(&conn, &sql, task) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(DomainError::Conflict(format!(
                    "task '{}' already exists in family '{}'",
                    task.id, task.family_code
                )))
            }
            Err(e) => Err(internal(e)),
        }
    }

    async fn replace(&self, task: &Task) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let sql = format!(
            "INSERT OR REPLACE INTO family_tasks ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            TASK_COLUMNS
        );
        write_row(&conn, &sql, task).map_err(internal)?;
        Ok(())
    }

    async fn delete(&self, family_code: &str, id: &str) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        // Deleting a row that is already gone is indistinguishable from success.
        conn.execute(
            "DELETE FROM family_tasks WHERE family_code = ?1 AND task_id = ?2",
            params![family_code, id],
        )
        .map_err(internal)?;
        Ok(())
    }
}
