// ABOUTME: SQLite storage adapter for todo items
// ABOUTME: Maps rows to domain records and SQL failures to domain error kinds

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::core::Storer;
use crate::error::{TodoError, TodoResult};
use crate::types::TodoItem;

const SELECT_COLUMNS: &str = "id, summary, date_created, date_updated, deleted, completed";

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storer for SqliteStore {
    async fn create(&self, item: TodoItem) -> TodoResult<TodoItem> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("failed to start transaction: {}", e);
            TodoError::Internal
        })?;

        // The id is generated here and the row re-read by it within the same
        // transaction, so generated column defaults come back without any
        // reliance on insert recency.
        let id = Uuid::new_v4().to_string();
        let result = sqlx::query("INSERT INTO todo_item (id, summary) VALUES (?, ?)")
            .bind(&id)
            .bind(&item.summary)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                warn!("error creating new todo item in database: {}", e);
                TodoError::Unknown
            })?;
        debug!(
            rows_affected = result.rows_affected(),
            id = %id,
            "inserted new todo item"
        );

        let row = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM todo_item WHERE id = ?"
        ))
        .bind(&id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            warn!("error reading back inserted todo item: {}", e);
            TodoError::Unknown
        })?;
        let created = row_to_item(&row).map_err(|e| {
            warn!("error scanning inserted todo item: {}", e);
            TodoError::Unknown
        })?;

        tx.commit().await.map_err(|e| {
            warn!("error committing todo item insert: {}", e);
            TodoError::Unknown
        })?;

        Ok(created)
    }

    async fn update(&self, item: TodoItem) -> TodoResult<TodoItem> {
        let id = item.id.as_deref().ok_or(TodoError::NoId)?;

        let result = sqlx::query(
            r#"
            UPDATE todo_item
            SET summary = ?, date_updated = ?, deleted = ?, completed = ?
            WHERE id = ?
            "#,
        )
        .bind(&item.summary)
        .bind(item.updated)
        .bind(item.deleted)
        .bind(item.completed)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("error updating todo item {}: {}", id, e);
            TodoError::Unknown
        })?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id.to_string()));
        }

        Ok(item)
    }

    async fn get_by_id(&self, id: &str) -> TodoResult<TodoItem> {
        let row = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM todo_item WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("unknown error querying todo item {}: {}", id, e);
            TodoError::Unknown
        })?;

        match row {
            Some(row) => row_to_item(&row).map_err(|e| {
                error!("error scanning todo item {}: {}", id, e);
                TodoError::Unknown
            }),
            None => Err(TodoError::NotFound(id.to_string())),
        }
    }

    // could be improved to return additional metadata and better query filtering
    async fn get_all(&self) -> TodoResult<Vec<TodoItem>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("failed to start transaction: {}", e);
            TodoError::Internal
        })?;

        let rows = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM todo_item WHERE deleted = FALSE ORDER BY date_created DESC"
        ))
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            debug!("database query failed: {}", e);
            TodoError::Internal
        })?;

        tx.commit().await.map_err(|e| {
            debug!("error committing read transaction: {}", e);
            TodoError::Internal
        })?;

        rows.iter()
            .map(|row| {
                row_to_item(row).map_err(|e| {
                    error!("error scanning todo item row: {}", e);
                    TodoError::Internal
                })
            })
            .collect()
    }
}

fn row_to_item(row: &SqliteRow) -> Result<TodoItem, sqlx::Error> {
    Ok(TodoItem {
        id: Some(row.try_get("id")?),
        created: Some(row.try_get::<DateTime<Utc>, _>("date_created")?),
        updated: Some(row.try_get::<DateTime<Utc>, _>("date_updated")?),
        deleted: Some(row.try_get("deleted")?),
        completed: Some(row.try_get("completed")?),
        summary: Some(row.try_get("summary")?),
    })
}
