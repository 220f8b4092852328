// ABOUTME: Domain core for todo items
// ABOUTME: Validates inputs, merges partial updates onto stored records, delegates to a Storer

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{TodoError, TodoResult};
use crate::types::TodoItem;

/// Storage capability the domain core depends on. Implemented by
/// [`crate::SqliteStore`]; mocked in tests so the core can be exercised
/// without a database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storer: Send + Sync {
    async fn create(&self, item: TodoItem) -> TodoResult<TodoItem>;
    async fn update(&self, item: TodoItem) -> TodoResult<TodoItem>;
    async fn get_by_id(&self, id: &str) -> TodoResult<TodoItem>;
    // could be improved to return additional metadata/page/row/etc
    async fn get_all(&self) -> TodoResult<Vec<TodoItem>>;
}

/// Injectable clock for `updated` stamps, so time-dependent mutation is
/// deterministic under test.
pub type Clock = fn() -> DateTime<Utc>;

pub struct Core {
    storer: Arc<dyn Storer>,
    now: Clock,
}

impl Core {
    pub fn new(storer: Arc<dyn Storer>) -> Self {
        Self::with_clock(storer, Utc::now)
    }

    pub fn with_clock(storer: Arc<dyn Storer>, now: Clock) -> Self {
        Self { storer, now }
    }

    /// Creates a new todo item after basic validation. The storage layer
    /// assigns the id and both timestamps.
    pub async fn create(&self, new_item: TodoItem) -> TodoResult<TodoItem> {
        if new_item.id.is_some() {
            return Err(TodoError::InvalidParameter(
                "cannot create a todo item with an already existing id".to_string(),
            ));
        }
        if new_item.summary.as_deref().map_or(true, str::is_empty) {
            return Err(TodoError::InvalidParameter(
                "summary cannot be empty".to_string(),
            ));
        }
        self.storer.create(new_item).await
    }

    /// Fetches the stored record, merges the partial update onto it, stamps
    /// `updated` with the current time, and persists the result. Only fields
    /// present in the request overwrite stored values.
    pub async fn update(&self, new_item: TodoItem, id: &str) -> TodoResult<TodoItem> {
        if id.is_empty() {
            // should never really get here from the restful api
            return Err(TodoError::NoId);
        }
        if new_item.summary.as_deref().map_or(true, str::is_empty) {
            return Err(TodoError::InvalidParameter(
                "cannot have empty summary".to_string(),
            ));
        }

        let old_item = self.storer.get_by_id(id).await?;

        let mut to_save = merge_items(old_item, new_item);
        to_save.updated = Some((self.now)());

        self.storer.update(to_save).await
    }

    pub async fn get_all(&self) -> TodoResult<Vec<TodoItem>> {
        self.storer.get_all().await
    }
}

/// Merge-on-update: only `completed`, `deleted`, and `summary` can be
/// overwritten by a request; `id` and `created` are immutable.
fn merge_items(mut old: TodoItem, new: TodoItem) -> TodoItem {
    if new.completed.is_some() {
        old.completed = new.completed;
    }
    if new.deleted.is_some() {
        old.deleted = new.deleted;
    }
    if new.summary.is_some() {
        old.summary = new.summary;
    }
    old
}
