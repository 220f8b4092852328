// ABOUTME: Todo item domain core and storage layer
// ABOUTME: Provides types, validation/merge logic, and SQLite persistence

pub mod core;
pub mod error;
pub mod storage;
pub mod types;

// Re-export main types
pub use self::core::{Core, Storer};
pub use self::error::{TodoError, TodoResult};
pub use self::storage::SqliteStore;
pub use self::types::TodoItem;
