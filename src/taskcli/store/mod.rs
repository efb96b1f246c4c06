//! # Storage Layer
//!
//! This module defines the storage abstraction for taskcli. The [`TaskStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole collection lives in a single `tasks.json`
//!   - Every mutation rewrites the file in full, via temp-file-then-rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`, `tasks.json` is one pretty-printed JSON array:
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "description": "buy milk",
//!     "status": "todo",
//!     "createdAt": "2026-08-29T10:15:00Z",
//!     "updatedAt": "2026-08-29T10:15:00Z"
//!   }
//! ]
//! ```
//!
//! An absent file is an empty collection, not an error: that is the expected
//! state on first run. A present but unparseable file is
//! [`TaskError::StorageCorrupt`](crate::error::TaskError::StorageCorrupt).
//!
//! ## Concurrency
//!
//! One process loads the full collection, mutates it, and writes it back.
//! Concurrent invocations race on that read-modify-write and the last writer
//! wins; the tool is single-user and does not coordinate across processes.

use crate::error::Result;
use crate::model::Task;

pub mod fs;
pub mod memory;

/// Abstract interface for task storage.
///
/// Implementations own the durable form of the collection. The collection is
/// always read and written whole; there is no partial update.
pub trait TaskStore {
    /// Load the full collection. A missing backing store is an empty
    /// collection.
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the backing store with the given collection. Readers must
    /// never observe a partially written store.
    fn persist(&mut self, tasks: &[Task]) -> Result<()>;
}
