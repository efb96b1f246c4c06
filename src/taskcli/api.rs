//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all taskcli operations, regardless of the UI being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that lives in `commands/*.rs`), no I/O, and no
//! presentation. `TaskApi<S: TaskStore>` is generic over the storage backend:
//! `TaskApi<FileStore>` in production, `TaskApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Status, TaskId};
use crate::store::TaskStore;

/// The main API facade for taskcli operations.
///
/// Generic over `TaskStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct TaskApi<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_task(&mut self, description: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, description)
    }

    pub fn update_task(&mut self, id: TaskId, description: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, description)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn mark_task(&mut self, id: TaskId, status: Status) -> Result<commands::CmdResult> {
        commands::mark::run(&mut self.store, id, status)
    }

    pub fn list_tasks(&self, filter: Option<Status>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_through_the_facade() {
        let mut api = TaskApi::new(InMemoryStore::new());

        let added = api.add_task("buy milk").unwrap();
        assert_eq!(added.affected_tasks[0].id, 1);

        api.mark_task(1, Status::Done).unwrap();
        let done = api.list_tasks(Some(Status::Done)).unwrap();
        assert_eq!(done.listed_tasks.len(), 1);

        api.delete_task(1).unwrap();
        assert!(api.list_tasks(None).unwrap().listed_tasks.is_empty());
    }
}
