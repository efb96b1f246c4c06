use super::TaskStore;
use crate::error::Result;
use crate::model::Task;

/// In-memory storage for testing and development.
/// Does NOT persist data across instances.
#[derive(Default)]
pub struct InMemoryStore {
    tasks: Vec<Task>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn persist(&mut self, tasks: &[Task]) -> Result<()> {
        self.tasks = tasks.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Status;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_tasks(mut self, count: usize) -> Self {
            let mut tasks = self.store.load().unwrap();
            for i in 0..count {
                let id = (tasks.len() + 1) as u64;
                tasks.push(Task::new(id, format!("Test task {}", i + 1)));
            }
            self.store.persist(&tasks).unwrap();
            self
        }

        pub fn with_task(mut self, description: &str, status: Status) -> Self {
            let mut tasks = self.store.load().unwrap();
            let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            let mut task = Task::new(id, description.to_string());
            task.status = status;
            tasks.push(task);
            self.store.persist(&tasks).unwrap();
            self
        }
    }
}
