use crate::error::{Result, TaskError};
use crate::model::{Task, TaskId};

/// Next id to assign. `max + 1` rather than `len + 1`, so an id freed by a
/// deletion is never re-issued while a higher one is live.
pub fn next_id(tasks: &[Task]) -> TaskId {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

pub fn find_task_mut(tasks: &mut [Task], id: TaskId) -> Result<&mut Task> {
    tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TaskError::TaskNotFound(id))
}
