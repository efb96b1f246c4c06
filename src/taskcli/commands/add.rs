use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskError};
use crate::model::Task;
use crate::store::TaskStore;

use super::helpers::next_id;

pub fn run<S: TaskStore>(store: &mut S, description: &str) -> Result<CmdResult> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TaskError::Api("Description cannot be empty".into()));
    }

    let mut tasks = store.load()?;
    let task = Task::new(next_id(&tasks), description.to_string());
    let id = task.id;
    tasks.push(task.clone());
    store.persist(&tasks)?;

    let mut result = CmdResult::default().with_affected_tasks(vec![task]);
    result.add_message(CmdMessage::success(format!(
        "Task added successfully (ID: {})",
        id
    )));
    Ok(result)
}
