use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::TaskStore;

use super::helpers::find_task_mut;

pub fn run<S: TaskStore>(store: &mut S, id: TaskId, description: &str) -> Result<CmdResult> {
    let mut tasks = store.load()?;

    let task = find_task_mut(&mut tasks, id)?;
    task.description = description.to_string();
    task.touch();
    let updated = task.clone();

    store.persist(&tasks)?;

    let mut result = CmdResult::default().with_affected_tasks(vec![updated]);
    result.add_message(CmdMessage::success(format!(
        "Task updated successfully (ID: {})",
        id
    )));
    Ok(result)
}
