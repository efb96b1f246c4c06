use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::TaskStore;

/// Deletion is idempotent: removing an id that is not there is a no-op, not
/// an error. The collection is persisted either way.
pub fn run<S: TaskStore>(store: &mut S, id: TaskId) -> Result<CmdResult> {
    let mut tasks = store.load()?;
    tasks.retain(|t| t.id != id);
    store.persist(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task deleted successfully (ID: {})",
        id
    )));
    Ok(result)
}
