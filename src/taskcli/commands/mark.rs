use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Status, TaskId};
use crate::store::TaskStore;

use super::helpers::find_task_mut;

/// Any status can be set from any other; there is no workflow ordering
/// between the three states.
pub fn run<S: TaskStore>(store: &mut S, id: TaskId, status: Status) -> Result<CmdResult> {
    let mut tasks = store.load()?;

    let task = find_task_mut(&mut tasks, id)?;
    task.status = status;
    task.touch();
    let marked = task.clone();

    store.persist(&tasks)?;

    let mut result = CmdResult::default().with_affected_tasks(vec![marked]);
    result.add_message(CmdMessage::success(format!(
        "Task marked as {} (ID: {})",
        status, id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};
    use crate::error::TaskError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn marks_task_done() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "a").unwrap();

        run(&mut store, 1, Status::Done).unwrap();

        let done = list::run(&store, Some(Status::Done)).unwrap().listed_tasks;
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, 1);

        let todo = list::run(&store, Some(Status::Todo)).unwrap().listed_tasks;
        assert!(todo.is_empty());
    }

    #[test]
    fn any_transition_is_allowed() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "a").unwrap();

        run(&mut store, 1, Status::Done).unwrap();
        run(&mut store, 1, Status::InProgress).unwrap();
        run(&mut store, 1, Status::Todo).unwrap();

        let task = &list::run(&store, None).unwrap().listed_tasks[0];
        assert_eq!(task.status, Status::Todo);
    }

    #[test]
    fn refreshes_updated_at() {
        let mut store = InMemoryStore::new();
        let before = add::run(&mut store, "a").unwrap().affected_tasks[0].updated_at;

        run(&mut store, 1, Status::InProgress).unwrap();

        let task = &list::run(&store, None).unwrap().listed_tasks[0];
        assert!(task.updated_at >= before);
    }

    #[test]
    fn missing_id_is_task_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, 7, Status::Done),
            Err(TaskError::TaskNotFound(7))
        ));
    }
}
