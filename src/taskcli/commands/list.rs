use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Status;
use crate::store::TaskStore;

pub fn run<S: TaskStore>(store: &S, filter: Option<Status>) -> Result<CmdResult> {
    let tasks = store.load()?;
    let listed: Vec<_> = match filter {
        Some(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
        None => tasks,
    };

    Ok(CmdResult::default().with_listed_tasks(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_tasks_in_insertion_order() {
        let fixture = StoreFixture::new().with_tasks(3);

        let listed = run(&fixture.store, None).unwrap().listed_tasks;
        assert_eq!(listed.len(), 3);
        let ids: Vec<_> = listed.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filters_by_status() {
        let fixture = StoreFixture::new()
            .with_task("pending", Status::Todo)
            .with_task("doing", Status::InProgress)
            .with_task("shipped", Status::Done);

        let doing = run(&fixture.store, Some(Status::InProgress))
            .unwrap()
            .listed_tasks;
        assert_eq!(doing.len(), 1);
        assert_eq!(doing[0].description, "doing");
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let fixture = StoreFixture::new();
        let listed = run(&fixture.store, Some(Status::Done)).unwrap().listed_tasks;
        assert!(listed.is_empty());
    }
}
