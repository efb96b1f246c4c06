use super::TaskStore;
use crate::error::{Result, TaskError};
use crate::model::Task;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TaskError::Io)?;
            }
        }
        Ok(())
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(TaskError::Io)?;
        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(TaskError::StorageCorrupt)?;
        Ok(tasks)
    }

    fn persist(&mut self, tasks: &[Task]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(tasks).map_err(TaskError::StorageCorrupt)?;

        // Atomic write: a reader sees either the old file or the new one,
        // never a truncated one.
        let dir = self.data_file.parent().unwrap_or_else(|| Path::new("."));
        let tmp_file = dir.join(format!(".tasks-{}.tmp", std::process::id()));
        fs::write(&tmp_file, content).map_err(TaskError::StorageWrite)?;
        fs::rename(&tmp_file, &self.data_file).map_err(TaskError::StorageWrite)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn missing_file_loads_as_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let tasks = vec![
            Task::new(1, "buy milk".to_string()),
            Task::new(2, "walk the dog".to_string()),
        ];
        store.persist(&tasks).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn persist_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("tasks.json"));
        store.persist(&[Task::new(1, "x".to_string())]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn persist_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.persist(&[Task::new(1, "x".to_string())]).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["tasks.json".to_string()]);
    }

    #[test]
    fn garbage_file_is_storage_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("tasks.json"), "not json at all").unwrap();

        match store.load() {
            Err(TaskError::StorageCorrupt(_)) => {}
            other => panic!("expected StorageCorrupt, got {:?}", other),
        }
    }

    #[test]
    fn pretty_printed_output() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.persist(&[Task::new(1, "x".to_string())]).unwrap();

        let content = fs::read_to_string(dir.path().join("tasks.json")).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("\"createdAt\""));
    }
}
