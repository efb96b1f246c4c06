use crate::model::TaskId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task with ID {0} not found")]
    TaskNotFound(TaskId),

    #[error("Storage corrupt: {0}")]
    StorageCorrupt(#[from] serde_json::Error),

    #[error("Storage write failed: {0}")]
    StorageWrite(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TaskError>;
