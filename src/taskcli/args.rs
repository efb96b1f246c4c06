use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "task-cli")]
#[command(about = "File-backed command-line task tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Description of the task
        description: String,
    },

    /// Replace the description of a task
    Update {
        /// Id of the task
        id: u64,

        /// New description
        description: String,
    },

    /// Delete a task (no error if the id does not exist)
    #[command(alias = "rm")]
    Delete {
        /// Id of the task
        id: u64,
    },

    /// Mark a task as in-progress
    MarkInProgress {
        /// Id of the task
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// Id of the task
        id: u64,
    },

    /// List tasks, optionally filtered by status
    #[command(alias = "ls")]
    List {
        /// Status filter (todo, in-progress, done)
        status: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
