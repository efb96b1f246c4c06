use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::str::FromStr;
use taskcli::api::{CmdMessage, MessageLevel, TaskApi};
use taskcli::config::TaskConfig;
use taskcli::error::{Result, TaskError};
use taskcli::model::{Status, Task, TaskId};
use taskcli::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    match run() {
        Ok(()) => {}
        // Not-found is a user-facing message, not a failure: the process
        // still exits 0.
        Err(TaskError::TaskNotFound(id)) => {
            println!("Task with ID {} not found.", id);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

struct AppContext {
    api: TaskApi<FileStore>,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { description }) => handle_add(&mut ctx, &description),
        Some(Commands::Update { id, description }) => handle_update(&mut ctx, id, &description),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::MarkInProgress { id }) => handle_mark(&mut ctx, id, Status::InProgress),
        Some(Commands::MarkDone { id }) => handle_mark(&mut ctx, id, Status::Done),
        Some(Commands::List { status }) => handle_list(&mut ctx, status),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("TASKCLI_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs = ProjectDirs::from("com", "taskcli", "taskcli")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = TaskConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.join(config.get_data_file()));
    let api = TaskApi::new(store);

    Ok(AppContext { api, data_dir })
}

fn handle_add(ctx: &mut AppContext, description: &str) -> Result<()> {
    let result = ctx.api.add_task(description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: TaskId, description: &str) -> Result<()> {
    let result = ctx.api.update_task(id, description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: TaskId) -> Result<()> {
    let result = ctx.api.delete_task(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mark(ctx: &mut AppContext, id: TaskId, status: Status) -> Result<()> {
    let result = ctx.api.mark_task(id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, status: Option<String>) -> Result<()> {
    let filter = match status {
        Some(s) => Some(Status::from_str(&s).map_err(TaskError::Api)?),
        None => None,
    };
    let result = ctx.api.list_tasks(filter)?;
    print_tasks(&result.listed_tasks);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = TaskConfig::load(&ctx.data_dir).unwrap_or_default();
    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            println!("data-file = {}", config.get_data_file());
        }
        (Some("data-file"), Some(v)) => {
            config.set_data_file(&v);
            config.save(&ctx.data_dir)?;
            println!("data-file = {}", config.get_data_file());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let id_width = tasks
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);

    for task in tasks {
        let idx_str = format!("{:>width$}. ", task.id, width = id_width);
        let status_tag = format!("[{}]", task.status);
        // Pad to the widest tag so descriptions line up
        let status_padded = format!("{:<13} ", status_tag);

        let fixed_width = idx_str.width() + status_padded.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let desc_display = truncate_to_width(&task.description, available);
        let padding = available.saturating_sub(desc_display.width());

        let status_colored = match task.status {
            Status::Todo => status_padded.normal(),
            Status::InProgress => status_padded.yellow(),
            Status::Done => status_padded.green(),
        };

        let time_ago = format_time_ago(task.updated_at);

        println!(
            "{}{}{}{}{}",
            idx_str,
            status_colored,
            desc_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
