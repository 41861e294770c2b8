//! CLI administration tool for task-manager.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin -- task list
//! cargo run --bin admin -- task show 3
//! cargo run --bin admin -- task create --title "Write report" --due 2030-01-01T09:00:00Z
//! cargo run --bin admin -- task delete 3
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `task_manager::config`.

use task_manager::api::dto::task::CreateTaskRequest;
use task_manager::config;
use task_manager::infrastructure::persistence::{SqliteTaskRepository, database};
use task_manager::prelude::*;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use validator::Validate;

type Service = TaskService<SqliteTaskRepository>;

/// CLI tool for managing task-manager.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TaskAction {
    /// List all tasks
    List,

    /// Show a single task
    Show { id: i64 },

    /// Create a task (prompts for missing title and due date)
    Create {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Due date in RFC 3339, e.g. 2030-01-01T09:00:00Z
        #[arg(long)]
        due: Option<String>,

        /// todo, in_progress or done
        #[arg(short, long, default_value = "todo")]
        status: String,
    },

    /// Delete a task
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show task counts
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = database::connect(&config.pool_settings())
        .await
        .context("Failed to connect to database")?;
    database::run_migrations(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);
    let service = TaskService::new(
        Arc::new(SqliteTaskRepository::new(pool.clone())),
        config.require_future_due_date,
    );

    let result = match cli.command {
        Commands::Task { action } => handle_task_action(action, &service).await,
        Commands::Db { action } => handle_db_action(action, &service).await,
    };

    pool.close().await;
    result
}

async fn handle_task_action(action: TaskAction, service: &Service) -> Result<()> {
    match action {
        TaskAction::List => list_tasks(service).await,
        TaskAction::Show { id } => show_task(service, id).await,
        TaskAction::Create {
            title,
            description,
            due,
            status,
        } => create_task(service, title, description, due, status).await,
        TaskAction::Delete { id, yes } => delete_task(service, id, yes).await,
    }
}

/// Lists all tasks.
///
/// ```text
/// 📋 Tasks
///
///   ID   Title                          Due                Status
///   ──────────────────────────────────────────────────────────────────
///   1    Write report                   2030-01-01 09:00   todo
/// ```
async fn list_tasks(service: &Service) -> Result<()> {
    println!("{}", "📋 Tasks".bright_blue().bold());
    println!();

    let tasks = service
        .list_tasks()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tasks: {}", e))?;

    if tasks.is_empty() {
        println!("{}", "  No tasks found".yellow());
        println!();
        println!(
            "  Create one with: {} admin task create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<18} {:<12}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Due".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(68).bright_black());

    for task in &tasks {
        let due = task.due_date.format("%Y-%m-%d %H:%M").to_string();
        let due = if task.is_overdue() {
            due.red()
        } else {
            due.bright_black()
        };

        println!(
            "  {:<4} {:<30} {:<18} {}",
            task.id.to_string().bright_black(),
            truncate(&task.title, 30).cyan(),
            due,
            colored_status(task.status)
        );
    }

    println!();
    println!("  Total: {}", tasks.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_task(service: &Service, id: i64) -> Result<()> {
    let task = service
        .get_task(id)
        .await
        .map_err(|e| anyhow::anyhow!("Task {}: {}", id, e))?;

    print_task(&task);
    Ok(())
}

/// Creates a task, prompting for anything not given on the command line.
///
/// The input goes through the same validation rules as `POST /api/tasks`.
async fn create_task(
    service: &Service,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
    status: String,
) -> Result<()> {
    println!("{}", "📝 Create Task".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let due = match due {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Due date (RFC 3339)")
            .with_initial_text(Utc::now().format("%Y-%m-%dT%H:%M:00Z").to_string())
            .interact_text()?,
    };

    let request = CreateTaskRequest {
        title,
        description,
        due_date: Some(due),
        status: Some(status),
    };
    if let Err(errors) = request.validate() {
        print_error(&AppError::from(errors));
        return Ok(());
    }

    let new_task = match NewTask::try_from(request) {
        Ok(task) => task,
        Err(e) => {
            print_error(&e);
            return Ok(());
        }
    };

    match service.create_task(new_task).await {
        Ok(task) => {
            println!("{}", "✅ Task created".green().bold());
            println!();
            print_task(&task);
        }
        Err(e @ AppError::Validation { .. }) => print_error(&e),
        Err(e) => return Err(anyhow::anyhow!("Failed to create task: {}", e)),
    }

    Ok(())
}

/// Deletes a task after confirmation (default: No).
async fn delete_task(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Task".bright_blue().bold());
    println!();

    let task = service
        .get_task(id)
        .await
        .map_err(|e| anyhow::anyhow!("Task {}: {}", id, e))?;

    println!("  Task: {}", task.title.cyan());
    println!("  ID:   {}", task.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this task permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_task(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete task: {}", e))?;

    println!("{}", "✅ Task deleted".green().bold());
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, service: &Service) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking database connection... ");
            match service.check_storage().await {
                Ok(()) => println!("{}", "OK".green().bold()),
                Err(e) => {
                    println!("{}", "FAILED".red().bold());
                    return Err(anyhow::anyhow!("Database check failed: {}", e));
                }
            }
        }
        DbAction::Info => {
            println!("{}", "📊 Database Info".bright_blue().bold());
            println!();

            let counts = service
                .status_counts()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count tasks: {}", e))?;
            let total: i64 = counts.iter().map(|(_, c)| c).sum();

            println!(
                "  Total tasks: {}",
                total.to_string().bright_white().bold()
            );
            for (status, count) in counts {
                println!("    {:<12} {}", colored_status(status), count);
            }
            println!();
        }
    }

    Ok(())
}

fn print_task(task: &Task) {
    println!("  ID:          {}", task.id.to_string().bright_black());
    println!("  Title:       {}", task.title.cyan());
    println!(
        "  Description: {}",
        task.description.as_deref().unwrap_or("-")
    );
    println!("  Due:         {}", task.due_date.to_rfc3339());
    println!("  Status:      {}", colored_status(task.status));
    println!("  Created:     {}", task.created_at.to_rfc3339());
    println!();
}

fn print_error(err: &AppError) {
    let info = err.to_error_info();
    println!("{} {}", "❌".red(), info.message.red().bold());
    if let Some(fields) = info.details.as_object() {
        for (field, messages) in fields {
            println!("  {}: {}", field.yellow(), messages);
        }
    }
}

fn colored_status(status: TaskStatus) -> ColoredString {
    match status {
        TaskStatus::Todo => status.as_str().yellow(),
        TaskStatus::InProgress => status.as_str().bright_cyan(),
        TaskStatus::Done => status.as_str().green(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}
