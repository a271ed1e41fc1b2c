//! Study Planner - Main Entry Point
//!
//! Thin presentation layer over the `study_planner` library: parses form-like
//! arguments, confirms deletions and prints task cards, notices and stats.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use study_planner::{
    NewTask, NullRepository, StudyPlanner, TomlRepository, formatting, local_now, logging,
    validation,
};

/// Study Planner - plan study tasks, track progress and get due-time reminders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task file (TOML). Tasks are kept in memory only when omitted
    #[arg(long, short, env = "STUDY_PLANNER_FILE", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new study task
    Add {
        /// Title: brief description
        #[arg(long)]
        title: String,
        /// Subject the task belongs to (e.g. "Mathematics")
        #[arg(long)]
        subject: String,
        /// Priority: low, medium or high
        #[arg(long)]
        priority: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Due time (HH:MM); enables a reminder
        #[arg(long)]
        time: Option<String>,
        /// Additional notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List tasks ordered by due date
    List {
        /// Filter: all, pending or completed
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Mark a task complete, or reopen a completed one
    Toggle { id: i64 },
    /// Delete a task
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Show progress statistics
    Stats,
    /// Wait for reminders of pending tasks due later today or after
    Watch,
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init_logging();

    let planner = match &args.file {
        Some(path) => StudyPlanner::new(TomlRepository::new(path))
            .with_context(|| format!("Failed to load tasks from {}", path.display()))?,
        None => StudyPlanner::new(NullRepository)?,
    };
    let mut events = planner.subscribe().await;
    let now = local_now();

    match args.command {
        Command::Add {
            title,
            subject,
            priority,
            date,
            time,
            notes,
        } => {
            let new_task = NewTask {
                title,
                subject,
                priority: Some(validation::parse_priority(&priority)?),
                due_date: Some(validation::parse_date(&date)?),
                due_time: validation::parse_time(time.as_deref().unwrap_or_default())?,
                notes,
            };
            let task = planner.add(new_task).await?;
            println!("{}", formatting::format_task(&task, now));
        }
        Command::List { filter } => {
            let filter = validation::parse_filter(&filter)?;
            let tasks = planner.list(filter).await;
            println!("{}", formatting::format_tasks(&tasks, now));
        }
        Command::Toggle { id } => {
            planner.toggle(id).await?;
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this task?")? {
                println!("Cancelled");
                return Ok(());
            }
            planner.delete(id).await?;
        }
        Command::Stats => {
            println!("{}", formatting::format_stats(&planner.stats().await));
        }
        Command::Watch => {
            let handles = planner
                .schedule_all_reminders(now, |fired| println!("{}", fired.message()))
                .await;
            if handles.is_empty() {
                println!("No upcoming reminders");
                return Ok(());
            }
            println!("Waiting for {} reminder(s), press Ctrl-C to stop", handles.len());

            let wait_all = async {
                for handle in handles {
                    handle.wait().await;
                }
            };
            tokio::select! {
                _ = wait_all => {}
                _ = tokio::signal::ctrl_c() => {}
            }
        }
    }

    while let Ok(event) = events.try_recv() {
        println!("{}", formatting::notice_for(&event));
    }
    Ok(())
}
