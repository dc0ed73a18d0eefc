use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "A terminal to-do diary", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the task file (or set CHECKLIST_FILE); defaults to ./tasks.json
    #[arg(short, long, value_name = "FILE", env = "CHECKLIST_FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Without a subcommand the interactive UI starts.
#[derive(Subcommand)]
pub enum Commands {
    /// List all tasks
    List,
    /// Add a task to the end of the list
    Add {
        /// Task title; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Mark a task as done
    Done {
        /// 1-based position in the list
        position: usize,
    },
    /// Mark a task as not done
    Undone {
        /// 1-based position in the list
        position: usize,
    },
    /// Replace a task's description
    Describe {
        /// 1-based position in the list
        position: usize,
        text: String,
    },
    /// Remove a task
    Remove {
        /// 1-based position in the list
        position: usize,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
