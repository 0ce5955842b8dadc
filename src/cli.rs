//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prompt-shelf", version, about = "Categorized prompt shelf")]
pub struct Cli {
    /// Data directory (defaults to ~/.prompt-shelf)
    #[arg(long, global = true, env = "PROMPT_SHELF_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// List prompts grouped by category
    List {
        #[arg(long, help = "Expand the given category (repeatable)")]
        open: Vec<String>,
        #[arg(long, help = "Expand every category")]
        all: bool,
        #[arg(long, help = "Show prompt text under each title")]
        full: bool,
    },
    /// Add a prompt; missing values are asked for interactively
    Add {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        prompt: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Import prompts from a CSV file with columns title,prompt,category
    Import { file: PathBuf },
    /// Copy a prompt to clipboard
    Copy {
        category: String,
        /// 1-based position of the prompt within the category
        position: usize,
    },
    /// List category names
    Categories,
    /// Start an interactive session (REPL)
    Interactive,
}
