use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notekeep")]
#[command(about = "Notekeep CLI - personal notes and profile over a local document store", long_about = None)]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory holding the document store and logs
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Act as this signed-in user id
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create, edit and list notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },
    /// Save or show the signed-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Run the navigation guard for a route and print where it lands
    Navigate {
        path: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum NoteAction {
    /// Create a note, or overwrite an existing one with --id
    Save {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        /// Repeat for several tags
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        id: Option<String>,
    },
    /// List notes, most recently updated first
    List,
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    Save {
        #[arg(long)]
        name: String,
        /// One of: male, female, other
        #[arg(long)]
        gender: String,
    },
    Show,
}
