use std::path::PathBuf;
use clap::{Parser, Subcommand};
use pinnotes::data::{NoteFilter, NoteId};

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Short text notes you can pin and search")]
pub struct CliConfig {
    /// TOML configuration file; defaults and PINNOTES_* variables are used
    /// when omitted
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Create a note and print its id
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        subtitle: String,

        #[arg(long)]
        content: String,

        #[arg(long)]
        subject: Option<String>,
    },

    /// Edit a note; omitted fields keep their current values
    Edit {
        id: NoteId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        subtitle: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        subject: Option<String>,
    },

    /// Delete a note
    Delete {
        id: NoteId,
    },

    /// Pin or unpin a note
    Pin {
        id: NoteId,
    },

    /// List notes, pinned first
    List {
        #[arg(long, default_value = "")]
        search: String,

        /// all, pinned or unpinned
        #[arg(long, default_value = "all")]
        filter: NoteFilter,
    },

    /// Print a single note
    Show {
        id: NoteId,
    },
}
