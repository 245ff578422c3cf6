use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catcfg")]
#[command(about = "Local-first document category configuration manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (also: CATCFG_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a fresh draft with default values
    #[command(alias = "n")]
    New,

    /// Apply field=value assignments to the draft
    #[command(alias = "e")]
    Edit {
        /// Assignments, e.g. name=Invoices sensitive=true
        #[arg(required = true, num_args = 1..)]
        assignments: Vec<String>,
    },

    /// Show the draft as the printable report
    Show,

    /// Save the draft to the local store
    #[command(alias = "s")]
    Save,

    /// Replace the draft with a stored record
    Load {
        /// Record id, e.g. CAT-1234
        id: String,
    },

    /// Delete the draft's record from the store
    #[command(alias = "rm")]
    Delete,

    /// Turn the draft into a copy of itself
    #[command(alias = "cp")]
    Copy,

    /// List stored records
    #[command(alias = "ls")]
    List {
        /// Substring filter over id and name
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Export the draft as a report (xlsx, csv or pdf)
    Export {
        /// Target format
        format: String,

        /// Directory to write the report into
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// List the form fields, their kinds and options
    Fields,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
