use addrbook::model::{ContactField, SearchField};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Personal address book with birthday reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the address book, activity log and config
    #[arg(long, global = true, env = "ADDRBOOK_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// List every contact
    #[command(alias = "ls")]
    List,

    /// Search one field for a case-insensitive substring
    #[command(alias = "s")]
    Search {
        /// Text to look for
        pattern: String,

        /// Field to search: name, email, status or note
        #[arg(short, long, default_value = "name")]
        field: SearchField,
    },

    /// Show contacts with a birthday this week
    #[command(alias = "congratulate")]
    Birthdays,

    /// Add a contact
    #[command(alias = "n")]
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Phone numbers, separated by commas
        #[arg(long, default_value = "")]
        phones: String,

        /// Birthday as YYYY-MM-DD
        #[arg(long)]
        birthday: Option<String>,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        status: String,

        #[arg(long, default_value = "")]
        note: String,
    },

    /// Change one field of the first contact with this exact name
    #[command(alias = "e")]
    Edit {
        /// Contact name (case-insensitive, full match)
        name: String,

        /// name, phones, birthday, email, status or note
        field: ContactField,

        /// New value (phones comma separated, birthday YYYY-MM-DD or empty)
        value: String,
    },

    /// Remove the first contact whose name contains the pattern
    #[command(alias = "rm")]
    Remove { pattern: String },

    /// Show the activity log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (book-file, log-file, birthday-match)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}
