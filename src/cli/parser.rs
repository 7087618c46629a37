use clap::{Parser, Subcommand};

/// Command-line interface definition for studytracker
#[derive(Parser)]
#[command(
    name = "studytracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple study log CLI: record study sessions and summarize hours per subject",
    long_about = None
)]
pub struct Cli {
    /// Override storage file path (useful for tests or a custom log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and storage file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a study session
    Add {
        /// Date of the session (YYYY-MM-DD), defaults to today
        date: Option<String>,

        #[arg(long, short = 's', help = "Subject studied")]
        subject: String,

        #[arg(long, short = 'H', help = "Duration in hours (e.g. 1.5)")]
        hours: String,

        #[arg(long = "desc", short = 'd', default_value = "", help = "Free-form description")]
        description: String,
    },

    /// Edit a study session; omitted fields keep their current value
    Edit {
        /// Session id as shown by `list`
        id: usize,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short = 's', help = "New subject")]
        subject: Option<String>,

        #[arg(long, short = 'H', help = "New duration in hours")]
        hours: Option<String>,

        #[arg(long = "desc", short = 'd', help = "New description")]
        description: Option<String>,
    },

    /// Delete a study session
    Del {
        /// Session id as shown by `list`
        id: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List study sessions
    List {
        #[arg(
            long,
            short = 'f',
            help = "Case-insensitive regex matched against every column"
        )]
        filter: Option<String>,
    },

    /// Show total study hours per subject
    Summary,
}
