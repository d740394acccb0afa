use clap::{Parser, Subcommand};
use std::path::PathBuf;
use traitz::api::NoMatchPolicy;

#[derive(Parser, Debug)]
#[command(name = "traitz", bin_name = "traitz", version)]
#[command(about = "Narrow a JSON record collection by its trait values", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the record files
    #[arg(
        short,
        long,
        global = true,
        env = "TRAITZ_DATA_DIR",
        default_value = ".",
        help_heading = "Options"
    )]
    pub data_dir: PathBuf,

    /// Highest numbered record file to read (overrides config)
    #[arg(short = 'n', long, global = true, help_heading = "Options")]
    pub count: Option<usize>,

    /// Read this pre-joined file instead of numbered files
    #[arg(long, global = true, help_heading = "Options")]
    pub combined: Option<String>,

    /// Read numbered files even when a combined file exists
    #[arg(
        long,
        global = true,
        conflicts_with = "combined",
        help_heading = "Options"
    )]
    pub numbered: bool,

    /// What to show when nothing is checked or nothing matches (sentinel, empty)
    #[arg(long, global = true, help_heading = "Options")]
    pub policy: Option<NoMatchPolicy>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List trait types and their values
    #[command(alias = "ls")]
    Facets,

    /// Check trait values and print the matching records
    #[command(alias = "f")]
    Filter {
        /// Selections as TRAIT=VALUE, toggled in order
        #[arg(num_args = 0..)]
        pairs: Vec<String>,
    },

    /// Interactive session: toggle values and watch the result narrow
    #[command(alias = "sh")]
    Shell,

    /// Join numbered record files into one JSON array
    Join {
        /// Output file (defaults to the combined file in the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (policy, sentinel-name, record-count, combined-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
