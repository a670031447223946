use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use sneat_business::UserStatus;
use sneat_business::table::SortKey;

#[derive(Parser)]
#[command(name = "sneat")]
#[command(about = "Browse and export sneat user records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file with user records, replacing the built-in users
    #[arg(long, global = true, env = "SNEAT_USERS_FILE")]
    pub users_file: Option<PathBuf>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of users as a table
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Page to show, starting at 1
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,

        /// Rows per page (defaults to SNEAT_PAGE_SIZE or 10)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Write the matching users as CSV
    Export {
        #[command(flatten)]
        query: QueryArgs,

        /// Destination file (defaults to SNEAT_EXPORT_FILE_NAME or users.csv)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Submit credentials to the login handler
    Login {
        /// Username or email; prompted when missing
        #[arg(long, short = 'u')]
        identifier: Option<String>,

        /// Ask to be remembered on this device
        #[arg(long)]
        remember_me: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Search, filter and sort flags shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Case-insensitive match on name, email or username
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only users with this status: active, inactive, locked, new
    #[arg(long)]
    pub status: Option<UserStatus>,

    /// Only users with this role
    #[arg(long)]
    pub role: Option<String>,

    /// Only users in this department
    #[arg(long)]
    pub department: Option<String>,

    /// Sort by id, name, email, username, role, department or status
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}
