//! `sneat`: list, export and log in against the user records from a terminal.

mod cli;
mod commands;
mod context;
mod output;
mod sink;
mod timing;

use anyhow::Result;
use clap::Parser as _;

use crate::cli::{Cli, Commands};
use crate::context::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    match cli.command {
        Commands::List {
            query,
            page,
            page_size,
        } => commands::run_list(load_config(cli.users_file, page_size)?, &query, page),
        Commands::Export { query, output } => {
            commands::run_export(load_config(cli.users_file, None)?, &query, output)
        }
        Commands::Login {
            identifier,
            remember_me,
        } => commands::run_login(load_config(cli.users_file, None)?, identifier, remember_me),
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}
