//! Subcommands of the `sneat` CLI, one module each.

pub mod completions;
pub mod export;
pub mod list;
pub mod login;

pub use completions::generate_completions;
pub use export::run_export;
pub use list::run_list;
pub use login::run_login;
