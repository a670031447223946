//! Synchronous state container for the sneat UI and CLI.
//!
//! - [`State`]: plain data, edited directly or through an [`Updater`]
//! - [`Compute`]: derived data, re-run when a declared dependency changes
//! - [`Command`]: explicit action, dispatched by the UI or CLI
//!
//! All three live in a [`StateCtx`]; dependency order between computes comes
//! from a [`Graph`].

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod runtime;
mod state;
mod state_sync_status;

pub use command::Command;
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use runtime::{StateRuntime, Updater};
pub use state::{State, assign_impl};
pub use state_sync_status::StateSyncStatus;
