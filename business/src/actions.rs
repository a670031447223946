//! Bulk and per-row actions.
//!
//! Both are reported to the [`ActionSink`](crate::ActionSink) and never touch
//! the record set. The UI writes the requested action into the matching input
//! state and dispatches the command.

use std::any::Any;
use std::fmt;

use log::{info, warn};
use sneat_states::{Command, Compute, ComputeDeps, Dep, State, Updater, assign_impl};

use crate::{ActionSinkState, TableSelection, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkAction {
    Enable,
    Disable,
    Delete,
}

impl BulkAction {
    pub const ALL: [Self; 3] = [Self::Enable, Self::Disable, Self::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Delete => "delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Enable => "Enable",
            Self::Disable => "Disable",
            Self::Delete => "Delete",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Edit(UserId),
    Delete(UserId),
}

impl RowAction {
    pub fn id(self) -> UserId {
        match self {
            Self::Edit(id) | Self::Delete(id) => id,
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit(id) => write!(f, "edit user {id}"),
            Self::Delete(id) => write!(f, "delete user {id}"),
        }
    }
}

/// The last thing the user asked for, for the status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Activity {
    #[default]
    Idle,
    Bulk {
        action: BulkAction,
        count: usize,
    },
    Row(RowAction),
    Exported {
        file_name: String,
        rows: usize,
    },
    ExportFailed(String),
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::Bulk { action, count } => {
                write!(f, "{} requested for {count} user(s)", action.label())
            }
            Self::Row(action) => write!(f, "Requested: {action}"),
            Self::Exported { file_name, rows } => write!(f, "Exported {rows} user(s) to {file_name}"),
            Self::ExportFailed(reason) => write!(f, "Export failed: {reason}"),
        }
    }
}

/// Command-written cache of the latest [`Activity`].
#[derive(Debug, Default)]
pub struct ActivityCompute {
    pub activity: Activity,
}

impl Compute for ActivityCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // written by commands only
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

#[derive(Debug, Clone, Default)]
pub struct BulkActionInput {
    pub action: Option<BulkAction>,
}

impl State for BulkActionInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

/// Reports `BulkActionInput.action` for the current selection.
///
/// An empty selection is a no-op with a warning.
#[derive(Debug, Default)]
pub struct BulkActionCommand;

impl Command for BulkActionCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let Some(action) = deps.get_state_ref::<BulkActionInput>().action else {
            warn!("BulkActionCommand: no action set");
            return;
        };
        let ids = deps.get_compute_ref::<TableSelection>().ids();
        if ids.is_empty() {
            warn!("BulkActionCommand: {action} with an empty selection, nothing to do");
            return;
        }

        info!("BulkActionCommand: {action} for {} user(s)", ids.len());
        deps.get_state_ref::<ActionSinkState>()
            .sink()
            .bulk_action(action, &ids);
        updater.set(ActivityCompute {
            activity: Activity::Bulk {
                action,
                count: ids.len(),
            },
        });
    }
}

#[derive(Debug, Clone, Default)]
pub struct RowActionInput {
    pub action: Option<RowAction>,
}

impl State for RowActionInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

#[derive(Debug, Default)]
pub struct RowActionCommand;

impl Command for RowActionCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let Some(action) = deps.get_state_ref::<RowActionInput>().action else {
            warn!("RowActionCommand: no action set");
            return;
        };

        deps.get_state_ref::<ActionSinkState>()
            .sink()
            .row_action(action);
        updater.set(ActivityCompute {
            activity: Activity::Row(action),
        });
    }
}
