//! User management panel: toolbar, table, pager and the activity line.
//!
//! Widgets read derived data with `cached`, collect what the user asked for,
//! and apply it to the `StateCtx` after rendering.

mod pager;
mod table;
mod toolbar;

use egui::{Response, Ui};
use sneat_business::table::{
    SelectionInput, SortKey, ToggleSelectAllCommand, ToggleUserSelectionCommand,
};
use sneat_business::{
    Activity, ActivityCompute, RowAction, RowActionCommand, RowActionInput, UserId, edit_query,
};
use sneat_states::StateCtx;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// What the user clicked inside the table during one frame.
#[derive(Debug, Default)]
pub(crate) struct TableIntents {
    pub toggle: Option<UserId>,
    pub toggle_all: bool,
    pub sort: Option<SortKey>,
    pub row_action: Option<RowAction>,
}

pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        toolbar::render_toolbar(state_ctx, ui);
        ui.add_space(8.0);

        let intents = table::render_users_table(state_ctx, ui);
        apply_table_intents(state_ctx, intents);

        ui.add_space(8.0);
        pager::render_pager(state_ctx, ui);
        render_activity(state_ctx, ui);
    })
    .response
}

fn apply_table_intents(state_ctx: &mut StateCtx, intents: TableIntents) {
    if let Some(key) = intents.sort {
        edit_query(state_ctx, |query| {
            query.toggle_sort(key);
            true
        });
    }

    if intents.toggle_all {
        state_ctx.dispatch::<ToggleSelectAllCommand>();
    }

    if let Some(id) = intents.toggle {
        state_ctx.state_mut::<SelectionInput>().toggle = Some(id);
        state_ctx.dispatch::<ToggleUserSelectionCommand>();
    }

    if let Some(action) = intents.row_action {
        state_ctx.state_mut::<RowActionInput>().action = Some(action);
        state_ctx.dispatch::<RowActionCommand>();
    }
}

fn render_activity(state_ctx: &StateCtx, ui: &mut Ui) {
    let Some(activity) = state_ctx.cached::<ActivityCompute>().map(|c| &c.activity) else {
        return;
    };
    match activity {
        Activity::Idle => {}
        Activity::ExportFailed(_) => {
            ui.colored_label(COLOR_RED, activity.to_string());
        }
        Activity::Exported { .. } => {
            ui.colored_label(COLOR_GREEN, activity.to_string());
        }
        Activity::Bulk { .. } | Activity::Row(_) => {
            ui.label(activity.to_string());
        }
    }
}
