//! Search box, filters, bulk actions and export.

use egui::{Button, ComboBox, TextEdit, Ui};
use sneat_business::table::{FilterOptions, TableQuery, VisibleUsers};
use sneat_business::{
    BulkAction, BulkActionCommand, BulkActionInput, ExportCsvCommand, TableSelection, UserStatus,
    edit_query,
};
use sneat_states::StateCtx;

pub(super) fn render_toolbar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let query = state_ctx.state::<TableQuery>().clone();
    let options = state_ctx
        .cached::<FilterOptions>()
        .cloned()
        .unwrap_or_default();
    let selected = state_ctx
        .cached::<TableSelection>()
        .map_or(0, TableSelection::len);
    let visible = state_ctx.cached::<VisibleUsers>().map_or(0, VisibleUsers::len);

    let mut edited = query.clone();
    let mut bulk_action = None;
    let mut should_export = false;

    ui.horizontal_wrapped(|ui| {
        ui.label("Search:");
        ui.add(
            TextEdit::singleline(&mut edited.search)
                .hint_text("Name, email or username")
                .desired_width(220.0),
        );

        status_filter(ui, &mut edited.filters.status);
        value_filter(ui, "Role", &options.roles, &mut edited.filters.role);
        value_filter(
            ui,
            "Department",
            &options.departments,
            &mut edited.filters.department,
        );

        if ui
            .add_enabled(query != TableQuery::default(), Button::new("Clear"))
            .on_hover_text("Clear search, filters and sort")
            .clicked()
        {
            edited = TableQuery::default();
        }
    });

    ui.horizontal(|ui| {
        if selected > 0 {
            ui.label(format!("{selected} of {visible} selected"));
            for action in BulkAction::ALL {
                if ui.button(action.label()).clicked() {
                    bulk_action = Some(action);
                }
            }
            ui.separator();
        }

        if ui
            .button("Export CSV")
            .on_hover_text("Download the filtered users")
            .clicked()
        {
            should_export = true;
        }
    });

    if edited != query {
        edit_query(state_ctx, |q| {
            *q = edited;
            true
        });
    }

    if let Some(action) = bulk_action {
        state_ctx.state_mut::<BulkActionInput>().action = Some(action);
        state_ctx.dispatch::<BulkActionCommand>();
    }

    if should_export {
        state_ctx.dispatch::<ExportCsvCommand>();
    }
}

fn status_filter(ui: &mut Ui, status: &mut Option<UserStatus>) {
    ComboBox::from_label("Status")
        .selected_text(status.map_or("All", UserStatus::as_str))
        .show_ui(ui, |ui| {
            ui.selectable_value(status, None, "All");
            for option in UserStatus::ALL {
                ui.selectable_value(status, Some(option), option.as_str());
            }
        });
}

fn value_filter(ui: &mut Ui, label: &str, values: &[String], current: &mut Option<String>) {
    ComboBox::from_label(label)
        .selected_text(current.as_deref().unwrap_or("All"))
        .show_ui(ui, |ui| {
            ui.selectable_value(current, None, "All");
            for value in values {
                ui.selectable_value(current, Some(value.clone()), value.as_str());
            }
        });
}
