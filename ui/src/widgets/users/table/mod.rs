//! The user grid for the current page.

mod cells;
mod header;

use egui::{Color32, Frame, Grid, InnerResponse, Margin, ScrollArea, Stroke, Ui};
use sneat_business::table::{TableQuery, UserPage};
use sneat_business::TableSelection;
use sneat_states::StateCtx;

use super::TableIntents;

/// Border color around the grid (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

const EMPTY_MESSAGE: &str = "No users match the current search and filters.";

/// Number of grid columns: selection, ID, avatar, user, email, role,
/// department, status and actions.
const COLUMNS: usize = 9;

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Renders the current page and reports what the user clicked.
pub(super) fn render_users_table(state_ctx: &StateCtx, ui: &mut Ui) -> TableIntents {
    let mut intents = TableIntents::default();

    let Some(page) = state_ctx.cached::<UserPage>().map(|c| &c.page) else {
        return intents;
    };
    let query = state_ctx.state::<TableQuery>();
    let selection = state_ctx.cached::<TableSelection>();
    let all_selected = selection.is_some_and(TableSelection::all_selected);

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                Grid::new("users_table")
                    .num_columns(COLUMNS)
                    .striped(true)
                    .spacing([8.0, 0.0])
                    .show(ui, |ui| {
                        header::render_header(ui, query, all_selected, &mut intents);
                        ui.end_row();

                        for user in &page.items {
                            let mut checked = selection.is_some_and(|s| s.is_selected(user.id));
                            data_cell(ui, |ui| {
                                if ui.add(egui::Checkbox::without_text(&mut checked)).changed() {
                                    intents.toggle = Some(user.id);
                                }
                            });
                            data_cell(ui, |ui| cells::render_id_cell(ui, user.id));
                            data_cell(ui, |ui| cells::render_avatar_cell(ui, user));
                            data_cell(ui, |ui| cells::render_user_cell(ui, user));
                            data_cell(ui, |ui| ui.label(&user.email));
                            data_cell(ui, |ui| ui.label(&user.role));
                            data_cell(ui, |ui| ui.label(&user.department));
                            data_cell(ui, |ui| cells::render_status_badge(ui, user.status));
                            data_cell(ui, |ui| {
                                if let Some(action) = cells::render_action_buttons(ui, user.id) {
                                    intents.row_action = Some(action);
                                }
                            });
                            ui.end_row();
                        }
                    });
            });
        });

    if page.items.is_empty() {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.weak(EMPTY_MESSAGE);
        });
    }

    intents
}
