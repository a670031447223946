use egui::{Button, Color32, Frame, InnerResponse, Margin, RichText, Ui};
use sneat_business::table::{SortKey, TableQuery};

use crate::widgets::users::TableIntents;

/// Header background color (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Sortable columns in display order, with their header text.
const SORTABLE: [(SortKey, &str); 6] = [
    (SortKey::Id, "ID"),
    (SortKey::Name, "User"),
    (SortKey::Email, "Email"),
    (SortKey::Role, "Role"),
    (SortKey::Department, "Department"),
    (SortKey::Status, "Status"),
];

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Header text with the direction arrow of the active sort, if any.
fn header_text(query: &TableQuery, key: SortKey, label: &str) -> String {
    match query.sort_direction_for(key) {
        Some(direction) => format!("{label} {}", direction.arrow()),
        None => label.to_owned(),
    }
}

pub(super) fn render_header(
    ui: &mut Ui,
    query: &TableQuery,
    all_selected: bool,
    intents: &mut TableIntents,
) {
    let mut checked = all_selected;
    header_cell(ui, |ui| {
        if ui
            .add(egui::Checkbox::without_text(&mut checked))
            .on_hover_text("Select all matching users")
            .changed()
        {
            intents.toggle_all = true;
        }
    });

    for (index, entry) in SORTABLE.into_iter().enumerate() {
        sort_header(ui, query, entry, intents);
        if index == 0 {
            // avatar column
            header_cell(ui, |ui| ui.label(""));
        }
    }

    header_cell(ui, |ui| ui.strong("Actions"));
}

fn sort_header(
    ui: &mut Ui,
    query: &TableQuery,
    (key, label): (SortKey, &str),
    intents: &mut TableIntents,
) {
    header_cell(ui, |ui| {
        let text = RichText::new(header_text(query, key, label)).strong();
        if ui
            .add(Button::new(text).frame(false))
            .on_hover_text(format!("Sort by {}", key.as_str()))
            .clicked()
        {
            intents.sort = Some(key);
        }
    });
}
