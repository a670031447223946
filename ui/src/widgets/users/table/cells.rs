//! Cell contents of one user row.

use egui::{Color32, CornerRadius, Frame, Image, Margin, RichText, Stroke, Ui, vec2};
use sneat_business::{Avatar, RowAction, User, UserId, UserStatus};

use crate::utils::colors::{COLOR_AVATAR, status_color};

const AVATAR_SIZE: f32 = 28.0;

pub(super) fn render_id_cell(ui: &mut Ui, id: UserId) {
    ui.label(RichText::new(id.to_string()).monospace());
}

/// Profile image when the record has one, otherwise the initial on a
/// colored disc.
pub(super) fn render_avatar_cell(ui: &mut Ui, user: &User) {
    match user.avatar() {
        Avatar::Image(uri) => {
            ui.add(
                Image::new(uri)
                    .fit_to_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE))
                    .corner_radius(AVATAR_SIZE / 2.0),
            );
        }
        Avatar::Initial(initial) => {
            Frame::NONE
                .fill(COLOR_AVATAR)
                .corner_radius(CornerRadius::same(14))
                .inner_margin(Margin::symmetric(9, 5))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(initial.to_string())
                            .color(Color32::WHITE)
                            .strong(),
                    );
                });
        }
    }
}

/// Name with the username underneath, when there is one.
pub(super) fn render_user_cell(ui: &mut Ui, user: &User) {
    ui.vertical(|ui| {
        ui.label(&user.name);
        if let Some(username) = user.username.as_deref() {
            ui.weak(format!("@{username}"));
        }
    });
}

pub(super) fn render_status_badge(ui: &mut Ui, status: UserStatus) {
    let color = status_color(status);
    Frame::NONE
        .stroke(Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(status.as_str()).color(color).small());
        });
}

/// Returns the row action whose button was clicked.
pub(super) fn render_action_buttons(ui: &mut Ui, id: UserId) -> Option<RowAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("✏").on_hover_text("Edit user").clicked() {
            action = Some(RowAction::Edit(id));
        }
        if ui.button("🗑").on_hover_text("Delete user").clicked() {
            action = Some(RowAction::Delete(id));
        }
    });
    action
}
