//! Shared color constants for the UI.

use egui::Color32;
use sneat_business::UserStatus;

/// Forest green color for success and active status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for errors and locked accounts.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for new accounts.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Muted gray for inactive accounts.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(134, 142, 150);

/// Background of the generated avatar.
pub const COLOR_AVATAR: Color32 = Color32::from_rgb(99, 102, 241);

pub fn status_color(status: UserStatus) -> Color32 {
    match status {
        UserStatus::Active => COLOR_GREEN,
        UserStatus::Inactive => COLOR_GRAY,
        UserStatus::Locked => COLOR_RED,
        UserStatus::New => COLOR_AMBER,
    }
}
