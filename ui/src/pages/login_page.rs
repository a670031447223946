//! Login page.
//!
//! Displays the login form centered on the screen.

use egui::{Response, Ui};

use crate::{state::State, widgets};

/// Renders the login page with a centered login form.
pub fn login_page(state: &mut State, ui: &mut Ui) -> Response {
    widgets::login_widget(&mut state.ctx, ui)
}
