//! Login widget.
//!
//! Displays a centered form with identifier, password and remember-me fields.
//! Submitting hands the values to the action sink; there is no authentication.

use egui::{Align, Layout, Response, TextEdit, Ui};
use sneat_business::{LoginCommand, LoginCompute, LoginInput, LoginStatus};
use sneat_states::StateCtx;

use crate::utils::colors::COLOR_GREEN;

/// Displays the login form and the acknowledgment of the last submission.
pub fn login_widget(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let status = state_ctx
        .cached::<LoginCompute>()
        .map(|c| c.status.clone())
        .unwrap_or_default();
    let input = state_ctx.state::<LoginInput>().clone();

    let mut identifier = input.identifier.clone();
    let mut password = input.password.clone();
    let mut remember_me = input.remember_me;
    let mut show_password = input.show_password;
    let mut should_submit = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading("Sneat Admin");
            ui.label("Sign in to manage users");
            ui.add_space(24.0);

            if let LoginStatus::Submitted {
                identifier,
                remember_me,
            } = &status
            {
                ui.colored_label(COLOR_GREEN, format!("Login submitted for {identifier}"));
                if *remember_me {
                    ui.label("This device will be remembered");
                }
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                ui.label("Username or email:");
                ui.text_edit_singleline(&mut identifier);
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Password:");
                let password_response =
                    ui.add(TextEdit::singleline(&mut password).password(!show_password));

                // Enter in the password field submits
                if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    should_submit = true;
                }

                let toggle_text = if show_password { "Hide" } else { "Show" };
                if ui
                    .button(toggle_text)
                    .on_hover_text("Toggle password visibility")
                    .clicked()
                {
                    show_password = !show_password;
                }
            });

            ui.add_space(8.0);
            ui.checkbox(&mut remember_me, "Remember me");
            ui.add_space(16.0);

            if ui.button("Sign in").clicked() {
                should_submit = true;
            }
        })
        .response;

    // Write back only real edits
    if identifier != input.identifier
        || password != input.password
        || remember_me != input.remember_me
        || show_password != input.show_password
    {
        state_ctx.update::<LoginInput>(|login_input| {
            login_input.identifier = identifier;
            login_input.password = password;
            login_input.remember_me = remember_me;
            login_input.show_password = show_password;
        });
    }

    if should_submit {
        state_ctx.dispatch::<LoginCommand>();
    }

    response
}
