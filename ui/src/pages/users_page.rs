//! User management page.

use egui::{Response, Ui};

use crate::{state::State, widgets};

pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("User Management");
        ui.add_space(8.0);
        widgets::users_panel(&mut state.ctx, ui);
    })
    .response
}

#[cfg(test)]
mod users_page_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use sneat_business::edit_query;

    use crate::state::State;

    #[test]
    fn test_users_page_lists_seed_users() {
        let mut harness = Harness::builder()
            .with_size(egui::vec2(1280.0, 800.0))
            .build_ui_state(
                |ui, state: &mut State| {
                    super::users_page(state, ui);
                },
                State::default(),
            );
        harness.run();

        assert!(
            harness.query_by_label("User Management").is_some(),
            "Heading should be displayed"
        );
        assert!(
            harness.query_by_label_contains("Alice Williams").is_some(),
            "Seed users should be listed"
        );
        assert!(
            harness.query_by_label("Page 1 of 1").is_some(),
            "Eight users fit on one page"
        );
    }

    #[test]
    fn test_users_page_shows_empty_message() {
        let mut state = State::default();
        edit_query(&mut state.ctx, |q| q.set_search("nobody-here"));

        let mut harness = Harness::builder()
            .with_size(egui::vec2(1280.0, 800.0))
            .build_ui_state(
                |ui, state: &mut State| {
                    super::users_page(state, ui);
                },
                state,
            );
        harness.run();

        assert!(
            harness
                .query_by_label_contains("No users match")
                .is_some(),
            "Empty view should say so"
        );
        assert!(harness.query_by_label_contains("Alice Williams").is_none());
    }
}
