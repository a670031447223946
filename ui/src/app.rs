use sneat_business::Route;

use crate::{pages, state::State};

pub struct SneatApp {
    pub state: State,
}

impl SneatApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for SneatApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let current = self.state.route();
                for route in Route::ALL {
                    if ui.selectable_label(current == route, route.title()).clicked() {
                        self.state.set_route(route);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.route() {
            Route::Login => {
                pages::login_page(&mut self.state, ui);
            }
            Route::Users => {
                pages::users_page(&mut self.state, ui);
            }
        });

        self.state.ctx.run_computed();
    }
}
