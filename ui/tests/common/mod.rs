use std::rc::Rc;

use egui_kittest::Harness;
use sneat_business::{AppConfig, RecordingSink, UserRecords};
use sneat_ui::SneatApp;
use sneat_ui::state::State;

/// Wide enough for every table column to be laid out.
const WINDOW_SIZE: egui::Vec2 = egui::vec2(1400.0, 900.0);

pub struct TestCtx<'a> {
    harness: Harness<'a, SneatApp>,
    sink: Rc<RecordingSink>,
}

impl<'a> TestCtx<'a> {
    pub fn new_app() -> Self {
        Self::new_app_with_config(AppConfig::default())
    }

    pub fn new_app_with_config(config: AppConfig) -> Self {
        let sink = Rc::new(RecordingSink::new());
        let state = State::new(config, UserRecords::seed(), sink.clone());
        let app = SneatApp::new(state);
        let harness = Harness::builder()
            .with_size(WINDOW_SIZE)
            .build_eframe(|_| app);

        Self { harness, sink }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, SneatApp> {
        &mut self.harness
    }

    pub fn sink(&self) -> &RecordingSink {
        &self.sink
    }
}
