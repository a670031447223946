use std::rc::Rc;

use sneat_business::{ActionSink, AppConfig, LogSink, Route, UserRecords, build_state_ctx};
use sneat_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(AppConfig::default(), UserRecords::seed(), Rc::new(LogSink))
    }
}

impl State {
    pub fn new(config: AppConfig, records: UserRecords, sink: Rc<dyn ActionSink>) -> Self {
        Self {
            ctx: build_state_ctx(config, records, sink),
        }
    }

    /// Configuration from `SNEAT_*` variables and records from the configured
    /// users file. Falls back to defaults and the built-in seed, with an error
    /// in the log, when either is unusable.
    pub fn from_env(sink: Rc<dyn ActionSink>) -> Self {
        let config = AppConfig::init().unwrap_or_else(|err| {
            log::error!("Invalid configuration, using defaults: {err:#}");
            AppConfig::default()
        });

        let records = match config.users_file() {
            Some(path) => UserRecords::load(path).unwrap_or_else(|err| {
                log::error!("{err}, using the built-in users");
                UserRecords::seed()
            }),
            None => UserRecords::seed(),
        };

        Self::new(config, records, sink)
    }

    pub fn route(&self) -> Route {
        *self.ctx.state::<Route>()
    }

    pub fn set_route(&mut self, route: Route) {
        if self.route() != route {
            *self.ctx.state_mut::<Route>() = route;
        }
    }
}
