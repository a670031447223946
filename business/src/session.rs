//! Wiring of one UI session into a [`StateCtx`].

use std::rc::Rc;

use sneat_states::StateCtx;

use crate::table::{
    FilterOptions, PageInput, SelectionInput, TableQuery, TableSelection, ToggleSelectAllCommand,
    ToggleUserSelectionCommand, UserPage, VisibleUsers,
};
use crate::{
    ActionSink, ActionSinkState, ActivityCompute, AppConfig, BulkActionCommand, BulkActionInput,
    ExportCsvCommand, LoginCommand, LoginCompute, LoginInput, Route, RowActionCommand,
    RowActionInput, UserRecords,
};

/// Registers every state, compute and command of the login and users pages,
/// and runs the computes once so `cached` reads succeed immediately.
pub fn build_state_ctx(config: AppConfig, records: UserRecords, sink: Rc<dyn ActionSink>) -> StateCtx {
    let mut ctx = StateCtx::new();

    // Config and collaborators
    ctx.add_state(config);
    ctx.add_state(ActionSinkState::new(sink));
    ctx.add_state(Route::default());

    // Login
    ctx.add_state(LoginInput::default());
    ctx.record_compute(LoginCompute::default());

    // Users table
    ctx.add_state(records);
    ctx.add_state(TableQuery::default());
    ctx.add_state(PageInput::default());
    ctx.add_state(SelectionInput::default());
    ctx.add_state(BulkActionInput::default());
    ctx.add_state(RowActionInput::default());
    ctx.record_compute(VisibleUsers::default());
    ctx.record_compute(UserPage::default());
    ctx.record_compute(FilterOptions::default());
    ctx.record_compute(TableSelection::default());
    ctx.record_compute(ActivityCompute::default());

    // Commands
    ctx.record_command(LoginCommand);
    ctx.record_command(ToggleUserSelectionCommand);
    ctx.record_command(ToggleSelectAllCommand);
    ctx.record_command(BulkActionCommand);
    ctx.record_command(RowActionCommand);
    ctx.record_command(ExportCsvCommand);

    if let Err(err) = ctx.verify_deps() {
        log::error!("build_state_ctx: {err}");
    }
    ctx.run_computed();
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogSink;

    #[test]
    fn fresh_session_is_ready_to_render() {
        let ctx = build_state_ctx(AppConfig::default(), UserRecords::seed(), Rc::new(LogSink));

        assert_eq!(ctx.compute::<VisibleUsers>().len(), 8);
        assert_eq!(ctx.compute::<UserPage>().page.items.len(), 8);
        assert!(ctx.compute::<TableSelection>().is_empty());
        assert_eq!(ctx.compute::<FilterOptions>().roles.len(), 4);
        assert_eq!(*ctx.state::<Route>(), Route::Login);
    }
}
