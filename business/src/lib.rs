//! Domain layer of sneat: user records, the user table's query, selection and
//! actions, CSV export, and the login form.
//!
//! Everything is expressed as states, computes and commands of a
//! [`sneat_states::StateCtx`]; [`build_state_ctx`] wires a session together.

mod actions;
mod config;
mod export;
mod login_state;
mod records;
mod route;
mod session;
mod sink;
pub mod table;
mod user;

pub use actions::{
    Activity, ActivityCompute, BulkAction, BulkActionCommand, BulkActionInput, RowAction,
    RowActionCommand, RowActionInput,
};
pub use config::{AppConfig, DEFAULT_EXPORT_FILE_NAME, DEFAULT_PAGE_SIZE, ENV_PREFIX, RawConfig};
pub use export::{CSV_HEADER, ExportCsvCommand, render_users_csv};
pub use login_state::{LoginCommand, LoginCompute, LoginInput, LoginStatus};
pub use records::{RecordsError, UserRecords};
pub use route::Route;
pub use session::build_state_ctx;
pub use sink::{
    ActionSink, ActionSinkState, Credentials, LogSink, RecordingSink, SinkError, SinkEvent,
};
pub use table::{TableSelection, edit_query, go_to_page};
pub use user::{Avatar, ParseStatusError, User, UserId, UserStatus};
