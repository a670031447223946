//! Action sink of the command line: intents are logged, exports land in a
//! file chosen up front.

use std::path::PathBuf;

use sneat_business::{
    ActionSink, BulkAction, Credentials, LogSink, RowAction, SinkError, UserId,
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct FileSink {
    output: PathBuf,
}

impl FileSink {
    pub fn new(output: PathBuf) -> Self {
        Self { output }
    }
}

impl ActionSink for FileSink {
    fn submit_login(&self, credentials: Credentials) {
        LogSink.submit_login(credentials);
    }

    fn bulk_action(&self, action: BulkAction, ids: &[UserId]) {
        LogSink.bulk_action(action, ids);
    }

    fn row_action(&self, action: RowAction) {
        LogSink.row_action(action);
    }

    /// Writes to the configured path; `file_name` is only the suggestion a
    /// save dialog would show.
    fn export_file(&self, file_name: &str, contents: &str) -> Result<(), SinkError> {
        std::fs::write(&self.output, contents).map_err(|source| SinkError::Write {
            path: self.output.display().to_string(),
            source,
        })?;
        info!(suggested = file_name, path = %self.output.display(), bytes = contents.len(), "export written");
        Ok(())
    }
}
