//! Action sink used by the desktop app.
//!
//! Intents are logged; CSV exports go through a native save dialog.

use sneat_business::{
    ActionSink, BulkAction, Credentials, LogSink, RowAction, SinkError, UserId,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct DialogSink;

impl ActionSink for DialogSink {
    fn submit_login(&self, credentials: Credentials) {
        LogSink.submit_login(credentials);
    }

    fn bulk_action(&self, action: BulkAction, ids: &[UserId]) {
        LogSink.bulk_action(action, ids);
    }

    fn row_action(&self, action: RowAction) {
        LogSink.row_action(action);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn export_file(&self, file_name: &str, contents: &str) -> Result<(), SinkError> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Export users")
            .set_file_name(file_name)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            log::info!("Export dialog closed without a file");
            return Err(SinkError::Cancelled);
        };

        std::fs::write(&path, contents).map_err(|source| SinkError::Write {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Exported {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    // No file system in the browser; the export is only logged.
    #[cfg(target_arch = "wasm32")]
    fn export_file(&self, file_name: &str, contents: &str) -> Result<(), SinkError> {
        LogSink.export_file(file_name, contents)
    }
}
