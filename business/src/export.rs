//! CSV export of the visible rows.

use log::{error, info};
use sneat_states::{Command, Dep, Updater};

use crate::table::VisibleUsers;
use crate::{ActionSinkState, Activity, ActivityCompute, AppConfig, User};

pub const CSV_HEADER: &str = "ID,Name,Email,Role,Department,Status";

/// Header plus one `id,name,email,role,department,status` line per user.
///
/// Every line ends in `\n`. Fields are written as-is, without quoting.
pub fn render_users_csv(users: &[User]) -> String {
    let mut csv = String::with_capacity(64 * (users.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for user in users {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            user.id, user.name, user.email, user.role, user.department, user.status
        ));
    }
    csv
}

/// Renders [`VisibleUsers`] (all pages) and hands it to the sink under the
/// configured file name.
#[derive(Debug, Default)]
pub struct ExportCsvCommand;

impl Command for ExportCsvCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let users = deps.get_compute_ref::<VisibleUsers>().users();
        let file_name = deps.get_state_ref::<AppConfig>().export_file_name();
        let csv = render_users_csv(users);

        let activity = match deps
            .get_state_ref::<ActionSinkState>()
            .sink()
            .export_file(file_name, &csv)
        {
            Ok(()) => {
                info!("ExportCsvCommand: {} rows to {file_name}", users.len());
                Activity::Exported {
                    file_name: file_name.to_owned(),
                    rows: users.len(),
                }
            }
            Err(err) => {
                error!("ExportCsvCommand: {err}");
                Activity::ExportFailed(err.to_string())
            }
        };
        updater.set(ActivityCompute { activity });
    }
}
