//! Session setup shared by the subcommands.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use sneat_business::{ActionSink, AppConfig, UserRecords, build_state_ctx, edit_query};
use sneat_states::StateCtx;
use tracing::{debug, instrument};

use crate::cli::QueryArgs;

/// Configuration from `SNEAT_*` variables with the command-line overrides
/// applied on top.
pub fn load_config(users_file: Option<PathBuf>, page_size: Option<usize>) -> Result<AppConfig> {
    let mut config = AppConfig::init()
        .context("Invalid SNEAT_* configuration")?
        .with_users_file(users_file);
    if let Some(size) = page_size {
        config = config.with_page_size(size);
    }
    Ok(config)
}

/// The configured users file, or the built-in users when none is set.
pub fn load_records(config: &AppConfig) -> Result<UserRecords> {
    match config.users_file() {
        Some(path) => {
            let records = UserRecords::load(path)
                .with_context(|| format!("Failed to load users from {}", path.display()))?;
            debug!(count = records.len(), path = %path.display(), "loaded users file");
            Ok(records)
        }
        None => Ok(UserRecords::seed()),
    }
}

/// Build a `StateCtx` for one command run.
#[instrument(skip_all, name = "session")]
pub fn open_session(config: AppConfig, sink: Rc<dyn ActionSink>) -> Result<StateCtx> {
    let records = load_records(&config)?;
    Ok(build_state_ctx(config, records, sink))
}

/// Push the search, filter and sort flags into the table query.
pub fn apply_query(ctx: &mut StateCtx, args: &QueryArgs) {
    edit_query(ctx, |query| {
        let mut changed = false;
        if let Some(term) = &args.search {
            changed |= query.set_search(term.as_str());
        }
        changed |= query.set_status_filter(args.status);
        changed |= query.set_role_filter(args.role.clone());
        changed |= query.set_department_filter(args.department.clone());
        if let Some(key) = args.sort {
            query.toggle_sort(key);
            if args.desc {
                query.toggle_sort(key);
            }
            changed = true;
        }
        changed
    });
}
