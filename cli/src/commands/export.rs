//! Export users command.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Result, bail};
use sneat_business::{Activity, ActivityCompute, AppConfig, ExportCsvCommand};
use tracing::instrument;

use crate::cli::QueryArgs;
use crate::context::{apply_query, open_session};
use crate::output::Output;
use crate::sink::FileSink;

/// Writes every matching user, across all pages, to `output` or the
/// configured export file name.
#[instrument(skip_all, name = "export")]
pub fn run_export(config: AppConfig, query: &QueryArgs, output: Option<PathBuf>) -> Result<()> {
    let out = Output::new();
    let output = output.unwrap_or_else(|| PathBuf::from(config.export_file_name()));
    let mut ctx = open_session(config, Rc::new(FileSink::new(output.clone())))?;

    apply_query(&mut ctx, query);
    ctx.dispatch::<ExportCsvCommand>();

    match &ctx.compute::<ActivityCompute>().activity {
        Activity::Exported { rows, .. } => {
            out.success(format!("Exported {rows} user(s) to {}", output.display()));
            Ok(())
        }
        Activity::ExportFailed(reason) => bail!("Export failed: {reason}"),
        other => bail!("Export did not complete ({other:?})"),
    }
}
