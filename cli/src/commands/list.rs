//! List users command.

use std::rc::Rc;

use anyhow::Result;
use sneat_business::table::{Page, UserPage};
use sneat_business::{AppConfig, LogSink, User, go_to_page};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::cli::QueryArgs;
use crate::context::{apply_query, open_session};
use crate::output::Output;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
            username: user.username_or_empty().to_owned(),
            email: user.email.clone(),
            role: user.role.clone(),
            department: user.department.clone(),
            status: user.status.as_str(),
        }
    }
}

/// Renders one page as a rounded table.
pub fn render_page(page: &Page) -> String {
    let rows: Vec<UserRow> = page.items.iter().map(UserRow::from).collect();
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

#[instrument(skip_all, name = "list", fields(page = page))]
pub fn run_list(config: AppConfig, query: &QueryArgs, page: usize) -> Result<()> {
    let out = Output::new();
    let mut ctx = open_session(config, Rc::new(LogSink))?;

    apply_query(&mut ctx, query);
    // Pages are 1-based on the command line
    go_to_page(&mut ctx, page.saturating_sub(1));

    let page = &ctx.compute::<UserPage>().page;
    if page.total == 0 {
        out.dim("No users match the current search and filters.");
        return Ok(());
    }

    out.print(render_page(page));
    out.page_summary(page);
    Ok(())
}
