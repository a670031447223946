//! Login command implementation.

use std::rc::Rc;

use anyhow::{Context as _, Result, bail};
use inquire::Text;
use sneat_business::{AppConfig, LogSink, LoginCommand, LoginCompute, LoginInput, LoginStatus};
use tracing::{info, instrument};

use crate::context::open_session;
use crate::output::Output;

#[instrument(skip_all, name = "login")]
pub fn run_login(config: AppConfig, identifier: Option<String>, remember_me: bool) -> Result<()> {
    let out = Output::new();

    out.header("Sign in to Sneat");
    out.newline();

    let identifier = match identifier {
        Some(identifier) => identifier,
        None => Text::new("Username or email:")
            .prompt()
            .context("Failed to read username")?,
    };
    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    let mut ctx = open_session(config, Rc::new(LogSink))?;
    ctx.update::<LoginInput>(|input| {
        input.identifier = identifier;
        input.password = password;
        input.remember_me = remember_me;
    });
    ctx.dispatch::<LoginCommand>();

    match &ctx.compute::<LoginCompute>().status {
        LoginStatus::Submitted {
            identifier,
            remember_me,
        } => {
            info!(identifier = %identifier, remember_me, "login handed off");
            out.success(format!("Login submitted for {identifier}"));
            Ok(())
        }
        LoginStatus::Idle => bail!("Login was not submitted"),
    }
}
