//! Login form state.
//!
//! There is no authentication here. `LoginCommand` hands the captured values
//! to the [`ActionSink`](crate::ActionSink) and records that a submission
//! happened so the page can acknowledge it.

use std::any::Any;
use std::fmt;

use log::info;
use secrecy::SecretString;
use sneat_states::{Command, Compute, ComputeDeps, Dep, State, Updater, assign_impl};

use crate::{ActionSinkState, Credentials};

/// Editable fields of the login form.
#[derive(Default, Clone)]
pub struct LoginInput {
    /// Username or email.
    pub identifier: String,
    pub password: String,
    pub remember_me: bool,
    /// Render the password in clear text.
    pub show_password: bool,
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .field("show_password", &self.show_password)
            .finish()
    }
}

impl State for LoginInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    /// The form was handed off. The password is not kept.
    Submitted {
        identifier: String,
        remember_me: bool,
    },
}

impl LoginStatus {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Submitted { identifier, .. } => Some(identifier.as_str()),
            Self::Idle => None,
        }
    }
}

/// Compute-shaped cache for [`LoginStatus`], written by [`LoginCommand`].
#[derive(Debug, Default)]
pub struct LoginCompute {
    pub status: LoginStatus,
}

impl Compute for LoginCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op, see `LoginCommand`.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

/// Submits the login form.
///
/// The values go to the sink as typed, without validation. The password field
/// is cleared afterwards. Dispatch via `ctx.dispatch::<LoginCommand>()`.
#[derive(Default, Debug)]
pub struct LoginCommand;

impl Command for LoginCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<LoginInput>();
        let identifier = input.identifier.clone();
        let remember_me = input.remember_me;

        info!("LoginCommand: submitting for '{identifier}'");
        deps.get_state_ref::<ActionSinkState>()
            .sink()
            .submit_login(Credentials {
                identifier: identifier.clone(),
                password: SecretString::from(input.password.clone()),
                remember_me,
            });

        updater.set(LoginCompute {
            status: LoginStatus::Submitted {
                identifier,
                remember_me,
            },
        });
        updater.set(LoginInput {
            password: String::new(),
            ..input.clone()
        });
    }
}
