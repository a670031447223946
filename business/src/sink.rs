//! The outbound port for everything the screens "do".
//!
//! Nothing in this crate mutates records or talks to a backend. Login
//! submissions, bulk and row actions, and CSV exports are handed to an
//! [`ActionSink`], which decides what they mean: log them, record them for a
//! test, or write a file.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::info;
use secrecy::{ExposeSecret, SecretString};
use sneat_states::{State, assign_impl};
use thiserror::Error;

use crate::{BulkAction, RowAction, UserId};

/// Captured login form values.
pub struct Credentials {
    pub identifier: String,
    pub password: SecretString,
    pub remember_me: bool,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("export cancelled")]
    Cancelled,
}

pub trait ActionSink {
    fn submit_login(&self, credentials: Credentials);

    /// `ids` are ascending and never empty.
    fn bulk_action(&self, action: BulkAction, ids: &[UserId]);

    fn row_action(&self, action: RowAction);

    fn export_file(&self, file_name: &str, contents: &str) -> Result<(), SinkError>;
}

/// Logs every intent and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ActionSink for LogSink {
    fn submit_login(&self, credentials: Credentials) {
        info!(
            "login submitted: identifier={} remember_me={}",
            credentials.identifier, credentials.remember_me
        );
    }

    fn bulk_action(&self, action: BulkAction, ids: &[UserId]) {
        info!("bulk {action} requested for users {ids:?}");
    }

    fn row_action(&self, action: RowAction) {
        info!("row action requested: {action}");
    }

    fn export_file(&self, file_name: &str, contents: &str) -> Result<(), SinkError> {
        info!("export {file_name}: {} bytes", contents.len());
        Ok(())
    }
}

/// What a [`RecordingSink`] saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Login {
        identifier: String,
        password: String,
        remember_me: bool,
    },
    Bulk {
        action: BulkAction,
        ids: Vec<UserId>,
    },
    Row(RowAction),
    Export {
        file_name: String,
        contents: String,
    },
}

/// Keeps every call in memory, in order. Exposes the password it was given,
/// so it is only meant for tests and demos.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<SinkEvent>>,
    fail_exports: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose `export_file` always reports a cancelled dialog.
    pub fn failing_exports() -> Self {
        Self {
            fail_exports: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<SinkEvent> {
        self.events.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: SinkEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ActionSink for RecordingSink {
    fn submit_login(&self, credentials: Credentials) {
        self.push(SinkEvent::Login {
            identifier: credentials.identifier,
            password: credentials.password.expose_secret().to_owned(),
            remember_me: credentials.remember_me,
        });
    }

    fn bulk_action(&self, action: BulkAction, ids: &[UserId]) {
        self.push(SinkEvent::Bulk {
            action,
            ids: ids.to_vec(),
        });
    }

    fn row_action(&self, action: RowAction) {
        self.push(SinkEvent::Row(action));
    }

    fn export_file(&self, file_name: &str, contents: &str) -> Result<(), SinkError> {
        if self.fail_exports {
            return Err(SinkError::Cancelled);
        }
        self.push(SinkEvent::Export {
            file_name: file_name.to_owned(),
            contents: contents.to_owned(),
        });
        Ok(())
    }
}

/// The sink commands report to, registered as a state.
#[derive(Clone)]
pub struct ActionSinkState {
    sink: Rc<dyn ActionSink>,
}

impl ActionSinkState {
    pub fn new(sink: Rc<dyn ActionSink>) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &dyn ActionSink {
        self.sink.as_ref()
    }
}

impl Default for ActionSinkState {
    fn default() -> Self {
        Self::new(Rc::new(LogSink))
    }
}

impl fmt::Debug for ActionSinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSinkState").finish_non_exhaustive()
    }
}

impl State for ActionSinkState {
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
