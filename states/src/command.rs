use std::any::Any;
use std::fmt::Debug;

use crate::{Dep, Updater};

/// A manually dispatched action.
///
/// Commands take no arguments: whatever they need is read from input states
/// that the caller fills in before `StateCtx::dispatch`.
pub trait Command: Any + Debug {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
