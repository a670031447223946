use std::any::{Any, TypeId};
use std::fmt::Debug;

use crate::{Dep, State, Updater};

/// Declared inputs of a [`Compute`].
///
/// A compute is re-run whenever one of these states or computes changes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComputeDeps {
    states: Vec<TypeId>,
    computes: Vec<TypeId>,
}

impl ComputeDeps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state<T: State>(mut self) -> Self {
        self.states.push(TypeId::of::<T>());
        self
    }

    pub fn compute<T: Compute>(mut self) -> Self {
        self.computes.push(TypeId::of::<T>());
        self
    }

    pub fn states(&self) -> &[TypeId] {
        &self.states
    }

    pub fn computes(&self) -> &[TypeId] {
        &self.computes
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeId> {
        self.states.iter().chain(self.computes.iter())
    }
}

/// Derived value cached in a [`StateCtx`](crate::StateCtx).
///
/// `compute` reads its inputs through [`Dep`] and publishes the new value with
/// `updater.set(Self { .. })`. Computes with no declared deps are only written
/// by commands.
pub trait Compute: Any + Debug {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any>);
}
