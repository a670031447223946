use std::any::{TypeId, type_name};

use crate::ctx::{ComputeStore, StateStore};
use crate::{Compute, Error, State, StateSyncStatus};

/// Read-only view over the registered states and computes.
///
/// Handed to `Compute::compute` and `Command::run`; writes go through the
/// accompanying [`Updater`](crate::Updater).
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    states: &'a StateStore,
    computes: &'a ComputeStore,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(states: &'a StateStore, computes: &'a ComputeStore) -> Self {
        Self { states, computes }
    }

    pub fn try_state<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "Dep::try_state"))
    }

    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Returns the cached compute value, or `None` before its first run.
    pub fn try_compute<T: Compute>(&self) -> Result<&'a T, Error> {
        let entry = self
            .computes
            .get(&TypeId::of::<T>())
            .ok_or_else(|| Error::compute_not_found(type_name::<T>(), "Dep::try_compute"))?;
        entry
            .compute
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| Error::compute_not_found(type_name::<T>(), "Dep::try_compute"))
    }

    /// # Panics
    /// Panics if `T` was never registered with `record_compute`.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.try_compute::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn compute_status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes
            .get(&TypeId::of::<T>())
            .map(|entry| entry.status)
    }
}
