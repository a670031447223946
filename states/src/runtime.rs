use std::any::{Any, TypeId, type_name};

use flume::{Receiver, Sender};

/// A queued write: the target type and its replacement value.
pub(crate) type Update = (TypeId, &'static str, Box<dyn Any>);

/// Owns the update channel shared by every [`Updater`].
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
        }
    }

    pub(crate) fn drain(&self) -> impl Iterator<Item = Update> + '_ {
        self.recv.try_iter()
    }

    pub fn pending(&self) -> usize {
        self.recv.len()
    }
}

/// Write handle given to computes and commands.
///
/// Values are applied on the next `StateCtx::sync_computes`.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub fn set<T: Any>(&self, value: T) {
        let name = type_name::<T>();
        if self
            .send
            .send((TypeId::of::<T>(), name, Box::new(value)))
            .is_err()
        {
            log::warn!("Updater::set: context dropped, discarding update for {name}");
        }
    }
}
