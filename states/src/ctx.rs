use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::runtime::Update;
use crate::{Command, Compute, Dep, Error, Graph, State, StateRuntime, StateSyncStatus, Updater};

/// Upper bound on settle rounds in `run_computed`; only exceeded when computes
/// keep writing each other's inputs.
const MAX_SETTLE_ROUNDS: usize = 8;

pub(crate) type StateStore = BTreeMap<TypeId, Box<dyn State>>;
pub(crate) type ComputeStore = BTreeMap<TypeId, ComputeEntry>;

#[derive(Debug)]
pub(crate) struct ComputeEntry {
    pub(crate) compute: Box<dyn Compute>,
    pub(crate) status: StateSyncStatus,
}

#[derive(Debug)]
struct CommandEntry {
    name: &'static str,
    command: Box<dyn Command>,
}

/// Owner of every state, compute and command of one UI session.
///
/// Everything runs on the caller's thread: commands and computes queue writes
/// through an [`Updater`], `sync_computes` applies them, and `run_computed`
/// re-runs the computes downstream of whatever changed, in dependency order.
#[derive(Debug, Default)]
pub struct StateCtx {
    runtime: StateRuntime,

    states: StateStore,
    computes: ComputeStore,
    commands: BTreeMap<TypeId, CommandEntry>,

    graph: Graph<TypeId>,
    order: Option<Vec<TypeId>>,

    dirty: BTreeSet<TypeId>,
    queue: VecDeque<TypeId>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        if self.states.insert(id, Box::new(state)).is_some() {
            log::debug!("add_state: replaced {}", type_name::<T>());
            self.dirty.insert(id);
        }
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        for dep in compute.deps().iter() {
            self.graph.route_to(*dep, id, ());
        }
        self.computes.insert(
            id,
            ComputeEntry {
                compute: Box::new(compute),
                status: StateSyncStatus::BeforeInit,
            },
        );
        self.order = None;
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(
            TypeId::of::<T>(),
            CommandEntry {
                name: type_name::<T>(),
                command: Box::new(command),
            },
        );
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    pub fn dep(&self) -> Dep<'_> {
        Dep::new(&self.states, &self.computes)
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.dep().try_state::<T>()
    }

    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn state<T: State>(&self) -> &T {
        self.dep().get_state_ref::<T>()
    }

    /// Mutable access to a state. The state is marked dirty, so every compute
    /// reading it re-runs on the next `run_computed`.
    ///
    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.dirty.insert(id);
        self.states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found(type_name::<T>(), "state_mut")))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Last value produced by a compute, `None` before its first run.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        let entry = self.computes.get(&TypeId::of::<T>())?;
        if entry.status == StateSyncStatus::BeforeInit {
            return None;
        }
        entry.compute.as_any().downcast_ref::<T>()
    }

    /// # Panics
    /// Panics if `T` is not registered or has not run yet.
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>().unwrap_or_else(|| {
            panic!(
                "{}",
                Error::ComputeNotReady {
                    name: type_name::<T>()
                }
            )
        })
    }

    pub fn enqueue_command<T: Command>(&mut self) {
        self.queue.push_back(TypeId::of::<T>());
    }

    /// Run one command now and settle the computes it touched.
    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }

    pub fn flush_commands(&mut self) {
        // commands must observe settled computes
        self.run_computed();

        while let Some(id) = self.queue.pop_front() {
            match self.commands.get(&id) {
                Some(entry) => {
                    log::debug!("flush_commands: running {}", entry.name);
                    entry
                        .command
                        .run(Dep::new(&self.states, &self.computes), self.runtime.updater());
                }
                None => {
                    log::error!("flush_commands: command {id:?} was never recorded");
                    continue;
                }
            }
            self.run_computed();
        }
    }

    /// Apply queued `Updater` writes. Returns how many were applied.
    pub fn sync_computes(&mut self) -> usize {
        let updates: Vec<Update> = self.runtime.drain().collect();
        let applied = updates.len();

        for (id, name, value) in updates {
            if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
                self.dirty.insert(id);
            } else if let Some(entry) = self.computes.get_mut(&id) {
                entry.compute.assign_box(value);
                entry.status = StateSyncStatus::Clean;
                self.dirty.insert(id);
            } else {
                log::warn!("sync_computes: dropping update for unregistered {name}");
            }
        }

        applied
    }

    /// Re-run every compute that is uninitialised or downstream of a change.
    pub fn run_computed(&mut self) {
        let order = match self.compute_order() {
            Ok(order) => order,
            Err(err) => {
                log::error!("run_computed: {err}");
                return;
            }
        };

        for _ in 0..MAX_SETTLE_ROUNDS {
            self.sync_computes();

            let mut stale: BTreeSet<TypeId> = self
                .computes
                .iter()
                .filter(|(_, entry)| entry.status != StateSyncStatus::Clean)
                .map(|(id, _)| *id)
                .collect();
            for id in std::mem::take(&mut self.dirty) {
                stale.extend(self.graph.connected(id).copied());
            }

            if stale.is_empty() {
                return;
            }

            for id in order.iter().filter(|id| stale.contains(id)) {
                if let Some(entry) = self.computes.get(id) {
                    entry
                        .compute
                        .compute(Dep::new(&self.states, &self.computes), self.runtime.updater());
                }
                if let Some(entry) = self.computes.get_mut(id) {
                    entry.status = StateSyncStatus::Clean;
                }
                self.sync_computes();
            }

            // downstream of these already ran after them in this round
            for id in &stale {
                self.dirty.remove(id);
            }
        }

        log::warn!("run_computed: computes did not settle after {MAX_SETTLE_ROUNDS} rounds");
    }

    /// Check the compute graph for cycles and duplicate edges.
    pub fn verify_deps(&mut self) -> Result<(), Error> {
        self.compute_order().map(|_| ())
    }

    fn compute_order(&mut self) -> Result<Vec<TypeId>, Error> {
        if let Some(order) = &self.order {
            return Ok(order.clone());
        }

        let mut order: Vec<TypeId> = self
            .graph
            .topology_order()?
            .into_iter()
            .filter(|id| self.computes.contains_key(id))
            .collect();
        for id in self.computes.keys() {
            if !order.contains(id) {
                order.push(*id);
            }
        }

        self.order = Some(order.clone());
        Ok(order)
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.computes.clear();
        self.commands.clear();
        self.graph = Graph::default();
        self.order = None;
        self.dirty.clear();
        self.queue.clear();
    }
}
