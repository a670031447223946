//! Which visible rows are checked.

use std::any::Any;
use std::collections::BTreeSet;

use log::debug;
use sneat_states::{Command, Compute, ComputeDeps, Dep, State, Updater, assign_impl};

use crate::table::{TableQuery, VisibleUsers};
use crate::{UserId, UserRecords};

/// Selected ids plus the select-all flag.
///
/// As a compute it depends on the query and the record set, and any change to
/// either resets it to empty. Toggles arrive through the commands below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSelection {
    selected: BTreeSet<UserId>,
    all_selected: bool,
}

impl TableSelection {
    /// Add or remove `id`. Ids outside `visible` are ignored; returns whether
    /// the selection changed.
    pub fn toggle(&mut self, id: UserId, visible: &[UserId]) -> bool {
        if !visible.contains(&id) {
            debug!("TableSelection: ignoring toggle of hidden user {id}");
            return false;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.all_selected = !visible.is_empty() && self.selected.len() == visible.len();
        true
    }

    /// Select exactly `visible`, or clear when everything was already selected.
    pub fn toggle_all(&mut self, visible: &[UserId]) {
        if self.all_selected {
            self.clear();
        } else {
            self.selected = visible.iter().copied().collect();
            self.all_selected = !visible.is_empty();
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.all_selected = false;
    }

    pub fn is_selected(&self, id: UserId) -> bool {
        self.selected.contains(&id)
    }

    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// Ascending.
    pub fn ids(&self) -> Vec<UserId> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl Compute for TableSelection {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new().state::<TableQuery>().state::<UserRecords>()
    }

    fn compute(&self, _deps: Dep<'_>, updater: Updater) {
        if !self.selected.is_empty() {
            debug!("TableSelection: query changed, dropping {} selected", self.len());
        }
        updater.set(Self::default());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

/// Target of [`ToggleUserSelectionCommand`].
#[derive(Debug, Clone, Default)]
pub struct SelectionInput {
    pub toggle: Option<UserId>,
}

impl State for SelectionInput {
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

#[derive(Debug, Default)]
pub struct ToggleUserSelectionCommand;

impl Command for ToggleUserSelectionCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let Some(id) = deps.get_state_ref::<SelectionInput>().toggle else {
            return;
        };
        let visible = deps.get_compute_ref::<VisibleUsers>().ids();
        let mut selection = deps.get_compute_ref::<TableSelection>().clone();
        if selection.toggle(id, &visible) {
            updater.set(selection);
        }
    }
}

#[derive(Debug, Default)]
pub struct ToggleSelectAllCommand;

impl Command for ToggleSelectAllCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let visible = deps.get_compute_ref::<VisibleUsers>().ids();
        let mut selection = deps.get_compute_ref::<TableSelection>().clone();
        selection.toggle_all(&visible);
        updater.set(selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<UserId> {
        raw.iter().copied().map(UserId).collect()
    }

    #[test]
    fn toggling_every_visible_row_sets_select_all() {
        let visible = ids(&[1, 2, 3]);
        let mut selection = TableSelection::default();
        for id in &visible {
            assert!(!selection.all_selected());
            selection.toggle(*id, &visible);
        }
        assert!(selection.all_selected());

        selection.toggle(UserId(2), &visible);
        assert!(!selection.all_selected());
        assert_eq!(selection.ids(), ids(&[1, 3]));
    }

    #[test]
    fn select_all_round_trip_empties() {
        let visible = ids(&[4, 8, 1]);
        let mut selection = TableSelection::default();
        selection.toggle_all(&visible);
        assert_eq!(selection.ids(), ids(&[1, 4, 8]));
        assert!(selection.all_selected());

        selection.toggle_all(&visible);
        assert!(selection.is_empty());
        assert!(!selection.all_selected());
    }

    #[test]
    fn hidden_ids_are_ignored() {
        let visible = ids(&[2]);
        let mut selection = TableSelection::default();
        assert!(!selection.toggle(UserId(5), &visible));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_with_nothing_visible_stays_unflagged() {
        let mut selection = TableSelection::default();
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
        assert!(!selection.all_selected());
    }
}
