use std::any::Any;

use sneat_states::{Compute, ComputeDeps, Dep, State, Updater, assign_impl};

use crate::table::{FilterOptions, Page, TableQuery, derive_view, paginate};
use crate::{AppConfig, User, UserId, UserRecords};

/// The searched, filtered and sorted rows, unpaginated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleUsers {
    users: Vec<User>,
}

impl VisibleUsers {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn ids(&self) -> Vec<UserId> {
        self.users.iter().map(|user| user.id).collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Compute for VisibleUsers {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new().state::<UserRecords>().state::<TableQuery>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let records = deps.get_state_ref::<UserRecords>();
        let query = deps.get_state_ref::<TableQuery>();
        let users = derive_view(records.users(), query);
        log::debug!(
            "VisibleUsers: {} of {} users match",
            users.len(),
            records.len()
        );
        updater.set(Self { users });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

/// Requested page index. Clamped when the page is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInput {
    pub page: usize,
}

impl State for PageInput {
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

/// The slice of [`VisibleUsers`] the table renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPage {
    pub page: Page,
}

impl Compute for UserPage {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
            .state::<PageInput>()
            .state::<AppConfig>()
            .compute::<VisibleUsers>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let requested = deps.get_state_ref::<PageInput>().page;
        let page_size = deps.get_state_ref::<AppConfig>().page_size();
        let visible = deps.get_compute_ref::<VisibleUsers>();
        updater.set(Self {
            page: paginate(visible.users(), page_size, requested),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

impl Compute for FilterOptions {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new().state::<UserRecords>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let records = deps.get_state_ref::<UserRecords>();
        updater.set(Self::from_users(records.users()));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}
