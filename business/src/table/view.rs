//! Pure derivation of the visible rows: search, then filter, then sort.

use std::collections::BTreeSet;

use crate::table::{SortDirection, TableQuery, UserFilters};
use crate::User;

/// Case-insensitive substring match on name, email and username.
/// An empty term matches everything.
pub fn matches_search(user: &User, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&needle);

    contains(&user.name)
        || contains(&user.email)
        || user.username.as_deref().is_some_and(contains)
}

pub fn matches_filters(user: &User, filters: &UserFilters) -> bool {
    filters.status.is_none_or(|status| user.status == status)
        && filters
            .role
            .as_deref()
            .is_none_or(|role| user.role == role)
        && filters
            .department
            .as_deref()
            .is_none_or(|department| user.department == department)
}

/// Stable, case-sensitive sort on the key's string value. Ties keep the order
/// they had coming out of the filter stage.
pub fn sort_users(users: &mut [User], query: &TableQuery) {
    let Some(spec) = query.sort else {
        return;
    };
    users.sort_by(|a, b| {
        let ordering = spec.key.value(a).cmp(&spec.key.value(b));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// `(records, query) -> visible rows`, with no hidden state.
pub fn derive_view(users: &[User], query: &TableQuery) -> Vec<User> {
    let mut visible: Vec<User> = users
        .iter()
        .filter(|user| matches_search(user, &query.search))
        .filter(|user| matches_filters(user, &query.filters))
        .cloned()
        .collect();
    sort_users(&mut visible, query);
    visible
}

/// One page of the visible rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<User>,
    /// Zero-based, already clamped into `0..page_count`.
    pub page: usize,
    /// At least 1, even for an empty view.
    pub page_count: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Page {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// 1-based index of the first row on this page, 0 when empty.
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page * self.page_size + 1
        }
    }

    /// 1-based index of the last row on this page, 0 when empty.
    pub fn last_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page * self.page_size + self.items.len()
        }
    }
}

/// Slice `view` into pages of `page_size` rows. A zero page size is treated as 1.
pub fn paginate(view: &[User], page_size: usize, page: usize) -> Page {
    let page_size = page_size.max(1);
    let total = view.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);

    let items = view
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        page_count,
        page_size,
        total,
    }
}

/// Distinct values offered by the role and department filter drop-downs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub roles: Vec<String>,
    pub departments: Vec<String>,
}

impl FilterOptions {
    pub fn from_users(users: &[User]) -> Self {
        let roles: BTreeSet<&str> = users.iter().map(|u| u.role.as_str()).collect();
        let departments: BTreeSet<&str> = users.iter().map(|u| u.department.as_str()).collect();
        Self {
            roles: roles.into_iter().map(str::to_owned).collect(),
            departments: departments.into_iter().map(str::to_owned).collect(),
        }
    }
}
