//! User-editable table inputs: search term, filters and sort.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use sneat_states::{State, assign_impl};
use thiserror::Error;

use crate::{User, UserStatus};

/// Sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
    Email,
    Username,
    Role,
    Department,
    Status,
}

impl SortKey {
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Name,
        Self::Email,
        Self::Username,
        Self::Role,
        Self::Department,
        Self::Status,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Username => "username",
            Self::Role => "role",
            Self::Department => "department",
            Self::Status => "status",
        }
    }

    /// The string the comparator sees for this column.
    ///
    /// Ids compare as their decimal text, so `10` sorts before `9`.
    pub fn value(self, user: &User) -> Cow<'_, str> {
        match self {
            Self::Id => Cow::Owned(user.id.to_string()),
            Self::Name => Cow::Borrowed(&user.name),
            Self::Email => Cow::Borrowed(&user.email),
            Self::Username => Cow::Borrowed(user.username_or_empty()),
            Self::Role => Cow::Borrowed(&user.role),
            Self::Department => Cow::Borrowed(&user.department),
            Self::Status => Cow::Borrowed(user.status.as_str()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key `{0}`")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSortKeyError(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "⏶",
            Self::Descending => "⏷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }
}

/// Equality filters. `None` means no constraint on that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub status: Option<UserStatus>,
    pub role: Option<String>,
    pub department: Option<String>,
}

impl UserFilters {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.role.is_none() && self.department.is_none()
    }
}

/// Treats an empty or blank filter value as "no constraint".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Search, filter and sort inputs of the user table.
///
/// Every setter returns whether the query actually changed, so callers only
/// touch the state (and reset the selection) on real edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub filters: UserFilters,
    pub sort: Option<SortSpec>,
}

impl TableQuery {
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.search == term {
            return false;
        }
        self.search = term;
        true
    }

    pub fn set_status_filter(&mut self, status: Option<UserStatus>) -> bool {
        if self.filters.status == status {
            return false;
        }
        self.filters.status = status;
        true
    }

    pub fn set_role_filter(&mut self, role: Option<String>) -> bool {
        let role = non_empty(role);
        if self.filters.role == role {
            return false;
        }
        self.filters.role = role;
        true
    }

    pub fn set_department_filter(&mut self, department: Option<String>) -> bool {
        let department = non_empty(department);
        if self.filters.department == department {
            return false;
        }
        self.filters.department = department;
        true
    }

    /// Same key flips the direction, a new key starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.key == key => SortSpec {
                key,
                direction: spec.direction.reversed(),
            },
            _ => SortSpec::ascending(key),
        });
    }

    pub fn sort_direction_for(&self, key: SortKey) -> Option<SortDirection> {
        self.sort
            .filter(|spec| spec.key == key)
            .map(|spec| spec.direction)
    }

    pub fn clear(&mut self) -> bool {
        if *self == Self::default() {
            return false;
        }
        *self = Self::default();
        true
    }
}

impl State for TableQuery {
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
