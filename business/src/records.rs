//! The immutable record set behind the user table.

use std::any::Any;
use std::collections::BTreeSet;
use std::path::Path;

use log::info;
use sneat_states::{State, assign_impl};
use thiserror::Error;

use crate::{User, UserId, UserStatus};

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("failed to read users file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse users file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate user id {0}")]
    DuplicateId(UserId),
    #[error("user ids must be positive, found 0 for `{0}`")]
    ZeroId(String),
}

/// Base list of users. Never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecords {
    users: Vec<User>,
}

impl Default for UserRecords {
    fn default() -> Self {
        Self::seed()
    }
}

impl UserRecords {
    /// Validates id uniqueness and positivity.
    pub fn new(users: Vec<User>) -> Result<Self, RecordsError> {
        let mut seen = BTreeSet::new();
        for user in &users {
            if user.id.get() == 0 {
                return Err(RecordsError::ZeroId(user.name.clone()));
            }
            if !seen.insert(user.id) {
                return Err(RecordsError::DuplicateId(user.id));
            }
        }
        Ok(Self { users })
    }

    pub fn from_json(json: &str) -> Result<Self, RecordsError> {
        let users: Vec<User> = serde_json::from_str(json)?;
        Self::new(users)
    }

    pub fn load(path: &Path) -> Result<Self, RecordsError> {
        let json = std::fs::read_to_string(path).map_err(|source| RecordsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records = Self::from_json(&json)?;
        info!(
            "UserRecords: loaded {} users from {}",
            records.len(),
            path.display()
        );
        Ok(records)
    }

    /// The built-in demo data set.
    pub fn seed() -> Self {
        let seed = [
            (1, "John Doe", "john.doe@example.com", "johndoe", "Admin", "IT", UserStatus::Active),
            (2, "Jane Smith", "jane.smith@example.com", "janesmith", "Manager", "HR", UserStatus::Active),
            (3, "Bob Johnson", "bob.johnson@example.com", "bobjohnson", "Editor", "Marketing", UserStatus::Inactive),
            (4, "Alice Williams", "alice.williams@example.com", "alicew", "User", "Finance", UserStatus::New),
            (5, "Charlie Brown", "charlie.brown@example.com", "charlieb", "User", "Sales", UserStatus::Locked),
            (6, "Diana Prince", "diana.prince@example.com", "dianap", "Admin", "IT", UserStatus::Active),
            (7, "Ethan Hunt", "ethan.hunt@example.com", "ethanh", "Manager", "Operations", UserStatus::Active),
            (8, "Fiona Gallagher", "fiona.gallagher@example.com", "fionag", "Editor", "Content", UserStatus::New),
        ];

        let users = seed
            .into_iter()
            .map(|(id, name, email, username, role, department, status)| User {
                id: UserId(id),
                name: name.to_owned(),
                email: email.to_owned(),
                username: Some(username.to_owned()),
                role: role.to_owned(),
                department: department.to_owned(),
                status,
                profile_image: None,
            })
            .collect();

        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl State for UserRecords {
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
