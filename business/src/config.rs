use std::any::Any;
use std::env::vars;
use std::path::PathBuf;

use log::info;
use serde::Deserialize;
use sneat_states::{State, assign_impl};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "SNEAT_";

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_EXPORT_FILE_NAME: &str = "users.csv";

/// Largest page the table will render.
const MAX_PAGE_SIZE: usize = 500;

/// Settings as read from the environment, before defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    pub page_size: Option<usize>,
    pub export_file_name: Option<String>,
    pub users_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    page_size: usize,
    export_file_name: String,
    users_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_owned(),
            users_file: None,
        }
    }
}

impl AppConfig {
    /// Reads `SNEAT_*` variables from the process environment.
    pub fn init() -> anyhow::Result<Self> {
        Self::from_env_iter(vars())
    }

    /// Like [`AppConfig::init`] but over any `(name, value)` pairs. Variables
    /// without the `SNEAT_` prefix are ignored.
    pub fn from_env_iter<I, K, V>(iter: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let scoped: Vec<(String, String)> = iter
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_owned(), value.as_ref().to_owned()))
            })
            .collect();
        let raw: RawConfig = serde_env::from_iter(scoped)?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            page_size,
            export_file_name,
            users_file,
        } = raw;

        let page_size = match page_size {
            Some(0) => anyhow::bail!("{ENV_PREFIX}PAGE_SIZE must be at least 1"),
            Some(size) if size > MAX_PAGE_SIZE => {
                anyhow::bail!("{ENV_PREFIX}PAGE_SIZE must be at most {MAX_PAGE_SIZE}, got {size}")
            }
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        };

        let export_file_name = match export_file_name {
            Some(name) if name.trim().is_empty() => {
                anyhow::bail!("{ENV_PREFIX}EXPORT_FILE_NAME must not be empty")
            }
            Some(name) if name.contains(['/', '\\']) => {
                anyhow::bail!("{ENV_PREFIX}EXPORT_FILE_NAME must be a bare file name, got {name}")
            }
            Some(name) => name,
            None => DEFAULT_EXPORT_FILE_NAME.to_owned(),
        };

        if let Some(path) = &users_file {
            info!("AppConfig: users file {}", path.display());
        }

        Ok(Self {
            page_size,
            export_file_name,
            users_file,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn export_file_name(&self) -> &str {
        &self.export_file_name
    }

    pub fn users_file(&self) -> Option<&PathBuf> {
        self.users_file.as_ref()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn with_users_file(mut self, users_file: Option<PathBuf>) -> Self {
        if users_file.is_some() {
            self.users_file = users_file;
        }
        self
    }
}

impl State for AppConfig {
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
