use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::CookError;

/// Case-insensitive mapping from an ingredient name to a value
/// (an aisle for `aisle.conf`, a canonical name for `inflection.conf`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMap {
    items: HashMap<String, String>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.items
            .insert(name.as_ref().to_lowercase(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ConfigMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Which config file to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Aisle,
    Inflection,
}

impl ConfigKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigKind::Aisle => "aisle.conf",
            ConfigKind::Inflection => "inflection.conf",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKind::Aisle => write!(f, "aisle"),
            ConfigKind::Inflection => write!(f, "inflection"),
        }
    }
}

/// Finds and reads `aisle.conf` / `inflection.conf`.
///
/// Search order: explicit path, `./config/<kind>.conf`,
/// `~/.config/cook/<kind>.conf`. Nothing found means no config.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    working_dir: PathBuf,
    home_dir: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            home_dir: dirs::home_dir(),
        }
    }

    /// Loader rooted at custom directories instead of the process ones
    pub fn with_dirs(working_dir: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            home_dir,
        }
    }

    pub fn find(&self, kind: ConfigKind, explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = self.working_dir.join("config").join(kind.file_name());
        if local.exists() {
            return Some(local);
        }

        self.home_dir
            .as_ref()
            .map(|home| home.join(".config").join("cook").join(kind.file_name()))
            .filter(|path| path.exists())
    }

    /// Unreadable files are an error; unparsable ones are logged and treated as absent.
    pub fn load(
        &self,
        kind: ConfigKind,
        explicit: Option<&Path>,
    ) -> Result<Option<ConfigMap>, CookError> {
        let Some(path) = self.find(kind, explicit) else {
            match kind {
                ConfigKind::Aisle => {
                    warn!("no aisle config found, listing every ingredient together")
                }
                ConfigKind::Inflection => debug!("no inflection config found"),
            }
            return Ok(None);
        };

        let text = std::fs::read_to_string(&path).map_err(|source| CookError::ConfigUnreadable {
            path: path.clone(),
            source,
        })?;

        match parse_config(&text) {
            Ok(map) => {
                debug!("loaded {} entries from {}", map.len(), path.display());
                Ok(Some(map))
            }
            Err(reason) => {
                let error = CookError::ConfigUnparsable { path, reason };
                warn!("{}; continuing without {} config", error, kind);
                Ok(None)
            }
        }
    }
}

/// Parse `aisle.conf` / `inflection.conf` text in the Cooklang aisle format.
///
/// ```text
/// [baking]
/// flour
/// caster sugar|sugar
/// ```
///
/// Every name and synonym under a `[section]` maps to the section name.
fn parse_config(text: &str) -> Result<ConfigMap, String> {
    let conf = cooklang::aisle::parse(text).map_err(|e| e.to_string())?;
    Ok(conf
        .ingredients_info()
        .into_iter()
        .map(|(name, info)| (name, info.category))
        .collect())
}
