// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 OVH Config Authors

use ini::{Ini, ParseOption};
use log::*;
use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

pub static SYSTEM_CONFIG_PATH: &str = "/etc/ovh.conf";
pub static USER_CONFIG_FILE: &str = ".ovh.conf"; // joined to the home directory
pub static LOCAL_CONFIG_PATH: &str = "./ovh.conf";

fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: true,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Key/value pairs from one or more INI files, grouped by section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: HashMap<String, HashMap<String, String>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /*
     * Input: INI text
     * Return: the parsed store, or the parser error
     *
     * Values fully enclosed in quotes lose the quotes, backslashes are kept
     * as is: secrets are opaque strings. Keys outside of any section are
     * dropped.
     */
    pub fn from_ini_str(text: &str) -> Result<Self, ini::ParseError> {
        let conf = Ini::load_from_str_opt(text, parse_option())?;
        Ok(Self::from_ini(&conf))
    }

    fn from_ini(conf: &Ini) -> Self {
        let mut store = ConfigStore::new();
        for (section, properties) in conf.iter() {
            let Some(section) = section else {
                continue;
            };
            for (key, value) in properties.iter() {
                store.set(section, key, value);
            }
        }
        store
    }

    /// Load a single configuration file.
    ///
    /// Files that are missing, unreadable or not valid INI give `None`. The
    /// reason is logged, never returned: an absent file is a normal setup.
    /// A leading UTF-8 byte order mark is skipped.
    pub fn load_file(path: &Path) -> Option<Self> {
        match Ini::load_from_file_opt(path, parse_option()) {
            Ok(conf) => {
                debug!("Loaded configuration file {}", path.display());
                Some(Self::from_ini(&conf))
            }
            Err(ini::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Configuration file {} not found", path.display());
                None
            }
            Err(ini::Error::Io(e)) => {
                warn!(
                    "Skipping unreadable configuration file {}: {e}",
                    path.display()
                );
                None
            }
            Err(ini::Error::Parse(e)) => {
                warn!(
                    "Skipping malformed configuration file {}: {e}",
                    path.display()
                );
                None
            }
        }
    }

    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let _ = self
            .sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Apply `other` on top of `self`. Values of `other` replace the ones
    /// already present for the same (section, key), everything else is kept.
    pub fn merge(&mut self, other: ConfigStore) {
        for (section, properties) in other.sections {
            let target = self.sections.entry(section).or_default();
            for (key, value) in properties {
                let _ = target.insert(key, value);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(HashMap::is_empty)
    }
}

/// Ordered list of configuration files, lowest priority first.
#[derive(Clone, Debug, Default)]
pub struct ConfigFileBuilder {
    files: Vec<PathBuf>,
}

impl ConfigFileBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file. Files added later take precedence over earlier ones.
    pub fn file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.files.push(path.into());
        self
    }

    /// Adds the system, user and local configuration files.
    ///
    /// The user file is only added when the home directory of the current
    /// user can be determined.
    pub fn load_default_locations(&mut self) -> &mut Self {
        let _ = self.file(SYSTEM_CONFIG_PATH);
        if let Some(home) = current_user_home() {
            let _ = self.file(home.join(USER_CONFIG_FILE));
        }
        self.file(LOCAL_CONFIG_PATH)
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Reads every file and merges them in order.
    pub fn build(&self) -> ConfigStore {
        self.files
            .iter()
            .enumerate()
            .filter_map(|(index, path)| {
                debug!(
                    "Loading configuration from FILE (#{}): {}",
                    index,
                    path.display()
                );
                ConfigStore::load_file(path)
            })
            .fold(ConfigStore::new(), |mut merged, layer| {
                merged.merge(layer);
                merged
            })
    }
}

/*
 * Return: home directory of the current user
 *
 * Failing to determine it is not an error, the user file is skipped.
 */
pub fn current_user_home() -> Option<PathBuf> {
    let home = dirs::home_dir();
    if home.is_none() {
        debug!("Could not determine home directory of the current user");
    }
    home
}
