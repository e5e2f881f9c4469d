// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 OVH Config Authors

use std::{collections::HashMap, env};

pub static ENV_PREFIX: &str = "OVH_";

/// Where `OVH_*` overrides are read from.
///
/// The process environment is used by default. A fixed map can be supplied
/// instead, which keeps callers that embed several clients (and tests) away
/// from global process state.
#[derive(Clone, Debug, Default)]
pub enum EnvSource {
    #[default]
    Process,
    Map(HashMap<String, String>),
}

impl EnvSource {
    pub fn from_map<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvSource::Map(
            vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        )
    }

    /// Name of the variable overriding the given configuration key,
    /// e.g. `application_key` -> `OVH_APPLICATION_KEY`.
    pub fn var_name(key: &str) -> String {
        format!("{}{}", ENV_PREFIX, key.to_uppercase())
    }

    /// Value of `OVH_<KEY>`. Unset, empty and non-unicode values are all
    /// reported as `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        let name = Self::var_name(key);
        let value = match self {
            EnvSource::Process => env::var(&name).ok(),
            EnvSource::Map(map) => map.get(&name).cloned(),
        };
        value.filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_name() {
        assert_eq!(EnvSource::var_name("endpoint"), "OVH_ENDPOINT");
        assert_eq!(
            EnvSource::var_name("application_secret"),
            "OVH_APPLICATION_SECRET"
        );
    }

    #[test]
    fn test_map_lookup() {
        let env = EnvSource::from_map([
            ("OVH_CONSUMER_KEY", "ck"),
            ("OVH_APPLICATION_KEY", ""),
        ]);
        assert_eq!(env.get("consumer_key").as_deref(), Some("ck"));
        // Set but empty counts as unset
        assert_eq!(env.get("application_key"), None);
        assert_eq!(env.get("application_secret"), None);
    }
}
