// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 OVH Config Authors

use crate::{
    config_file::{ConfigFileBuilder, ConfigStore},
    endpoints::{self, DEFAULT_ENDPOINT},
    env::EnvSource,
    error::{Error, Result},
};
use log::*;
use std::path::PathBuf;

pub static DEFAULT_SECTION: &str = "default";
pub static ENDPOINT_KEY: &str = "endpoint";
pub static APPLICATION_KEY_KEY: &str = "application_key";
pub static APPLICATION_SECRET_KEY: &str = "application_secret";
pub static CONSUMER_KEY_KEY: &str = "consumer_key";

/// Endpoint and credentials used to talk to the API.
///
/// Empty strings mean "not set". A resolved config always has a non-empty
/// endpoint URL, application key and application secret; the consumer key
/// may still be empty since it can be requested later.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub app_key: String,
    pub app_secret: String,
    pub consumer_key: String,
}

impl ClientConfig {
    /// Use the given values, completing the empty ones from the
    /// environment and the default configuration files.
    pub fn new(
        endpoint: &str,
        app_key: &str,
        app_secret: &str,
        consumer_key: &str,
    ) -> Result<Self> {
        let partial = ClientConfig {
            endpoint: String::new(),
            app_key: app_key.to_string(),
            app_secret: app_secret.to_string(),
            consumer_key: consumer_key.to_string(),
        };
        ConfigResolver::new().resolve(endpoint, partial)
    }

    /// Credentials for `endpoint` from the environment and configuration
    /// files.
    pub fn from_endpoint(endpoint: &str) -> Result<Self> {
        ConfigResolver::new().resolve(endpoint, ClientConfig::default())
    }

    /// Endpoint and credentials entirely from the environment and
    /// configuration files.
    pub fn from_default() -> Result<Self> {
        ConfigResolver::new().resolve("", ClientConfig::default())
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint
    }
}

/// Resolves a [`ClientConfig`] from explicit values, `OVH_*` environment
/// variables and INI configuration files, in that order of precedence.
#[derive(Clone, Debug)]
pub struct ConfigResolver {
    files: ConfigFileBuilder,
    env: EnvSource,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Resolver reading the process environment and the files in
    /// `/etc/ovh.conf`, `~/.ovh.conf` and `./ovh.conf`.
    pub fn new() -> Self {
        let mut files = ConfigFileBuilder::new();
        let _ = files.load_default_locations();
        ConfigResolver {
            files,
            env: EnvSource::Process,
        }
    }

    /// Replace the configuration files to read, lowest priority first.
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut builder = ConfigFileBuilder::new();
        for path in files {
            let _ = builder.file(path);
        }
        self.files = builder;
        self
    }

    pub fn with_env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    /// Produce the final configuration.
    ///
    /// `endpoint` is the endpoint name or URL requested by the caller; when
    /// empty, `partial.endpoint` is used the same way. Fields already set on
    /// `partial` are kept, the others come from `OVH_*` variables, then from
    /// the section of the merged configuration files named after the
    /// endpoint.
    pub fn resolve(
        &self,
        endpoint: &str,
        partial: ClientConfig,
    ) -> Result<ClientConfig> {
        // Files are re-read on every call
        let store = self.files.build();

        let name = if !endpoint.is_empty() {
            endpoint.to_string()
        } else if !partial.endpoint.is_empty() {
            partial.endpoint.clone()
        } else {
            self.value(&store, DEFAULT_SECTION, ENDPOINT_KEY)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
        };
        debug!("Reading credentials from configuration section [{name}]");

        let app_key =
            self.field(partial.app_key, &store, &name, APPLICATION_KEY_KEY);
        let app_secret = self.field(
            partial.app_secret,
            &store,
            &name,
            APPLICATION_SECRET_KEY,
        );
        let consumer_key =
            self.field(partial.consumer_key, &store, &name, CONSUMER_KEY_KEY);

        let Some(endpoint) = endpoints::canonicalize(&name) else {
            return Err(Error::UnknownEndpoint(name));
        };
        if app_key.is_empty() {
            return Err(Error::MissingApplicationKey);
        }
        if app_secret.is_empty() {
            return Err(Error::MissingApplicationSecret);
        }

        debug!("Resolved endpoint {endpoint}");
        Ok(ClientConfig {
            endpoint,
            app_key,
            app_secret,
            consumer_key,
        })
    }

    // Explicit value, then environment, then files
    fn field(
        &self,
        explicit: String,
        store: &ConfigStore,
        section: &str,
        key: &str,
    ) -> String {
        if !explicit.is_empty() {
            return explicit;
        }
        self.value(store, section, key).unwrap_or_default()
    }

    fn value(
        &self,
        store: &ConfigStore,
        section: &str,
        key: &str,
    ) -> Option<String> {
        if let Some(v) = self.env.get(key) {
            debug!("Using {} from environment", EnvSource::var_name(key));
            return Some(v);
        }
        store.get(section, key).map(str::to_string)
    }
}
