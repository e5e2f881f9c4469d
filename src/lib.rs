// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 OVH Config Authors

//! Endpoint and credential resolution for OVH API clients.
//!
//! Values are taken from, by decreasing precedence: the caller, the
//! `OVH_ENDPOINT`, `OVH_APPLICATION_KEY`, `OVH_APPLICATION_SECRET` and
//! `OVH_CONSUMER_KEY` environment variables, then the INI files
//! `./ovh.conf`, `~/.ovh.conf` and `/etc/ovh.conf`. The files use the same
//! format as the other OVH API wrappers:
//!
//! ```ini
//! [default]
//! endpoint=ovh-eu
//!
//! [ovh-eu]
//! application_key=...
//! application_secret=...
//! consumer_key=...
//! ```

#![deny(
    nonstandard_style,
    improper_ctypes,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    unconditional_recursion,
    while_true,
    missing_debug_implementations,
    trivial_casts,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]

pub mod config_file;
pub mod endpoints;
pub mod env;
pub mod error;
pub mod resolver;

pub use config_file::{ConfigFileBuilder, ConfigStore};
pub use env::EnvSource;
pub use error::{Error, Result};
pub use resolver::{ClientConfig, ConfigResolver};
