// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 OVH Config Authors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Endpoint is neither a known name nor a URL
    #[error("Unknown endpoint '{0}'. Consider checking the endpoints list or using an URL.")]
    UnknownEndpoint(String),

    #[error("Missing application key. Please check your configuration or consult the documentation to create one.")]
    MissingApplicationKey,

    #[error("Missing application secret. Please check your configuration or consult the documentation to create one.")]
    MissingApplicationSecret,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_endpoint_message_names_endpoint() {
        let err = Error::UnknownEndpoint("ovh-mars".to_string());
        assert!(err.to_string().contains("'ovh-mars'"));
    }
}
