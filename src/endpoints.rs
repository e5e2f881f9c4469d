// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 OVH Config Authors

/*
 * Constants and static variables
 */
pub static DEFAULT_ENDPOINT: &str = "ovh-eu";

pub static OVH_EU: &str = "https://eu.api.ovh.com/1.0";
pub static OVH_CA: &str = "https://ca.api.ovh.com/1.0";
pub static OVH_US: &str = "https://api.us.ovhcloud.com/1.0";
pub static KIMSUFI_EU: &str = "https://eu.api.kimsufi.com/1.0";
pub static KIMSUFI_CA: &str = "https://ca.api.kimsufi.com/1.0";
pub static SOYOUSTART_EU: &str = "https://eu.api.soyoustart.com/1.0";
pub static SOYOUSTART_CA: &str = "https://ca.api.soyoustart.com/1.0";

/// Symbolic endpoint names and the API base URL each one stands for.
pub static ENDPOINTS: &[(&str, &str)] = &[
    ("ovh-eu", OVH_EU),
    ("ovh-ca", OVH_CA),
    ("ovh-us", OVH_US),
    ("kimsufi-eu", KIMSUFI_EU),
    ("kimsufi-ca", KIMSUFI_CA),
    ("soyoustart-eu", SOYOUSTART_EU),
    ("soyoustart-ca", SOYOUSTART_CA),
];

/// Look up the base URL registered for a symbolic endpoint name.
pub fn lookup(name: &str) -> Option<&'static str> {
    ENDPOINTS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, url)| *url)
}

/// Turn an endpoint name or URL into the base URL to use.
///
/// Anything containing a `/` is taken as a literal URL and returned as is,
/// without consulting the table. Names missing from the table give `None`.
pub fn canonicalize(endpoint: &str) -> Option<String> {
    if endpoint.contains('/') {
        return Some(endpoint.to_string());
    }
    lookup(endpoint).map(str::to_string)
}
