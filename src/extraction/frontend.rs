use crate::core::{Endpoint, EndpointSet, HttpMethod};
use crate::extraction::paths::{normalize_path, TEMPLATE_VAR};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

// Call sites of the request helper whose first argument is a quoted or
// template-quoted literal: request.get('/stations'), request.put(`/a/${id}`).
// Calls that build the path dynamically are out of scope and never match.
static CALL_SITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"request\.((?i:get|post|put|delete))\(\s*([`"'][^`"']*[`"'])"#).unwrap()
});

/// Extract every HTTP call site from one frontend service file. A file with
/// no call sites yields an empty set; that is the normal case, not an error.
pub fn extract_frontend_endpoints(content: &str, source: &Path) -> EndpointSet {
    let mut endpoints = EndpointSet::new();

    for captures in CALL_SITE.captures_iter(content) {
        let method: HttpMethod = match captures[1].parse() {
            Ok(method) => method,
            Err(_) => continue,
        };
        let literal = &captures[2];
        let raw_path = &literal[1..literal.len() - 1];

        endpoints.insert(Endpoint {
            method,
            path: normalize_path(raw_path, &TEMPLATE_VAR),
            source: source.to_path_buf(),
        });
    }

    endpoints
}
