//! Contract comparison: which frontend call sites have no backend route.

use crate::core::{ContractReport, Endpoint, EndpointSet, HttpMethod};
use std::collections::HashSet;

/// Frontend endpoints whose `(method, path)` pair is not declared by any
/// backend route, sorted by method, then path, then source file. An empty
/// result is the normal success case.
pub fn find_missing(frontend: &EndpointSet, backend: &EndpointSet) -> Vec<Endpoint> {
    let declared: HashSet<(HttpMethod, &str)> = backend.iter().map(Endpoint::key).collect();

    let mut missing: Vec<Endpoint> = frontend
        .iter()
        .filter(|endpoint| !declared.contains(&endpoint.key()))
        .cloned()
        .collect();
    missing.sort_by(|a, b| {
        (a.method.as_str(), &a.path, &a.source).cmp(&(b.method.as_str(), &b.path, &b.source))
    });
    missing
}

pub fn build_report(frontend: &EndpointSet, backend: &EndpointSet) -> ContractReport {
    ContractReport {
        frontend_endpoints: frontend.len(),
        backend_endpoints: backend.len(),
        missing: find_missing(frontend, backend),
    }
}
