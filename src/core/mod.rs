use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// HTTP methods the contract check recognizes. Anything else (PATCH, HEAD,
/// OPTIONS) is outside the request-helper surface and never extracted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        static DISPLAY_STRINGS: &[(HttpMethod, &str)] = &[
            (HttpMethod::Get, "GET"),
            (HttpMethod::Post, "POST"),
            (HttpMethod::Put, "PUT"),
            (HttpMethod::Delete, "DELETE"),
        ];

        DISPLAY_STRINGS
            .iter()
            .find(|(m, _)| m == self)
            .map(|(_, s)| *s)
            .unwrap_or("GET")
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported HTTP method: {0}")]
pub struct ParseMethodError(pub String);

impl FromStr for HttpMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// A single HTTP endpoint, either a frontend call site or a backend route
/// declaration. `method` and `path` form the comparison key; `source` is
/// the repo-relative file the endpoint was extracted from, kept for
/// reporting only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
    pub source: PathBuf,
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            method,
            path: path.into(),
            source: source.into(),
        }
    }

    /// The `(method, path)` pair used for set membership; source is ignored.
    pub fn key(&self) -> (HttpMethod, &str) {
        (self.method, self.path.as_str())
    }
}

pub type EndpointSet = HashSet<Endpoint>;

/// Result of one contract check run.
#[derive(Clone, Debug, Serialize)]
pub struct ContractReport {
    pub frontend_endpoints: usize,
    pub backend_endpoints: usize,
    pub missing: Vec<Endpoint>,
}
