use crate::core::{Endpoint, EndpointSet, HttpMethod};
use crate::extraction::paths::{normalize_path, BRACE_VAR};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static METHOD_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(GET|POST|PUT|DELETE)\b").unwrap());
static PATH_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r#"@Path\("([^"]+)"\)"#).unwrap());

/// Extract every route declared in one JAX-RS resource file.
///
/// The first `@Path` in the file is the class-level base path (empty when the
/// class declares none). Each `@GET`/`@POST`/`@PUT`/`@DELETE` line then opens
/// a look-ahead over the annotation lines immediately below it; a `@Path`
/// among those supplies the method's sub-path, and the scan resumes after the
/// look-ahead. Routes with no sub-path map to the base path alone.
pub fn extract_backend_endpoints(content: &str, source: &Path) -> EndpointSet {
    let lines: Vec<&str> = content.lines().collect();

    let base_path = lines
        .iter()
        .find_map(|line| PATH_ANNOTATION.captures(line))
        .map(|captures| captures[1].to_string())
        .unwrap_or_default();

    let mut endpoints = EndpointSet::new();
    let mut i = 0;
    while i < lines.len() {
        let Some(captures) = METHOD_ANNOTATION.captures(lines[i]) else {
            i += 1;
            continue;
        };
        let method: HttpMethod = match captures[1].parse() {
            Ok(method) => method,
            Err(_) => {
                i += 1;
                continue;
            }
        };

        // Consume the annotation block under the method annotation; the last
        // @Path in the block wins. The first non-annotation line (usually the
        // handler signature) ends the block.
        let mut sub_path = String::new();
        let mut j = i + 1;
        while j < lines.len() && lines[j].trim().starts_with('@') {
            if let Some(path_captures) = PATH_ANNOTATION.captures(lines[j]) {
                sub_path = path_captures[1].to_string();
            }
            j += 1;
        }

        let full_path = if sub_path.is_empty() {
            base_path.clone()
        } else {
            format!(
                "{}/{}",
                base_path.trim_end_matches('/'),
                sub_path.trim_start_matches('/')
            )
        };

        endpoints.insert(Endpoint {
            method,
            path: normalize_path(&full_path, &BRACE_VAR),
            source: source.to_path_buf(),
        });
        i = j;
    }

    endpoints
}
