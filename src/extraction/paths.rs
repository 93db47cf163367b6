use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder every concrete path variable collapses to, so structurally
/// identical routes compare equal regardless of the variable's name.
pub const PLACEHOLDER: &str = "{var}";

/// Template-literal interpolation spans in frontend paths: `${id}`.
pub static TEMPLATE_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{[^}]+\}").unwrap());

/// JAX-RS path variables in backend paths: `{id}`.
pub static BRACE_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]+\}").unwrap());

static REPEATED_SLASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"//+").unwrap());

/// Normalize a raw path into its comparison form: variables matching
/// `placeholder` become `{var}`, the path gains exactly one leading slash,
/// and runs of slashes collapse.
pub fn normalize_path(raw: &str, placeholder: &Regex) -> String {
    let mut normalized = placeholder
        .replace_all(raw.trim(), PLACEHOLDER)
        .into_owned();
    if !normalized.starts_with('/') {
        normalized.insert(0, '/');
    }
    REPEATED_SLASHES.replace_all(&normalized, "/").into_owned()
}
