// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod extraction;
pub mod io;

// Re-export commonly used types
pub use crate::core::{ContractReport, Endpoint, HttpMethod, ParseMethodError};

pub use crate::comparison::{build_report, find_missing};

pub use crate::extraction::{
    backend::extract_backend_endpoints, collect_endpoints, frontend::extract_frontend_endpoints,
    paths::normalize_path,
};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};

pub use crate::io::walker::{find_backend_files, find_frontend_files, FileWalker};
