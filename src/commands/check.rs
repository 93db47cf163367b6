use crate::comparison;
use crate::config;
use crate::core::ContractReport;
use crate::extraction::{backend, collect_endpoints, frontend};
use crate::io::output::{create_writer, OutputFormat};
use crate::io::walker;
use anyhow::Result;
use std::fs::File;
use std::path::PathBuf;

pub struct CheckConfig {
    pub repo: PathBuf,
    pub strict: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub frontend_dir: Option<PathBuf>,
    pub backend_dir: Option<PathBuf>,
}

pub fn run_check(config: CheckConfig) -> Result<()> {
    let file_config = config::load_config(&config.repo)?;
    let frontend_dir = config
        .repo
        .join(config.frontend_dir.as_ref().unwrap_or(&file_config.frontend_dir));
    let backend_dir = config
        .repo
        .join(config.backend_dir.as_ref().unwrap_or(&file_config.backend_dir));

    let frontend_files = walker::find_frontend_files(&frontend_dir)?;
    let backend_files = walker::find_backend_files(&backend_dir)?;
    log::info!(
        "scanning {} frontend files under {}",
        frontend_files.len(),
        frontend_dir.display()
    );
    log::info!(
        "scanning {} backend files under {}",
        backend_files.len(),
        backend_dir.display()
    );

    let frontend_endpoints = collect_endpoints(
        &frontend_files,
        &config.repo,
        frontend::extract_frontend_endpoints,
    )?;
    let backend_endpoints = collect_endpoints(
        &backend_files,
        &config.repo,
        backend::extract_backend_endpoints,
    )?;

    let report = comparison::build_report(&frontend_endpoints, &backend_endpoints);
    write_report(&config, &report)?;

    if config.strict && !report.missing.is_empty() {
        anyhow::bail!("{} missing mappings", report.missing.len());
    }
    Ok(())
}

fn write_report(config: &CheckConfig, report: &ContractReport) -> Result<()> {
    match &config.output {
        Some(path) => {
            let file = File::create(path)?;
            create_writer(config.format, file).write_report(report)
        }
        None => create_writer(config.format, std::io::stdout()).write_report(report),
    }
}
