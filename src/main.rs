use anyhow::Result;
use clap::Parser;
use contractmap::cli::Cli;
use contractmap::commands::check::{run_check, CheckConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    run_check(build_check_config(cli))
}

fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

// Pure function to map the CLI surface onto the command config
fn build_check_config(cli: Cli) -> CheckConfig {
    CheckConfig {
        repo: cli.repo,
        strict: cli.strict,
        format: cli.format.into(),
        output: cli.output,
        frontend_dir: cli.frontend_dir,
        backend_dir: cli.backend_dir,
    }
}
