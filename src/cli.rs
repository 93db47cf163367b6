use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contractmap")]
#[command(about = "Check frontend HTTP calls against backend route declarations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Repository root to scan
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Exit with non-zero status when mappings are missing
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Frontend service directory, relative to the repository root
    #[arg(long = "frontend-dir")]
    pub frontend_dir: Option<PathBuf>,

    /// Backend Java source root, relative to the repository root
    #[arg(long = "backend-dir")]
    pub backend_dir: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
