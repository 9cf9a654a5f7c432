use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "discover-templates")]
#[command(about = "Find Packer templates and variable files under a directory tree", long_about = None)]
pub struct DiscoverArgs {
    /// Directory to scan (defaults to the current directory)
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output format for stdout (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Key/value output file for pipeline consumption
    #[arg(long, value_name = "FILE", env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
#[command(name = "validate-packer")]
#[command(about = "Run packer init/validate against every template under a directory tree", long_about = None)]
pub struct ValidateArgs {
    /// Directory to scan (defaults to the current directory)
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Packer executable to invoke
    #[arg(long, value_name = "PROGRAM", env = "PACKER_BIN", default_value = "packer")]
    pub packer: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl DiscoverArgs {
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.path)
    }
}

impl ValidateArgs {
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.path)
    }
}

pub fn validate_root(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
