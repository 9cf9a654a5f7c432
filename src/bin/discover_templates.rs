use std::process::ExitCode;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;

use packer_preflight::cli::DiscoverArgs;
use packer_preflight::discovery;
use packer_preflight::logging::{self, Verbosity};
use packer_preflight::output::{github, DiscoveryFormatter};

fn main() -> Result<ExitCode> {
    let args = DiscoverArgs::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let result = discovery::discover(&args.path)
        .with_context(|| format!("Discovery failed under {}", args.path.display()))?;

    if !result.found_any() {
        println!("No Packer templates found under {}", args.path.display());
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", DiscoveryFormatter::format(&result, args.format)?);

    if let Some(ref output_file) = args.github_output {
        github::write_outputs(output_file, &result).context("Failed to write pipeline outputs")?;
    }

    Ok(ExitCode::SUCCESS)
}
