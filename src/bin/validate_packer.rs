use std::process::ExitCode;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;

use packer_preflight::cli::ValidateArgs;
use packer_preflight::discovery;
use packer_preflight::logging::{self, Verbosity};
use packer_preflight::validate::{self, checker::PackerCli};

fn main() -> Result<ExitCode> {
    let args = ValidateArgs::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let result = discovery::discover(&args.path)
        .with_context(|| format!("Discovery failed under {}", args.path.display()))?;

    // Zero templates is a pass for validation; only discovery treats it as
    // a "nothing to do" exit 1.
    if !result.found_any() {
        println!("No Packer templates found under {}", args.path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let packer = PackerCli::new(&args.packer);
    let summary = validate::run(&args.path, &packer, &result);
    print!("{}", summary.render());

    Ok(if summary.ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
