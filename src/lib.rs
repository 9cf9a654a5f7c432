/// Packer Preflight
///
/// CI-side tooling for HashiCorp Packer template trees: a discoverer that
/// locates `*.pkr.hcl` templates and `*.pkrvars.hcl` variable files, and a
/// validator that runs `packer init`/`packer validate` against each template
/// and aggregates the results into an exit code.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod validate;

pub use discovery::DiscoveryResult;
pub use validate::{CheckOutcome, RunSummary};
