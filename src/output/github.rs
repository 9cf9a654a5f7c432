use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::discovery::DiscoveryResult;
use crate::error::{Error, Result};

/// Appends discovery results to a GitHub Actions output file as two
/// multi-line values (`templates`, `var_files`) using the `key<<EOF`
/// heredoc syntax.
pub fn write_outputs(path: &Path, result: &DiscoveryResult) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::output_write(path, e))?;

    write_multiline(&mut file, "templates", &result.templates)
        .and_then(|()| write_multiline(&mut file, "var_files", &result.var_files))
        .map_err(|e| Error::output_write(path, e))?;

    tracing::debug!(path = %path.display(), "wrote pipeline outputs");
    Ok(())
}

fn write_multiline(w: &mut impl Write, key: &str, values: &[String]) -> std::io::Result<()> {
    writeln!(w, "{key}<<EOF")?;
    for value in values {
        writeln!(w, "{value}")?;
    }
    writeln!(w, "EOF")
}
