pub mod github;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::discovery::DiscoveryResult;

pub struct DiscoveryFormatter;

impl DiscoveryFormatter {
    pub fn format(result: &DiscoveryResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::render_text(result)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        }
    }

    fn render_text(result: &DiscoveryResult) -> String {
        let mut lines: Vec<&str> = Vec::new();
        lines.extend(result.templates.iter().map(String::as_str));
        lines.extend(result.var_files.iter().map(String::as_str));
        lines.join("\n")
    }
}
