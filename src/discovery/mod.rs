pub mod walker;

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};

/// File name suffix identifying a Packer template.
pub const TEMPLATE_SUFFIX: &str = ".pkr.hcl";

/// File name suffix identifying a Packer variable file.
pub const VAR_FILE_SUFFIX: &str = ".pkrvars.hcl";

/// Templates and variable files found under a root, as root-relative paths
/// with forward-slash separators, sorted lexicographically.
#[derive(Debug, Default, Serialize)]
pub struct DiscoveryResult {
    pub templates: Vec<String>,
    pub var_files: Vec<String>,
}

impl DiscoveryResult {
    pub fn found_any(&self) -> bool {
        !self.templates.is_empty()
    }
}

pub fn discover(root: &Path) -> Result<DiscoveryResult> {
    if !root.is_dir() {
        return Err(Error::directory_not_found(root));
    }

    let mut templates = Vec::new();
    let mut var_files = Vec::new();

    for path in walker::walk_suffix_files(root, &[TEMPLATE_SUFFIX, VAR_FILE_SUFFIX])? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rel = relative_slash_path(root, &path);

        if name.ends_with(VAR_FILE_SUFFIX) {
            var_files.push(rel);
        } else {
            templates.push(rel);
        }
    }

    templates.sort();
    var_files.sort();

    tracing::info!(
        templates = templates.len(),
        var_files = var_files.len(),
        root = %root.display(),
        "discovery complete"
    );

    Ok(DiscoveryResult {
        templates,
        var_files,
    })
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
