use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Recursively collects files under `root` whose names end in one of
/// `suffixes`. Matching is on the file name, so multi-part suffixes like
/// `.pkr.hcl` work where extension matching would not.
pub fn walk_suffix_files(root: &Path, suffixes: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| Error::walk(root, e))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if suffixes.iter().any(|suffix| name.ends_with(suffix)) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}
