#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn discover_bin() -> &'static str {
    env!("CARGO_BIN_EXE_discover-templates")
}

pub fn validate_bin() -> &'static str {
    env!("CARGO_BIN_EXE_validate-packer")
}

/// Writes `contents` to `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
}

/// Runs a binary with the given working directory and extra args, with the
/// ambient GITHUB_OUTPUT scrubbed so the host environment cannot leak in.
pub fn run_in(bin: &str, cwd: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env_remove("GITHUB_OUTPUT")
        .env_remove("PACKER_BIN")
        .output()
        .expect("Failed to execute command")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Drops a fake `packer` executable into `dir` whose behavior per
/// subcommand is controlled by `body` (a shell fragment seeing `$1`).
#[cfg(unix)]
pub fn write_fake_packer(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-packer");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
pub const PACKER_ALWAYS_PASSES: &str = "exit 0";

#[cfg(unix)]
pub const PACKER_FAILS_VALIDATE: &str = r#"if [ "$1" = "validate" ]; then
  echo "Error: invalid HCL syntax in $2" >&2
  exit 1
fi
exit 0"#;

#[cfg(unix)]
pub const PACKER_FAILS_INIT: &str = r#"if [ "$1" = "init" ]; then
  echo "Error: failed to install plugins" >&2
  exit 1
fi
exit 0"#;

/// Minimal template that real `packer validate` accepts, mirroring the
/// no-op null-source build the upstream CI uses as its smoke fixture.
pub const VALID_TEMPLATE: &str = r#"packer {
  required_version = ">= 1.10.0"
}

source "null" "example" {
  communicator = "none"
}

build {
  sources = ["source.null.example"]
}
"#;
