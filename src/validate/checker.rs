use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Wrapper around the external `packer` binary. One `init` plus one
/// `validate` invocation per template, working directory set to the
/// template's parent so relative references resolve.
pub struct PackerCli {
    program: PathBuf,
}

/// Captured result of a single checker invocation. A spawn failure
/// (missing binary, permission error) is reported the same way as a
/// nonzero exit, so it stays a per-template failure.
pub struct CheckerRun {
    pub success: bool,
    pub text: String,
}

impl PackerCli {
    /// Resolves `program` on `PATH` when possible. Resolution failure is
    /// not fatal here; the spawn error surfaces per template instead.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let program = match which::which(&program) {
            Ok(resolved) => {
                tracing::debug!(program = %resolved.display(), "resolved checker");
                resolved
            }
            Err(err) => {
                tracing::warn!(program = %program.display(), %err, "checker not found on PATH");
                program
            }
        };
        Self { program }
    }

    pub fn init(&self, template: &Path) -> CheckerRun {
        self.run("init", template)
    }

    pub fn validate(&self, template: &Path) -> CheckerRun {
        self.run("validate", template)
    }

    fn run(&self, subcommand: &str, template: &Path) -> CheckerRun {
        let dir = match template.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = template.file_name().unwrap_or(template.as_os_str());

        tracing::debug!(
            subcommand,
            template = %template.display(),
            "invoking checker"
        );

        match Command::new(&self.program)
            .arg(subcommand)
            .arg(file_name)
            .current_dir(dir)
            .output()
        {
            Ok(output) => CheckerRun {
                success: output.status.success(),
                text: collect_text(&output),
            },
            Err(err) => CheckerRun {
                success: false,
                text: format!("failed to run '{}': {err}", self.program.display()),
            },
        }
    }
}

fn collect_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failure_is_a_failed_run() {
        let packer = PackerCli::new("/nonexistent/packer-binary");
        let run = packer.init(Path::new("/tmp/test.pkr.hcl"));

        assert!(!run.success);
        assert!(run.text.contains("failed to run"));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let stub = temp_dir.path().join("packer-stub.sh");
        fs::write(&stub, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let template = temp_dir.path().join("test.pkr.hcl");
        fs::write(&template, "# template").unwrap();

        let packer = PackerCli::new(&stub);
        assert!(packer.validate(&template).success);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_run_captures_stderr() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let stub = temp_dir.path().join("packer-stub.sh");
        fs::write(&stub, "#!/bin/sh\necho 'Error: invalid HCL' >&2\nexit 1\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let template = temp_dir.path().join("test.pkr.hcl");
        fs::write(&template, "invalid {").unwrap();

        let packer = PackerCli::new(&stub);
        let run = packer.validate(&template);

        assert!(!run.success);
        assert_eq!(run.text, "Error: invalid HCL");
    }
}
