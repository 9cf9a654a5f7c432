pub mod checker;

use std::path::Path;

use colored::Colorize;

use crate::discovery::DiscoveryResult;
use self::checker::PackerCli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Validate,
}

impl Stage {
    pub fn failure_label(self) -> &'static str {
        match self {
            Stage::Init => "Init failed",
            Stage::Validate => "Validation failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed { stage: Stage, detail: String },
}

#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub outcome: CheckOutcome,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// True iff no template failed. Vacuously true for zero templates.
    pub fn ok(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, path: String, outcome: CheckOutcome) {
        match outcome {
            CheckOutcome::Passed => self.passed += 1,
            CheckOutcome::Failed { .. } => self.failed += 1,
        }
        self.reports.push(FileReport { path, outcome });
    }

    /// Renders the per-file markers, failure details, and the summary line.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for report in &self.reports {
            match &report.outcome {
                CheckOutcome::Passed => {
                    out.push_str(&format!("{} {}\n", "✓".green(), report.path));
                }
                CheckOutcome::Failed { stage, detail } => {
                    out.push_str(&format!("{} {}\n", "✗".red(), report.path));
                    push_detail(&mut out, stage.failure_label(), detail);
                }
            }
        }

        out.push_str(&format!("Passed: {}, Failed: {}\n", self.passed, self.failed));
        out
    }
}

fn push_detail(out: &mut String, label: &str, detail: &str) {
    if detail.is_empty() {
        out.push_str(&format!("  {label}\n"));
        return;
    }
    for (i, line) in detail.lines().enumerate() {
        if i == 0 {
            out.push_str(&format!("  {label}: {line}\n"));
        } else {
            out.push_str(&format!("    {line}\n"));
        }
    }
}

/// Checks every discovered template, in order, and aggregates the outcomes.
/// A failure never stops the run; every template is attempted.
pub fn run(root: &Path, packer: &PackerCli, result: &DiscoveryResult) -> RunSummary {
    let mut summary = RunSummary::default();

    for rel in &result.templates {
        let template = root.join(rel);
        let outcome = check_template(packer, &template);
        summary.record(rel.clone(), outcome);
    }

    summary
}

/// Pending -> Passed | Failed, decided by one `init` invocation followed by
/// one `validate` invocation. No retries.
pub fn check_template(packer: &PackerCli, template: &Path) -> CheckOutcome {
    let init = packer.init(template);
    if !init.success {
        return CheckOutcome::Failed {
            stage: Stage::Init,
            detail: init.text,
        };
    }

    let validate = packer.validate(template);
    if validate.success {
        CheckOutcome::Passed
    } else {
        CheckOutcome::Failed {
            stage: Stage::Validate,
            detail: validate.text,
        }
    }
}
