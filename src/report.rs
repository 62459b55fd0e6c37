//! The generation report: the status object delivered with the artifacts.

use crate::repair::{FixConfidence, FixRecord};
use crate::validate::Defect;

/// Final status of one generation run.
///
/// "Ready to use" is strictly `residual_defects.is_empty()`; a non-empty
/// residual set is always itemized, never collapsed into a generic
/// failure.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Every distinct defect detected across all passes.
    pub defects_found: Vec<Defect>,
    /// Every fix applied across all passes.
    pub fixes_applied: Vec<FixRecord>,
    /// Defects left standing when the loop ended.
    pub residual_defects: Vec<Defect>,
    /// Number of validate passes performed.
    pub iterations: u32,
}

impl GenerationReport {
    /// Returns `true` when the delivered project is structurally sound.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.residual_defects.is_empty()
    }

    /// Fixes that produced synthesized stand-ins rather than fully
    /// generated content. Reported separately so a stand-in is never
    /// mistaken for a complete page.
    #[must_use]
    pub fn stand_ins(&self) -> Vec<&FixRecord> {
        self.fixes_applied
            .iter()
            .filter(|r| r.confidence == FixConfidence::StandIn)
            .collect()
    }
}

/// Formats a report as a human-readable summary.
#[must_use]
pub fn format_report(report: &GenerationReport) -> String {
    let mut lines = Vec::new();
    lines.push("Generation report".to_string());
    lines.push(format!("  defects found: {}", report.defects_found.len()));
    lines.push(format!("  fixes applied: {}", report.fixes_applied.len()));
    lines.push(format!("  iterations:    {}", report.iterations));

    let stand_ins = report.stand_ins();
    if !stand_ins.is_empty() {
        lines.push(String::new());
        lines.push("Synthesized stand-ins (valid but minimal):".to_string());
        for record in stand_ins {
            lines.push(format!("  - {}", record.result_artifacts.join(", ")));
        }
    }

    if !report.residual_defects.is_empty() {
        lines.push(String::new());
        lines.push("Residual defects:".to_string());
        for defect in &report.residual_defects {
            lines.push(format!(
                "  - [{}] {}: {}",
                defect.kind.as_str(),
                defect.artifact,
                defect.detail
            ));
        }
    }

    lines.push(String::new());
    let overall = if report.ready() { "READY" } else { "NOT READY" };
    lines.push(format!("Result: {overall}"));
    lines.join("\n")
}
