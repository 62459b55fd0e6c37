//! `sitewright generate` command.

use std::path::Path;

use crate::pipeline;
use crate::ports::content::ContentProvider;
use crate::report;
use crate::selection::FeatureSelection;

/// Execute the `generate` command: run the pipeline and write the frozen
/// artifact set under the output directory.
///
/// # Errors
///
/// Returns an error string when the selection cannot be read or parsed,
/// when output files cannot be written, or when the generated project has
/// residual defects (the report is printed either way).
pub fn run(
    provider: &dyn ContentProvider,
    selection_path: &Path,
    out: Option<&Path>,
) -> Result<(), String> {
    let json = std::fs::read_to_string(selection_path)
        .map_err(|e| format!("failed to read selection {}: {e}", selection_path.display()))?;
    let selection = FeatureSelection::from_json(&json)
        .map_err(|e| format!("invalid selection: {e}"))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;
    let project = runtime
        .block_on(pipeline::generate_project(&selection, provider))
        .map_err(|e| format!("generation aborted: {e}"))?;

    let default_out = selection.slug();
    let out_dir = out.unwrap_or_else(|| Path::new(&default_out));
    for artifact in &project.artifacts {
        let path = out_dir.join(&artifact.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
        }
        std::fs::write(&path, &artifact.content)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    }

    println!("{}", report::format_report(&project.report));
    println!();
    println!("Wrote {} files to {}", project.artifacts.len(), out_dir.display());

    if project.report.ready() {
        Ok(())
    } else {
        Err("generated project has residual defects; see the report above".to_string())
    }
}
