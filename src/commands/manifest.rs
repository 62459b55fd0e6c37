//! `sitewright manifest` command.

use std::path::Path;

use crate::resolver;
use crate::selection::FeatureSelection;

/// Execute the `manifest` command: resolve and print the file manifest
/// for a selection without generating anything.
///
/// # Errors
///
/// Returns an error string when the selection cannot be read, parsed, or
/// validated.
pub fn run(selection_path: &Path) -> Result<(), String> {
    let json = std::fs::read_to_string(selection_path)
        .map_err(|e| format!("failed to read selection {}: {e}", selection_path.display()))?;
    let selection = FeatureSelection::from_json(&json)
        .map_err(|e| format!("invalid selection: {e}"))?;
    let framework = selection.validate().map_err(|e| format!("invalid selection: {e}"))?;

    let manifest = resolver::resolve(&selection);

    println!("Manifest for {} ({})", selection.display_name(), framework.id());
    println!();
    println!("Pages:");
    for page in &manifest.pages {
        println!("  - {}", page.slug());
    }
    println!("Components:");
    for component in &manifest.components {
        println!("  - {}", component.slug());
    }
    println!("Styles:");
    for style in &manifest.styles {
        println!("  - {}", style.slug());
    }
    Ok(())
}
