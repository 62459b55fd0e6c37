//! `sitewright features` command.

use crate::resolver;

/// Execute the `features` command: list the selectable feature catalog.
///
/// # Errors
///
/// Never fails; the signature matches the other command handlers.
pub fn run() -> Result<(), String> {
    println!("Available features:");
    for feature in resolver::FEATURE_CATALOG {
        println!("  {:<16} {}", feature.id, feature.label);
    }
    println!();
    let core: Vec<&str> = resolver::CORE_PAGES.iter().map(|p| p.slug()).collect();
    println!("Core pages (always generated): {}", core.join(", "));
    Ok(())
}
