//! End-to-end generation pipeline.
//!
//! resolve → fetch content (timeout-guarded, fallback-protected) →
//! generate → (build graph → validate → repair)* until a fixed point or
//! the iteration bound. The caller always receives a report; only a
//! malformed request aborts.

use std::collections::HashSet;
use std::time::Duration;

use crate::adapters::builtin::builtin_content;
use crate::artifact::{Artifact, ArtifactSet};
use crate::error::{ConfigError, ContentError};
use crate::generator::{self, framework, GenContext};
use crate::graph;
use crate::ports::content::{ContentProvider, IndustryContent};
use crate::repair;
use crate::report::GenerationReport;
use crate::resolver;
use crate::selection::FeatureSelection;
use crate::validate::{self, Defect, DefectKind};

/// Upper bound on repair/revalidate passes before the run is declared a
/// hard failure.
pub const MAX_REPAIR_PASSES: u32 = 5;

/// Budget for one content provider call.
pub const CONTENT_TIMEOUT: Duration = Duration::from_secs(10);

/// The pipeline's deliverable: the frozen artifact list in path order,
/// plus the report.
#[derive(Debug)]
pub struct GeneratedProject {
    /// Ordered artifact set, frozen after the repair loop.
    pub artifacts: Vec<Artifact>,
    /// Final status object.
    pub report: GenerationReport,
}

/// Runs the full pipeline for one selection.
///
/// # Errors
///
/// Returns [`ConfigError`] only for a malformed top-level request; every
/// other condition degrades into the report.
pub async fn generate_project(
    selection: &FeatureSelection,
    provider: &dyn ContentProvider,
) -> Result<GeneratedProject, ConfigError> {
    let framework_id = selection.validate()?;
    let profile = framework::profile(framework_id);
    let manifest = resolver::resolve(selection);
    let content = fetch_content(provider, &selection.industry).await;

    let ctx = GenContext { profile, selection, manifest: &manifest, content: &content };
    let mut set = generator::generate(&ctx);
    let report = converge(&mut set, &ctx, MAX_REPAIR_PASSES);

    tracing::info!(
        artifacts = set.len(),
        iterations = report.iterations,
        ready = report.ready(),
        "generation finished"
    );

    Ok(GeneratedProject { artifacts: set.into_ordered_vec(), report })
}

/// Fetches industry content with a timeout, falling back to the builtin
/// tables on error, timeout, or an unusable response. Never fails the
/// run.
pub async fn fetch_content(provider: &dyn ContentProvider, industry: &str) -> IndustryContent {
    match tokio::time::timeout(CONTENT_TIMEOUT, provider.industry_content(industry)).await {
        Ok(Ok(content)) => {
            if content.is_unusable() {
                tracing::warn!(industry, "provider returned unusable content; using fallback");
                builtin_content(industry)
            } else {
                content
            }
        }
        Ok(Err(err)) => {
            let err = ContentError::Provider(err.to_string());
            tracing::warn!(industry, %err, "content provider failed; using fallback");
            builtin_content(industry)
        }
        Err(_) => {
            let err = ContentError::Timeout(CONTENT_TIMEOUT);
            tracing::warn!(industry, %err, "content provider timed out; using fallback");
            builtin_content(industry)
        }
    }
}

/// Runs the repair/revalidate loop to a fixed point, or to `max_passes`.
///
/// Each pass rebuilds the graph, revalidates, and repairs what the static
/// table marks fixable. The loop ends when nothing actionable remains;
/// exceeding the bound appends a `repair-loop-exceeded` defect instead of
/// looping forever.
#[must_use]
pub fn converge(set: &mut ArtifactSet, ctx: &GenContext<'_>, max_passes: u32) -> GenerationReport {
    let mut report = GenerationReport::default();
    let mut seen: HashSet<(DefectKind, String, Option<String>)> = HashSet::new();

    loop {
        report.iterations += 1;
        let reference_graph = graph::build(set);
        let defects = validate::validate(&reference_graph, set, ctx);

        for defect in &defects {
            let key =
                (defect.kind, defect.artifact.clone(), defect.target.clone());
            if seen.insert(key) {
                report.defects_found.push(defect.clone());
            }
        }

        let (actionable, unfixable): (Vec<Defect>, Vec<Defect>) =
            defects.into_iter().partition(|d| d.auto_fixable);

        if actionable.is_empty() {
            report.residual_defects = unfixable;
            return report;
        }

        if report.iterations > max_passes {
            tracing::error!(
                passes = report.iterations,
                bound = max_passes,
                "repair loop exceeded its iteration bound"
            );
            let mut residual = actionable;
            residual.extend(unfixable);
            residual.push(Defect::new(
                DefectKind::RepairLoopExceeded,
                String::new(),
                None,
                format!("repair did not converge within {max_passes} passes"),
            ));
            report.residual_defects = residual;
            return report;
        }

        tracing::debug!(
            pass = report.iterations,
            defects = actionable.len(),
            "applying repair pass"
        );
        let outcome = repair::repair(set, &actionable, ctx);
        let progressed = !outcome.applied.is_empty();
        report.fixes_applied.extend(outcome.applied);

        if !progressed {
            // Every strategy declined; re-running would change nothing.
            let mut residual = outcome.declined;
            residual.extend(unfixable);
            report.residual_defects = residual;
            return report;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::context;
    use crate::selection::Framework;

    #[test]
    fn clean_set_converges_in_one_pass() {
        let content = builtin_content("restaurant");
        let ctx = context(Framework::React, &["contact-form", "gallery"], &content);
        let mut set = generator::generate(&ctx);
        let report = converge(&mut set, &ctx, MAX_REPAIR_PASSES);
        assert!(report.ready());
        assert_eq!(report.iterations, 1);
        assert!(report.fixes_applied.is_empty());
    }

    #[test]
    fn chat_converges_with_one_stub_fix() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &["chat"], &content);
        let mut set = generator::generate(&ctx);
        let report = converge(&mut set, &ctx, MAX_REPAIR_PASSES);
        assert!(report.ready(), "residual: {:?}", report.residual_defects);
        assert!(set.contains("src/pages/Chat.jsx"));

        let stubs: Vec<_> = report
            .fixes_applied
            .iter()
            .filter(|r| r.strategy == "synthesized-stub")
            .collect();
        assert_eq!(stubs.len(), 1);
    }

    #[test]
    fn exceeding_the_bound_is_a_hard_failure() {
        let content = builtin_content("consulting");
        let ctx = context(Framework::React, &["gallery"], &content);
        let mut set = generator::generate(&ctx);

        // Build a two-stage chain: drop the gallery page, its route, and
        // its import, keeping the nav link. Pass 1 re-adds the route,
        // pass 2 must then synthesize the page; a bound of 1 cuts the
        // chain short.
        let pruned: ArtifactSet =
            set.iter().filter(|a| a.path != "src/pages/Gallery.jsx").cloned().collect();
        set = pruned;
        let router = set.get_mut("src/App.jsx").unwrap();
        router.content = router
            .content
            .replace("import Gallery from './pages/Gallery';\n", "")
            .replace("        <Route path=\"/gallery\" element={<Gallery />} />\n", "");
        router
            .declared_references
            .retain(|r| r.target != "./pages/Gallery" && r.target != "/gallery");

        let report = converge(&mut set, &ctx, 1);
        assert!(!report.ready());
        assert!(report
            .residual_defects
            .iter()
            .any(|d| d.kind == DefectKind::RepairLoopExceeded));
    }

    #[test]
    fn the_same_chain_converges_under_the_default_bound() {
        let content = builtin_content("consulting");
        let ctx = context(Framework::React, &["gallery"], &content);
        let mut set = generator::generate(&ctx);
        let pruned: ArtifactSet =
            set.iter().filter(|a| a.path != "src/pages/Gallery.jsx").cloned().collect();
        set = pruned;
        let router = set.get_mut("src/App.jsx").unwrap();
        router.content = router
            .content
            .replace("import Gallery from './pages/Gallery';\n", "")
            .replace("        <Route path=\"/gallery\" element={<Gallery />} />\n", "");
        router
            .declared_references
            .retain(|r| r.target != "./pages/Gallery" && r.target != "/gallery");

        let report = converge(&mut set, &ctx, MAX_REPAIR_PASSES);
        assert!(report.ready(), "residual: {:?}", report.residual_defects);
        assert!(set.contains("src/pages/Gallery.jsx"));
        assert!(report.iterations <= MAX_REPAIR_PASSES);
    }
}
