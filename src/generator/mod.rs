//! Artifact generation: manifest + content → artifact set.
//!
//! Independent artifacts are built concurrently; the merged set is
//! deterministic because every template is a pure function of the context
//! and the final ordering is by path.

pub mod components;
pub mod config;
pub mod framework;
pub mod markup;
pub mod pages;
pub mod styles;

use rayon::prelude::*;

use crate::artifact::{Artifact, ArtifactSet};
use crate::generator::framework::FrameworkProfile;
use crate::ports::content::IndustryContent;
use crate::resolver::{Manifest, StyleId};
use crate::selection::FeatureSelection;

/// Everything generation needs, passed by reference into every template.
#[derive(Debug, Clone, Copy)]
pub struct GenContext<'a> {
    /// Target framework facts.
    pub profile: &'static FrameworkProfile,
    /// The validated selection.
    pub selection: &'a FeatureSelection,
    /// The resolved manifest.
    pub manifest: &'a Manifest,
    /// Industry copy (already fallback-protected by the pipeline).
    pub content: &'a IndustryContent,
}

/// Generates the full artifact set for a manifest.
///
/// Pages, components, and stylesheets are independent of one another and
/// are built in parallel; config artifacts are few and built serially.
/// Stylesheets are only generated for pages whose template ships; a
/// stand-in pair for the rest is the repair engine's job.
#[must_use]
pub fn generate(ctx: &GenContext<'_>) -> ArtifactSet {
    let page_artifacts: Vec<Artifact> = ctx
        .manifest
        .pages
        .par_iter()
        .filter_map(|page| pages::page_artifact(ctx, *page))
        .collect();

    let component_artifacts: Vec<Artifact> = ctx
        .manifest
        .components
        .par_iter()
        .filter_map(|component| components::component_artifact(ctx, *component))
        .collect();

    let style_artifacts: Vec<Artifact> = ctx
        .manifest
        .styles
        .par_iter()
        .filter(|style| match style {
            StyleId::Global => true,
            StyleId::Page(page) => pages::has_template(*page),
        })
        .map(|style| styles::style_artifact(ctx.profile, *style))
        .collect();

    let mut all = config::artifacts(ctx);
    all.extend(page_artifacts);
    all.extend(component_artifacts);
    all.extend(style_artifacts);

    tracing::debug!(artifacts = all.len(), "generated artifact set");
    all.into_iter().collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::GenContext;
    use crate::generator::framework::profile;
    use crate::ports::content::IndustryContent;
    use crate::resolver;
    use crate::selection::{BusinessData, FeatureSelection, Framework};

    /// Builds a leaked, test-only generation context.
    pub(crate) fn context<'a>(
        framework: Framework,
        features: &[&str],
        content: &'a IndustryContent,
    ) -> GenContext<'a> {
        let selection = Box::leak(Box::new(FeatureSelection {
            project_name: "Test Site".to_string(),
            business_name: String::new(),
            framework: framework.id().to_string(),
            industry: content.industry.clone(),
            selected_features: features.iter().map(ToString::to_string).collect(),
            business_data: BusinessData::default(),
        }));
        let manifest = Box::leak(Box::new(resolver::resolve(selection)));
        GenContext { profile: profile(framework), selection, manifest, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_content;
    use crate::generator::test_support::context;
    use crate::selection::Framework;

    #[test]
    fn generates_unique_paths() {
        let content = builtin_content("restaurant");
        let ctx = context(Framework::React, &["contact-form", "gallery"], &content);
        let set = generate(&ctx);
        assert_eq!(set.len(), set.sorted_paths().len());
        assert!(set.contains("package.json"));
        assert!(set.contains("src/pages/Gallery.jsx"));
        assert!(set.contains("src/styles/gallery.css"));
    }

    #[test]
    fn generation_is_deterministic() {
        let content = builtin_content("restaurant");
        let ctx = context(Framework::React, &["gallery", "testimonials"], &content);
        let first = generate(&ctx).into_ordered_vec();
        let second = generate(&ctx).into_ordered_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn chat_page_and_sheet_are_left_ungenerated() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &["chat"], &content);
        let set = generate(&ctx);
        assert!(!set.contains("src/pages/Chat.jsx"));
        assert!(!set.contains("src/styles/chat.css"));
        // The router still references chat; the repair engine owns the rest.
        assert!(set.contains("src/App.jsx"));
    }

    #[test]
    fn html_target_generates_root_level_pages() {
        let content = builtin_content("fitness");
        let ctx = context(Framework::Html, &["gallery"], &content);
        let set = generate(&ctx);
        assert!(set.contains("index.html"));
        assert!(set.contains("gallery.html"));
        assert!(set.contains("css/global.css"));
        assert!(!set.contains("src/App.jsx"));
    }
}
