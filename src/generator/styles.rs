//! Stylesheet generation.
//!
//! Each page stylesheet defines exactly the page-specific classes its
//! template binds; shared layout classes live in the global sheet. The
//! selector sets here and the class tokens in `pages`/`components` must
//! stay in lockstep, which the pipeline tests enforce end to end.

use crate::artifact::{Artifact, ArtifactKind};
use crate::generator::framework::FrameworkProfile;
use crate::generator::markup::ArtifactBuilder;
use crate::resolver::{PageId, StyleId};

/// Builds the artifact for one stylesheet id.
#[must_use]
pub fn style_artifact(profile: &FrameworkProfile, style: StyleId) -> Artifact {
    let mut b = ArtifactBuilder::new(profile.style_path(style), ArtifactKind::Stylesheet);
    match style {
        StyleId::Global => global_sheet(&mut b),
        StyleId::Page(page) => page_sheet(&mut b, page),
    }
    b.finish()
}

fn global_sheet(b: &mut ArtifactBuilder) {
    b.line("* {");
    b.line("  box-sizing: border-box;");
    b.line("  margin: 0;");
    b.line("}");
    b.blank();
    b.line("body {");
    b.line("  font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;");
    b.line("  color: #22223b;");
    b.line("  line-height: 1.6;");
    b.line("}");
    b.blank();
    b.line(".navbar {");
    b.line("  display: flex;");
    b.line("  align-items: center;");
    b.line("  justify-content: space-between;");
    b.line("  padding: 1rem 2rem;");
    b.line("  background: #22223b;");
    b.line("}");
    b.blank();
    b.line(".navbar-brand {");
    b.line("  color: #fff;");
    b.line("  font-size: 1.25rem;");
    b.line("  font-weight: 700;");
    b.line("  text-decoration: none;");
    b.line("}");
    b.blank();
    b.line(".navbar-links {");
    b.line("  display: flex;");
    b.line("  gap: 1.25rem;");
    b.line("  list-style: none;");
    b.line("  padding: 0;");
    b.line("}");
    b.blank();
    b.line(".navbar-link {");
    b.line("  color: #c9c9dd;");
    b.line("  text-decoration: none;");
    b.line("}");
    b.blank();
    b.line(".navbar-link:hover {");
    b.line("  color: #fff;");
    b.line("}");
    b.blank();
    b.line(".page {");
    b.line("  max-width: 960px;");
    b.line("  margin: 0 auto;");
    b.line("  padding: 2rem 1rem 4rem;");
    b.line("}");
    b.blank();
    b.line(".page-title {");
    b.line("  font-size: 2rem;");
    b.line("  margin-bottom: 1rem;");
    b.line("}");
    b.blank();
    b.line(".section-title {");
    b.line("  font-size: 1.5rem;");
    b.line("  margin: 2rem 0 1rem;");
    b.line("}");
    b.blank();
    b.line(".service-card {");
    b.line("  padding: 1.25rem;");
    b.line("  border: 1px solid #e0e0ef;");
    b.line("  border-radius: 8px;");
    b.line("  margin-bottom: 1rem;");
    b.line("}");
    b.blank();
    b.line(".service-title {");
    b.line("  font-size: 1.1rem;");
    b.line("  margin-bottom: 0.5rem;");
    b.line("}");
    b.blank();
    b.line(".service-text {");
    b.line("  color: #4a4a68;");
    b.line("}");
    b.blank();
    b.line(".testimonial-list {");
    b.line("  display: grid;");
    b.line("  gap: 1rem;");
    b.line("  margin: 1rem 0;");
    b.line("}");
    b.blank();
    b.line(".testimonial-card {");
    b.line("  padding: 1rem 1.25rem;");
    b.line("  background: #f6f6fb;");
    b.line("  border-radius: 8px;");
    b.line("}");
    b.blank();
    b.line(".testimonial-quote {");
    b.line("  font-style: italic;");
    b.line("}");
    b.blank();
    b.line(".testimonial-author {");
    b.line("  margin-top: 0.5rem;");
    b.line("  font-weight: 600;");
    b.line("}");
    b.blank();
    b.line(".newsletter-box {");
    b.line("  margin: 2rem 0;");
    b.line("  padding: 1.5rem;");
    b.line("  background: #f0f4ff;");
    b.line("  border-radius: 8px;");
    b.line("}");
    b.blank();
    b.line(".newsletter-title {");
    b.line("  margin-bottom: 0.75rem;");
    b.line("}");
    b.blank();
    b.line(".newsletter-input {");
    b.line("  padding: 0.5rem 0.75rem;");
    b.line("  border: 1px solid #c6c6de;");
    b.line("  border-radius: 4px;");
    b.line("  margin-right: 0.5rem;");
    b.line("}");
    b.blank();
    b.line(".newsletter-button {");
    b.line("  padding: 0.5rem 1rem;");
    b.line("  background: #3a5dd9;");
    b.line("  color: #fff;");
    b.line("  border: none;");
    b.line("  border-radius: 4px;");
    b.line("  cursor: pointer;");
    b.line("}");
    b.blank();
    b.line(".footer {");
    b.line("  padding: 2rem;");
    b.line("  background: #22223b;");
    b.line("  text-align: center;");
    b.line("}");
    b.blank();
    b.line(".footer-text {");
    b.line("  color: #c9c9dd;");
    b.line("  font-size: 0.9rem;");
    b.line("}");
}

fn page_sheet(b: &mut ArtifactBuilder, page: PageId) {
    match page {
        PageId::Home => {
            b.line(".hero {");
            b.line("  padding: 4rem 1rem;");
            b.line("  text-align: center;");
            b.line("  background: linear-gradient(160deg, #f0f4ff 0%, #fdfdff 100%);");
            b.line("  border-radius: 12px;");
            b.line("}");
            b.blank();
            b.line(".hero-title {");
            b.line("  font-size: 2.5rem;");
            b.line("  margin-bottom: 0.75rem;");
            b.line("}");
            b.blank();
            b.line(".hero-subtitle {");
            b.line("  font-size: 1.15rem;");
            b.line("  color: #4a4a68;");
            b.line("  margin-bottom: 1.5rem;");
            b.line("}");
            b.blank();
            b.line(".hero-cta {");
            b.line("  display: inline-block;");
            b.line("  padding: 0.75rem 1.75rem;");
            b.line("  background: #3a5dd9;");
            b.line("  color: #fff;");
            b.line("  border-radius: 6px;");
            b.line("  text-decoration: none;");
            b.line("}");
            b.blank();
            b.line(".services-preview {");
            b.line("  margin-top: 2.5rem;");
            b.line("}");
        }
        PageId::About => {
            b.line(".about-section {");
            b.line("  margin-top: 1.5rem;");
            b.line("}");
            b.blank();
            b.line(".about-text {");
            b.line("  max-width: 640px;");
            b.line("  color: #4a4a68;");
            b.line("}");
        }
        PageId::Services => {
            b.line(".service-list {");
            b.line("  display: grid;");
            b.line("  gap: 1rem;");
            b.line("  margin-top: 1.5rem;");
            b.line("}");
        }
        PageId::Contact => {
            b.line(".contact-section {");
            b.line("  display: grid;");
            b.line("  gap: 2rem;");
            b.line("  margin-top: 1.5rem;");
            b.line("}");
            b.blank();
            b.line(".contact-prompt {");
            b.line("  color: #4a4a68;");
            b.line("}");
            b.blank();
            b.line(".contact-details {");
            b.line("  color: #4a4a68;");
            b.line("  font-size: 0.95rem;");
            b.line("}");
            b.blank();
            b.line(".contact-form {");
            b.line("  display: grid;");
            b.line("  gap: 1rem;");
            b.line("  max-width: 480px;");
            b.line("}");
            b.blank();
            b.line(".form-field {");
            b.line("  display: grid;");
            b.line("  gap: 0.25rem;");
            b.line("}");
            b.blank();
            b.line(".form-label {");
            b.line("  font-weight: 600;");
            b.line("}");
            b.blank();
            b.line(".form-input,");
            b.line(".form-textarea {");
            b.line("  padding: 0.5rem 0.75rem;");
            b.line("  border: 1px solid #c6c6de;");
            b.line("  border-radius: 4px;");
            b.line("  font: inherit;");
            b.line("}");
            b.blank();
            b.line(".form-submit {");
            b.line("  padding: 0.6rem 1.5rem;");
            b.line("  background: #3a5dd9;");
            b.line("  color: #fff;");
            b.line("  border: none;");
            b.line("  border-radius: 4px;");
            b.line("  cursor: pointer;");
            b.line("  justify-self: start;");
            b.line("}");
        }
        PageId::Gallery => {
            b.line(".gallery-intro {");
            b.line("  color: #4a4a68;");
            b.line("  margin-bottom: 1.5rem;");
            b.line("}");
            b.blank();
            b.line(".gallery-grid {");
            b.line("  display: grid;");
            b.line("  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));");
            b.line("  gap: 1rem;");
            b.line("}");
            b.blank();
            b.line(".gallery-item {");
            b.line("  background: #f6f6fb;");
            b.line("  border-radius: 8px;");
            b.line("  padding: 1rem;");
            b.line("  min-height: 180px;");
            b.line("  display: flex;");
            b.line("  align-items: flex-end;");
            b.line("}");
            b.blank();
            b.line(".gallery-caption {");
            b.line("  font-size: 0.9rem;");
            b.line("  color: #4a4a68;");
            b.line("}");
        }
        PageId::Menu => {
            b.line(".menu-section {");
            b.line("  margin-top: 1.5rem;");
            b.line("}");
            b.blank();
            b.line(".menu-item {");
            b.line("  padding: 0.75rem 0;");
            b.line("  border-bottom: 1px solid #e0e0ef;");
            b.line("}");
            b.blank();
            b.line(".menu-item-name {");
            b.line("  font-weight: 600;");
            b.line("}");
            b.blank();
            b.line(".menu-item-text {");
            b.line("  color: #4a4a68;");
            b.line("  font-size: 0.95rem;");
            b.line("}");
        }
        PageId::Blog => {
            b.line(".blog-list {");
            b.line("  display: grid;");
            b.line("  gap: 1.25rem;");
            b.line("  margin-top: 1.5rem;");
            b.line("}");
            b.blank();
            b.line(".blog-card {");
            b.line("  padding: 1.25rem;");
            b.line("  border: 1px solid #e0e0ef;");
            b.line("  border-radius: 8px;");
            b.line("}");
            b.blank();
            b.line(".blog-card-title {");
            b.line("  margin-bottom: 0.5rem;");
            b.line("}");
            b.blank();
            b.line(".blog-card-excerpt {");
            b.line("  color: #4a4a68;");
            b.line("}");
        }
        PageId::Team => {
            b.line(".team-grid {");
            b.line("  display: grid;");
            b.line("  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));");
            b.line("  gap: 1rem;");
            b.line("  margin-top: 1.5rem;");
            b.line("}");
            b.blank();
            b.line(".team-member {");
            b.line("  padding: 1rem;");
            b.line("  background: #f6f6fb;");
            b.line("  border-radius: 8px;");
            b.line("  text-align: center;");
            b.line("}");
            b.blank();
            b.line(".team-member-name {");
            b.line("  font-weight: 600;");
            b.line("}");
            b.blank();
            b.line(".team-member-role {");
            b.line("  color: #4a4a68;");
            b.line("  font-size: 0.9rem;");
            b.line("}");
        }
        PageId::Faq => {
            b.line(".faq-list {");
            b.line("  margin-top: 1.5rem;");
            b.line("}");
            b.blank();
            b.line(".faq-item {");
            b.line("  padding: 1rem 0;");
            b.line("  border-bottom: 1px solid #e0e0ef;");
            b.line("}");
            b.blank();
            b.line(".faq-question {");
            b.line("  font-weight: 600;");
            b.line("  margin-bottom: 0.25rem;");
            b.line("}");
            b.blank();
            b.line(".faq-answer {");
            b.line("  color: #4a4a68;");
            b.line("}");
        }
        PageId::Chat => {
            // Chat has no page template; this sheet only ships as the
            // stylesheet half of a synthesized stand-in pair.
            b.line(".chat-placeholder {");
            b.line("  color: #4a4a68;");
            b.line("}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::framework::profile;
    use crate::selection::Framework;

    #[test]
    fn global_sheet_defines_shared_layout_classes() {
        let artifact = style_artifact(profile(Framework::React), StyleId::Global);
        assert_eq!(artifact.path, "src/styles/global.css");
        for class in [".navbar {", ".footer {", ".page {", ".service-card {"] {
            assert!(artifact.content.contains(class), "missing {class}");
        }
    }

    #[test]
    fn page_sheets_define_page_classes() {
        let artifact = style_artifact(profile(Framework::React), StyleId::Page(PageId::Gallery));
        assert_eq!(artifact.path, "src/styles/gallery.css");
        assert!(artifact.content.contains(".gallery-grid {"));
    }

    #[test]
    fn stylesheets_declare_no_references() {
        let artifact = style_artifact(profile(Framework::Vue), StyleId::Page(PageId::Home));
        assert!(artifact.declared_references.is_empty());
    }

    #[test]
    fn braces_balance_in_every_sheet() {
        let p = profile(Framework::Html);
        let mut sheets = vec![style_artifact(p, StyleId::Global)];
        for page in crate::resolver::ALL_PAGES {
            sheets.push(style_artifact(p, StyleId::Page(*page)));
        }
        for sheet in sheets {
            let opens = sheet.content.matches('{').count();
            let closes = sheet.content.matches('}').count();
            assert_eq!(opens, closes, "unbalanced braces in {}", sheet.path);
        }
    }
}
