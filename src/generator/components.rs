//! Component artifact templates.
//!
//! Components exist as standalone artifacts for frameworks with a
//! component model; the plain HTML target inlines their markup into pages
//! instead (see `pages`).

use crate::artifact::{Artifact, ArtifactKind};
use crate::generator::markup::{html_text, ArtifactBuilder};
use crate::generator::GenContext;
use crate::resolver::ComponentId;
use crate::selection::Framework;

/// Builds the artifact for one component, `None` when the target
/// framework inlines components.
#[must_use]
pub fn component_artifact(ctx: &GenContext<'_>, component: ComponentId) -> Option<Artifact> {
    let path = ctx.profile.component_path(component)?;
    let artifact = match ctx.profile.framework {
        Framework::React => react_component(ctx, component, path),
        Framework::Vue => vue_component(ctx, component, path),
        Framework::Html => return None,
    };
    Some(artifact)
}

fn react_component(ctx: &GenContext<'_>, component: ComponentId, path: String) -> Artifact {
    let mut b = ArtifactBuilder::new(path, ArtifactKind::Component);
    b.import_default("React", "react");
    match component {
        ComponentId::Navbar => {
            b.import_named("Link", "react-router-dom");
            b.blank();
            b.line("function Navbar() {");
            b.line("  return (");
            let nav = b.class_attr("className", &["navbar"]);
            b.line(&format!("    <nav {nav}>"));
            let brand = b.class_attr("className", &["navbar-brand"]);
            b.record_nav_link("/");
            b.line(&format!(
                "      <Link {brand} to=\"/\">{}</Link>",
                html_text(ctx.selection.display_name())
            ));
            let links = b.class_attr("className", &["navbar-links"]);
            b.line(&format!("      <ul {links}>"));
            for page in &ctx.manifest.pages {
                let link = b.class_attr("className", &["navbar-link"]);
                b.record_nav_link(page.route_path());
                b.line(&format!(
                    "        <li><Link {link} to=\"{}\">{}</Link></li>",
                    page.route_path(),
                    page.nav_label()
                ));
            }
            b.line("      </ul>");
            b.line("    </nav>");
            b.line("  );");
            b.line("}");
            b.blank();
            b.line("export default Navbar;");
        }
        ComponentId::Footer => {
            b.blank();
            b.line("function Footer() {");
            b.line("  return (");
            let footer = b.class_attr("className", &["footer"]);
            b.line(&format!("    <footer {footer}>"));
            let text = b.class_attr("className", &["footer-text"]);
            b.line(&format!(
                "      <p {text}>© {} {}. All rights reserved.</p>",
                "{new Date().getFullYear()}",
                html_text(ctx.selection.display_name())
            ));
            b.line("    </footer>");
            b.line("  );");
            b.line("}");
            b.blank();
            b.line("export default Footer;");
        }
        ComponentId::ContactForm => {
            b.import_side_effect("../styles/contact.css");
            b.blank();
            b.line("function ContactForm() {");
            b.line("  return (");
            let form = b.class_attr("className", &["contact-form"]);
            b.line(&format!("    <form {form}>"));
            for (id, label, kind) in
                [("name", "Name", "text"), ("email", "Email", "email")]
            {
                let field = b.class_attr("className", &["form-field"]);
                b.line(&format!("      <div {field}>"));
                let lbl = b.class_attr("className", &["form-label"]);
                b.line(&format!("        <label {lbl} htmlFor=\"{id}\">{label}</label>"));
                let input = b.class_attr("className", &["form-input"]);
                b.line(&format!(
                    "        <input {input} id=\"{id}\" name=\"{id}\" type=\"{kind}\" />"
                ));
                b.line("      </div>");
            }
            let field = b.class_attr("className", &["form-field"]);
            b.line(&format!("      <div {field}>"));
            let lbl = b.class_attr("className", &["form-label"]);
            b.line(&format!("        <label {lbl} htmlFor=\"message\">Message</label>"));
            let area = b.class_attr("className", &["form-textarea"]);
            b.line(&format!(
                "        <textarea {area} id=\"message\" name=\"message\" rows=\"5\" />"
            ));
            b.line("      </div>");
            let submit = b.class_attr("className", &["form-submit"]);
            b.line(&format!("      <button {submit} type=\"submit\">Send message</button>"));
            b.line("    </form>");
            b.line("  );");
            b.line("}");
            b.blank();
            b.line("export default ContactForm;");
        }
        ComponentId::GalleryGrid => {
            b.import_side_effect("../styles/gallery.css");
            b.blank();
            b.line("const captions = [");
            for caption in &ctx.content.gallery_captions {
                b.line(&format!("  '{}',", js_escape(caption)));
            }
            b.line("];");
            b.blank();
            b.line("function GalleryGrid() {");
            b.line("  return (");
            let grid = b.class_attr("className", &["gallery-grid"]);
            b.line(&format!("    <div {grid}>"));
            b.line("      {captions.map((caption) => (");
            let item = b.class_attr("className", &["gallery-item"]);
            b.line(&format!("        <figure {item} key={{caption}}>"));
            let cap = b.class_attr("className", &["gallery-caption"]);
            b.line(&format!("          <figcaption {cap}>{{caption}}</figcaption>"));
            b.line("        </figure>");
            b.line("      ))}");
            b.line("    </div>");
            b.line("  );");
            b.line("}");
            b.blank();
            b.line("export default GalleryGrid;");
        }
        ComponentId::TestimonialList => {
            b.blank();
            b.line("const testimonials = [");
            for t in &ctx.content.testimonials {
                b.line(&format!(
                    "  {{ quote: '{}', author: '{}' }},",
                    js_escape(&t.quote),
                    js_escape(&t.author)
                ));
            }
            b.line("];");
            b.blank();
            b.line("function TestimonialList() {");
            b.line("  return (");
            let list = b.class_attr("className", &["testimonial-list"]);
            b.line(&format!("    <section {list}>"));
            b.line("      {testimonials.map((item) => (");
            let card = b.class_attr("className", &["testimonial-card"]);
            b.line(&format!("        <blockquote {card} key={{item.author}}>"));
            let quote = b.class_attr("className", &["testimonial-quote"]);
            b.line(&format!("          <p {quote}>{{item.quote}}</p>"));
            let author = b.class_attr("className", &["testimonial-author"]);
            b.line(&format!("          <footer {author}>{{item.author}}</footer>"));
            b.line("        </blockquote>");
            b.line("      ))}");
            b.line("    </section>");
            b.line("  );");
            b.line("}");
            b.blank();
            b.line("export default TestimonialList;");
        }
        ComponentId::NewsletterSignup => {
            b.blank();
            b.line("function NewsletterSignup() {");
            b.line("  return (");
            let box_ = b.class_attr("className", &["newsletter-box"]);
            b.line(&format!("    <section {box_}>"));
            let title = b.class_attr("className", &["newsletter-title"]);
            b.line(&format!("      <h2 {title}>Stay in the loop</h2>"));
            let input = b.class_attr("className", &["newsletter-input"]);
            b.line(&format!(
                "      <input {input} type=\"email\" placeholder=\"you@example.com\" />"
            ));
            let button = b.class_attr("className", &["newsletter-button"]);
            b.line(&format!("      <button {button} type=\"button\">Subscribe</button>"));
            b.line("    </section>");
            b.line("  );");
            b.line("}");
            b.blank();
            b.line("export default NewsletterSignup;");
        }
    }
    b.finish()
}

fn vue_component(ctx: &GenContext<'_>, component: ComponentId, path: String) -> Artifact {
    let mut b = ArtifactBuilder::new(path, ArtifactKind::Component);
    b.line("<template>");
    match component {
        ComponentId::Navbar => {
            let nav = b.class_attr("class", &["navbar"]);
            b.line(&format!("  <nav {nav}>"));
            let brand = b.class_attr("class", &["navbar-brand"]);
            b.record_nav_link("/");
            b.line(&format!(
                "    <router-link {brand} to=\"/\">{}</router-link>",
                html_text(ctx.selection.display_name())
            ));
            let links = b.class_attr("class", &["navbar-links"]);
            b.line(&format!("    <ul {links}>"));
            for page in &ctx.manifest.pages {
                let link = b.class_attr("class", &["navbar-link"]);
                b.record_nav_link(page.route_path());
                b.line(&format!(
                    "      <li><router-link {link} to=\"{}\">{}</router-link></li>",
                    page.route_path(),
                    page.nav_label()
                ));
            }
            b.line("    </ul>");
            b.line("  </nav>");
        }
        ComponentId::Footer => {
            let footer = b.class_attr("class", &["footer"]);
            b.line(&format!("  <footer {footer}>"));
            let text = b.class_attr("class", &["footer-text"]);
            b.line(&format!(
                "    <p {text}>© {} {{{{ new Date().getFullYear() }}}}. All rights reserved.</p>",
                html_text(ctx.selection.display_name())
            ));
            b.line("  </footer>");
        }
        ComponentId::ContactForm => {
            let form = b.class_attr("class", &["contact-form"]);
            b.line(&format!("  <form {form}>"));
            for (id, label, kind) in
                [("name", "Name", "text"), ("email", "Email", "email")]
            {
                let field = b.class_attr("class", &["form-field"]);
                b.line(&format!("    <div {field}>"));
                let lbl = b.class_attr("class", &["form-label"]);
                b.line(&format!("      <label {lbl} for=\"{id}\">{label}</label>"));
                let input = b.class_attr("class", &["form-input"]);
                b.line(&format!(
                    "      <input {input} id=\"{id}\" name=\"{id}\" type=\"{kind}\">"
                ));
                b.line("    </div>");
            }
            let field = b.class_attr("class", &["form-field"]);
            b.line(&format!("    <div {field}>"));
            let lbl = b.class_attr("class", &["form-label"]);
            b.line(&format!("      <label {lbl} for=\"message\">Message</label>"));
            let area = b.class_attr("class", &["form-textarea"]);
            b.line(&format!(
                "      <textarea {area} id=\"message\" name=\"message\" rows=\"5\"></textarea>"
            ));
            b.line("    </div>");
            let submit = b.class_attr("class", &["form-submit"]);
            b.line(&format!("    <button {submit} type=\"submit\">Send message</button>"));
            b.line("  </form>");
        }
        ComponentId::GalleryGrid => {
            let grid = b.class_attr("class", &["gallery-grid"]);
            b.line(&format!("  <div {grid}>"));
            let item = b.class_attr("class", &["gallery-item"]);
            b.line(&format!(
                "    <figure v-for=\"caption in captions\" :key=\"caption\" {item}>"
            ));
            let cap = b.class_attr("class", &["gallery-caption"]);
            b.line(&format!("      <figcaption {cap}>{{{{ caption }}}}</figcaption>"));
            b.line("    </figure>");
            b.line("  </div>");
        }
        ComponentId::TestimonialList => {
            let list = b.class_attr("class", &["testimonial-list"]);
            b.line(&format!("  <section {list}>"));
            let card = b.class_attr("class", &["testimonial-card"]);
            b.line(&format!(
                "    <blockquote v-for=\"item in testimonials\" :key=\"item.author\" {card}>"
            ));
            let quote = b.class_attr("class", &["testimonial-quote"]);
            b.line(&format!("      <p {quote}>{{{{ item.quote }}}}</p>"));
            let author = b.class_attr("class", &["testimonial-author"]);
            b.line(&format!("      <footer {author}>{{{{ item.author }}}}</footer>"));
            b.line("    </blockquote>");
            b.line("  </section>");
        }
        ComponentId::NewsletterSignup => {
            let box_ = b.class_attr("class", &["newsletter-box"]);
            b.line(&format!("  <section {box_}>"));
            let title = b.class_attr("class", &["newsletter-title"]);
            b.line(&format!("    <h2 {title}>Stay in the loop</h2>"));
            let input = b.class_attr("class", &["newsletter-input"]);
            b.line(&format!(
                "    <input {input} type=\"email\" placeholder=\"you@example.com\">"
            ));
            let button = b.class_attr("class", &["newsletter-button"]);
            b.line(&format!("    <button {button} type=\"button\">Subscribe</button>"));
            b.line("  </section>");
        }
    }
    b.line("</template>");
    b.blank();
    b.line("<script>");
    b.line("export default {");
    b.line(&format!("  name: '{}',", vue_name(component)));
    match component {
        ComponentId::GalleryGrid => {
            b.line("  data() {");
            b.line("    return {");
            b.line("      captions: [");
            for caption in &ctx.content.gallery_captions {
                b.line(&format!("        '{}',", js_escape(caption)));
            }
            b.line("      ],");
            b.line("    };");
            b.line("  },");
        }
        ComponentId::TestimonialList => {
            b.line("  data() {");
            b.line("    return {");
            b.line("      testimonials: [");
            for t in &ctx.content.testimonials {
                b.line(&format!(
                    "        {{ quote: '{}', author: '{}' }},",
                    js_escape(&t.quote),
                    js_escape(&t.author)
                ));
            }
            b.line("      ],");
            b.line("    };");
            b.line("  },");
        }
        _ => {}
    }
    b.line("};");
    b.line("</script>");
    match component {
        ComponentId::ContactForm => {
            b.blank();
            b.style_src("../styles/contact.css");
        }
        ComponentId::GalleryGrid => {
            b.blank();
            b.style_src("../styles/gallery.css");
        }
        _ => {}
    }
    b.finish()
}

/// Vue component registration names; multi-word per Vue style rules.
fn vue_name(component: ComponentId) -> &'static str {
    match component {
        ComponentId::Navbar => "SiteNavbar",
        ComponentId::Footer => "SiteFooter",
        ComponentId::ContactForm => "ContactForm",
        ComponentId::GalleryGrid => "GalleryGrid",
        ComponentId::TestimonialList => "TestimonialList",
        ComponentId::NewsletterSignup => "NewsletterSignup",
    }
}

/// Escapes a string for inclusion in a single-quoted JS literal.
pub(crate) fn js_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_content;
    use crate::artifact::RefKind;
    use crate::generator::framework::profile;
    use crate::generator::test_support::context;
    use crate::selection::Framework;

    #[test]
    fn react_navbar_links_every_manifest_page() {
        let content = builtin_content("restaurant");
        let ctx = context(Framework::React, &["gallery"], &content);
        let navbar = component_artifact(&ctx, ComponentId::Navbar).unwrap();

        let nav_targets: Vec<&str> = navbar
            .declared_references
            .iter()
            .filter(|r| r.kind == RefKind::NavLink)
            .map(|r| r.target.as_str())
            .collect();
        assert!(nav_targets.contains(&"/gallery"));
        assert!(nav_targets.contains(&"/about"));
        assert!(navbar.content.contains("to=\"/gallery\""));
    }

    #[test]
    fn contact_form_pairs_with_contact_stylesheet() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &["contact-form"], &content);
        let form = component_artifact(&ctx, ComponentId::ContactForm).unwrap();
        assert!(form
            .declared_references
            .iter()
            .any(|r| r.kind == RefKind::Import && r.target == "../styles/contact.css"));
    }

    #[test]
    fn vue_components_are_single_file_components() {
        let content = builtin_content("fitness");
        let ctx = context(Framework::Vue, &["gallery"], &content);
        let grid = component_artifact(&ctx, ComponentId::GalleryGrid).unwrap();
        assert!(grid.path.ends_with("GalleryGrid.vue"));
        assert!(grid.content.starts_with("<template>"));
        assert!(grid.content.contains("<script>"));
        assert!(grid.content.contains("<style src=\"../styles/gallery.css\"></style>"));
    }

    #[test]
    fn html_target_has_no_component_artifacts() {
        let content = builtin_content("retail");
        let ctx = context(Framework::Html, &[], &content);
        assert!(component_artifact(&ctx, ComponentId::Navbar).is_none());
    }

    #[test]
    fn js_escape_handles_apostrophes() {
        assert_eq!(js_escape("parents' anniversary"), "parents\\' anniversary");
    }

    #[test]
    fn gallery_grid_embeds_captions_from_content() {
        let content = builtin_content("restaurant");
        let ctx = context(Framework::React, &["gallery"], &content);
        let grid = component_artifact(&ctx, ComponentId::GalleryGrid).unwrap();
        assert!(grid.content.contains("Hand-rolled pasta"));
    }

    #[test]
    fn every_component_has_both_framework_variants() {
        let content = builtin_content("consulting");
        for component in [
            ComponentId::Navbar,
            ComponentId::Footer,
            ComponentId::ContactForm,
            ComponentId::GalleryGrid,
            ComponentId::TestimonialList,
            ComponentId::NewsletterSignup,
        ] {
            for fw in [Framework::React, Framework::Vue] {
                let ctx = context(fw, &["contact-form", "gallery"], &content);
                let artifact = component_artifact(&ctx, component);
                assert!(artifact.is_some(), "{component:?} missing for {fw:?}");
                let p = profile(fw);
                assert!(artifact.unwrap().path.starts_with(p.component_dir));
            }
        }
    }
}
