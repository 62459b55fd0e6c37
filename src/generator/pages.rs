//! Page artifact templates.
//!
//! Every page with a template is dispatched through [`page_artifact`];
//! a cataloged page without one (chat) is left to the repair engine,
//! which synthesizes a stand-in pair when the router references it.

use crate::artifact::{Artifact, ArtifactKind};
use crate::generator::markup::{html_text, ArtifactBuilder};
use crate::generator::GenContext;
use crate::resolver::{ComponentId, PageId};
use crate::selection::Framework;

/// Returns `true` when a full template ships for the page.
#[must_use]
pub fn has_template(page: PageId) -> bool {
    !matches!(page, PageId::Chat)
}

/// Builds the artifact for one page, `None` when no template ships.
#[must_use]
pub fn page_artifact(ctx: &GenContext<'_>, page: PageId) -> Option<Artifact> {
    if !has_template(page) {
        tracing::debug!(page = page.slug(), "no page template; leaving to repair");
        return None;
    }
    let artifact = match ctx.profile.framework {
        Framework::React => react_page(ctx, page),
        Framework::Vue => vue_page(ctx, page),
        Framework::Html => html_page(ctx, page),
    };
    Some(artifact)
}

/// Components a page embeds, in render order. Only components present in
/// the manifest are embedded.
fn embedded_components(ctx: &GenContext<'_>, page: PageId) -> Vec<ComponentId> {
    let candidates: &[ComponentId] = match page {
        PageId::Home => &[ComponentId::TestimonialList, ComponentId::NewsletterSignup],
        PageId::Contact => &[ComponentId::ContactForm],
        PageId::Gallery => &[ComponentId::GalleryGrid],
        _ => &[],
    };
    candidates.iter().copied().filter(|c| ctx.manifest.has_component(*c)).collect()
}

fn react_page(ctx: &GenContext<'_>, page: PageId) -> Artifact {
    let mut b = ArtifactBuilder::new(ctx.profile.page_path(page), ArtifactKind::Page);
    let embedded = embedded_components(ctx, page);

    b.import_default("React", "react");
    if page == PageId::Home && ctx.manifest.has_page(PageId::Contact) {
        b.import_named("Link", "react-router-dom");
    }
    for component in &embedded {
        b.import_default(
            component.component_name(),
            &format!("../components/{}", component.component_name()),
        );
    }
    b.import_side_effect(&format!("../styles/{}.css", page.slug()));
    b.blank();
    b.line(&format!("function {}() {{", page.component_name()));
    b.line("  return (");
    let main = b.class_attr("className", &["page"]);
    b.line(&format!("    <main {main}>"));
    page_body(&mut b, ctx, page, "      ", &embedded);
    b.line("    </main>");
    b.line("  );");
    b.line("}");
    b.blank();
    b.line(&format!("export default {};", page.component_name()));
    b.finish()
}

fn vue_page(ctx: &GenContext<'_>, page: PageId) -> Artifact {
    let mut b = ArtifactBuilder::new(ctx.profile.page_path(page), ArtifactKind::Page);
    let embedded = embedded_components(ctx, page);

    b.line("<template>");
    let main = b.class_attr("class", &["page"]);
    b.line(&format!("  <main {main}>"));
    page_body(&mut b, ctx, page, "    ", &embedded);
    b.line("  </main>");
    b.line("</template>");
    b.blank();
    b.line("<script>");
    for component in &embedded {
        b.import_default(
            component.component_name(),
            &format!("../components/{}.vue", component.component_name()),
        );
    }
    if !embedded.is_empty() {
        b.blank();
    }
    b.line("export default {");
    b.line(&format!("  name: '{}Page',", page.component_name()));
    if !embedded.is_empty() {
        b.line("  components: {");
        for component in &embedded {
            b.line(&format!("    {},", component.component_name()));
        }
        b.line("  },");
    }
    b.line("};");
    b.line("</script>");
    b.blank();
    b.style_src(&format!("../styles/{}.css", page.slug()));
    b.finish()
}

fn html_page(ctx: &GenContext<'_>, page: PageId) -> Artifact {
    let mut b = ArtifactBuilder::new(ctx.profile.page_path(page), ArtifactKind::Page);
    let name = html_text(ctx.selection.display_name());

    b.line("<!DOCTYPE html>");
    b.line("<html lang=\"en\">");
    b.line("  <head>");
    b.line("    <meta charset=\"UTF-8\">");
    b.line("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    b.line(&format!("    <title>{name} | {}</title>", page.nav_label()));
    b.link_stylesheet("css/global.css");
    b.link_stylesheet(&format!("css/{}.css", page.slug()));
    b.line("  </head>");
    b.line("  <body>");
    let nav = b.class_attr("class", &["navbar"]);
    b.line(&format!("    <nav {nav}>"));
    let brand = b.class_attr("class", &["navbar-brand"]);
    b.record_nav_link("index.html");
    b.line(&format!("      <a {brand} href=\"index.html\">{name}</a>"));
    let links = b.class_attr("class", &["navbar-links"]);
    b.line(&format!("      <ul {links}>"));
    for target in &ctx.manifest.pages {
        let link = b.class_attr("class", &["navbar-link"]);
        let href = ctx.profile.page_file_name(*target);
        b.record_nav_link(href.clone());
        b.line(&format!(
            "        <li><a {link} href=\"{href}\">{}</a></li>",
            target.nav_label()
        ));
    }
    b.line("      </ul>");
    b.line("    </nav>");
    let main = b.class_attr("class", &["page"]);
    b.line(&format!("    <main {main}>"));
    page_body(&mut b, ctx, page, "      ", &[]);
    html_inline_components(&mut b, ctx, page);
    b.line("    </main>");
    let footer = b.class_attr("class", &["footer"]);
    b.line(&format!("    <footer {footer}>"));
    let text = b.class_attr("class", &["footer-text"]);
    b.line(&format!("      <p {text}>© {name}. All rights reserved.</p>"));
    b.line("    </footer>");
    b.line("  </body>");
    b.line("</html>");
    b.finish()
}

/// Shared body markup. The class attribute name and component embedding
/// differ per framework; the section structure does not.
fn page_body(
    b: &mut ArtifactBuilder,
    ctx: &GenContext<'_>,
    page: PageId,
    ind: &str,
    embedded: &[ComponentId],
) {
    let attr = ctx.profile.class_attr;
    let content = ctx.content;
    match page {
        PageId::Home => {
            let hero = b.class_attr(attr, &["hero"]);
            b.line(&format!("{ind}<section {hero}>"));
            let title = b.class_attr(attr, &["hero-title"]);
            b.line(&format!("{ind}  <h1 {title}>{}</h1>", html_text(&content.hero.headline)));
            let subtitle = b.class_attr(attr, &["hero-subtitle"]);
            b.line(&format!(
                "{ind}  <p {subtitle}>{}</p>",
                html_text(&content.hero.subheadline)
            ));
            let cta = b.class_attr(attr, &["hero-cta"]);
            let cta_label = html_text(&content.hero.cta_label);
            match ctx.profile.framework {
                Framework::React if ctx.manifest.has_page(PageId::Contact) => {
                    b.record_nav_link("/contact");
                    b.line(&format!("{ind}  <Link {cta} to=\"/contact\">{cta_label}</Link>"));
                }
                Framework::Vue if ctx.manifest.has_page(PageId::Contact) => {
                    b.record_nav_link("/contact");
                    b.line(&format!(
                        "{ind}  <router-link {cta} to=\"/contact\">{cta_label}</router-link>"
                    ));
                }
                Framework::Html if ctx.manifest.has_page(PageId::Contact) => {
                    b.record_nav_link("contact.html");
                    b.line(&format!(
                        "{ind}  <a {cta} href=\"contact.html\">{cta_label}</a>"
                    ));
                }
                _ => {
                    b.line(&format!("{ind}  <a {cta} href=\"#services\">{cta_label}</a>"));
                }
            }
            b.line(&format!("{ind}</section>"));
            let preview = b.class_attr(attr, &["services-preview"]);
            b.line(&format!("{ind}<section id=\"services\" {preview}>"));
            let section_title = b.class_attr(attr, &["section-title"]);
            b.line(&format!("{ind}  <h2 {section_title}>What we offer</h2>"));
            for service in content.services.iter().take(3) {
                service_card(b, attr, &format!("{ind}  "), service);
            }
            b.line(&format!("{ind}</section>"));
            embed(b, ctx, ind, embedded);
        }
        PageId::About => {
            let title = b.class_attr(attr, &["page-title"]);
            b.line(&format!(
                "{ind}<h1 {title}>About {}</h1>",
                html_text(ctx.selection.display_name())
            ));
            let section = b.class_attr(attr, &["about-section"]);
            b.line(&format!("{ind}<section {section}>"));
            let text = b.class_attr(attr, &["about-text"]);
            b.line(&format!("{ind}  <p {text}>{}</p>", html_text(&content.about)));
            b.line(&format!("{ind}</section>"));
        }
        PageId::Services => {
            let title = b.class_attr(attr, &["page-title"]);
            b.line(&format!("{ind}<h1 {title}>Our services</h1>"));
            let list = b.class_attr(attr, &["service-list"]);
            b.line(&format!("{ind}<div {list}>"));
            for service in &content.services {
                service_card(b, attr, &format!("{ind}  "), service);
            }
            b.line(&format!("{ind}</div>"));
        }
        PageId::Contact => {
            let title = b.class_attr(attr, &["page-title"]);
            b.line(&format!("{ind}<h1 {title}>Contact us</h1>"));
            let section = b.class_attr(attr, &["contact-section"]);
            b.line(&format!("{ind}<section {section}>"));
            let prompt = b.class_attr(attr, &["contact-prompt"]);
            b.line(&format!("{ind}  <p {prompt}>{}</p>", html_text(&content.contact_prompt)));
            let details = b.class_attr(attr, &["contact-details"]);
            b.line(&format!("{ind}  <address {details}>"));
            let business = &ctx.selection.business_data;
            if let Some(phone) = &business.phone {
                b.line(&format!("{ind}    <div>Phone: {}</div>", html_text(phone)));
            }
            if let Some(email) = &business.email {
                b.line(&format!("{ind}    <div>Email: {}</div>", html_text(email)));
            }
            if let Some(address) = &business.address {
                b.line(&format!("{ind}    <div>{}</div>", html_text(address)));
            }
            if business.phone.is_none() && business.email.is_none() && business.address.is_none()
            {
                b.line(&format!(
                    "{ind}    <div>{}</div>",
                    html_text(ctx.selection.display_name())
                ));
            }
            b.line(&format!("{ind}  </address>"));
            b.line(&format!("{ind}</section>"));
            embed(b, ctx, ind, embedded);
        }
        PageId::Gallery => {
            let title = b.class_attr(attr, &["page-title"]);
            b.line(&format!("{ind}<h1 {title}>Gallery</h1>"));
            let intro = b.class_attr(attr, &["gallery-intro"]);
            b.line(&format!(
                "{ind}<p {intro}>A look at {} in pictures.</p>",
                html_text(ctx.selection.display_name())
            ));
            embed(b, ctx, ind, embedded);
        }
        PageId::Menu => {
            let title = b.class_attr(attr, &["page-title"]);
            b.line(&format!("{ind}<h1 {title}>Menu</h1>"));
            let section = b.class_attr(attr, &["menu-section"]);
            b.line(&format!("{ind}<section {section}>"));
            for service in &content.services {
                let item = b.class_attr(attr, &["menu-item"]);
                b.line(&format!("{ind}  <div {item}>"));
                let name = b.class_attr(attr, &["menu-item-name"]);
                b.line(&format!("{ind}    <div {name}>{}</div>", html_text(&service.title)));
                let text = b.class_attr(attr, &["menu-item-text"]);
                b.line(&format!(
                    "{ind}    <div {text}>{}</div>",
                    html_text(&service.description)
                ));
                b.line(&format!("{ind}  </div>"));
            }
            b.line(&format!("{ind}</section>"));
        }
        PageId::Blog => {
            let title = b.class_attr(attr, &["page-title"]);
            b.line(&format!("{ind}<h1 {title}>From the blog</h1>"));
            let list = b.class_attr(attr, &["blog-list"]);
            b.line(&format!("{ind}<div {list}>"));
            for (post_title, excerpt) in [
                ("Welcome to our new site", "A fresh home for everything we do."),
                ("Behind the scenes", "How a typical week looks for our team."),
                ("News and updates", "What changed this season and what is next."),
            ] {
                let card = b.class_attr(attr, &["blog-card"]);
                b.line(&format!("{ind}  <article {card}>"));
                let card_title = b.class_attr(attr, &["blog-card-title"]);
                b.line(&format!("{ind}    <h2 {card_title}>{post_title}</h2>"));
                let card_excerpt = b.class_attr(attr, &["blog-card-excerpt"]);
                b.line(&format!("{ind}    <p {card_excerpt}>{excerpt}</p>"));
                b.line(&format!("{ind}  </article>"));
            }
            b.line(&format!("{ind}</div>"));
        }
        PageId::Team => {
            let title = b.class_attr(attr, &["page-title"]);
            b.line(&format!("{ind}<h1 {title}>Meet the team</h1>"));
            let grid = b.class_attr(attr, &["team-grid"]);
            b.line(&format!("{ind}<div {grid}>"));
            for (member, role) in [
                ("Alex Morgan", "Founder"),
                ("Jamie Lee", "Operations"),
                ("Sam Carter", "Customer Success"),
            ] {
                let card = b.class_attr(attr, &["team-member"]);
                b.line(&format!("{ind}  <div {card}>"));
                let member_name = b.class_attr(attr, &["team-member-name"]);
                b.line(&format!("{ind}    <div {member_name}>{member}</div>"));
                let member_role = b.class_attr(attr, &["team-member-role"]);
                b.line(&format!("{ind}    <div {member_role}>{role}</div>"));
                b.line(&format!("{ind}  </div>"));
            }
            b.line(&format!("{ind}</div>"));
        }
        PageId::Faq => {
            let title = b.class_attr(attr, &["page-title"]);
            b.line(&format!("{ind}<h1 {title}>Frequently asked questions</h1>"));
            let list = b.class_attr(attr, &["faq-list"]);
            b.line(&format!("{ind}<div {list}>"));
            let first_service = content
                .services
                .first()
                .map_or_else(|| "A full range of services.".to_string(), |s| s.description.clone());
            for (question, answer) in [
                ("What do you offer?", first_service.as_str()),
                ("Where are you located?", "Right in the center of town; see the contact page."),
                ("How do I get in touch?", "Use the contact form or write to us directly."),
            ] {
                let item = b.class_attr(attr, &["faq-item"]);
                b.line(&format!("{ind}  <div {item}>"));
                let q = b.class_attr(attr, &["faq-question"]);
                b.line(&format!("{ind}    <div {q}>{question}</div>"));
                let a = b.class_attr(attr, &["faq-answer"]);
                b.line(&format!("{ind}    <div {a}>{}</div>", html_text(answer)));
                b.line(&format!("{ind}  </div>"));
            }
            b.line(&format!("{ind}</div>"));
        }
        PageId::Chat => {}
    }
}

fn service_card(
    b: &mut ArtifactBuilder,
    attr: &str,
    card_ind: &str,
    service: &crate::ports::content::ServiceItem,
) {
    let card = b.class_attr(attr, &["service-card"]);
    b.line(&format!("{card_ind}<div {card}>"));
    let title = b.class_attr(attr, &["service-title"]);
    b.line(&format!("{card_ind}  <h3 {title}>{}</h3>", html_text(&service.title)));
    let text = b.class_attr(attr, &["service-text"]);
    b.line(&format!("{card_ind}  <p {text}>{}</p>", html_text(&service.description)));
    b.line(&format!("{card_ind}</div>"));
}

/// Embeds component tags (React/Vue). Html pages inline markup instead.
fn embed(b: &mut ArtifactBuilder, ctx: &GenContext<'_>, ind: &str, embedded: &[ComponentId]) {
    if ctx.profile.framework == Framework::Html {
        return;
    }
    for component in embedded {
        b.line(&format!("{ind}<{} />", component.component_name()));
    }
}

/// Inline equivalents of embedded components for the plain HTML target.
fn html_inline_components(b: &mut ArtifactBuilder, ctx: &GenContext<'_>, page: PageId) {
    let ind = "      ";
    let content = ctx.content;
    match page {
        PageId::Home => {
            if ctx.manifest.has_component(ComponentId::TestimonialList) {
                let list = b.class_attr("class", &["testimonial-list"]);
                b.line(&format!("{ind}<section {list}>"));
                for t in &content.testimonials {
                    let card = b.class_attr("class", &["testimonial-card"]);
                    b.line(&format!("{ind}  <blockquote {card}>"));
                    let quote = b.class_attr("class", &["testimonial-quote"]);
                    b.line(&format!("{ind}    <p {quote}>{}</p>", html_text(&t.quote)));
                    let author = b.class_attr("class", &["testimonial-author"]);
                    b.line(&format!(
                        "{ind}    <footer {author}>{}</footer>",
                        html_text(&t.author)
                    ));
                    b.line(&format!("{ind}  </blockquote>"));
                }
                b.line(&format!("{ind}</section>"));
            }
            if ctx.manifest.has_component(ComponentId::NewsletterSignup) {
                let box_ = b.class_attr("class", &["newsletter-box"]);
                b.line(&format!("{ind}<section {box_}>"));
                let title = b.class_attr("class", &["newsletter-title"]);
                b.line(&format!("{ind}  <h2 {title}>Stay in the loop</h2>"));
                let input = b.class_attr("class", &["newsletter-input"]);
                b.line(&format!(
                    "{ind}  <input {input} type=\"email\" placeholder=\"you@example.com\">"
                ));
                let button = b.class_attr("class", &["newsletter-button"]);
                b.line(&format!("{ind}  <button {button} type=\"button\">Subscribe</button>"));
                b.line(&format!("{ind}</section>"));
            }
        }
        PageId::Contact if ctx.manifest.has_component(ComponentId::ContactForm) => {
            let form = b.class_attr("class", &["contact-form"]);
            b.line(&format!("{ind}<form {form}>"));
            for (id, label, kind) in [("name", "Name", "text"), ("email", "Email", "email")] {
                let field = b.class_attr("class", &["form-field"]);
                b.line(&format!("{ind}  <div {field}>"));
                let lbl = b.class_attr("class", &["form-label"]);
                b.line(&format!("{ind}    <label {lbl} for=\"{id}\">{label}</label>"));
                let input = b.class_attr("class", &["form-input"]);
                b.line(&format!(
                    "{ind}    <input {input} id=\"{id}\" name=\"{id}\" type=\"{kind}\">"
                ));
                b.line(&format!("{ind}  </div>"));
            }
            let field = b.class_attr("class", &["form-field"]);
            b.line(&format!("{ind}  <div {field}>"));
            let lbl = b.class_attr("class", &["form-label"]);
            b.line(&format!("{ind}    <label {lbl} for=\"message\">Message</label>"));
            let area = b.class_attr("class", &["form-textarea"]);
            b.line(&format!(
                "{ind}    <textarea {area} id=\"message\" name=\"message\" rows=\"5\"></textarea>"
            ));
            b.line(&format!("{ind}  </div>"));
            let submit = b.class_attr("class", &["form-submit"]);
            b.line(&format!("{ind}  <button {submit} type=\"submit\">Send message</button>"));
            b.line(&format!("{ind}</form>"));
        }
        PageId::Gallery if ctx.manifest.has_component(ComponentId::GalleryGrid) => {
            let grid = b.class_attr("class", &["gallery-grid"]);
            b.line(&format!("{ind}<div {grid}>"));
            for caption in &content.gallery_captions {
                let item = b.class_attr("class", &["gallery-item"]);
                b.line(&format!("{ind}  <figure {item}>"));
                let cap = b.class_attr("class", &["gallery-caption"]);
                b.line(&format!("{ind}    <figcaption {cap}>{}</figcaption>", html_text(caption)));
                b.line(&format!("{ind}  </figure>"));
            }
            b.line(&format!("{ind}</div>"));
        }
        _ => {}
    }
}
