//! Deterministic repair strategies, one per defect kind.
//!
//! Repair mutates the artifact set in place and reports every change as a
//! [`FixRecord`]. Strategies are idempotent: a fix that is already in
//! place produces no new record. A defect whose strategy cannot apply is
//! returned as declined, never dropped. Fixes are applied grouped by
//! target artifact path, so no two fixes race on the same file.

use std::collections::BTreeMap;

use crate::artifact::{Artifact, ArtifactKind, ArtifactSet, DeclaredReference, RefKind};
use crate::generator::framework::FrameworkProfile;
use crate::generator::markup::ArtifactBuilder;
use crate::generator::{pages, styles, GenContext};
use crate::graph;
use crate::resolver::{self, ComponentId, PageId, StyleId};
use crate::selection::Framework;
use crate::validate::{Defect, DefectKind, MismatchSide, SyntaxIssue};

/// How complete the repaired result is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixConfidence {
    /// The fix produced fully generated content (a rich template existed).
    Full,
    /// The fix produced a minimal, structurally valid stand-in.
    StandIn,
}

/// One applied fix.
#[derive(Debug, Clone)]
pub struct FixRecord {
    /// The defect this fix addressed.
    pub defect: Defect,
    /// Stable strategy name.
    pub strategy: &'static str,
    /// Paths of artifacts created or modified by this fix.
    pub result_artifacts: Vec<String>,
    /// Whether the result is fully generated or a stand-in.
    pub confidence: FixConfidence,
}

/// Result of one repair pass.
#[derive(Debug, Default)]
pub struct RepairOutcome {
    /// Fixes applied this pass.
    pub applied: Vec<FixRecord>,
    /// Defects whose strategy could not apply; surfaced, never dropped.
    pub declined: Vec<Defect>,
}

/// Applies one repair pass over the given defects.
#[must_use]
pub fn repair(set: &mut ArtifactSet, defects: &[Defect], ctx: &GenContext<'_>) -> RepairOutcome {
    let mut outcome = RepairOutcome::default();

    // Group per artifact path so writes to one file are serialized even
    // though the groups themselves are independent.
    let mut by_artifact: BTreeMap<&str, Vec<&Defect>> = BTreeMap::new();
    for defect in defects {
        by_artifact.entry(defect.artifact.as_str()).or_default().push(defect);
    }

    for group in by_artifact.values() {
        for defect in group {
            match apply(set, defect, ctx) {
                Application::Fixed(record) => outcome.applied.push(record),
                Application::AlreadyFixed => {}
                Application::Declined => {
                    tracing::warn!(
                        kind = defect.kind.as_str(),
                        artifact = %defect.artifact,
                        "no applicable repair strategy"
                    );
                    outcome.declined.push((*defect).clone());
                }
            }
        }
    }

    outcome
}

enum Application {
    Fixed(FixRecord),
    AlreadyFixed,
    Declined,
}

fn apply(set: &mut ArtifactSet, defect: &Defect, ctx: &GenContext<'_>) -> Application {
    match defect.kind {
        DefectKind::DanglingImport => synthesize_missing_target(set, defect, ctx),
        DefectKind::OrphanClass => append_selector_stub(set, defect),
        DefectKind::MissingDependency => pin_default_version(set, defect, ctx),
        DefectKind::MalformedSyntax(issue) => normalize_syntax(set, defect, issue),
        DefectKind::RouteNavMismatch(side) => sync_route_nav(set, defect, ctx, side),
        DefectKind::RepairLoopExceeded => Application::Declined,
    }
}

// --- dangling-import -----------------------------------------------------

fn synthesize_missing_target(
    set: &mut ArtifactSet,
    defect: &Defect,
    ctx: &GenContext<'_>,
) -> Application {
    let Some(target) = defect.target.as_deref() else {
        return Application::Declined;
    };
    if set.contains(target) {
        return Application::AlreadyFixed;
    }

    let Some((created, confidence)) = synthesize_at(set, ctx, target) else {
        return Application::Declined;
    };
    Application::Fixed(FixRecord {
        defect: defect.clone(),
        strategy: "synthesized-stub",
        result_artifacts: created,
        confidence,
    })
}

/// Synthesizes a structurally valid artifact at the exact expected path.
/// A synthesized page brings its paired stylesheet along; a rich template
/// is used when one exists for the inferred page or component.
fn synthesize_at(
    set: &mut ArtifactSet,
    ctx: &GenContext<'_>,
    path: &str,
) -> Option<(Vec<String>, FixConfidence)> {
    let profile = ctx.profile;

    if path.ends_with(".css") {
        let artifact = stylesheet_for_path(profile, path);
        let confidence = confidence_of_style(profile, path);
        set.insert(artifact).ok()?;
        return Some((vec![path.to_string()], confidence));
    }

    if is_page_path(profile, path) {
        return synthesize_page_pair(set, ctx, path);
    }

    if is_component_path(profile, path) {
        let stem = file_stem(path);
        let known = component_by_name(stem);
        let artifact = match known {
            Some(component) => {
                crate::generator::components::component_artifact(ctx, component)?
            }
            None => stub_component(profile, path),
        };
        let confidence =
            if known.is_some() { FixConfidence::Full } else { FixConfidence::StandIn };
        set.insert(artifact).ok()?;
        return Some((vec![path.to_string()], confidence));
    }

    if path == profile.dependency_manifest_path() {
        let artifact = crate::generator::config::package_manifest(ctx);
        set.insert(artifact).ok()?;
        return Some((vec![path.to_string()], FixConfidence::Full));
    }

    // Unrecognized shape: a minimal valid placeholder by extension.
    let artifact = generic_stub(path);
    set.insert(artifact).ok()?;
    Some((vec![path.to_string()], FixConfidence::StandIn))
}

fn synthesize_page_pair(
    set: &mut ArtifactSet,
    ctx: &GenContext<'_>,
    path: &str,
) -> Option<(Vec<String>, FixConfidence)> {
    let profile = ctx.profile;
    let slug = file_stem(path).to_lowercase();
    let slug = if slug == "index" { "home".to_string() } else { slug };
    let page = PageId::from_slug(&slug);

    let (page_artifact, confidence) = match page {
        Some(page) if pages::has_template(page) => {
            (pages::page_artifact(ctx, page)?, FixConfidence::Full)
        }
        _ => (stub_page(ctx, path, &slug), FixConfidence::StandIn),
    };

    let mut created = vec![page_artifact.path.clone()];
    set.insert(page_artifact).ok()?;

    let style_path = match page {
        Some(page) => profile.style_path(StyleId::Page(page)),
        None => format!("{}/{slug}.css", profile.style_dir),
    };
    if !set.contains(&style_path) {
        let sheet = match page {
            Some(page) => styles::style_artifact(profile, StyleId::Page(page)),
            None => stub_stylesheet(&style_path, &slug),
        };
        set.insert(sheet).ok()?;
        created.push(style_path);
    }

    Some((created, confidence))
}

/// Minimal valid page stand-in: heading plus the paired stylesheet link,
/// using only classes the global sheet defines.
fn stub_page(ctx: &GenContext<'_>, path: &str, slug: &str) -> Artifact {
    let profile = ctx.profile;
    let title = title_case(slug);
    let mut b = ArtifactBuilder::new(path, ArtifactKind::Page);
    match profile.framework {
        Framework::React => {
            b.import_default("React", "react");
            b.import_side_effect(&format!("../styles/{slug}.css"));
            b.blank();
            b.line(&format!("function {title}() {{"));
            b.line("  return (");
            let main = b.class_attr("className", &["page"]);
            b.line(&format!("    <main {main}>"));
            let heading = b.class_attr("className", &["page-title"]);
            b.line(&format!("      <h1 {heading}>{title}</h1>"));
            b.line("    </main>");
            b.line("  );");
            b.line("}");
            b.blank();
            b.line(&format!("export default {title};"));
        }
        Framework::Vue => {
            b.line("<template>");
            let main = b.class_attr("class", &["page"]);
            b.line(&format!("  <main {main}>"));
            let heading = b.class_attr("class", &["page-title"]);
            b.line(&format!("    <h1 {heading}>{title}</h1>"));
            b.line("  </main>");
            b.line("</template>");
            b.blank();
            b.line("<script>");
            b.line("export default {");
            b.line(&format!("  name: '{title}Page',"));
            b.line("};");
            b.line("</script>");
            b.blank();
            b.style_src(&format!("../styles/{slug}.css"));
        }
        Framework::Html => {
            b.line("<!DOCTYPE html>");
            b.line("<html lang=\"en\">");
            b.line("  <head>");
            b.line("    <meta charset=\"UTF-8\">");
            b.line(&format!("    <title>{title}</title>"));
            b.link_stylesheet("css/global.css");
            b.link_stylesheet(&format!("css/{slug}.css"));
            b.line("  </head>");
            b.line("  <body>");
            let main = b.class_attr("class", &["page"]);
            b.line(&format!("    <main {main}>"));
            let heading = b.class_attr("class", &["page-title"]);
            b.line(&format!("      <h1 {heading}>{title}</h1>"));
            b.record_nav_link("index.html");
            let link = b.class_attr("class", &["navbar-link"]);
            b.line(&format!("      <a {link} href=\"index.html\">Back to home</a>"));
            b.line("    </main>");
            b.line("  </body>");
            b.line("</html>");
        }
    }
    b.finish()
}

fn stub_component(profile: &FrameworkProfile, path: &str) -> Artifact {
    let name = file_stem(path).to_string();
    let mut b = ArtifactBuilder::new(path, ArtifactKind::Component);
    match profile.framework {
        Framework::Vue => {
            b.line("<template>");
            b.line("  <div />");
            b.line("</template>");
            b.blank();
            b.line("<script>");
            b.line("export default {");
            b.line(&format!("  name: '{name}',"));
            b.line("};");
            b.line("</script>");
        }
        _ => {
            b.import_default("React", "react");
            b.blank();
            b.line(&format!("function {name}() {{"));
            b.line("  return null;");
            b.line("}");
            b.blank();
            b.line(&format!("export default {name};"));
        }
    }
    b.finish()
}

fn stub_stylesheet(path: &str, slug: &str) -> Artifact {
    Artifact {
        path: path.to_string(),
        kind: ArtifactKind::Stylesheet,
        content: format!("/* {slug} styles */\n"),
        declared_references: Vec::new(),
    }
}

fn stylesheet_for_path(profile: &FrameworkProfile, path: &str) -> Artifact {
    let slug = file_stem(path).to_lowercase();
    if slug == "global" {
        return styles::style_artifact(profile, StyleId::Global);
    }
    match PageId::from_slug(&slug) {
        Some(page) if path == profile.style_path(StyleId::Page(page)) => {
            styles::style_artifact(profile, StyleId::Page(page))
        }
        _ => stub_stylesheet(path, &slug),
    }
}

fn confidence_of_style(profile: &FrameworkProfile, path: &str) -> FixConfidence {
    let slug = file_stem(path).to_lowercase();
    let rich = slug == "global"
        || PageId::from_slug(&slug)
            .is_some_and(|page| path == profile.style_path(StyleId::Page(page)));
    if rich {
        FixConfidence::Full
    } else {
        FixConfidence::StandIn
    }
}

fn generic_stub(path: &str) -> Artifact {
    let content = match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js" | "jsx") => "export default {};\n".to_string(),
        Some("json") => "{}\n".to_string(),
        Some("html") => "<!DOCTYPE html>\n<html lang=\"en\"></html>\n".to_string(),
        _ => String::new(),
    };
    Artifact {
        path: path.to_string(),
        kind: ArtifactKind::Asset,
        content,
        declared_references: Vec::new(),
    }
}

// --- orphan-class --------------------------------------------------------

fn append_selector_stub(set: &mut ArtifactSet, defect: &Defect) -> Application {
    let Some(class) = defect.target.as_deref() else {
        return Application::Declined;
    };
    let Some(artifact) = set.get(&defect.artifact) else {
        return Application::Declined;
    };
    let Some(sheet_path) = graph::paired_stylesheets(set, artifact).into_iter().next() else {
        return Application::Declined;
    };

    let rule = format!(".{class} {{\n}}\n");
    let sheet = set.get_mut(&sheet_path).expect("paired stylesheet exists");
    if graph::class_selectors(&sheet.content).contains(class) {
        return Application::AlreadyFixed;
    }
    if !sheet.content.ends_with('\n') {
        sheet.content.push('\n');
    }
    sheet.content.push('\n');
    sheet.content.push_str(&rule);

    Application::Fixed(FixRecord {
        defect: defect.clone(),
        strategy: "append-selector-stub",
        result_artifacts: vec![sheet_path],
        confidence: FixConfidence::StandIn,
    })
}

// --- missing-dependency --------------------------------------------------

fn pin_default_version(
    set: &mut ArtifactSet,
    defect: &Defect,
    ctx: &GenContext<'_>,
) -> Application {
    let Some(name) = defect.target.as_deref() else {
        return Application::Declined;
    };
    let Some(version) = default_version_for(ctx, name) else {
        return Application::Declined;
    };
    let Some(manifest) = set.get_mut(&defect.artifact) else {
        return Application::Declined;
    };
    let Ok(mut parsed) = serde_json::from_str::<serde_json::Value>(&manifest.content) else {
        return Application::Declined;
    };
    let Some(root) = parsed.as_object_mut() else {
        return Application::Declined;
    };

    let deps = root
        .entry("dependencies")
        .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
    let Some(deps) = deps.as_object_mut() else {
        return Application::Declined;
    };
    if deps.contains_key(name) {
        return Application::AlreadyFixed;
    }
    deps.insert(name.to_string(), serde_json::Value::String(version.to_string()));

    let mut content = serde_json::to_string_pretty(&parsed).expect("manifest serializes");
    content.push('\n');
    manifest.content = content;

    Application::Fixed(FixRecord {
        defect: defect.clone(),
        strategy: "pin-default-version",
        result_artifacts: vec![defect.artifact.clone()],
        confidence: FixConfidence::Full,
    })
}

/// Pinned default version for a package, from the framework profile and
/// the feature catalog tables.
fn default_version_for(ctx: &GenContext<'_>, name: &str) -> Option<&'static str> {
    let profile = ctx.profile;
    profile
        .core_dependencies
        .iter()
        .chain(profile.dev_dependencies)
        .chain(resolver::FEATURE_CATALOG.iter().flat_map(|f| f.dependencies))
        .find(|dep| dep.name == name)
        .map(|dep| dep.version)
}

// --- malformed-syntax ----------------------------------------------------

fn normalize_syntax(set: &mut ArtifactSet, defect: &Defect, issue: SyntaxIssue) -> Application {
    let Some(artifact) = set.get_mut(&defect.artifact) else {
        return Application::Declined;
    };
    match issue {
        SyntaxIssue::UnbalancedBraces => {
            let opens = artifact.content.matches('{').count();
            let closes = artifact.content.matches('}').count();
            if opens == closes {
                return Application::AlreadyFixed;
            }
            if closes > opens {
                // Removing text is not a transform we can do blindly.
                return Application::Declined;
            }
            if !artifact.content.ends_with('\n') {
                artifact.content.push('\n');
            }
            for _ in 0..(opens - closes) {
                artifact.content.push_str("}\n");
            }
        }
        SyntaxIssue::UnquotedAttr => {
            let quoted = quote_unquoted_attrs(&artifact.content);
            if quoted == artifact.content {
                return Application::AlreadyFixed;
            }
            artifact.content = quoted;
        }
        SyntaxIssue::InvalidJson => return Application::Declined,
    }

    Application::Fixed(FixRecord {
        defect: defect.clone(),
        strategy: "normalize-syntax",
        result_artifacts: vec![defect.artifact.clone()],
        confidence: FixConfidence::Full,
    })
}

/// Quotes every unquoted attribute value inside tags.
fn quote_unquoted_attrs(markup: &str) -> String {
    let chars: Vec<char> = markup.chars().collect();
    let mut out = String::with_capacity(markup.len() + 8);
    let mut in_tag = false;
    let mut quote: Option<char> = None;
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
                out.push(ch);
            }
            None => match ch {
                '<' => {
                    in_tag = true;
                    out.push('<');
                }
                '>' => {
                    in_tag = false;
                    out.push('>');
                }
                '"' | '\'' if in_tag => {
                    quote = Some(ch);
                    out.push(ch);
                }
                '=' if in_tag
                    && chars.get(i + 1).is_some_and(char::is_ascii_alphanumeric) =>
                {
                    out.push('=');
                    out.push('"');
                    i += 1;
                    while i < chars.len()
                        && (chars[i].is_ascii_alphanumeric()
                            || chars[i] == '-'
                            || chars[i] == '.')
                    {
                        out.push(chars[i]);
                        i += 1;
                    }
                    out.push('"');
                    continue;
                }
                other => out.push(other),
            },
        }
        i += 1;
    }
    out
}

// --- route-nav-mismatch --------------------------------------------------

fn sync_route_nav(
    set: &mut ArtifactSet,
    defect: &Defect,
    ctx: &GenContext<'_>,
    side: MismatchSide,
) -> Application {
    let Some(target) = defect.target.as_deref() else {
        return Application::Declined;
    };
    match side {
        MismatchSide::MissingNav => add_nav_entry(set, defect, ctx, target),
        MismatchSide::MissingRoute => add_route_entry(set, defect, ctx, target),
        MismatchSide::MissingPage => {
            let path = if target.starts_with('/') {
                let slug = target.trim_start_matches('/');
                let slug = if slug.is_empty() { "home" } else { slug };
                match PageId::from_slug(slug) {
                    Some(page) => ctx.profile.page_path(page),
                    None => page_path_for_slug(ctx.profile, slug),
                }
            } else {
                target.to_string()
            };
            if set.contains(&path) {
                return Application::AlreadyFixed;
            }
            match synthesize_page_pair(set, ctx, &path) {
                Some((created, confidence)) => Application::Fixed(FixRecord {
                    defect: defect.clone(),
                    strategy: "synthesized-stub",
                    result_artifacts: created,
                    confidence,
                }),
                None => Application::Declined,
            }
        }
    }
}

fn add_nav_entry(
    set: &mut ArtifactSet,
    defect: &Defect,
    ctx: &GenContext<'_>,
    target: &str,
) -> Application {
    let label = route_label(target);
    match ctx.profile.framework {
        Framework::React => {
            let Some(navbar) = set.get_mut(&defect.artifact) else {
                return Application::Declined;
            };
            if has_nav_ref(navbar, target) {
                return Application::AlreadyFixed;
            }
            let entry = format!(
                "        <li><Link className=\"navbar-link\" to=\"{target}\">{label}</Link></li>"
            );
            let Some(content) = insert_line_before(&navbar.content, "</ul>", &entry) else {
                return Application::Declined;
            };
            navbar.content = content;
            record_nav(navbar, target);
            fixed_nav(defect, vec![navbar.path.clone()])
        }
        Framework::Vue => {
            let Some(navbar) = set.get_mut(&defect.artifact) else {
                return Application::Declined;
            };
            if has_nav_ref(navbar, target) {
                return Application::AlreadyFixed;
            }
            let entry = format!(
                "      <li><router-link class=\"navbar-link\" to=\"{target}\">{label}</router-link></li>"
            );
            let Some(content) = insert_line_before(&navbar.content, "</ul>", &entry) else {
                return Application::Declined;
            };
            navbar.content = content;
            record_nav(navbar, target);
            fixed_nav(defect, vec![navbar.path.clone()])
        }
        Framework::Html => {
            // The nav is duplicated on every page; add the entry to each.
            let label = file_label(target);
            let entry = format!(
                "        <li><a class=\"navbar-link\" href=\"{target}\">{label}</a></li>"
            );
            let page_paths: Vec<String> = set
                .iter()
                .filter(|a| a.kind == ArtifactKind::Page && a.path != target)
                .map(|a| a.path.clone())
                .collect();
            let mut edited = Vec::new();
            for path in page_paths {
                let Some(page) = set.get_mut(&path) else { continue };
                if has_nav_ref(page, target) {
                    continue;
                }
                if let Some(content) = insert_line_before(&page.content, "</ul>", &entry) {
                    page.content = content;
                    record_nav(page, target);
                    edited.push(path);
                }
            }
            if edited.is_empty() {
                return Application::AlreadyFixed;
            }
            fixed_nav(defect, edited)
        }
    }
}

fn add_route_entry(
    set: &mut ArtifactSet,
    defect: &Defect,
    ctx: &GenContext<'_>,
    target: &str,
) -> Application {
    let slug = target.trim_start_matches('/');
    let slug = if slug.is_empty() { "home" } else { slug };
    let component = title_case(slug);

    let Some(router) = set.get_mut(&defect.artifact) else {
        return Application::Declined;
    };
    if router
        .declared_references
        .iter()
        .any(|r| r.kind == RefKind::Route && r.target == target)
    {
        return Application::AlreadyFixed;
    }

    let (route_line, anchor, import_spec) = match ctx.profile.framework {
        Framework::React => (
            format!("        <Route path=\"{target}\" element={{<{component} />}} />"),
            "</Routes>",
            format!("./pages/{component}"),
        ),
        Framework::Vue => (
            format!("  {{ path: '{target}', component: {component} }},"),
            "];",
            format!("../pages/{component}.vue"),
        ),
        Framework::Html => return Application::Declined,
    };

    let Some(content) = insert_line_before(&router.content, anchor, &route_line) else {
        return Application::Declined;
    };
    router.content = content;

    let has_import = router
        .declared_references
        .iter()
        .any(|r| r.kind == RefKind::Import && r.target == import_spec);
    if !has_import {
        let import_line = format!("import {component} from '{import_spec}';");
        router.content = insert_after_imports(&router.content, &import_line);
        router
            .declared_references
            .push(DeclaredReference { target: import_spec, kind: RefKind::Import });
    }
    router
        .declared_references
        .push(DeclaredReference { target: target.to_string(), kind: RefKind::Route });

    Application::Fixed(FixRecord {
        defect: defect.clone(),
        strategy: "sync-route-nav",
        result_artifacts: vec![defect.artifact.clone()],
        confidence: FixConfidence::Full,
    })
}

fn fixed_nav(defect: &Defect, result_artifacts: Vec<String>) -> Application {
    Application::Fixed(FixRecord {
        defect: defect.clone(),
        strategy: "sync-route-nav",
        result_artifacts,
        confidence: FixConfidence::Full,
    })
}

fn has_nav_ref(artifact: &Artifact, target: &str) -> bool {
    artifact
        .declared_references
        .iter()
        .any(|r| r.kind == RefKind::NavLink && r.target == target)
}

fn record_nav(artifact: &mut Artifact, target: &str) {
    artifact
        .declared_references
        .push(DeclaredReference { target: target.to_string(), kind: RefKind::NavLink });
}

// --- shared helpers ------------------------------------------------------

fn file_stem(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    file.rsplit_once('.').map_or(file, |(stem, _)| stem)
}

fn component_by_name(name: &str) -> Option<ComponentId> {
    resolver::ALL_COMPONENTS.iter().copied().find(|c| c.component_name() == name)
}

fn is_page_path(profile: &FrameworkProfile, path: &str) -> bool {
    if !path.ends_with(&format!(".{}", profile.page_ext)) {
        return false;
    }
    if profile.page_dir.is_empty() {
        !path.contains('/')
    } else {
        path.starts_with(&format!("{}/", profile.page_dir))
    }
}

fn is_component_path(profile: &FrameworkProfile, path: &str) -> bool {
    !profile.component_dir.is_empty()
        && path.starts_with(&format!("{}/", profile.component_dir))
}

fn page_path_for_slug(profile: &FrameworkProfile, slug: &str) -> String {
    if profile.page_dir.is_empty() {
        format!("{slug}.html")
    } else {
        format!("{}/{}.{}", profile.page_dir, title_case(slug), profile.page_ext)
    }
}

/// Derives a navigation label from a route path (`/gallery` → `Gallery`).
fn route_label(route: &str) -> String {
    let slug = route.trim_start_matches('/');
    if slug.is_empty() {
        "Home".to_string()
    } else {
        title_case(slug)
    }
}

fn file_label(href: &str) -> String {
    let stem = file_stem(href);
    if stem == "index" {
        "Home".to_string()
    } else {
        title_case(stem)
    }
}

fn title_case(slug: &str) -> String {
    let mut out = String::new();
    let mut upper_next = true;
    for ch in slug.chars() {
        if ch == '-' || ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Inserts `line` before the first content line containing `anchor`,
/// keeping the original line order otherwise.
fn insert_line_before(content: &str, anchor: &str, line: &str) -> Option<String> {
    let position = content.lines().position(|l| l.contains(anchor))?;
    let mut lines: Vec<&str> = content.lines().collect();
    lines.insert(position, line);
    let mut out = lines.join("\n");
    if content.ends_with('\n') {
        out.push('\n');
    }
    Some(out)
}

/// Inserts an import line after the last existing import, or at the top.
fn insert_after_imports(content: &str, import_line: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let last_import = lines.iter().rposition(|l| l.trim_start().starts_with("import "));
    let insert_at = last_import.map_or(0, |i| i + 1);
    let mut out_lines = lines;
    out_lines.insert(insert_at, import_line);
    let mut out = out_lines.join("\n");
    if content.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_content;
    use crate::generator;
    use crate::generator::test_support::context;
    use crate::graph;
    use crate::validate;

    fn run_validate(
        set: &ArtifactSet,
        ctx: &GenContext<'_>,
    ) -> Vec<Defect> {
        let g = graph::build(set);
        validate::validate(&g, set, ctx)
    }

    #[test]
    fn chat_dangling_import_synthesizes_a_pair_in_one_record() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &["chat"], &content);
        let mut set = generator::generate(&ctx);
        let defects = run_validate(&set, &ctx);
        let dangling: Vec<Defect> = defects
            .into_iter()
            .filter(|d| d.kind == DefectKind::DanglingImport)
            .collect();

        let outcome = repair(&mut set, &dangling, &ctx);
        assert_eq!(outcome.applied.len(), 1);
        let record = &outcome.applied[0];
        assert_eq!(record.strategy, "synthesized-stub");
        assert_eq!(record.confidence, FixConfidence::StandIn);
        assert_eq!(
            record.result_artifacts,
            vec!["src/pages/Chat.jsx".to_string(), "src/styles/chat.css".to_string()]
        );
        assert!(set.contains("src/pages/Chat.jsx"));
        assert!(set.contains("src/styles/chat.css"));
    }

    #[test]
    fn repair_is_idempotent() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &["chat"], &content);
        let mut set = generator::generate(&ctx);
        let defects = run_validate(&set, &ctx);
        let first = repair(&mut set, &defects, &ctx);
        assert!(!first.applied.is_empty());

        // Re-running against the repaired set produces zero new records.
        let remaining = run_validate(&set, &ctx);
        let second = repair(&mut set, &remaining, &ctx);
        assert!(second.applied.is_empty(), "second pass applied: {:?}", second.applied);
    }

    #[test]
    fn missing_dependency_is_pinned_to_the_default_version() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &["chat"], &content);
        let mut set = generator::generate(&ctx);
        let manifest = set.get_mut("package.json").unwrap();
        manifest.content =
            manifest.content.replace(",\n    \"socket.io-client\": \"^4.7.5\"", "");
        // Guard: the mutation must leave valid JSON behind.
        assert!(serde_json::from_str::<serde_json::Value>(&manifest.content).is_ok());

        let defects = run_validate(&set, &ctx);
        let outcome = repair(&mut set, &defects, &ctx);
        assert!(outcome
            .applied
            .iter()
            .any(|r| r.strategy == "pin-default-version"));
        let manifest = set.get("package.json").unwrap();
        assert!(manifest.content.contains("\"socket.io-client\": \"^4.7.5\""));
    }

    #[test]
    fn unbalanced_braces_gain_closers_but_extra_closers_decline() {
        let content = builtin_content("fitness");
        let ctx = context(Framework::React, &[], &content);
        let mut set = generator::generate(&ctx);
        set.get_mut("src/styles/home.css").unwrap().content.push_str(".broken {\n");

        let defects = run_validate(&set, &ctx);
        let outcome = repair(&mut set, &defects, &ctx);
        assert!(outcome.applied.iter().any(|r| r.strategy == "normalize-syntax"));
        let sheet = set.get("src/styles/home.css").unwrap();
        assert_eq!(sheet.content.matches('{').count(), sheet.content.matches('}').count());

        // The reverse imbalance has no blind fix.
        set.get_mut("src/styles/about.css").unwrap().content.push_str("}\n");
        let defects = run_validate(&set, &ctx);
        let outcome = repair(&mut set, &defects, &ctx);
        assert_eq!(outcome.declined.len(), 1);
    }

    #[test]
    fn unquoted_attrs_are_quoted_in_place() {
        assert_eq!(
            quote_unquoted_attrs("<textarea rows=5 cols=20></textarea>"),
            "<textarea rows=\"5\" cols=\"20\"></textarea>"
        );
        assert_eq!(
            quote_unquoted_attrs("<input type=\"text\">"),
            "<input type=\"text\">"
        );
    }

    #[test]
    fn orphan_class_appends_selector_to_paired_sheet() {
        let content = builtin_content("consulting");
        let ctx = context(Framework::React, &[], &content);
        let mut set = generator::generate(&ctx);
        let home = set.get_mut("src/pages/Home.jsx").unwrap();
        home.declared_references.push(DeclaredReference {
            target: "hand-added-class".to_string(),
            kind: RefKind::ClassBinding,
        });

        let defects = run_validate(&set, &ctx);
        let outcome = repair(&mut set, &defects, &ctx);
        let record = outcome
            .applied
            .iter()
            .find(|r| r.strategy == "append-selector-stub")
            .expect("orphan class fixed");
        assert_eq!(record.confidence, FixConfidence::StandIn);
        assert!(set
            .get("src/styles/home.css")
            .unwrap()
            .content
            .contains(".hand-added-class {"));
    }

    #[test]
    fn missing_nav_entry_is_inserted_with_derived_label() {
        let content = builtin_content("consulting");
        let ctx = context(Framework::React, &["gallery"], &content);
        let mut set = generator::generate(&ctx);
        let navbar = set.get_mut("src/components/Navbar.jsx").unwrap();
        navbar.content = navbar.content.replace(
            "        <li><Link className=\"navbar-link\" to=\"/gallery\">Gallery</Link></li>\n",
            "",
        );
        navbar
            .declared_references
            .retain(|r| !(r.kind == RefKind::NavLink && r.target == "/gallery"));

        let defects = run_validate(&set, &ctx);
        let outcome = repair(&mut set, &defects, &ctx);
        assert!(outcome.applied.iter().any(|r| r.strategy == "sync-route-nav"));
        let navbar = set.get("src/components/Navbar.jsx").unwrap();
        assert!(navbar.content.contains("to=\"/gallery\">Gallery</Link>"));
        assert!(has_nav_ref(navbar, "/gallery"));
    }

    #[test]
    fn route_labels_derive_from_paths() {
        assert_eq!(route_label("/gallery"), "Gallery");
        assert_eq!(route_label("/"), "Home");
        assert_eq!(route_label("/contact-form"), "ContactForm");
        assert_eq!(file_label("index.html"), "Home");
        assert_eq!(file_label("about.html"), "About");
    }
}
