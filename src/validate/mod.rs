//! Structural consistency validation over the reference graph.
//!
//! Produces [`Defect`] records; it never mutates artifacts. Whether a
//! defect kind is auto-fixable comes from the static table in
//! [`DefectKind::auto_fixable`], not from per-site judgment calls.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::artifact::{Artifact, ArtifactSet, RefKind};
use crate::generator::GenContext;
use crate::graph::ReferenceGraph;
use crate::resolver::{self, ComponentId};

/// Which side of a route/navigation pairing is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchSide {
    /// A registered route has no navigation entry.
    MissingNav,
    /// A navigation entry has no registered route.
    MissingRoute,
    /// A registered route or navigation entry targets no page artifact.
    MissingPage,
}

/// Which targeted syntax check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxIssue {
    /// More opening than closing braces (or the reverse).
    UnbalancedBraces,
    /// A markup attribute value is not quoted.
    UnquotedAttr,
    /// A structured-config artifact does not parse as JSON.
    InvalidJson,
}

/// Detected structural inconsistency kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefectKind {
    /// An import-kind edge resolves to no artifact.
    DanglingImport,
    /// A class binding has no selector in the paired stylesheets.
    OrphanClass,
    /// Routes and navigation entries disagree.
    RouteNavMismatch(MismatchSide),
    /// The dependency manifest is missing a required package.
    MissingDependency,
    /// A targeted syntax check failed.
    MalformedSyntax(SyntaxIssue),
    /// The repair loop hit its iteration bound without converging.
    RepairLoopExceeded,
}

impl DefectKind {
    /// Stable kebab-case family name for reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DanglingImport => "dangling-import",
            Self::OrphanClass => "orphan-class",
            Self::RouteNavMismatch(_) => "route-nav-mismatch",
            Self::MissingDependency => "missing-dependency",
            Self::MalformedSyntax(_) => "malformed-syntax",
            Self::RepairLoopExceeded => "repair-loop-exceeded",
        }
    }

    /// The static fixability table. Invalid JSON has no deterministic
    /// textual transform, and exceeding the loop bound is a terminal
    /// report, not something the loop can fix about itself.
    #[must_use]
    pub fn auto_fixable(self) -> bool {
        match self {
            Self::DanglingImport
            | Self::OrphanClass
            | Self::RouteNavMismatch(_)
            | Self::MissingDependency
            | Self::MalformedSyntax(
                SyntaxIssue::UnbalancedBraces | SyntaxIssue::UnquotedAttr,
            ) => true,
            Self::MalformedSyntax(SyntaxIssue::InvalidJson) | Self::RepairLoopExceeded => false,
        }
    }
}

/// One detected structural inconsistency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    /// What went wrong.
    pub kind: DefectKind,
    /// Path of the artifact the defect is reported against.
    pub artifact: String,
    /// Machine-usable target (expected path, class token, route, package
    /// name) the repair engine acts on.
    pub target: Option<String>,
    /// Human-readable description.
    pub detail: String,
    /// From the static table; kept on the record for reporting.
    pub auto_fixable: bool,
}

impl Defect {
    /// Builds a defect, pulling fixability from the static table.
    #[must_use]
    pub fn new(
        kind: DefectKind,
        artifact: impl Into<String>,
        target: Option<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            artifact: artifact.into(),
            target,
            detail: detail.into(),
            auto_fixable: kind.auto_fixable(),
        }
    }

    /// Stable identity used to deduplicate defects across repair passes.
    #[must_use]
    pub fn identity(&self) -> (DefectKind, &str, Option<&str>) {
        (self.kind, self.artifact.as_str(), self.target.as_deref())
    }
}

/// Runs every consistency check, in order: dangling imports, orphan
/// classes, route/nav pairing, dependency manifest, targeted syntax.
#[must_use]
pub fn validate(graph: &ReferenceGraph, set: &ArtifactSet, ctx: &GenContext<'_>) -> Vec<Defect> {
    let mut defects = Vec::new();

    for edge in graph.unresolved(RefKind::Import) {
        defects.push(Defect::new(
            DefectKind::DanglingImport,
            edge.from.clone(),
            Some(edge.to.clone()),
            format!("import of {} resolves to no artifact", edge.to),
        ));
    }

    for edge in graph.unresolved(RefKind::ClassBinding) {
        defects.push(Defect::new(
            DefectKind::OrphanClass,
            edge.from.clone(),
            Some(edge.to.clone()),
            format!("class \"{}\" has no selector in the paired stylesheets", edge.to),
        ));
    }

    defects.extend(route_nav_defects(graph, set, ctx));
    defects.extend(dependency_defects(set, ctx));
    defects.extend(syntax_defects(set));

    defects
}

fn route_nav_defects(
    graph: &ReferenceGraph,
    set: &ArtifactSet,
    ctx: &GenContext<'_>,
) -> Vec<Defect> {
    let mut defects = Vec::new();
    let profile = ctx.profile;

    if let Some(router_path) = profile.router_path {
        let routes: BTreeSet<&str> = graph
            .edges()
            .iter()
            .filter(|e| e.kind == RefKind::Route)
            .map(|e| e.to.as_str())
            .collect();
        let navs: BTreeSet<&str> = graph
            .edges()
            .iter()
            .filter(|e| e.kind == RefKind::NavLink && e.to.starts_with('/'))
            .map(|e| e.to.as_str())
            .collect();

        let nav_artifact = profile
            .component_path(ComponentId::Navbar)
            .unwrap_or_else(|| router_path.to_string());

        for route in routes.difference(&navs) {
            defects.push(Defect::new(
                DefectKind::RouteNavMismatch(MismatchSide::MissingNav),
                nav_artifact.clone(),
                Some((*route).to_string()),
                format!("route {route} has no navigation entry"),
            ));
        }
        for nav in navs.difference(&routes) {
            defects.push(Defect::new(
                DefectKind::RouteNavMismatch(MismatchSide::MissingRoute),
                router_path,
                Some((*nav).to_string()),
                format!("navigation entry {nav} has no registered route"),
            ));
        }

        // Routes or route-path links that target no page artifact.
        let mut missing_pages: BTreeSet<&str> = BTreeSet::new();
        for edge in graph.unresolved(RefKind::Route) {
            missing_pages.insert(edge.to.as_str());
        }
        for edge in graph.unresolved(RefKind::NavLink) {
            if edge.to.starts_with('/') && routes.contains(edge.to.as_str()) {
                missing_pages.insert(edge.to.as_str());
            }
        }
        for route in missing_pages {
            defects.push(Defect::new(
                DefectKind::RouteNavMismatch(MismatchSide::MissingPage),
                router_path,
                Some(route.to_string()),
                format!("route {route} targets no page artifact"),
            ));
        }
    } else {
        // Plain HTML: the page files are the route registry.
        let pages: BTreeSet<&str> = set
            .iter()
            .filter(|a| a.kind == crate::artifact::ArtifactKind::Page)
            .map(|a| a.path.as_str())
            .collect();
        let navs: BTreeSet<&str> = graph
            .edges()
            .iter()
            .filter(|e| e.kind == RefKind::NavLink && !e.to.starts_with('/'))
            .map(|e| e.to.as_str())
            .collect();

        for nav in navs.iter().filter(|n| !set.contains(n)) {
            let declared_by = graph
                .edges()
                .iter()
                .find(|e| e.kind == RefKind::NavLink && e.to == **nav)
                .map_or_else(String::new, |e| e.from.clone());
            defects.push(Defect::new(
                DefectKind::RouteNavMismatch(MismatchSide::MissingPage),
                declared_by,
                Some((*nav).to_string()),
                format!("navigation links to missing page {nav}"),
            ));
        }
        for page in pages.difference(&navs) {
            defects.push(Defect::new(
                DefectKind::RouteNavMismatch(MismatchSide::MissingNav),
                (*page).to_string(),
                Some((*page).to_string()),
                format!("page {page} is missing from the navigation"),
            ));
        }
    }

    defects
}

fn dependency_defects(set: &ArtifactSet, ctx: &GenContext<'_>) -> Vec<Defect> {
    let manifest_path = ctx.profile.dependency_manifest_path();
    let Some(manifest) = set.get(manifest_path) else {
        return vec![Defect::new(
            DefectKind::DanglingImport,
            manifest_path,
            Some(manifest_path.to_string()),
            "dependency manifest artifact is missing",
        )];
    };

    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&manifest.content) else {
        // Unparseable JSON is reported by the syntax check; the dependency
        // check cannot run against it.
        return Vec::new();
    };
    let declared = parsed.get("dependencies").and_then(|d| d.as_object());

    let mut required: Vec<resolver::Dependency> = ctx.profile.core_dependencies.to_vec();
    required.extend(resolver::feature_dependencies(ctx.selection));

    let mut defects = Vec::new();
    for dep in required {
        let present = declared.is_some_and(|map| map.contains_key(dep.name));
        if !present {
            defects.push(Defect::new(
                DefectKind::MissingDependency,
                manifest_path,
                Some(dep.name.to_string()),
                format!("required package {} is not declared in dependencies", dep.name),
            ));
        }
    }
    defects
}

fn syntax_defects(set: &ArtifactSet) -> Vec<Defect> {
    let artifacts: Vec<&Artifact> = set.iter().collect();
    artifacts
        .par_iter()
        .map(|artifact| artifact_syntax_defects(artifact))
        .reduce(Vec::new, |mut acc, mut chunk| {
            acc.append(&mut chunk);
            acc
        })
}

fn artifact_syntax_defects(artifact: &Artifact) -> Vec<Defect> {
    let mut defects = Vec::new();
    match artifact.extension() {
        "css" | "js" | "jsx" => {
            let opens = artifact.content.matches('{').count();
            let closes = artifact.content.matches('}').count();
            if opens != closes {
                defects.push(Defect::new(
                    DefectKind::MalformedSyntax(SyntaxIssue::UnbalancedBraces),
                    artifact.path.clone(),
                    None,
                    format!("unbalanced braces: {opens} opening vs {closes} closing"),
                ));
            }
        }
        "json" => {
            if serde_json::from_str::<serde_json::Value>(&artifact.content).is_err() {
                defects.push(Defect::new(
                    DefectKind::MalformedSyntax(SyntaxIssue::InvalidJson),
                    artifact.path.clone(),
                    None,
                    "artifact does not parse as JSON",
                ));
            }
        }
        "html" | "vue" => {
            if let Some(attr) = first_unquoted_attr(&artifact.content) {
                defects.push(Defect::new(
                    DefectKind::MalformedSyntax(SyntaxIssue::UnquotedAttr),
                    artifact.path.clone(),
                    Some(attr.clone()),
                    format!("attribute {attr} has an unquoted value"),
                ));
            }
        }
        _ => {}
    }
    defects
}

/// Finds the first `attr=value` with an unquoted value inside a tag.
/// Returns the attribute name.
fn first_unquoted_attr(markup: &str) -> Option<String> {
    let bytes = markup.as_bytes();
    let mut in_tag = false;
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let ch = bytes[i];
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                b'<' => in_tag = true,
                b'>' => in_tag = false,
                b'"' | b'\'' if in_tag => quote = Some(ch),
                b'=' if in_tag => {
                    let next = bytes.get(i + 1).copied();
                    if next.is_some_and(|n| n.is_ascii_alphanumeric()) {
                        // Walk back over the attribute name.
                        let mut start = i;
                        while start > 0
                            && (bytes[start - 1].is_ascii_alphanumeric()
                                || bytes[start - 1] == b'-')
                        {
                            start -= 1;
                        }
                        if start < i {
                            if let Some(name) = markup.get(start..i) {
                                return Some(name.to_string());
                            }
                        }
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_content;
    use crate::artifact::ArtifactKind;
    use crate::generator;
    use crate::generator::test_support::context;
    use crate::graph;
    use crate::selection::Framework;

    #[test]
    fn fixability_table_is_static() {
        assert!(DefectKind::DanglingImport.auto_fixable());
        assert!(DefectKind::OrphanClass.auto_fixable());
        assert!(DefectKind::MissingDependency.auto_fixable());
        assert!(DefectKind::RouteNavMismatch(MismatchSide::MissingNav).auto_fixable());
        assert!(DefectKind::MalformedSyntax(SyntaxIssue::UnbalancedBraces).auto_fixable());
        assert!(!DefectKind::MalformedSyntax(SyntaxIssue::InvalidJson).auto_fixable());
        assert!(!DefectKind::RepairLoopExceeded.auto_fixable());
    }

    #[test]
    fn happy_path_set_has_no_defects() {
        let content = builtin_content("restaurant");
        let ctx = context(Framework::React, &["contact-form", "gallery"], &content);
        let set = generator::generate(&ctx);
        let g = graph::build(&set);
        let defects = validate(&g, &set, &ctx);
        assert!(defects.is_empty(), "unexpected defects: {defects:?}");
    }

    #[test]
    fn chat_selection_reports_dangling_import() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &["chat"], &content);
        let set = generator::generate(&ctx);
        let g = graph::build(&set);
        let defects = validate(&g, &set, &ctx);

        let dangling: Vec<&Defect> =
            defects.iter().filter(|d| d.kind == DefectKind::DanglingImport).collect();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].target.as_deref(), Some("src/pages/Chat.jsx"));
        assert!(dangling[0].auto_fixable);
    }

    #[test]
    fn corrupted_package_json_reports_invalid_json() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &[], &content);
        let mut set = generator::generate(&ctx);
        set.get_mut("package.json").unwrap().content = "{ not json".to_string();
        let g = graph::build(&set);
        let defects = validate(&g, &set, &ctx);
        assert!(defects
            .iter()
            .any(|d| d.kind == DefectKind::MalformedSyntax(SyntaxIssue::InvalidJson)));
    }

    #[test]
    fn removed_dependency_reports_missing_dependency() {
        let content = builtin_content("retail");
        let ctx = context(Framework::React, &["chat"], &content);
        let mut set = generator::generate(&ctx);
        let manifest = set.get_mut("package.json").unwrap();
        manifest.content = manifest.content.replace("\"socket.io-client\"", "\"renamed-away\"");
        let g = graph::build(&set);
        let defects = validate(&g, &set, &ctx);
        assert!(defects.iter().any(|d| d.kind == DefectKind::MissingDependency
            && d.target.as_deref() == Some("socket.io-client")));
    }

    #[test]
    fn unbalanced_stylesheet_reports_malformed_syntax() {
        let content = builtin_content("fitness");
        let ctx = context(Framework::React, &[], &content);
        let mut set = generator::generate(&ctx);
        let sheet = set.get_mut("src/styles/home.css").unwrap();
        sheet.content.push_str(".broken {\n  color: red;\n");
        let g = graph::build(&set);
        let defects = validate(&g, &set, &ctx);
        assert!(defects.iter().any(|d| d.kind
            == DefectKind::MalformedSyntax(SyntaxIssue::UnbalancedBraces)
            && d.artifact == "src/styles/home.css"));
    }

    #[test]
    fn unquoted_attribute_is_detected() {
        let markup = "<input class=\"ok\" rows=5>";
        assert_eq!(first_unquoted_attr(markup).as_deref(), Some("rows"));
        assert_eq!(first_unquoted_attr("<input class=\"ok\" rows=\"5\">"), None);
        // Equals signs in text content are not attributes.
        assert_eq!(first_unquoted_attr("<p>1+1=2</p>"), None);
    }

    #[test]
    fn missing_nav_entry_is_a_route_nav_mismatch() {
        let content = builtin_content("consulting");
        let ctx = context(Framework::React, &[], &content);
        let mut set = generator::generate(&ctx);
        // Drop the about link from the navbar but keep the route.
        let navbar = set.get_mut("src/components/Navbar.jsx").unwrap();
        navbar.content = navbar.content.replace(
            "        <li><Link className=\"navbar-link\" to=\"/about\">About</Link></li>\n",
            "",
        );
        navbar
            .declared_references
            .retain(|r| !(r.kind == RefKind::NavLink && r.target == "/about"));
        let g = graph::build(&set);
        let defects = validate(&g, &set, &ctx);
        assert!(defects.iter().any(|d| d.kind
            == DefectKind::RouteNavMismatch(MismatchSide::MissingNav)
            && d.target.as_deref() == Some("/about")));
    }

    #[test]
    fn html_nav_to_missing_page_is_reported() {
        let content = builtin_content("retail");
        let ctx = context(Framework::Html, &["gallery"], &content);
        let set = generator::generate(&ctx);
        // Remove the gallery page; every page's nav still links to it.
        let pruned: ArtifactSet =
            set.iter().filter(|a| a.path != "gallery.html").cloned().collect();
        let g = graph::build(&pruned);
        let defects = validate(&g, &pruned, &ctx);
        assert!(defects.iter().any(|d| d.kind
            == DefectKind::RouteNavMismatch(MismatchSide::MissingPage)
            && d.target.as_deref() == Some("gallery.html")));
    }

    #[test]
    fn defect_identity_drives_deduplication() {
        let a = Defect::new(DefectKind::DanglingImport, "x", Some("y".to_string()), "d1");
        let b = Defect::new(DefectKind::DanglingImport, "x", Some("y".to_string()), "d2");
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn syntax_defects_name_the_offending_artifact() {
        let page = Artifact {
            path: "src/pages/Bad.jsx".to_string(),
            kind: ArtifactKind::Page,
            content: "function Bad() { return null;".to_string(),
            declared_references: Vec::new(),
        };
        let defects = artifact_syntax_defects(&page);
        assert_eq!(defects.len(), 1);
        assert_eq!(defects[0].artifact, "src/pages/Bad.jsx");
    }
}
