//! Reference graph construction over a completed artifact set.
//!
//! Declared references are resolved against the set with
//! module-resolution-like rules: relative path normalization, and default
//! extensions when the specifier omits one. Bare package specifiers are
//! external and never enter the graph. Class bindings resolve against
//! selector definitions discovered in the artifact's paired stylesheets by
//! targeted textual scanning; generated CSS is regular enough that a full
//! parser would buy nothing.

use std::collections::{HashMap, HashSet};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::artifact::{Artifact, ArtifactKind, ArtifactSet, RefKind};

/// Extensions tried, in order, when a local specifier omits one.
const CANDIDATE_EXTENSIONS: &[&str] = &["jsx", "vue", "js", "css", "html"];

/// One declared reference after resolution against the artifact set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEdge {
    /// Path of the artifact that declared the reference.
    pub from: String,
    /// Resolved target path when resolved; otherwise the expected target
    /// (path, route, or class token) for defect reporting.
    pub to: String,
    /// Kind of reference.
    pub kind: RefKind,
    /// Whether the target exists in the artifact set.
    pub resolved: bool,
}

/// The reference graph: resolved edges as a petgraph structure for
/// traversal, plus the full edge record including unresolved references.
pub struct ReferenceGraph {
    graph: StableDiGraph<String, RefKind>,
    nodes: HashMap<String, NodeIndex>,
    edges: Vec<ReferenceEdge>,
}

impl ReferenceGraph {
    /// Every reference edge, resolved or not, in deterministic order.
    #[must_use]
    pub fn edges(&self) -> &[ReferenceEdge] {
        &self.edges
    }

    /// Edges of one kind that failed to resolve.
    pub fn unresolved(&self, kind: RefKind) -> impl Iterator<Item = &ReferenceEdge> {
        self.edges.iter().filter(move |e| e.kind == kind && !e.resolved)
    }

    /// Number of artifact nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Paths of artifacts the given artifact references (resolved edges).
    #[must_use]
    pub fn references_of(&self, path: &str) -> Vec<&str> {
        let Some(node) = self.nodes.get(path) else {
            return Vec::new();
        };
        self.graph.neighbors(*node).map(|n| self.graph[n].as_str()).collect()
    }

    /// Returns `true` when every edge in the graph is resolved.
    #[must_use]
    pub fn fully_resolved(&self) -> bool {
        self.edges.iter().all(|e| e.resolved)
    }
}

/// Builds the reference graph for an artifact set.
#[must_use]
pub fn build(set: &ArtifactSet) -> ReferenceGraph {
    let mut graph = StableDiGraph::new();
    let mut nodes = HashMap::new();
    for artifact in set.iter() {
        let idx = graph.add_node(artifact.path.clone());
        nodes.insert(artifact.path.clone(), idx);
    }

    let routes = route_table(set);
    let mut edges = Vec::new();

    for artifact in set.iter() {
        let selector_scope = class_selector_scope(set, artifact);

        for reference in &artifact.declared_references {
            let edge = match reference.kind {
                RefKind::Import => resolve_import(set, artifact, &reference.target),
                RefKind::Route => Some(ReferenceEdge {
                    from: artifact.path.clone(),
                    to: reference.target.clone(),
                    kind: RefKind::Route,
                    resolved: routes.contains_key(reference.target.as_str()),
                }),
                RefKind::NavLink => {
                    Some(resolve_nav_link(set, &routes, artifact, &reference.target))
                }
                RefKind::ClassBinding => Some(ReferenceEdge {
                    from: artifact.path.clone(),
                    to: reference.target.clone(),
                    kind: RefKind::ClassBinding,
                    resolved: selector_scope.contains(reference.target.as_str()),
                }),
            };
            let Some(edge) = edge else {
                continue;
            };
            if edge.resolved {
                let to_node = match edge.kind {
                    RefKind::Import => nodes.get(edge.to.as_str()).copied(),
                    RefKind::Route | RefKind::NavLink => routes
                        .get(edge.to.as_str())
                        .and_then(|page| nodes.get(page.as_str()).copied())
                        .or_else(|| nodes.get(edge.to.as_str()).copied()),
                    RefKind::ClassBinding => None,
                };
                if let (Some(from), Some(to)) =
                    (nodes.get(edge.from.as_str()).copied(), to_node)
                {
                    graph.add_edge(from, to, edge.kind);
                }
            }
            edges.push(edge);
        }
    }

    ReferenceGraph { graph, nodes, edges }
}

/// Resolves one import reference. External package imports are assumed
/// satisfied by the package ecosystem and return `None`; they never enter
/// the graph.
fn resolve_import(set: &ArtifactSet, artifact: &Artifact, target: &str) -> Option<ReferenceEdge> {
    if is_external(artifact, target) {
        return None;
    }

    let edge = match normalize_path(artifact.dir(), target) {
        Some(normalized) => match find_with_extensions(set, &normalized) {
            Some(found) => ReferenceEdge {
                from: artifact.path.clone(),
                to: found,
                kind: RefKind::Import,
                resolved: true,
            },
            None => ReferenceEdge {
                from: artifact.path.clone(),
                to: expected_path(&normalized, artifact),
                kind: RefKind::Import,
                resolved: false,
            },
        },
        None => ReferenceEdge {
            from: artifact.path.clone(),
            to: target.to_string(),
            kind: RefKind::Import,
            resolved: false,
        },
    };
    Some(edge)
}

fn resolve_nav_link(
    set: &ArtifactSet,
    routes: &HashMap<String, String>,
    artifact: &Artifact,
    target: &str,
) -> ReferenceEdge {
    let resolved = if target.starts_with('/') {
        // Route-path link: resolves through the page route table.
        routes.contains_key(target)
    } else {
        // File href (plain HTML target).
        normalize_path(artifact.dir(), target)
            .is_some_and(|normalized| set.contains(&normalized))
    };
    ReferenceEdge {
        from: artifact.path.clone(),
        to: target.to_string(),
        kind: RefKind::NavLink,
        resolved,
    }
}

/// True for specifiers satisfied outside the project: bare package names
/// in module sources, or absolute URLs anywhere.
fn is_external(artifact: &Artifact, target: &str) -> bool {
    if target.starts_with("http://") || target.starts_with("https://") || target.starts_with("//")
    {
        return true;
    }
    if target.starts_with('.') || target.starts_with('/') {
        return false;
    }
    // Bare specifier: external for module sources, a relative href for
    // plain HTML documents.
    artifact.extension() != "html"
}

/// Joins and normalizes a specifier against the referencing directory.
/// Returns `None` when `..` escapes the project root.
fn normalize_path(from_dir: &str, target: &str) -> Option<String> {
    let joined = if let Some(rooted) = target.strip_prefix('/') {
        rooted.to_string()
    } else if from_dir.is_empty() {
        target.to_string()
    } else {
        format!("{from_dir}/{target}")
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in joined.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }
    Some(parts.join("/"))
}

/// Finds an artifact at the normalized path, trying default extensions
/// when the specifier omitted one.
fn find_with_extensions(set: &ArtifactSet, normalized: &str) -> Option<String> {
    if set.contains(normalized) {
        return Some(normalized.to_string());
    }
    for ext in CANDIDATE_EXTENSIONS {
        let candidate = format!("{normalized}.{ext}");
        if set.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// The exact path a missing import is expected at, used by the repair
/// engine to synthesize the stand-in.
fn expected_path(normalized: &str, referrer: &Artifact) -> String {
    let file = normalized.rsplit('/').next().unwrap_or(normalized);
    if file.contains('.') {
        normalized.to_string()
    } else {
        format!("{normalized}.{}", referrer.extension())
    }
}

/// Maps canonical route paths to the page artifacts serving them.
fn route_table(set: &ArtifactSet) -> HashMap<String, String> {
    let mut table = HashMap::new();
    for artifact in set.iter() {
        if artifact.kind != ArtifactKind::Page {
            continue;
        }
        table.insert(page_route(&artifact.path), artifact.path.clone());
    }
    table
}

/// Derives the canonical route of a page artifact from its file name.
fn page_route(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
    let slug = stem.to_lowercase();
    if slug == "index" || slug == "home" {
        "/".to_string()
    } else {
        format!("/{slug}")
    }
}

/// Selector names visible to an artifact's class bindings: every selector
/// defined in the stylesheets it imports, plus the global sheet.
fn class_selector_scope(set: &ArtifactSet, artifact: &Artifact) -> HashSet<String> {
    let mut scope = HashSet::new();
    for path in paired_stylesheets(set, artifact) {
        if let Some(sheet) = set.get(&path) {
            scope.extend(class_selectors(&sheet.content));
        }
    }
    scope
}

/// Stylesheet artifacts paired with the given artifact: its resolved CSS
/// imports, plus the project's global sheet.
#[must_use]
pub fn paired_stylesheets(set: &ArtifactSet, artifact: &Artifact) -> Vec<String> {
    let mut paths = Vec::new();
    for reference in &artifact.declared_references {
        if reference.kind != RefKind::Import {
            continue;
        }
        if is_external(artifact, &reference.target) {
            continue;
        }
        if let Some(normalized) = normalize_path(artifact.dir(), &reference.target) {
            if let Some(found) = find_with_extensions(set, &normalized) {
                if found.ends_with(".css") && !paths.contains(&found) {
                    paths.push(found);
                }
            }
        }
    }
    for candidate in set.iter() {
        if candidate.path.ends_with("global.css") && !paths.contains(&candidate.path) {
            paths.push(candidate.path.clone());
        }
    }
    paths
}

/// Collects class selector names from generated CSS via targeted textual
/// scanning: `.name` tokens in the selector list before each `{`,
/// including comma-grouped lists and descendant combinators.
#[must_use]
pub fn class_selectors(css: &str) -> HashSet<String> {
    let mut selectors = HashSet::new();
    let mut current = String::new();
    let mut in_block = 0usize;
    for ch in css.chars() {
        match ch {
            '{' => {
                if in_block == 0 {
                    collect_class_tokens(&current, &mut selectors);
                    current.clear();
                }
                in_block += 1;
            }
            '}' => {
                in_block = in_block.saturating_sub(1);
            }
            other => {
                if in_block == 0 {
                    current.push(other);
                }
            }
        }
    }
    selectors
}

fn collect_class_tokens(selector_list: &str, out: &mut HashSet<String>) {
    for group in selector_list.split(',') {
        for token in group.split_whitespace() {
            for piece in token.split('.').skip(1) {
                let name: String = piece
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                    .collect();
                if !name.is_empty() {
                    out.insert(name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{Artifact, DeclaredReference};

    fn artifact(path: &str, kind: ArtifactKind, refs: Vec<(&str, RefKind)>) -> Artifact {
        Artifact {
            path: path.to_string(),
            kind,
            content: String::new(),
            declared_references: refs
                .into_iter()
                .map(|(target, kind)| DeclaredReference { target: target.to_string(), kind })
                .collect(),
        }
    }

    fn set(artifacts: Vec<Artifact>) -> ArtifactSet {
        artifacts.into_iter().collect()
    }

    #[test]
    fn relative_import_without_extension_resolves() {
        let artifacts = set(vec![
            artifact("src/App.jsx", ArtifactKind::Component, vec![
                ("./pages/Home", RefKind::Import),
            ]),
            artifact("src/pages/Home.jsx", ArtifactKind::Page, vec![]),
        ]);
        let graph = build(&artifacts);
        assert_eq!(graph.edges().len(), 1);
        let edge = &graph.edges()[0];
        assert!(edge.resolved);
        assert_eq!(edge.to, "src/pages/Home.jsx");
        assert_eq!(graph.references_of("src/App.jsx"), vec!["src/pages/Home.jsx"]);
    }

    #[test]
    fn missing_import_reports_expected_path() {
        let artifacts = set(vec![artifact("src/App.jsx", ArtifactKind::Component, vec![
            ("./pages/Chat", RefKind::Import),
        ])]);
        let graph = build(&artifacts);
        let edge = &graph.edges()[0];
        assert!(!edge.resolved);
        assert_eq!(edge.to, "src/pages/Chat.jsx");
    }

    #[test]
    fn bare_specifiers_are_excluded_from_the_graph() {
        let artifacts = set(vec![artifact("src/index.jsx", ArtifactKind::Config, vec![
            ("react", RefKind::Import),
            ("./App", RefKind::Import),
        ])]);
        let graph = build(&artifacts);
        // Only the local (unresolved) import remains.
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].to, "src/App.jsx");
    }

    #[test]
    fn parent_traversal_resolves_and_root_escape_fails() {
        assert_eq!(
            normalize_path("src/components", "../styles/contact.css").as_deref(),
            Some("src/styles/contact.css")
        );
        assert_eq!(normalize_path("", "../escape.css"), None);
    }

    #[test]
    fn html_hrefs_are_local_references() {
        let artifacts = set(vec![
            artifact("about.html", ArtifactKind::Page, vec![
                ("css/global.css", RefKind::Import),
                ("index.html", RefKind::NavLink),
            ]),
            artifact("css/global.css", ArtifactKind::Stylesheet, vec![]),
            artifact("index.html", ArtifactKind::Page, vec![]),
        ]);
        let graph = build(&artifacts);
        assert!(graph.fully_resolved());
    }

    #[test]
    fn route_links_resolve_through_the_page_route_table() {
        let artifacts = set(vec![
            artifact("src/App.jsx", ArtifactKind::Component, vec![
                ("/", RefKind::Route),
                ("/gallery", RefKind::Route),
                ("/missing", RefKind::Route),
            ]),
            artifact("src/pages/Home.jsx", ArtifactKind::Page, vec![]),
            artifact("src/pages/Gallery.jsx", ArtifactKind::Page, vec![]),
        ]);
        let graph = build(&artifacts);
        let unresolved: Vec<&ReferenceEdge> = graph.unresolved(RefKind::Route).collect();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].to, "/missing");
    }

    #[test]
    fn class_selectors_handle_groups_pseudo_and_nesting() {
        let css = "\
.form-input,\n.form-textarea {\n  color: red;\n}\n\
.navbar-link:hover {\n  color: blue;\n}\n\
.page .hero-title {\n  font-size: 2rem;\n}\n\
body {\n  margin: 0;\n}\n";
        let selectors = class_selectors(css);
        for expected in ["form-input", "form-textarea", "navbar-link", "page", "hero-title"] {
            assert!(selectors.contains(expected), "missing {expected}");
        }
        assert!(!selectors.contains("body"));
    }

    #[test]
    fn class_bindings_resolve_against_paired_and_global_sheets() {
        let mut page = artifact("src/pages/Home.jsx", ArtifactKind::Page, vec![
            ("../styles/home.css", RefKind::Import),
            ("hero", RefKind::ClassBinding),
            ("page", RefKind::ClassBinding),
            ("missing-class", RefKind::ClassBinding),
        ]);
        page.content = String::new();
        let mut home_css = artifact("src/styles/home.css", ArtifactKind::Stylesheet, vec![]);
        home_css.content = ".hero {\n  padding: 1rem;\n}\n".to_string();
        let mut global_css = artifact("src/styles/global.css", ArtifactKind::Stylesheet, vec![]);
        global_css.content = ".page {\n  margin: 0 auto;\n}\n".to_string();

        let artifacts = set(vec![page, home_css, global_css]);
        let graph = build(&artifacts);
        let class_edges: Vec<&ReferenceEdge> = graph
            .edges()
            .iter()
            .filter(|e| e.kind == RefKind::ClassBinding)
            .collect();
        assert_eq!(class_edges.len(), 3);
        assert!(class_edges.iter().find(|e| e.to == "hero").unwrap().resolved);
        assert!(class_edges.iter().find(|e| e.to == "page").unwrap().resolved);
        assert!(!class_edges.iter().find(|e| e.to == "missing-class").unwrap().resolved);
    }
}
