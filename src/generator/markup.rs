//! Reference-recording artifact builder.
//!
//! Every helper that writes a cross-artifact reference into the content
//! also appends the matching [`DeclaredReference`] in the same call, so
//! the declared list can never drift from the written text.

use crate::artifact::{Artifact, ArtifactKind, DeclaredReference, RefKind};

/// Escapes text for inclusion in markup body positions.
#[must_use]
pub fn html_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Incrementally builds one artifact's content and reference list.
#[derive(Debug)]
pub struct ArtifactBuilder {
    path: String,
    kind: ArtifactKind,
    content: String,
    refs: Vec<DeclaredReference>,
}

impl ArtifactBuilder {
    /// Starts a builder for the artifact at `path`.
    pub fn new(path: impl Into<String>, kind: ArtifactKind) -> Self {
        Self { path: path.into(), kind, content: String::new(), refs: Vec::new() }
    }

    /// Appends one line of content.
    pub fn line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.content.push('\n');
    }

    /// Records a reference without writing content. Used when the markup
    /// for a reference is produced by a surrounding `format!`.
    pub fn record(&mut self, target: impl Into<String>, kind: RefKind) {
        self.refs.push(DeclaredReference { target: target.into(), kind });
    }

    /// Writes `import Binding from 'spec';` and records the import.
    pub fn import_default(&mut self, binding: &str, spec: &str) {
        self.line(&format!("import {binding} from '{spec}';"));
        self.record(spec, RefKind::Import);
    }

    /// Writes `import {{ names }} from 'spec';` and records the import.
    pub fn import_named(&mut self, names: &str, spec: &str) {
        self.line(&format!("import {{ {names} }} from '{spec}';"));
        self.record(spec, RefKind::Import);
    }

    /// Writes `import 'spec';` and records the import.
    pub fn import_side_effect(&mut self, spec: &str) {
        self.line(&format!("import '{spec}';"));
        self.record(spec, RefKind::Import);
    }

    /// Writes `<link rel="stylesheet" href="...">` and records the import.
    pub fn link_stylesheet(&mut self, href: &str) {
        self.line(&format!("    <link rel=\"stylesheet\" href=\"{href}\">"));
        self.record(href, RefKind::Import);
    }

    /// Writes `<script type="module" src="..."></script>` and records the
    /// import.
    pub fn script_module(&mut self, src: &str) {
        self.line(&format!("    <script type=\"module\" src=\"{src}\"></script>"));
        self.record(src, RefKind::Import);
    }

    /// Writes `<style src="..."></style>` (Vue SFC) and records the import.
    pub fn style_src(&mut self, href: &str) {
        self.line(&format!("<style src=\"{href}\"></style>"));
        self.record(href, RefKind::Import);
    }

    /// Records a route registration; the caller writes the markup.
    pub fn record_route(&mut self, route_path: impl Into<String>) {
        self.record(route_path, RefKind::Route);
    }

    /// Records a navigation link; the caller writes the markup.
    pub fn record_nav_link(&mut self, target: impl Into<String>) {
        self.record(target, RefKind::NavLink);
    }

    /// Records each class token and returns the rendered attribute, e.g.
    /// `className="page page-home"`.
    #[must_use = "the rendered attribute must be written into the markup"]
    pub fn class_attr(&mut self, attr: &str, tokens: &[&str]) -> String {
        for token in tokens {
            self.record(*token, RefKind::ClassBinding);
        }
        format!("{attr}=\"{}\"", tokens.join(" "))
    }

    /// Finishes the builder into an [`Artifact`].
    #[must_use]
    pub fn finish(self) -> Artifact {
        Artifact {
            path: self.path,
            kind: self.kind,
            content: self.content,
            declared_references: self.refs,
        }
    }
}
