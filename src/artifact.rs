//! Generated file records and the path-unique artifact collection.
//!
//! Every cross-artifact reference an artifact carries is recorded at
//! construction time by the generator (or by a repair strategy), never
//! re-derived by scanning finished text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What role a generated file plays in the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// A routable page.
    Page,
    /// A reusable UI component.
    Component,
    /// A CSS stylesheet.
    Stylesheet,
    /// Build or dependency configuration.
    Config,
    /// A static asset placeholder.
    Asset,
}

/// The kind of a declared cross-artifact reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefKind {
    /// A module import or stylesheet link, targeting a file path.
    Import,
    /// A route registration, targeting a route path.
    Route,
    /// A navigation link, targeting a route path (or file href).
    NavLink,
    /// A style class usage, targeting a class token.
    ClassBinding,
}

/// One reference recorded while an artifact's content was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredReference {
    /// Reference target: a path, route, or class token depending on `kind`.
    pub target: String,
    /// What kind of reference this is.
    pub kind: RefKind,
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Project-relative path, unique within one generation run.
    pub path: String,
    /// Role of this file.
    pub kind: ArtifactKind,
    /// Full file content.
    pub content: String,
    /// References recorded at construction time.
    pub declared_references: Vec<DeclaredReference>,
}

impl Artifact {
    /// Directory part of the path, empty for root-level files.
    #[must_use]
    pub fn dir(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// File extension, without the dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        name.rsplit_once('.').map_or("", |(_, ext)| ext)
    }
}

/// A set of artifacts with unique paths, kept in deterministic order.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
    index: HashMap<String, usize>,
}

impl ArtifactSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an artifact.
    ///
    /// # Errors
    ///
    /// Returns an error string when an artifact with the same path already
    /// exists; paths are globally unique within one generation run.
    pub fn insert(&mut self, artifact: Artifact) -> Result<(), String> {
        if self.index.contains_key(&artifact.path) {
            return Err(format!("duplicate artifact path: {}", artifact.path));
        }
        self.index.insert(artifact.path.clone(), self.artifacts.len());
        self.artifacts.push(artifact);
        Ok(())
    }

    /// Returns the artifact at `path`, if present.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.index.get(path).map(|i| &self.artifacts[*i])
    }

    /// Returns a mutable reference to the artifact at `path`, if present.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut Artifact> {
        self.index.get(path).map(|i| &mut self.artifacts[*i])
    }

    /// Returns `true` when an artifact exists at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Iterates artifacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    /// Number of artifacts in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Returns `true` when the set holds no artifacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Freezes the set into a path-ordered artifact list, the shape handed
    /// to downstream packaging.
    #[must_use]
    pub fn into_ordered_vec(mut self) -> Vec<Artifact> {
        self.artifacts.sort_by(|a, b| a.path.cmp(&b.path));
        self.artifacts
    }

    /// All paths in the set, sorted.
    #[must_use]
    pub fn sorted_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.artifacts.iter().map(|a| a.path.as_str()).collect();
        paths.sort_unstable();
        paths
    }
}

impl FromIterator<Artifact> for ArtifactSet {
    /// Builds a set from artifacts, keeping the first of any duplicate path.
    fn from_iter<T: IntoIterator<Item = Artifact>>(iter: T) -> Self {
        let mut set = Self::new();
        for artifact in iter {
            if let Err(err) = set.insert(artifact) {
                tracing::warn!(%err, "dropping duplicate artifact");
            }
        }
        set
    }
}
