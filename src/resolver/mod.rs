//! Feature catalog and manifest resolution.
//!
//! The catalog is the single source of truth for what each feature id
//! contributes: pages, components, and third-party packages. Resolution is
//! a pure function over it; identical selections always produce identical
//! manifests.

use crate::selection::FeatureSelection;

/// Canonical page identifiers, in the order they appear in manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    /// Landing page, routed at `/`.
    Home,
    /// About page.
    About,
    /// Services overview.
    Services,
    /// Contact page with the contact form.
    Contact,
    /// Image gallery.
    Gallery,
    /// Menu page (restaurants).
    Menu,
    /// Blog index.
    Blog,
    /// Team page.
    Team,
    /// Frequently asked questions.
    Faq,
    /// Live chat page.
    Chat,
}

impl PageId {
    /// Lowercase slug (`"gallery"`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Contact => "contact",
            Self::Gallery => "gallery",
            Self::Menu => "menu",
            Self::Blog => "blog",
            Self::Team => "team",
            Self::Faq => "faq",
            Self::Chat => "chat",
        }
    }

    /// Component-style name (`"Gallery"`), used in file names and imports.
    #[must_use]
    pub fn component_name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Contact => "Contact",
            Self::Gallery => "Gallery",
            Self::Menu => "Menu",
            Self::Blog => "Blog",
            Self::Team => "Team",
            Self::Faq => "Faq",
            Self::Chat => "Chat",
        }
    }

    /// Human-readable navigation label.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Contact => "Contact",
            Self::Gallery => "Gallery",
            Self::Menu => "Menu",
            Self::Blog => "Blog",
            Self::Team => "Team",
            Self::Faq => "FAQ",
            Self::Chat => "Chat",
        }
    }

    /// Canonical route path (`"/"` for home, `"/gallery"` otherwise).
    #[must_use]
    pub fn route_path(self) -> String {
        match self {
            Self::Home => "/".to_string(),
            other => format!("/{}", other.slug()),
        }
    }

    /// Looks a page up by its slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        ALL_PAGES.iter().copied().find(|p| p.slug() == slug)
    }
}

/// Every page the generator knows about, in manifest order.
pub const ALL_PAGES: &[PageId] = &[
    PageId::Home,
    PageId::About,
    PageId::Services,
    PageId::Contact,
    PageId::Gallery,
    PageId::Menu,
    PageId::Blog,
    PageId::Team,
    PageId::Faq,
    PageId::Chat,
];

/// Canonical component identifiers, in manifest order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentId {
    /// Top navigation bar.
    Navbar,
    /// Page footer.
    Footer,
    /// Contact form.
    ContactForm,
    /// Gallery image grid.
    GalleryGrid,
    /// Testimonial quotes list.
    TestimonialList,
    /// Newsletter signup box.
    NewsletterSignup,
}

/// Every component the generator knows about, in manifest order.
pub const ALL_COMPONENTS: &[ComponentId] = &[
    ComponentId::Navbar,
    ComponentId::Footer,
    ComponentId::ContactForm,
    ComponentId::GalleryGrid,
    ComponentId::TestimonialList,
    ComponentId::NewsletterSignup,
];

impl ComponentId {
    /// Lowercase slug (`"gallery-grid"`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Footer => "footer",
            Self::ContactForm => "contact-form",
            Self::GalleryGrid => "gallery-grid",
            Self::TestimonialList => "testimonial-list",
            Self::NewsletterSignup => "newsletter-signup",
        }
    }

    /// Component-style name (`"GalleryGrid"`).
    #[must_use]
    pub fn component_name(self) -> &'static str {
        match self {
            Self::Navbar => "Navbar",
            Self::Footer => "Footer",
            Self::ContactForm => "ContactForm",
            Self::GalleryGrid => "GalleryGrid",
            Self::TestimonialList => "TestimonialList",
            Self::NewsletterSignup => "NewsletterSignup",
        }
    }
}

/// Stylesheet identifiers. One global sheet plus one per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleId {
    /// Shared layout, navigation, and footer styles.
    Global,
    /// Page-specific styles, paired with one page artifact.
    Page(PageId),
}

impl StyleId {
    /// Lowercase slug (`"global"`, `"gallery"`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Page(page) => page.slug(),
        }
    }
}

/// A third-party package requirement with a pinned default version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    /// Package name as published.
    pub name: &'static str,
    /// Pinned default version requirement.
    pub version: &'static str,
}

/// One entry of the immutable feature catalog.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    /// Stable feature id as it appears in selections.
    pub id: &'static str,
    /// Human-readable label for catalog listings.
    pub label: &'static str,
    /// Pages this feature contributes.
    pub pages: &'static [PageId],
    /// Components this feature contributes.
    pub components: &'static [ComponentId],
    /// Packages this feature requires in the dependency manifest.
    pub dependencies: &'static [Dependency],
}

/// The feature catalog. Every selectable feature maps to at least one
/// concrete artifact; generation code never branches on feature ids
/// outside this table.
pub const FEATURE_CATALOG: &[FeatureSpec] = &[
    FeatureSpec {
        id: "contact-form",
        label: "Contact page with a message form",
        pages: &[PageId::Contact],
        components: &[ComponentId::ContactForm],
        dependencies: &[],
    },
    FeatureSpec {
        id: "gallery",
        label: "Photo gallery page",
        pages: &[PageId::Gallery],
        components: &[ComponentId::GalleryGrid],
        dependencies: &[],
    },
    FeatureSpec {
        id: "menu",
        label: "Menu page",
        pages: &[PageId::Menu],
        components: &[],
        dependencies: &[],
    },
    FeatureSpec {
        id: "blog",
        label: "Blog index page",
        pages: &[PageId::Blog],
        components: &[],
        dependencies: &[],
    },
    FeatureSpec {
        id: "team",
        label: "Team page",
        pages: &[PageId::Team],
        components: &[],
        dependencies: &[],
    },
    FeatureSpec {
        id: "faq",
        label: "FAQ page",
        pages: &[PageId::Faq],
        components: &[],
        dependencies: &[],
    },
    FeatureSpec {
        id: "testimonials",
        label: "Customer testimonials on the home page",
        pages: &[],
        components: &[ComponentId::TestimonialList],
        dependencies: &[],
    },
    FeatureSpec {
        id: "newsletter",
        label: "Newsletter signup box",
        pages: &[],
        components: &[ComponentId::NewsletterSignup],
        dependencies: &[],
    },
    FeatureSpec {
        id: "chat",
        label: "Live chat page",
        pages: &[PageId::Chat],
        components: &[],
        dependencies: &[Dependency { name: "socket.io-client", version: "^4.7.5" }],
    },
];

/// Pages present in every manifest regardless of selection.
pub const CORE_PAGES: &[PageId] = &[PageId::Home, PageId::About, PageId::Services];

/// Components present in every manifest regardless of selection.
pub const CORE_COMPONENTS: &[ComponentId] = &[ComponentId::Navbar, ComponentId::Footer];

/// Looks a feature up by id.
#[must_use]
pub fn feature(id: &str) -> Option<&'static FeatureSpec> {
    FEATURE_CATALOG.iter().find(|f| f.id == id)
}

/// The derived file manifest for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Pages to generate, in canonical order.
    pub pages: Vec<PageId>,
    /// Components to generate, in canonical order.
    pub components: Vec<ComponentId>,
    /// Stylesheets to generate: global first, then one per page.
    pub styles: Vec<StyleId>,
}

impl Manifest {
    /// Returns `true` when the given page is part of this manifest.
    #[must_use]
    pub fn has_page(&self, page: PageId) -> bool {
        self.pages.contains(&page)
    }

    /// Returns `true` when the given component is part of this manifest.
    #[must_use]
    pub fn has_component(&self, component: ComponentId) -> bool {
        self.components.contains(&component)
    }
}

/// Resolves a selection into a manifest.
///
/// Pure and total: unknown feature ids are logged as warnings and ignored;
/// an empty selection yields the core manifest. Output order is canonical
/// (enum order), independent of selection order.
#[must_use]
pub fn resolve(selection: &FeatureSelection) -> Manifest {
    let mut pages: Vec<PageId> = CORE_PAGES.to_vec();
    let mut components: Vec<ComponentId> = CORE_COMPONENTS.to_vec();

    for id in &selection.selected_features {
        let Some(spec) = feature(id) else {
            tracing::warn!(feature = %id, "ignoring unknown feature id");
            continue;
        };
        pages.extend_from_slice(spec.pages);
        components.extend_from_slice(spec.components);
    }

    pages.sort_unstable();
    pages.dedup();
    components.sort_unstable();
    components.dedup();

    let mut styles = vec![StyleId::Global];
    styles.extend(pages.iter().map(|p| StyleId::Page(*p)));

    Manifest { pages, components, styles }
}

/// Union of package requirements for the selected features.
///
/// Only known feature ids contribute; the framework's own core packages
/// live in the framework profile, not here.
#[must_use]
pub fn feature_dependencies(selection: &FeatureSelection) -> Vec<Dependency> {
    let mut deps: Vec<Dependency> = selection
        .selected_features
        .iter()
        .filter_map(|id| feature(id))
        .flat_map(|spec| spec.dependencies.iter().copied())
        .collect();
    deps.sort_unstable_by_key(|d| d.name);
    deps.dedup_by_key(|d| d.name);
    deps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(features: &[&str]) -> FeatureSelection {
        FeatureSelection {
            project_name: "test".to_string(),
            business_name: String::new(),
            framework: "react".to_string(),
            industry: String::new(),
            selected_features: features.iter().map(ToString::to_string).collect(),
            business_data: crate::selection::BusinessData::default(),
        }
    }

    #[test]
    fn empty_selection_yields_core_manifest() {
        let manifest = resolve(&selection(&[]));
        assert_eq!(manifest.pages, vec![PageId::Home, PageId::About, PageId::Services]);
        assert_eq!(manifest.components, vec![ComponentId::Navbar, ComponentId::Footer]);
        assert_eq!(manifest.styles.len(), manifest.pages.len() + 1);
        assert_eq!(manifest.styles[0], StyleId::Global);
    }

    #[test]
    fn scenario_selection_yields_expected_page_order() {
        let manifest = resolve(&selection(&["contact-form", "gallery"]));
        assert_eq!(
            manifest.pages,
            vec![PageId::Home, PageId::About, PageId::Services, PageId::Contact, PageId::Gallery]
        );
        assert!(manifest.has_component(ComponentId::ContactForm));
        assert!(manifest.has_component(ComponentId::GalleryGrid));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let manifest = resolve(&selection(&["gallery", "holograms", "time-travel"]));
        assert!(manifest.has_page(PageId::Gallery));
        assert_eq!(manifest.pages.len(), 4);
    }

    #[test]
    fn selection_order_does_not_affect_manifest() {
        let a = resolve(&selection(&["gallery", "contact-form"]));
        let b = resolve(&selection(&["contact-form", "gallery"]));
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_ids_resolve_once() {
        let manifest = resolve(&selection(&["gallery", "gallery"]));
        assert_eq!(manifest.pages.iter().filter(|p| **p == PageId::Gallery).count(), 1);
    }

    #[test]
    fn every_catalog_feature_contributes_an_artifact() {
        for spec in FEATURE_CATALOG {
            assert!(
                !spec.pages.is_empty() || !spec.components.is_empty(),
                "feature {} maps to no artifacts",
                spec.id
            );
        }
    }

    #[test]
    fn feature_dependencies_dedup_and_sort() {
        let deps = feature_dependencies(&selection(&["chat", "chat", "gallery"]));
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "socket.io-client");
    }

    #[test]
    fn route_paths_are_canonical() {
        assert_eq!(PageId::Home.route_path(), "/");
        assert_eq!(PageId::Gallery.route_path(), "/gallery");
        assert_eq!(PageId::from_slug("gallery"), Some(PageId::Gallery));
        assert_eq!(PageId::from_slug("nope"), None);
    }
}
