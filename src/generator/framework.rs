//! Framework profiles: the per-framework facts generation dispatches on.
//!
//! All framework-conditional behavior is driven by this table; template
//! code never branches on framework ids directly.

use crate::resolver::{ComponentId, Dependency, PageId, StyleId};
use crate::selection::Framework;

/// Layout and stack facts for one target framework.
#[derive(Debug)]
pub struct FrameworkProfile {
    /// Which framework this profile describes.
    pub framework: Framework,
    /// Directory for page sources, empty for root.
    pub page_dir: &'static str,
    /// Directory for component sources, empty when components are inlined.
    pub component_dir: &'static str,
    /// Directory for stylesheets.
    pub style_dir: &'static str,
    /// Extension of page and component sources, without the dot.
    pub page_ext: &'static str,
    /// Application entry module, if the framework has one.
    pub entry_path: Option<&'static str>,
    /// Artifact that registers routes, if the framework has one.
    pub router_path: Option<&'static str>,
    /// Application shell artifact, if distinct from the router.
    pub app_path: Option<&'static str>,
    /// Markup attribute used for class bindings.
    pub class_attr: &'static str,
    /// Core runtime packages for the dependency manifest.
    pub core_dependencies: &'static [Dependency],
    /// Development packages for the dependency manifest.
    pub dev_dependencies: &'static [Dependency],
    /// `scripts` entries for the dependency manifest.
    pub scripts: &'static [(&'static str, &'static str)],
}

const REACT: FrameworkProfile = FrameworkProfile {
    framework: Framework::React,
    page_dir: "src/pages",
    component_dir: "src/components",
    style_dir: "src/styles",
    page_ext: "jsx",
    entry_path: Some("src/index.jsx"),
    router_path: Some("src/App.jsx"),
    app_path: Some("src/App.jsx"),
    class_attr: "className",
    core_dependencies: &[
        Dependency { name: "react", version: "^18.3.1" },
        Dependency { name: "react-dom", version: "^18.3.1" },
        Dependency { name: "react-router-dom", version: "^6.26.0" },
    ],
    dev_dependencies: &[
        Dependency { name: "@vitejs/plugin-react", version: "^4.3.1" },
        Dependency { name: "vite", version: "^5.4.2" },
    ],
    scripts: &[("dev", "vite"), ("build", "vite build"), ("preview", "vite preview")],
};

const VUE: FrameworkProfile = FrameworkProfile {
    framework: Framework::Vue,
    page_dir: "src/pages",
    component_dir: "src/components",
    style_dir: "src/styles",
    page_ext: "vue",
    entry_path: Some("src/main.js"),
    router_path: Some("src/router/index.js"),
    app_path: Some("src/App.vue"),
    class_attr: "class",
    core_dependencies: &[
        Dependency { name: "vue", version: "^3.4.38" },
        Dependency { name: "vue-router", version: "^4.4.3" },
    ],
    dev_dependencies: &[
        Dependency { name: "@vitejs/plugin-vue", version: "^5.1.2" },
        Dependency { name: "vite", version: "^5.4.2" },
    ],
    scripts: &[("dev", "vite"), ("build", "vite build"), ("preview", "vite preview")],
};

const HTML: FrameworkProfile = FrameworkProfile {
    framework: Framework::Html,
    page_dir: "",
    component_dir: "",
    style_dir: "css",
    page_ext: "html",
    entry_path: None,
    router_path: None,
    app_path: None,
    class_attr: "class",
    core_dependencies: &[],
    dev_dependencies: &[Dependency { name: "serve", version: "^14.2.3" }],
    scripts: &[("start", "serve .")],
};

/// Returns the profile for a framework.
#[must_use]
pub fn profile(framework: Framework) -> &'static FrameworkProfile {
    match framework {
        Framework::React => &REACT,
        Framework::Vue => &VUE,
        Framework::Html => &HTML,
    }
}

impl FrameworkProfile {
    /// Path of the dependency manifest artifact.
    #[must_use]
    pub fn dependency_manifest_path(&self) -> &'static str {
        "package.json"
    }

    /// File name of a page, e.g. `Gallery.jsx` or `index.html`.
    #[must_use]
    pub fn page_file_name(&self, page: PageId) -> String {
        if self.framework == Framework::Html {
            if page == PageId::Home {
                "index.html".to_string()
            } else {
                format!("{}.html", page.slug())
            }
        } else {
            format!("{}.{}", page.component_name(), self.page_ext)
        }
    }

    /// Project-relative path of a page artifact.
    #[must_use]
    pub fn page_path(&self, page: PageId) -> String {
        let name = self.page_file_name(page);
        if self.page_dir.is_empty() {
            name
        } else {
            format!("{}/{name}", self.page_dir)
        }
    }

    /// Project-relative path of a stylesheet artifact.
    #[must_use]
    pub fn style_path(&self, style: StyleId) -> String {
        format!("{}/{}.css", self.style_dir, style.slug())
    }

    /// Project-relative path of a component artifact, `None` when the
    /// framework inlines components into pages.
    #[must_use]
    pub fn component_path(&self, component: ComponentId) -> Option<String> {
        if self.component_dir.is_empty() {
            None
        } else {
            Some(format!(
                "{}/{}.{}",
                self.component_dir,
                component.component_name(),
                self.page_ext
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn react_paths() {
        let p = profile(Framework::React);
        assert_eq!(p.page_path(PageId::Gallery), "src/pages/Gallery.jsx");
        assert_eq!(p.style_path(StyleId::Page(PageId::Gallery)), "src/styles/gallery.css");
        assert_eq!(
            p.component_path(ComponentId::GalleryGrid).as_deref(),
            Some("src/components/GalleryGrid.jsx")
        );
    }

    #[test]
    fn html_home_is_index() {
        let p = profile(Framework::Html);
        assert_eq!(p.page_path(PageId::Home), "index.html");
        assert_eq!(p.page_path(PageId::About), "about.html");
        assert_eq!(p.style_path(StyleId::Global), "css/global.css");
        assert!(p.component_path(ComponentId::Navbar).is_none());
    }

    #[test]
    fn every_profile_has_a_dependency_manifest() {
        for fw in [Framework::React, Framework::Vue, Framework::Html] {
            assert_eq!(profile(fw).dependency_manifest_path(), "package.json");
        }
    }
}
