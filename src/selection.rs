//! Untrusted generation request types.
//!
//! A [`FeatureSelection`] is the only inbound interface of the pipeline.
//! It arrives as JSON and may contain unknown feature ids, an unknown
//! framework string, or an empty feature list; only a malformed top-level
//! shape is fatal.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Target UI framework for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// React single-page app (Vite, react-router).
    React,
    /// Vue 3 single-page app (Vite, vue-router).
    Vue,
    /// Plain multi-page HTML/CSS site.
    Html,
}

impl Framework {
    /// Parses a user-supplied framework id. Case-insensitive.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "react" => Some(Self::React),
            "vue" => Some(Self::Vue),
            "html" | "static" => Some(Self::Html),
            _ => None,
        }
    }

    /// Canonical lowercase id.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Html => "html",
        }
    }
}

/// Optional business details used to enrich generated copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    /// Short tagline shown under the hero headline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Street address shown in the footer and contact page.
    #[serde(default)]
    pub address: Option<String>,
}

/// The declarative description of the desired project. Untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSelection {
    /// Project name; slugified for the output directory and package name.
    pub project_name: String,
    /// Display name of the business the site is for.
    #[serde(default)]
    pub business_name: String,
    /// Requested framework id (e.g. `"react"`). Validated, not trusted.
    #[serde(default = "default_framework")]
    pub framework: String,
    /// Industry tag used to select content (e.g. `"restaurant"`).
    #[serde(default)]
    pub industry: String,
    /// Selected feature ids. Unknown ids are ignored with a warning.
    #[serde(default)]
    pub selected_features: Vec<String>,
    /// Optional business details.
    #[serde(default)]
    pub business_data: BusinessData,
}

fn default_framework() -> String {
    "react".to_string()
}

impl FeatureSelection {
    /// Parses a selection from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the fatal preconditions and resolves the framework.
    ///
    /// Unknown feature ids are deliberately not checked here; they are
    /// warnings during resolution, not errors.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the project name is unusable or the
    /// framework id is unknown.
    pub fn validate(&self) -> Result<Framework, ConfigError> {
        if self.project_name.trim().is_empty() {
            return Err(ConfigError::EmptyProjectName);
        }
        if self.slug().is_empty() {
            return Err(ConfigError::UnusableProjectName(self.project_name.clone()));
        }
        Framework::from_id(&self.framework)
            .ok_or_else(|| ConfigError::UnknownFramework(self.framework.clone()))
    }

    /// Filesystem- and package-safe slug derived from the project name.
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::new();
        let mut last_dash = true;
        for ch in self.project_name.trim().chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        slug.trim_end_matches('-').to_string()
    }

    /// Display name used inside generated copy, falling back to the
    /// project name when no business name was supplied.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.business_name.trim().is_empty() {
            self.project_name.trim()
        } else {
            self.business_name.trim()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(json: &str) -> FeatureSelection {
        FeatureSelection::from_json(json).expect("selection should parse")
    }

    #[test]
    fn parses_camel_case_fields() {
        let sel = minimal(
            r#"{
                "projectName": "Bella Cucina",
                "businessName": "Bella Cucina Trattoria",
                "framework": "react",
                "industry": "restaurant",
                "selectedFeatures": ["gallery", "contact-form"]
            }"#,
        );
        assert_eq!(sel.project_name, "Bella Cucina");
        assert_eq!(sel.selected_features, vec!["gallery", "contact-form"]);
    }

    #[test]
    fn defaults_apply_for_missing_fields() {
        let sel = minimal(r#"{"projectName": "x"}"#);
        assert_eq!(sel.framework, "react");
        assert!(sel.selected_features.is_empty());
        assert!(sel.industry.is_empty());
    }

    #[test]
    fn validate_rejects_empty_project_name() {
        let sel = minimal(r#"{"projectName": "   "}"#);
        assert!(matches!(sel.validate(), Err(ConfigError::EmptyProjectName)));
    }

    #[test]
    fn validate_rejects_unknown_framework() {
        let sel = minimal(r#"{"projectName": "x", "framework": "svelte"}"#);
        assert!(matches!(sel.validate(), Err(ConfigError::UnknownFramework(_))));
    }

    #[test]
    fn validate_resolves_framework_case_insensitively() {
        let sel = minimal(r#"{"projectName": "x", "framework": "Vue"}"#);
        assert_eq!(sel.validate().unwrap(), Framework::Vue);
    }

    #[test]
    fn slug_strips_unsafe_characters() {
        let sel = minimal(r#"{"projectName": "  Bella Cucina! (2024) "}"#);
        assert_eq!(sel.slug(), "bella-cucina-2024");
    }

    #[test]
    fn display_name_prefers_business_name() {
        let sel = minimal(r#"{"projectName": "proj", "businessName": "Acme Corp"}"#);
        assert_eq!(sel.display_name(), "Acme Corp");
        let sel = minimal(r#"{"projectName": "proj"}"#);
        assert_eq!(sel.display_name(), "proj");
    }
}
