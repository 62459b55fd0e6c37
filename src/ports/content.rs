//! Content provider port supplying industry-specific business copy.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`ContentProvider`] to keep the trait
/// dyn-compatible.
pub type ContentFuture<'a> =
    Pin<Box<dyn Future<Output = Result<IndustryContent, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Hero section copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Main headline.
    pub headline: String,
    /// Supporting line under the headline.
    pub subheadline: String,
    /// Call-to-action button label.
    pub cta_label: String,
}

/// One service offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Service title.
    pub title: String,
    /// One-paragraph description.
    pub description: String,
}

/// One customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// The quoted text.
    pub quote: String,
    /// Who said it.
    pub author: String,
}

/// The full copy package for one industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryContent {
    /// Industry this content was produced for.
    pub industry: String,
    /// Hero section copy.
    pub hero: HeroContent,
    /// About page paragraph.
    pub about: String,
    /// Service offerings; never empty in valid responses.
    pub services: Vec<ServiceItem>,
    /// Customer testimonials.
    pub testimonials: Vec<Testimonial>,
    /// Captions for gallery images.
    pub gallery_captions: Vec<String>,
    /// Prompt text shown above the contact form.
    pub contact_prompt: String,
}

impl IndustryContent {
    /// Returns `true` when the response is missing the copy generation
    /// cannot do without. Such responses are replaced by fallback content.
    #[must_use]
    pub fn is_unusable(&self) -> bool {
        self.hero.headline.trim().is_empty() || self.services.is_empty()
    }
}

/// Supplies industry-specific copy for page generation.
///
/// Implementations must be safely re-entrant under concurrent calls and
/// must return a non-empty fallback for unrecognized industries.
pub trait ContentProvider: Send + Sync {
    /// Produces the copy package for the given industry tag.
    ///
    /// # Errors
    ///
    /// Returns an error if content cannot be produced (network failure,
    /// malformed upstream response). Callers recover via builtin fallback
    /// content; this error is never fatal to a generation run.
    fn industry_content(&self, industry: &str) -> ContentFuture<'_>;
}
