//! Port traits defining external boundaries.
//!
//! The generation core has a single external collaborator: the content
//! provider. Implementations live in `src/adapters/`.

pub mod content;

pub use content::{ContentFuture, ContentProvider, HeroContent, IndustryContent, ServiceItem,
    Testimonial};
