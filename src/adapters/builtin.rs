//! Builtin content adapter serving bundled industry copy.
//!
//! This is both the default provider and the fallback every other adapter
//! degrades to. The tables are immutable; the same industry tag always
//! yields the same copy.

use crate::ports::content::{
    ContentFuture, ContentProvider, HeroContent, IndustryContent, ServiceItem, Testimonial,
};

/// Serves bundled, read-only industry copy. Safe under concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContentProvider;

impl ContentProvider for BuiltinContentProvider {
    fn industry_content(&self, industry: &str) -> ContentFuture<'_> {
        let content = builtin_content(industry);
        Box::pin(async move { Ok(content) })
    }
}

/// Returns the bundled copy package for an industry tag.
///
/// Unrecognized industries get the generic package; the result is never
/// empty.
#[must_use]
pub fn builtin_content(industry: &str) -> IndustryContent {
    let tag = industry.trim().to_lowercase();
    match tag.as_str() {
        "restaurant" => restaurant(),
        "retail" => retail(),
        "consulting" => consulting(),
        "fitness" => fitness(),
        _ => generic(&tag),
    }
}

fn restaurant() -> IndustryContent {
    IndustryContent {
        industry: "restaurant".to_string(),
        hero: HeroContent {
            headline: "Seasonal dishes, made from scratch".to_string(),
            subheadline: "Local ingredients, a changing menu, and a table that feels like home."
                .to_string(),
            cta_label: "Reserve a table".to_string(),
        },
        about: "We started with a small kitchen and a short menu. Years later the menu is \
                still short, because everything on it is cooked the slow way, from whatever \
                the market had that morning."
            .to_string(),
        services: vec![
            ServiceItem {
                title: "Dinner service".to_string(),
                description: "A focused menu of seasonal plates, changing weekly.".to_string(),
            },
            ServiceItem {
                title: "Private events".to_string(),
                description: "The back room seats twenty for birthdays and rehearsal dinners."
                    .to_string(),
            },
            ServiceItem {
                title: "Catering".to_string(),
                description: "Family-style trays delivered for gatherings of ten or more."
                    .to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                quote: "The tasting menu was the best meal we had all year.".to_string(),
                author: "Dana R.".to_string(),
            },
            Testimonial {
                quote: "Booked the back room for my parents' anniversary. Flawless night."
                    .to_string(),
                author: "Marcus T.".to_string(),
            },
        ],
        gallery_captions: vec![
            "The dining room at dusk".to_string(),
            "Hand-rolled pasta, every morning".to_string(),
            "Our chef at the pass".to_string(),
        ],
        contact_prompt: "Questions about reservations or private events? Send us a note."
            .to_string(),
    }
}

fn retail() -> IndustryContent {
    IndustryContent {
        industry: "retail".to_string(),
        hero: HeroContent {
            headline: "Goods worth keeping".to_string(),
            subheadline: "A small shop with a considered selection, restocked every week."
                .to_string(),
            cta_label: "Browse the collection".to_string(),
        },
        about: "Every item on our shelves was chosen by someone who uses it. We keep the \
                selection small so the quality stays high."
            .to_string(),
        services: vec![
            ServiceItem {
                title: "In-store shopping".to_string(),
                description: "Open seven days a week in the heart of the old town.".to_string(),
            },
            ServiceItem {
                title: "Gift wrapping".to_string(),
                description: "Complimentary wrapping on every purchase, all year.".to_string(),
            },
            ServiceItem {
                title: "Special orders".to_string(),
                description: "Can't find it? We'll track it down from our suppliers.".to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                quote: "My first stop for gifts. They always know what I'm looking for."
                    .to_string(),
                author: "Priya S.".to_string(),
            },
            Testimonial {
                quote: "The kind of shop you hope survives forever.".to_string(),
                author: "Jon W.".to_string(),
            },
        ],
        gallery_captions: vec![
            "The front window, changed monthly".to_string(),
            "New arrivals on the center table".to_string(),
            "Our ceramics wall".to_string(),
        ],
        contact_prompt: "Looking for something specific? Ask and we'll check the stockroom."
            .to_string(),
    }
}

fn consulting() -> IndustryContent {
    IndustryContent {
        industry: "consulting".to_string(),
        hero: HeroContent {
            headline: "Clear advice, delivered plainly".to_string(),
            subheadline: "We help teams untangle hard problems and ship the fix.".to_string(),
            cta_label: "Book a consultation".to_string(),
        },
        about: "We are a small practice by choice. Every engagement is led by a partner, \
                scoped in writing, and finished on the date we agreed."
            .to_string(),
        services: vec![
            ServiceItem {
                title: "Strategy reviews".to_string(),
                description: "A two-week assessment with findings you can act on.".to_string(),
            },
            ServiceItem {
                title: "Implementation support".to_string(),
                description: "Hands-on help from planning through rollout.".to_string(),
            },
            ServiceItem {
                title: "Workshops".to_string(),
                description: "Half-day sessions that leave your team with a working plan."
                    .to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                quote: "They told us what we needed to hear, not what we wanted to.".to_string(),
                author: "COO, logistics firm".to_string(),
            },
            Testimonial {
                quote: "The only consultants we've re-hired three times.".to_string(),
                author: "Founder, med-tech startup".to_string(),
            },
        ],
        gallery_captions: vec![
            "Workshop day with a client team".to_string(),
            "Our whiteboard, mid-engagement".to_string(),
            "The partners".to_string(),
        ],
        contact_prompt: "Tell us about the problem. First conversation is on us.".to_string(),
    }
}

fn fitness() -> IndustryContent {
    IndustryContent {
        industry: "fitness".to_string(),
        hero: HeroContent {
            headline: "Stronger every week".to_string(),
            subheadline: "Coaching, classes, and a community that shows up.".to_string(),
            cta_label: "Start your free week".to_string(),
        },
        about: "No mirrors, no judgment, no contracts with fine print. Just good coaching \
                and a room full of people working on the same thing you are."
            .to_string(),
        services: vec![
            ServiceItem {
                title: "Group classes".to_string(),
                description: "Strength and conditioning, six days a week, all levels."
                    .to_string(),
            },
            ServiceItem {
                title: "Personal training".to_string(),
                description: "One-on-one programming built around your goals.".to_string(),
            },
            ServiceItem {
                title: "Open gym".to_string(),
                description: "Full racks and platforms, open early and late.".to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                quote: "Two years in and I still look forward to every session.".to_string(),
                author: "Alex G.".to_string(),
            },
            Testimonial {
                quote: "The coaches remember your name and your numbers.".to_string(),
                author: "Sam K.".to_string(),
            },
        ],
        gallery_captions: vec![
            "Saturday morning class".to_string(),
            "The lifting floor".to_string(),
            "Community open day".to_string(),
        ],
        contact_prompt: "Want a tour? Drop us a line and come by.".to_string(),
    }
}

fn generic(tag: &str) -> IndustryContent {
    let industry = if tag.is_empty() { "general".to_string() } else { tag.to_string() };
    IndustryContent {
        industry,
        hero: HeroContent {
            headline: "Welcome".to_string(),
            subheadline: "Quality work, honest service, and a team that cares.".to_string(),
            cta_label: "Get in touch".to_string(),
        },
        about: "We are a local business built on doing the basics well: showing up on time, \
                doing what we said, and standing behind the result."
            .to_string(),
        services: vec![
            ServiceItem {
                title: "Our services".to_string(),
                description: "A full range of services tailored to what you need.".to_string(),
            },
            ServiceItem {
                title: "Consultations".to_string(),
                description: "Free, no-obligation consultations to scope your project."
                    .to_string(),
            },
            ServiceItem {
                title: "Ongoing support".to_string(),
                description: "We stay available long after the first job is done.".to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                quote: "Professional from the first call to the final invoice.".to_string(),
                author: "A happy customer".to_string(),
            },
            Testimonial {
                quote: "Reliable, fair, and easy to work with.".to_string(),
                author: "A returning client".to_string(),
            },
        ],
        gallery_captions: vec![
            "Our team at work".to_string(),
            "A recent project".to_string(),
            "Behind the scenes".to_string(),
        ],
        contact_prompt: "Have a question? We'd love to hear from you.".to_string(),
    }
}
