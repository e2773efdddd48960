//! Fixed sample content written to empty collections on first use.

use crate::types::{Category, PostDraft, ProjectDraft};

/// The categories the sample posts are tagged with.
pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Web Development", "web-development"),
        Category::new("2", "Digital Marketing", "digital-marketing"),
        Category::new("3", "Design", "design"),
    ]
}

/// Sample blog posts for a fresh site.
pub fn sample_posts() -> Vec<PostDraft> {
    let categories = sample_categories();
    let web = categories[0].clone();
    let marketing = categories[1].clone();
    let design = categories[2].clone();

    vec![
        PostDraft::new(
            "Why Your Business Needs a Modern Website",
            "First impressions happen online. A fast, responsive website is \
             the storefront most customers see before they ever talk to you, \
             and an outdated one quietly turns them away.",
        )
        .with_categories(vec![web.clone()]),
        PostDraft::new(
            "Five Web Design Trends Worth Adopting",
            "Not every trend deserves a place in your design system. We look \
             at five that actually improve usability, from generous white \
             space to restrained motion.",
        )
        .with_categories(vec![design.clone(), web.clone()]),
        PostDraft::new(
            "Getting Started with Search Engine Optimization",
            "SEO is not magic. It is structured content, sensible markup, \
             and patience. This guide covers the fundamentals every site \
             owner should know.",
        )
        .with_categories(vec![marketing.clone()]),
        PostDraft::new(
            "Building a Brand Identity That Lasts",
            "Logos change, palettes drift, but a coherent identity outlives \
             both. How to define the voice and visual language your brand \
             can grow into.",
        )
        .with_categories(vec![design, marketing.clone()]),
        PostDraft::new(
            "Email Campaigns People Actually Open",
            "The average inbox is a battlefield. Subject lines, send times, \
             and segmentation decide whether your campaign gets read or \
             archived unseen.",
        )
        .with_categories(vec![marketing]),
        PostDraft::new(
            "Choosing the Right Stack for a Small Business Site",
            "You do not need a microservice fleet to sell flowers online. \
             Matching the stack to the size of the problem keeps costs down \
             and maintenance simple.",
        )
        .with_categories(vec![web]),
    ]
}

/// Sample portfolio projects for a fresh site.
pub fn sample_projects() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft {
            title: "Artisan Bakery Storefront".into(),
            description: "E-commerce site with same-day ordering for a \
                          neighborhood bakery."
                .into(),
            image: "/images/projects/bakery.jpg".into(),
            link: "https://example.com/bakery".into(),
            tags: vec!["e-commerce".into(), "web".into()],
        },
        ProjectDraft {
            title: "Harbor Legal Group".into(),
            description: "Brochure site and content strategy for a regional \
                          law firm."
                .into(),
            image: "/images/projects/harbor-legal.jpg".into(),
            link: "https://example.com/harbor-legal".into(),
            tags: vec!["branding".into(), "content".into()],
        },
        ProjectDraft {
            title: "Meridian Fitness App Landing".into(),
            description: "Launch page with A/B-tested signup flows for a \
                          fitness startup."
                .into(),
            image: "/images/projects/meridian.jpg".into(),
            link: "https://example.com/meridian".into(),
            tags: vec!["landing-page".into(), "marketing".into()],
        },
        ProjectDraft {
            title: "Northside Dental Rebrand".into(),
            description: "Full visual identity refresh, from logo to \
                          appointment reminders."
                .into(),
            image: "/images/projects/northside.jpg".into(),
            link: "https://example.com/northside".into(),
            tags: vec!["branding".into(), "design".into()],
        },
        ProjectDraft {
            title: "Open Shelf Library Catalog".into(),
            description: "Searchable public catalog for an independent \
                          lending library."
                .into(),
            image: "/images/projects/open-shelf.jpg".into(),
            link: "https://example.com/open-shelf".into(),
            tags: vec!["web".into(), "search".into()],
        },
        ProjectDraft {
            title: "Terrace Rooftop Dining".into(),
            description: "Menu, reservations, and event booking for a \
                          rooftop restaurant."
                .into(),
            image: "/images/projects/terrace.jpg".into(),
            link: "https://example.com/terrace".into(),
            tags: vec!["web".into(), "e-commerce".into()],
        },
    ]
}
