//! Built-in posts shown whenever the CMS is empty or unreachable.

use chrono::{DateTime, Utc};

use crate::cms::models::{Author, Category, ContentBlock, Post};

fn date(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap_or_default()
}

fn author(name: &str, role: &str) -> Option<Author> {
    Some(Author {
        name: name.to_string(),
        role: Some(role.to_string()),
        image_url: None,
    })
}

fn category(title: &str, slug: &str) -> Category {
    Category {
        title: title.to_string(),
        slug: slug.to_string(),
    }
}

fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::Paragraph {
        text: text.to_string(),
    }
}

fn heading(text: &str) -> ContentBlock {
    ContentBlock::Heading {
        level: 2,
        text: text.to_string(),
    }
}

struct Seed {
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    author: (&'static str, &'static str),
    category: (&'static str, &'static str),
    published_at: &'static str,
    reading_time: u32,
}

const SEEDS: [Seed; 6] = [
    Seed {
        slug: "define-your-icp-before-you-source",
        title: "Define Your ICP Before You Source a Single Candidate",
        excerpt: "A sharp ideal candidate profile turns sourcing from guesswork into a repeatable process.",
        author: ("Maya Lindqvist", "Head of Talent"),
        category: ("Sourcing", "sourcing"),
        published_at: "2025-05-14T08:00:00Z",
        reading_time: 6,
    },
    Seed {
        slug: "automating-outreach-without-sounding-like-a-bot",
        title: "Automating Outreach Without Sounding Like a Bot",
        excerpt: "Personalisation at scale is a data problem, not a copywriting problem.",
        author: ("Jonas Berg", "Product Lead"),
        category: ("Automation", "automation"),
        published_at: "2025-04-29T08:00:00Z",
        reading_time: 5,
    },
    Seed {
        slug: "recruiter-time-audit",
        title: "Where Does a Recruiter's Week Actually Go?",
        excerpt: "We tracked 40 recruiters for a month. Manual screening ate more time than anyone guessed.",
        author: ("Maya Lindqvist", "Head of Talent"),
        category: ("Research", "research"),
        published_at: "2025-04-10T08:00:00Z",
        reading_time: 8,
    },
    Seed {
        slug: "prompts-for-boolean-search",
        title: "Ten Prompts That Replace Your Boolean Search Strings",
        excerpt: "Natural-language search finds the candidates your keyword filters were silently dropping.",
        author: ("Amir Haddad", "Solutions Engineer"),
        category: ("Automation", "automation"),
        published_at: "2025-03-21T08:00:00Z",
        reading_time: 4,
    },
    Seed {
        slug: "ats-vs-sourcing-platform",
        title: "Your ATS Is Not a Sourcing Platform",
        excerpt: "Applicant tracking keeps records. Sourcing finds people. Mixing the two costs you both.",
        author: ("Jonas Berg", "Product Lead"),
        category: ("Strategy", "strategy"),
        published_at: "2025-03-04T08:00:00Z",
        reading_time: 7,
    },
    Seed {
        slug: "measuring-time-to-shortlist",
        title: "Measuring Time-to-Shortlist, the Metric Nobody Tracks",
        excerpt: "Time-to-hire hides the slowest part of the funnel. Here is how to measure it.",
        author: ("Amir Haddad", "Solutions Engineer"),
        category: ("Research", "research"),
        published_at: "2025-02-17T08:00:00Z",
        reading_time: 5,
    },
];

fn body_for(title: &str, excerpt: &str) -> Vec<ContentBlock> {
    vec![
        paragraph(excerpt),
        heading("The problem"),
        paragraph(&format!(
            "Most hiring teams we talk to recognise the pattern behind \"{}\": hours spent on work that \
             a well-configured pipeline could do in minutes.",
            title
        )),
        ContentBlock::List {
            items: vec![
                "Write the profile down before opening a search".to_string(),
                "Let automation handle the first pass".to_string(),
                "Spend recruiter time on conversations, not spreadsheets".to_string(),
            ],
            ordered: false,
        },
        heading("What to do next"),
        paragraph("Book a short walkthrough and we will map your current process against an automated one."),
    ]
}

fn from_seed(seed: &Seed) -> Post {
    Post {
        id: format!("fallback-{}", seed.slug),
        title: seed.title.to_string(),
        slug: seed.slug.to_string(),
        excerpt: seed.excerpt.to_string(),
        body: body_for(seed.title, seed.excerpt),
        author: author(seed.author.0, seed.author.1),
        categories: vec![category(seed.category.0, seed.category.1)],
        published_at: date(seed.published_at),
        reading_time_minutes: Some(seed.reading_time),
        main_image: None,
    }
}

pub fn fallback_posts() -> Vec<Post> {
    SEEDS.iter().map(from_seed).collect()
}

/// Single-post stand-in: the matching fallback post, or a generic demo
/// article published under the requested slug.
pub fn demo_post(slug: &str) -> Post {
    if let Some(seed) = SEEDS.iter().find(|s| s.slug == slug) {
        return from_seed(seed);
    }
    let title = "How Hiring Teams Reclaim 35 Hours a Week";
    let excerpt = "A walkthrough of the workflow our customers use to automate sourcing and screening.";
    Post {
        id: format!("demo-{}", slug),
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: excerpt.to_string(),
        body: body_for(title, excerpt),
        author: author("The Hirewire Team", "Editorial"),
        categories: vec![category("Automation", "automation")],
        published_at: date("2025-01-06T08:00:00Z"),
        reading_time_minutes: None,
        main_image: None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn six_distinct_posts_newest_first() {
        let posts = fallback_posts();
        assert_eq!(posts.len(), 6);
        assert!(posts.windows(2).all(|w| w[0].published_at > w[1].published_at));
        let slugs: HashSet<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), 6);
    }

    #[test]
    fn demo_post_reuses_known_slug() {
        let post = demo_post("recruiter-time-audit");
        assert_eq!(post.title, "Where Does a Recruiter's Week Actually Go?");
    }

    #[test]
    fn demo_post_keeps_unknown_slug() {
        let post = demo_post("unknown-slug");
        assert_eq!(post.slug, "unknown-slug");
        assert!(!post.body.is_empty());
        assert!(post.reading_time() >= 1);
    }
}
