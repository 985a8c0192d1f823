use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

const WORDS_PER_MINUTE: usize = 200;

// The CMS sends explicit nulls for empty optional fields.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Up to two initials for a placeholder avatar.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

impl Author {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentBlock {
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Quote {
        text: String,
        #[serde(default)]
        cite: Option<String>,
    },
    List {
        items: Vec<String>,
        #[serde(default)]
        ordered: bool,
    },
    Image {
        url: String,
        #[serde(default, deserialize_with = "nullable")]
        alt: String,
    },
    Code {
        code: String,
        #[serde(default)]
        language: Option<String>,
    },
}

fn default_heading_level() -> u8 {
    2
}

impl ContentBlock {
    fn word_count(&self) -> usize {
        let words = |s: &str| s.split_whitespace().count();
        match self {
            ContentBlock::Heading { text, .. }
            | ContentBlock::Paragraph { text }
            | ContentBlock::Quote { text, .. } => words(text),
            ContentBlock::List { items, .. } => items.iter().map(|i| words(i)).sum(),
            ContentBlock::Image { .. } | ContentBlock::Code { .. } => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "nullable")]
    pub body: Vec<ContentBlock>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "nullable")]
    pub categories: Vec<Category>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub reading_time_minutes: Option<u32>,
    #[serde(default)]
    pub main_image: Option<String>,
}

impl Post {
    pub fn word_count(&self) -> usize {
        self.body.iter().map(ContentBlock::word_count).sum()
    }

    /// Minutes to read, estimated from the body when the CMS has none.
    pub fn reading_time(&self) -> u32 {
        self.reading_time_minutes.unwrap_or_else(|| {
            let words = self.word_count();
            (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u32
        })
    }

    pub fn published_label(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }

    pub fn in_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_JSON: &str = r#"{
        "_id": "p1",
        "title": "Sourcing senior engineers",
        "slug": "sourcing-senior-engineers",
        "excerpt": null,
        "body": [
            {"kind": "heading", "text": "Why it is hard"},
            {"kind": "paragraph", "text": "one two three four"},
            {"kind": "list", "items": ["a b", "c"], "ordered": true},
            {"kind": "image", "url": "/img.png", "alt": null}
        ],
        "author": {"name": "ada lovelace", "role": null, "imageUrl": null},
        "categories": null,
        "publishedAt": "2025-03-04T09:00:00Z"
    }"#;

    #[test]
    fn tolerates_nulls_from_cms() {
        let post: Post = serde_json::from_str(POST_JSON).unwrap();
        assert_eq!(post.excerpt, "");
        assert!(post.categories.is_empty());
        assert_eq!(post.body.len(), 4);
        assert_eq!(
            post.body[0],
            ContentBlock::Heading { level: 2, text: "Why it is hard".into() }
        );
        assert_eq!(post.reading_time_minutes, None);
    }

    #[test]
    fn estimates_reading_time() {
        let mut post: Post = serde_json::from_str(POST_JSON).unwrap();
        assert_eq!(post.word_count(), 4 + 4 + 3);
        assert_eq!(post.reading_time(), 1);

        post.body = vec![ContentBlock::Paragraph { text: "word ".repeat(401) }];
        assert_eq!(post.reading_time(), 3);

        post.reading_time_minutes = Some(7);
        assert_eq!(post.reading_time(), 7);
    }

    #[test]
    fn formats_publish_date() {
        let post: Post = serde_json::from_str(POST_JSON).unwrap();
        assert_eq!(post.published_label(), "March 4, 2025");
    }

    #[test]
    fn initials_for_placeholder_avatar() {
        let author = Author { name: "ada lovelace byron".into(), role: None, image_url: None };
        assert_eq!(author.initials(), "AL");
        let author = Author { name: "Cher".into(), role: None, image_url: None };
        assert_eq!(author.initials(), "C");
    }
}
