use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::cms::client::{CmsClient, ContentSource};
use crate::cms::fallback::{demo_post, fallback_posts};
use crate::cms::models::{Category, Post};

pub const RELATED_LIMIT: usize = 3;

/// Fetched posts, or the built-in list when the CMS has nothing to give.
pub async fn load_posts<S: ContentSource>(source: &S) -> Vec<Post> {
    match source.posts().await {
        Ok(posts) if !posts.is_empty() => posts,
        Ok(_) => {
            info!("CMS returned no posts, showing fallback list");
            fallback_posts()
        }
        Err(e) => {
            warn!("Failed to fetch posts: {}", e);
            fallback_posts()
        }
    }
}

/// A missing post is handled like a failed fetch: the visitor gets demo
/// content, never an error page.
pub async fn load_post<S: ContentSource>(source: &S, slug: &str) -> Post {
    match source.post(slug).await {
        Ok(Some(post)) => post,
        Ok(None) => {
            info!("No post for slug {}, showing demo content", slug);
            demo_post(slug)
        }
        Err(e) => {
            warn!("Failed to fetch post {}: {}", slug, e);
            demo_post(slug)
        }
    }
}

/// Distinct categories in first-seen order.
pub fn categories(posts: &[Post]) -> Vec<Category> {
    let mut seen: Vec<Category> = Vec::new();
    for category in posts.iter().flat_map(|p| p.categories.iter()) {
        if !seen.iter().any(|c| c.slug == category.slug) {
            seen.push(category.clone());
        }
    }
    seen
}

pub fn filter_by_category<'a>(posts: &'a [Post], slug: Option<&str>) -> Vec<&'a Post> {
    match slug {
        Some(slug) => posts.iter().filter(|p| p.in_category(slug)).collect(),
        None => posts.iter().collect(),
    }
}

/// Posts sharing a category with `post`, excluding itself.
pub fn related<'a>(post: &Post, pool: &'a [Post]) -> Vec<&'a Post> {
    pool.iter()
        .filter(|other| other.slug != post.slug)
        .filter(|other| post.categories.iter().any(|c| other.in_category(&c.slug)))
        .take(RELATED_LIMIT)
        .collect()
}

/// `None` until the single fetch for this mount settles.
#[hook]
pub fn use_posts() -> Option<Vec<Post>> {
    let posts = use_state(|| None::<Vec<Post>>);

    {
        let posts = posts.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let loaded = load_posts(&CmsClient::default()).await;
                    posts.set(Some(loaded));
                });
                || ()
            },
            (),
        );
    }

    (*posts).clone()
}

/// The loaded post, but only if it was requested for `slug`.
fn post_for<'a>(loaded: &'a Option<(String, Post)>, slug: &str) -> Option<&'a Post> {
    loaded
        .as_ref()
        .filter(|(requested, _)| requested == slug)
        .map(|(_, post)| post)
}

/// `None` while the post for the current `slug` is loading. A fetch started
/// for an earlier slug never lands once the slug has changed.
#[hook]
pub fn use_post(slug: String) -> Option<Post> {
    let loaded = use_state(|| None::<(String, Post)>);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |slug| {
                let cancelled = Rc::new(Cell::new(false));
                let slug = slug.clone();
                {
                    let cancelled = cancelled.clone();
                    spawn_local(async move {
                        let post = load_post(&CmsClient::default(), &slug).await;
                        if cancelled.get() {
                            debug!("Dropping stale post for {}", slug);
                            return;
                        }
                        loaded.set(Some((slug, post)));
                    });
                }
                move || cancelled.set(true)
            },
            slug.clone(),
        );
    }

    post_for(&loaded, &slug).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::client::CmsError;
    use futures::executor::block_on;

    enum Fake {
        Posts(Vec<Post>),
        Missing,
        Broken,
    }

    impl ContentSource for Fake {
        async fn posts(&self) -> Result<Vec<Post>, CmsError> {
            match self {
                Fake::Posts(posts) => Ok(posts.clone()),
                Fake::Missing => Ok(Vec::new()),
                Fake::Broken => Err(CmsError::Network("connection reset".into())),
            }
        }

        async fn post(&self, slug: &str) -> Result<Option<Post>, CmsError> {
            match self {
                Fake::Posts(posts) => Ok(posts.iter().find(|p| p.slug == slug).cloned()),
                Fake::Missing => Ok(None),
                Fake::Broken => Err(CmsError::Status(503)),
            }
        }
    }

    fn cms_post(slug: &str) -> Post {
        Post {
            id: format!("cms-{}", slug),
            slug: slug.to_string(),
            title: "From the CMS".to_string(),
            ..demo_post(slug)
        }
    }

    #[test]
    fn fetched_posts_win() {
        let posts = block_on(load_posts(&Fake::Posts(vec![cms_post("a")])));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "cms-a");
    }

    #[test]
    fn empty_listing_uses_fallback() {
        let posts = block_on(load_posts(&Fake::Missing));
        assert_eq!(posts, fallback_posts());
        assert_eq!(posts.len(), 6);
    }

    #[test]
    fn failing_listing_matches_empty_listing() {
        assert_eq!(block_on(load_posts(&Fake::Broken)), block_on(load_posts(&Fake::Missing)));
    }

    #[test]
    fn unknown_slug_renders_demo_content() {
        let post = block_on(load_post(&Fake::Missing, "unknown-slug"));
        assert_eq!(post, demo_post("unknown-slug"));
        assert_eq!(post.slug, "unknown-slug");

        let post = block_on(load_post(&Fake::Broken, "unknown-slug"));
        assert_eq!(post, demo_post("unknown-slug"));
    }

    #[test]
    fn found_slug_uses_cms_post() {
        let post = block_on(load_post(&Fake::Posts(vec![cms_post("b")]), "b"));
        assert_eq!(post.id, "cms-b");
    }

    #[test]
    fn post_from_previous_slug_is_not_shown() {
        let loaded = Some(("a".to_string(), cms_post("a")));
        assert_eq!(post_for(&loaded, "a").map(|p| p.id.as_str()), Some("cms-a"));
        assert_eq!(post_for(&loaded, "b"), None);
        assert_eq!(post_for(&None, "a"), None);
    }

    #[test]
    fn category_helpers() {
        let posts = fallback_posts();
        let cats = categories(&posts);
        let slugs: Vec<_> = cats.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["sourcing", "automation", "research", "strategy"]);

        assert_eq!(filter_by_category(&posts, Some("research")).len(), 2);
        assert_eq!(filter_by_category(&posts, None).len(), 6);

        let audit = &posts[2];
        let rel = related(audit, &posts);
        assert_eq!(rel.len(), 1);
        assert_eq!(rel[0].slug, "measuring-time-to-shortlist");
    }
}
