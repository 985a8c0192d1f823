use yew::prelude::*;
use yew_router::components::Link;

use crate::cms::loader::{categories, filter_by_category, use_posts};
use crate::cms::models::{Author, Post};
use crate::motion::reveal::{Reveal, RevealVariant};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AuthorBadgeProps {
    pub author: Option<Author>,
}

/// Author photo, or an initials bubble when the CMS has no image.
#[function_component(AuthorBadge)]
pub fn author_badge(props: &AuthorBadgeProps) -> Html {
    let Some(author) = props.author.as_ref() else {
        return html! {};
    };
    html! {
        <span class="author-badge">
            {
                match author.image_url.as_ref() {
                    Some(url) => html! { <img class="author-avatar" src={url.clone()} alt={author.name.clone()} loading="lazy" /> },
                    None => html! { <span class="author-avatar placeholder">{ author.initials() }</span> },
                }
            }
            <span class="author-name">{ author.name.clone() }</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    html! {
        <Reveal variant={RevealVariant::SlideUp} delay_ms={props.delay_ms}>
            <div class="blog-post-preview">
                <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }}>
                    {
                        match post.main_image.as_ref() {
                            Some(url) => html! { <img src={url.clone()} alt={post.title.clone()} loading="lazy" class="blog-preview-image" /> },
                            None => html! { <div class="blog-preview-image placeholder"></div> },
                        }
                    }
                    <div class="blog-preview-body">
                        <div class="blog-tags">
                            { for post.categories.iter().map(|c| html! { <span class="blog-tag">{ c.title.clone() }</span> }) }
                        </div>
                        <h2>{ post.title.clone() }</h2>
                        <p>{ post.excerpt.clone() }</p>
                        <div class="blog-meta">
                            <AuthorBadge author={post.author.clone()} />
                            <span class="blog-date">
                                { format!("{} · {} min read", post.published_label(), post.reading_time()) }
                            </span>
                        </div>
                    </div>
                </Link<Route>>
            </div>
        </Reveal>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let posts = use_posts();
    let selected = use_state(|| None::<String>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let body = match posts.as_ref() {
        None => html! {
            <div class="blog-loading">
                { for (0..3).map(|_| html! { <div class="blog-post-preview skeleton"></div> }) }
            </div>
        },
        Some(posts) => {
            let chip = |label: String, value: Option<String>| {
                let onclick = {
                    let selected = selected.clone();
                    let value = value.clone();
                    Callback::from(move |_: MouseEvent| selected.set(value.clone()))
                };
                html! {
                    <button class={classes!("blog-chip", (*selected == value).then(|| "selected"))} {onclick}>
                        { label }
                    </button>
                }
            };
            html! {
                <>
                    <div class="blog-chips">
                        { chip("All".to_string(), None) }
                        { for categories(posts).into_iter().map(|c| chip(c.title, Some(c.slug))) }
                    </div>
                    {
                        filter_by_category(posts, selected.as_deref()).into_iter().enumerate().map(|(i, post)| html! {
                            <PostCard key={post.id.clone()} post={post.clone()} delay_ms={(i as u32 % 3) * 80} />
                        }).collect::<Html>()
                    }
                </>
            }
        }
    };

    html! {
        <div class="blog-list-page">
            <div class="blog-list-background"></div>
            <section class="blog-list-hero">
                <h1>{"Blog"}</h1>
                <p>{"Field notes on sourcing, screening and building a hiring engine that scales"}</p>
            </section>
            <section class="blog-list-section">
                { body }
            </section>
            <style>
                {r#"
                .blog-list-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }
                .blog-list-background {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100vh;
                    background: radial-gradient(circle at 20% 20%, rgba(30, 144, 255, 0.15), transparent 60%);
                    z-index: -2;
                    pointer-events: none;
                }
                .blog-list-hero {
                    text-align: center;
                    padding: 6rem 2rem;
                    background: rgba(26, 26, 26, 0.75);
                    backdrop-filter: blur(5px);
                    margin-top: 2rem;
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    margin-bottom: 2rem;
                }
                .blog-list-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .blog-list-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto;
                }
                .blog-list-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .blog-chips { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 2rem; }
                .blog-chip {
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: #ccc;
                    padding: 0.35rem 0.9rem;
                    border-radius: 999px;
                    cursor: pointer;
                }
                .blog-chip.selected { background: #1E90FF; border-color: #1E90FF; color: #fff; }
                .blog-post-preview {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    margin-bottom: 2rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .blog-post-preview:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-5px);
                }
                .blog-post-preview a {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                }
                .blog-post-preview.skeleton { height: 220px; opacity: 0.4; }
                .blog-preview-image {
                    width: 100%;
                    height: auto;
                }
                .blog-preview-image.placeholder {
                    height: 140px;
                    background: linear-gradient(135deg, rgba(30, 144, 255, 0.25), rgba(65, 105, 225, 0.05));
                }
                .blog-preview-body { padding: 1.5rem; }
                .blog-preview-body p { color: #999; }
                .blog-tag {
                    color: #7EB2FF;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    margin-right: 0.75rem;
                }
                .blog-meta {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 1rem;
                }
                .blog-date { color: #777; font-size: 0.9rem; }
                .author-badge { display: inline-flex; align-items: center; gap: 0.6rem; }
                .author-avatar {
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .author-avatar.placeholder {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(30, 144, 255, 0.25);
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
