use yew::prelude::*;
use yew_router::components::Link;

use crate::cms::loader::{related, use_post, use_posts};
use crate::cms::models::ContentBlock;
use crate::cta::DemoButton;
use crate::pages::blog::{AuthorBadge, PostCard};
use crate::Route;

fn render_block(block: &ContentBlock) -> Html {
    match block {
        ContentBlock::Heading { level, text } => match level {
            1 | 2 => html! { <h2>{ text.clone() }</h2> },
            3 => html! { <h3>{ text.clone() }</h3> },
            _ => html! { <h4>{ text.clone() }</h4> },
        },
        ContentBlock::Paragraph { text } => html! { <p>{ text.clone() }</p> },
        ContentBlock::Quote { text, cite } => html! {
            <blockquote>
                { text.clone() }
                {
                    match cite {
                        Some(cite) => html! { <cite>{ format!("— {}", cite) }</cite> },
                        None => html! {},
                    }
                }
            </blockquote>
        },
        ContentBlock::List { items, ordered } => {
            let items = items.iter().map(|i| html! { <li>{ i.clone() }</li> }).collect::<Html>();
            if *ordered {
                html! { <ol>{ items }</ol> }
            } else {
                html! { <ul>{ items }</ul> }
            }
        }
        ContentBlock::Image { url, alt } => html! {
            <img src={url.clone()} alt={alt.clone()} loading="lazy" class="blog-image" />
        },
        ContentBlock::Code { code, language } => html! {
            <pre class={classes!("blog-code", language.clone())}><code>{ code.clone() }</code></pre>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let post = use_post(props.slug.clone());
    let pool = use_posts();

    // Scroll to top whenever the article changes
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }

    let Some(post) = post else {
        return html! {
            <div class="blog-page">
                <section class="blog-hero skeleton"></section>
            </div>
        };
    };

    let related_posts = pool
        .as_deref()
        .map(|pool| related(&post, pool).into_iter().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    let author_name = post.author.as_ref().map(|a| AttrValue::from(a.name.clone()));

    html! {
        <div class="blog-page">
            <div class="blog-background"></div>
            <section class="blog-hero">
                <Link<Route> to={Route::Blog} classes="blog-back">{"← All posts"}</Link<Route>>
                <h1>{ post.title.clone() }</h1>
                <p>{ post.excerpt.clone() }</p>
                <div class="blog-meta">
                    <AuthorBadge author={post.author.clone()} />
                    <span class="blog-date">
                        { format!("{} · {} min read", post.published_label(), post.reading_time()) }
                    </span>
                </div>
                {
                    match post.main_image.as_ref() {
                        Some(url) => html! { <img src={url.clone()} alt={post.title.clone()} loading="lazy" class="blog-image" /> },
                        None => html! {},
                    }
                }
            </section>
            <section class="blog-content">
                { for post.body.iter().map(render_block) }
            </section>
            <section class="blog-cta">
                <h2>{"See how this works for your team"}</h2>
                <DemoButton author={author_name} content_id={AttrValue::from(post.slug.clone())} />
            </section>
            {
                if related_posts.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="blog-related">
                            <h2>{"Keep reading"}</h2>
                            {
                                for related_posts.into_iter().map(|p| {
                                    let key = p.id.clone();
                                    html! { <PostCard {key} post={p} /> }
                                })
                            }
                        </section>
                    }
                }
            }
            <style>
                {r#"
                .blog-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                }
                .blog-background {
                    position: fixed;
                    inset: 0;
                    background: radial-gradient(circle at 80% 10%, rgba(30, 144, 255, 0.12), transparent 60%);
                    z-index: -2;
                    pointer-events: none;
                }
                .blog-hero {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem 2rem;
                }
                .blog-hero.skeleton { height: 320px; opacity: 0.3; }
                .blog-hero h1 {
                    font-size: 3rem;
                    margin: 1rem 0;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .blog-hero p { color: #999; font-size: 1.2rem; }
                .blog-back { color: #7EB2FF; text-decoration: none; }
                .blog-image { width: 100%; border-radius: 12px; margin: 2rem 0; }
                .blog-content {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 0 2rem 2rem;
                    line-height: 1.8;
                    color: #ddd;
                }
                .blog-content h2 { margin-top: 2.5rem; color: #fff; }
                .blog-content blockquote {
                    border-left: 3px solid #7EB2FF;
                    padding-left: 1.25rem;
                    color: #bbb;
                    font-style: italic;
                }
                .blog-content cite { display: block; margin-top: 0.5rem; color: #777; }
                .blog-code {
                    background: rgba(0, 0, 0, 0.4);
                    padding: 1rem;
                    border-radius: 8px;
                    overflow-x: auto;
                }
                .blog-cta {
                    text-align: center;
                    padding: 3rem 2rem;
                }
                .blog-related {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem 2rem 6rem;
                }
                "#}
            </style>
        </div>
    }
}
