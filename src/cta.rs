use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;

fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Campaign name derived from the page path, `home` for the root.
pub fn campaign_for_path(pathname: &str) -> String {
    let slug = slugify(pathname);
    if slug.is_empty() {
        "home".to_string()
    } else {
        slug
    }
}

/// Scheduling link decorated with campaign parameters. Same inputs, same URL.
pub fn scheduling_url(
    pathname: &str,
    author: Option<&str>,
    campaign: Option<&str>,
    content_id: Option<&str>,
) -> String {
    let medium = if pathname == "/blog" || pathname.starts_with("/blog/") {
        "blog"
    } else {
        "website"
    };
    let campaign = campaign
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| campaign_for_path(pathname));

    let mut params = vec![
        ("utm_source", "website".to_string()),
        ("utm_medium", medium.to_string()),
        ("utm_campaign", campaign),
    ];
    if let Some(content_id) = content_id.filter(|c| !c.is_empty()) {
        params.push(("utm_content", content_id.to_string()));
    }
    if let Some(author) = author.map(slugify).filter(|a| !a.is_empty()) {
        params.push(("utm_term", author));
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", config::SCHEDULING_URL, query)
}

#[derive(Properties, PartialEq)]
pub struct DemoButtonProps {
    #[prop_or(AttrValue::Static("Book a demo"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub content_id: Option<AttrValue>,
    #[prop_or_default]
    pub campaign: Option<AttrValue>,
    #[prop_or_default]
    pub author: Option<AttrValue>,
    #[prop_or(classes!("hero-cta"))]
    pub class: Classes,
}

/// Opens the scheduling page in a new tab, tagged with where the click came from.
#[function_component(DemoButton)]
pub fn demo_button(props: &DemoButtonProps) -> Html {
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    let href = scheduling_url(
        &pathname,
        props.author.as_deref(),
        props.campaign.as_deref(),
        props.content_id.as_deref(),
    );

    html! {
        <a href={href} target="_blank" rel="noopener noreferrer" class={props.class.clone()}>
            { props.label.clone() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_home_campaign() {
        assert_eq!(
            scheduling_url("/", None, None, None),
            format!(
                "{}?utm_source=website&utm_medium=website&utm_campaign=home",
                config::SCHEDULING_URL
            )
        );
    }

    #[test]
    fn blog_post_link_is_fully_tagged() {
        let url = scheduling_url(
            "/blog/ats-vs-sourcing-platform",
            Some("Jonas Berg"),
            None,
            Some("post-footer"),
        );
        assert!(url.ends_with(
            "?utm_source=website&utm_medium=blog&utm_campaign=blog-ats-vs-sourcing-platform\
             &utm_content=post-footer&utm_term=jonas-berg"
        ));
    }

    #[test]
    fn campaign_override_is_encoded() {
        let url = scheduling_url("/compare", None, Some("spring launch"), None);
        assert!(url.contains("utm_campaign=spring%20launch"));
        let blank = scheduling_url("/compare", None, Some("  "), None);
        assert!(blank.contains("utm_campaign=compare"));
    }

    #[test]
    fn deterministic() {
        let a = scheduling_url("/roi-calculator", None, None, Some("result"));
        let b = scheduling_url("/roi-calculator", None, None, Some("result"));
        assert_eq!(a, b);
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("/blog//Some Post/"), "blog-some-post");
        assert_eq!(campaign_for_path(""), "home");
    }
}
