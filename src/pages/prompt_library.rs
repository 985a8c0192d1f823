use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::cta::DemoButton;
use crate::motion::reveal::{Reveal, RevealVariant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prompt {
    pub category: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROMPTS: [Prompt; 8] = [
    Prompt {
        category: "Sourcing",
        title: "Senior backend, fintech background",
        body: "Find senior backend engineers with 5+ years in Go or Rust who have shipped payment or ledger systems at a fintech.",
    },
    Prompt {
        category: "Sourcing",
        title: "Career switchers into data",
        body: "Find analysts who moved from finance or consulting into data engineering in the last three years.",
    },
    Prompt {
        category: "Sourcing",
        title: "Remote-first designers",
        body: "Find product designers in European time zones who have led a design system at a B2B SaaS company.",
    },
    Prompt {
        category: "Screening",
        title: "Tenure red flags",
        body: "Flag candidates with three or more roles under twelve months in the last five years and summarise why.",
    },
    Prompt {
        category: "Screening",
        title: "Must-have vs nice-to-have",
        body: "Score each candidate against these must-haves first, then list which nice-to-haves they meet.",
    },
    Prompt {
        category: "Outreach",
        title: "Warm first touch",
        body: "Write a three sentence opener that references one specific project from the candidate's profile.",
    },
    Prompt {
        category: "Outreach",
        title: "Polite follow-up",
        body: "Write a short follow-up for candidates who opened but did not reply, offering a 15 minute call.",
    },
    Prompt {
        category: "Reporting",
        title: "Weekly pipeline digest",
        body: "Summarise this week's new matches, replies and interviews per open role in five bullet points.",
    },
];

pub fn categories(prompts: &[Prompt]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for prompt in prompts {
        if !seen.contains(&prompt.category) {
            seen.push(prompt.category);
        }
    }
    seen
}

/// Prompts in `category` (all when `None`) whose title or body contains
/// `query`, ignoring case.
pub fn search<'a>(prompts: &'a [Prompt], category: Option<&str>, query: &str) -> Vec<&'a Prompt> {
    let query = query.trim().to_lowercase();
    prompts
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| {
            query.is_empty()
                || p.title.to_lowercase().contains(&query)
                || p.body.to_lowercase().contains(&query)
        })
        .collect()
}

#[function_component(PromptLibrary)]
pub fn prompt_library() -> Html {
    let category = use_state(|| None::<&'static str>);
    let query = use_state(String::new);

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

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let chip = |label: &'static str, value: Option<&'static str>| {
        let onclick = {
            let category = category.clone();
            Callback::from(move |_: MouseEvent| category.set(value))
        };
        html! {
            <button key={label} class={classes!("prompt-chip", (*category == value).then(|| "selected"))} {onclick}>
                { label }
            </button>
        }
    };

    let results = search(&PROMPTS, *category, &query);

    html! {
        <div class="prompt-page">
            <section class="prompt-hero">
                <h1>{"Prompt Library"}</h1>
                <p>{"Copy-ready prompts our customers use to source, screen and reach out."}</p>
            </section>
            <section class="prompt-controls">
                <input
                    class="prompt-search"
                    type="search"
                    placeholder="Search prompts"
                    value={(*query).clone()}
                    {oninput}
                />
                <div class="prompt-chips">
                    { chip("All", None) }
                    { for categories(&PROMPTS).into_iter().map(|c| chip(c, Some(c))) }
                </div>
            </section>
            <section class="prompt-grid">
                {
                    if results.is_empty() {
                        html! { <p class="prompt-empty">{"No prompts match that search."}</p> }
                    } else {
                        results.iter().enumerate().map(|(i, prompt)| html! {
                            <Reveal key={prompt.title} variant={RevealVariant::SlideUp} delay_ms={(i as u32 % 3) * 80}>
                                <article class="prompt-card">
                                    <span class="prompt-category">{ prompt.category }</span>
                                    <h3>{ prompt.title }</h3>
                                    <p>{ prompt.body }</p>
                                </article>
                            </Reveal>
                        }).collect::<Html>()
                    }
                }
            </section>
            <section class="prompt-cta">
                <DemoButton label="Try these on your roles" content_id="prompt-library" />
            </section>
            <style>
                {r#"
                .prompt-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .prompt-hero { text-align: center; padding: 5rem 2rem 2rem; }
                .prompt-hero h1 { font-size: 3rem; margin-bottom: 1rem; }
                .prompt-hero p { color: #999; }
                .prompt-controls {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .prompt-search {
                    padding: 0.8rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    background: rgba(26, 26, 26, 0.85);
                    color: #fff;
                }
                .prompt-chips { display: flex; gap: 0.5rem; flex-wrap: wrap; }
                .prompt-chip {
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: #ccc;
                    padding: 0.35rem 0.9rem;
                    border-radius: 999px;
                    cursor: pointer;
                }
                .prompt-chip.selected { background: #1E90FF; border-color: #1E90FF; color: #fff; }
                .prompt-grid {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.25rem;
                }
                .prompt-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    height: 100%;
                }
                .prompt-category { color: #7EB2FF; font-size: 0.8rem; text-transform: uppercase; }
                .prompt-card p { color: #999; }
                .prompt-empty { color: #999; grid-column: 1 / -1; text-align: center; }
                .prompt-cta { text-align: center; padding: 2rem 2rem 6rem; }
                @media (max-width: 900px) {
                    .prompt-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_in_catalogue_order() {
        assert_eq!(categories(&PROMPTS), ["Sourcing", "Screening", "Outreach", "Reporting"]);
    }

    #[test]
    fn search_filters_by_category_and_text() {
        assert_eq!(search(&PROMPTS, None, "").len(), PROMPTS.len());
        assert_eq!(search(&PROMPTS, Some("Outreach"), "").len(), 2);

        let hits = search(&PROMPTS, None, "  FINTECH ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Senior backend, fintech background");

        assert!(search(&PROMPTS, Some("Reporting"), "fintech").is_empty());
    }
}
