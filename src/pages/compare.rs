use yew::prelude::*;

use crate::cta::DemoButton;
use crate::motion::reveal::{Reveal, RevealVariant};

#[derive(Clone, Copy, PartialEq)]
enum Support {
    Full,
    Partial,
    None,
}

impl Support {
    fn mark(self) -> (&'static str, &'static str) {
        match self {
            Support::Full => ("✓", "support-full"),
            Support::Partial => ("~", "support-partial"),
            Support::None => ("—", "support-none"),
        }
    }
}

const VENDORS: [&str; 3] = ["Hirewire", "Legacy ATS", "Sourcing agency"];

const ROWS: [(&str, [Support; 3]); 7] = [
    ("Searches every source from one profile", [Support::Full, Support::None, Support::Partial]),
    ("Ranked shortlist with match reasons", [Support::Full, Support::None, Support::Partial]),
    ("Same-day match alerts", [Support::Full, Support::Partial, Support::None]),
    ("Personalised outreach sequences", [Support::Full, Support::Partial, Support::Full]),
    ("Two-way ATS sync", [Support::Full, Support::Full, Support::None]),
    ("Flat monthly pricing", [Support::Full, Support::Full, Support::None]),
    ("Live in under a week", [Support::Full, Support::None, Support::Partial]),
];

#[function_component(Compare)]
pub fn compare() -> Html {
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

    html! {
        <div class="compare-page">
            <section class="compare-hero">
                <h1>{"Hirewire vs. the Usual Options"}</h1>
                <p>{"An honest look at what you get from an ATS, an agency, and an automated sourcing platform."}</p>
            </section>
            <section class="compare-table-section">
                <div class="compare-table" role="table">
                    <div class="compare-row compare-head" role="row">
                        <span role="columnheader">{"Capability"}</span>
                        { VENDORS.iter().map(|v| html! { <span key={*v} role="columnheader">{ *v }</span> }).collect::<Html>() }
                    </div>
                    {
                        ROWS.iter().enumerate().map(|(i, (capability, support))| html! {
                            <Reveal key={*capability} variant={RevealVariant::SlideLeft} delay_ms={i as u32 * 60} threshold={0.5}>
                                <div class="compare-row" role="row">
                                    <span role="cell">{ *capability }</span>
                                    {
                                        support.iter().enumerate().map(|(j, s)| {
                                            let (mark, class) = s.mark();
                                            html! { <span key={j} role="cell" class={class}>{ mark }</span> }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <section class="compare-cta">
                <DemoButton label="See the difference live" content_id="compare-table" />
            </section>
            <style>
                {r#"
                .compare-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .compare-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }
                .compare-hero h1 { font-size: 3rem; margin-bottom: 1rem; }
                .compare-hero p { color: #999; max-width: 640px; margin: 0 auto; }
                .compare-table-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .compare-row {
                    display: grid;
                    grid-template-columns: 2fr repeat(3, 1fr);
                    padding: 1rem 1.25rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    align-items: center;
                }
                .compare-row span:not(:first-child) { text-align: center; }
                .compare-head { color: #7EB2FF; font-weight: 600; }
                .support-full { color: #2ecc71; font-size: 1.2rem; }
                .support-partial { color: #f1c40f; font-size: 1.2rem; }
                .support-none { color: #555; }
                .compare-cta { text-align: center; padding: 3rem 2rem 6rem; }
                "#}
            </style>
        </div>
    }
}
