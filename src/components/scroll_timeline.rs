use yew::prelude::*;

use crate::motion::scroll_progress::{phase_for, use_scroll_progress, THREE_PHASES};

struct Phase {
    label: &'static str,
    title: &'static str,
    body: &'static str,
}

const PHASES: [Phase; 3] = [
    Phase {
        label: "01",
        title: "Describe who you need",
        body: "Write your ideal candidate profile in plain language. Hirewire turns it into a search across every source you connect.",
    },
    Phase {
        label: "02",
        title: "Review a ranked shortlist",
        body: "Candidates arrive scored against your profile with the reasons spelled out, so screening takes minutes instead of afternoons.",
    },
    Phase {
        label: "03",
        title: "Reach out at scale",
        body: "Personalised sequences go out on your behalf and replies land straight in your pipeline.",
    },
];

/// Tall section whose sticky panel steps through the workflow as the
/// visitor scrolls.
#[function_component(ScrollTimeline)]
pub fn scroll_timeline() -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone());
    let active = phase_for(progress, &THREE_PHASES).min(PHASES.len() - 1);

    html! {
        <section class="timeline-section" ref={node}>
            <div class="timeline-sticky">
                <div class="timeline-track">
                    <div class="timeline-fill" style={format!("transform: scaleY({:.4});", progress)}></div>
                </div>
                <ol class="timeline-steps">
                    {
                        PHASES.iter().enumerate().map(|(i, phase)| {
                            let state = if i == active {
                                "active"
                            } else if i < active {
                                "done"
                            } else {
                                "upcoming"
                            };
                            html! {
                                <li key={phase.label} class={classes!("timeline-step", state)}>
                                    <span class="timeline-label">{ phase.label }</span>
                                    <div>
                                        <h3>{ phase.title }</h3>
                                        <p>{ phase.body }</p>
                                    </div>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ol>
            </div>
            <style>
                {r#"
                .timeline-section {
                    position: relative;
                    height: 200vh;
                }
                .timeline-sticky {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 3rem;
                    padding: 0 2rem;
                }
                .timeline-track {
                    width: 4px;
                    height: 60vh;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 2px;
                    overflow: hidden;
                }
                .timeline-fill {
                    width: 100%;
                    height: 100%;
                    background: #7EB2FF;
                    transform-origin: top;
                }
                .timeline-steps {
                    list-style: none;
                    max-width: 560px;
                    padding: 0;
                }
                .timeline-step {
                    display: flex;
                    gap: 1.5rem;
                    margin-bottom: 2.5rem;
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }
                .timeline-step.upcoming { opacity: 0.25; }
                .timeline-step.done { opacity: 0.5; }
                .timeline-step.active { opacity: 1; transform: translateX(8px); }
                .timeline-label {
                    font-family: monospace;
                    color: #7EB2FF;
                    font-size: 1.2rem;
                }
                .timeline-step p { color: #999; }
                "#}
            </style>
        </section>
    }
}
