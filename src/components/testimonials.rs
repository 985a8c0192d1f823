use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::cms::models::initials;

const ROTATE_MS: u32 = 6000;

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "We filled three senior backend roles in a quarter without adding a sourcer. The shortlists are just better.",
        name: "Priya Raman",
        role: "VP People, Northwind Logistics",
    },
    Testimonial {
        quote: "My recruiters stopped living in spreadsheets. Screening time dropped by more than half in the first month.",
        name: "Daniel Okafor",
        role: "Talent Lead, Brightline Health",
    },
    Testimonial {
        quote: "The alerts alone paid for it. We hear about a matching candidate the same day they become open to work.",
        name: "Sofia Marquez",
        role: "Head of Recruiting, Lumen Fintech",
    },
    Testimonial {
        quote: "Outreach that sounds like us, sent at a volume we could never manage by hand.",
        name: "Henrik Aalto",
        role: "Founder, Aalto Search Partners",
    },
];

pub fn advance(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Slide the countdown should move to, or `None` when there is nothing to
/// rotate through.
fn scheduled_next(current: usize, len: usize) -> Option<usize> {
    (len > 1).then(|| advance(current, len))
}

fn default_items() -> Vec<Testimonial> {
    TESTIMONIALS.to_vec()
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    #[prop_or_else(default_items)]
    pub items: Vec<Testimonial>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let len = props.items.len();

    // Picking a slide by hand restarts the countdown
    {
        let current = *index;
        let index = index.clone();
        use_effect_with_deps(
            move |(current, len)| {
                let timeout = scheduled_next(*current, *len)
                    .map(|next| Timeout::new(ROTATE_MS, move || index.set(next)));
                move || drop(timeout)
            },
            (current, len),
        );
    }

    let Some(active) = props.items.get(*index) else {
        return html! {};
    };

    html! {
        <section class="testimonials">
            <h2>{"Teams That Hire Faster"}</h2>
            <figure key={*index} class="testimonial">
                <blockquote>{ format!("\u{201c}{}\u{201d}", active.quote) }</blockquote>
                <figcaption>
                    <span class="avatar-initials">{ initials(active.name) }</span>
                    <span>
                        <strong>{ active.name }</strong>
                        <br/>
                        <span class="testimonial-role">{ active.role }</span>
                    </span>
                </figcaption>
            </figure>
            <div class="testimonial-dots">
                {
                    (0..len).map(|i| {
                        let onclick = {
                            let index = index.clone();
                            Callback::from(move |_: MouseEvent| index.set(i))
                        };
                        html! {
                            <button
                                key={i}
                                class={classes!("testimonial-dot", (i == *index).then(|| "active"))}
                                aria-label={format!("Show testimonial {}", i + 1)}
                                {onclick}
                            ></button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .testimonials {
                    text-align: center;
                    padding: 6rem 2rem;
                    max-width: 800px;
                    margin: 0 auto;
                }
                .testimonials h2 { font-size: 2.5rem; margin-bottom: 2rem; }
                .testimonial { animation: testimonial-in 0.6s ease; margin: 0; }
                .testimonial blockquote {
                    font-size: 1.4rem;
                    line-height: 1.6;
                    color: #ddd;
                    margin: 0 0 1.5rem;
                }
                .testimonial figcaption {
                    display: inline-flex;
                    gap: 1rem;
                    align-items: center;
                    text-align: left;
                }
                .testimonial-role { color: #999; font-size: 0.9rem; }
                .avatar-initials {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    background: rgba(30, 144, 255, 0.25);
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                }
                .testimonial-dots { margin-top: 2rem; display: flex; gap: 0.5rem; justify-content: center; }
                .testimonial-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.2);
                    cursor: pointer;
                }
                .testimonial-dot.active { background: #7EB2FF; }
                @keyframes testimonial-in {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: none; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps() {
        assert_eq!(advance(0, 4), 1);
        assert_eq!(advance(3, 4), 0);
        assert_eq!(advance(0, 0), 0);
    }

    #[test]
    fn countdown_only_runs_with_several_slides() {
        assert_eq!(scheduled_next(0, 0), None);
        assert_eq!(scheduled_next(0, 1), None);
        assert_eq!(scheduled_next(2, 4), Some(3));
        assert_eq!(scheduled_next(3, TESTIMONIALS.len()), Some(0));
    }
}
