use yew::prelude::*;
use yew_router::components::Link;

use crate::components::cursor_demo_card::CursorDemoCard;
use crate::components::radar_section::RadarSection;
use crate::components::scroll_timeline::ScrollTimeline;
use crate::components::testimonials::TestimonialCarousel;
use crate::cta::DemoButton;
use crate::motion::reveal::{Reveal, RevealVariant};
use crate::Route;

const FEATURES: [(&str, &str, &str); 6] = [
    ("🎯", "ICP-driven search", "Describe the hire once and search every connected source against it."),
    ("⚡", "Instant shortlists", "Ranked candidates with the reasons they match, ready in minutes."),
    ("🔔", "Match alerts", "Hear the same day a profile starts matching your open roles."),
    ("✉️", "Personal outreach at scale", "Sequences written in your voice and sent on your schedule."),
    ("🔗", "ATS sync", "Shortlisted candidates land in your applicant tracking system automatically."),
    ("📊", "Pipeline analytics", "Time-to-shortlist and reply rates per role, recruiter and channel."),
];

const STAGGER_MS: u32 = 80;

#[function_component(Landing)]
pub fn landing() -> Html {
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
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <Reveal variant={RevealVariant::SlideUp}>
                        <h1>{"Hire the People Your Competitors Can't Find"}</h1>
                        <p class="hero-subtitle">
                            {"Hirewire automates sourcing, screening and outreach so your recruiters spend their week talking to candidates instead of hunting for them."}
                        </p>
                    </Reveal>
                    <Reveal variant={RevealVariant::SlideUp} delay_ms={150}>
                        <div class="hero-cta-group">
                            <DemoButton content_id="hero" />
                            <Link<Route> to={Route::RoiCalculator} classes="secondary-link">
                                {"Calculate your ROI →"}
                            </Link<Route>>
                        </div>
                    </Reveal>
                </div>
            </header>

            <section class="feature-grid">
                {
                    FEATURES.iter().enumerate().map(|(i, (icon, title, body))| html! {
                        <Reveal key={*title} variant={RevealVariant::SlideUp} delay_ms={i as u32 * STAGGER_MS}>
                            <div class="feature-card">
                                <span class="feature-icon">{ *icon }</span>
                                <h3>{ *title }</h3>
                                <p>{ *body }</p>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </section>

            <RadarSection />

            <ScrollTimeline />

            <section class="demo-section">
                <Reveal>
                    <h2>{"See It Work"}</h2>
                    <p>{"A thirty second tour of a real search, alert and outreach run."}</p>
                </Reveal>
                <CursorDemoCard />
            </section>

            <TestimonialCarousel />

            <section class="final-cta">
                <Reveal variant={RevealVariant::SlideLeft}>
                    <h2>{"Ready to Get Your Week Back?"}</h2>
                    <p>{"Twenty minutes, your roles, our product. No slides."}</p>
                    <DemoButton label="Schedule a walkthrough" content_id="footer" />
                    <Link<Route> to={Route::Compare} classes="secondary-link">
                        {"How we compare"}
                    </Link<Route>>
                </Reveal>
            </section>

            <style>
                {r#"
                .landing-page {
                    color: #ffffff;
                    position: relative;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    position: relative;
                    padding: 0 2rem;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 50% 30%, rgba(30, 144, 255, 0.25), transparent 60%);
                    z-index: -1;
                }
                .hero h1 {
                    font-size: 3.8rem;
                    max-width: 900px;
                    margin: 0 auto 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #999;
                    max-width: 680px;
                    margin: 0 auto 2.5rem;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                    justify-content: center;
                }
                .hero-cta {
                    display: inline-block;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    border: none;
                    padding: 1rem 2.5rem;
                    border-radius: 8px;
                    font-size: 1.1rem;
                    text-decoration: none;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                }
                .secondary-link {
                    color: #7EB2FF;
                    text-decoration: none;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .feature-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 2rem;
                    height: 100%;
                }
                .feature-icon { font-size: 2rem; }
                .feature-card p { color: #999; }
                .demo-section {
                    padding: 6rem 2rem;
                    text-align: center;
                }
                .demo-section h2, .final-cta h2 { font-size: 2.5rem; margin-bottom: 1rem; }
                .demo-section p, .final-cta p { color: #999; margin-bottom: 2rem; }
                .final-cta {
                    text-align: center;
                    padding: 6rem 2rem 8rem;
                }
                .final-cta .secondary-link { display: block; margin-top: 1.5rem; }
                @media (max-width: 900px) {
                    .feature-grid { grid-template-columns: 1fr; }
                    .hero h1 { font-size: 2.6rem; }
                    .hero-cta-group { flex-direction: column; }
                }
                "#}
            </style>
        </div>
    }
}
