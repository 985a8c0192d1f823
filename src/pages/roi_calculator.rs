use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::cta::DemoButton;
use crate::motion::reveal::{Reveal, RevealVariant};

pub const WORK_DAYS_PER_WEEK: f64 = 5.0;
pub const WEEKS_PER_MONTH: f64 = 4.0;
/// Share of daily manual sourcing and screening time the product takes over.
pub const AUTOMATION_SHARE: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiEstimate {
    pub weekly_hours_before: f64,
    pub weekly_hours_saved: f64,
    pub weekly_hours_after: f64,
    pub monthly_savings: f64,
    pub yearly_savings: f64,
}

pub fn estimate(recruiters: f64, hours_per_day: f64, hourly_rate: f64) -> RoiEstimate {
    let recruiters = recruiters.max(0.0);
    let hours_per_day = hours_per_day.max(0.0);
    let hourly_rate = hourly_rate.max(0.0);

    let weekly_hours_before = recruiters * hours_per_day * WORK_DAYS_PER_WEEK;
    let weekly_hours_saved = recruiters * (hours_per_day * AUTOMATION_SHARE) * WORK_DAYS_PER_WEEK;
    let monthly_savings = weekly_hours_saved * WEEKS_PER_MONTH * hourly_rate;
    RoiEstimate {
        weekly_hours_before,
        weekly_hours_saved,
        weekly_hours_after: weekly_hours_before - weekly_hours_saved,
        monthly_savings,
        yearly_savings: monthly_savings * 12.0,
    }
}

/// Non-negative number from an input box; anything unparsable keeps `previous`.
pub fn parse_input(raw: &str, previous: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0),
        _ => previous,
    }
}

/// Whole dollars with thousands separators, e.g. `$84,000`.
pub fn format_usd(amount: f64) -> String {
    let dollars = amount.round().max(0.0) as u64;
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}h", rounded as i64)
    } else {
        format!("{:.1}h", rounded)
    }
}

#[derive(Properties, PartialEq)]
struct SliderProps {
    label: AttrValue,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    suffix: AttrValue,
    on_change: Callback<String>,
}

#[function_component(Slider)]
fn slider(props: &SliderProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <label class="roi-slider">
            <span class="roi-slider-label">
                { props.label.clone() }
                <strong>{ format!("{}{}", props.value, props.suffix) }</strong>
            </span>
            <input
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.value.to_string()}
                {oninput}
            />
        </label>
    }
}

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let recruiters = use_state(|| 5.0_f64);
    let hours_per_day = use_state(|| 2.0_f64);
    let hourly_rate = use_state(|| 50.0_f64);

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

    let setter = |handle: &UseStateHandle<f64>| {
        let handle = handle.clone();
        Callback::from(move |raw: String| {
            handle.set(parse_input(&raw, *handle));
        })
    };

    let result = estimate(*recruiters, *hours_per_day, *hourly_rate);

    html! {
        <div class="roi-page">
            <section class="roi-hero">
                <h1>{"What Is Manual Sourcing Costing You?"}</h1>
                <p>{"Move the sliders to see how many hours and dollars your team gets back each month."}</p>
            </section>
            <section class="roi-body">
                <div class="roi-inputs">
                    <Slider label="Recruiters on the team" value={*recruiters} min={1.0} max={50.0} step={1.0} suffix="" on_change={setter(&recruiters)} />
                    <Slider label="Hours per day on sourcing & screening" value={*hours_per_day} min={0.5} max={8.0} step={0.5} suffix="h" on_change={setter(&hours_per_day)} />
                    <Slider label="Loaded hourly cost" value={*hourly_rate} min={10.0} max={200.0} step={5.0} suffix=" $/h" on_change={setter(&hourly_rate)} />
                </div>
                <div class="roi-results">
                    <Reveal variant={RevealVariant::SlideUp}>
                        <div class="roi-card">
                            <span class="roi-card-label">{"Hours per week today"}</span>
                            <span class="roi-card-value">{ format_hours(result.weekly_hours_before) }</span>
                        </div>
                    </Reveal>
                    <Reveal variant={RevealVariant::SlideUp} delay_ms={100}>
                        <div class="roi-card">
                            <span class="roi-card-label">{"Hours saved per week"}</span>
                            <span class="roi-card-value accent">{ format_hours(result.weekly_hours_saved) }</span>
                        </div>
                    </Reveal>
                    <Reveal variant={RevealVariant::SlideUp} delay_ms={200}>
                        <div class="roi-card">
                            <span class="roi-card-label">{"Hours per week with Hirewire"}</span>
                            <span class="roi-card-value">{ format_hours(result.weekly_hours_after) }</span>
                        </div>
                    </Reveal>
                    <Reveal variant={RevealVariant::SlideUp} delay_ms={300}>
                        <div class="roi-card highlight">
                            <span class="roi-card-label">{"Monthly savings"}</span>
                            <span class="roi-card-value">{ format_usd(result.monthly_savings) }</span>
                            <span class="roi-card-sub">{ format!("{} per year", format_usd(result.yearly_savings)) }</span>
                        </div>
                    </Reveal>
                </div>
            </section>
            <section class="roi-cta">
                <DemoButton label="Get a tailored ROI review" content_id="roi-calculator" />
            </section>
            <style>
                {r#"
                .roi-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .roi-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }
                .roi-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .roi-hero p {
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto;
                }
                .roi-body {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .roi-slider {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .roi-slider-label {
                    display: flex;
                    justify-content: space-between;
                    color: #ccc;
                }
                .roi-results {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .roi-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .roi-card.highlight {
                    border-color: rgba(30, 144, 255, 0.4);
                }
                .roi-card-label { color: #999; font-size: 0.9rem; }
                .roi-card-value { font-size: 2rem; font-weight: 700; }
                .roi-card-value.accent { color: #7EB2FF; }
                .roi-card-sub { color: #7EB2FF; font-size: 0.9rem; }
                .roi-cta {
                    text-align: center;
                    padding: 3rem 2rem 6rem;
                }
                @media (max-width: 768px) {
                    .roi-body, .roi-results { grid-template-columns: 1fr; }
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
    fn five_recruiters_two_hours_fifty_dollars() {
        let r = estimate(5.0, 2.0, 50.0);
        assert_eq!(r.weekly_hours_before, 50.0);
        assert!((r.weekly_hours_saved - 35.0).abs() < 1e-9);
        assert!((r.weekly_hours_after - 15.0).abs() < 1e-9);
        assert!((r.monthly_savings - 7_000.0).abs() < 1e-6);
        assert!((r.yearly_savings - 84_000.0).abs() < 1e-6);
        assert_eq!(format_usd(r.monthly_savings), "$7,000");
        assert_eq!(format_usd(r.yearly_savings), "$84,000");
        assert_eq!(format_hours(r.weekly_hours_saved), "35h");
        assert_eq!(format_hours(r.weekly_hours_after), "15h");
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let r = estimate(-3.0, 2.0, 50.0);
        assert_eq!(r.weekly_hours_before, 0.0);
        assert_eq!(r.yearly_savings, 0.0);
    }

    #[test]
    fn parse_keeps_previous_on_garbage() {
        assert_eq!(parse_input("12", 5.0), 12.0);
        assert_eq!(parse_input(" 2.5 ", 5.0), 2.5);
        assert_eq!(parse_input("-4", 5.0), 0.0);
        assert_eq!(parse_input("abc", 5.0), 5.0);
        assert_eq!(parse_input("NaN", 5.0), 5.0);
    }

    #[test]
    fn currency_and_hour_formatting() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567");
        assert_eq!(format_hours(10.5), "10.5h");
    }
}
