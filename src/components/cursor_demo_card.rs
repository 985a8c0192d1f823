use log::debug;
use yew::prelude::*;

use crate::motion::cursor_demo::{
    DemoEvent, DemoState, NoticeKind, Schedule, Timeline, FILTER_LABELS, NOTICE_TTL_MS, SCRIPT,
    START_DELAY_MS,
};
use crate::motion::reveal::{use_reveal, RevealOptions};

const STEP_TABS: [&str; 3] = ["Search", "Alerts", "Outreach"];

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "demo-toast info",
        NoticeKind::Success => "demo-toast success",
        NoticeKind::Alert => "demo-toast alert",
    }
}

/// Self-playing product walkthrough. Runs while on screen, loops at the end,
/// and drops every pending timer when scrolled away or unmounted.
#[function_component(CursorDemoCard)]
pub fn cursor_demo_card() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::resetting(0.4));
    let state = use_reducer(DemoState::default);
    let timeline = use_memo(|_| Timeline::compile(SCRIPT, NOTICE_TTL_MS), ());

    {
        let dispatcher = state.dispatcher();
        let timeline = timeline.clone();
        use_effect_with_deps(
            move |(visible, cycle)| {
                let schedule = if *visible {
                    let dispatch = {
                        let dispatcher = dispatcher.clone();
                        Callback::from(move |event: DemoEvent| dispatcher.dispatch(event))
                    };
                    let schedule = Schedule::arm(&timeline, START_DELAY_MS, dispatch);
                    debug!(
                        "Cursor demo loop {} armed: {} steps, {} timers over {} ms",
                        cycle,
                        timeline.step_count(),
                        schedule.pending(),
                        timeline.duration_ms()
                    );
                    Some(schedule)
                } else {
                    dispatcher.dispatch(DemoEvent::Reset);
                    None
                };
                move || drop(schedule)
            },
            (visible, state.cycle),
        );
    }

    let toggle_filter = |index: usize| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DemoEvent::UserToggleFilter(index)))
    };

    let (x, y) = state.cursor;

    html! {
        <div class="demo-card" ref={node}>
            <div class="demo-tabs">
                {
                    STEP_TABS.iter().enumerate().map(|(i, tab)| html! {
                        <span key={*tab} class={classes!("demo-tab", (i == state.active_step).then(|| "active"))}>{ *tab }</span>
                    }).collect::<Html>()
                }
                <span class={classes!("demo-alert-toggle", state.alerts_on.then(|| "on"))}>
                    { if state.alerts_on { "Alerts on" } else { "Alerts off" } }
                </span>
            </div>
            <div class="demo-filters">
                {
                    FILTER_LABELS.iter().enumerate().map(|(i, label)| html! {
                        <button
                            key={*label}
                            class={classes!("demo-chip", state.filters[i].then(|| "selected"))}
                            onclick={toggle_filter(i)}
                        >
                            { *label }
                        </button>
                    }).collect::<Html>()
                }
            </div>
            <div class="demo-results">
                {
                    (0..4).map(|row| html! {
                        <div key={row} class="demo-row">
                            <span class="demo-avatar"></span>
                            <span class="demo-line"></span>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <div class="demo-toasts">
                {
                    state.notices.iter().map(|notice| html! {
                        <div key={notice.id} class={notice_class(notice.kind)}>{ notice.text }</div>
                    }).collect::<Html>()
                }
            </div>
            <div
                class={classes!("demo-cursor", state.clicking.then(|| "clicking"))}
                style={format!("left: {}%; top: {}%;", x, y)}
            ></div>
            <style>
                {r#"
                .demo-card {
                    position: relative;
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 1.5rem;
                    background: rgba(26, 26, 26, 0.9);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 16px;
                    overflow: hidden;
                    min-height: 360px;
                }
                .demo-tabs {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin-bottom: 1.25rem;
                }
                .demo-tab { color: #777; }
                .demo-tab.active { color: #fff; border-bottom: 2px solid #7EB2FF; }
                .demo-alert-toggle {
                    margin-left: auto;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.08);
                    color: #999;
                    transition: all 0.3s ease;
                }
                .demo-alert-toggle.on { background: rgba(126, 178, 255, 0.25); color: #fff; }
                .demo-filters { display: flex; gap: 0.5rem; flex-wrap: wrap; }
                .demo-chip {
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: #ccc;
                    padding: 0.35rem 0.9rem;
                    border-radius: 999px;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .demo-chip.selected { background: #1E90FF; border-color: #1E90FF; color: #fff; }
                .demo-results { margin-top: 1.5rem; }
                .demo-row { display: flex; gap: 0.75rem; align-items: center; margin-bottom: 0.9rem; }
                .demo-avatar { width: 32px; height: 32px; border-radius: 50%; background: rgba(255, 255, 255, 0.1); }
                .demo-line { flex: 1; height: 10px; border-radius: 5px; background: rgba(255, 255, 255, 0.08); }
                .demo-toasts {
                    position: absolute;
                    right: 1rem;
                    bottom: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .demo-toast {
                    padding: 0.6rem 1rem;
                    border-radius: 10px;
                    font-size: 0.9rem;
                    animation: toast-in 0.3s ease-out;
                }
                .demo-toast.info { background: rgba(30, 144, 255, 0.25); }
                .demo-toast.success { background: rgba(46, 204, 113, 0.25); }
                .demo-toast.alert { background: rgba(255, 165, 0, 0.25); }
                @keyframes toast-in {
                    from { transform: translateY(12px); opacity: 0; }
                    to { transform: none; opacity: 1; }
                }
                .demo-cursor {
                    position: absolute;
                    width: 18px;
                    height: 18px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 0 0 4px rgba(255, 255, 255, 0.15);
                    pointer-events: none;
                    transition: left 0.6s ease, top 0.6s ease, transform 0.15s ease;
                    transform: translate(-50%, -50%);
                }
                .demo-cursor.clicking { transform: translate(-50%, -50%) scale(0.7); }
                "#}
            </style>
        </div>
    }
}
