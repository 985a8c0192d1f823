use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Object, Reflect};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// Hide again when the element drops below the threshold, so the
    /// transition replays on re-entry.
    pub reset_on_exit: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            reset_on_exit: false,
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn resetting(threshold: f64) -> Self {
        Self {
            threshold,
            reset_on_exit: true,
        }
    }
}

/// Visibility latch fed with intersection ratios.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealState {
    options: RevealOptions,
    visible: bool,
}

impl RevealState {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            visible: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feeds one observer entry. Returns true when `visible` flipped.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        let meets = intersecting && ratio >= self.options.threshold;
        let next = if meets {
            true
        } else if self.options.reset_on_exit {
            false
        } else {
            self.visible
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }
}

fn observer_supported(window: &web_sys::Window) -> bool {
    Reflect::has(window.unchecked_ref::<Object>(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

type ObserverHandle = (IntersectionObserver, Closure<dyn FnMut(Array)>);

fn attach(
    node: &NodeRef,
    options: RevealOptions,
    visible: UseStateHandle<bool>,
) -> Option<ObserverHandle> {
    let element = node.cast::<web_sys::Element>()?;
    let window = web_sys::window()?;

    if !observer_supported(&window) {
        debug!("IntersectionObserver unavailable, revealing immediately");
        visible.set(true);
        return None;
    }

    let mut state = RevealState::new(options);
    let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if state.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                visible.set(state.visible());
            }
        }
    });

    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(options.threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("Failed to create IntersectionObserver: {:?}", e);
            None
        }
    }
}

/// Tracks whether the node behind `node` has crossed the reveal threshold.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let handle = attach(node, *options, visible);
                move || {
                    if let Some((observer, _callback)) = handle {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *visible
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum RevealVariant {
    #[default]
    Fade,
    SlideUp,
    SlideLeft,
}

impl RevealVariant {
    fn class(self) -> &'static str {
        match self {
            RevealVariant::Fade => "reveal-fade",
            RevealVariant::SlideUp => "reveal-slide-up",
            RevealVariant::SlideLeft => "reveal-slide-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: RevealVariant,
    /// Stagger offset for items revealed as a group.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub reset_on_exit: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let options = RevealOptions {
        reset_on_exit: props.reset_on_exit,
        ..RevealOptions::with_threshold(props.threshold)
    };
    let visible = use_reveal(node.clone(), options);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.variant.class(), visible.then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

pub const REVEAL_CSS: &str = r#"
.reveal {
    opacity: 0;
    transition: opacity 0.7s ease, transform 0.7s ease;
    will-change: opacity, transform;
}
.reveal-slide-up { transform: translateY(32px); }
.reveal-slide-left { transform: translateX(48px); }
.reveal.visible {
    opacity: 1;
    transform: none;
}
@media (prefers-reduced-motion: reduce) {
    .reveal { transition: none; opacity: 1; transform: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn becomes_visible_once_threshold_met() {
        let mut state = RevealState::new(RevealOptions::with_threshold(0.5));
        assert!(!state.observe(true, 0.3));
        assert!(!state.visible());
        assert!(state.observe(true, 0.5));
        assert!(state.visible());
        assert!(!state.observe(true, 0.9));
        assert!(state.visible());
    }

    #[test]
    fn one_shot_stays_visible_after_leaving() {
        let mut state = RevealState::new(RevealOptions::default());
        state.observe(true, 0.4);
        assert!(!state.observe(false, 0.0));
        assert!(state.visible());
    }

    #[test]
    fn resetting_gate_hides_before_reentry() {
        let mut state = RevealState::new(RevealOptions::resetting(0.3));
        state.observe(true, 0.6);
        assert!(state.observe(true, 0.1));
        assert!(!state.visible());
        assert!(state.observe(true, 0.35));
        assert!(state.visible());
        assert!(state.observe(false, 0.0));
        assert!(!state.visible());
    }

    #[test]
    fn zero_threshold_reveals_on_first_intersection() {
        let mut state = RevealState::new(RevealOptions::with_threshold(0.0));
        state.observe(false, 0.0);
        assert!(!state.visible());
        assert!(state.observe(true, 0.0));
        assert!(state.visible());
    }
}
