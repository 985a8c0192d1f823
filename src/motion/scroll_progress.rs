use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

/// Phase boundaries for a three step sticky section.
pub const THREE_PHASES: [f64; 2] = [0.33, 0.66];

/// How far the viewport has travelled through a tall section, in [0, 1].
///
/// Zero when the section's top edge sits at the bottom of the viewport and one
/// when it reaches the top. Sections no taller than the viewport have nothing
/// to scroll through and snap to 0 or 1 by position.
pub fn progress(viewport_height: f64, element_top: f64, element_height: f64) -> f64 {
    if !(viewport_height.is_finite() && element_top.is_finite() && element_height.is_finite()) {
        return 0.0;
    }
    let scrollable = element_height - viewport_height;
    if scrollable <= 0.0 {
        return if element_top <= 0.0 { 1.0 } else { 0.0 };
    }
    ((viewport_height - element_top) / scrollable).clamp(0.0, 1.0)
}

/// Index of the active phase: the number of breakpoints already passed.
pub fn phase_for(progress: f64, breakpoints: &[f64]) -> usize {
    breakpoints.iter().filter(|b| progress >= **b).count()
}

fn measure(node: &NodeRef) -> Option<f64> {
    let element = node.cast::<web_sys::Element>()?;
    let viewport = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(progress(viewport, rect.top(), rect.height()))
}

const EVENTS: [&str; 2] = ["scroll", "resize"];

#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let value = use_state(|| 0.0_f64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |node| {
                let node = node.clone();
                let window = web_sys::window();

                let on_scroll = {
                    let value = value.clone();
                    Closure::<dyn Fn()>::new(move || {
                        if let Some(p) = measure(&node) {
                            value.set(p);
                        }
                    })
                };

                if let Some(window) = window.as_ref() {
                    let mut options = AddEventListenerOptions::new();
                    options.passive(true);
                    for event in EVENTS {
                        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                            event,
                            on_scroll.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            error!("Failed to attach {} listener: {:?}", event, e);
                        }
                    }
                }

                // Initial check
                let initial: &web_sys::js_sys::Function = on_scroll.as_ref().unchecked_ref();
                let _ = initial.call0(&wasm_bindgen::JsValue::NULL);

                move || {
                    if let Some(window) = window {
                        for event in EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                on_scroll.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            node,
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_unit_range() {
        let viewport = 800.0;
        let height = 1600.0;
        for top in (-4000..4000).step_by(50) {
            let p = progress(viewport, top as f64, height);
            assert!((0.0..=1.0).contains(&p), "top={} gave {}", top, p);
        }
    }

    #[test]
    fn monotonic_as_section_scrolls_up() {
        let mut last = 0.0;
        for top in (-2000..2000).rev().step_by(10) {
            let p = progress(900.0, top as f64, 1800.0);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn matches_formula_midway() {
        // 200vh section whose top is half a viewport below the fold line
        assert!((progress(800.0, 400.0, 1600.0) - 0.5).abs() < 1e-9);
        assert_eq!(progress(800.0, 800.0, 1600.0), 0.0);
        assert_eq!(progress(800.0, 0.0, 1600.0), 1.0);
    }

    #[test]
    fn section_as_tall_as_viewport_is_defined() {
        assert_eq!(progress(800.0, 120.0, 800.0), 0.0);
        assert_eq!(progress(800.0, 0.0, 800.0), 1.0);
        assert_eq!(progress(800.0, -50.0, 300.0), 1.0);
        assert!(!progress(0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn non_finite_geometry_is_zero() {
        assert_eq!(progress(f64::NAN, 10.0, 100.0), 0.0);
        assert_eq!(progress(800.0, f64::INFINITY, 1600.0), 0.0);
    }

    #[test]
    fn phases_switch_at_breakpoints() {
        assert_eq!(phase_for(0.0, &THREE_PHASES), 0);
        assert_eq!(phase_for(0.329, &THREE_PHASES), 0);
        assert_eq!(phase_for(0.33, &THREE_PHASES), 1);
        assert_eq!(phase_for(0.65, &THREE_PHASES), 1);
        assert_eq!(phase_for(0.66, &THREE_PHASES), 2);
        assert_eq!(phase_for(1.0, &THREE_PHASES), 2);
    }
}
