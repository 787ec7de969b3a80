//! Smoothed page scroll-completion value.

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::engine::progress::ProgressSpring;

const TICK_MILLIS: u32 = 16;

fn read_raw_fraction(window: &web_sys::Window) -> f64 {
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let distance = document_height - viewport_height;
    if distance <= 0.0 {
        // Document shorter than the viewport: nothing to scroll.
        return 0.0;
    }
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    (scroll_y / distance).clamp(0.0, 1.0)
}

/// Scroll completion in [0, 1], damped through a [`ProgressSpring`] so
/// the progress bar does not jitter during fast or jagged scrolling.
/// Scroll and resize events update the raw target; a fixed-rate interval
/// advances the spring and goes quiescent once it has settled.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    let spring = use_mut_ref(ProgressSpring::new);

    {
        let progress = progress.clone();
        let spring = spring.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    spring.borrow_mut().set_target(read_raw_fraction(&window));

                    let on_scroll = Closure::<dyn Fn()>::new({
                        let spring = spring.clone();
                        let window = window.clone();
                        move || {
                            spring.borrow_mut().set_target(read_raw_fraction(&window));
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_scroll.as_ref().unchecked_ref(),
                    );

                    let interval = Interval::new(TICK_MILLIS, move || {
                        let mut spring = spring.borrow_mut();
                        if spring.settled() {
                            return;
                        }
                        progress.set(spring.step(f64::from(TICK_MILLIS) / 1000.0));
                    });

                    Box::new(move || {
                        if let Some(window) = web_sys::window() {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                on_scroll.as_ref().unchecked_ref(),
                            );
                            let _ = window.remove_event_listener_with_callback(
                                "resize",
                                on_scroll.as_ref().unchecked_ref(),
                            );
                        }
                        drop(interval);
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    *progress
}
