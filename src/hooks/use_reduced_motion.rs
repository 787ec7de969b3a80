//! Live view of the OS-level reduced-motion preference.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Tracks `prefers-reduced-motion`. The value is read once on mount and
/// then follows `change` events, so flipping the OS setting while the
/// page is open takes effect immediately. Consumers only read the
/// boolean; there is no write path.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state_eq(|| false);
    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let query = web_sys::window()
                    .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok())
                    .flatten();
                let destructor: Box<dyn FnOnce()> = if let Some(query) = query {
                    reduced.set(query.matches());
                    let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new({
                        let reduced = reduced.clone();
                        move |event: web_sys::MediaQueryListEvent| {
                            reduced.set(event.matches());
                        }
                    });
                    let _ = query.add_event_listener_with_callback(
                        "change",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
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
    *reduced
}
