//! Per-element "in view" flag for local emphasis effects.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Looser than the active-step band: a step starts its fade-in before it
// becomes "the" active step.
const IN_VIEW_THRESHOLD: f64 = 0.25;
const IN_VIEW_MARGIN: &str = "-10% 0px -20% 0px";

/// True while the referenced element is meaningfully inside the viewport.
/// Independent of which section is globally active; this drives each
/// step's own fade-in, not the shared step rail.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state_eq(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let destructor: Box<dyn FnOnce()> = (|| {
                    let element = node.cast::<Element>()?;
                    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(
                        move |entries: js_sys::Array| {
                            if let Some(entry) = entries
                                .iter()
                                .next()
                                .and_then(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            {
                                in_view.set(entry.is_intersecting());
                            }
                        },
                    );
                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(IN_VIEW_THRESHOLD));
                    options.root_margin(IN_VIEW_MARGIN);
                    let observer = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .ok()?;
                    observer.observe(&element);
                    Some(Box::new(move || {
                        observer.disconnect();
                        drop(callback);
                    }) as Box<dyn FnOnce()>)
                })()
                .unwrap_or_else(|| Box::new(|| ()));
                move || {
                    destructor();
                }
            },
            node,
        );
    }
    *in_view
}
