//! IntersectionObserver wiring for a [`SectionTracker`].

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::engine::section::{SectionTracker, VisibilitySample};

/// Reports which of `ids` is currently the active section.
///
/// One observer per hook instance. `thresholds` are the visibility
/// fractions at which the browser re-samples, and `root_margin` narrows
/// the viewport into the focus band (`"0px"` keeps the full viewport).
/// The observer only fires on threshold crossings, so tracking cost is
/// bounded regardless of scroll speed.
///
/// Sections whose id has no element in the document are skipped with a
/// warning; an empty `ids` list performs no observation at all.
#[hook]
pub fn use_active_section(
    ids: &'static [&'static str],
    thresholds: &'static [f64],
    root_margin: &'static str,
) -> String {
    let active = use_state_eq(|| ids.first().copied().unwrap_or_default().to_string());
    let tracker = use_mut_ref(|| SectionTracker::new(ids.iter().copied()));

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = (|| {
                    if ids.is_empty() {
                        return None;
                    }
                    let document = web_sys::window()?.document()?;

                    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(
                        move |entries: js_sys::Array| {
                            let samples: Vec<VisibilitySample> = entries
                                .iter()
                                .filter_map(|entry| {
                                    entry.dyn_into::<IntersectionObserverEntry>().ok()
                                })
                                .map(|entry| VisibilitySample {
                                    id: entry.target().id(),
                                    ratio: entry.intersection_ratio(),
                                    intersecting: entry.is_intersecting(),
                                })
                                .collect();
                            let current = tracker
                                .borrow_mut()
                                .observe(&samples)
                                .map(str::to_string);
                            if let Some(id) = current {
                                active.set(id);
                            }
                        },
                    );

                    let threshold_list = js_sys::Array::new();
                    for threshold in thresholds {
                        threshold_list.push(&JsValue::from_f64(*threshold));
                    }
                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from(threshold_list));
                    options.root_margin(root_margin);

                    let observer = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .ok()?;

                    for id in ids {
                        match document.get_element_by_id(id) {
                            Some(element) => observer.observe(&element),
                            None => log::warn!("section '{id}' has no element; not observing it"),
                        }
                    }

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
            (),
        );
    }

    (*active).clone()
}
