//! Case-study detail overlay: tabbed content, Escape dismissal, and a
//! body scroll lock while open.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::content::CASES;
use crate::engine::overlay::CaseTab;

#[derive(Properties, PartialEq)]
pub struct CaseModalProps {
    pub case_index: usize,
    pub tab: CaseTab,
    pub on_switch_tab: Callback<CaseTab>,
    pub on_dismiss: Callback<()>,
}

#[function_component(CaseModal)]
pub fn case_modal(props: &CaseModalProps) -> Html {
    // Escape anywhere on the page dismisses the overlay.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let on_keydown = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
                        move |event: web_sys::KeyboardEvent| {
                            if event.key() == "Escape" {
                                on_dismiss.emit(());
                            }
                        },
                    );
                    let _ = window.add_event_listener_with_callback(
                        "keydown",
                        on_keydown.as_ref().unchecked_ref(),
                    );
                    on_keydown
                });
                move || {
                    if let (Some(window), Some(on_keydown)) = (web_sys::window(), listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Lock page scroll for the lifetime of the overlay.
    use_effect_with_deps(
        |_| {
            let body = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body());
            if let Some(body) = &body {
                let _ = body.style().set_property("overflow", "hidden");
            }
            move || {
                if let Some(body) = body {
                    let _ = body.style().remove_property("overflow");
                }
            }
        },
        (),
    );

    let Some(case) = CASES.get(props.case_index) else {
        log::warn!("case index {} is out of range", props.case_index);
        return html! {};
    };

    let on_backdrop_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    // Clicks inside the panel must not reach the backdrop handler.
    let on_panel_click = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_close_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-panel" onclick={on_panel_click}>
                <div class="modal-head">
                    <div>
                        <div class="modal-industry">{case.industry}</div>
                        <h3 class="modal-title">{case.title}</h3>
                        <div class="modal-status">{case.status}</div>
                    </div>
                    <button class="modal-close" onclick={on_close_click}>{"Close"}</button>
                </div>

                <div class="modal-tabs">
                    { for CaseTab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let on_switch_tab = props.on_switch_tab.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_switch_tab.emit(tab));
                        html! {
                            <button
                                class={classes!("modal-tab", (tab == props.tab).then_some("active"))}
                                {onclick}
                            >
                                {tab.label()}
                            </button>
                        }
                    })}
                </div>

                <div class="modal-body">
                    { match props.tab {
                        CaseTab::Overview => html! {
                            <>
                                <p class="modal-summary">{case.summary}</p>
                                <div class="modal-outcomes">
                                    { for case.outcomes.iter().map(|outcome| html! {
                                        <div class="modal-outcome">
                                            <div class="modal-outcome-key">{outcome.k}</div>
                                            <div class="modal-outcome-value">{outcome.v}</div>
                                        </div>
                                    })}
                                </div>
                                <div class="modal-preview">
                                    <div class="modal-preview-title">{"Inference preview"}</div>
                                    <div class="modal-preview-frames">
                                        <div class="modal-preview-frame">{"Frame · detections"}</div>
                                        <div class="modal-preview-frame">{"Frame · segmentation"}</div>
                                        <div class="modal-preview-frame">{"Frame · evidence"}</div>
                                    </div>
                                </div>
                            </>
                        },
                        CaseTab::Results => html! {
                            <>
                                <ul class="modal-results">
                                    { for case.results.iter().map(|result| html! {
                                        <li>{*result}</li>
                                    })}
                                </ul>
                                <div class="modal-metrics">
                                    <div class="modal-metric">
                                        <div class="modal-metric-value">{"— ms"}</div>
                                        <div class="modal-metric-key">{"End-to-end latency"}</div>
                                    </div>
                                    <div class="modal-metric">
                                        <div class="modal-metric-value">{"— %"}</div>
                                        <div class="modal-metric-key">{"Recall by defect type"}</div>
                                    </div>
                                    <div class="modal-metric">
                                        <div class="modal-metric-value">{"— %"}</div>
                                        <div class="modal-metric-key">{"False reject rate"}</div>
                                    </div>
                                </div>
                            </>
                        },
                        CaseTab::Gallery => html! {
                            <div class="modal-gallery">
                                { for case.gallery.iter().map(|entry| html! {
                                    <div class="modal-gallery-entry">
                                        <div class="modal-gallery-label">{entry.label}</div>
                                        <div class="modal-gallery-caption">{entry.caption}</div>
                                    </div>
                                })}
                            </div>
                        },
                    }}
                </div>
            </div>
        </div>
    }
}
