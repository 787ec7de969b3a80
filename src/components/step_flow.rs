//! Four-step solution flow with a sticky rail that tracks the step
//! currently in the viewport's focus band.

use yew::prelude::*;

use crate::content::{FLOW, STEP_IDS};
use crate::engine::nav::highlight_index;
use crate::hooks::{scroll_to_section, use_active_section, use_in_view};

/// Tighter margin than the site-wide tracker: a step counts as focused
/// only while it occupies the middle band of the viewport.
const STEP_THRESHOLDS: [f64; 4] = [0.2, 0.35, 0.5, 0.65];
const STEP_FOCUS_BAND: &str = "-35% 0px -50% 0px";

#[derive(Properties, PartialEq)]
pub struct StepFlowProps {
    pub reduced_motion: bool,
}

#[function_component(StepFlow)]
pub fn step_flow(props: &StepFlowProps) -> Html {
    let active_id = use_active_section(&STEP_IDS, &STEP_THRESHOLDS, STEP_FOCUS_BAND);
    let active_index = highlight_index(STEP_IDS, Some(active_id.as_str()));
    let reduced_motion = props.reduced_motion;

    html! {
        <div class="step-flow">
            <aside class="step-rail">
                <div class="step-rail-counter">{format!("{:02}/04", active_index + 1)}</div>
                <div class="step-rail-entries">
                    { for FLOW.iter().enumerate().map(|(index, step)| {
                        let id = step.id;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            scroll_to_section(id, reduced_motion);
                        });
                        let fill = if index <= active_index { "100%" } else { "0%" };
                        html! {
                            <button
                                class={classes!("step-rail-entry", (index == active_index).then_some("active"))}
                                {onclick}
                            >
                                <span class="step-rail-badge">{step.badge}</span>
                                <span class="step-rail-title">{step.title}</span>
                                <span class="step-rail-meter">
                                    <span class="step-rail-meter-fill" style={format!("width: {fill};")}></span>
                                </span>
                            </button>
                        }
                    })}
                </div>
            </aside>

            <div class="step-blocks">
                { for (0..FLOW.len()).map(|index| html! {
                    <FlowStepBlock {index} />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FlowStepBlockProps {
    index: usize,
}

#[function_component(FlowStepBlock)]
fn flow_step_block(props: &FlowStepBlockProps) -> Html {
    // Hooks run unconditionally, before the bounds guard.
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let Some(step) = FLOW.get(props.index) else {
        log::warn!("flow step index {} is out of range", props.index);
        return html! {};
    };

    html! {
        <div id={step.id} ref={node} class="step-block-anchor">
            <article class={classes!("step-block", in_view.then_some("in-view"))}>
                <div class="step-block-copy">
                    <div class="step-badge">{step.badge}</div>
                    <h3 class="step-title">{step.title}</h3>
                    <p class="step-promise">{step.promise}</p>
                    <ul class="step-bullets">
                        { for step.bullets.iter().map(|bullet| html! {
                            <li>{*bullet}</li>
                        })}
                    </ul>
                    <div class="step-kpis">
                        { for step.kpis.iter().map(|kpi| html! {
                            <div class="step-kpi">
                                <div class="step-kpi-key">{kpi.k}</div>
                                <div class="step-kpi-value">{kpi.v}</div>
                            </div>
                        })}
                    </div>
                </div>
                <div class="step-visual">
                    <div class="step-visual-title">{step.visual_title}</div>
                    { for step.visual_lines.iter().map(|line| html! {
                        <div class="step-visual-line">
                            <span class="step-visual-key">{line.k}</span>
                            <span class="step-visual-value">{line.v}</span>
                            if let Some(hint) = line.hint {
                                <span class="step-visual-hint">{hint}</span>
                            }
                        </div>
                    })}
                </div>
            </article>
        </div>
    }
}
