//! Fixed page-top scroll progress indicator.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Smoothed scroll completion in [0, 1].
    pub progress: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let width = props.progress.clamp(0.0, 1.0) * 100.0;
    html! {
        <div class="scroll-progress">
            <div class="scroll-progress-fill" style={format!("width: {width:.2}%;")}></div>
        </div>
    }
}
