pub mod case_modal;
pub mod nav_bar;
pub mod progress_bar;
pub mod step_flow;
