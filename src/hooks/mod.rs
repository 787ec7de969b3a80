//! Yew hooks binding the interaction engine to browser primitives.
//!
//! Every hook that attaches a listener or an observer detaches it in the
//! effect destructor, so repeated mount/unmount cycles never accumulate
//! subscriptions on dead parts of the page.

pub mod scroll;
pub mod use_active_section;
pub mod use_in_view;
pub mod use_reduced_motion;
pub mod use_scroll_progress;

pub use scroll::scroll_to_section;
pub use use_active_section::use_active_section;
pub use use_in_view::use_in_view;
pub use use_reduced_motion::use_reduced_motion;
pub use use_scroll_progress::use_scroll_progress;
