//! Scroll-to-section command issued from the menu and the step rail.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Scrolls the viewport so the section's top edge lines up with the top
/// of the viewport. Animated by default; instant when the user prefers
/// reduced motion. Invoking it while already at the target is a no-op.
pub fn scroll_to_section(id: &str, reduced_motion: bool) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        log::warn!("scroll target '{id}' has no element");
        return;
    };
    let behavior = if reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(behavior);
    options.block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
