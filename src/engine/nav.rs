//! Maps the active section onto a menu entry.

/// Index of the menu entry matching the active section id. Falls back to
/// the first entry when the id is unknown or no section has been
/// observed yet, so the menu never ends up with nothing highlighted.
pub fn highlight_index<'a, I>(ids: I, active: Option<&str>) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(active) = active else { return 0 };
    ids.into_iter()
        .position(|id| id == active)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::section::{SectionTracker, VisibilitySample};

    const MENU: [&str; 3] = ["home", "solutions", "platform"];

    #[test]
    fn matching_entry_is_highlighted() {
        assert_eq!(highlight_index(MENU, Some("platform")), 2);
    }

    #[test]
    fn unknown_id_falls_back_to_first_entry() {
        assert_eq!(highlight_index(MENU, Some("changelog")), 0);
    }

    #[test]
    fn no_active_section_falls_back_to_first_entry() {
        assert_eq!(highlight_index(MENU, None), 0);
    }

    #[test]
    fn scroll_driven_highlight_follows_the_tracker() {
        let mut tracker = SectionTracker::new(MENU);
        tracker.observe(&[
            VisibilitySample::new("home", 0.0, false),
            VisibilitySample::new("solutions", 0.8, true),
            VisibilitySample::new("platform", 0.0, false),
        ]);
        assert_eq!(tracker.active_id(), Some("solutions"));
        assert_eq!(highlight_index(MENU, tracker.active_id()), 1);
    }
}
