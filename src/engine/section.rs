//! Selects the single "active" section from visibility observations.

/// One observation for a named section: what fraction of it is visible
/// inside the focus band, and whether it intersects the band at all.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilitySample {
    pub id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

impl VisibilitySample {
    pub fn new(id: impl Into<String>, ratio: f64, intersecting: bool) -> Self {
        Self {
            id: id.into(),
            ratio,
            intersecting,
        }
    }
}

/// Tracks which of a fixed, ordered set of sections is currently active.
///
/// The section list is declared once at construction and never changes.
/// When no observed section intersects the focus band the previous active
/// section is retained rather than cleared; during fast scrolls the
/// observer can briefly report nothing intersecting and resetting here
/// would make the highlight flicker.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    ids: Vec<String>,
    active: Option<usize>,
}

impl SectionTracker {
    /// Builds a tracker over an ordered list of section ids. The first
    /// declared section starts out active; an empty list yields a tracker
    /// with no active section that ignores all observations.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let active = if ids.is_empty() { None } else { Some(0) };
        Self { ids, active }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Currently active section id, if any section is registered.
    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|index| self.ids[index].as_str())
    }

    /// Position of the active section in declaration order (0 when empty).
    pub fn active_index(&self) -> usize {
        self.active.unwrap_or(0)
    }

    /// Feeds a batch of visibility samples and returns the resulting
    /// active id. Among samples intersecting the band the highest visible
    /// fraction wins; equal fractions fall back to declaration order.
    /// Samples for ids that were never registered are ignored.
    pub fn observe(&mut self, samples: &[VisibilitySample]) -> Option<&str> {
        if self.ids.is_empty() {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for sample in samples {
            if !sample.intersecting || sample.ratio <= 0.0 {
                continue;
            }
            let Some(index) = self.ids.iter().position(|id| *id == sample.id) else {
                continue;
            };
            let wins = match best {
                None => true,
                Some((best_index, best_ratio)) => {
                    sample.ratio > best_ratio
                        || (sample.ratio == best_ratio && index < best_index)
                }
            };
            if wins {
                best = Some((index, sample.ratio));
            }
        }
        if let Some((index, _)) = best {
            self.active = Some(index);
        }
        self.active_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, ratio: f64) -> VisibilitySample {
        VisibilitySample::new(id, ratio, ratio > 0.0)
    }

    #[test]
    fn first_section_is_active_before_any_sample() {
        let tracker = SectionTracker::new(["home", "solutions", "platform"]);
        assert_eq!(tracker.active_id(), Some("home"));
        assert_eq!(tracker.active_index(), 0);
    }

    #[test]
    fn highest_visible_fraction_wins() {
        let mut tracker = SectionTracker::new(["home", "solutions", "platform"]);
        let active = tracker.observe(&[
            sample("home", 0.0),
            sample("solutions", 0.8),
            sample("platform", 0.0),
        ]);
        assert_eq!(active, Some("solutions"));
        assert_eq!(tracker.active_index(), 1);
    }

    #[test]
    fn active_is_always_one_of_the_declared_sections() {
        let mut tracker = SectionTracker::new(["a", "b", "c"]);
        let batches = [
            vec![sample("a", 0.3), sample("b", 0.9)],
            vec![sample("c", 0.5)],
            vec![],
            vec![sample("b", 0.1), sample("c", 0.1)],
        ];
        for batch in &batches {
            let active = tracker.observe(batch).expect("tracker is non-empty");
            assert!(["a", "b", "c"].contains(&active));
        }
    }

    #[test]
    fn retains_previous_active_when_nothing_intersects() {
        let mut tracker = SectionTracker::new(["home", "solutions"]);
        tracker.observe(&[sample("solutions", 0.6)]);
        assert_eq!(tracker.active_id(), Some("solutions"));

        // A fast scroll can momentarily leave the focus band empty.
        let active = tracker.observe(&[
            VisibilitySample::new("home", 0.0, false),
            VisibilitySample::new("solutions", 0.0, false),
        ]);
        assert_eq!(active, Some("solutions"));
    }

    #[test]
    fn equal_ratios_break_ties_by_declaration_order() {
        let mut tracker = SectionTracker::new(["home", "solutions", "platform"]);
        // Sample order is whatever the observer delivered; declaration
        // order decides.
        let active = tracker.observe(&[sample("platform", 0.5), sample("solutions", 0.5)]);
        assert_eq!(active, Some("solutions"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = SectionTracker::new(["home", "solutions"]);
        let active = tracker.observe(&[sample("sidebar", 1.0), sample("home", 0.2)]);
        assert_eq!(active, Some("home"));
    }

    #[test]
    fn empty_tracker_never_activates() {
        let mut tracker = SectionTracker::new(Vec::<String>::new());
        assert!(tracker.is_empty());
        assert_eq!(tracker.active_id(), None);
        assert_eq!(tracker.observe(&[sample("home", 1.0)]), None);
    }
}
