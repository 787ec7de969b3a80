//! State machine for the case-study detail overlay.

/// Tabs inside the case-study overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTab {
    Overview,
    Results,
    Gallery,
}

impl CaseTab {
    pub const ALL: [CaseTab; 3] = [CaseTab::Overview, CaseTab::Results, CaseTab::Gallery];

    /// Parses a tab name, rejecting anything outside the recognised set
    /// so an unknown name can never be stored in the overlay state.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "overview" => Some(CaseTab::Overview),
            "results" => Some(CaseTab::Results),
            "gallery" => Some(CaseTab::Gallery),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseTab::Overview => "Overview",
            CaseTab::Results => "Results",
            CaseTab::Gallery => "Gallery",
        }
    }
}

/// Overlay state as a tagged variant: a selected case exists exactly when
/// the overlay is open, so the "open implies a case" invariant holds by
/// construction. The case is an index into the fixed case-study list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open { case: usize, tab: CaseTab },
}

impl OverlayState {
    /// Opens the overlay on a case. Opening always lands on the overview
    /// tab, regardless of where a previous visit left off.
    pub fn select(self, case: usize) -> Self {
        OverlayState::Open {
            case,
            tab: CaseTab::Overview,
        }
    }

    /// Switches tab while open; ignored when closed.
    pub fn switch_tab(self, tab: CaseTab) -> Self {
        match self {
            OverlayState::Open { case, .. } => OverlayState::Open { case, tab },
            OverlayState::Closed => OverlayState::Closed,
        }
    }

    /// Closes the overlay. Safe to invoke when already closed; dismissal
    /// signals can arrive twice (Escape plus a backdrop click).
    pub fn dismiss(self) -> Self {
        OverlayState::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open { .. })
    }

    pub fn case(&self) -> Option<usize> {
        match self {
            OverlayState::Open { case, .. } => Some(*case),
            OverlayState::Closed => None,
        }
    }

    pub fn tab(&self) -> Option<CaseTab> {
        match self {
            OverlayState::Open { tab, .. } => Some(*tab),
            OverlayState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_no_case() {
        let state = OverlayState::default();
        assert!(!state.is_open());
        assert_eq!(state.case(), None);
        assert_eq!(state.tab(), None);
    }

    #[test]
    fn select_opens_on_overview() {
        let state = OverlayState::default().select(2);
        assert_eq!(
            state,
            OverlayState::Open {
                case: 2,
                tab: CaseTab::Overview
            }
        );
    }

    #[test]
    fn switching_tab_keeps_the_case() {
        let state = OverlayState::default().select(1).switch_tab(CaseTab::Gallery);
        assert_eq!(state.case(), Some(1));
        assert_eq!(state.tab(), Some(CaseTab::Gallery));
        assert!(state.is_open());
    }

    #[test]
    fn tab_resets_to_overview_on_reopen() {
        let state = OverlayState::default()
            .select(0)
            .switch_tab(CaseTab::Results)
            .dismiss()
            .select(1);
        assert_eq!(state.tab(), Some(CaseTab::Overview));
        assert_eq!(state.case(), Some(1));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let open = OverlayState::default().select(0);
        let closed = open.dismiss();
        assert_eq!(closed, OverlayState::Closed);
        assert_eq!(closed.dismiss(), OverlayState::Closed);
    }

    #[test]
    fn tab_switch_while_closed_is_a_no_op() {
        let state = OverlayState::Closed.switch_tab(CaseTab::Gallery);
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn open_implies_case_and_tab_in_all_reachable_states() {
        let mut states = vec![OverlayState::default()];
        // Breadth-one walk over every transition from a handful of seeds.
        for _ in 0..3 {
            let mut next = Vec::new();
            for state in &states {
                next.push(state.select(0));
                next.push(state.select(1));
                for tab in CaseTab::ALL {
                    next.push(state.switch_tab(tab));
                }
                next.push(state.dismiss());
            }
            states = next;
            for state in &states {
                assert_eq!(state.is_open(), state.case().is_some());
                assert_eq!(state.is_open(), state.tab().is_some());
            }
        }
    }

    #[test]
    fn parse_rejects_unknown_tab_names() {
        assert_eq!(CaseTab::parse("overview"), Some(CaseTab::Overview));
        assert_eq!(CaseTab::parse("results"), Some(CaseTab::Results));
        assert_eq!(CaseTab::parse("gallery"), Some(CaseTab::Gallery));
        assert_eq!(CaseTab::parse("Overview"), None);
        assert_eq!(CaseTab::parse("metrics"), None);
        assert_eq!(CaseTab::parse(""), None);
    }
}
