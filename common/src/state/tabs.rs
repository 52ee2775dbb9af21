use std::fmt;

use log::debug;

/// The two views of the review panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Reviews,
    MakeReview,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 2] = [Tab::Reviews, Tab::MakeReview];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Reviews => "Reviews",
            Tab::MakeReview => "Make a Review",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which review panel view is visible. Both views stay alive; only visibility changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabsState {
    active: Tab,
}

impl TabsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!("tabs: {} -> {}", self.active, tab);
        self.active = tab;
    }

    /// A review was just submitted: go back to the list so it is visible.
    pub fn on_review_submitted(&mut self) {
        self.select_tab(Tab::Reviews);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_reviews() {
        let tabs = TabsState::new();
        assert_eq!(tabs.active(), Tab::Reviews);
        assert!(tabs.is_active(Tab::Reviews));
        assert!(!tabs.is_active(Tab::MakeReview));
    }

    #[test]
    fn labels_in_display_order() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels, vec!["Reviews", "Make a Review"]);
        assert_eq!(Tab::MakeReview.to_string(), "Make a Review");
    }

    #[test]
    fn submission_snaps_back_to_reviews() {
        let mut tabs = TabsState::new();
        tabs.select_tab(Tab::MakeReview);
        assert_eq!(tabs.active(), Tab::MakeReview);

        tabs.on_review_submitted();
        assert_eq!(tabs.active(), Tab::Reviews);

        tabs.on_review_submitted();
        assert_eq!(tabs.active(), Tab::Reviews);
    }
}
