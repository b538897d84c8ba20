//! Which card is expanded.
//!
//! At most one card is active at a time. Clicking the active card collapses
//! it; clicking any other card replaces the active one.

use tracing::debug;

use crate::cards::CardRegistry;
use crate::error::DashboardError;

/// The active card title, if any. Always `None` or a registered title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSelection {
    active: Option<String>,
}

/// What a toggle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// `title` is now expanded; `replaced` was collapsed to make room.
    Expanded {
        title: String,
        replaced: Option<String>,
    },
    /// `title` was expanded and is now collapsed.
    Collapsed { title: String },
}

impl Transition {
    /// The panel that should be scrolled into view, if any.
    pub fn scroll_target(&self) -> Option<&str> {
        match self {
            Transition::Expanded { title, .. } => Some(title),
            Transition::Collapsed { .. } => None,
        }
    }
}

impl CardSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, title: &str) -> bool {
        self.active.as_deref() == Some(title)
    }

    /// Applies a click on `title`.
    ///
    /// Unknown titles leave the selection untouched.
    pub fn toggle<C>(
        &mut self,
        registry: &CardRegistry<C>,
        title: &str,
    ) -> Result<Transition, DashboardError> {
        if !registry.contains(title) {
            return Err(DashboardError::UnknownCard(title.to_string()));
        }

        let transition = if self.is_active(title) {
            self.active = None;
            Transition::Collapsed {
                title: title.to_string(),
            }
        } else {
            let replaced = self.active.replace(title.to_string());
            Transition::Expanded {
                title: title.to_string(),
                replaced,
            }
        };

        debug!(?transition, "Card selection changed");
        Ok(transition)
    }

    /// Collapses whatever is open.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::default_registry;
    use proptest::prelude::*;
    use std::sync::Mutex;

    #[test]
    fn test_starts_collapsed() {
        assert_eq!(CardSelection::new().active(), None);
    }

    #[test]
    fn test_click_expands() {
        let registry = default_registry();
        let mut selection = CardSelection::new();

        let transition = selection.toggle(&registry, "Medications").unwrap();

        assert_eq!(selection.active(), Some("Medications"));
        assert_eq!(
            transition,
            Transition::Expanded {
                title: "Medications".to_string(),
                replaced: None
            }
        );
        assert_eq!(transition.scroll_target(), Some("Medications"));
    }

    #[test]
    fn test_click_same_card_collapses() {
        let registry = default_registry();
        let mut selection = CardSelection::new();

        selection.toggle(&registry, "Savings Goal").unwrap();
        let transition = selection.toggle(&registry, "Savings Goal").unwrap();

        assert_eq!(selection.active(), None);
        assert_eq!(transition.scroll_target(), None);
    }

    #[test]
    fn test_click_other_card_replaces() {
        let registry = default_registry();
        let mut selection = CardSelection::new();

        selection.toggle(&registry, "Upcoming Bills").unwrap();
        let transition = selection.toggle(&registry, "Debt Payoff").unwrap();

        assert_eq!(selection.active(), Some("Debt Payoff"));
        assert!(!selection.is_active("Upcoming Bills"));
        assert_eq!(
            transition,
            Transition::Expanded {
                title: "Debt Payoff".to_string(),
                replaced: Some("Upcoming Bills".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_card_leaves_state() {
        let registry = default_registry();
        let mut selection = CardSelection::new();
        selection.toggle(&registry, "Subscriptions").unwrap();

        let result = selection.toggle(&registry, "Taxes");

        assert_eq!(result, Err(DashboardError::UnknownCard("Taxes".to_string())));
        assert_eq!(selection.active(), Some("Subscriptions"));
    }

    #[test]
    fn test_clear() {
        let registry = default_registry();
        let mut selection = CardSelection::new();
        selection.toggle(&registry, "Subscriptions").unwrap();

        selection.clear();

        assert_eq!(selection.active(), None);
    }

    fn click_sequence() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0..7usize, 0..40)
    }

    proptest! {
        #[test]
        fn prop_at_most_one_card_expanded(clicks in click_sequence()) {
            let registry = default_registry();
            let titles = registry.titles();
            let mut selection = CardSelection::new();

            for index in clicks {
                let title = titles[index];
                let was_active = selection.is_active(title);
                selection.toggle(&registry, title).unwrap();

                let expanded = titles.iter().filter(|t| selection.is_active(t)).count();
                prop_assert!(expanded <= 1);

                if was_active {
                    prop_assert_eq!(selection.active(), None);
                } else {
                    prop_assert_eq!(selection.active(), Some(title));
                }
            }
        }

        #[test]
        fn prop_second_click_on_other_card_wins(a in 0..7usize, b in 0..7usize) {
            prop_assume!(a != b);
            let registry = default_registry();
            let titles = registry.titles();
            let mut selection = CardSelection::new();

            selection.toggle(&registry, titles[a]).unwrap();
            selection.toggle(&registry, titles[b]).unwrap();

            prop_assert!(selection.is_active(titles[b]));
            prop_assert!(!selection.is_active(titles[a]));
        }
    }

    /// Collects `log` records; the browser client only installs a `log` logger.
    struct CapturedLog(Mutex<Vec<String>>);

    impl log::Log for CapturedLog {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.0.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static CAPTURED: CapturedLog = CapturedLog(Mutex::new(Vec::new()));

    #[test]
    fn test_transitions_reach_log_facade() {
        log::set_logger(&CAPTURED).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        let mut selection = CardSelection::new();
        selection.toggle(&default_registry(), "Subscriptions").unwrap();

        let records = CAPTURED.0.lock().unwrap();
        assert!(
            records
                .iter()
                .any(|line| line.contains("Card selection changed") && line.contains("Subscriptions")),
            "{:?}",
            *records
        );
    }
}
