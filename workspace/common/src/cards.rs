//! Ordered registry of dashboard cards.
//!
//! The registry only knows titles, icons and an opaque content value; the
//! client decides how a content value turns into markup.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// One card's identity: unique title, icon, and what to render when expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor<C> {
    pub title: String,
    pub emoji: String,
    pub content: C,
}

impl<C> CardDescriptor<C> {
    pub fn new(title: impl Into<String>, emoji: impl Into<String>, content: C) -> Self {
        Self {
            title: title.into(),
            emoji: emoji.into(),
            content,
        }
    }
}

/// Cards in display order, keyed by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRegistry<C> {
    cards: Vec<CardDescriptor<C>>,
}

impl<C> Default for CardRegistry<C> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<C> CardRegistry<C> {
    /// Builds a registry, rejecting duplicate titles.
    pub fn new(cards: impl IntoIterator<Item = CardDescriptor<C>>) -> Result<Self, DashboardError> {
        let mut registry = Self::default();
        for card in cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Appends a card at the end of the display order.
    pub fn register(&mut self, card: CardDescriptor<C>) -> Result<(), DashboardError> {
        if self.contains(&card.title) {
            return Err(DashboardError::DuplicateCard(card.title));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn get(&self, title: &str) -> Option<&CardDescriptor<C>> {
        self.cards.iter().find(|card| card.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDescriptor<C>> {
        self.cards.iter()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The financial categories the dashboard can expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardCard {
    UpcomingBills,
    Subscriptions,
    Medications,
    DebtPayoff,
    SavingsGoal,
    SpendingTrends,
    RecentTransactions,
}

impl DashboardCard {
    /// Every card in display order.
    pub const ALL: [DashboardCard; 7] = [
        DashboardCard::UpcomingBills,
        DashboardCard::Subscriptions,
        DashboardCard::Medications,
        DashboardCard::DebtPayoff,
        DashboardCard::SavingsGoal,
        DashboardCard::SpendingTrends,
        DashboardCard::RecentTransactions,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardCard::UpcomingBills => "Upcoming Bills",
            DashboardCard::Subscriptions => "Subscriptions",
            DashboardCard::Medications => "Medications",
            DashboardCard::DebtPayoff => "Debt Payoff",
            DashboardCard::SavingsGoal => "Savings Goal",
            DashboardCard::SpendingTrends => "Spending Trends",
            DashboardCard::RecentTransactions => "Recent Transactions",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            DashboardCard::UpcomingBills => "📅",
            DashboardCard::Subscriptions => "🔄",
            DashboardCard::Medications => "💊",
            DashboardCard::DebtPayoff => "💸",
            DashboardCard::SavingsGoal => "🎯",
            DashboardCard::SpendingTrends => "📊",
            DashboardCard::RecentTransactions => "💳",
        }
    }

    pub fn descriptor(self) -> CardDescriptor<DashboardCard> {
        CardDescriptor::new(self.title(), self.emoji(), self)
    }
}

/// The stock dashboard layout.
pub fn default_registry() -> CardRegistry<DashboardCard> {
    // Titles come from a closed enum, so they are distinct.
    CardRegistry {
        cards: DashboardCard::ALL.iter().map(|card| card.descriptor()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = default_registry();
        assert_eq!(
            registry.titles(),
            vec![
                "Upcoming Bills",
                "Subscriptions",
                "Medications",
                "Debt Payoff",
                "Savings Goal",
                "Spending Trends",
                "Recent Transactions",
            ]
        );
    }

    #[test]
    fn test_default_registry_titles_are_unique() {
        let descriptors: Vec<_> = default_registry().iter().cloned().collect();
        assert!(CardRegistry::new(descriptors).is_ok());
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let result = CardRegistry::new(vec![
            CardDescriptor::new("Bills", "📅", 1),
            CardDescriptor::new("Bills", "🔄", 2),
        ]);
        assert_eq!(result, Err(DashboardError::DuplicateCard("Bills".to_string())));
    }

    #[test]
    fn test_register_appends() {
        let mut registry = default_registry();
        let extra = CardDescriptor::new("New Feature", "✨", DashboardCard::SavingsGoal);
        registry.register(extra).unwrap();

        assert_eq!(registry.len(), 8);
        assert_eq!(registry.titles().last(), Some(&"New Feature"));
    }

    #[test]
    fn test_lookup_by_title() {
        let registry = default_registry();
        let card = registry.get("Debt Payoff").unwrap();

        assert_eq!(card.emoji, "💸");
        assert_eq!(card.content, DashboardCard::DebtPayoff);
        assert!(registry.get("Taxes").is_none());
    }
}
