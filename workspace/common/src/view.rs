//! What the dashboard shows for a given user, registry and selection.
//!
//! The client renders this model verbatim, so equal inputs always produce
//! the same title, greeting, buttons and panels.

use model::User;

use crate::cards::CardRegistry;
use crate::selection::CardSelection;

pub const BRAND_TITLE: &str = "NextBanking";

const BUTTON_BASE: &str = "w-40 h-40 rounded-full bg-black text-white hover:bg-gray-800 \
    transition-colors text-lg font-medium flex flex-col items-center justify-center p-4";
const BUTTON_ACTIVE: &str = "ring-4 ring-blue-500";
const PANEL_BASE: &str = "transition-opacity duration-300";
const PANEL_EXPANDED: &str = "opacity-100";
const PANEL_COLLAPSED: &str = "opacity-0 h-0 overflow-hidden";

/// Greeting line under the brand title.
pub fn greeting(user: &User) -> String {
    format!("{}'s dashboard", user.name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardButton {
    pub title: String,
    pub emoji: String,
    pub active: bool,
}

impl CardButton {
    pub fn classes(&self) -> String {
        if self.active {
            format!("{} {}", BUTTON_BASE, BUTTON_ACTIVE)
        } else {
            BUTTON_BASE.to_string()
        }
    }
}

/// A card's content container. Always present in the document; only the
/// expanded one renders its card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPanel {
    pub title: String,
    pub expanded: bool,
}

impl CardPanel {
    pub fn classes(&self) -> String {
        let state = if self.expanded { PANEL_EXPANDED } else { PANEL_COLLAPSED };
        format!("{} {}", PANEL_BASE, state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub title: String,
    pub greeting: String,
    pub buttons: Vec<CardButton>,
    pub panels: Vec<CardPanel>,
}

impl DashboardView {
    /// Builds the view; `user` falls back to `default_user` when absent.
    pub fn build<C>(
        user: Option<&User>,
        default_user: &User,
        registry: &CardRegistry<C>,
        selection: &CardSelection,
    ) -> Self {
        let user = user.unwrap_or(default_user);

        let buttons = registry
            .iter()
            .map(|card| CardButton {
                title: card.title.clone(),
                emoji: card.emoji.clone(),
                active: selection.is_active(&card.title),
            })
            .collect();

        let panels = registry
            .iter()
            .map(|card| CardPanel {
                title: card.title.clone(),
                expanded: selection.is_active(&card.title),
            })
            .collect();

        Self {
            title: BRAND_TITLE.to_string(),
            greeting: greeting(user),
            buttons,
            panels,
        }
    }

    pub fn expanded_panel(&self) -> Option<&CardPanel> {
        self.panels.iter().find(|panel| panel.expanded)
    }
}
