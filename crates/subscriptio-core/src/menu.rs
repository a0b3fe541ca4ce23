//! Collapsible mobile navigation menu.

/// Whether the mobile menu is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger button was activated.
    ToggleButton,
    /// A link inside the menu was activated.
    NavigationLink,
}

impl MenuState {
    /// Next state after `event`.
    pub fn on(self, event: MenuEvent) -> Self {
        let next = match (self, event) {
            (Self::Closed, MenuEvent::ToggleButton) => Self::Open,
            (Self::Open, MenuEvent::ToggleButton) => Self::Closed,
            (_, MenuEvent::NavigationLink) => Self::Closed,
        };
        tracing::trace!(from = ?self, ?event, to = ?next, "menu transition");
        next
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// `aria-label` for the toggle button in this state.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Closed => "Open navigation menu",
            Self::Open => "Close navigation menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_button_flips() {
        let open = MenuState::Closed.on(MenuEvent::ToggleButton);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.on(MenuEvent::ToggleButton), MenuState::Closed);
    }

    #[test]
    fn test_navigation_link_closes() {
        assert_eq!(MenuState::Open.on(MenuEvent::NavigationLink), MenuState::Closed);
        assert_eq!(MenuState::Closed.on(MenuEvent::NavigationLink), MenuState::Closed);
    }
}
