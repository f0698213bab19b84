//! Ordered walk over a role's flow.
//!
//! The navigator owns no state beyond the role; every question is
//! answered against the flow array and the current answers. Screens
//! whose precondition fails are invisible in both directions.

use crate::domain::answers::AnswerStore;
use crate::domain::foundation::Role;

use super::flow::flow;
use super::screen::ScreenId;

/// Walks a role's screen flow, honoring preconditions.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    role: Role,
}

impl Navigator {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The first visible screen of the flow.
    pub fn first_screen(&self, store: &AnswerStore) -> ScreenId {
        let screens = flow(self.role);
        screens
            .iter()
            .copied()
            .find(|screen| screen.precondition(store))
            // The welcome screen has no precondition, so the flow is
            // never empty of visible screens.
            .unwrap_or(screens[0])
    }

    /// Whether the screen belongs to this role's flow.
    pub fn contains(&self, screen: ScreenId) -> bool {
        self.position(screen).is_some()
    }

    /// Whether the screen is the start of the flow.
    pub fn is_first_screen(&self, screen: ScreenId, store: &AnswerStore) -> bool {
        self.previous_screen(screen, store).is_none()
    }

    /// The next visible screen after `current`, or `None` at the end.
    ///
    /// Returns `None` as well when `current` is not in this role's flow.
    pub fn next_screen(&self, current: ScreenId, store: &AnswerStore) -> Option<ScreenId> {
        let screens = flow(self.role);
        let position = self.position(current)?;
        screens[position + 1..]
            .iter()
            .copied()
            .find(|screen| screen.precondition(store))
    }

    /// The closest visible screen before `current`, or `None` at the start.
    pub fn previous_screen(&self, current: ScreenId, store: &AnswerStore) -> Option<ScreenId> {
        let screens = flow(self.role);
        let position = self.position(current)?;
        screens[..position]
            .iter()
            .rev()
            .copied()
            .find(|screen| screen.precondition(store))
    }

    fn position(&self, screen: ScreenId) -> Option<usize> {
        flow(self.role).iter().position(|s| *s == screen)
    }
}
