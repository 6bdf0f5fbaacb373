//! Single-user interaction filter.

use super::{MenuDomainError, UserId};

/// Admits interactions from the user who opened the menu and nobody else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationGate {
    authorized: UserId,
}

impl AuthorizationGate {
    /// Creates a gate for the given user.
    #[must_use]
    pub const fn new(authorized: UserId) -> Self {
        Self { authorized }
    }

    /// Returns the authorized user.
    #[must_use]
    pub const fn authorized(&self) -> UserId {
        self.authorized
    }

    /// Checks an interaction originator.
    ///
    /// # Errors
    ///
    /// Returns [`MenuDomainError::Unauthorized`] for any other user.
    pub fn check(&self, user: UserId) -> Result<(), MenuDomainError> {
        if user == self.authorized {
            Ok(())
        } else {
            Err(MenuDomainError::Unauthorized(user))
        }
    }
}
