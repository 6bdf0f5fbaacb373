//! Error types for menu domain validation.

use thiserror::Error;

use super::UserId;

/// Errors raised by menu domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuDomainError {
    /// The interacting user is not the one the menu was opened for.
    #[error("user {0} is not authorized to interact with this menu")]
    Unauthorized(UserId),

    /// A platform component key does not map to any intent.
    #[error("unknown menu component '{0}'")]
    UnknownComponent(String),
}
