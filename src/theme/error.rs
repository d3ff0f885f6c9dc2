//! Theme configuration errors.

use thiserror::Error;

use super::tokens::TokenGroup;

/// Error raised when token sets violate the shared-shape invariant.
///
/// Both variants indicate that the light and dark token sets have drifted
/// apart. They are configuration bugs to be surfaced, never defaulted over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A lookup required a token the set does not define.
    #[error("token set '{theme}' has no {group} token '{key}'")]
    MissingToken {
        theme: String,
        group: TokenGroup,
        key: String,
    },
    /// Two token sets expected to share a key set do not.
    #[error("token sets '{left}' and '{right}' differ in shape: {}", drift.join(", "))]
    ShapeMismatch {
        left: String,
        right: String,
        /// Qualified keys (`group.key`) present in only one of the sets.
        drift: Vec<String>,
    },
}
