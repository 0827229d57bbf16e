//! Error types for name parsing

use thiserror::Error;

/// Errors raised when a logo or variant is named by free-form text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLogoError {
    #[error("unknown logo '{}' (expected one of: {})", .0, crate::logo::LogoId::names().join(", "))]
    UnknownLogo(String),
    #[error("unknown variant '{0}' (expected 'dark' or 'light')")]
    UnknownVariant(String),
}
