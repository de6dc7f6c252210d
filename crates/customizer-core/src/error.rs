//! Error types for option catalog lookups and panel updates.

use thiserror::Error;

use crate::options::ArticleAttribute;

/// Primary error type for catalog and draft operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// Form key did not name a known attribute.
    #[error("unknown article attribute")]
    UnknownAttribute {
        /// Key provided by the caller.
        key: String,
    },
    /// Value is not part of the attribute's option set.
    #[error("unknown option value")]
    UnknownOption {
        /// Attribute whose set was searched.
        attribute: ArticleAttribute,
        /// Value provided by the caller.
        value: String,
    },
    /// Option belongs to a different attribute's set.
    #[error("option does not belong to attribute")]
    MismatchedOption {
        /// Attribute the option was assigned to.
        attribute: ArticleAttribute,
        /// Value of the rejected option.
        value: &'static str,
    },
}

/// Convenience alias for catalog results.
pub type OptionResult<T> = Result<T, OptionError>;
