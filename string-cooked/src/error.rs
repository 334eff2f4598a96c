use std::fmt;

use thiserror::Error;

/// Failures raised while cooking a template. Every variant aborts the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CookError {
    /// The template was `null`, `undefined` or `None`.
    #[error("cannot convert undefined or null to object")]
    Conversion,

    /// A literal segment slot below `length` resolved to `undefined`.
    #[error("template elements cannot be undefined (index {index})")]
    MissingSegment { index: u64 },

    /// A symbol reached a coercion that has no symbol rule.
    #[error("cannot convert a Symbol value to a {target}")]
    SymbolConversion { target: CoercionTarget },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionTarget {
    String,
    Number,
}

impl fmt::Display for CoercionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionTarget::String => f.write_str("string"),
            CoercionTarget::Number => f.write_str("number"),
        }
    }
}

impl CookError {
    pub(crate) fn symbol_to_string() -> Self {
        Self::SymbolConversion {
            target: CoercionTarget::String,
        }
    }

    pub(crate) fn symbol_to_number() -> Self {
        Self::SymbolConversion {
            target: CoercionTarget::Number,
        }
    }
}

pub type Result<T> = std::result::Result<T, CookError>;
