//! Error types for control-flow resolution.
//!
//! Every violation detected by the resolver is a hard failure: the pass stops
//! at the first error and the program is rejected with a single diagnostic
//! carrying the offending statement's source location.

use thiserror::Error;

use crate::Span;

/// Errors raised while resolving control-flow edges.
///
/// Each variant corresponds to one way a `return`, `break`, or `continue`
/// can be misused. The span always points at the statement that caused the
/// violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// A `return` statement appeared outside any function body.
    ///
    /// This includes `return` inside a continuation body, which does not
    /// inherit the surrounding function's scope.
    #[error("at {span}: return is not within a function body")]
    MisplacedReturn {
        /// Where the `return` occurred.
        span: Span,
    },

    /// A `break` statement appeared outside any loop body.
    #[error("at {span}: break is not within a loop body")]
    MisplacedBreak {
        /// Where the `break` occurred.
        span: Span,
    },

    /// A `continue` statement appeared outside any loop body.
    #[error("at {span}: continue is not within a loop body")]
    MisplacedContinue {
        /// Where the `continue` occurred.
        span: Span,
    },

    /// A second `return` statement in a function with an auto return type.
    ///
    /// The count is syntactic: two returns in mutually exclusive branches
    /// are still rejected, and the error points at the second return in
    /// source order.
    #[error("at {span}: only one return is allowed in a function with an auto return type")]
    DuplicateAutoReturn {
        /// Where the second `return` occurred.
        span: Span,
    },

    /// A `return`'s value presence disagrees with the function's signature.
    #[error(
        "at {span}: return should {} a value, to match the function's signature",
        if *expects_value { "provide" } else { "not provide" }
    )]
    ReturnValueMismatch {
        /// Whether the function's signature requires a return value.
        expects_value: bool,
        /// Where the `return` occurred.
        span: Span,
    },
}

impl ResolveError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            ResolveError::MisplacedReturn { span }
            | ResolveError::MisplacedBreak { span }
            | ResolveError::MisplacedContinue { span }
            | ResolveError::DuplicateAutoReturn { span }
            | ResolveError::ReturnValueMismatch { span, .. } => *span,
        }
    }
}
