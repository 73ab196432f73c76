//! Vesper core types.
//!
//! This crate provides the types shared by every phase of Vesper processing:
//! - Source location tracking ([`Span`])
//! - Error types for semantic analysis ([`ResolveError`])

pub mod error;
pub mod span;

pub use error::ResolveError;
pub use span::Span;
