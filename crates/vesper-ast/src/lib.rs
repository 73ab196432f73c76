//! Abstract Syntax Tree (AST) for Vesper.
//!
//! This crate provides the node definitions for parsed Vesper programs:
//! - Top-level declarations (functions, classes, global variables)
//! - Statements, including the suspendable continuation form
//! - Expressions and type terms
//!
//! The AST is arena-allocated: every node borrows from a caller-owned
//! [`bumpalo::Bump`] and remains valid for the lifetime of the arena. Nodes
//! are built by a front end (a parser or a test fixture) and handed to the
//! semantic passes, which annotate the jump statements' [`TargetRef`] slots
//! in place.
//!
//! [`bumpalo::Bump`]: https://docs.rs/bumpalo
//! [`TargetRef`]: stmt::TargetRef

pub mod decl;
pub mod expr;
pub mod stmt;
pub mod types;

pub use decl::*;
pub use expr::*;
pub use stmt::*;
pub use types::*;

use vesper_core::Span;

/// A parsed Vesper program.
///
/// Holds the top-level declarations in source order. The program borrows
/// from the arena that owns its nodes.
#[derive(Debug, Clone, Copy)]
pub struct Program<'ast> {
    decls: &'ast [Decl<'ast>],
    span: Span,
}

impl<'ast> Program<'ast> {
    /// Create a program from its top-level declarations.
    pub fn new(decls: &'ast [Decl<'ast>], span: Span) -> Self {
        Self { decls, span }
    }

    /// Get the top-level declarations in this program.
    pub fn decls(&self) -> &[Decl<'ast>] {
        self.decls
    }

    /// Get the source location span of this program.
    pub fn span(&self) -> Span {
        self.span
    }
}
