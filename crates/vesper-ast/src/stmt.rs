//! Statement AST nodes for Vesper.
//!
//! Provides nodes for all statement types including:
//! - Expression statements, assignments, variable definitions
//! - Control flow (if, while, match)
//! - Jump statements (return, break, continue)
//! - Continuations (`__continuation` / `__run` / `__await`)
//! - Blocks
//!
//! Jump statements carry a [`TargetRef`] slot naming the construct they jump
//! to: the enclosing function for `return`, the innermost enclosing `while`
//! for `break`/`continue`. Parsers leave the slots unbound; the control-flow
//! resolution pass binds each one exactly once.

use std::cell::Cell;
use std::fmt;

use crate::decl::FunctionDecl;
use crate::expr::{Expr, Ident};
use crate::types::TypeExpr;
use vesper_core::Span;

/// A non-owning back-reference from a jump statement to its target.
///
/// Unbound until control-flow resolution runs, then bound exactly once.
/// Holds identity only: the reference is never traversed by later passes,
/// only compared.
pub struct TargetRef<'ast, T> {
    cell: Cell<Option<&'ast T>>,
}

impl<'ast, T> TargetRef<'ast, T> {
    /// Create an unbound slot.
    pub fn unbound() -> Self {
        Self {
            cell: Cell::new(None),
        }
    }

    /// Bind the slot to its target.
    ///
    /// Slots are bound at most once; resolving the same AST twice is not
    /// supported.
    pub fn bind(&self, target: &'ast T) {
        debug_assert!(self.cell.get().is_none(), "control-flow target bound twice");
        self.cell.set(Some(target));
    }

    /// The resolved target, if the resolution pass has run.
    pub fn get(&self) -> Option<&'ast T> {
        self.cell.get()
    }

    /// Whether the slot has been bound.
    pub fn is_bound(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<'ast, T> Default for TargetRef<'ast, T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<'ast, T> Clone for TargetRef<'ast, T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

// The target is reachable from the statement it is stored on, so a derived
// Debug would recurse through the back edge forever. Print bound-ness only.
impl<'ast, T> fmt::Debug for TargetRef<'ast, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bound() {
            f.write_str("TargetRef(bound)")
        } else {
            f.write_str("TargetRef(unbound)")
        }
    }
}

// Identity comparison: two slots are equal when they name the same node.
impl<'ast, T> PartialEq for TargetRef<'ast, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.cell.get(), other.cell.get()) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }
}

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Expression statement (expr;)
    Expr(ExprStmt<'ast>),
    /// Assignment (target = value;)
    Assign(AssignStmt<'ast>),
    /// Variable definition (var x = init;)
    VarDef(VarDefStmt<'ast>),
    /// Return statement
    Return(&'ast ReturnStmt<'ast>),
    /// Break statement
    Break(&'ast BreakStmt<'ast>),
    /// Continue statement
    Continue(&'ast ContinueStmt<'ast>),
    /// If statement
    If(&'ast IfStmt<'ast>),
    /// Block statement
    Block(Block<'ast>),
    /// While loop
    While(&'ast WhileStmt<'ast>),
    /// Match statement
    Match(&'ast MatchStmt<'ast>),
    /// Continuation definition
    Continuation(&'ast ContinuationStmt<'ast>),
    /// Run statement (`__run cont;`)
    Run(RunStmt<'ast>),
    /// Await statement (`__await;`)
    Await(AwaitStmt),
}

impl<'ast> Stmt<'ast> {
    /// Get the span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Self::Expr(s) => s.span,
            Self::Assign(s) => s.span,
            Self::VarDef(s) => s.span,
            Self::Return(s) => s.span,
            Self::Break(s) => s.span,
            Self::Continue(s) => s.span,
            Self::If(s) => s.span,
            Self::Block(s) => s.span,
            Self::While(s) => s.span,
            Self::Match(s) => s.span,
            Self::Continuation(s) => s.span,
            Self::Run(s) => s.span,
            Self::Await(s) => s.span,
        }
    }
}

/// An expression statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    /// The expression
    pub expr: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An assignment statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    /// Assignment target
    pub target: &'ast Expr<'ast>,
    /// Assigned value
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A variable definition.
///
/// Example: `var x: i32 = 5;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDefStmt<'ast> {
    /// Variable name
    pub name: Ident<'ast>,
    /// Optional type annotation
    pub ty: Option<TypeExpr<'ast>>,
    /// Initializer
    pub init: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A return statement.
///
/// Examples:
/// - `return;`
/// - `return expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt<'ast> {
    /// Returned value, absent for a bare `return;`
    pub value: Option<&'ast Expr<'ast>>,
    /// The function this return belongs to; bound by control-flow resolution
    pub function: TargetRef<'ast, FunctionDecl<'ast>>,
    /// Source location
    pub span: Span,
}

impl<'ast> ReturnStmt<'ast> {
    /// Create an unresolved return statement.
    pub fn new(value: Option<&'ast Expr<'ast>>, span: Span) -> Self {
        Self {
            value,
            function: TargetRef::unbound(),
            span,
        }
    }
}

/// A break statement.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt<'ast> {
    /// The loop this break exits; bound by control-flow resolution
    pub target: TargetRef<'ast, WhileStmt<'ast>>,
    /// Source location
    pub span: Span,
}

impl<'ast> BreakStmt<'ast> {
    /// Create an unresolved break statement.
    pub fn new(span: Span) -> Self {
        Self {
            target: TargetRef::unbound(),
            span,
        }
    }
}

/// A continue statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt<'ast> {
    /// The loop this continue re-enters; bound by control-flow resolution
    pub target: TargetRef<'ast, WhileStmt<'ast>>,
    /// Source location
    pub span: Span,
}

impl<'ast> ContinueStmt<'ast> {
    /// Create an unresolved continue statement.
    pub fn new(span: Span) -> Self {
        Self {
            target: TargetRef::unbound(),
            span,
        }
    }
}

/// An if statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    /// Condition
    pub condition: &'ast Expr<'ast>,
    /// Then branch
    pub then_stmt: &'ast Stmt<'ast>,
    /// Optional else branch
    pub else_stmt: Option<&'ast Stmt<'ast>>,
    /// Source location
    pub span: Span,
}

/// A block of statements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    /// Statements in the block
    pub stmts: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// A while loop.
///
/// The only loop form in the grammar; break and continue targets always
/// name a while statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    /// Condition
    pub condition: &'ast Expr<'ast>,
    /// Body
    pub body: &'ast Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A match statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchStmt<'ast> {
    /// Expression to match on
    pub scrutinee: &'ast Expr<'ast>,
    /// Clauses in source order
    pub clauses: &'ast [MatchClause<'ast>],
    /// Source location
    pub span: Span,
}

/// A single clause of a match statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchClause<'ast> {
    /// The pattern this clause matches
    pub pattern: Pattern<'ast>,
    /// Executed when the pattern matches
    pub body: &'ast Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A match pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern<'ast> {
    /// `_`: matches anything
    Wildcard(WildcardPattern),
    /// Matches when the scrutinee equals the expression's value
    Expr(&'ast Expr<'ast>),
}

impl<'ast> Pattern<'ast> {
    /// Get the span of this pattern.
    pub fn span(&self) -> Span {
        match self {
            Self::Wildcard(p) => p.span,
            Self::Expr(e) => e.span(),
        }
    }
}

/// The `_` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WildcardPattern {
    /// Source location
    pub span: Span,
}

/// A continuation definition.
///
/// Example: `__continuation k { ... }`
///
/// The body is a fresh scope: it inherits neither the enclosing loop nor
/// the enclosing function context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuationStmt<'ast> {
    /// Continuation name
    pub name: Ident<'ast>,
    /// Body
    pub body: Block<'ast>,
    /// Source location
    pub span: Span,
}

/// A run statement, resuming a continuation.
///
/// Example: `__run k;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStmt<'ast> {
    /// The continuation to resume
    pub argument: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An await statement, suspending the current continuation.
///
/// Example: `__await;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwaitStmt {
    /// Source location
    pub span: Span,
}
