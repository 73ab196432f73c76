//! Declaration AST nodes for Vesper.
//!
//! Provides nodes for all top-level declarations:
//! - Functions
//! - Classes (whose members are themselves declarations)
//! - Global variables

use crate::expr::{Expr, Ident};
use crate::stmt::Block;
use crate::types::{ReturnTerm, TypeExpr};
use vesper_core::Span;

/// A top-level declaration.
///
/// Function and class declarations are always arena-allocated so statements
/// can hold identity back-references to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decl<'ast> {
    /// Function declaration
    Function(&'ast FunctionDecl<'ast>),
    /// Class declaration
    Class(&'ast ClassDecl<'ast>),
    /// Global variable declaration
    GlobalVar(&'ast GlobalVarDecl<'ast>),
}

impl<'ast> Decl<'ast> {
    /// Get the span of this declaration.
    pub fn span(&self) -> Span {
        match self {
            Self::Function(d) => d.span,
            Self::Class(d) => d.span,
            Self::GlobalVar(d) => d.span,
        }
    }
}

/// A function declaration.
///
/// Examples:
/// - `fn Main() -> i32 { return 0; }`
/// - `fn Log(msg: string) { ... }`
/// - `fn Pick(c: bool) -> auto { ... }`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDecl<'ast> {
    /// Function name
    pub name: Ident<'ast>,
    /// Parameters
    pub params: &'ast [Param<'ast>],
    /// Return contract: explicit type, omitted, or deduced (`auto`)
    pub return_term: ReturnTerm<'ast>,
    /// Body (None for a signature-only declaration)
    pub body: Option<Block<'ast>>,
    /// Source location
    pub span: Span,
}

/// A function parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param<'ast> {
    /// Parameter name
    pub name: Ident<'ast>,
    /// Parameter type
    pub ty: TypeExpr<'ast>,
    /// Source location
    pub span: Span,
}

/// A class declaration.
///
/// Example:
/// ```vesper
/// class Counter {
///     fn Increment() { ... }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassDecl<'ast> {
    /// Class name
    pub name: Ident<'ast>,
    /// Class members; may themselves be function declarations
    pub members: &'ast [Decl<'ast>],
    /// Source location
    pub span: Span,
}

/// A global variable declaration.
///
/// Example: `var counter: i32 = 0;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalVarDecl<'ast> {
    /// Variable name
    pub name: Ident<'ast>,
    /// Variable type
    pub ty: TypeExpr<'ast>,
    /// Optional initializer
    pub init: Option<&'ast Expr<'ast>>,
    /// Source location
    pub span: Span,
}
