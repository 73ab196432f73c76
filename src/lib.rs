//! Vesper front-end semantic passes.
//!
//! This crate ties the workspace together:
//! - [`vesper_core`]: source spans and error types
//! - [`vesper_ast`]: arena-allocated AST node definitions
//! - [`vesper_resolve`]: the control-flow resolution pass
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use vesper::{
//!     Block, Decl, Expr, FunctionDecl, Ident, LiteralExpr, LiteralKind, Program, ReturnStmt,
//!     ReturnTerm, PrimitiveType, Span, Stmt, TypeExpr, resolve_program,
//! };
//!
//! let arena = Bump::new();
//!
//! // fn Main() -> i32 { return 0; }
//! let zero = arena.alloc(Expr::Literal(LiteralExpr {
//!     kind: LiteralKind::Int(0),
//!     span: Span::new(1, 27, 1),
//! }));
//! let ret: &ReturnStmt = arena.alloc(ReturnStmt::new(Some(zero), Span::new(1, 20, 9)));
//! let body = bumpalo::vec![in &arena; Stmt::Return(ret)].into_bump_slice();
//! let main = arena.alloc(FunctionDecl {
//!     name: Ident::new("Main", Span::new(1, 4, 4)),
//!     params: &[],
//!     return_term: ReturnTerm::Explicit(TypeExpr::primitive(
//!         PrimitiveType::Int,
//!         Span::new(1, 13, 3),
//!     )),
//!     body: Some(Block { stmts: body, span: Span::new(1, 18, 13) }),
//!     span: Span::new(1, 1, 31),
//! });
//! let decls = bumpalo::vec![in &arena; Decl::Function(main)].into_bump_slice();
//! let program = Program::new(decls, Span::new(1, 1, 31));
//!
//! resolve_program(&program).unwrap();
//! assert!(ret.function.is_bound());
//! ```

pub use vesper_ast::*;
pub use vesper_core::{ResolveError, Span};
pub use vesper_resolve::{resolve_decl, resolve_program};
