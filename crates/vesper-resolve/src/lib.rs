//! Control-flow resolution for Vesper.
//!
//! Runs after parsing and before any pass that needs to know where a jump
//! statement lands. For every `return` it binds the enclosing function, for
//! every `break`/`continue` the innermost enclosing `while`, and it rejects:
//! - jump statements with no valid target ([`ResolveError::MisplacedReturn`],
//!   [`ResolveError::MisplacedBreak`], [`ResolveError::MisplacedContinue`])
//! - a second `return` in a function with an auto return type
//!   ([`ResolveError::DuplicateAutoReturn`])
//! - a `return` whose value presence disagrees with the function's
//!   signature ([`ResolveError::ReturnValueMismatch`])
//!
//! A continuation body is a fresh scope: it inherits neither the enclosing
//! loop nor the enclosing function, so a bare `return` or `break` directly
//! inside one is an error even when the continuation is lexically nested in
//! a function or loop.
//!
//! The walk is a single pre-order, left-to-right recursive descent. The
//! first violation stops the pass; already-bound slots are not rolled back,
//! so an AST whose resolution failed must be discarded.

use vesper_ast::{Block, Decl, FunctionDecl, Program, Stmt, WhileStmt};
use vesper_core::ResolveError;

type Result<T> = std::result::Result<T, ResolveError>;

/// Per-function state for one body traversal.
struct FunctionScope<'ast> {
    /// The function declaration owning the body being walked.
    decl: &'ast FunctionDecl<'ast>,
    /// True once a `return` has been seen in a function with an auto
    /// return type.
    saw_return_in_auto: bool,
}

/// Resolve control-flow edges for every declaration of a program.
///
/// Declarations are processed once each, in source order. On error the AST
/// may be partially annotated and must be discarded; resolving the same AST
/// twice is not supported.
pub fn resolve_program<'ast>(program: &Program<'ast>) -> Result<()> {
    for decl in program.decls() {
        resolve_decl(decl)?;
    }
    Ok(())
}

/// Resolve control-flow edges for a single declaration.
///
/// Classes recurse into their members; each member function gets its own
/// fresh per-function state. Signature-only functions and non-function
/// declarations are no-ops.
pub fn resolve_decl<'ast>(decl: &Decl<'ast>) -> Result<()> {
    match *decl {
        Decl::Function(function) => {
            if let Some(body) = function.body {
                let mut scope = FunctionScope {
                    decl: function,
                    saw_return_in_auto: false,
                };
                resolve_block(body, None, Some(&mut scope))?;
            }
            Ok(())
        }
        Decl::Class(class) => {
            for member in class.members {
                resolve_decl(member)?;
            }
            Ok(())
        }
        Decl::GlobalVar(_) => Ok(()),
    }
}

fn resolve_block<'ast>(
    block: Block<'ast>,
    enclosing_loop: Option<&'ast WhileStmt<'ast>>,
    mut function: Option<&mut FunctionScope<'ast>>,
) -> Result<()> {
    for stmt in block.stmts {
        resolve_stmt(*stmt, enclosing_loop, function.as_deref_mut())?;
    }
    Ok(())
}

/// Resolve the edges in the subtree rooted at `stmt`.
///
/// `enclosing_loop` is the innermost loop that statically encloses `stmt`,
/// and `function` the state of the function body `stmt` belongs to; either
/// is `None` when no such construct encloses the statement, for example
/// inside a continuation body.
fn resolve_stmt<'ast>(
    stmt: Stmt<'ast>,
    enclosing_loop: Option<&'ast WhileStmt<'ast>>,
    mut function: Option<&mut FunctionScope<'ast>>,
) -> Result<()> {
    match stmt {
        Stmt::Return(ret) => {
            let scope = function.ok_or(ResolveError::MisplacedReturn { span: ret.span })?;
            let return_term = scope.decl.return_term;
            if return_term.is_auto() {
                if scope.saw_return_in_auto {
                    return Err(ResolveError::DuplicateAutoReturn { span: ret.span });
                }
                scope.saw_return_in_auto = true;
            }
            ret.function.bind(scope.decl);
            if ret.value.is_none() != return_term.is_omitted() {
                return Err(ResolveError::ReturnValueMismatch {
                    expects_value: !return_term.is_omitted(),
                    span: ret.span,
                });
            }
            Ok(())
        }
        Stmt::Break(brk) => {
            let target = enclosing_loop.ok_or(ResolveError::MisplacedBreak { span: brk.span })?;
            brk.target.bind(target);
            Ok(())
        }
        Stmt::Continue(cont) => {
            let target =
                enclosing_loop.ok_or(ResolveError::MisplacedContinue { span: cont.span })?;
            cont.target.bind(target);
            Ok(())
        }
        Stmt::If(if_stmt) => {
            resolve_stmt(*if_stmt.then_stmt, enclosing_loop, function.as_deref_mut())?;
            if let Some(else_stmt) = if_stmt.else_stmt {
                resolve_stmt(*else_stmt, enclosing_loop, function)?;
            }
            Ok(())
        }
        Stmt::Block(block) => resolve_block(block, enclosing_loop, function),
        Stmt::While(while_stmt) => {
            // The body's innermost loop is this statement; the function
            // scope is unchanged.
            resolve_stmt(*while_stmt.body, Some(while_stmt), function)
        }
        Stmt::Match(match_stmt) => {
            for clause in match_stmt.clauses {
                resolve_stmt(*clause.body, enclosing_loop, function.as_deref_mut())?;
            }
            Ok(())
        }
        // A continuation body carries no enclosing loop and no enclosing
        // function, even when lexically nested inside either.
        Stmt::Continuation(continuation) => resolve_block(continuation.body, None, None),
        Stmt::Expr(_) | Stmt::Assign(_) | Stmt::VarDef(_) | Stmt::Run(_) | Stmt::Await(_) => {
            Ok(())
        }
    }
}
