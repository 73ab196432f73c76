//! Integration tests for control-flow resolution.
//!
//! These tests assemble whole programs the way a front end would and check
//! that every jump statement resolves to the right target, and that each
//! misuse is rejected with the right diagnostic at the right location.


use bumpalo::Bump;
use fixtures::*;
use vesper::{ClassDecl, Decl, Ident, ResolveError, ReturnTerm, Span, resolve_decl, resolve_program};

#[test]
fn return_in_explicit_function_resolves() {
    // fn f() -> i32 { return 1; }
    let arena = Bump::new();
    let (ret_stmt, ret_node) = ret(&arena, Some(int(&arena, 1, 1)), 1);
    let f = function(
        &arena,
        "f",
        &[],
        ReturnTerm::Explicit(int_type(1)),
        Some(block(&arena, &[ret_node], 1)),
        1,
    );

    resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap();
    assert!(std::ptr::eq(ret_stmt.function.get().unwrap(), f));
}

#[test]
fn break_in_loop_resolves_to_the_while() {
    // fn f() { while (true) { break; } }
    let arena = Bump::new();
    let (brk_stmt, brk_node) = brk(&arena, 2);
    let loop_body = block_stmt(&arena, &[brk_node], 1);
    let (while_stmt, while_node) = while_loop(&arena, boolean(&arena, true, 1), loop_body, 1);
    let f = function(
        &arena,
        "f",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[while_node], 1)),
        1,
    );

    resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap();
    assert!(std::ptr::eq(brk_stmt.target.get().unwrap(), while_stmt));
}

#[test]
fn auto_function_with_two_exclusive_returns_is_rejected_at_the_second() {
    // fn f(c: bool) -> auto { if (c) { return 1; } else { return 2; } }
    let arena = Bump::new();
    let (_, first) = ret(&arena, Some(int(&arena, 1, 2)), 2);
    let (_, second) = ret(&arena, Some(int(&arena, 2, 4)), 4);
    let if_node = if_else(
        &arena,
        var(&arena, "c", 1),
        block_stmt(&arena, &[first], 2),
        Some(block_stmt(&arena, &[second], 4)),
        1,
    );
    let f = function(
        &arena,
        "f",
        &[param("c", 1)],
        ReturnTerm::Auto,
        Some(block(&arena, &[if_node], 1)),
        1,
    );

    let err = resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap_err();
    assert_eq!(
        err,
        ResolveError::DuplicateAutoReturn {
            span: Span::new(4, 5, 6)
        }
    );
}

#[test]
fn omitted_return_term_allows_many_bare_returns() {
    // fn f(c: bool) { if (c) { return; } return; }
    let arena = Bump::new();
    let (first_ret, first) = ret(&arena, None, 2);
    let (second_ret, second) = ret(&arena, None, 3);
    let if_node = if_else(
        &arena,
        var(&arena, "c", 1),
        block_stmt(&arena, &[first], 2),
        None,
        1,
    );
    let f = function(
        &arena,
        "f",
        &[param("c", 1)],
        ReturnTerm::Omitted,
        Some(block(&arena, &[if_node, second], 1)),
        1,
    );

    resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap();
    assert!(std::ptr::eq(first_ret.function.get().unwrap(), f));
    assert!(std::ptr::eq(second_ret.function.get().unwrap(), f));
}

#[test]
fn nested_loops_bind_the_innermost_while() {
    // fn f() {
    //     while (true) {
    //         while (true) { continue; }
    //         break;
    //     }
    // }
    let arena = Bump::new();
    let (cont_stmt, cont_node) = cont(&arena, 3);
    let inner_body = block_stmt(&arena, &[cont_node], 3);
    let (inner, inner_node) = while_loop(&arena, boolean(&arena, true, 3), inner_body, 3);
    let (brk_stmt, brk_node) = brk(&arena, 4);
    let outer_body = block_stmt(&arena, &[inner_node, brk_node], 2);
    let (outer, outer_node) = while_loop(&arena, boolean(&arena, true, 2), outer_body, 2);
    let f = function(
        &arena,
        "f",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[outer_node], 1)),
        1,
    );

    resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap();
    assert!(std::ptr::eq(cont_stmt.target.get().unwrap(), inner));
    assert!(std::ptr::eq(brk_stmt.target.get().unwrap(), outer));
}

#[test]
fn break_resolves_through_match_and_if_wrapping() {
    // fn f(x: i32) {
    //     while (true) {
    //         match (x) { _ => { if (true) { break; } } }
    //     }
    // }
    let arena = Bump::new();
    let (brk_stmt, brk_node) = brk(&arena, 4);
    let if_node = if_else(
        &arena,
        boolean(&arena, true, 4),
        block_stmt(&arena, &[brk_node], 4),
        None,
        4,
    );
    let clause_body = block_stmt(&arena, &[if_node], 3);
    let match_node = match_any(&arena, var(&arena, "x", 3), clause_body, 3);
    let loop_body = block_stmt(&arena, &[match_node], 2);
    let (while_stmt, while_node) = while_loop(&arena, boolean(&arena, true, 2), loop_body, 2);
    let f = function(
        &arena,
        "f",
        &[param("x", 1)],
        ReturnTerm::Omitted,
        Some(block(&arena, &[while_node], 1)),
        1,
    );

    resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap();
    assert!(std::ptr::eq(brk_stmt.target.get().unwrap(), while_stmt));
}

#[test]
fn misplaced_jumps_are_rejected() {
    // fn f() { break; }
    let arena = Bump::new();
    let (_, brk_node) = brk(&arena, 1);
    let f = function(
        &arena,
        "f",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[brk_node], 1)),
        1,
    );
    let err = resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap_err();
    assert!(matches!(err, ResolveError::MisplacedBreak { .. }));

    // fn g() { continue; }
    let (_, cont_node) = cont(&arena, 1);
    let g = function(
        &arena,
        "g",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[cont_node], 1)),
        1,
    );
    let err = resolve_program(&program(&arena, &[Decl::Function(g)])).unwrap_err();
    assert!(matches!(err, ResolveError::MisplacedContinue { .. }));
}

#[test]
fn return_value_must_match_the_signature() {
    // fn f() { return 1; }
    let arena = Bump::new();
    let (_, with_value) = ret(&arena, Some(int(&arena, 1, 1)), 1);
    let f = function(
        &arena,
        "f",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[with_value], 1)),
        1,
    );
    let err = resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap_err();
    assert_eq!(
        err,
        ResolveError::ReturnValueMismatch {
            expects_value: false,
            span: Span::new(1, 5, 6)
        }
    );

    // fn g() -> i32 { return; }
    let (_, bare) = ret(&arena, None, 1);
    let g = function(
        &arena,
        "g",
        &[],
        ReturnTerm::Explicit(int_type(1)),
        Some(block(&arena, &[bare], 1)),
        1,
    );
    let err = resolve_program(&program(&arena, &[Decl::Function(g)])).unwrap_err();
    assert_eq!(
        err,
        ResolveError::ReturnValueMismatch {
            expects_value: true,
            span: Span::new(1, 5, 6)
        }
    );
}

#[test]
fn continuation_bodies_are_fresh_scopes() {
    // fn f() { __continuation k { return; } }
    let arena = Bump::new();
    let (_, ret_node) = ret(&arena, None, 2);
    let cont_node = continuation(&arena, block(&arena, &[ret_node], 2), 2);
    let f = function(
        &arena,
        "f",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[cont_node], 1)),
        1,
    );
    let err = resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap_err();
    assert!(matches!(err, ResolveError::MisplacedReturn { .. }));

    // fn g() { while (true) { __continuation k { break; } } }
    let (_, brk_node) = brk(&arena, 3);
    let cont_node = continuation(&arena, block(&arena, &[brk_node], 3), 3);
    let loop_body = block_stmt(&arena, &[cont_node], 2);
    let (_, while_node) = while_loop(&arena, boolean(&arena, true, 2), loop_body, 2);
    let g = function(
        &arena,
        "g",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[while_node], 1)),
        1,
    );
    let err = resolve_program(&program(&arena, &[Decl::Function(g)])).unwrap_err();
    assert!(matches!(err, ResolveError::MisplacedBreak { .. }));
}

#[test]
fn loop_opened_inside_a_continuation_is_a_valid_target() {
    // fn f() { __continuation k { while (true) { break; } } }
    let arena = Bump::new();
    let (brk_stmt, brk_node) = brk(&arena, 3);
    let loop_body = block_stmt(&arena, &[brk_node], 3);
    let (inner, while_node) = while_loop(&arena, boolean(&arena, true, 2), loop_body, 2);
    let cont_node = continuation(&arena, block(&arena, &[while_node], 2), 2);
    let f = function(
        &arena,
        "f",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[cont_node], 1)),
        1,
    );

    resolve_program(&program(&arena, &[Decl::Function(f)])).unwrap();
    assert!(std::ptr::eq(brk_stmt.target.get().unwrap(), inner));
}

#[test]
fn whole_program_with_classes_and_signatures_resolves() {
    // fn Declared() -> i32;
    // class Counter {
    //     fn Bump() -> auto { return 1; }
    //     fn Reset() { return; }
    // }
    // fn Main() -> i32 { return 0; }
    let arena = Bump::new();

    let declared = function(&arena, "Declared", &[], ReturnTerm::Explicit(int_type(1)), None, 1);

    let (bump_ret, bump_node) = ret(&arena, Some(int(&arena, 1, 3)), 3);
    let bump_fn = function(
        &arena,
        "Bump",
        &[],
        ReturnTerm::Auto,
        Some(block(&arena, &[bump_node], 3)),
        3,
    );
    let (reset_ret, reset_node) = ret(&arena, None, 4);
    let reset_fn = function(
        &arena,
        "Reset",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[reset_node], 4)),
        4,
    );
    let members = arena.alloc_slice_copy(&[Decl::Function(bump_fn), Decl::Function(reset_fn)]);
    let counter: &ClassDecl = arena.alloc(ClassDecl {
        name: Ident::new("Counter", Span::new(2, 7, 7)),
        members,
        span: Span::new(2, 1, 60),
    });

    let (main_ret, main_node) = ret(&arena, Some(int(&arena, 0, 6)), 6);
    let main_fn = function(
        &arena,
        "Main",
        &[],
        ReturnTerm::Explicit(int_type(6)),
        Some(block(&arena, &[main_node], 6)),
        6,
    );

    let prog = program(
        &arena,
        &[
            Decl::Function(declared),
            Decl::Class(counter),
            Decl::Function(main_fn),
        ],
    );

    resolve_program(&prog).unwrap();
    assert!(std::ptr::eq(bump_ret.function.get().unwrap(), bump_fn));
    assert!(std::ptr::eq(reset_ret.function.get().unwrap(), reset_fn));
    assert!(std::ptr::eq(main_ret.function.get().unwrap(), main_fn));
}

#[test]
fn single_declaration_entry_point() {
    // resolve_decl processes one declaration at a time, for incremental
    // front ends.
    let arena = Bump::new();
    let (ret_stmt, ret_node) = ret(&arena, Some(int(&arena, 7, 1)), 1);
    let f = function(
        &arena,
        "f",
        &[],
        ReturnTerm::Auto,
        Some(block(&arena, &[ret_node], 1)),
        1,
    );

    resolve_decl(&Decl::Function(f)).unwrap();
    assert!(std::ptr::eq(ret_stmt.function.get().unwrap(), f));
}

#[test]
fn first_violation_stops_the_whole_program() {
    // fn bad() { break; }
    // fn later() { return; }
    let arena = Bump::new();
    let (_, brk_node) = brk(&arena, 1);
    let bad = function(
        &arena,
        "bad",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[brk_node], 1)),
        1,
    );
    let (later_ret, later_node) = ret(&arena, None, 2);
    let later = function(
        &arena,
        "later",
        &[],
        ReturnTerm::Omitted,
        Some(block(&arena, &[later_node], 2)),
        2,
    );

    let prog = program(&arena, &[Decl::Function(bad), Decl::Function(later)]);
    let err = resolve_program(&prog).unwrap_err();
    assert_eq!(err.span(), Span::new(1, 9, 5));
    assert!(!later_ret.function.is_bound());
}
