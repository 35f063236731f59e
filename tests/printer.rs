//! Integration tests for umbra-printer crate.

use umbra_parser::parse;
use umbra_printer::{PrintConfig, print_program, print_program_with_config};
use umbra_syntax::visit::{walk_expr, walk_var_decl};
use umbra_syntax::{Expr, ExprKind, Node, VarDecl, Visitor};

fn print(source: &str) -> String {
    let (program, diags) = parse(source);
    assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags);
    print_program(&program)
}

#[test]
fn test_print_empty_program() {
    assert_eq!(print(""), "Program:\n");
}

#[test]
fn test_print_var_decl() {
    assert_eq!(
        print("int x = 5\n"),
        "\
Program:
  VariableDeclaration:
    type: int
    name: x
    initializer:
      Integer: 5
"
    );
}

#[test]
fn test_print_nested_binary() {
    assert_eq!(
        print("int x = 1 + 2 * 3\n"),
        "\
Program:
  VariableDeclaration:
    type: int
    name: x
    initializer:
      Binary:
        op: +
        left:
          Integer: 1
        right:
          Binary:
            op: *
            left:
              Integer: 2
            right:
              Integer: 3
"
    );
}

#[test]
fn test_print_function() {
    let source = "func add(int a, int b) -> int {\n  int sum = a + b\n}\nreturn sum\n";
    assert_eq!(
        print(source),
        "\
Program:
  FunctionDeclaration:
    name: add
    parameters:
      Parameter:
        type: int
        name: a
      Parameter:
        type: int
        name: b
    return_type: int
    body:
      VariableDeclaration:
        type: int
        name: sum
        initializer:
          Binary:
            op: +
            left:
              Variable: a
            right:
              Variable: b
    Return:
      value:
        Variable: sum
"
    );
}

#[test]
fn test_print_unary_and_call() {
    assert_eq!(
        print("int x = -f(y)\n"),
        "\
Program:
  VariableDeclaration:
    type: int
    name: x
    initializer:
      Unary:
        op: -
        operand:
          Call:
            callee: f
            arguments:
              Variable: y
"
    );
}

#[test]
fn test_empty_lists_are_omitted() {
    let out = print("func f() -> char {\n}\n");
    assert!(!out.contains("parameters"));
    assert!(!out.contains("body"));
    assert!(!out.contains("Return"));
}

#[test]
fn test_print_with_tabs() {
    let (program, _) = parse("float y\n");
    let out = print_program_with_config(&program, &PrintConfig::new().use_tabs(true));
    assert_eq!(out, "Program:\n\tVariableDeclaration:\n\t\ttype: float\n\t\tname: y\n");
}

#[test]
fn test_print_with_indent_width() {
    let (program, _) = parse("float y\n");
    let config = PrintConfig::new().indent_width(4).trailing_newline(false);
    let out = print_program_with_config(&program, &config);
    assert_eq!(out, "Program:\n    VariableDeclaration:\n        type: float\n        name: y");
}

#[test]
fn test_printing_is_idempotent() {
    let (program, _) = parse("int a = 1\nfunc g(bool p) -> bool {\n  bool q = p or p\n}\nreturn q\n");
    assert_eq!(print_program(&program), print_program(&program));
}

/// A second operation over the same nodes: collect every variable name
/// that is declared or referenced.
#[derive(Default)]
struct Names(Vec<String>);

impl Visitor for Names {
    fn visit_var_decl(&mut self, decl: &VarDecl) {
        self.0.push(decl.name.name.clone());
        walk_var_decl(self, decl);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        if let ExprKind::Var(name) = &expr.kind {
            self.0.push(name.name.clone());
        }
        walk_expr(self, expr);
    }
}

#[test]
fn test_custom_visitor() {
    let (program, _) = parse("int a = 1\nfunc f() -> int {\n  int b = a * c\n}\nreturn b\n");
    let mut names = Names::default();
    program.accept(&mut names);
    assert_eq!(names.0, vec!["a", "b", "a", "c", "b"]);
}
