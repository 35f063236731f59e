//! Integration tests for umbra-parser crate.

use umbra_common::Position;
use umbra_diagnostic::{DiagnosticKind, ErrorCode, Reporter};
use umbra_lexer::Lexer;
use umbra_parser::{parse, parse_tokens};
use umbra_syntax::*;

fn var_decl(stmt: &Stmt) -> &VarDecl {
    match &stmt.kind {
        StmtKind::VarDecl(decl) => decl,
        other => panic!("expected variable declaration, got {:?}", other),
    }
}

fn func_decl(stmt: &Stmt) -> &FuncDecl {
    match &stmt.kind {
        StmtKind::FuncDecl(decl) => decl,
        other => panic!("expected function declaration, got {:?}", other),
    }
}

fn int(n: i64) -> ExprKind {
    ExprKind::Int(n)
}

/// Strip spans so expressions can be compared by shape.
fn shape(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Int(n) => n.to_string(),
        ExprKind::Float(x) => format!("{:?}", x),
        ExprKind::String(s) => format!("{:?}", s),
        ExprKind::Var(name) => name.to_string(),
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_str(), shape(operand)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_str(), shape(left), shape(right))
        }
        ExprKind::Call { callee, args } => {
            let args: Vec<_> = args.iter().map(shape).collect();
            format!("{}({})", callee, args.join(", "))
        }
    }
}

fn initializer_shape(source: &str) -> String {
    let (program, diags) = parse(source);
    assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags);
    shape(var_decl(&program.statements[0]).initializer.as_ref().unwrap())
}

// ============================================================================
// Variable Declarations
// ============================================================================

#[test]
fn test_parse_var_decl_with_initializer() {
    let (program, diags) = parse("int x = 5\n");
    assert!(diags.is_empty());
    assert_eq!(program.statements.len(), 1);

    let decl = var_decl(&program.statements[0]);
    assert_eq!(decl.ty.kind, TypeKind::Int);
    assert_eq!(decl.name.name, "x");
    assert_eq!(decl.initializer.as_ref().unwrap().kind, int(5));
}

#[test]
fn test_parse_var_decl_without_initializer() {
    let (program, diags) = parse("float y\n");
    assert!(diags.is_empty());

    let decl = var_decl(&program.statements[0]);
    assert_eq!(decl.ty.kind, TypeKind::Float);
    assert_eq!(decl.name.name, "y");
    assert!(decl.initializer.is_none());
}

#[test]
fn test_every_type_keyword_starts_a_declaration() {
    let (program, diags) = parse("int a\nfloat b\nbool c\nchar d\nstring e\n");
    assert!(diags.is_empty());
    let types: Vec<_> = program
        .statements
        .iter()
        .map(|s| var_decl(s).ty.kind)
        .collect();
    assert_eq!(
        types,
        vec![
            TypeKind::Int,
            TypeKind::Float,
            TypeKind::Bool,
            TypeKind::Char,
            TypeKind::String,
        ]
    );
}

#[test]
fn test_eof_terminates_last_statement() {
    let (program, diags) = parse("int x = 5");
    assert!(diags.is_empty());
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_leading_blank_lines_are_skipped() {
    let (program, diags) = parse("\n\n  \nint x\n");
    assert!(diags.is_empty());
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_statements_keep_source_order() {
    let (program, _) = parse("int a\nint b\nint c\n");
    let names: Vec<_> = program
        .statements
        .iter()
        .map(|s| var_decl(s).name.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(initializer_shape("int x = 1 + 2 * 3\n"), "(+ 1 (* 2 3))");
}

#[test]
fn test_comparison_binds_tighter_than_logic() {
    assert_eq!(
        initializer_shape("bool b = a less_than 1 and c\n"),
        "(and (less_than a 1) c)"
    );
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(
        initializer_shape("bool b = a or b and c\n"),
        "(or a (and b c))"
    );
}

#[test]
fn test_arithmetic_binds_tighter_than_comparison() {
    assert_eq!(
        initializer_shape("bool b = x + 1 greater_or_equal y * 2\n"),
        "(greater_or_equal (+ x 1) (* y 2))"
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(initializer_shape("int x = (1 + 2) * 3\n"), "(* (+ 1 2) 3)");
}

#[test]
fn test_unary_minus() {
    assert_eq!(initializer_shape("int x = - -a - 1\n"), "(- (- (- a)) 1)");
}

#[test]
fn test_call_expression() {
    assert_eq!(
        initializer_shape("int r = max(1, x + 2, min())\n"),
        "max(1, (+ x 2), min())"
    );
}

#[test]
fn test_literals() {
    assert_eq!(initializer_shape("float f = 2.5\n"), "2.5");
    assert_eq!(initializer_shape("string s = \"hi there\"\n"), "\"hi there\"");
}

#[test]
fn test_trailing_dot_number_still_parses() {
    let (program, diags) = parse("float f = 7.\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::Lexical);
    assert_eq!(
        var_decl(&program.statements[0]).initializer.as_ref().unwrap().kind,
        ExprKind::Float(7.0)
    );
}

// ============================================================================
// Function Declarations
// ============================================================================

#[test]
fn test_parse_function() {
    let source = "func add(int a, int b) -> int {\n  int sum = a + b\n}\nreturn sum\n";
    let (program, diags) = parse(source);
    assert!(diags.is_empty(), "{:?}", diags);
    assert_eq!(program.statements.len(), 1);

    let func = func_decl(&program.statements[0]);
    assert_eq!(func.name.name, "add");
    assert_eq!(func.params.len(), 2);
    assert_eq!(func.params[0].ty.kind, TypeKind::Int);
    assert_eq!(func.params[1].name.name, "b");
    assert_eq!(func.return_type.kind, TypeKind::Int);
    assert_eq!(func.body.len(), 1);
    assert_eq!(var_decl(&func.body[0]).name.name, "sum");

    let ret = func.ret.as_ref().unwrap();
    assert_eq!(shape(ret.value.as_ref().unwrap()), "sum");
}

#[test]
fn test_function_without_params_or_return() {
    let (program, diags) = parse("func f() -> bool {\n}\nint x\n");
    assert!(diags.is_empty());
    assert_eq!(program.statements.len(), 2);

    let func = func_decl(&program.statements[0]);
    assert!(func.params.is_empty());
    assert!(func.body.is_empty());
    assert!(func.ret.is_none());
}

#[test]
fn test_bare_return() {
    let (program, diags) = parse("func f() -> int {\n}\nreturn\n");
    assert!(diags.is_empty());
    let ret = func_decl(&program.statements[0]).ret.as_ref().unwrap();
    assert!(ret.value.is_none());
}

#[test]
fn test_nested_function() {
    let source = "func outer() -> int {\n  func inner() -> int {\n  }\n  return 1\n  int y\n}\n";
    let (program, diags) = parse(source);
    assert!(diags.is_empty(), "{:?}", diags);

    let outer = func_decl(&program.statements[0]);
    assert_eq!(outer.body.len(), 2);
    let inner = func_decl(&outer.body[0]);
    assert!(inner.ret.is_some());
}

#[test]
fn test_function_header_errors() {
    let cases = [
        ("func (", "expected function name"),
        ("func f int", "expected `(` after function name"),
        ("func f(x", "expected parameter type"),
        ("func f(int", "expected parameter name"),
        ("func f(int a -> int", "expected `)` after parameter list"),
        ("func f() int", "expected `->` for return type"),
        ("func f() -> x", "expected return type"),
        ("func f() -> int\n", "expected `{` before function body"),
        ("func f() -> int {\nint a\n", "expected `}` after function body"),
    ];

    for (source, message) in cases {
        let (program, diags) = parse(source);
        assert!(program.statements.is_empty(), "{source:?}");
        assert_eq!(diags.len(), 1, "{source:?}: {diags:?}");
        assert!(
            diags[0].message.contains(message),
            "{source:?}: {:?} does not contain {message:?}",
            diags[0].message
        );
    }
}

#[test]
fn test_unclosed_body_is_unclosed_delimiter() {
    let (_, diags) = parse("func f() -> int {\n  int a\n");
    assert_eq!(diags[0].code, Some(ErrorCode::UnclosedDelimiter));
}

// ============================================================================
// Error Recovery
// ============================================================================

#[test]
fn test_missing_identifier_discards_statement() {
    let (program, diags) = parse("int\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::Syntax);
    assert_eq!(diags[0].code, Some(ErrorCode::ExpectedIdentifier));
    assert!(diags[0].message.contains("expected variable name"));
    assert!(program.statements.is_empty());
}

#[test]
fn test_recovery_continues_with_next_line() {
    let (program, diags) = parse("int x = 5\nfoo bar\nfloat y\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::UnexpectedToken));
    assert_eq!(diags[0].position, Position::new(2, 1));
    assert_eq!(program.statements.len(), 2);
    assert_eq!(var_decl(&program.statements[1]).name.name, "y");
}

#[test]
fn test_every_malformed_line_is_reported() {
    let (program, diags) = parse("int\nint x = \nint y 5\nbool ok\n");
    assert_eq!(diags.len(), 3);
    let codes: Vec<_> = diags.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            Some(ErrorCode::ExpectedIdentifier),
            Some(ErrorCode::ExpectedExpression),
            Some(ErrorCode::MissingNewline),
        ]
    );
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_if_is_reserved() {
    let (program, diags) = parse("if x\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::UnexpectedToken));
    assert!(program.statements.is_empty());
}

#[test]
fn test_recovery_inside_function_body() {
    let source = "func f() -> int {\n  int = 3\n  float y\n}\n";
    let (program, diags) = parse(source);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].position, Position::new(2, 7));

    let func = func_decl(&program.statements[0]);
    assert_eq!(func.body.len(), 1);
    assert_eq!(var_decl(&func.body[0]).name.name, "y");
}

#[test]
fn test_body_error_before_closing_brace() {
    let (program, diags) = parse("func f() -> int {\n  int x = }\nint y\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::ExpectedExpression));
    assert_eq!(program.statements.len(), 2);
    assert!(func_decl(&program.statements[0]).body.is_empty());
}

#[test]
fn test_lexical_errors_precede_syntax_errors() {
    let (_, diags) = parse("int x = @\n");
    let kinds: Vec<_> = diags.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::Lexical, DiagnosticKind::Syntax]);
}

#[test]
fn test_number_out_of_range() {
    let (program, diags) = parse("int big = 9223372036854775808\nint ok = 9223372036854775807\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::NumberOutOfRange));
    assert_eq!(program.statements.len(), 1);
    assert_eq!(
        var_decl(&program.statements[0]).initializer.as_ref().unwrap().kind,
        int(i64::MAX)
    );
}

#[test]
fn test_parse_is_deterministic() {
    let source = "int x = 1 +\nfunc f(int a) -> int {\n  bool b = a equal 2\n}\nreturn a\n#\n";
    let first = parse(source);
    let second = parse(source);
    assert_eq!(first, second);
}

#[test]
fn test_parse_tokens_shares_reporter() {
    let mut reporter = Reporter::new();
    let tokens = Lexer::new("int x = \"oops\nint\n", &mut reporter).tokenize();
    let program = parse_tokens(tokens, &mut reporter);

    assert!(program.statements.is_empty());
    assert_eq!(reporter.count(DiagnosticKind::Lexical), 1);
    assert_eq!(reporter.count(DiagnosticKind::Syntax), 2);
}

// ============================================================================
// Nesting Limits
// ============================================================================

#[test]
fn test_deeply_nested_parens_are_one_error() {
    let depth = 10_000;
    let source = format!("int x = {}1{}\nint y\n", "(".repeat(depth), ")".repeat(depth));
    let (program, diags) = parse(&source);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::NestingTooDeep));
    assert_eq!(program.statements.len(), 1);
    assert_eq!(var_decl(&program.statements[0]).name.name, "y");
}

#[test]
fn test_long_negation_chain_is_one_error() {
    let source = format!("int x = {}1\n", "- ".repeat(50_000));
    let (program, diags) = parse(&source);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::NestingTooDeep));
    assert!(program.statements.is_empty());
}

#[test]
fn test_long_binary_chain_is_one_error() {
    let terms = vec!["1"; 10_000].join(" + ");
    let (program, diags) = parse(&format!("int x = {}\nint y\n", terms));

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::NestingTooDeep));
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_moderate_nesting_is_accepted() {
    let source = format!("int x = {}1{} + 2 * -3\n", "(".repeat(50), ")".repeat(50));
    let (program, diags) = parse(&source);

    assert!(diags.is_empty());
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_deeply_nested_functions_are_one_error() {
    let depth = 1000;
    let source = format!(
        "{}{}int y\n",
        "func f() -> int {\n".repeat(depth),
        "}\n".repeat(depth)
    );
    let (program, diags) = parse(&source);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::NestingTooDeep));
    assert_eq!(program.statements.len(), 2);
    assert_eq!(func_decl(&program.statements[0]).name.name, "f");
}
