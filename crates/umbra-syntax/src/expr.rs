//! Expression AST nodes.
//! 表达式 AST 节点。

use crate::Ident;
use umbra_common::Span;

/// An expression.
/// 表达式。
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Expression kind.
/// 表达式种类。
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Number literal without a fractional part / 整数字面量
    Int(i64),
    /// Number literal with a decimal point / 浮点数字面量
    Float(f64),
    /// String literal, contents without the quotes / 字符串字面量
    String(String),
    /// Variable reference / 变量引用
    Var(Ident),
    /// Unary operation `-x` / 一元运算
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operation `a + b`, `a less_than b`, `a and b` / 二元运算
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Function call `f(x, y)` / 函数调用
    Call { callee: Ident, args: Vec<Expr> },
}

/// Binary operators.
/// 二元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Equal,
    Different,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    // Logical
    And,
    Or,
}

impl BinOp {
    /// The operator as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Equal => "equal",
            BinOp::Different => "different",
            BinOp::Less => "less_than",
            BinOp::Greater => "greater_than",
            BinOp::LessEq => "less_or_equal",
            BinOp::GreaterEq => "greater_or_equal",
            BinOp::And => "and",
            BinOp::Or => "or",
        }
    }
}

/// Unary operators.
/// 一元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Negation `-`
    Neg,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }
}
