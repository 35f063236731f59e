//! Program and statement definitions.
//! 程序与语句定义。

use crate::{Expr, Type};
use umbra_common::Span;

/// A complete source file. Statements are kept in source order.
/// 完整的源文件，语句按源码顺序保存。
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

/// A statement.
/// 语句。
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Kind of statement.
/// 语句种类。
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `int x = expr`
    VarDecl(VarDecl),
    /// `func name(params) -> type { body } return expr`
    FuncDecl(FuncDecl),
}

/// A variable declaration with an optional initializer.
/// 带可选初始值的变量声明。
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: Type,
    pub name: Ident,
    pub initializer: Option<Expr>,
}

/// A function declaration.
/// 函数声明。
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Ident,
    pub params: Vec<Param>,
    pub return_type: Type,
    pub body: Vec<Stmt>,
    /// The `return` clause following the closing brace.
    pub ret: Option<Return>,
}

/// A function parameter.
/// 函数参数。
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: Type,
    pub name: Ident,
    pub span: Span,
}

/// A `return` clause with an optional value.
/// 带可选值的 `return` 子句。
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Option<Expr>,
    pub span: Span,
}

/// An identifier.
/// 标识符。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
