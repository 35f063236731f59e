//! Structural printing of the syntax tree.

use crate::printer::Printer;
use crate::PrintConfig;
use umbra_syntax::{
    Expr, ExprKind, FuncDecl, Node, Param, Program, Return, Stmt, StmtKind, VarDecl, Visitor,
};

/// A [`Visitor`] that writes each node's name, then its attributes and
/// children one level deeper.
///
/// ```text
/// Program:
///   VariableDeclaration:
///     type: int
///     name: x
///     initializer:
///       Integer: 5
/// ```
pub struct TreePrinter {
    printer: Printer,
}

impl TreePrinter {
    pub fn new(config: PrintConfig) -> Self {
        Self {
            printer: Printer::new(config),
        }
    }

    pub fn finish(self) -> String {
        self.printer.finish()
    }

    fn field(&mut self, key: &str, value: impl std::fmt::Display) {
        self.printer.writeln(&format!("{key}: {value}"));
    }

    fn child<N: Node>(&mut self, key: &str, node: &N) {
        self.printer.writeln(&format!("{key}:"));
        self.printer.indent();
        node.accept(self);
        self.printer.dedent();
    }

    /// A `key:` line followed by every node of a non-empty list.
    fn children<N: Node>(&mut self, key: &str, nodes: &[N]) {
        if nodes.is_empty() {
            return;
        }
        self.printer.writeln(&format!("{key}:"));
        self.printer.indent();
        for node in nodes {
            node.accept(self);
        }
        self.printer.dedent();
    }

    /// Open a node: its name on one line, contents indented below.
    fn open(&mut self, name: &str) {
        self.printer.writeln(&format!("{name}:"));
        self.printer.indent();
    }

    fn close(&mut self) {
        self.printer.dedent();
    }
}

impl Visitor for TreePrinter {
    fn visit_program(&mut self, program: &Program) {
        self.open("Program");
        for stmt in &program.statements {
            stmt.accept(self);
        }
        self.close();
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::VarDecl(decl) => decl.accept(self),
            StmtKind::FuncDecl(decl) => decl.accept(self),
        }
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        self.open("VariableDeclaration");
        self.field("type", decl.ty.kind);
        self.field("name", &decl.name);
        if let Some(init) = &decl.initializer {
            self.child("initializer", init);
        }
        self.close();
    }

    fn visit_func_decl(&mut self, decl: &FuncDecl) {
        self.open("FunctionDeclaration");
        self.field("name", &decl.name);
        self.children("parameters", &decl.params);
        self.field("return_type", decl.return_type.kind);
        self.children("body", &decl.body);
        if let Some(ret) = &decl.ret {
            ret.accept(self);
        }
        self.close();
    }

    fn visit_param(&mut self, param: &Param) {
        self.open("Parameter");
        self.field("type", param.ty.kind);
        self.field("name", &param.name);
        self.close();
    }

    fn visit_return(&mut self, ret: &Return) {
        self.open("Return");
        if let Some(value) = &ret.value {
            self.child("value", value);
        }
        self.close();
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Int(n) => self.field("Integer", n),
            ExprKind::Float(x) => self.field("Float", format!("{x:?}")),
            ExprKind::String(s) => self.field("String", format!("{s:?}")),
            ExprKind::Var(name) => self.field("Variable", name),
            ExprKind::Unary { op, operand } => {
                self.open("Unary");
                self.field("op", op.as_str());
                self.child("operand", operand.as_ref());
                self.close();
            }
            ExprKind::Binary { op, left, right } => {
                self.open("Binary");
                self.field("op", op.as_str());
                self.child("left", left.as_ref());
                self.child("right", right.as_ref());
                self.close();
            }
            ExprKind::Call { callee, args } => {
                self.open("Call");
                self.field("callee", callee);
                self.children("arguments", args);
                self.close();
            }
        }
    }
}
