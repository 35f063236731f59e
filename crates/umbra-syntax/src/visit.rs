//! Double-dispatch traversal over the syntax tree.
//!
//! Each node type implements [`Node::accept`], which calls the matching
//! `visit_*` method on a [`Visitor`]. A new operation over the tree is a new
//! `Visitor` implementation; the node types never change. The default
//! methods recurse through the `walk_*` functions, so an implementation only
//! overrides the nodes it cares about.

use crate::{Expr, ExprKind, FuncDecl, Param, Program, Return, Stmt, StmtKind, VarDecl};

/// A syntax tree node that can be visited.
pub trait Node {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V);
}

/// An operation over the closed set of node types.
pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        walk_var_decl(self, decl);
    }

    fn visit_func_decl(&mut self, decl: &FuncDecl) {
        walk_func_decl(self, decl);
    }

    fn visit_param(&mut self, _param: &Param) {}

    fn visit_return(&mut self, ret: &Return) {
        walk_return(self, ret);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    for stmt in &program.statements {
        stmt.accept(visitor);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::VarDecl(decl) => decl.accept(visitor),
        StmtKind::FuncDecl(decl) => decl.accept(visitor),
    }
}

pub fn walk_var_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &VarDecl) {
    if let Some(init) = &decl.initializer {
        init.accept(visitor);
    }
}

pub fn walk_func_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &FuncDecl) {
    for param in &decl.params {
        param.accept(visitor);
    }
    for stmt in &decl.body {
        stmt.accept(visitor);
    }
    if let Some(ret) = &decl.ret {
        ret.accept(visitor);
    }
}

pub fn walk_return<V: Visitor + ?Sized>(visitor: &mut V, ret: &Return) {
    if let Some(value) = &ret.value {
        value.accept(visitor);
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match &expr.kind {
        ExprKind::Int(_) | ExprKind::Float(_) | ExprKind::String(_) | ExprKind::Var(_) => {}
        ExprKind::Unary { operand, .. } => operand.accept(visitor),
        ExprKind::Binary { left, right, .. } => {
            left.accept(visitor);
            right.accept(visitor);
        }
        ExprKind::Call { args, .. } => {
            for arg in args {
                arg.accept(visitor);
            }
        }
    }
}

impl Node for Program {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_program(self);
    }
}

impl Node for Stmt {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_stmt(self);
    }
}

impl Node for VarDecl {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_var_decl(self);
    }
}

impl Node for FuncDecl {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_func_decl(self);
    }
}

impl Node for Param {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_param(self);
    }
}

impl Node for Return {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_return(self);
    }
}

impl Node for Expr {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_expr(self);
    }
}
