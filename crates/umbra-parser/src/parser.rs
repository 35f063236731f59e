//! The Umbra parser.

use umbra_common::Span;
use umbra_diagnostic::Reporter;
use umbra_lexer::{Token, TokenKind};
use umbra_syntax::*;

use crate::error::{ParseFault, SyntaxError};
use crate::recovery::{DelimiterKind, DelimiterStack, SyncPoint};

type PResult<T> = Result<T, ParseFault>;

/// Deepest expression or function nesting accepted. Keeps recursion, and
/// the recursive drop of the tree, well inside the thread's stack.
pub const MAX_NESTING: usize = 128;

/// The Umbra parser.
///
/// Reads a token sequence with one token of lookahead. Faults are reported
/// to the shared [`Reporter`]; the statement they occur in is dropped and
/// parsing resumes at the next line.
pub struct Parser<'r> {
    tokens: Vec<Token>,
    pos: usize,
    /// Number of function bodies currently open
    block_depth: usize,
    /// Depth of the expression node being built
    nesting: usize,
    reporter: &'r mut Reporter,
}

impl<'r> Parser<'r> {
    /// Create a parser over `tokens`. A missing `Eof` terminator is added
    /// just past the last token.
    pub fn new(mut tokens: Vec<Token>, reporter: &'r mut Reporter) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let eof = match tokens.last() {
                Some(last) => {
                    let end = last.lexeme.chars().fold(last.position, |pos, ch| {
                        if ch == '\n' { pos.newline() } else { pos.advance() }
                    });
                    Token::new(TokenKind::Eof, "", Span::new(last.span.end, last.span.end), end)
                }
                None => Token::new(TokenKind::Eof, "", Span::DUMMY, Default::default()),
            };
            tokens.push(eof);
        }

        Self {
            tokens,
            pos: 0,
            block_depth: 0,
            nesting: 0,
            reporter,
        }
    }

    /// Parse a complete program.
    #[tracing::instrument(skip_all, fields(tokens = self.tokens.len()))]
    pub fn parse_program(&mut self) -> Program {
        let start = self.current_span();
        let mut statements = Vec::new();

        while !self.at_end() {
            // Blank line: an empty statement
            if self.eat(TokenKind::Newline) {
                continue;
            }

            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(fault) => self.recover(fault, SyncPoint::TopLevel),
            }
        }

        let end = self.current_span();
        tracing::debug!(statements = statements.len(), "parsed program");
        Program {
            statements,
            span: start.merge(end),
        }
    }

    fn parse_statement(&mut self) -> PResult<Stmt> {
        match self.current_kind() {
            kind if kind.is_type_keyword() => self.parse_var_decl(),
            TokenKind::Func => self.parse_func_decl(),
            found => Err(self.fault(SyntaxError::UnexpectedToken(found))),
        }
    }

    // ========== Declarations ==========

    /// `TypeKeyword Identifier ('=' Expression)? Newline`
    fn parse_var_decl(&mut self) -> PResult<Stmt> {
        let start = self.current_span();
        let ty = self.parse_type("variable type")?;
        let name = self.parse_ident("variable name")?;
        let initializer = if self.eat(TokenKind::Assign) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let span = start.merge(self.previous_span());
        self.expect_terminator("variable declaration")?;

        Ok(Stmt::new(
            StmtKind::VarDecl(VarDecl {
                ty,
                name,
                initializer,
            }),
            span,
        ))
    }

    /// `func name(params) -> type { body } return expr`
    fn parse_func_decl(&mut self) -> PResult<Stmt> {
        let start = self.current_span();
        if self.block_depth >= MAX_NESTING {
            return Err(self.fault(SyntaxError::NestingTooDeep {
                what: "function declarations",
                limit: MAX_NESTING,
            }));
        }
        self.advance(); // func

        let name = self.parse_ident("function name")?;
        self.expect(TokenKind::LParen, "after function name")?;
        let params = self.parse_params()?;
        self.expect(TokenKind::RParen, "after parameter list")?;
        self.expect(TokenKind::Arrow, "for return type")?;
        let return_type = self.parse_type("return type")?;
        self.expect(TokenKind::LBrace, "before function body")?;
        let body = self.parse_body();
        self.expect(TokenKind::RBrace, "after function body")?;
        let mut span = start.merge(self.previous_span());

        let ret = if self.check(TokenKind::Return)
            || (self.check(TokenKind::Newline) && self.peek_kind() == TokenKind::Return)
        {
            self.eat(TokenKind::Newline);
            let ret = self.parse_return()?;
            span = span.merge(ret.span);
            Some(ret)
        } else {
            self.expect_terminator("function body")?;
            None
        };

        Ok(Stmt::new(
            StmtKind::FuncDecl(FuncDecl {
                name,
                params,
                return_type,
                body,
                ret,
            }),
            span,
        ))
    }

    fn parse_params(&mut self) -> PResult<Vec<Param>> {
        let mut params = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            let start = self.current_span();
            let ty = self.parse_type("parameter type")?;
            let name = self.parse_ident("parameter name")?;
            params.push(Param {
                ty,
                name,
                span: start.merge(self.previous_span()),
            });

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    /// Statements up to the closing `}`, each recovered on its own.
    fn parse_body(&mut self) -> Vec<Stmt> {
        self.block_depth += 1;
        let mut body = Vec::new();

        while !self.at_end() && !self.check(TokenKind::RBrace) {
            if self.eat(TokenKind::Newline) {
                continue;
            }

            match self.parse_statement() {
                Ok(stmt) => body.push(stmt),
                Err(fault) => self.recover(fault, SyncPoint::Block),
            }
        }

        self.block_depth -= 1;
        body
    }

    /// `return Expression? (Newline | EOF)`
    fn parse_return(&mut self) -> PResult<Return> {
        let start = self.current_span();
        self.advance(); // return

        let value = if self.at_terminator() {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let span = start.merge(self.previous_span());
        self.expect_terminator("return value")?;

        Ok(Return { value, span })
    }

    fn parse_type(&mut self, what: &'static str) -> PResult<Type> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Int => TypeKind::Int,
            TokenKind::Float => TypeKind::Float,
            TokenKind::Bool => TypeKind::Bool,
            TokenKind::Char => TypeKind::Char,
            TokenKind::String => TypeKind::String,
            found => return Err(self.fault(SyntaxError::ExpectedType { what, found })),
        };
        self.advance();
        Ok(Type::new(kind, span))
    }

    fn parse_ident(&mut self, what: &'static str) -> PResult<Ident> {
        match self.current_kind() {
            TokenKind::Ident => {
                let token = self.current();
                let ident = Ident::new(token.lexeme.clone(), token.span);
                self.advance();
                Ok(ident)
            }
            found => Err(self.fault(SyntaxError::ExpectedIdent { what, found })),
        }
    }

    // ========== Expression Parsing ==========

    fn parse_expr(&mut self) -> PResult<Expr> {
        self.nested(Self::parse_or_expr)
    }

    fn parse_or_expr(&mut self) -> PResult<Expr> {
        let mut left = self.parse_and_expr()?;
        let outer = self.nesting;

        while self.eat(TokenKind::Or) {
            self.deepen()?;
            let right = self.parse_and_expr()?;
            left = binary(BinOp::Or, left, right);
        }

        self.nesting = outer;
        Ok(left)
    }

    fn parse_and_expr(&mut self) -> PResult<Expr> {
        let mut left = self.parse_comparison_expr()?;
        let outer = self.nesting;

        while self.eat(TokenKind::And) {
            self.deepen()?;
            let right = self.parse_comparison_expr()?;
            left = binary(BinOp::And, left, right);
        }

        self.nesting = outer;
        Ok(left)
    }

    fn parse_comparison_expr(&mut self) -> PResult<Expr> {
        let mut left = self.parse_additive_expr()?;
        let outer = self.nesting;

        loop {
            let op = match self.current_kind() {
                TokenKind::Equal => BinOp::Equal,
                TokenKind::Different => BinOp::Different,
                TokenKind::LessThan => BinOp::Less,
                TokenKind::GreaterThan => BinOp::Greater,
                TokenKind::LessOrEqual => BinOp::LessEq,
                TokenKind::GreaterOrEqual => BinOp::GreaterEq,
                _ => break,
            };
            self.advance();
            self.deepen()?;
            let right = self.parse_additive_expr()?;
            left = binary(op, left, right);
        }

        self.nesting = outer;
        Ok(left)
    }

    fn parse_additive_expr(&mut self) -> PResult<Expr> {
        let mut left = self.parse_multiplicative_expr()?;
        let outer = self.nesting;

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            self.deepen()?;
            let right = self.parse_multiplicative_expr()?;
            left = binary(op, left, right);
        }

        self.nesting = outer;
        Ok(left)
    }

    fn parse_multiplicative_expr(&mut self) -> PResult<Expr> {
        let mut left = self.parse_unary_expr()?;
        let outer = self.nesting;

        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            self.deepen()?;
            let right = self.parse_unary_expr()?;
            left = binary(op, left, right);
        }

        self.nesting = outer;
        Ok(left)
    }

    fn parse_unary_expr(&mut self) -> PResult<Expr> {
        if self.check(TokenKind::Minus) {
            let start = self.current_span();
            self.advance();
            let operand = self.nested(Self::parse_unary_expr)?;
            let span = start.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                },
                span,
            ));
        }

        self.parse_primary_expr()
    }

    fn parse_primary_expr(&mut self) -> PResult<Expr> {
        let token = self.current();
        let span = token.span;

        match token.kind {
            TokenKind::Number => {
                let kind = self.parse_number()?;
                self.advance();
                Ok(Expr::new(kind, span))
            }
            TokenKind::StringLit => {
                // The lexer only emits terminated literals, quotes included
                let text = &token.lexeme;
                let contents = text
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(text)
                    .to_string();
                self.advance();
                Ok(Expr::new(ExprKind::String(contents), span))
            }
            TokenKind::Ident => {
                let ident = Ident::new(token.lexeme.clone(), span);
                self.advance();
                if self.check(TokenKind::LParen) {
                    self.parse_call(ident)
                } else {
                    Ok(Expr::new(ExprKind::Var(ident), span))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "to close parenthesized expression")?;
                Ok(Expr::new(inner.kind, span.merge(self.previous_span())))
            }
            found => Err(self.fault(SyntaxError::ExpectedExpression(found))),
        }
    }

    fn parse_call(&mut self, callee: Ident) -> PResult<Expr> {
        self.advance(); // (
        let mut args = Vec::new();

        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "after call arguments")?;

        let span = callee.span.merge(self.previous_span());
        Ok(Expr::new(ExprKind::Call { callee, args }, span))
    }

    /// Literal value of the current number token. A lexeme with a decimal
    /// point is a float, `7.` included; anything else must fit in `i64`.
    fn parse_number(&self) -> PResult<ExprKind> {
        let text = self.current().lexeme.as_str();
        let out_of_range = || self.fault(SyntaxError::NumberOutOfRange(text.to_string()));

        if text.contains('.') {
            text.trim_end_matches('.')
                .parse::<f64>()
                .map(ExprKind::Float)
                .map_err(|_| out_of_range())
        } else {
            text.parse::<i64>()
                .map(ExprKind::Int)
                .map_err(|_| out_of_range())
        }
    }

    // ========== Helper Methods ==========

    fn current(&self) -> &Token {
        // `new` guarantees a trailing Eof, so the fallback always exists
        self.tokens
            .get(self.pos)
            .unwrap_or(&self.tokens[self.tokens.len() - 1])
    }

    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, context: &'static str) -> PResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.fault(SyntaxError::ExpectedToken {
                expected: kind,
                context,
                found: self.current_kind(),
            }))
        }
    }

    /// Whether the current token ends a statement. Inside a function body
    /// the closing `}` does too.
    fn at_terminator(&self) -> bool {
        match self.current_kind() {
            TokenKind::Newline | TokenKind::Eof => true,
            TokenKind::RBrace => self.block_depth > 0,
            _ => false,
        }
    }

    /// Consume a statement-ending newline. End of input and a closing `}`
    /// are accepted but left in place.
    fn expect_terminator(&mut self, after: &'static str) -> PResult<()> {
        if self.at_terminator() {
            self.eat(TokenKind::Newline);
            Ok(())
        } else {
            Err(self.fault(SyntaxError::MissingNewline {
                after,
                found: self.current_kind(),
            }))
        }
    }

    fn fault(&self, error: SyntaxError) -> ParseFault {
        ParseFault::new(error, self.current())
    }

    fn too_deep(&self) -> ParseFault {
        self.fault(SyntaxError::NestingTooDeep {
            what: "expressions",
            limit: MAX_NESTING,
        })
    }

    /// Run `parse` one expression level deeper.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.nesting >= MAX_NESTING {
            return Err(self.too_deep());
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    /// Count one more left-nested operand of a binary chain. The caller
    /// restores the depth once the chain ends.
    fn deepen(&mut self) -> PResult<()> {
        if self.nesting >= MAX_NESTING {
            return Err(self.too_deep());
        }
        self.nesting += 1;
        Ok(())
    }

    // ========== Error Recovery ==========

    fn recover(&mut self, fault: ParseFault, sync: SyncPoint) {
        tracing::debug!(at = %fault.position, error = %fault.error, ?sync, "discarding statement");
        self.reporter.report(fault.into_diagnostic());
        // A fault can leave a binary chain's depth unrestored
        self.nesting = 0;
        self.synchronize(sync);
    }

    /// Skip tokens until a newline is consumed or the end is reached.
    /// Newlines inside braces opened during the skip don't count. In a
    /// block, an unmatched `}` stops the skip and is left for the body.
    fn synchronize(&mut self, sync: SyncPoint) {
        let mut delimiters = DelimiterStack::new();
        let start = self.pos;

        while !self.at_end() {
            let kind = self.current_kind();
            if sync == SyncPoint::Block
                && kind == TokenKind::RBrace
                && !delimiters.inside(DelimiterKind::Brace)
            {
                break;
            }

            delimiters.update(kind);
            self.advance();

            if kind == TokenKind::Newline && !delimiters.inside(DelimiterKind::Brace) {
                break;
            }
        }

        tracing::trace!(skipped = self.pos - start, "synchronized");
    }
}

fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}
