#![doc = include_str!("./parser/grammar.md")]

mod stmt;

use crate::{
    common::error::{CompileError, CompileResult},
    ds_n_a::arena::{Arena, Handle},
    stage1_lex::tokens::{Token, TokenKind},
    stage2_parse::ast::*,
};

pub struct Parser {
    arena: AstArena,

    /// All tokens, in source order.
    tokens: Vec<Handle<Token>>,

    /// Index into `tokens` of the next token to consume.
    idx: usize,
}
impl Parser {
    pub fn new(tokens: Arena<Token>) -> Self {
        let handles = tokens.iter().map(|(handle, _)| handle).collect();
        Self {
            arena: AstArena::new(tokens),
            tokens: handles,
            idx: 0,
        }
    }

    pub fn parse_program(mut self) -> CompileResult<Program> {
        let mut stmts = vec![];
        while self.peek(0).is_some() {
            let stmt = self.parse_stmt()?;
            stmts.push(stmt);
        }
        log::debug!("Parsed {} statements", stmts.len());
        Ok(Program::new(self.arena, stmts))
    }
}

/// Term
impl Parser {
    fn parse_term(&mut self) -> CompileResult<Handle<Term>> {
        let term = match self.peek_kind(0) {
            Some(TokenKind::Integer) => Term::Integer(self.consume()),
            Some(TokenKind::Identifier) => Term::Identifier(self.consume()),
            _ => {
                let line = self.current_line();
                return Err(CompileError::UnparsableTerm { line });
            }
        };
        Ok(self.arena.terms.alloc(term))
    }
}

/// Helpers
impl Parser {
    fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens
            .get(self.idx + offset)
            .map(|handle| &self.arena.tokens[*handle])
    }
    fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.peek(offset).map(|token| token.kind)
    }

    /// The caller must have peeked a token first.
    fn consume(&mut self) -> Handle<Token> {
        let handle = self.tokens[self.idx];
        self.idx += 1;
        handle
    }

    fn expect<K: Into<TokenKind>>(&mut self, expected: K) -> CompileResult<Handle<Token>> {
        let expected = expected.into();
        match self.peek_kind(0) {
            Some(actual) if actual == expected => Ok(self.consume()),
            _ => Err(CompileError::ExpectedToken {
                expected,
                line: self.current_line(),
            }),
        }
    }

    /// The line of the next token, or of the last token once the input is exhausted.
    fn current_line(&self) -> usize {
        let token = self.peek(0).or_else(|| {
            self.idx
                .checked_sub(1)
                .and_then(|prev| self.tokens.get(prev))
                .map(|handle| &self.arena.tokens[*handle])
        });
        token.map(|token| token.pos.line).unwrap_or(1)
    }
}
