use super::Parser;
use crate::{
    common::error::{CompileError, CompileResult},
    ds_n_a::arena::Handle,
    stage1_lex::tokens::{Demarcator, Keyword, TokenKind},
    stage2_parse::ast::*,
};

impl Parser {
    pub(super) fn parse_stmt(&mut self) -> CompileResult<Handle<Statement>> {
        use Demarcator as D;
        use TokenKind as K;

        let stmt = match (self.peek_kind(0), self.peek_kind(1)) {
            (Some(K::Keyword(Keyword::Exit)), Some(K::Demarcator(D::ParenOpen))) => {
                let term = self.parse_parenthesized_term()?;
                Statement::Exit(term)
            }
            (Some(K::Keyword(Keyword::Let)), _) => {
                self.consume();
                let nt = self.parse_named_term()?;
                Statement::Let(nt)
            }
            (Some(K::Keyword(Keyword::Const)), _) => {
                self.consume();
                let nt = self.parse_named_term()?;
                Statement::Const(nt)
            }
            (Some(K::Identifier), Some(K::Demarcator(D::Equals))) => {
                let nt = self.parse_named_term()?;
                Statement::Assign(nt)
            }
            (Some(K::Keyword(Keyword::Print)), Some(K::Demarcator(D::ParenOpen))) => {
                let term = self.parse_parenthesized_term()?;
                Statement::Print(term)
            }
            _ => {
                let line = self.current_line();
                return Err(CompileError::UnparsableStatement { line });
            }
        };
        log::trace!("<statement> {stmt:?}");
        Ok(self.arena.stmts.alloc(stmt))
    }

    /// `<keyword> "(" <term> ")" ";"`, where the keyword and "(" have been peeked already.
    fn parse_parenthesized_term(&mut self) -> CompileResult<Handle<Term>> {
        self.consume();
        self.consume();

        let term = self.parse_term()?;

        self.expect(Demarcator::ParenClose)?;
        self.expect(Demarcator::Semicolon)?;

        Ok(term)
    }

    /// `<identifier> "=" <term> ";"`
    fn parse_named_term(&mut self) -> CompileResult<NamedTerm> {
        let ident = self.expect(TokenKind::Identifier)?;

        self.expect(Demarcator::Equals)?;

        let term = self.parse_term()?;

        self.expect(Demarcator::Semicolon)?;

        Ok(NamedTerm { ident, term })
    }
}
