use crate::{
    common::{
        error::{CompileError, CompileResult},
        position::SrcPos,
    },
    ds_n_a::arena::Arena,
    stage1_lex::tokens::*,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORDLIKE: Regex = Regex::new(r"^[a-zA-Z_]+").unwrap();
    static ref DECIMALS: Regex = Regex::new(r"^[0-9]+").unwrap();
}

pub struct Lexer<'src> {
    src: &'src str,

    /// Byte offset into `src`.
    idx: usize,

    /// Position of the char at `idx`.
    pos: SrcPos,

    tokens: Arena<Token>,
}
impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            idx: 0,
            pos: SrcPos::default(),
            tokens: Arena::default(),
        }
    }

    /// The returned arena holds the tokens in source order.
    pub fn tokenize(mut self) -> CompileResult<Arena<Token>> {
        while let Some(c) = self.peek(0) {
            if c.is_ascii_alphabetic() || c == '_' {
                self.lex_wordlike();
            } else if c.is_ascii_digit() {
                self.lex_integer();
            } else if let Some(demarcator) = Demarcator::from_char(c) {
                self.tokens.alloc(Token::new(demarcator.into(), self.pos));
                self.advance(1);
            } else if c == ' ' {
                self.advance(1);
            } else if c == '\n' {
                self.idx += 1;
                self.pos.line += 1;
                self.pos.column = 1;
            } else {
                return Err(CompileError::InvalidToken {
                    character: c,
                    pos: self.pos,
                });
            }
        }

        log::debug!("Lexed {} tokens", self.tokens.len());
        Ok(self.tokens)
    }

    fn lex_wordlike(&mut self) {
        let lexeme = Self::find(&WORDLIKE, &self.src[self.idx..]);
        let token = match Keyword::from_lexeme(lexeme) {
            Some(kw) => Token::new(kw.into(), self.pos),
            None => Token::with_literal(TokenKind::Identifier, self.pos, lexeme.to_owned()),
        };
        self.tokens.alloc(token);
        self.advance(lexeme.len());
    }

    fn lex_integer(&mut self) {
        let digits = Self::find(&DECIMALS, &self.src[self.idx..]);
        let token = Token::with_literal(TokenKind::Integer, self.pos, digits.to_owned());
        self.tokens.alloc(token);
        self.advance(digits.len());
    }

    fn find<'a>(re: &Regex, sfx: &'a str) -> &'a str {
        /* The caller has already checked the first char, so the match is non-empty. */
        re.find(sfx).map(|mach| mach.as_str()).unwrap_or_default()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.src[self.idx..].chars().nth(offset)
    }

    /// Moves past `len` ASCII chars on the current line.
    fn advance(&mut self, len: usize) {
        self.idx += len;
        self.pos.column += len;
    }
}

pub fn tokenize(src: &str) -> CompileResult<Arena<Token>> {
    Lexer::new(src).tokenize()
}
