use crate::common::position::SrcPos;
use core::fmt::{self, Formatter};
use derive_more::{Display, From};

#[derive(PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: SrcPos,

    /// Present for [`TokenKind::Identifier`] and [`TokenKind::Integer`] only.
    pub literal: Option<String>,
}
impl Token {
    pub fn new(kind: TokenKind, pos: SrcPos) -> Self {
        Self { kind, pos, literal: None }
    }
    pub fn with_literal(kind: TokenKind, pos: SrcPos, literal: String) -> Self {
        Self { kind, pos, literal: Some(literal) }
    }

    pub fn literal(&self) -> &str {
        self.literal.as_deref().unwrap_or_default()
    }
}
impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let SrcPos { line, column } = self.pos;
        write!(f, "Token:{line}:{column}:({}", self.kind)?;
        if let Some(literal) = &self.literal {
            write!(f, ", {literal}")?;
        }
        write!(f, ")")
    }
}

#[derive(From, Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    #[display("{_0}")]
    Keyword(Keyword),
    #[display("{_0}")]
    Demarcator(Demarcator),
    #[display("identifier")]
    Identifier,
    #[display("integer")]
    Integer,
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Keyword {
    #[display("exit")]
    Exit,
    #[display("let")]
    Let,
    #[display("const")]
    Const,
    #[display("print")]
    Print,
}
impl Keyword {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "exit" => Some(Self::Exit),
            "let" => Some(Self::Let),
            "const" => Some(Self::Const),
            "print" => Some(Self::Print),
            _ => None,
        }
    }
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Demarcator {
    #[display("`(`")]
    ParenOpen,
    #[display("`)`")]
    ParenClose,
    #[display("`=`")]
    Equals,
    #[display("`;`")]
    Semicolon,
}
impl Demarcator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::ParenOpen),
            ')' => Some(Self::ParenClose),
            '=' => Some(Self::Equals),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }
}
