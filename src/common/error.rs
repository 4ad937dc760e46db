use crate::{
    common::{
        identifier::RawIdentifier,
        position::{SrcLocation, SrcPos},
    },
    stage1_lex::tokens::TokenKind,
};
use derive_more::{Display, Error};

pub type CompileResult<T> = Result<T, CompileError>;

/// The first problem found in a compilation unit. No stage attempts to continue past one.
#[derive(Display, Error, PartialEq, Eq, Debug)]
pub enum CompileError {
    /* Lexical */
    #[display("Invalid Token `{character}`")]
    InvalidToken { character: char, pos: SrcPos },

    /* Syntax */
    #[display("Expected {expected}")]
    ExpectedToken { expected: TokenKind, line: usize },
    #[display("Unable to parse statement")]
    UnparsableStatement { line: usize },
    #[display("Unable to parse term")]
    UnparsableTerm { line: usize },

    /* Semantic */
    #[display("Undeclared identifier `{ident}`")]
    UndeclaredIdentifier { ident: RawIdentifier, line: usize },
    #[display("Identifier `{ident}` already in use")]
    DuplicateDeclaration { ident: RawIdentifier, line: usize },
    #[display("Can not reassign const `{ident}`")]
    ConstReassignment { ident: RawIdentifier, line: usize },
}
impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } => ErrorKind::Lexical,
            Self::ExpectedToken { .. }
            | Self::UnparsableStatement { .. }
            | Self::UnparsableTerm { .. } => ErrorKind::Syntax,
            Self::UndeclaredIdentifier { .. }
            | Self::DuplicateDeclaration { .. }
            | Self::ConstReassignment { .. } => ErrorKind::Semantic,
        }
    }

    pub fn location(&self) -> SrcLocation {
        match self {
            Self::InvalidToken { pos, .. } => SrcLocation::Pos(*pos),
            Self::ExpectedToken { line, .. }
            | Self::UnparsableStatement { line }
            | Self::UnparsableTerm { line }
            | Self::UndeclaredIdentifier { line, .. }
            | Self::DuplicateDeclaration { line, .. }
            | Self::ConstReassignment { line, .. } => SrcLocation::Line(*line),
        }
    }
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stage1_lex::tokens::Demarcator;

    #[test]
    fn messages_and_classification() {
        let e = CompileError::InvalidToken {
            character: '@',
            pos: SrcPos::new(2, 7),
        };
        assert_eq!(e.to_string(), "Invalid Token `@`");
        assert_eq!(
            (e.kind(), e.location()),
            (ErrorKind::Lexical, SrcLocation::Pos(SrcPos::new(2, 7)))
        );
        assert_eq!(e.location().to_string(), "2:7");

        let e = CompileError::ExpectedToken {
            expected: Demarcator::Semicolon.into(),
            line: 3,
        };
        assert_eq!(e.to_string(), "Expected `;`");
        assert_eq!((e.kind(), e.location()), (ErrorKind::Syntax, SrcLocation::Line(3)));
        assert_eq!(e.location().to_string(), "3");

        let e = CompileError::ConstReassignment {
            ident: RawIdentifier::from("x"),
            line: 1,
        };
        assert_eq!(e.to_string(), "Can not reassign const `x`");
        assert_eq!(e.kind(), ErrorKind::Semantic);
    }
}
