use crate::{ds_n_a::arena::*, stage1_lex::tokens::Token};
use core::fmt::{self, Formatter};
use getset::Getters;

/// Owns every node of one compilation unit. Each node type lives in its own table.
#[derive(Default, Debug)]
pub struct AstArena {
    pub tokens: Arena<Token>,
    pub terms: Arena<Term>,
    pub stmts: Arena<Statement>,
}
impl AstArena {
    pub fn new(tokens: Arena<Token>) -> Self {
        Self {
            tokens,
            terms: Arena::default(),
            stmts: Arena::default(),
        }
    }

    /// The identifier or digit text that a term refers to.
    pub fn term_text(&self, term: Handle<Term>) -> &str {
        let token = match self.terms[term] {
            Term::Integer(token) | Term::Identifier(token) => token,
        };
        self.tokens[token].literal()
    }
}

#[derive(Getters, Debug)]
#[getset(get = "pub")]
pub struct Program {
    arena: AstArena,

    /// In execution order.
    stmts: Vec<Handle<Statement>>,
}
impl Program {
    pub fn new(arena: AstArena, stmts: Vec<Handle<Statement>>) -> Self {
        Self { arena, stmts }
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.stmts.iter().map(|stmt| &self.arena.stmts[*stmt])
    }

    pub fn dump(&self) -> ProgramDump<'_> {
        ProgramDump { prog: self }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Statement {
    Exit(Handle<Term>),
    Let(NamedTerm),
    Const(NamedTerm),
    Assign(NamedTerm),
    Print(Handle<Term>),
}
impl Statement {
    pub fn term(&self) -> Handle<Term> {
        match self {
            Self::Exit(term) | Self::Print(term) => *term,
            Self::Let(nt) | Self::Const(nt) | Self::Assign(nt) => nt.term,
        }
    }

    fn node_name(&self) -> &'static str {
        match self {
            Self::Exit(_) => "Exit",
            Self::Let(_) => "Let",
            Self::Const(_) => "Const",
            Self::Assign(_) => "Assign",
            Self::Print(_) => "Print",
        }
    }
}

/// The target identifier of a declaration or assignment, with the term whose value it receives.
#[derive(Clone, Copy, Debug)]
pub struct NamedTerm {
    pub ident: Handle<Token>,
    pub term: Handle<Term>,
}

/// Each variant refers to the token that spelled it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Term {
    Integer(Handle<Token>),
    Identifier(Handle<Token>),
}

/// One line per statement, eg `NodeStatementLet( NodeTermInteger, 5 )`.
pub struct ProgramDump<'a> {
    prog: &'a Program,
}
impl fmt::Display for ProgramDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let arena = self.prog.arena();
        for stmt in self.prog.statements() {
            let term = stmt.term();
            let term_name = match arena.terms[term] {
                Term::Integer(_) => "Integer",
                Term::Identifier(_) => "Identifier",
            };
            writeln!(
                f,
                "NodeStatement{}( NodeTerm{term_name}, {} )",
                stmt.node_name(),
                arena.term_text(term),
            )?;
        }
        Ok(())
    }
}
