use super::{
    asm_ast::{self as a, Instruction, Operand, Register, StackPosition, StmtMarker},
    bindings::{Bindings, VarBinding},
};
use crate::{
    common::{
        error::{CompileError, CompileResult},
        identifier::RawIdentifier,
    },
    ds_n_a::arena::Handle,
    stage1_lex::tokens::Token,
    stage2_parse::ast::*,
};

const SLOT_BYTELEN: u64 = 8;

/// Lowers statements onto a stack machine whose only storage is the process stack.
///
/// Every evaluated term is pushed. A variable's value stays where its initializer was pushed,
/// and is addressed relative to the stack top at the time of each use.
pub struct AsmCodeGenerator<'a> {
    arena: &'a AstArena,

    bindings: Bindings,

    /// Count of 8-byte values currently pushed.
    stack_size: usize,

    instrs: Vec<Instruction>,
}
impl<'a> AsmCodeGenerator<'a> {
    fn new(arena: &'a AstArena) -> Self {
        Self {
            arena,
            bindings: Bindings::default(),
            stack_size: 0,
            instrs: vec![],
        }
    }

    pub fn gen_program(prog: &'a Program) -> CompileResult<a::Program> {
        let mut generator = Self::new(prog.arena());
        for stmt in prog.statements() {
            generator.gen_stmt(stmt)?;
        }
        log::debug!(
            "Generated {} instrs; final stack size {}",
            generator.instrs.len(),
            generator.stack_size
        );
        Ok(a::Program { instrs: generator.instrs })
    }
}

/// Statement
impl AsmCodeGenerator<'_> {
    fn gen_stmt(&mut self, stmt: &Statement) -> CompileResult<()> {
        match *stmt {
            Statement::Exit(term) => self.in_marker("exit", None, |slf| {
                slf.gen_term(term)?;
                slf.instrs.push(Instruction::Mov {
                    dst: Register::AX,
                    src: Operand::ImmediateValue(a::syscall::EXIT),
                });
                slf.pop(Register::DI);
                slf.instrs.push(Instruction::Syscall);
                Ok(())
            }),
            Statement::Let(nt) => self.gen_decl("let", nt, false),
            Statement::Const(nt) => self.gen_decl("const", nt, true),
            Statement::Assign(NamedTerm { ident, term }) => {
                let (raw_ident, line) = self.ident_of(ident);
                self.in_marker("assign", Some(raw_ident.clone()), |slf| {
                    let slot = match slf.bindings.find(&raw_ident) {
                        None => {
                            return Err(CompileError::UndeclaredIdentifier { ident: raw_ident, line });
                        }
                        Some(var) if var.is_const => {
                            return Err(CompileError::ConstReassignment { ident: raw_ident, line });
                        }
                        Some(var) => var.slot,
                    };

                    slf.gen_term(term)?;
                    slf.pop(Register::AX);
                    let dst = slf.stack_position(slot);
                    slf.instrs.push(Instruction::Store { dst, src: Register::AX });
                    Ok(())
                })
            }
            Statement::Print(term) => self.in_marker("print", None, |slf| {
                slf.gen_term(term)?;
                slf.instrs.push(Instruction::Mov {
                    dst: Register::DI,
                    src: Operand::Data(a::DataLabel::NumFmt),
                });
                slf.pop(Register::SI);

                /* `main` was entered with RSP at 8 mod 16. The callee expects RSP at 0 mod 16. */
                let pad = slf.stack_size % 2 == 0;
                if pad {
                    slf.instrs.push(Instruction::AllocateStack(SLOT_BYTELEN));
                }
                slf.instrs.push(Instruction::Xor(Register::EAX));
                slf.instrs.push(Instruction::Call(a::ExternFun::Printf));
                if pad {
                    slf.instrs.push(Instruction::DeallocateStack(SLOT_BYTELEN));
                }
                Ok(())
            }),
        }
    }

    fn gen_decl(
        &mut self,
        name: &'static str,
        NamedTerm { ident, term }: NamedTerm,
        is_const: bool,
    ) -> CompileResult<()> {
        let (raw_ident, line) = self.ident_of(ident);
        self.in_marker(name, Some(raw_ident.clone()), |slf| {
            if slf.bindings.find(&raw_ident).is_some() {
                return Err(CompileError::DuplicateDeclaration { ident: raw_ident, line });
            }

            /* The initializer's pushed value becomes the variable's storage.
            Until then, the variable is not resolvable, not even by its own initializer. */
            let slot = slf.stack_size;
            slf.gen_term(term)?;
            log::trace!("{name} {raw_ident} @ slot {slot}");
            slf.bindings.declare(VarBinding { ident: raw_ident, is_const, slot });
            Ok(())
        })
    }

    fn in_marker<F>(
        &mut self,
        name: &'static str,
        ident: Option<RawIdentifier>,
        f: F,
    ) -> CompileResult<()>
    where
        F: FnOnce(&mut Self) -> CompileResult<()>,
    {
        let begin = StmtMarker { name, ident: ident.clone() };
        self.instrs.push(Instruction::BeginStmt(begin));
        f(self)?;
        self.instrs.push(Instruction::EndStmt(StmtMarker { name, ident }));
        Ok(())
    }
}

/// Term
impl AsmCodeGenerator<'_> {
    fn gen_term(&mut self, term: Handle<Term>) -> CompileResult<()> {
        let arena = self.arena;
        match arena.terms[term] {
            Term::Integer(token) => {
                let digits = arena.tokens[token].literal().to_owned();
                self.instrs.push(Instruction::Mov {
                    dst: Register::AX,
                    src: Operand::ImmediateLiteral(digits),
                });
                self.push(Register::AX.into());
            }
            Term::Identifier(token) => {
                let (raw_ident, line) = self.ident_of(token);
                let slot = match self.bindings.find(&raw_ident) {
                    Some(var) => var.slot,
                    None => {
                        return Err(CompileError::UndeclaredIdentifier { ident: raw_ident, line });
                    }
                };
                let pos = self.stack_position(slot);
                self.push(pos.into());
            }
        }
        Ok(())
    }
}

/// Helpers
impl AsmCodeGenerator<'_> {
    fn push(&mut self, operand: Operand) {
        self.instrs.push(Instruction::Push(operand));
        self.stack_size += 1;
    }
    fn pop(&mut self, reg: Register) {
        self.instrs.push(Instruction::Pop(reg));
        self.stack_size -= 1;
    }

    /// The position of `slot` relative to the current stack top.
    fn stack_position(&self, slot: usize) -> StackPosition {
        debug_assert!(slot < self.stack_size);
        let slots_above = (self.stack_size - slot - 1) as u64;
        StackPosition::new(slots_above * SLOT_BYTELEN)
    }

    fn ident_of(&self, token: Handle<Token>) -> (RawIdentifier, usize) {
        let token = &self.arena.tokens[token];
        (RawIdentifier::from(token.literal()), token.pos.line)
    }
}
