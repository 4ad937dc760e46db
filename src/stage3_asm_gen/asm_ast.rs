use crate::common::identifier::RawIdentifier;
use derive_more::{Constructor, Deref, Display, From};

/// The body of `main`, in emission order.
#[derive(Default, Debug)]
pub struct Program {
    pub instrs: Vec<Instruction>,
}

#[derive(Debug)]
pub enum Instruction {
    /// Opens the block of instructions that one source statement lowers to.
    BeginStmt(StmtMarker),
    EndStmt(StmtMarker),

    Mov {
        dst: Register,
        src: Operand,
    },
    /// The only instruction that writes to memory.
    Store {
        dst: StackPosition,
        src: Register,
    },
    Push(Operand),
    Pop(Register),
    Xor(Register),
    AllocateStack(u64),
    DeallocateStack(u64),
    Call(ExternFun),
    Syscall,
}

#[derive(Debug)]
pub struct StmtMarker {
    pub name: &'static str,
    pub ident: Option<RawIdentifier>,
}

#[derive(From, Debug)]
pub enum Operand {
    /// Decimal digits exactly as spelled in the source. The assembler interprets them.
    ImmediateLiteral(String),
    ImmediateValue(u64),
    Register(Register),
    StackPosition(StackPosition),
    Data(DataLabel),
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Register {
    #[display("rax")]
    AX,
    /// The low half of AX. Zeroing it tells a variadic callee that no vector registers are in use.
    #[display("eax")]
    EAX,
    #[display("rdi")]
    DI,
    #[display("rsi")]
    SI,
}

/// Byte offset upward from RSP.
#[derive(Constructor, Deref, Display, Clone, Copy, PartialEq, Eq, Debug)]
pub struct StackPosition(u64);

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DataLabel {
    #[display("num_fmt")]
    NumFmt,
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExternFun {
    #[display("printf")]
    Printf,
}

/// Linux x86-64 syscall numbers.
pub mod syscall {
    pub const EXIT: u64 = 60;
}
