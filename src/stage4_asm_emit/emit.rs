use crate::stage3_asm_gen::asm_ast::*;
use core::fmt::{self, Write};

const TAB: &str = "\t";

/// Writes NASM (Intel syntax, ELF64) source text.
pub struct AsmCodeEmitter<W: Write> {
    w: W,
}
impl<W: Write> AsmCodeEmitter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }

    pub fn emit_program(mut self, Program { instrs }: &Program) -> fmt::Result {
        self.write_data_section()?;

        writeln!(&mut self.w, "section .text")?;
        writeln!(&mut self.w, "{TAB}extern {}", ExternFun::Printf)?;
        writeln!(&mut self.w, "{TAB}global main")?;
        writeln!(&mut self.w)?;

        writeln!(&mut self.w, "main:")?;
        for instr in instrs {
            self.write_instr(instr)?;
        }
        writeln!(&mut self.w)?;

        /* Reached when no `exit` statement ran. */
        writeln!(&mut self.w, "{TAB}mov rax, {} ;; exit syscall", syscall::EXIT)?;
        writeln!(&mut self.w, "{TAB}xor rdi, rdi")?;
        writeln!(&mut self.w, "{TAB}syscall")?;
        writeln!(&mut self.w)?;

        writeln!(
            &mut self.w,
            "section .note.GNU-stack noalloc noexec nowrite progbits"
        )?;
        Ok(())
    }

    fn write_data_section(&mut self) -> fmt::Result {
        writeln!(&mut self.w, "section .data")?;
        writeln!(&mut self.w, "{TAB}{} db \"%d\", 10, 0", DataLabel::NumFmt)?;
        writeln!(&mut self.w)?;
        Ok(())
    }

    fn write_instr(&mut self, instr: &Instruction) -> fmt::Result {
        match instr {
            Instruction::BeginStmt(marker) => self.write_marker("", marker),
            Instruction::EndStmt(marker) => self.write_marker("/", marker),
            Instruction::Mov { dst, src } => {
                write!(&mut self.w, "{TAB}mov {dst}, ")?;
                self.write_operand(src)?;
                writeln!(&mut self.w)
            }
            Instruction::Store { dst, src } => {
                writeln!(&mut self.w, "{TAB}mov [rsp + {dst}], {src}")
            }
            Instruction::Push(operand) => {
                write!(&mut self.w, "{TAB}push ")?;
                self.write_operand(operand)?;
                writeln!(&mut self.w)
            }
            Instruction::Pop(reg) => writeln!(&mut self.w, "{TAB}pop {reg}"),
            Instruction::Xor(reg) => writeln!(&mut self.w, "{TAB}xor {reg}, {reg}"),
            Instruction::AllocateStack(bytelen) => writeln!(&mut self.w, "{TAB}sub rsp, {bytelen}"),
            Instruction::DeallocateStack(bytelen) => {
                writeln!(&mut self.w, "{TAB}add rsp, {bytelen}")
            }
            Instruction::Call(fun) => writeln!(&mut self.w, "{TAB}call {fun}"),
            Instruction::Syscall => writeln!(&mut self.w, "{TAB}syscall"),
        }
    }

    fn write_operand(&mut self, operand: &Operand) -> fmt::Result {
        match operand {
            Operand::ImmediateLiteral(digits) => write!(&mut self.w, "{digits}"),
            Operand::ImmediateValue(i) => write!(&mut self.w, "{i}"),
            Operand::Register(reg) => write!(&mut self.w, "{reg}"),
            /* Memory operands of `push` need an explicit size. */
            Operand::StackPosition(pos) => write!(&mut self.w, "QWORD [rsp + {pos}]"),
            Operand::Data(lbl) => write!(&mut self.w, "{lbl}"),
        }
    }

    fn write_marker(&mut self, pfx: &str, StmtMarker { name, ident }: &StmtMarker) -> fmt::Result {
        write!(&mut self.w, "{TAB};;{pfx}{name}")?;
        if let Some(ident) = ident {
            write!(&mut self.w, " {ident}")?;
        }
        writeln!(&mut self.w)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        AsmCodeEmitter::new(f).emit_program(self)
    }
}
