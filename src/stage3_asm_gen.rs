pub mod asm_ast;
mod bindings;
mod generate;

pub use generate::AsmCodeGenerator;

use crate::{common::error::CompileResult, stage2_parse::ast::Program};

/// Lowers the program and renders it as NASM source text.
pub fn generate(prog: &Program) -> CompileResult<String> {
    let asm_prog = AsmCodeGenerator::gen_program(prog)?;
    Ok(asm_prog.to_string())
}
