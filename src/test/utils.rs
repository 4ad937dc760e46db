use crate::{
    common::error::CompileResult,
    driver::{
        CompilationResult, Driver,
        config::{Args, ColorChoice, CompilerUntil, DriverUntil},
    },
    ds_n_a::arena::Arena,
    stage1_lex::tokens::Token,
    stage2_parse::ast::Program,
    stage3_asm_gen::asm_ast,
};
use std::path::PathBuf;

macro_rules! fail {
    ( $($arg:tt),* ) => {
        panic!($($arg)*)
    };
}
pub(crate) use fail;

fn compile(src: &str, until: CompilerUntil) -> CompileResult<CompilationResult> {
    let args = Args {
        src_filepath: PathBuf::from("/tmp/mock.o2"),
        out_filepath: PathBuf::from("/tmp/mock"),
        until: DriverUntil::Compiler(until),
        color: ColorChoice::Never,
    };
    let driver = Driver::from(args);
    driver.compile(src)
}

pub fn compile_until_lexer(src: &str) -> CompileResult<Arena<Token>> {
    match compile(src, CompilerUntil::Lexer)? {
        CompilationResult::Lexed(tokens) => Ok(tokens),
        actual => fail!("{actual:#?}"),
    }
}

pub fn compile_until_parser(src: &str) -> CompileResult<Program> {
    match compile(src, CompilerUntil::Parser)? {
        CompilationResult::Parsed(prog) => Ok(prog),
        actual => fail!("{actual:#?}"),
    }
}

pub fn compile_until_asm_gen(src: &str) -> CompileResult<asm_ast::Program> {
    match compile(src, CompilerUntil::AsmGen)? {
        CompilationResult::AsmCode(asm_prog) => Ok(asm_prog),
        actual => fail!("{actual:#?}"),
    }
}

pub fn compile_until_asm_emit(src: &str) -> CompileResult<String> {
    match compile(src, CompilerUntil::AsmEmit)? {
        CompilationResult::AsmText(asm_text) => Ok(asm_text),
        actual => fail!("{actual:#?}"),
    }
}

/// Tokens as `(kind, line, column, literal)`, for compact assertions.
pub fn token_summaries(tokens: &Arena<Token>) -> Vec<(String, usize, usize, Option<String>)> {
    tokens
        .iter()
        .map(|(_, t)| (t.kind.to_string(), t.pos.line, t.pos.column, t.literal.clone()))
        .collect()
}
