pub mod config;
pub mod diagnostics;
pub mod files;

use self::{
    config::{Args, CliArgs, CompilerUntil, DriverUntil, Downstream},
    diagnostics::{Diagnostics, Severity},
    files::{AsmFilepath, ObjectFilepath, ProgramFilepath, SrcFilepath},
};
use crate::{
    common::error::CompileResult,
    ds_n_a::arena::Arena,
    stage1_lex::{lexer, tokens::Token},
    stage2_parse::{ast::Program, parser::Parser},
    stage3_asm_gen::{self, AsmCodeGenerator, asm_ast},
};
use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

pub fn driver_main() -> Result<ExitCode> {
    env_logger::init();

    let cli_args = CliArgs::parse();
    log::info!("{cli_args:?}");

    let args = Args::from(cli_args);
    let style = args.color.resolve(io::stderr().is_terminal());
    let mut diagnostics = Diagnostics::new(io::stderr(), style);

    let driver = Driver::from(args);
    driver.run(&mut diagnostics)
}

#[derive(Debug)]
pub enum CompilationResult {
    Lexed(Arena<Token>),
    Parsed(Program),
    AsmCode(asm_ast::Program),
    AsmText(String),
}

pub struct Driver {
    args: Args,
}
impl From<Args> for Driver {
    fn from(args: Args) -> Self {
        Self { args }
    }
}
impl Driver {
    fn run<W: Write>(&self, diagnostics: &mut Diagnostics<W>) -> Result<ExitCode> {
        let src_filepath = SrcFilepath::from(self.args.src_filepath.clone());
        let src = fs::read_to_string(&src_filepath as &PathBuf)
            .with_context(|| format!("Failed to read {src_filepath:?}"))?;

        if src.is_empty() {
            diagnostics.report(Severity::Info, "Empty source file, nothing todo", None)?;
            return Ok(ExitCode::SUCCESS);
        }

        let compil_res = match self.compile(&src) {
            Ok(compil_res) => compil_res,
            Err(e) => {
                diagnostics.report_compile_error(&e)?;
                return Ok(ExitCode::FAILURE);
            }
        };
        log::info!("Compiler done -> {src_filepath:?}");

        let asm_text = match compil_res {
            CompilationResult::Lexed(tokens) => {
                for (_, token) in tokens.iter() {
                    println!("{token}");
                }
                return Ok(ExitCode::SUCCESS);
            }
            CompilationResult::Parsed(prog) => {
                print!("{}", prog.dump());
                return Ok(ExitCode::SUCCESS);
            }
            CompilationResult::AsmCode(asm_prog) => {
                println!("asm_prog: {asm_prog:#?}");
                return Ok(ExitCode::SUCCESS);
            }
            CompilationResult::AsmText(asm_text) => asm_text,
        };

        let prog_filepath = ProgramFilepath::from(self.args.out_filepath.clone());
        let asm_filepath = AsmFilepath::from(&prog_filepath);
        fs::write(&asm_filepath as &PathBuf, asm_text)
            .with_context(|| format!("Failed to write {asm_filepath:?}"))?;
        log::info!("Asm emission done -> {asm_filepath:?}");
        if self.args.until == DriverUntil::Compiler(CompilerUntil::AsmEmit) {
            return Ok(ExitCode::SUCCESS);
        }

        let obj_filepath = assemble(&asm_filepath, &prog_filepath)?;
        if self.args.until == DriverUntil::Downstream(Downstream::Assembler) {
            return Ok(ExitCode::SUCCESS);
        }

        link(&obj_filepath, &prog_filepath)?;
        Ok(ExitCode::SUCCESS)
    }

    /// Runs the in-process stages on the source text.
    pub fn compile(&self, src: &str) -> CompileResult<CompilationResult> {
        let until = self.args.until.compiler_until();

        let tokens = lexer::tokenize(src)?;
        for (_, token) in tokens.iter() {
            log::debug!("{token}");
        }
        if until == CompilerUntil::Lexer {
            return Ok(CompilationResult::Lexed(tokens));
        }

        let prog = Parser::new(tokens).parse_program()?;
        log::debug!("Program:\n{}", prog.dump());
        if until == CompilerUntil::Parser {
            return Ok(CompilationResult::Parsed(prog));
        }

        if until == CompilerUntil::AsmGen {
            let asm_prog = AsmCodeGenerator::gen_program(&prog)?;
            return Ok(CompilationResult::AsmCode(asm_prog));
        }

        let asm_text = stage3_asm_gen::generate(&prog)?;
        Ok(CompilationResult::AsmText(asm_text))
    }
}

fn assemble(asm_filepath: &AsmFilepath, prog_filepath: &ProgramFilepath) -> Result<ObjectFilepath> {
    let obj_filepath = ObjectFilepath::from(prog_filepath);
    let cmd = duct::cmd!(
        "nasm",
        "-felf64",
        asm_filepath.as_os_str(),
        "-o",
        obj_filepath.as_os_str()
    );
    run_downstream(cmd, "assembler")?;
    log::info!("Assembler done -> {obj_filepath:?}");
    Ok(obj_filepath)
}
fn link(obj_filepath: &ObjectFilepath, prog_filepath: &ProgramFilepath) -> Result<()> {
    let cmd = duct::cmd!(
        "gcc",
        obj_filepath.as_os_str(),
        "-o",
        prog_filepath.as_os_str(),
        "-no-pie"
    );
    run_downstream(cmd, "linker")?;
    log::info!("Linker done -> {prog_filepath:?}");
    Ok(())
}
fn run_downstream(cmd: duct::Expression, descr: &str) -> Result<()> {
    log::info!("{descr} command: {cmd:?}");
    cmd.run()
        .with_context(|| format!("The {descr} process did not succeed."))?;
    Ok(())
}
