use super::diagnostics::DiagnosticStyle;
use clap::{Parser as ClapParser, ValueEnum};
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
pub struct CliArgs {
    src_filepath: PathBuf,

    /// The executable. Intermediate files are named after it, eg `<out>.asm` and `<out>.o`.
    out_filepath: PathBuf,

    #[clap(long = "lex")]
    until_lexer: bool,

    #[clap(long = "parse")]
    until_parser: bool,

    #[clap(long = "codegen")]
    until_asm_codegen: bool,

    #[clap(short = 'S')]
    until_asm_emission: bool,

    #[clap(short = 'c')]
    until_assembler: bool,

    #[clap(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

pub struct Args {
    pub src_filepath: PathBuf,
    pub out_filepath: PathBuf,

    pub until: DriverUntil,

    pub color: ColorChoice,
}
impl From<CliArgs> for Args {
    fn from(cli_args: CliArgs) -> Self {
        let until = if cli_args.until_lexer {
            DriverUntil::Compiler(CompilerUntil::Lexer)
        } else if cli_args.until_parser {
            DriverUntil::Compiler(CompilerUntil::Parser)
        } else if cli_args.until_asm_codegen {
            DriverUntil::Compiler(CompilerUntil::AsmGen)
        } else if cli_args.until_asm_emission {
            DriverUntil::Compiler(CompilerUntil::AsmEmit)
        } else if cli_args.until_assembler {
            DriverUntil::Downstream(Downstream::Assembler)
        } else {
            DriverUntil::Downstream(Downstream::Linker)
        };

        Self {
            src_filepath: cli_args.src_filepath,
            out_filepath: cli_args.out_filepath,
            until,
            color: cli_args.color,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DriverUntil {
    Compiler(CompilerUntil),
    Downstream(Downstream),
}
impl DriverUntil {
    pub fn compiler_until(&self) -> CompilerUntil {
        match self {
            Self::Compiler(u) => *u,
            Self::Downstream(_) => CompilerUntil::AsmEmit,
        }
    }
}
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CompilerUntil {
    Lexer,
    Parser,
    AsmGen,
    AsmEmit,
}
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Downstream {
    Assembler,
    Linker,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
impl ColorChoice {
    /// `Auto` colors iff the sink is a terminal and `NO_COLOR` is unset.
    pub fn resolve(self, sink_is_terminal: bool) -> DiagnosticStyle {
        let colored = match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => sink_is_terminal && std::env::var_os("NO_COLOR").is_none(),
        };
        DiagnosticStyle::new(colored)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    fn parse(argv: &[&str]) -> Result<Args> {
        let cli_args = CliArgs::try_parse_from(argv)?;
        Ok(Args::from(cli_args))
    }

    #[test]
    fn two_positional_args() -> Result<()> {
        let args = parse(&["oxygen", "prog.o2", "out/prog"])?;
        assert_eq!(args.src_filepath, PathBuf::from("prog.o2"));
        assert_eq!(args.out_filepath, PathBuf::from("out/prog"));
        assert_eq!(args.until, DriverUntil::Downstream(Downstream::Linker));
        assert_eq!(args.color, ColorChoice::Auto);

        assert!(parse(&["oxygen", "prog.o2"]).is_err());
        assert!(parse(&["oxygen", "prog.o2", "out", "extra"]).is_err());
        Ok(())
    }

    #[test]
    fn stop_after_stage() -> Result<()> {
        let until = |flag: &str| -> Result<DriverUntil> {
            Ok(parse(&["oxygen", "prog.o2", "out", flag])?.until)
        };
        assert_eq!(until("--lex")?, DriverUntil::Compiler(CompilerUntil::Lexer));
        assert_eq!(until("--parse")?, DriverUntil::Compiler(CompilerUntil::Parser));
        assert_eq!(until("--codegen")?, DriverUntil::Compiler(CompilerUntil::AsmGen));
        assert_eq!(until("-S")?, DriverUntil::Compiler(CompilerUntil::AsmEmit));
        assert_eq!(until("-c")?, DriverUntil::Downstream(Downstream::Assembler));

        assert_eq!(
            DriverUntil::Downstream(Downstream::Assembler).compiler_until(),
            CompilerUntil::AsmEmit
        );
        Ok(())
    }

    #[test]
    fn color_choice() -> Result<()> {
        let args = parse(&["oxygen", "--color", "never", "prog.o2", "out"])?;
        assert_eq!(args.color, ColorChoice::Never);
        assert_eq!(ColorChoice::Never.resolve(true), DiagnosticStyle::new(false));
        assert_eq!(ColorChoice::Always.resolve(false), DiagnosticStyle::new(true));
        assert_eq!(ColorChoice::Auto.resolve(false), DiagnosticStyle::new(false));
        Ok(())
    }
}
