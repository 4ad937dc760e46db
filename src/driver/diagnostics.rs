use crate::common::{error::CompileError, position::SrcLocation};
use derive_more::Constructor;
use std::io::{self, Write};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD_RED: &str = "\x1b[1;31m";
    pub const BOLD_YELLOW: &str = "\x1b[1;33m";
    pub const BOLD_BLUE: &str = "\x1b[1;34m";
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Constructor, Clone, Copy, PartialEq, Eq, Debug)]
pub struct DiagnosticStyle {
    colored: bool,
}
impl DiagnosticStyle {
    fn paint(&self, ansi_code: &'static str) -> &'static str {
        if self.colored { ansi_code } else { "" }
    }
}

/// Where user-facing messages go. One line per message: `[Error]:<line>[:<column>]: <message>`.
pub struct Diagnostics<W: Write> {
    w: W,
    style: DiagnosticStyle,
}
impl<W: Write> Diagnostics<W> {
    pub fn new(w: W, style: DiagnosticStyle) -> Self {
        Self { w, style }
    }

    pub fn report(
        &mut self,
        severity: Severity,
        message: &str,
        location: Option<SrcLocation>,
    ) -> Result<(), io::Error> {
        let (color, tag) = match severity {
            Severity::Info => (ansi::BOLD_BLUE, "[Info]"),
            Severity::Error => (ansi::BOLD_RED, "[Error]"),
        };
        write!(&mut self.w, "{}{tag}", self.style.paint(color))?;
        if let Some(location) = location {
            write!(&mut self.w, "{}:{location}:", self.style.paint(ansi::BOLD_YELLOW))?;
        }
        writeln!(&mut self.w, " {}{message}", self.style.paint(ansi::RESET))?;
        self.w.flush()
    }

    pub fn report_compile_error(&mut self, e: &CompileError) -> Result<(), io::Error> {
        log::debug!("{:?} error: {e:?}", e.kind());
        self.report(Severity::Error, &e.to_string(), Some(e.location()))
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.w
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::{identifier::RawIdentifier, position::SrcPos};

    fn render(style: DiagnosticStyle, f: impl FnOnce(&mut Diagnostics<Vec<u8>>)) -> String {
        let mut diagnostics = Diagnostics::new(vec![], style);
        f(&mut diagnostics);
        String::from_utf8(diagnostics.into_inner()).unwrap()
    }

    #[test]
    fn plain() {
        let out = render(DiagnosticStyle::new(false), |d| {
            d.report(Severity::Info, "Empty source file, nothing todo", None)
                .unwrap();
            d.report_compile_error(&CompileError::UndeclaredIdentifier {
                ident: RawIdentifier::from("y"),
                line: 4,
            })
            .unwrap();
        });
        assert_eq!(
            out,
            "[Info] Empty source file, nothing todo\n[Error]:4: Undeclared identifier `y`\n"
        );
    }

    #[test]
    fn invalid_token_points_at_column() {
        let out = render(DiagnosticStyle::new(false), |d| {
            d.report_compile_error(&CompileError::InvalidToken {
                character: '@',
                pos: SrcPos::new(2, 7),
            })
            .unwrap();
        });
        assert_eq!(out, "[Error]:2:7: Invalid Token `@`\n");
    }

    #[test]
    fn colored() {
        let out = render(DiagnosticStyle::new(true), |d| {
            d.report(Severity::Error, "Expected `;`", Some(SrcLocation::Line(2)))
                .unwrap();
        });
        assert_eq!(
            out,
            "\x1b[1;31m[Error]\x1b[1;33m:2: \x1b[0mExpected `;`\n"
        );
    }
}
