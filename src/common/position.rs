use derive_more::{Constructor, Display};

/// A 1-based location within the source text. `column` counts `char`s, not bytes.
#[derive(Constructor, Display, Clone, Copy, PartialEq, Eq, Debug)]
#[display("{line}:{column}")]
pub struct SrcPos {
    pub line: usize,
    pub column: usize,
}
impl Default for SrcPos {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// Where a diagnostic points. Lexical errors know the exact char; later stages know the line.
#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SrcLocation {
    #[display("{_0}")]
    Line(usize),
    #[display("{_0}")]
    Pos(SrcPos),
}
