use derive_more::Deref;
use std::{borrow::Borrow, ffi::OsString, path::PathBuf};

#[derive(Deref, Debug)]
pub struct SrcFilepath(PathBuf);
impl From<PathBuf> for SrcFilepath {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// The final executable. Every intermediate file is named after it.
#[derive(Deref, Debug)]
pub struct ProgramFilepath(PathBuf);
impl From<PathBuf> for ProgramFilepath {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}
impl ProgramFilepath {
    /// Unlike [`PathBuf::set_extension()`], keeps any dot-suffix already present, eg `a.out` -> `a.out.asm`.
    fn with_appended_extension(&self, ext: &str) -> PathBuf {
        let mut s = OsString::from(self.as_os_str());
        s.push(".");
        s.push(ext);
        PathBuf::from(s)
    }
}

#[derive(Deref, Debug)]
pub struct AsmFilepath(PathBuf);
impl<P: Borrow<ProgramFilepath>> From<P> for AsmFilepath {
    fn from(prog_filepath: P) -> Self {
        Self(prog_filepath.borrow().with_appended_extension("asm"))
    }
}

#[derive(Deref, Debug)]
pub struct ObjectFilepath(PathBuf);
impl<P: Borrow<ProgramFilepath>> From<P> for ObjectFilepath {
    fn from(prog_filepath: P) -> Self {
        Self(prog_filepath.borrow().with_appended_extension("o"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn intermediate_filepaths() {
        let prog = ProgramFilepath::from(PathBuf::from("build/a.out"));
        assert_eq!(
            &AsmFilepath::from(&prog) as &PathBuf,
            &PathBuf::from("build/a.out.asm")
        );
        assert_eq!(
            &ObjectFilepath::from(&prog) as &PathBuf,
            &PathBuf::from("build/a.out.o")
        );
        assert_eq!(&prog as &PathBuf, &PathBuf::from("build/a.out"));
    }
}
