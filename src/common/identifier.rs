use derive_more::{Deref, Display};

/// An identifier exactly as it was spelled in the source.
#[derive(Deref, Display, Clone, PartialEq, Eq, Hash, Debug)]
pub struct RawIdentifier(String);
impl From<&str> for RawIdentifier {
    fn from(s: &str) -> Self {
        Self(String::from(s))
    }
}
