use crate::common::identifier::RawIdentifier;

#[derive(Debug)]
pub struct VarBinding {
    pub ident: RawIdentifier,
    pub is_const: bool,

    /// Count of 8-byte values that were on the abstract stack below this variable's value.
    pub slot: usize,
}

/// All variables declared so far, in declaration order. There is exactly one flat scope.
#[derive(Default, Debug)]
pub struct Bindings {
    vars: Vec<VarBinding>,
}
impl Bindings {
    pub fn find(&self, ident: &str) -> Option<&VarBinding> {
        self.vars.iter().find(|var| &var.ident as &str == ident)
    }

    /// The caller must have checked that `binding.ident` is not declared yet.
    pub fn declare(&mut self, binding: VarBinding) {
        debug_assert!(self.find(&binding.ident).is_none());
        self.vars.push(binding);
    }
}
