/// NEG usage for a single service.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NegServiceState {
    /// Standalone NEGs, created from the service's NEG annotation.
    pub standalone_neg: usize,
    /// NEGs created as ingress backends.
    pub ingress_neg: usize,
    /// NEGs created for the service mesh.
    pub asm_neg: usize,
}

impl NegServiceState {
    pub fn new(standalone_neg: usize, ingress_neg: usize, asm_neg: usize) -> Self {
        Self {
            standalone_neg,
            ingress_neg,
            asm_neg,
        }
    }

    pub fn total(&self) -> usize {
        self.standalone_neg
            .saturating_add(self.ingress_neg)
            .saturating_add(self.asm_neg)
    }
}
