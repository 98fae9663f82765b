//! Binary numeric operations selected by tag.

/// A stateless binary operation over `f64`, fixed at construction.
///
/// New kinds are added as new variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`.
    Add,
    /// `a * b`.
    Multiply,
    /// `a` raised to the real power `b`.
    Power,
}

impl BinaryOp {
    /// Apply the operation.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Multiply => a * b,
            Self::Power => a.powf(b),
        }
    }

    /// Short lowercase name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Power => "power",
        }
    }
}
