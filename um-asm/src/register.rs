use std::fmt;

/// Index of one of the eight general-purpose registers.
///
/// UM-32 registers are described by a 3-bit field, so out-of-range values
/// can't arise from decoding — this newtype exists mainly to keep register
/// indices from being confused with arbitrary `Word`s at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterId(u8);

impl RegisterId {
    /// Builds a register index from a 3-bit field (`0..=7`).
    ///
    /// # Panics
    ///
    /// Panics if `value > 7`. Every caller in this crate derives `value`
    /// from a 3-bit [`crate::bits`] extraction, which can never exceed 7.
    pub fn new(value: u8) -> Self {
        assert!(value < 8, "register index out of range: {value}");
        Self(value)
    }

    /// Returns the index as a `usize` suitable for indexing a register file.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
