use thiserror::Error;

use crate::Word;

/// Failure to turn a raw [`Word`] into a well-formed [`crate::Instruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The top 4 bits of the word name an opcode greater than 13.
    #[error("illegal opcode {opcode} in word {word:#010x}")]
    IllegalOpcode {
        /// The raw, out-of-range opcode nibble.
        opcode: u8,
        /// The offending word.
        word: Word,
    },
}
