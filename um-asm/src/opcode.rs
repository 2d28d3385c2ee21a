use std::convert::TryFrom;
use std::fmt;

use crate::error::DecodeError;
use crate::Word;

/// The fourteen UM-32 operators, identified by the top 4 bits of an
/// instruction word.
///
/// | Operation   | ```$rA = $rB + $rC (mod 2^32);``` |
/// | Syntax      | `add $rA, $rB, $rC`               |
/// | Encoding    | standard shape, opcode 3           |
///
/// Only a representative few operators carry the full operation table; the
/// rest are documented with a one-line summary, since a 14-entry opcode
/// space doesn't call for the same density everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Conditional register move: `if $rC != 0 { $rA = $rB }`.
    MoveIf = 0,

    /// Array read.
    ///
    /// | Operation   | ```$rA = pool[$rB][$rC];``` |
    /// | Syntax      | `index $rA, $rB, $rC`       |
    /// | Encoding    | standard shape, opcode 1     |
    ///
    /// #### Panics
    /// - `$rB` does not name a live array.
    /// - `$rC` is out of range for that array.
    Index = 1,

    /// Array write: `pool[$rA][$rB] = $rC`.
    AStore = 2,

    /// Adds two registers modulo 2^32.
    ///
    /// | Operation   | ```$rA = ($rB + $rC) mod 2^32;``` |
    /// | Syntax      | `add $rA, $rB, $rC`                |
    /// | Encoding    | standard shape, opcode 3            |
    Add = 3,

    /// Multiplies two registers modulo 2^32.
    Mult = 4,

    /// Unsigned integer division: `$rA = $rB / $rC`.
    ///
    /// #### Panics
    /// - `$rC == 0`.
    Div = 5,

    /// Bitwise NAND: `$rA = !($rB & $rC)`.
    Nand = 6,

    /// Stops the machine cleanly. Operand registers are unused.
    Halt = 7,

    /// Allocates a fresh array of `$rC` zeroed words, returning its
    /// identifier in `$rB`.
    Alloc = 8,

    /// Releases the array named by `$rC`.
    ///
    /// #### Panics
    /// - `$rC` is 0 or does not name a live array.
    Free = 9,

    /// Writes the low byte of `$rC` to the console.
    ///
    /// #### Panics
    /// - `$rC` > 255.
    Output = 10,

    /// Reads one byte from the console into `$rC`, or `0xFFFF_FFFF` on EOF.
    Input = 11,

    /// Loads a new program.
    ///
    /// | Operation   | ```pool[0] = pool[$rB].clone(); finger = $rC;``` |
    /// | Syntax      | `lprog $rB, $rC`                                  |
    /// | Encoding    | standard shape, opcode 12                         |
    ///
    /// `$rB == 0` is a documented no-op for the clone (array 0 is already
    /// array 0); the finger jump still happens.
    ///
    /// #### Panics
    /// - `$rB` is nonzero and does not name a live array.
    LoadProgram = 12,

    /// Loads a 25-bit immediate into a register: `$rA = imm`. Uses the
    /// special instruction shape instead of three register fields.
    Load = 13,
}

impl Opcode {
    /// All opcodes, in numeric order.
    pub const ALL: [Opcode; 14] = [
        Opcode::MoveIf,
        Opcode::Index,
        Opcode::AStore,
        Opcode::Add,
        Opcode::Mult,
        Opcode::Div,
        Opcode::Nand,
        Opcode::Halt,
        Opcode::Alloc,
        Opcode::Free,
        Opcode::Output,
        Opcode::Input,
        Opcode::LoadProgram,
        Opcode::Load,
    ];

    /// `true` for [`Opcode::Load`], which uses the special instruction
    /// shape (register + 25-bit immediate) instead of three registers.
    pub const fn is_special(self) -> bool {
        matches!(self, Opcode::Load)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Opcode::*;
        Ok(match value {
            0 => MoveIf,
            1 => Index,
            2 => AStore,
            3 => Add,
            4 => Mult,
            5 => Div,
            6 => Nand,
            7 => Halt,
            8 => Alloc,
            9 => Free,
            10 => Output,
            11 => Input,
            12 => LoadProgram,
            13 => Load,
            other => return Err(other),
        })
    }
}

/// Decodes the 4-bit opcode nibble out of a raw instruction word, mapping
/// anything above 13 to [`DecodeError::IllegalOpcode`].
pub(crate) fn opcode_of(word: Word) -> Result<Opcode, DecodeError> {
    let raw = crate::bits(word, 0, 4) as u8;
    Opcode::try_from(raw).map_err(|opcode| DecodeError::IllegalOpcode { opcode, word })
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Opcode::MoveIf => "moveif",
            Opcode::Index => "index",
            Opcode::AStore => "astore",
            Opcode::Add => "add",
            Opcode::Mult => "mult",
            Opcode::Div => "div",
            Opcode::Nand => "nand",
            Opcode::Halt => "halt",
            Opcode::Alloc => "alloc",
            Opcode::Free => "free",
            Opcode::Output => "output",
            Opcode::Input => "input",
            Opcode::LoadProgram => "lprog",
            Opcode::Load => "load",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_valid_opcode() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::try_from(op as u8), Ok(op));
        }
    }

    #[test]
    fn rejects_opcodes_above_thirteen() {
        assert_eq!(Opcode::try_from(14), Err(14));
        assert_eq!(Opcode::try_from(255), Err(255));
    }
}
