//! The [`Interpreter`]: owns the register file, the array pool, and the
//! execution finger, and drives the fetch-decode-dispatch loop.

mod ops;

use tracing::trace;
use um_asm::{Instruction, Word};

use crate::console::Console;
use crate::error::{SimulateError, Trap, TrapReason};
use crate::pool::ArrayPool;
use crate::registers::Registers;
use crate::state::Step;

/// The UM-32 Universal Machine. Generic over its console so the production
/// stdin/stdout device and an in-memory test double are interchangeable.
#[derive(Debug)]
pub struct Interpreter<C> {
    registers: Registers,
    pool: ArrayPool,
    finger: Word,
    console: C,
}

impl<C: Console> Interpreter<C> {
    /// Builds a VM with `program` installed at identifier 0 and the
    /// execution finger at offset 0, with no cap on pool memory.
    pub fn new(program: Vec<Word>, console: C) -> Self {
        Self {
            registers: Registers::new(),
            pool: ArrayPool::new(program),
            finger: 0,
            console,
        }
    }

    /// Builds a VM whose array pool traps with `OutOfMemory` once the
    /// total allocated word count would exceed `word_limit`.
    pub fn with_word_limit(program: Vec<Word>, console: C, word_limit: u64) -> Self {
        Self {
            registers: Registers::new(),
            pool: ArrayPool::with_word_limit(program, word_limit),
            finger: 0,
            console,
        }
    }

    /// The current register file.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// The current execution finger.
    pub fn finger(&self) -> Word {
        self.finger
    }

    /// The underlying console, for tests that need to inspect what was
    /// written.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs until `HALT` or a trap: `Running -> Halted` or
    /// `Running -> Trapped`, both terminal.
    pub fn run(&mut self) -> Result<(), SimulateError> {
        loop {
            if self.step()? == Step::Halted {
                return Ok(());
            }
        }
    }

    /// Executes exactly one fetch-decode-dispatch cycle.
    pub fn step(&mut self) -> Result<Step, Trap> {
        let finger = self.finger;

        let word = self
            .pool
            .zero()
            .get(finger as usize)
            .copied()
            .ok_or_else(|| Trap::new(TrapReason::FingerOutOfRange, finger, None))?;

        let instruction =
            Instruction::decode(word).map_err(|e| Trap::new(e.into(), finger, None))?;

        trace!(finger, opcode = %instruction.opcode(), "dispatch");

        // The finger advances before the operator runs; LPROG is the one
        // opcode that then overwrites it.
        self.finger = finger.wrapping_add(1);

        self.dispatch(instruction)
            .map_err(|reason| Trap::new(reason, finger, Some(instruction.opcode())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::InMemoryConsole;
    use um_asm::Opcode;

    fn vm(program: Vec<Word>) -> Interpreter<InMemoryConsole> {
        Interpreter::new(program, InMemoryConsole::new([]))
    }

    #[test]
    fn halt_only_leaves_registers_zero() {
        let mut m = vm(vec![Instruction::encode_std(Opcode::Halt, 0, 0, 0)]);
        m.run().unwrap();
        for i in 0..8u8 {
            assert_eq!(m.registers()[um_asm::RegisterId::new(i)], 0);
        }
    }

    #[test]
    fn finger_out_of_range_traps_with_correct_finger() {
        let mut m = vm(vec![Instruction::encode_std(Opcode::MoveIf, 0, 0, 0)]);
        let err = m.run().unwrap_err();
        assert_eq!(err.trap().reason, TrapReason::FingerOutOfRange);
        assert_eq!(err.trap().finger, 1);
    }

    #[test]
    fn illegal_opcode_traps() {
        let mut m = vm(vec![14 << 28]);
        let err = m.run().unwrap_err();
        assert_eq!(err.trap().reason, TrapReason::IllegalOpcode { opcode: 14 });
        assert_eq!(err.trap().finger, 0);
    }
}
