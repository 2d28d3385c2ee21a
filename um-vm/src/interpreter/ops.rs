use um_asm::{Instruction, Opcode, Word};

use crate::console::Console;
use crate::error::TrapReason;
use crate::state::Step;

use super::Interpreter;

impl<C: Console> Interpreter<C> {
    pub(super) fn dispatch(&mut self, instruction: Instruction) -> Result<Step, TrapReason> {
        let (a, b, c) = (instruction.a(), instruction.b(), instruction.c());

        match instruction.opcode() {
            Opcode::MoveIf => {
                if self.registers[c] != 0 {
                    self.registers[a] = self.registers[b];
                }
                Ok(Step::Proceed)
            }

            Opcode::Index => {
                let value = self.pool.get(self.registers[b], self.registers[c])?;
                self.registers[a] = value;
                Ok(Step::Proceed)
            }

            Opcode::AStore => {
                self.pool.put(self.registers[a], self.registers[b], self.registers[c])?;
                Ok(Step::Proceed)
            }

            Opcode::Add => {
                self.registers[a] = self.registers[b].wrapping_add(self.registers[c]);
                Ok(Step::Proceed)
            }

            Opcode::Mult => {
                self.registers[a] = self.registers[b].wrapping_mul(self.registers[c]);
                Ok(Step::Proceed)
            }

            Opcode::Div => {
                let divisor = self.registers[c];
                if divisor == 0 {
                    return Err(TrapReason::DivisionByZero);
                }
                self.registers[a] = self.registers[b] / divisor;
                Ok(Step::Proceed)
            }

            Opcode::Nand => {
                self.registers[a] = !(self.registers[b] & self.registers[c]);
                Ok(Step::Proceed)
            }

            Opcode::Halt => Ok(Step::Halted),

            Opcode::Alloc => {
                let id = self.pool.alloc(self.registers[c])?;
                self.registers[b] = id;
                Ok(Step::Proceed)
            }

            Opcode::Free => {
                self.pool.free(self.registers[c])?;
                Ok(Step::Proceed)
            }

            Opcode::Output => {
                let value = self.registers[c];
                if value > 0xFF {
                    return Err(TrapReason::OutputRange { value });
                }
                self.console
                    .write_byte(value as u8)
                    .map_err(|_| TrapReason::ConsoleWriteFailed { value: value as u8 })?;
                Ok(Step::Proceed)
            }

            Opcode::Input => {
                self.registers[c] = match self.console.read_byte() {
                    Some(byte) => byte as Word,
                    None => Word::MAX,
                };
                Ok(Step::Proceed)
            }

            Opcode::LoadProgram => {
                self.pool.clone_into_zero(self.registers[b])?;
                self.finger = self.registers[c];
                Ok(Step::Proceed)
            }

            Opcode::Load => {
                self.registers[a] = instruction.imm();
                Ok(Step::Proceed)
            }
        }
    }
}
