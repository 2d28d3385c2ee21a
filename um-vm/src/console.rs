use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// The narrow interface `INPUT`/`OUTPUT` consume. The execution engine only
/// depends on this trait, keeping it decoupled from the actual terminal
/// plumbing the same way an interpreter is kept decoupled from a pluggable
/// storage backend.
pub trait Console {
    /// Reads one byte, or `None` on end-of-stream.
    fn read_byte(&mut self) -> Option<u8>;

    /// Writes one byte immediately; no buffering across instruction
    /// boundaries is observable to the guest.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;
}

/// Unbuffered stdin/stdout console, the production [`Console`]. CR
/// (`0x0D`) read from input normalizes to LF (`0x0A`); `0x04` (Ctrl-D /
/// EOT) signals end-of-stream.
///
/// Byte-at-a-time, non-line-buffered delivery from a terminal is a matter
/// of the terminal's own mode (raw vs. cooked), which is outside this
/// core's concern — this type simply reads whatever bytes the OS hands
/// back from `stdin`, one at a time.
#[derive(Debug, Default)]
pub struct StdConsole {
    stdin: Option<io::Stdin>,
}

impl StdConsole {
    /// Builds a console wired to the process's real stdin/stdout.
    pub fn new() -> Self {
        Self { stdin: Some(io::stdin()) }
    }
}

impl Console for StdConsole {
    fn read_byte(&mut self) -> Option<u8> {
        let stdin = self.stdin.get_or_insert_with(io::stdin);
        let mut byte = [0u8; 1];
        loop {
            match stdin.lock().read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => {
                    let b = byte[0];
                    if b == 0x04 {
                        return None;
                    }
                    return Some(if b == 0x0D { 0x0A } else { b });
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(&[byte])?;
        stdout.flush()
    }
}

/// An in-memory console for headless tests. Feeds queued input bytes and
/// records every written byte for assertions.
#[derive(Debug, Default, Clone)]
pub struct InMemoryConsole {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl InMemoryConsole {
    /// Builds a console whose input stream is `input`, applying the same
    /// CR-to-LF and Ctrl-D-as-EOF conventions as [`StdConsole`] so tests
    /// exercise identical semantics.
    pub fn new(input: impl IntoIterator<Item = u8>) -> Self {
        Self {
            input: input.into_iter().collect(),
            output: Vec::new(),
        }
    }

    /// Every byte written so far, in order.
    pub fn output(&self) -> &[u8] {
        &self.output
    }
}

impl Console for InMemoryConsole {
    fn read_byte(&mut self) -> Option<u8> {
        loop {
            let b = self.input.pop_front()?;
            if b == 0x04 {
                return None;
            }
            return Some(if b == 0x0D { 0x0A } else { b });
        }
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.push(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_console_normalizes_cr_and_signals_eof() {
        let mut console = InMemoryConsole::new([b'a', 0x0D, 0x04, b'b']);
        assert_eq!(console.read_byte(), Some(b'a'));
        assert_eq!(console.read_byte(), Some(0x0A));
        assert_eq!(console.read_byte(), None);
    }

    #[test]
    fn in_memory_console_records_output() {
        let mut console = InMemoryConsole::new([]);
        console.write_byte(b'h').unwrap();
        console.write_byte(b'i').unwrap();
        assert_eq!(console.output(), b"hi");
    }
}
