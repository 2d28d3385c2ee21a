//! Command-line front end: loads a UM-32 program image from disk and runs
//! it to completion against the real terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use um_asm::Word;
use um_vm::{Interpreter, StdConsole};

/// Runs a UM-32 program image.
#[derive(Debug, Parser)]
#[command(name = "um", version, about)]
struct Cli {
    /// Path to the program image (a flat big-endian stream of 32-bit words).
    path: PathBuf,

    /// Log every dispatched instruction at trace level instead of only
    /// warnings and above.
    #[arg(long)]
    trace: bool,

    /// Caps the total number of words the array pool may hold across every
    /// live array, including array 0. Unbounded if omitted.
    #[arg(long, value_name = "N")]
    max_memory_words: Option<u64>,
}

/// Reads `path` and decodes it into the program's initial array 0.
///
/// Each 4-byte big-endian group becomes one [`Word`]. A file whose length
/// isn't a multiple of 4 is accepted with a warning; the trailing partial
/// group is dropped rather than treated as a hard error.
fn load_image(path: &PathBuf) -> std::io::Result<Vec<Word>> {
    let bytes = std::fs::read(path)?;

    let whole_words = bytes.len() / 4;
    if bytes.len() % 4 != 0 {
        warn!(
            path = %path.display(),
            total_bytes = bytes.len(),
            dropped_bytes = bytes.len() % 4,
            "program image size is not a multiple of 4 bytes; truncating trailing partial word"
        );
    }

    Ok(bytes[..whole_words * 4]
        .chunks_exact(4)
        .map(|chunk| Word::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.trace { "trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let program = match load_image(&cli.path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("um: could not read {}: {e}", cli.path.display());
            return ExitCode::from(1);
        }
    };

    let mut vm = match cli.max_memory_words {
        Some(limit) => Interpreter::with_word_limit(program, StdConsole::new(), limit),
        None => Interpreter::new(program, StdConsole::new()),
    };

    match vm.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("um: {err}");
            ExitCode::from(2)
        }
    }
}
