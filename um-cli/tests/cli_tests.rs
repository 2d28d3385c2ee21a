//! End-to-end smoke tests for the `um` binary: write a program image to a
//! temp file, run the built binary against it, and check the exit code.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;
use um_asm::{Instruction, Opcode};

fn image_file(words: &[u32]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp program image");
    for word in words {
        file.write_all(&word.to_be_bytes()).expect("write program image");
    }
    file
}

fn run_um(path: &std::path::Path) -> std::process::ExitStatus {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let pkg_dir = env!("CARGO_MANIFEST_DIR");
    Command::new(cargo)
        .current_dir(pkg_dir)
        .args(["run", "-q", "--"])
        .arg(path)
        .stdin(Stdio::null())
        .status()
        .expect("spawn um binary")
}

#[test]
fn halt_only_image_exits_success() {
    let image = image_file(&[Instruction::encode_std(Opcode::Halt, 0, 0, 0)]);
    let status = run_um(image.path());
    assert!(status.success());
}

#[test]
fn trapping_image_exits_nonzero() {
    // A fetch with no instructions at all: the finger is immediately out
    // of range.
    let image = image_file(&[]);
    let status = run_um(image.path());
    assert!(!status.success());
    assert_eq!(status.code(), Some(2));
}

#[test]
fn illegal_opcode_image_exits_with_trap_code() {
    let image = image_file(&[14 << 28]);
    let status = run_um(image.path());
    assert_eq!(status.code(), Some(2));
}
