//! `ProgramFrame`: the fixed-prefix wrapper that tags a bytecode body as
//! `XPublicKey` or `XSignature` under `Machine001`.
//!
//! The wire format is bit-exact: `"xsig" || MachineType(0x00) || kind_byte
//! || body`. Unframing checks the whole 6-byte prefix against the kind the
//! caller expects, not just the magic — a frame tagged as the wrong kind is
//! a `BadFrame`.

use xsig_vm_errors::FrameError;

const MAGIC: &[u8; 4] = b"xsig";
const MACHINE_TYPE_001: u8 = 0x00;

/// Which of the two programs a frame carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramKind {
    XPublicKey,
    XSignature,
}

impl ProgramKind {
    const fn kind_byte(self) -> u8 {
        match self {
            ProgramKind::XPublicKey => 0x00,
            ProgramKind::XSignature => 0x01,
        }
    }
}

/// Wraps `body` with the `"xsig" || 0x00 || kind_byte` prefix.
pub fn wrap(kind: ProgramKind, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(6 + body.len());
    out.extend_from_slice(MAGIC);
    out.push(MACHINE_TYPE_001);
    out.push(kind.kind_byte());
    out.extend_from_slice(body);
    out
}

/// Verifies `framed` carries the `"xsig"` magic, machine type `0x00`, and the
/// expected `kind`, then returns the body that follows the 6-byte prefix.
pub fn unwrap(framed: &[u8], expected: ProgramKind) -> Result<&[u8], FrameError> {
    if framed.len() < 6 || &framed[0..4] != MAGIC {
        return Err(FrameError::BadMagic);
    }
    if framed[4] != MACHINE_TYPE_001 {
        return Err(FrameError::BadMachineType(framed[4]));
    }
    if framed[5] != expected.kind_byte() {
        return Err(FrameError::BadKind(framed[5]));
    }
    Ok(&framed[6..])
}
