use thiserror::Error;

/// Errors raised while a [`FrameError`]-wrapped program is unframed into a
/// bare bytecode body.
#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum FrameError {
    #[error("frame does not start with the \"xsig\" magic")]
    BadMagic,
    #[error("unsupported machine type {0:#04x}")]
    BadMachineType(u8),
    #[error("frame kind byte {0:#04x} does not match the expected program kind")]
    BadKind(u8),
}

/// Errors raised by the [`Evaluator`](../xsig_vm/struct.Evaluator.html) fetch-execute loop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("push would exceed the {0}-byte stack capacity")]
    StackOverflow(usize),
    #[error("pop from an empty or too-shallow stack")]
    StackUnderflow,
    #[error("PUSH length byte missing or payload runs past the end of the program")]
    TruncatedPush,
    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),
    #[error("compressed public key is not 33 bytes starting with 0x02/0x03")]
    BadPublicKeyFormat,
    #[error("DER signature does not start with the SEQUENCE tag 0x30")]
    BadSignatureFormat,
    #[error("multisig parameters out of range: nMinValid={0} nPublicKeys={1}")]
    BadMultisigParams(u8, u8),
    #[error("DEVICEID requires a 32-byte device context")]
    NoDeviceContext,
    #[error("malformed program frame: {0}")]
    BadFrame(#[from] FrameError),
}

/// Errors raised by the [`Assembler`](../xsig_vm/struct.Assembler.html) while emitting bytecode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerError {
    #[error("PUSH literal of {0} bytes exceeds the 255-byte immediate limit")]
    LiteralTooLarge(usize),
}
