//! `Evaluator`: the fetch-execute loop over one bytecode body.
//!
//! A linear program counter fetches and dispatches one opcode per
//! iteration; the first error halts the run. Dispatch is a direct
//! match/switch on the opcode tag rather than a table of handler
//! closures, since the instruction set is small, closed, and branch-free.

use crate::context::DeviceContext;
use crate::crypto;
use crate::data_stack::OperandStack;
use crate::multi_sig;
use crate::opcodes::Opcode;
use xsig_vm_errors::EvaluationError;

/// Owns one `OperandStack` for the duration of a run, plus the read-only
/// collaborators opcodes may consult: the message being authenticated and
/// an optional device context.
pub struct Evaluator<'a> {
    stack: OperandStack,
    device_ctx: Option<&'a DeviceContext>,
}

impl<'a> Evaluator<'a> {
    pub fn new(device_ctx: Option<&'a DeviceContext>) -> Self {
        Self { stack: OperandStack::new(), device_ctx }
    }

    /// Seeds the evaluator with an already-populated stack, used by
    /// `Machine001` to hand the first phase's residual stack to the second.
    pub fn with_stack(stack: OperandStack, device_ctx: Option<&'a DeviceContext>) -> Self {
        Self { stack, device_ctx }
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn into_stack(self) -> OperandStack {
        self.stack
    }

    /// Runs `code` to completion against `message`. The program counter
    /// only moves forward; there are no jumps.
    pub fn run(&mut self, code: &[u8], message: &[u8]) -> Result<(), EvaluationError> {
        let mut pc: usize = 0;
        while pc < code.len() {
            let op = Opcode::from_byte(code[pc]).ok_or(EvaluationError::UnknownOpcode(code[pc]))?;
            pc += 1;
            pc = self.step(op, code, pc, message)?;
        }
        Ok(())
    }

    /// Executes one opcode, returning the program counter to resume at.
    /// `pc` on entry points just past the opcode byte itself.
    fn step(
        &mut self,
        op: Opcode,
        code: &[u8],
        pc: usize,
        message: &[u8],
    ) -> Result<usize, EvaluationError> {
        match op {
            Opcode::Add => {
                let (a, b) = self.stack.pop_two()?;
                self.stack.push(a.wrapping_add(b))?;
                Ok(pc)
            }
            Opcode::Mul => {
                let (a, b) = self.stack.pop_two()?;
                self.stack.push(a.wrapping_mul(b))?;
                Ok(pc)
            }
            Opcode::And => {
                let (a, b) = self.stack.pop_two()?;
                self.stack.push(a & b)?;
                Ok(pc)
            }
            Opcode::Or => {
                let (a, b) = self.stack.pop_two()?;
                self.stack.push(a | b)?;
                Ok(pc)
            }
            Opcode::Not => {
                let a = self.stack.pop()?;
                self.stack.push(!a)?;
                Ok(pc)
            }
            Opcode::Push => self.exec_push(code, pc),
            Opcode::SigVerify => {
                let pk = self.stack.pop_compressed_pubkey()?;
                let sig = self.stack.pop_signature()?;
                let ok = crypto::verify(message, &pk, &sig);
                self.stack.push(ok as u8)?;
                Ok(pc)
            }
            Opcode::MultisigVerify => self.exec_multisig_verify(message).map(|()| pc),
            Opcode::Equal32 => {
                let a = self.stack.pop_32()?;
                let b = self.stack.pop_32()?;
                self.stack.push((a == b) as u8)?;
                Ok(pc)
            }
            Opcode::DeviceId => self.exec_device_id().map(|()| pc),
        }
    }

    /// `PUSH`: reads the length byte, requires the payload fits in `code`,
    /// then pushes it in order.
    fn exec_push(&mut self, code: &[u8], pc: usize) -> Result<usize, EvaluationError> {
        let len_byte = *code.get(pc).ok_or(EvaluationError::TruncatedPush)?;
        let len = len_byte as usize;
        let payload_start = pc + 1;
        let payload_end = payload_start + len;
        if payload_end > code.len() {
            return Err(EvaluationError::TruncatedPush);
        }
        self.stack.push_bytes(&code[payload_start..payload_end])?;
        Ok(payload_end)
    }

    /// `MULTISIGVERIFY`. Applies the asymmetric quorum rule exactly: a
    /// repeated public key that matches the same signature counts once per
    /// occurrence, while a repeated signature grants no extra credit beyond
    /// its distinct matching keys. This is the intended contract, not a bug
    /// to be normalized away.
    fn exec_multisig_verify(&mut self, message: &[u8]) -> Result<(), EvaluationError> {
        let n_public_keys = self.stack.pop()?;
        let n_min_valid = self.stack.pop()?;

        if n_public_keys == 0 || n_min_valid == 0 || n_min_valid > n_public_keys {
            return Err(EvaluationError::BadMultisigParams(n_min_valid, n_public_keys));
        }

        let mut pubkeys = Vec::with_capacity(n_public_keys as usize);
        for _ in 0..n_public_keys {
            pubkeys.push(self.stack.pop_compressed_pubkey()?);
        }

        let mut sigs = Vec::with_capacity(n_min_valid as usize);
        for _ in 0..n_min_valid {
            sigs.push(self.stack.pop_signature()?);
        }

        let count = multi_sig::count_quorum(&pubkeys, &sigs, message);
        self.stack.push((count >= n_min_valid as usize) as u8)?;
        Ok(())
    }

    /// `DEVICEID`: requires a 32-byte device context, pushes its bytes such
    /// that byte 0 ends up on top (push index 31 first, down to index 0
    /// last).
    fn exec_device_id(&mut self) -> Result<(), EvaluationError> {
        let ctx = self.device_ctx.ok_or(EvaluationError::NoDeviceContext)?;
        let bytes = ctx.as_bytes();
        if bytes.len() != 32 {
            return Err(EvaluationError::NoDeviceContext);
        }
        for &b in bytes.iter().rev() {
            self.stack.push(b)?;
        }
        Ok(())
    }
}
