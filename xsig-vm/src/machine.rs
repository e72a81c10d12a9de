//! `Machine001`: the sole released composition policy. Runs the XSignature
//! program first to stage a residual stack, then the XPublicKey program
//! against that stack and the message, and accepts iff the final stack is
//! exactly `[0x01]`.
//!
//! Every failure path — bad framing, an evaluator error in either phase, or
//! a final stack other than `[0x01]` — collapses to a single `false`.
//! Machine001 never distinguishes *why* a policy was rejected in its return
//! value, only logs it.

use crate::context::DeviceContext;
use crate::data_stack::OperandStack;
use crate::evaluator::Evaluator;
use crate::frame::{self, ProgramKind};

/// Evaluates a claimant's `xsig_framed` against a resource's `xpk_framed`
/// for `message`.
pub fn run(
    xpk_framed: &[u8],
    xsig_framed: &[u8],
    message: &[u8],
    device_ctx: Option<&DeviceContext>,
) -> bool {
    let xsig_body = match frame::unwrap(xsig_framed, ProgramKind::XSignature) {
        Ok(body) => body,
        Err(err) => {
            log::debug!("machine001: rejected, bad XSignature frame: {err}");
            return false;
        }
    };

    let mut phase1 = Evaluator::new(device_ctx);
    if let Err(err) = phase1.run(xsig_body, message) {
        log::debug!("machine001: rejected, XSignature phase failed: {err}");
        return false;
    }

    let xpk_body = match frame::unwrap(xpk_framed, ProgramKind::XPublicKey) {
        Ok(body) => body,
        Err(err) => {
            log::debug!("machine001: rejected, bad XPublicKey frame: {err}");
            return false;
        }
    };

    let residual: OperandStack = phase1.into_stack();
    let mut phase2 = Evaluator::with_stack(residual, device_ctx);
    if let Err(err) = phase2.run(xpk_body, message) {
        log::debug!("machine001: rejected, XPublicKey phase failed: {err}");
        return false;
    }

    let accepted = phase2.stack().as_slice() == [0x01];
    if !accepted {
        log::debug!("machine001: rejected, final stack {:?} is not [0x01]", phase2.stack().as_slice());
    }
    accepted
}
