//! Byte-addressed stack virtual machine for programmable
//! signature-validation policies.
//!
//! A policy is split into an XPublicKey program (the locking side) and an
//! XSignature program (the unlocking side supplied by a claimant), both
//! evaluated by [`Machine001`](machine::run) against a message and an
//! optional [`DeviceContext`]. See the individual modules for the
//! component breakdown: [`data_stack`] for the operand stack, [`opcodes`]
//! for the closed instruction set, [`assembler`] for bytecode
//! construction, [`evaluator`] for the fetch-execute loop, [`crypto`] for
//! the P-256 signature oracle, and [`frame`]/[`machine`] for wire framing
//! and the two-phase composition.

pub mod assembler;
pub mod context;
pub mod crypto;
pub mod data_stack;
pub mod evaluator;
pub mod frame;
pub mod machine;
pub mod multi_sig;
pub mod opcodes;

pub use assembler::{Assembler, Instruction};
pub use context::DeviceContext;
pub use data_stack::{OperandStack, MAX_STACK};
pub use evaluator::Evaluator;
pub use frame::ProgramKind;
pub use opcodes::Opcode;

pub use xsig_vm_errors::{AssemblerError, EvaluationError, FrameError};
