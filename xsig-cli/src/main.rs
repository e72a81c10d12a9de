//! Reference evaluator executable. This binary exists for differential
//! testing against an independent reimplementation: its output format is
//! the observable contract, not a human-friendly UI.

mod hex;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use xsig_vm::machine;
use xsig_vm::{DeviceContext, Evaluator};

#[derive(Parser)]
#[command(name = "xsig", version, about = "Reference evaluator for the xsig bytecode VM")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single bytecode body and report the resulting stack.
    Eval {
        hex_code: String,
        hex_msg: String,
        hex_device_id: Option<String>,
    },
    /// Run the two-phase Machine001 composition and report accept/reject.
    M001 {
        hex_xpk_framed: String,
        hex_xsig_framed: String,
        hex_msg: String,
        hex_device_id: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Eval { hex_code, hex_msg, hex_device_id } => run_eval(&hex_code, &hex_msg, hex_device_id.as_deref()),
        Command::M001 { hex_xpk_framed, hex_xsig_framed, hex_msg, hex_device_id } => {
            run_m001(&hex_xpk_framed, &hex_xsig_framed, &hex_msg, hex_device_id.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::from(2),
    }
}

fn decode_device_id(hex_device_id: Option<&str>) -> Result<Option<DeviceContext>, ()> {
    match hex_device_id {
        None => Ok(None),
        Some(h) => {
            let bytes = hex::decode(h).map_err(|err| {
                log::error!("malformed device id hex argument: {err}");
            })?;
            Ok(Some(DeviceContext::new(bytes)))
        }
    }
}

/// `eval <hex_code> <hex_msg> [<hex_device_id>]`: prints `ok:<hex_stack>` on
/// success, `error` on any evaluator error. Exit 0 either way.
fn run_eval(hex_code: &str, hex_msg: &str, hex_device_id: Option<&str>) -> Result<(), ()> {
    let code = hex::decode(hex_code).map_err(|err| log::error!("malformed hex_code: {err}"))?;
    let msg = hex::decode(hex_msg).map_err(|err| log::error!("malformed hex_msg: {err}"))?;
    let device_ctx = decode_device_id(hex_device_id)?;

    let mut evaluator = Evaluator::new(device_ctx.as_ref());
    match evaluator.run(&code, &msg) {
        Ok(()) => println!("ok:{}", hex::encode(evaluator.stack().as_slice())),
        Err(err) => {
            log::debug!("eval: {err}");
            println!("error");
        }
    }
    Ok(())
}

/// `m001 <hex_xpk_framed> <hex_xsig_framed> <hex_msg> [<hex_device_id>]`:
/// prints `1` on accept, `0` on reject. Exit 0.
fn run_m001(hex_xpk: &str, hex_xsig: &str, hex_msg: &str, hex_device_id: Option<&str>) -> Result<(), ()> {
    let xpk = hex::decode(hex_xpk).map_err(|err| log::error!("malformed hex_xpk_framed: {err}"))?;
    let xsig = hex::decode(hex_xsig).map_err(|err| log::error!("malformed hex_xsig_framed: {err}"))?;
    let msg = hex::decode(hex_msg).map_err(|err| log::error!("malformed hex_msg: {err}"))?;
    let device_ctx = decode_device_id(hex_device_id)?;

    let accepted = machine::run(&xpk, &xsig, &msg, device_ctx.as_ref());
    println!("{}", accepted as u8);
    Ok(())
}
