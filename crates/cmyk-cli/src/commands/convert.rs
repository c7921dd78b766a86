//! Single color conversion

use super::{Session, input_text, to_json};
use crate::messages::Messages;
use crate::{ConvertArgs, GlobalArgs, render};
use anyhow::Result;
use cmyk_core::{IccStatus, detect_mode, parse};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, trace};

pub fn run(args: ConvertArgs, global: &GlobalArgs) -> Result<ExitCode> {
    trace!(input = %args.input, "convert::run");
    let msg = Messages::get(global.lang);
    let input = input_text(&args.input);
    let mode = args.mode.unwrap_or_else(|| detect_mode(input));

    let Some(color) = parse(input, mode) else {
        eprintln!("{}", msg.invalid_input(mode));
        return Ok(ExitCode::from(2));
    };

    let session = Session::start(global)?;
    match session.icc.wait(Duration::from_millis(args.timeout_ms)) {
        Some(IccStatus::Loading) => eprintln!("{}", msg.loading_icc),
        Some(status) => info!(engine = %session.config.engine, ?status, "ICC initialization settled"),
        None => {}
    }

    let eval = session.converter.evaluate(&color);
    if args.json {
        println!("{}", to_json(&eval)?);
    } else {
        print!("{}", render::evaluation(&eval, msg));
    }
    Ok(ExitCode::SUCCESS)
}
