//! Many colors from a file, one per line

use super::{Session, input_text, to_json};
use crate::messages::Messages;
use crate::{BatchArgs, GlobalArgs, render};
use anyhow::{Context, Result};
use cmyk_core::{Evaluation, detect_mode, parse};
use rayon::prelude::*;
use serde::Serialize;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, trace};

#[derive(Serialize)]
struct Entry<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

pub fn run(args: BatchArgs, global: &GlobalArgs) -> Result<ExitCode> {
    trace!(file = %args.file.display(), "batch::run");
    let msg = Messages::get(global.lang);
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read: {}", args.file.display()))?;
    let lines: Vec<&str> = text
        .lines()
        .map(input_text)
        .filter(|l| !l.is_empty())
        .collect();

    let session = Session::start(global)?;
    session.icc.wait(Duration::from_millis(args.timeout_ms));

    // order of `lines` is preserved by the indexed collect
    let entries: Vec<Entry> = lines
        .par_iter()
        .map(|line| {
            let mode = args.mode.unwrap_or_else(|| detect_mode(line));
            match parse(line, mode) {
                Some(color) => Entry {
                    input: line,
                    evaluation: Some(session.converter.evaluate(&color)),
                    error: None,
                },
                None => Entry {
                    input: line,
                    evaluation: None,
                    error: Some(msg.invalid_input(mode)),
                },
            }
        })
        .collect();

    let invalid = entries.iter().filter(|e| e.error.is_some()).count();
    info!(total = entries.len(), invalid, "batch complete");

    if args.json {
        println!("{}", to_json(&entries)?);
    } else {
        for entry in &entries {
            println!("== {} ==", entry.input);
            match (&entry.evaluation, entry.error) {
                (Some(eval), _) => print!("{}", render::evaluation(eval, msg)),
                (None, Some(error)) => println!("{error}"),
                (None, None) => {}
            }
            println!();
        }
    }

    Ok(if invalid > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    })
}
