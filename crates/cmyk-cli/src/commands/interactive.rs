//! Line-oriented session
//!
//! Profiles keep loading in the background while the user types, so early
//! colors show loading markers that fill in on later inputs.

use super::{Session, input_text};
use crate::messages::Messages;
use crate::{GlobalArgs, InteractiveArgs, render};
use anyhow::Result;
use cmyk_core::{ColorInput, IccStatus};
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Mode(cmyk_core::InputMode),
    Quit,
    Color(&'a str),
    Empty,
}

fn command(line: &str) -> Command<'_> {
    match input_text(line) {
        "" => Command::Empty,
        ":q" | ":quit" | ":exit" => Command::Quit,
        ":hex" => Command::Mode(cmyk_core::InputMode::Hex),
        ":rgb" => Command::Mode(cmyk_core::InputMode::Rgb),
        text => Command::Color(text),
    }
}

pub fn run(args: InteractiveArgs, global: &GlobalArgs) -> Result<()> {
    trace!("interactive::run");
    let msg = Messages::get(global.lang);
    let session = Session::start(global)?;
    let mut input = ColorInput::new(args.mode);
    let mut last_status = session.icc.status();

    println!("{}", msg.prompt_help);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "{}> ", input.mode())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let status = session.icc.status();
        if status != last_status {
            debug!(?status, "ICC status changed");
            match &status {
                Some(IccStatus::Ready) => println!("{}", msg.icc_ready),
                Some(IccStatus::Failed(reason)) => println!("{}: {reason}", msg.error_badge),
                _ => {}
            }
            last_status = status;
        }

        match command(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Mode(mode) => {
                input.set_mode(mode);
                println!("{}", input.text());
            }
            Command::Color(text) => input.set_text(text),
        }

        match input.color() {
            Some(color) => {
                let eval = session.converter.evaluate(&color);
                print!("{}", render::evaluation(&eval, msg));
            }
            None => println!("{}", msg.invalid_input(input.mode())),
        }
        if matches!(session.icc.status(), Some(IccStatus::Loading)) {
            println!("{}", msg.loading_icc);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmyk_core::InputMode;

    #[test]
    fn test_commands() {
        assert_eq!(command(":quit\n"), Command::Quit);
        assert_eq!(command(" :rgb "), Command::Mode(InputMode::Rgb));
        assert_eq!(command("\n"), Command::Empty);
        assert_eq!(command("#3498db\n"), Command::Color("#3498db"));
    }
}
