//! A line-oriented shell to manage events
//!
//! Each line read from the input is parsed into a [`Command`], that a [`Session`] executes.

pub mod command;
pub use command::{Command, ViewFilter};
mod session;
pub use session::{Flow, Session};

use std::error::Error;
use std::io::{BufRead, Write};

use crate::config::product_name;

/// Read commands from `input` until `exit` or the end of the input, and write their results to `out`.
///
/// Invalid commands are reported to `out` and do not stop the shell. Only I/O errors do.
pub fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<(), Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{} shell. Type 'help' for the list of commands.", product_name())?;

    let mut lines = input.lines();
    loop {
        write!(out, "\nEnter command:\n> ")?;
        out.flush()?;

        let line = match lines.next() {
            None => {
                log::debug!("End of input");
                break;
            },
            Some(line) => line?,
        };

        let command = Command::parse(&line);
        log::debug!("Parsed command {:?}", command);
        match session.handle(command, out) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {},
            Err(err) => {
                log::warn!("Command {:?} failed: {}", line, err);
                writeln!(out, "Error: {}", err)?;
            },
        }
    }
    Ok(())
}
