/*!
 * Interactive Shell
 * Line-oriented command loop over an address-space model
 */

use std::io::{self, BufRead, Write};

use log::warn;

use super::command::{Command, ShellError};
use crate::memory::traits::MemoryModel;

/// Prompt printed before every command read
pub const PROMPT: &str = "allocator> ";

/// Help text listing every operation
pub const USAGE: &str = "\
--------------------------------------------------------------
Operations:
    RQ <process name> <size in bytes> <F|B|W> :
        Request a contiguous block (F first-fit, B best-fit, W worst-fit)
    RL <process name> :
        Release every block held by the process
    C :
        Compact the unused holes into one block
    STAT :
        Report the regions of free and allocated memory
    X :
        Exit
--------------------------------------------------------------";

/// Horizontal rule around region listings
const RULE: &str = "--------------------------------------------------------------";

/// Line-oriented shell driving one address-space model
///
/// Requests answer `SUCCESS` or `FAILURE` on the output stream; the reason
/// for a failure goes to the log, not the reply. Reaching end of input
/// behaves like `X`.
pub struct Shell<M, R, W> {
    space: M,
    input: R,
    output: W,
}

impl<M: MemoryModel, R: BufRead, W: Write> Shell<M, R, W> {
    pub fn new(space: M, input: R, output: W) -> Self {
        Self {
            space,
            input,
            output,
        }
    }

    /// Run until `X` or end of input; returns the model for inspection
    pub fn run(mut self) -> io::Result<M> {
        writeln!(self.output, "{}", USAGE)?;

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Exit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(ShellError::Memory(err)) => {
                    warn!("request rejected: {}", err);
                    writeln!(self.output, "FAILURE")?;
                }
                Err(err) => {
                    warn!("bad command line: {}", err);
                    writeln!(self.output, "{}", USAGE)?;
                }
            }
        }

        Ok(self.space)
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Request {
                owner,
                size,
                strategy,
            } => match self.space.allocate(&owner, size, strategy) {
                Ok(_) => writeln!(self.output, "SUCCESS"),
                Err(_) => writeln!(self.output, "FAILURE"),
            },
            Command::Release { owner } => match self.space.release(&owner) {
                Ok(_) => writeln!(self.output, "SUCCESS"),
                Err(_) => writeln!(self.output, "FAILURE"),
            },
            Command::Compact => {
                self.space.compact();
                Ok(())
            }
            Command::Stat => {
                let snapshot = self.space.snapshot();
                writeln!(self.output, "{}", RULE)?;
                write!(self.output, "{}", snapshot)?;
                writeln!(self.output, "{}", RULE)
            }
            Command::Exit => Ok(()),
        }
    }
}
