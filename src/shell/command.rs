/*!
 * Command Grammar
 * One whitespace-tokenized line per operation
 */

use crate::core::limits::MAX_COMMAND_LENGTH;
use crate::core::types::Size;
use crate::memory::types::{FitStrategy, MemoryError};
use thiserror::Error;

/// Shell operation result
pub type ShellResult<T> = Result<T, ShellError>;

/// Command-line errors
///
/// The grammar variants surface as usage text; a wrapped memory error is
/// answered like a failed request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("unrecognized operation {0:?}")]
    UnrecognizedCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid size {0:?}")]
    InvalidSize(String),

    #[error("command line too long ({0} bytes)")]
    LineTooLong(usize),

    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `RQ <name> <size> <F|B|W>`
    Request {
        owner: String,
        size: Size,
        strategy: FitStrategy,
    },
    /// `RL <name>`
    Release { owner: String },
    /// `C`
    Compact,
    /// `STAT`
    Stat,
    /// `X`
    Exit,
}

impl Command {
    /// Parse one command line; operation names are case-sensitive
    pub fn parse(line: &str) -> ShellResult<Command> {
        if line.len() > MAX_COMMAND_LENGTH {
            return Err(ShellError::LineTooLong(line.len()));
        }

        let mut tokens = line.split_whitespace();
        let operation = tokens.next().ok_or(ShellError::MissingArgument("operation"))?;

        match operation {
            "RQ" => {
                let owner = tokens
                    .next()
                    .ok_or(ShellError::MissingArgument("process name"))?;
                let size_token = tokens
                    .next()
                    .ok_or(ShellError::MissingArgument("memory size"))?;
                let size: Size = size_token
                    .parse()
                    .map_err(|_| ShellError::InvalidSize(size_token.to_string()))?;
                let strategy: FitStrategy = tokens
                    .next()
                    .ok_or(ShellError::MissingArgument("fit strategy"))?
                    .parse()?;

                Ok(Command::Request {
                    owner: owner.to_string(),
                    size,
                    strategy,
                })
            }
            "RL" => {
                let owner = tokens
                    .next()
                    .ok_or(ShellError::MissingArgument("process name"))?;
                Ok(Command::Release {
                    owner: owner.to_string(),
                })
            }
            "C" => Ok(Command::Compact),
            "STAT" => Ok(Command::Stat),
            "X" => Ok(Command::Exit),
            other => Err(ShellError::UnrecognizedCommand(other.to_string())),
        }
    }
}
