/*!
 * Shell Module
 * Terminal boundary: command grammar and the interactive loop
 */

pub mod command;
pub mod repl;

pub use command::{Command, ShellError, ShellResult};
pub use repl::{Shell, PROMPT, USAGE};
