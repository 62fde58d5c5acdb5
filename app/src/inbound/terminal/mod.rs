//! Terminal front end: command parsing, rendering, and the session loop.

pub mod command;
pub mod render;
pub mod shell;

pub use command::{Command, CommandError};
pub use shell::{Flow, Shell, ShellError};
