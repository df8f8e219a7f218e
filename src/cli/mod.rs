//! Interactive command-line front end
//!
//! Command parsing plus the line-oriented session loop that drives the
//! store over stdin/stdout.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::Session;
