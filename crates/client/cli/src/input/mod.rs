//! Player input from a line-oriented terminal.
mod menu;
mod provider;

pub use provider::TerminalProvider;
