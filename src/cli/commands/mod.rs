//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command except
//! `completions` loads configuration through the shared [`CommandContext`].

pub mod check;
pub mod completions;
pub mod debug_libs;
pub mod dispatcher;
pub mod install;
pub mod status;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
