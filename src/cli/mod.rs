//! Command-line interface for dirsift
//!
//! Parses arguments with clap, loads layered configuration and hands each
//! subcommand a shared [`commands::CommandContext`].

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::Output;
