//! # CLI Behavior
//!
//! This is **one possible UI client** for addrbook. It is the only place that
//! knows about the terminal, exit codes and output formatting.
//!
//! ## Naked Execution (`addrbook`)
//!
//! Running `addrbook` with no subcommand starts the interactive shell, which
//! keeps one address book in memory until `quit`. Nothing is saved implicitly:
//! use `save` before quitting.
//!
//! ## One-Shot Commands
//!
//! `addrbook list`, `addrbook add --name ...`, etc. read the configured book
//! file, run one operation, and save the file again if the operation changed it.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, logging setup
//! - `commands`: Context initialization and one-shot dispatch
//! - `shell`: The interactive command loop
//! - `render`: Console rendering, implements the UI port

mod commands;
mod render;
mod setup;
mod shell;

pub use commands::run;
