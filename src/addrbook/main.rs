//! # Addrbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/addrbook/cli/)                              │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + one-shot dispatch (commands.rs)         │
//! │  - Interactive command loop (shell.rs)                      │
//! │  - Console implementation of the UI port (render.rs)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (addrbook::api::AddressBook and below)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
