//! # Addrbook Architecture
//!
//! Addrbook is a **UI-agnostic contact library** with a small command-line client.
//! The library holds an address book in memory, searches and edits it, saves it
//! to and loads it from disk, keeps an activity log, and finds the birthdays of
//! the current week.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, interactive shell, console rendering       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ implements ui::Ui
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - AddressBook: owns contacts, store, activity log, UI port │
//! │  - Stages mutations, logs them, commits, reports to the UI  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic returning CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/) and Activity Log (activity.rs)            │
//! │  - BookStore: JsonFileStore, InMemoryStore                  │
//! │  - ActivityLog: FileActivityLog, MemoryActivityLog          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Results reach the user through the [`ui::Ui`] trait, so the same core
//! can sit behind a terminal, a test double, or anything else.
//!
//! ## Module Overview
//!
//! - [`api`]: The `AddressBook` facade
//! - [`commands`]: Business logic for each operation
//! - [`model`]: `Contact` and the typed field accessors used by search and edit
//! - [`calendar`]: Current-week window and birthday matching
//! - [`activity`]: Append-only activity log
//! - [`store`]: Persistence of whole address books
//! - [`ui`]: The UI port
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod activity;
pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod ui;
