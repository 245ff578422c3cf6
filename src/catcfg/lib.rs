//! # Catcfg Architecture
//!
//! Catcfg is a **UI-agnostic record management library**. The command-line
//! client is just one consumer of it—the same core could sit behind a TUI or
//! an HTTP surface without changing a line of business logic.
//!
//! ## The Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, output.rs, wired by main.rs)           │
//! │  - Parses arguments, renders reports, prints messages       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The form controller: one module per user action          │
//! │  - Takes the draft record as explicit state, returns it     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                    ┌─────────┴──────────┐
//!                    ▼                    ▼
//! ┌──────────────────────────┐ ┌──────────────────────────────┐
//! │  Storage Layer (store/)  │ │  Export Layer (export/)      │
//! │  - Abstract DataStore    │ │  - Row derivation            │
//! │  - FileStore, InMemory   │ │  - XLSX / CSV / PDF writers  │
//! └──────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! ## The Draft
//!
//! All editing happens against a single draft record. Commands never mutate
//! ambient state: they receive the draft (and, where needed, a store), and
//! hand back a [`commands::CmdResult`] carrying the replacement draft plus any
//! user-facing messages. The binary persists the draft between invocations in
//! its own slot (see [`draft`]); the library itself has no session state.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The one deliberate exception is file emission in the
//! export layer, which is the whole point of that layer.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: The form controller, one module per action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `CategoryRecord` type and its lifecycle rules
//! - [`fields`]: The form schema—field kinds, labels, option sets
//! - [`export`]: Row derivation and the three report renderers
//! - [`config`]: Configuration management
//! - [`draft`]: Draft slot persistence for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod export;
pub mod fields;
pub mod model;
pub mod store;
