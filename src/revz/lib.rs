//! # Revz Architecture
//!
//! Revz is a **UI-agnostic revision-note library**: short strategy notes
//! keyed by topic aliases, loaded from a flat JSON file. The bundled CLI is
//! one client of the library, not the library itself.
//!
//! ## The Three Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, runs the prompt loop   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the loaded store and settings         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model, store, sort, search, fileio, validate)        │
//! │  - Pure logic plus file-backed load/save                    │
//! │  - No I/O assumptions beyond the store files themselves     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The same core could
//! back a GUI or anything else that answers "what is the strategy for X?".
//!
//! ## Module Overview
//!
//! - [`api`]: The facade—entry point for all operations
//! - [`store`]: The alias-keyed note store and its JSON persistence
//! - [`model`]: The [`model::Topic`] record type
//! - [`config`]: `settings.json` handling
//! - [`sort`], [`search`]: small sequence utilities the store builds on
//! - [`fileio`]: line-oriented file loading
//! - [`validate`]: raw-input classification for the prompt loop
//! - [`error`]: the crate error type

pub mod api;
pub mod config;
pub mod error;
pub mod fileio;
pub mod model;
pub mod search;
pub mod sort;
pub mod store;
pub mod validate;
