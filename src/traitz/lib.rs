//! # Traitz Architecture
//!
//! Traitz is a **UI-agnostic faceted filtering library** for collections of JSON
//! records that carry `trait_type`/`value` attributes (token metadata, catalogues,
//! anything with facets). The `traitz` binary is one client of it, nothing more.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session facade: owns records, index, selection, result   │
//! │  - Gates every operation on a completed load                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Toggle, reset, filter evaluation, facets, join           │
//! │  - Operates on Rust types, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (store/)                                      │
//! │  - Abstract RecordSource trait                              │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Filtering Semantics
//!
//! Checked values form a flat list of (trait type, value) pairs and a record must
//! carry every one of them. Two checked values under the same trait type therefore
//! narrow to records that have both. See [`commands::filter`].
//!
//! When nothing is checked, or nothing matches, the result follows the configured
//! [`commands::filter::NoMatchPolicy`]: one placeholder record, or nothing.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns regular Rust
//! types. It never prints and never exits. Diagnostics go through `tracing`;
//! user-facing notes travel back as [`commands::CmdMessage`]s.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`store`]: Record sources
//! - [`model`]: Core data types (`Record`, `Attribute`)
//! - [`index`]: Trait index and selection state
//! - [`ordering`]: Display order for trait values
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod ordering;
pub mod store;
