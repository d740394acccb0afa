//! # CLI Layer
//!
//! This module is **one possible UI client** for traitz. It is the only place that:
//! - Parses arguments (`setup`)
//! - Builds the session from the data directory and config (`commands`)
//! - Writes to the terminal (`render`)
//!
//! Logic stays in the library; handlers here call the API and print what comes back.

pub mod commands;
pub mod render;
pub mod setup;
