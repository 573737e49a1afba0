//! Shared configuration library for Gyre.
//!
//! This crate centralizes the engine's tuning constants, the runtime
//! `Config` struct, the pure config reducer, and TOML preset
//! loading/validation. Both the engine (`gyre-core`) and any dev-panel
//! frontend consume this crate so there is a single source of truth for
//! defaults, valid ranges, and mode presets.

pub mod constants;
pub mod loader;
pub mod models;
pub mod reducer;

pub use loader::{
    error::ConfigLoadError, load_path, load_str, write_default_preset,
};
pub use models::{CacheSettings, Config, MotionSettings};
pub use reducer::{ConfigAction, reduce};
