//! Placement: per-card transform computation and its memoization layer.

pub mod cache;
pub mod calculator;

pub use cache::PositionCache;
pub use calculator::{arc_opacity, card_transform};
