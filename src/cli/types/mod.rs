//! Type-safe wrappers and enums for FPL data.

pub mod ids;
pub mod position;

pub use ids::{GameweekId, PlayerId};
pub use position::Position;
