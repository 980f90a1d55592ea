//! Deterministic movement-feel simulation
//!
//! All playground logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable per-tick state transitions
//! - No rendering or platform dependencies

pub mod preset;
pub mod rect;
pub mod state;
pub mod tick;

pub use preset::{FeelPreset, PRESETS};
pub use rect::Rect;
pub use state::{BoundaryMode, DemoPhase, DemoState, Player};
pub use tick::{TickInput, tick};
