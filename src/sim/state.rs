//! Movement demo state
//!
//! Everything the integrator reads and mutates per tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::preset::{FeelPreset, PRESETS};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoPhase {
    /// Title screen, waiting for start input
    Title,
    /// Interactive playground
    Play,
}

/// Policy applied to the player square at the playfield edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Pin the square inside the playfield
    #[default]
    Clamp,
    /// Teleport to the opposite edge once fully outside
    Wrap,
    /// Pin and negate the contacting velocity component
    Bounce,
}

impl BoundaryMode {
    pub fn cycle(self) -> Self {
        match self {
            BoundaryMode::Clamp => BoundaryMode::Wrap,
            BoundaryMode::Wrap => BoundaryMode::Bounce,
            BoundaryMode::Bounce => BoundaryMode::Clamp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryMode::Clamp => "CLAMP",
            BoundaryMode::Wrap => "WRAP",
            BoundaryMode::Bounce => "BOUNCE",
        }
    }
}

/// The controllable square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position in screen coordinates (y-down)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Standing on the playfield bottom (platformer mode)
    pub on_ground: bool,
    /// Seconds until the next dash is allowed
    pub dash_cooldown: f32,
    /// Seconds the speed cap stays raised
    pub dash_boost: f32,
    /// Seconds the last held direction stays dashable
    pub dash_dir_buffer: f32,
    /// Most recent nonzero held direction, normalized
    pub last_move_dir: Vec2,
}

impl Player {
    /// Half the side length of the player square
    pub const HALF: f32 = PLAYER_SIZE / 2.0;

    /// A player at rest in the middle of the given playfield
    pub fn centered(field: &Rect) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::ZERO,
            on_ground: true,
            dash_cooldown: 0.0,
            dash_boost: 0.0,
            dash_dir_buffer: 0.0,
            last_move_dir: Vec2::X,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether a dash may exceed the preset speed cap right now
    pub fn boost_active(&self) -> bool {
        self.dash_boost > 0.0
    }
}

/// Complete movement demo state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoState {
    pub phase: DemoPhase,
    pub boundary_mode: BoundaryMode,
    /// Platformer feel (gravity + jump) instead of top-down
    pub platformer: bool,
    pub preset_idx: usize,
    pub playfield: Rect,
    pub player: Player,
    /// Simulation tick counter, advances only while playing
    pub time_ticks: u64,
}

impl DemoState {
    pub fn new() -> Self {
        let playfield = Rect::new(
            PLAYFIELD_PADDING,
            HUD_H + PLAYFIELD_PADDING,
            SCREEN_W - 2.0 * PLAYFIELD_PADDING,
            SCREEN_H - HUD_H - 2.0 * PLAYFIELD_PADDING,
        );
        Self {
            phase: DemoPhase::Title,
            boundary_mode: BoundaryMode::default(),
            platformer: false,
            preset_idx: 0,
            player: Player::centered(&playfield),
            playfield,
            time_ticks: 0,
        }
    }

    /// The active feel preset
    pub fn preset(&self) -> &'static FeelPreset {
        &PRESETS[self.preset_idx]
    }

    /// Select a preset by index; out-of-range selections are ignored
    pub fn select_preset(&mut self, idx: usize) {
        if idx < PRESETS.len() {
            self.preset_idx = idx;
        }
    }

    pub fn cycle_boundary_mode(&mut self) {
        self.boundary_mode = self.boundary_mode.cycle();
    }

    /// Switch between top-down and platformer feel, restarting motion
    pub fn toggle_platformer(&mut self) {
        self.platformer = !self.platformer;
        self.reset_motion();
    }

    /// Recenter the player and zero velocity and dash timers
    pub fn reset_motion(&mut self) {
        self.player = Player::centered(&self.playfield);
    }

    /// Leave the title screen
    pub fn start(&mut self) {
        self.reset_motion();
        self.phase = DemoPhase::Play;
    }

    /// Return to the title screen
    pub fn reset_to_title(&mut self) {
        self.reset_motion();
        self.phase = DemoPhase::Title;
    }
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new()
    }
}
