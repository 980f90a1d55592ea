//! Fixed timestep tick for the movement demo
//!
//! Advances the playground deterministically: timers, dash, acceleration,
//! friction, speed cap, integration, boundary policy.

use glam::Vec2;

use super::rect::Rect;
use super::state::{BoundaryMode, DemoPhase, DemoState, Player};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held horizontal axis: -1, 0 or 1
    pub horizontal: i8,
    /// Held vertical axis: -1 (up), 0 or 1 (down)
    pub vertical: i8,
    /// Leave the title screen (one-shot)
    pub start: bool,
    /// Jump in platformer mode (one-shot)
    pub jump: bool,
    /// Dash along the held or buffered direction (one-shot)
    pub dash: bool,
}

impl TickInput {
    /// Held direction for top-down movement, normalized
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.horizontal as f32, self.vertical as f32).normalize_or_zero()
    }
}

/// Advance the demo state by one fixed timestep
pub fn tick(state: &mut DemoState, input: &TickInput, dt: f32) {
    if state.phase == DemoPhase::Title {
        if input.start {
            state.start();
        }
        return;
    }

    state.time_ticks += 1;

    let preset = state.preset();
    let mode = state.boundary_mode;
    let field = state.playfield;
    let platformer = state.platformer;
    let player = &mut state.player;

    // Timers wind down and clamp at zero
    player.dash_cooldown = (player.dash_cooldown - dt).max(0.0);
    player.dash_boost = (player.dash_boost - dt).max(0.0);
    player.dash_dir_buffer = (player.dash_dir_buffer - dt).max(0.0);

    // Platformer steering is horizontal only; gravity owns the y axis
    let held = if platformer {
        Vec2::new(input.horizontal as f32, 0.0).normalize_or_zero()
    } else {
        input.direction()
    };
    if held != Vec2::ZERO {
        player.last_move_dir = held;
        player.dash_dir_buffer = DASH_DIR_BUFFER;
    }

    if input.dash {
        try_dash(player, held);
    }

    let cap = preset.max_speed
        * if player.boost_active() {
            DASH_SPEED_MULT
        } else {
            1.0
        };

    if platformer {
        let x = input.horizontal as f32;
        player.vel.x += x * preset.accel * dt;
        if x == 0.0 {
            player.vel.x -= player.vel.x * (preset.friction * dt).min(1.0);
        }
        player.vel.x = player.vel.x.clamp(-cap, cap);

        if input.jump && player.on_ground {
            player.vel.y = -preset.jump_speed;
            player.on_ground = false;
        }
        player.vel.y += preset.gravity * dt;

        player.pos += player.vel * dt;

        // Horizontal bounds follow the active boundary mode; restore y so the
        // ground and ceiling rules below stay in charge of the vertical axis.
        let prev_y = player.pos.y;
        apply_bounds(player, mode, &field);
        player.pos.y = prev_y;
        apply_platformer_vertical(player, &field);
    } else {
        player.vel += held * preset.accel * dt;
        if held == Vec2::ZERO {
            // Exponential friction toward zero when coasting
            player.vel -= player.vel * (preset.friction * dt).min(1.0);
        }
        player.vel = player.vel.clamp_length_max(cap);

        player.pos += player.vel * dt;
        apply_bounds(player, mode, &field);
    }
}

/// Dash: impulse along the held direction, or a recently-held one.
/// No-op while on cooldown or with no usable direction.
fn try_dash(player: &mut Player, held: Vec2) {
    if player.dash_cooldown > 0.0 {
        return;
    }

    let dir = if held != Vec2::ZERO {
        held
    } else if player.dash_dir_buffer > 0.0 && player.last_move_dir != Vec2::ZERO {
        player.last_move_dir
    } else {
        return;
    };

    player.vel += dir * DASH_IMPULSE;
    player.dash_cooldown = DASH_COOLDOWN;
    player.dash_boost = DASH_BOOST_TIME;
}

fn apply_bounds(player: &mut Player, mode: BoundaryMode, field: &Rect) {
    let half = Player::HALF;
    match mode {
        BoundaryMode::Clamp => {
            player.pos.x = player.pos.x.clamp(field.min.x + half, field.max.x - half);
            player.pos.y = player.pos.y.clamp(field.min.y + half, field.max.y - half);
        }
        BoundaryMode::Wrap => {
            // Teleport once the square has fully left the field
            if player.pos.x + half < field.min.x {
                player.pos.x = field.max.x + half;
            } else if player.pos.x - half > field.max.x {
                player.pos.x = field.min.x - half;
            }
            if player.pos.y + half < field.min.y {
                player.pos.y = field.max.y + half;
            } else if player.pos.y - half > field.max.y {
                player.pos.y = field.min.y - half;
            }
        }
        BoundaryMode::Bounce => {
            if player.pos.x - half < field.min.x {
                player.pos.x = field.min.x + half;
                player.vel.x = -player.vel.x;
            } else if player.pos.x + half > field.max.x {
                player.pos.x = field.max.x - half;
                player.vel.x = -player.vel.x;
            }
            if player.pos.y - half < field.min.y {
                player.pos.y = field.min.y + half;
                player.vel.y = -player.vel.y;
            } else if player.pos.y + half > field.max.y {
                player.pos.y = field.max.y - half;
                player.vel.y = -player.vel.y;
            }
        }
    }
}

/// The bottom of the playfield is the ground; the top stops upward motion.
fn apply_platformer_vertical(player: &mut Player, field: &Rect) {
    let half = Player::HALF;
    if player.pos.y + half >= field.max.y {
        player.pos.y = field.max.y - half;
        player.vel.y = 0.0;
        player.on_ground = true;
    }
    if player.pos.y - half < field.min.y {
        player.pos.y = field.min.y + half;
        if player.vel.y < 0.0 {
            player.vel.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PRESETS;
    use proptest::prelude::*;

    fn playing_state() -> DemoState {
        let mut state = DemoState::new();
        state.start();
        state
    }

    fn held(horizontal: i8, vertical: i8) -> TickInput {
        TickInput {
            horizontal,
            vertical,
            ..Default::default()
        }
    }

    #[test]
    fn test_title_ignores_movement() {
        let mut state = DemoState::new();
        let start_pos = state.player.pos;

        for _ in 0..60 {
            tick(&mut state, &held(1, 0), SIM_DT);
        }
        assert_eq!(state.phase, DemoPhase::Title);
        assert_eq!(state.player.pos, start_pos);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_start_enters_play() {
        let mut state = DemoState::new();
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, DemoPhase::Play);
    }

    #[test]
    fn test_friction_settles_toward_zero() {
        let mut state = playing_state();

        for _ in 0..120 {
            tick(&mut state, &held(1, 0), SIM_DT);
        }
        let cruising = state.player.speed();
        assert!(cruising > 100.0);

        // Coast: speed must strictly decrease every tick until negligible
        let mut prev = cruising;
        for _ in 0..360 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            let now = state.player.speed();
            if prev > 0.01 {
                assert!(now < prev, "speed did not decrease: {now} >= {prev}");
            }
            prev = now;
        }
        assert!(prev < 1.0, "speed did not settle: {prev}");
    }

    #[test]
    fn test_speed_never_exceeds_cap() {
        let mut state = playing_state();
        let cap = state.preset().max_speed;

        for _ in 0..600 {
            tick(&mut state, &held(1, 1), SIM_DT);
            assert!(state.player.speed() <= cap * 1.0001);
        }
    }

    #[test]
    fn test_dash_applies_impulse_along_held_direction() {
        let mut state = playing_state();
        let input = TickInput {
            horizontal: 1,
            dash: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        assert!(state.player.vel.x > 0.0);
        assert!(state.player.dash_cooldown > 0.0);
        assert!(state.player.boost_active());
    }

    #[test]
    fn test_dash_without_direction_is_noop() {
        let mut state = playing_state();
        let input = TickInput {
            dash: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.player.dash_cooldown, 0.0);
    }

    #[test]
    fn test_dash_on_cooldown_is_noop() {
        let mut state = playing_state();
        let dash_right = TickInput {
            horizontal: 1,
            dash: true,
            ..Default::default()
        };
        tick(&mut state, &dash_right, SIM_DT);
        assert!(state.player.dash_cooldown > 0.0);

        // A second dash while cooling down must match a plain movement tick
        let mut without_dash = state.clone();
        tick(&mut state, &dash_right, SIM_DT);
        tick(&mut without_dash, &held(1, 0), SIM_DT);
        assert_eq!(state.player.vel, without_dash.player.vel);
        assert_eq!(state.player.pos, without_dash.player.pos);
    }

    #[test]
    fn test_dash_buffer_uses_last_direction() {
        let mut state = playing_state();
        // Establish a rightward direction, then release
        for _ in 0..12 {
            tick(&mut state, &held(1, 0), SIM_DT);
        }
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.player.dash_dir_buffer > 0.0);

        let before = state.player.vel.x;
        let input = TickInput {
            dash: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(state.player.vel.x > before + DASH_IMPULSE * 0.5);
    }

    #[test]
    fn test_dash_buffer_expires() {
        let mut state = playing_state();
        for _ in 0..12 {
            tick(&mut state, &held(1, 0), SIM_DT);
        }
        // Coast long past the buffer window
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.player.dash_dir_buffer, 0.0);

        let mut without_dash = state.clone();
        let input = TickInput {
            dash: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        tick(&mut without_dash, &TickInput::default(), SIM_DT);
        assert_eq!(state.player.vel, without_dash.player.vel);
    }

    #[test]
    fn test_boost_window_allows_overcap_then_expires() {
        let mut state = playing_state();
        let cap = state.preset().max_speed;

        // Reach the cap, then dash into the boost window
        for _ in 0..240 {
            tick(&mut state, &held(1, 0), SIM_DT);
        }
        let input = TickInput {
            horizontal: 1,
            dash: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(state.player.speed() > cap);
        assert!(state.player.speed() <= cap * DASH_SPEED_MULT * 1.0001);

        // Once the window closes the cap is enforced again
        let boost_ticks = (DASH_BOOST_TIME / SIM_DT) as u32 + 2;
        for _ in 0..boost_ticks {
            tick(&mut state, &held(1, 0), SIM_DT);
        }
        assert!(!state.player.boost_active());
        assert!(state.player.speed() <= cap * 1.0001);
    }

    #[test]
    fn test_bounce_negates_contact_velocity() {
        let mut state = playing_state();
        state.boundary_mode = BoundaryMode::Bounce;
        state.player.pos = Vec2::new(
            state.playfield.max.x - Player::HALF - 1.0,
            state.playfield.center().y,
        );
        state.player.vel = Vec2::new(500.0, 0.0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.player.vel.x < 0.0, "vel.x = {}", state.player.vel.x);
        assert!(state.player.pos.x + Player::HALF <= state.playfield.max.x);
    }

    #[test]
    fn test_wrap_teleports_to_opposite_edge() {
        let mut state = playing_state();
        state.boundary_mode = BoundaryMode::Wrap;
        state.player.pos = Vec2::new(
            state.playfield.max.x + Player::HALF + 1.0,
            state.playfield.center().y,
        );

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.player.pos.x, state.playfield.min.x - Player::HALF);
    }

    #[test]
    fn test_clamp_keeps_player_inside() {
        let mut state = playing_state();
        state.player.vel = Vec2::new(5000.0, 5000.0);

        for _ in 0..240 {
            tick(&mut state, &held(1, 1), SIM_DT);
            let p = &state.player;
            assert!(p.pos.x - Player::HALF >= state.playfield.min.x);
            assert!(p.pos.x + Player::HALF <= state.playfield.max.x);
            assert!(p.pos.y - Player::HALF >= state.playfield.min.y);
            assert!(p.pos.y + Player::HALF <= state.playfield.max.y);
        }
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut state = playing_state();
        state.platformer = true;

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, SIM_DT);
        assert!(!state.player.on_ground);
        assert!(state.player.vel.y < 0.0);
        let rising = state.player.vel.y;

        // A jump while airborne is ignored; gravity keeps winning
        tick(&mut state, &jump, SIM_DT);
        assert!(state.player.vel.y > rising);
    }

    #[test]
    fn test_platformer_lands_on_ground() {
        let mut state = playing_state();
        state.platformer = true;

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, SIM_DT);
        assert!(!state.player.on_ground);

        let mut landed = false;
        for _ in 0..1000 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if state.player.on_ground {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(
            state.player.pos.y,
            state.playfield.max.y - Player::HALF
        );
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing_state();
        let mut state2 = playing_state();

        let inputs = [
            held(1, 0),
            held(1, -1),
            TickInput {
                horizontal: 1,
                dash: true,
                ..Default::default()
            },
            TickInput::default(),
            held(-1, 1),
        ];
        for input in &inputs {
            for _ in 0..30 {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.player.vel, state2.player.vel);
    }

    proptest! {
        #[test]
        fn prop_friction_strictly_decreases_speed(
            speed in 10.0f32..2000.0,
            angle in 0.0f32..std::f32::consts::TAU,
            preset_idx in 0usize..PRESETS.len(),
        ) {
            let mut state = playing_state();
            state.select_preset(preset_idx);
            state.player.vel = Vec2::new(angle.cos(), angle.sin()) * speed;

            let mut prev = state.player.speed();
            for _ in 0..60 {
                tick(&mut state, &TickInput::default(), SIM_DT);
                let now = state.player.speed();
                prop_assert!(now <= prev);
                if prev > 0.01 {
                    prop_assert!(now < prev);
                }
                prev = now;
            }
        }

        #[test]
        fn prop_speed_capped_without_dash(
            horizontal in -1i8..=1,
            vertical in -1i8..=1,
            preset_idx in 0usize..PRESETS.len(),
            ticks in 1usize..240,
        ) {
            let mut state = playing_state();
            state.select_preset(preset_idx);
            let cap = state.preset().max_speed;

            let input = held(horizontal, vertical);
            for _ in 0..ticks {
                tick(&mut state, &input, SIM_DT);
                prop_assert!(state.player.speed() <= cap * 1.0001);
            }
        }
    }
}
