//! Feel presets - immutable bundles of movement tuning
//!
//! A preset is selected by index and never mutated. Acceleration, cap and
//! friction shape the top-down feel; gravity and jump speed shape the
//! platformer feel.

/// Named movement tuning values, in pixels and seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeelPreset {
    pub name: &'static str,
    /// Acceleration along the held direction (px/s²)
    pub accel: f32,
    /// Speed cap outside a dash-boost window (px/s)
    pub max_speed: f32,
    /// Exponential damping rate applied when no direction is held (1/s)
    pub friction: f32,
    /// Downward acceleration in platformer mode (px/s²)
    pub gravity: f32,
    /// Initial upward speed of a jump (px/s)
    pub jump_speed: f32,
}

/// Built-in presets, selected with the digit keys
pub static PRESETS: [FeelPreset; 4] = [
    FeelPreset {
        name: "tight",
        accel: 3200.0,
        max_speed: 520.0,
        friction: 14.0,
        gravity: 2600.0,
        jump_speed: 860.0,
    },
    FeelPreset {
        name: "floaty",
        accel: 1900.0,
        max_speed: 560.0,
        friction: 6.0,
        gravity: 1700.0,
        jump_speed: 760.0,
    },
    FeelPreset {
        name: "heavy",
        accel: 1400.0,
        max_speed: 440.0,
        friction: 4.2,
        gravity: 3200.0,
        jump_speed: 820.0,
    },
    FeelPreset {
        name: "icy",
        accel: 1600.0,
        max_speed: 680.0,
        friction: 1.4,
        gravity: 2600.0,
        jump_speed: 860.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_sane() {
        for preset in &PRESETS {
            assert!(preset.accel > 0.0, "{}", preset.name);
            assert!(preset.max_speed > 0.0, "{}", preset.name);
            assert!(preset.friction > 0.0, "{}", preset.name);
            assert!(preset.gravity > 0.0, "{}", preset.name);
            assert!(preset.jump_speed > 0.0, "{}", preset.name);
        }
    }

    #[test]
    fn test_preset_names_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
