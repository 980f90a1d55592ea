//! Keyboard mapping for the movement demo
//!
//! Converts browser key values to logical actions. Movement bindings depend
//! on the active control scheme; arrow keys always steer, and the global
//! action keys (space, shift) work in every scheme.

use serde::{Deserialize, Serialize};

/// Logical actions the demo understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,
    Dash,
}

/// Selectable movement key layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlScheme {
    #[default]
    Wasd,
    Arrows,
    Ijkl,
}

impl ControlScheme {
    pub fn cycle(self) -> Self {
        match self {
            ControlScheme::Wasd => ControlScheme::Arrows,
            ControlScheme::Arrows => ControlScheme::Ijkl,
            ControlScheme::Ijkl => ControlScheme::Wasd,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::Wasd => "WASD",
            ControlScheme::Arrows => "ARROWS",
            ControlScheme::Ijkl => "IJKL",
        }
    }
}

/// Keys bound to an action in every scheme
fn global_keys(action: Action) -> &'static [&'static str] {
    match action {
        Action::MoveLeft => &["ArrowLeft"],
        Action::MoveRight => &["ArrowRight"],
        Action::MoveUp => &["ArrowUp"],
        Action::MoveDown => &["ArrowDown"],
        Action::Start => &[" "],
        Action::Dash => &["Shift"],
        // Platformer jump doubles up on the up arrow
        Action::Jump => &[" ", "ArrowUp"],
    }
}

/// Per-scheme movement bindings. Letter keys match either case so a held
/// shift (dash) does not drop movement input.
fn scheme_keys(scheme: ControlScheme, action: Action) -> &'static [&'static str] {
    match scheme {
        ControlScheme::Wasd => match action {
            Action::MoveLeft => &["a", "A"],
            Action::MoveRight => &["d", "D"],
            Action::MoveUp => &["w", "W"],
            Action::MoveDown => &["s", "S"],
            _ => &[],
        },
        ControlScheme::Ijkl => match action {
            Action::MoveLeft => &["j", "J"],
            Action::MoveRight => &["l", "L"],
            Action::MoveUp => &["i", "I"],
            Action::MoveDown => &["k", "K"],
            _ => &[],
        },
        ControlScheme::Arrows => &[],
    }
}

/// Whether a browser `KeyboardEvent::key` value triggers the given action
pub fn key_triggers(scheme: ControlScheme, action: Action, key: &str) -> bool {
    global_keys(action).contains(&key) || scheme_keys(scheme, action).contains(&key)
}

/// Currently-held movement keys, packed into a bitfield
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldActions {
    bits: u8,
}

impl HeldActions {
    pub const LEFT: u8 = 1 << 0;
    pub const RIGHT: u8 = 1 << 1;
    pub const UP: u8 = 1 << 2;
    pub const DOWN: u8 = 1 << 3;

    pub fn set(&mut self, flag: u8, pressed: bool) {
        if pressed {
            self.bits |= flag;
        } else {
            self.bits &= !flag;
        }
    }

    #[inline]
    pub const fn is_down(&self, flag: u8) -> bool {
        self.bits & flag != 0
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Horizontal axis as -1, 0 or 1; opposing keys cancel
    pub const fn horizontal(&self) -> i8 {
        match (self.is_down(Self::LEFT), self.is_down(Self::RIGHT)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    /// Vertical axis as -1 (up), 0 or 1 (down) in screen coordinates
    pub const fn vertical(&self) -> i8 {
        match (self.is_down(Self::UP), self.is_down(Self::DOWN)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    /// Apply a key transition for the movement actions of the given scheme
    pub fn process_key(&mut self, scheme: ControlScheme, key: &str, pressed: bool) {
        const MOVEMENT: [(Action, u8); 4] = [
            (Action::MoveLeft, HeldActions::LEFT),
            (Action::MoveRight, HeldActions::RIGHT),
            (Action::MoveUp, HeldActions::UP),
            (Action::MoveDown, HeldActions::DOWN),
        ];
        for (action, flag) in MOVEMENT {
            if key_triggers(scheme, action, key) {
                self.set(flag, pressed);
            }
        }
    }
}
