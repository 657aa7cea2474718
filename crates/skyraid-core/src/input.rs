//! Per-frame input snapshot consumed by input-driven entities.

use serde::{Deserialize, Serialize};

/// Named keys the simulation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    /// Rotate left (default binding: A).
    Left,
    /// Rotate right (default binding: D).
    Right,
    /// Fire a missile (default binding: K).
    Fire,
    /// Aim the next missile upward (default binding: W).
    Up,
    /// Aim the next missile downward (default binding: S).
    Down,
}

/// Which keys are held during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    /// Snapshot with exactly the given keys held.
    pub fn from_keys(keys: &[Key]) -> Self {
        let mut state = Self::default();
        for &key in keys {
            state.press(key);
        }
        state
    }

    pub fn press(&mut self, key: Key) {
        *self.slot(key) = true;
    }

    /// Keys held in either snapshot.
    pub fn merge(self, other: InputState) -> Self {
        Self {
            left: self.left || other.left,
            right: self.right || other.right,
            fire: self.fire || other.fire,
            up: self.up || other.up,
            down: self.down || other.down,
        }
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Fire => &mut self.fire,
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
        }
    }
}
