//! Per-tick input snapshot
//!
//! The host's input collaborator records key and mouse events; the simulation
//! only ever sees an immutable copy taken at the start of each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keys the core reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Key {
    Up,
    W,
    Left,
    A,
    Right,
    D,
    /// Screenshot
    Z,
}

impl Key {
    pub const COUNT: usize = 7;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Up,
        Key::W,
        Key::Left,
        Key::A,
        Key::Right,
        Key::D,
        Key::Z,
    ];

    /// Stable index into per-key tables
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Map a host key name ("ArrowUp", "w", "KeyW", ...) to a key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "up" | "arrowup" => Some(Key::Up),
            "left" | "arrowleft" => Some(Key::Left),
            "right" | "arrowright" => Some(Key::Right),
            "w" | "keyw" => Some(Key::W),
            "a" | "keya" => Some(Key::A),
            "d" | "keyd" => Some(Key::D),
            "z" | "keyz" => Some(Key::Z),
            _ => None,
        }
    }

    #[inline]
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Key bindings for the three driving controls
pub mod bindings {
    use super::Key;

    pub const ACCELERATE: [Key; 2] = [Key::Up, Key::W];
    pub const STEER_LEFT: [Key; 2] = [Key::Left, Key::A];
    pub const STEER_RIGHT: [Key; 2] = [Key::Right, Key::D];
    pub const EXPORT: Key = Key::Z;
}

/// Small bit set of keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySet(u16);

impl KeySet {
    pub const EMPTY: KeySet = KeySet(0);

    pub fn from_keys(keys: &[Key]) -> Self {
        let mut set = Self::EMPTY;
        for &key in keys {
            set.insert(key);
        }
        set
    }

    #[inline]
    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    #[inline]
    pub fn remove(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    /// True if any of `keys` is in the set
    pub fn contains_any(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&k| self.contains(k))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = Key> + use<> {
        let set = *self;
        Key::ALL.into_iter().filter(move |&k| set.contains(k))
    }
}

/// Mouse state at snapshot time (scene coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseSnapshot {
    pub pos: Vec2,
    pub pressed: bool,
    /// Button went up since the previous tick
    pub released: bool,
}

/// Read-only view of the controls for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Keys currently down
    pub held: KeySet,
    /// Keys that went up since the previous tick
    pub released: KeySet,
    pub mouse: MouseSnapshot,
}

impl InputSnapshot {
    /// Snapshot with the given keys held and nothing released
    pub fn holding(keys: &[Key]) -> Self {
        Self {
            held: KeySet::from_keys(keys),
            ..Default::default()
        }
    }

    pub fn accelerate(&self) -> bool {
        self.held.contains_any(&bindings::ACCELERATE)
    }

    pub fn steer_left(&self) -> bool {
        self.held.contains_any(&bindings::STEER_LEFT)
    }

    pub fn steer_right(&self) -> bool {
        self.held.contains_any(&bindings::STEER_RIGHT)
    }

    pub fn export_requested(&self) -> bool {
        self.released.contains(bindings::EXPORT)
    }
}
