//! Held-key tracking for modifier queries.

use std::collections::HashSet;

/// DOM key codes.
pub mod key_codes {
    pub const SHIFT: u32 = 16;
    pub const CONTROL: u32 = 17;
    pub const META_LEFT: u32 = 91;
    pub const META_RIGHT: u32 = 93;
}

/// Modifier state the selection controller reads on each press.
pub trait ModifierQuery {
    /// Control, or Command on macOS. Turns clicks into selection toggles.
    fn toggle_held(&self) -> bool;
}

/// Set of currently held keys, fed from `KeyDown`/`KeyUp` events.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<u32>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key_code: u32) {
        self.held.insert(key_code);
    }

    pub fn release(&mut self, key_code: u32) {
        self.held.remove(&key_code);
    }

    pub fn is_key_down(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// Forget every held key (e.g. when the host window loses focus).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl ModifierQuery for KeyState {
    fn toggle_held(&self) -> bool {
        use key_codes::*;
        self.is_key_down(CONTROL) || self.is_key_down(META_LEFT) || self.is_key_down(META_RIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_or_meta_counts_as_toggle() {
        let mut keys = KeyState::new();
        assert!(!keys.toggle_held());
        // Shift alone is not a toggle
        keys.press(key_codes::SHIFT);
        assert!(!keys.toggle_held());
        keys.press(key_codes::CONTROL);
        assert!(keys.toggle_held());
        keys.release(key_codes::CONTROL);
        assert!(!keys.toggle_held());
        keys.press(key_codes::META_RIGHT);
        assert!(keys.toggle_held());
    }

    #[test]
    fn clear_releases_everything() {
        let mut keys = KeyState::new();
        keys.press(key_codes::CONTROL);
        keys.press(key_codes::SHIFT);
        keys.clear();
        assert!(!keys.toggle_held());
        assert!(!keys.is_key_down(key_codes::SHIFT));
    }
}
