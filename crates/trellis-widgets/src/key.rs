//! Key binding definitions and the key map trait for help display.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// A human-readable description of the action this binding performs.
    pub description: String,
    /// Whether this binding is currently active. Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifier keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code (a character, arrow key, or function key).
    pub code: KeyCode,
    /// Modifier keys that must be held alongside the base key.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for a single key combination with the given description.
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self {
            keys: vec![key],
            description: description.into(),
            enabled: true,
        }
    }

    /// Create a binding for multiple key combinations with the given description.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether the given key event matches any of this binding's combinations.
    /// Always returns `false` when the binding is disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Set whether this binding is enabled. Disabled bindings never match.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    /// Create a key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Create a key combination with the Ctrl modifier.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Create a key combination with the Shift modifier.
    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

/// Trait for types that define key bindings, so callers can build help lines
/// without hard-coding keys.
pub trait KeyMap {
    /// A flat list of the most important bindings for a short help line.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped by category for a full help display.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn matches_any_combination() {
        let b = Binding::with_keys(
            vec![
                KeyCombination::new(KeyCode::Up),
                KeyCombination::new(KeyCode::Char('k')),
            ],
            "Up",
        );
        assert!(b.matches(&event(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&event(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&event(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn modifier_must_be_held() {
        let b = Binding::new(KeyCombination::ctrl(KeyCode::Char('d')), "Half down");
        assert!(b.matches(&event(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&event(KeyCode::Char('d'), KeyModifiers::NONE)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let b = Binding::new(KeyCombination::new(KeyCode::Enter), "Activate").enabled(false);
        assert!(!b.matches(&event(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
