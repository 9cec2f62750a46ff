//! Rebindable keyboard shortcuts
//!
//! Maps key presses to storefront actions. Which component an action
//! applies to is decided by the focused region, not here.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Navigation inside the focused region
    PreviousItem,
    NextItem,

    // Global
    FocusSearch,
    ToggleDarkMode,
    ToggleReduceMotion,
    ToggleFullscreen,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[
            Action::PreviousItem,
            Action::NextItem,
            Action::FocusSearch,
            Action::ToggleDarkMode,
            Action::ToggleReduceMotion,
            Action::ToggleFullscreen,
        ]
    }

    /// Whether the action is routed to the focused region
    pub fn is_scoped(&self) -> bool {
        matches!(self, Action::PreviousItem | Action::NextItem)
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    pub modifiers: ModifierSet,
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string, e.g. "Ctrl+K"
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }

        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    // Letters commonly used with Ctrl
    D,
    F,
    K,
    L,
    M,
    S,

    // Function keys
    F1,
    F5,
    F11,

    // Navigation
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,

    // Special
    Enter,
    Escape,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => {
                let c = c.to_lowercase();
                matches!(
                    (self, c.as_str()),
                    (KeyCode::D, "d")
                        | (KeyCode::F, "f")
                        | (KeyCode::K, "k")
                        | (KeyCode::L, "l")
                        | (KeyCode::M, "m")
                        | (KeyCode::S, "s")
                )
            }
            Key::Named(named) => {
                use iced::keyboard::key::Named;
                matches!(
                    (self, named),
                    (KeyCode::F1, Named::F1)
                        | (KeyCode::F5, Named::F5)
                        | (KeyCode::F11, Named::F11)
                        | (KeyCode::Left, Named::ArrowLeft)
                        | (KeyCode::Right, Named::ArrowRight)
                        | (KeyCode::Up, Named::ArrowUp)
                        | (KeyCode::Down, Named::ArrowDown)
                        | (KeyCode::PageUp, Named::PageUp)
                        | (KeyCode::PageDown, Named::PageDown)
                        | (KeyCode::Enter, Named::Enter)
                        | (KeyCode::Escape, Named::Escape)
                )
            }
            Key::Unidentified => false,
        }
    }

    /// Get display name for the key
    pub fn display(&self) -> &'static str {
        match self {
            KeyCode::D => "D",
            KeyCode::F => "F",
            KeyCode::K => "K",
            KeyCode::L => "L",
            KeyCode::M => "M",
            KeyCode::S => "S",
            KeyCode::F1 => "F1",
            KeyCode::F5 => "F5",
            KeyCode::F11 => "F11",
            KeyCode::Left => "←",
            KeyCode::Right => "→",
            KeyCode::Up => "↑",
            KeyCode::Down => "↓",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Esc",
        }
    }
}

/// Digit 1-9 pressed without modifiers, used for direct slide selection
pub fn slide_digit(key: &Key, modifiers: &Modifiers) -> Option<u32> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Character(c) => {
            let mut chars = c.chars();
            let digit = chars.next()?.to_digit(10)?;
            if chars.next().is_some() || digit == 0 {
                return None;
            }
            Some(digit)
        }
        _ => None,
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(Action::PreviousItem, vec![KeyBinding::new(KeyCode::Left)]);
        bindings.insert(Action::NextItem, vec![KeyBinding::new(KeyCode::Right)]);

        bindings.insert(Action::FocusSearch, vec![KeyBinding::new(KeyCode::K).ctrl()]);
        bindings.insert(
            Action::ToggleDarkMode,
            vec![KeyBinding::new(KeyCode::D).ctrl()],
        );
        bindings.insert(
            Action::ToggleReduceMotion,
            vec![KeyBinding::new(KeyCode::M).ctrl()],
        );
        bindings.insert(
            Action::ToggleFullscreen,
            vec![KeyBinding::new(KeyCode::F11)],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Give every action without a binding its default shortcut.
    ///
    /// A settings file written by an older version may not know about
    /// newer actions.
    pub fn fill_missing(&mut self) {
        let defaults = Self::default();
        for action in Action::all() {
            if self.get(action).is_none() {
                if let Some(bindings) = defaults.get(action) {
                    self.set(*action, bindings.clone());
                }
            }
        }
    }

    pub fn get(&self, action: &Action) -> Option<&Vec<KeyBinding>> {
        self.bindings.get(action)
    }

    pub fn set(&mut self, action: Action, bindings: Vec<KeyBinding>) {
        self.bindings.insert(action, bindings);
    }

    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        // Iterate in declaration order so overlapping user bindings resolve
        // the same way on every run
        Action::all().iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|list| list.iter().any(|b| b.matches(key, modifiers)))
        })
    }

    /// Get display string for an action's keybinding
    pub fn display_for_action(&self, action: &Action) -> String {
        self.bindings
            .get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    #[test]
    fn test_default_bindings_cover_every_action() {
        let bindings = KeyBindings::default();
        for action in Action::all() {
            assert!(
                bindings.get(action).is_some(),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_keybinding_display() {
        let mut binding = KeyBinding::new(KeyCode::K).ctrl();
        assert_eq!(binding.display(), "Ctrl+K");
        binding.modifiers.shift = true;
        assert_eq!(binding.display(), "Ctrl+Shift+K");
    }

    #[test]
    fn test_arrows_resolve_without_modifiers() {
        let bindings = KeyBindings::default();
        let none = Modifiers::empty();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowLeft), &none),
            Some(Action::PreviousItem)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowRight), &none),
            Some(Action::NextItem)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowRight), &Modifiers::CTRL),
            None,
            "Ctrl+Right is not bound"
        );
    }

    #[test]
    fn test_ctrl_letters_are_case_insensitive() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.find_action(&Key::Character("K".into()), &Modifiers::CTRL),
            Some(Action::FocusSearch)
        );
        assert_eq!(
            bindings.find_action(&Key::Character("k".into()), &Modifiers::empty()),
            None
        );
    }

    #[test]
    fn test_slide_digit() {
        let none = Modifiers::empty();
        assert_eq!(slide_digit(&Key::Character("3".into()), &none), Some(3));
        assert_eq!(slide_digit(&Key::Character("0".into()), &none), None);
        assert_eq!(slide_digit(&Key::Character("12".into()), &none), None);
        assert_eq!(slide_digit(&Key::Character("a".into()), &none), None);
        assert_eq!(
            slide_digit(&Key::Character("2".into()), &Modifiers::CTRL),
            None
        );
    }

    #[test]
    fn test_bindings_survive_json() {
        let mut bindings = KeyBindings::default();
        bindings.set(Action::NextItem, vec![KeyBinding::new(KeyCode::PageDown)]);
        let json = serde_json::to_string(&bindings).unwrap();
        let loaded: KeyBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(
            loaded.display_for_action(&Action::NextItem),
            "PageDown"
        );
    }

    #[test]
    fn test_missing_actions_get_defaults() {
        let json = r#"{"bindings":{"next_item":[{"modifiers":{"ctrl":false,"alt":false,"shift":false},"key":"page_down"}]}}"#;
        let mut loaded: KeyBindings = serde_json::from_str(json).unwrap();
        assert_eq!(loaded.get(&Action::ToggleDarkMode), None);

        loaded.fill_missing();
        assert_eq!(loaded.display_for_action(&Action::ToggleDarkMode), "Ctrl+D");
        assert_eq!(
            loaded.display_for_action(&Action::NextItem),
            "PageDown",
            "user bindings are kept"
        );
    }
}
