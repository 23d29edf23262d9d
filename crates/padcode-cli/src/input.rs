//! Keyboard to game pad mapping.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Result, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use padcode_core::{ButtonMask, PadButton};

/// Maps terminal keys onto pad buttons.
#[derive(Debug, Clone)]
pub struct KeyMap {
    keys: HashMap<KeyCode, ButtonMask>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let keys = [
            (KeyCode::Up, PadButton::DpadUp),
            (KeyCode::Down, PadButton::DpadDown),
            (KeyCode::Left, PadButton::DpadLeft),
            (KeyCode::Right, PadButton::DpadRight),
            (KeyCode::Char('a'), PadButton::A),
            (KeyCode::Char('b'), PadButton::B),
            (KeyCode::Char('x'), PadButton::X),
            (KeyCode::Char('y'), PadButton::Y),
            (KeyCode::Char('z'), PadButton::Z),
            (KeyCode::Char('l'), PadButton::L),
            (KeyCode::Char('r'), PadButton::R),
            (KeyCode::Enter, PadButton::Start),
        ]
        .into_iter()
        .map(|(key, button)| (key, ButtonMask::from(button)))
        .collect();

        Self { keys }
    }
}

impl KeyMap {
    /// Default map with the given `key name -> buttons` overrides applied
    pub fn with_overrides(overrides: &BTreeMap<String, ButtonMask>) -> Result<Self> {
        let mut map = Self::default();
        for (name, mask) in overrides {
            let Some(key) = parse_key(name) else {
                bail!("Unknown key name '{}'", name);
            };
            if is_quit_code(key) {
                bail!("Key '{}' is reserved for quitting", name);
            }
            map.keys.insert(key, *mask);
        }
        Ok(map)
    }

    /// Buttons pressed by this key event, if any
    pub fn lookup(&self, event: &KeyEvent) -> Option<ButtonMask> {
        let code = match event.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.keys.get(&code).copied()
    }

    /// Keys bound to `button`, as display names
    pub fn keys_for(&self, button: PadButton) -> Vec<String> {
        let mut names: Vec<String> = self
            .keys
            .iter()
            .filter(|(_, mask)| mask.single() == Some(button))
            .map(|(key, _)| key_name(*key))
            .collect();
        names.sort();
        names
    }
}

/// Check if the key event should stop the host.
pub fn is_quit_key(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => true,
        code => is_quit_code(code),
    }
}

fn is_quit_code(code: KeyCode) -> bool {
    matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Parse a key name from the config file: a single character or one of
/// the named keys (`enter`, `space`, `up`, ...).
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_ascii_lowercase();
    let key = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "esc" | "escape" => KeyCode::Esc,
        _ => {
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(key)
}

fn key_name(key: KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Enter => "enter".to_string(),
        other => format!("{:?}", other).to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_map() {
        let map = KeyMap::default();
        assert_eq!(map.lookup(&key(KeyCode::Up)), Some(PadButton::DpadUp.into()));
        assert_eq!(map.lookup(&key(KeyCode::Enter)), Some(PadButton::Start.into()));
        assert_eq!(map.lookup(&key(KeyCode::Char('b'))), Some(PadButton::B.into()));
        assert_eq!(map.lookup(&key(KeyCode::Char('B'))), Some(PadButton::B.into()));
        assert_eq!(map.lookup(&key(KeyCode::Char('k'))), None);
    }

    #[test]
    fn test_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("space".to_string(), ButtonMask::from(PadButton::A));
        overrides.insert("Enter".to_string(), PadButton::B | PadButton::A);

        let map = KeyMap::with_overrides(&overrides).unwrap();
        assert_eq!(map.lookup(&key(KeyCode::Char(' '))), Some(PadButton::A.into()));
        assert_eq!(map.lookup(&key(KeyCode::Enter)), Some(PadButton::A | PadButton::B));
        assert_eq!(map.lookup(&key(KeyCode::Char('a'))), Some(PadButton::A.into()));
    }

    #[test]
    fn test_overrides_reject_bad_keys() {
        let mut overrides = BTreeMap::new();
        overrides.insert("pagedown".to_string(), ButtonMask::from(PadButton::A));
        assert!(KeyMap::with_overrides(&overrides).is_err());

        let mut overrides = BTreeMap::new();
        overrides.insert("q".to_string(), ButtonMask::from(PadButton::A));
        assert!(KeyMap::with_overrides(&overrides).is_err());
    }

    #[test]
    fn test_keys_for() {
        let map = KeyMap::default();
        assert_eq!(map.keys_for(PadButton::Start), vec!["enter".to_string()]);
        assert_eq!(map.keys_for(PadButton::DpadUp), vec!["up".to_string()]);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("up"), Some(KeyCode::Up));
        assert_eq!(parse_key("RETURN"), Some(KeyCode::Enter));
        assert_eq!(parse_key("K"), Some(KeyCode::Char('k')));
        assert_eq!(parse_key("f13"), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(&key(KeyCode::Esc)));
        assert!(is_quit_key(&key(KeyCode::Char('q'))));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(&key(KeyCode::Char('c'))));
        assert!(!is_quit_key(&key(KeyCode::Enter)));
    }
}
