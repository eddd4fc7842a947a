//! Type-safe key bindings for component navigation.
//!
//! A [`Binding`] groups the key presses that trigger an action together with
//! the help text shown for it. Components expose their bindings through a
//! keymap struct implementing the [`KeyMap`] trait, which help renderers can
//! consume to build short or full help views.
//!
//! Bindings can be built directly from key codes:
//!
//! ```rust
//! use motif_widgets::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
//!     .with_help("→/l", "next page");
//! ```
//!
//! or from the option-style constructors, which accept human-readable key
//! names such as `"pgup"` or `"ctrl+c"`:
//!
//! ```rust
//! use motif_widgets::key;
//!
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["q", "ctrl+c"]),
//!     key::with_help("q", "quit"),
//! ]);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding: the key legend and a short action description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display form of the keys, e.g. `"←/h"`.
    pub key: String,
    /// Short description of the action, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of key presses bound to one action, with optional help text.
///
/// Disabled bindings never match and are skipped by help renderers.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from a list of key presses.
    ///
    /// Accepts plain [`KeyCode`]s as well as `(KeyCode, KeyModifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help legend and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns true if the key event triggers this binding.
    ///
    /// A disabled binding matches nothing.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        !self.disabled
            && self
                .keys
                .iter()
                .any(|k| k.code == key_msg.key && k.mods == key_msg.modifiers)
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key presses this binding listens for.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns true unless the binding has been disabled.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// An option applied by [`new_binding`] while constructing a [`Binding`].
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Adds key presses to the binding.
    Keys(Vec<KeyPress>),
    /// Sets the binding's help text.
    Help(Help),
    /// Marks the binding as disabled.
    Disabled,
}

/// Creates a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::new(Vec::<KeyPress>::new());
    for opt in opts {
        match opt {
            BindingOpt::Keys(mut keys) => binding.keys.append(&mut keys),
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option adding key presses given as key codes.
pub fn with_keys(keys: &[KeyCode]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().copied().map(KeyPress::from).collect())
}

/// Option adding key presses given by name.
///
/// Recognizes named keys (`"left"`, `"pgup"`, `"enter"`, ...), single
/// characters, and `ctrl+`/`alt+`/`shift+` prefixes. Unrecognized names are
/// skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|s| parse_key(s)).collect())
}

/// Option setting a binding's help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Option marking a binding as disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Returns true if the key event triggers the binding.
pub fn matches_binding(key_msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(key_msg)
}

/// Returns true if the key event triggers any of the bindings.
pub fn matches(key_msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(key_msg))
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = s;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }
    let code = match rest {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress { code, mods })
}

/// Exposes a component's key bindings for help rendering.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches_any_key() {
        let binding = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]);
        assert!(binding.matches(&key(KeyCode::Right)));
        assert!(binding.matches(&key(KeyCode::Char('l'))));
        assert!(!binding.matches(&key(KeyCode::Left)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let binding = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(!binding.matches(&key(KeyCode::Char('c'))));
        assert!(binding.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]);
        binding.set_enabled(false);
        assert!(!binding.matches(&key(KeyCode::Enter)));
        binding.set_enabled(true);
        assert!(binding.matches(&key(KeyCode::Enter)));
    }

    #[test]
    fn test_with_keys_str_parses_names() {
        let binding = new_binding(vec![
            with_keys_str(&["pgup", "left", "h"]),
            with_help("←/h", "prev page"),
        ]);
        assert_eq!(binding.keys().len(), 3);
        assert!(binding.matches(&key(KeyCode::PageUp)));
        assert!(binding.matches(&key(KeyCode::Char('h'))));
        assert_eq!(binding.help().key, "←/h");
    }

    #[test]
    fn test_with_keys_str_parses_modifiers() {
        let binding = new_binding(vec![with_keys_str(&["ctrl+c"])]);
        assert!(binding.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert!(!binding.matches(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_with_keys_str_skips_unknown_names() {
        let binding = new_binding(vec![with_keys_str(&["bogus-key", "enter"])]);
        assert_eq!(binding.keys().len(), 1);
    }

    #[test]
    fn test_matches_over_binding_set() {
        let up = Binding::new(vec![KeyCode::Up]);
        let down = Binding::new(vec![KeyCode::Down]);
        assert!(matches(&key(KeyCode::Down), &[&up, &down]));
        assert!(!matches(&key(KeyCode::Enter), &[&up, &down]));
    }
}
