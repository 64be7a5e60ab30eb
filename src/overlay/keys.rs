//! Keyboard and pointer routing from the host UI runtime to overlay events.
//!
//! Two listeners exist in a browser-style host: a global one (active for the
//! lifetime of the hosting view) and one on the search input. The global
//! listener only cares about the open-trigger shortcut and Escape; arrows and
//! Enter are handled only while the input has focus.

use crate::error::ShortcutError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::state::OverlayEvent;

/// Letters that browsers or operating systems claim when combined with the
/// primary modifier (new tab, close tab, quit, reload, address bar, print,
/// find, save, history, downloads, bookmark).
///
/// Non-letter combos such as primary+tab never get this far: `Shortcut::new`
/// rejects any key that is not an ASCII letter.
const RESERVED_PRIMARY_KEYS: &[char] = &['t', 'w', 'n', 'q', 'r', 'l', 'p', 'f', 's', 'h', 'j', 'd'];

/// A keyboard modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Control,
    /// Command on macOS, Windows/Super elsewhere
    Meta,
    Alt,
    Shift,
}

impl Modifier {
    /// The platform-conventional modifier for application shortcuts.
    pub const fn primary() -> Self {
        if cfg!(target_os = "macos") { Self::Meta } else { Self::Control }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Control => "ctrl",
            Self::Meta => "cmd",
            Self::Alt => "alt",
            Self::Shift => "shift",
        }
    }
}

impl FromStr for Modifier {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mod" | "primary" => Ok(Self::primary()),
            "ctrl" | "control" => Ok(Self::Control),
            "cmd" | "command" | "meta" | "super" => Ok(Self::Meta),
            "alt" | "option" => Ok(Self::Alt),
            "shift" => Ok(Self::Shift),
            other => Err(ShortcutError::UnknownModifier(other.to_string())),
        }
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        control: false,
        meta: false,
        alt: false,
        shift: false,
    };

    /// Only the given modifier held.
    pub const fn only(modifier: Modifier) -> Self {
        let mut held = Self::NONE;
        match modifier {
            Modifier::Control => held.control = true,
            Modifier::Meta => held.meta = true,
            Modifier::Alt => held.alt = true,
            Modifier::Shift => held.shift = true,
        }
        held
    }
}

/// The open-trigger combination: Control or Meta plus one letter.
///
/// Alt and Shift are not accepted since they produce characters while
/// typing (Shift+P is a capital P, Option+letter types symbols on macOS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub modifier: Modifier,
    /// Lower-case ASCII letter
    pub key: char,
}

impl Shortcut {
    /// Build a shortcut, rejecting typing modifiers, non-letters and reserved
    /// combinations.
    pub fn new(modifier: Modifier, key: char) -> Result<Self, ShortcutError> {
        if !key.is_ascii_alphabetic() {
            return Err(ShortcutError::InvalidKey(key.to_string()));
        }
        let shortcut = Self {
            modifier,
            key: key.to_ascii_lowercase(),
        };
        if matches!(modifier, Modifier::Alt | Modifier::Shift) {
            return Err(ShortcutError::TypingModifier(shortcut.to_string()));
        }
        if shortcut.is_reserved() {
            return Err(ShortcutError::Reserved(shortcut.to_string()));
        }
        Ok(shortcut)
    }

    /// Whether a key press triggers this shortcut.
    ///
    /// The letter is compared case-insensitively; other modifiers must not be
    /// held.
    pub fn matches(&self, press: &KeyPress) -> bool {
        matches!(press.key, Key::Char(c) if c.eq_ignore_ascii_case(&self.key))
            && press.modifiers == Modifiers::only(self.modifier)
    }

    fn is_reserved(&self) -> bool {
        RESERVED_PRIMARY_KEYS.contains(&self.key)
    }
}

impl Default for Shortcut {
    /// Platform-conventional "quick open": Cmd+K on macOS, Ctrl+K elsewhere.
    fn default() -> Self {
        Self {
            modifier: Modifier::primary(),
            key: 'k',
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.modifier.as_str(), self.key)
    }
}

impl FromStr for Shortcut {
    type Err = ShortcutError;

    /// Parse strings like `mod+k`, `ctrl+k`, `Cmd + K`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutError::Empty);
        }

        let Some((modifier, key)) = s.rsplit_once('+') else {
            return Err(ShortcutError::MissingModifier(s.to_string()));
        };

        let modifier: Modifier = modifier.trim().parse()?;
        let key = key.trim();
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(modifier, c),
            _ => Err(ShortcutError::InvalidKey(key.to_string())),
        }
    }
}

impl Serialize for Shortcut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Shortcut {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A key as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
    Other,
}

/// One key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Whether the overlay's search input currently has focus
    pub input_focused: bool,
}

impl KeyPress {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            input_focused: false,
        }
    }

    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub const fn in_input(mut self) -> Self {
        self.input_focused = true;
        self
    }
}

/// Raw input delivered by the host UI runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Key(KeyPress),
    InputChanged(String),
    PointerDownOutside,
    CloseClicked,
    ResultHovered(usize),
    ResultClicked(usize),
}

/// Map a host event to a state-machine event.
///
/// Returns `None` for input the overlay does not care about.
pub fn route(event: HostEvent, shortcut: &Shortcut, is_open: bool) -> Option<OverlayEvent> {
    match event {
        HostEvent::Key(press) => route_key(&press, shortcut, is_open),
        HostEvent::InputChanged(query) => Some(OverlayEvent::QueryChanged(query)),
        HostEvent::PointerDownOutside | HostEvent::CloseClicked => Some(OverlayEvent::Close),
        HostEvent::ResultHovered(row) => Some(OverlayEvent::Hover(row)),
        HostEvent::ResultClicked(row) => Some(OverlayEvent::Activate(row)),
    }
}

fn route_key(press: &KeyPress, shortcut: &Shortcut, is_open: bool) -> Option<OverlayEvent> {
    // Global listener
    if shortcut.matches(press) {
        return (!is_open).then_some(OverlayEvent::Open);
    }
    if press.key == Key::Escape {
        return is_open.then_some(OverlayEvent::Close);
    }

    // Input listener
    if !(is_open && press.input_focused) {
        return None;
    }
    match press.key {
        Key::ArrowDown => Some(OverlayEvent::SelectNext),
        Key::ArrowUp => Some(OverlayEvent::SelectPrevious),
        Key::Enter => Some(OverlayEvent::Confirm),
        _ => None,
    }
}
