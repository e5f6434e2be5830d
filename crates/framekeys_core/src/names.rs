//! Canonical identifier naming for keys and pointer buttons.
//!
//! Keys and buttons share one identifier namespace. Keys are the uppercased
//! raw key string reported by the platform (`"a"` becomes `"A"`, `"ArrowLeft"`
//! becomes `"ARROWLEFT"`, the space bar is a literal `" "`). Buttons are
//! synthesized as `MOUSEBUTTON<index>`, a name no platform key value
//! uppercases to.

use std::fmt;

const MOUSE_BUTTON_PREFIX: &str = "MOUSEBUTTON";

/// Normalizes a raw key string into its identifier form.
pub fn key_identifier(raw: &str) -> String {
    raw.to_uppercase()
}

/// Synthesizes the identifier for a pointer button index.
pub fn button_identifier(index: u16) -> String {
    format!("{MOUSE_BUTTON_PREFIX}{index}")
}

/// Named constants for commonly queried keys.
///
/// Any key the platform reports is tracked, named or not; these only save
/// callers from spelling identifiers by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Tab,
    Enter,
    Shift,
    Control,
    Alt,
    Escape,
    Space,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Key {
    pub const ALL: &'static [Key] = &[
        Key::Tab,
        Key::Enter,
        Key::Shift,
        Key::Control,
        Key::Alt,
        Key::Escape,
        Key::Space,
        Key::ArrowLeft,
        Key::ArrowUp,
        Key::ArrowRight,
        Key::ArrowDown,
        Key::Digit0,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Tab => "TAB",
            Self::Enter => "ENTER",
            Self::Shift => "SHIFT",
            Self::Control => "CONTROL",
            Self::Alt => "ALT",
            Self::Escape => "ESCAPE",
            Self::Space => " ",
            Self::ArrowLeft => "ARROWLEFT",
            Self::ArrowUp => "ARROWUP",
            Self::ArrowRight => "ARROWRIGHT",
            Self::ArrowDown => "ARROWDOWN",
            Self::Digit0 => "0",
            Self::Digit1 => "1",
            Self::Digit2 => "2",
            Self::Digit3 => "3",
            Self::Digit4 => "4",
            Self::Digit5 => "5",
            Self::Digit6 => "6",
            Self::Digit7 => "7",
            Self::Digit8 => "8",
            Self::Digit9 => "9",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pointer buttons by DOM button index (0 primary, 1 auxiliary, 2 secondary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const ALL: &'static [MouseButton] =
        &[MouseButton::Left, MouseButton::Middle, MouseButton::Right];

    pub fn index(self) -> u16 {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "MOUSEBUTTON0",
            Self::Middle => "MOUSEBUTTON1",
            Self::Right => "MOUSEBUTTON2",
        }
    }
}

impl AsRef<str> for MouseButton {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_identifier_uppercases_raw_input() {
        assert_eq!(key_identifier("a"), "A");
        assert_eq!(key_identifier("ArrowLeft"), "ARROWLEFT");
        assert_eq!(key_identifier("Control"), "CONTROL");
        assert_eq!(key_identifier(" "), " ");
        assert_eq!(key_identifier("ß"), "SS");
    }

    #[test]
    fn button_identifier_uses_index_suffix() {
        assert_eq!(button_identifier(0), "MOUSEBUTTON0");
        assert_eq!(button_identifier(4), "MOUSEBUTTON4");
    }

    #[test]
    fn arrow_keys_follow_one_pattern() {
        for key in [Key::ArrowLeft, Key::ArrowUp, Key::ArrowRight, Key::ArrowDown] {
            assert!(key.name().starts_with("ARROW"), "{key:?} -> {}", key.name());
        }
        assert_eq!(Key::ArrowDown.name(), key_identifier("ArrowDown"));
    }

    #[test]
    fn digit_names_match_their_digit() {
        assert_eq!(Key::Digit3.name(), "3");
        assert_eq!(Key::Digit4.name(), "4");
    }

    #[test]
    fn every_key_name_is_already_normalized() {
        for &key in Key::ALL {
            assert_eq!(key_identifier(key.name()), key.name());
        }
    }

    #[test]
    fn key_names_are_unique() {
        let names: HashSet<&str> = Key::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), Key::ALL.len());
    }

    #[test]
    fn mouse_button_names_match_synthesized_identifiers() {
        for &btn in MouseButton::ALL {
            assert_eq!(btn.name(), button_identifier(btn.index()));
        }
        assert_eq!(MouseButton::Left.to_string(), "MOUSEBUTTON0");
        assert_eq!(MouseButton::Right.index(), 2);
    }
}
