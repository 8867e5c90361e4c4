//! Key and mouse button codes, and the key/char decoding rules
//!
//! GLFW reports printable keys with their 8-bit ISO-8859-1 (Latin-1) code and
//! special keys with codes of 256 and above. The binding surfaces every code
//! below 256 as a [`KeyValue::Char`] and everything else as a
//! [`KeyValue::Code`], so the symbolic constants below must stay out of the
//! `[0, 256)` range. `SPACE` (32) and the `WORLD_1`/`WORLD_2` keys (161, 162)
//! are deliberately not exported: comparing against them would never match a
//! decoded `Char(' ')`.

use crate::types::{BindingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key code GLFW reports when it cannot identify a key
pub const UNKNOWN: i32 = -1;

// Function keys
pub const ESCAPE: i32 = 256;
pub const ENTER: i32 = 257;
pub const TAB: i32 = 258;
pub const BACKSPACE: i32 = 259;
pub const INSERT: i32 = 260;
pub const DELETE: i32 = 261;
pub const RIGHT: i32 = 262;
pub const LEFT: i32 = 263;
pub const DOWN: i32 = 264;
pub const UP: i32 = 265;
pub const PAGE_UP: i32 = 266;
pub const PAGE_DOWN: i32 = 267;
pub const HOME: i32 = 268;
pub const END: i32 = 269;
pub const CAPS_LOCK: i32 = 280;
pub const SCROLL_LOCK: i32 = 281;
pub const NUM_LOCK: i32 = 282;
pub const PRINT_SCREEN: i32 = 283;
pub const PAUSE: i32 = 284;
pub const F1: i32 = 290;
pub const F2: i32 = 291;
pub const F3: i32 = 292;
pub const F4: i32 = 293;
pub const F5: i32 = 294;
pub const F6: i32 = 295;
pub const F7: i32 = 296;
pub const F8: i32 = 297;
pub const F9: i32 = 298;
pub const F10: i32 = 299;
pub const F11: i32 = 300;
pub const F12: i32 = 301;
pub const F13: i32 = 302;
pub const F14: i32 = 303;
pub const F15: i32 = 304;
pub const F16: i32 = 305;
pub const F17: i32 = 306;
pub const F18: i32 = 307;
pub const F19: i32 = 308;
pub const F20: i32 = 309;
pub const F21: i32 = 310;
pub const F22: i32 = 311;
pub const F23: i32 = 312;
pub const F24: i32 = 313;
pub const F25: i32 = 314;

// Keypad
pub const KP_0: i32 = 320;
pub const KP_1: i32 = 321;
pub const KP_2: i32 = 322;
pub const KP_3: i32 = 323;
pub const KP_4: i32 = 324;
pub const KP_5: i32 = 325;
pub const KP_6: i32 = 326;
pub const KP_7: i32 = 327;
pub const KP_8: i32 = 328;
pub const KP_9: i32 = 329;
pub const KP_DECIMAL: i32 = 330;
pub const KP_DIVIDE: i32 = 331;
pub const KP_MULTIPLY: i32 = 332;
pub const KP_SUBTRACT: i32 = 333;
pub const KP_ADD: i32 = 334;
pub const KP_ENTER: i32 = 335;
pub const KP_EQUAL: i32 = 336;

// Modifier keys
pub const LEFT_SHIFT: i32 = 340;
pub const LEFT_CONTROL: i32 = 341;
pub const LEFT_ALT: i32 = 342;
pub const LEFT_SUPER: i32 = 343;
pub const RIGHT_SHIFT: i32 = 344;
pub const RIGHT_CONTROL: i32 = 345;
pub const RIGHT_ALT: i32 = 346;
pub const RIGHT_SUPER: i32 = 347;
pub const MENU: i32 = 348;
pub const LAST: i32 = MENU;

// Mouse buttons
pub const MOUSE_BUTTON_1: i32 = 0;
pub const MOUSE_BUTTON_2: i32 = 1;
pub const MOUSE_BUTTON_3: i32 = 2;
pub const MOUSE_BUTTON_4: i32 = 3;
pub const MOUSE_BUTTON_5: i32 = 4;
pub const MOUSE_BUTTON_6: i32 = 5;
pub const MOUSE_BUTTON_7: i32 = 6;
pub const MOUSE_BUTTON_8: i32 = 7;
pub const MOUSE_BUTTON_LAST: i32 = MOUSE_BUTTON_8;
pub const MOUSE_BUTTON_LEFT: i32 = MOUSE_BUTTON_1;
pub const MOUSE_BUTTON_RIGHT: i32 = MOUSE_BUTTON_2;
pub const MOUSE_BUTTON_MIDDLE: i32 = MOUSE_BUTTON_3;

/// Every exported symbolic key constant, by name
pub const SYMBOLIC_KEYS: &[(&str, i32)] = &[
    ("ESCAPE", ESCAPE),
    ("ENTER", ENTER),
    ("TAB", TAB),
    ("BACKSPACE", BACKSPACE),
    ("INSERT", INSERT),
    ("DELETE", DELETE),
    ("RIGHT", RIGHT),
    ("LEFT", LEFT),
    ("DOWN", DOWN),
    ("UP", UP),
    ("PAGE_UP", PAGE_UP),
    ("PAGE_DOWN", PAGE_DOWN),
    ("HOME", HOME),
    ("END", END),
    ("CAPS_LOCK", CAPS_LOCK),
    ("SCROLL_LOCK", SCROLL_LOCK),
    ("NUM_LOCK", NUM_LOCK),
    ("PRINT_SCREEN", PRINT_SCREEN),
    ("PAUSE", PAUSE),
    ("F1", F1),
    ("F2", F2),
    ("F3", F3),
    ("F4", F4),
    ("F5", F5),
    ("F6", F6),
    ("F7", F7),
    ("F8", F8),
    ("F9", F9),
    ("F10", F10),
    ("F11", F11),
    ("F12", F12),
    ("F13", F13),
    ("F14", F14),
    ("F15", F15),
    ("F16", F16),
    ("F17", F17),
    ("F18", F18),
    ("F19", F19),
    ("F20", F20),
    ("F21", F21),
    ("F22", F22),
    ("F23", F23),
    ("F24", F24),
    ("F25", F25),
    ("KP_0", KP_0),
    ("KP_1", KP_1),
    ("KP_2", KP_2),
    ("KP_3", KP_3),
    ("KP_4", KP_4),
    ("KP_5", KP_5),
    ("KP_6", KP_6),
    ("KP_7", KP_7),
    ("KP_8", KP_8),
    ("KP_9", KP_9),
    ("KP_DECIMAL", KP_DECIMAL),
    ("KP_DIVIDE", KP_DIVIDE),
    ("KP_MULTIPLY", KP_MULTIPLY),
    ("KP_SUBTRACT", KP_SUBTRACT),
    ("KP_ADD", KP_ADD),
    ("KP_ENTER", KP_ENTER),
    ("KP_EQUAL", KP_EQUAL),
    ("LEFT_SHIFT", LEFT_SHIFT),
    ("LEFT_CONTROL", LEFT_CONTROL),
    ("LEFT_ALT", LEFT_ALT),
    ("LEFT_SUPER", LEFT_SUPER),
    ("RIGHT_SHIFT", RIGHT_SHIFT),
    ("RIGHT_CONTROL", RIGHT_CONTROL),
    ("RIGHT_ALT", RIGHT_ALT),
    ("RIGHT_SUPER", RIGHT_SUPER),
    ("MENU", MENU),
];

/// First code that is not a printable Latin-1 character
pub const PRINTABLE_LIMIT: i32 = 256;

/// Symbolic keys whose code falls in the printable range
///
/// Any entry here would make [`decode_key`] ambiguous. The exported table is
/// expected to produce an empty list.
pub fn printable_range_collisions() -> Vec<(&'static str, i32)> {
    SYMBOLIC_KEYS
        .iter()
        .copied()
        .filter(|(_, code)| (0..PRINTABLE_LIMIT).contains(code))
        .collect()
}

/// Look up the name of a symbolic key code
pub fn key_name(code: i32) -> Option<&'static str> {
    SYMBOLIC_KEYS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// A decoded key: printable character or symbolic code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyValue {
    /// Printable key, code point in `[0, 256)`
    Char(char),
    /// Symbolic key (256 and above, or [`UNKNOWN`])
    Code(i32),
}

impl KeyValue {
    /// Native key code for `glfwGetKey`
    ///
    /// Characters are matched case-insensitively, the way GLFW names its
    /// printable keys after their uppercase glyph.
    pub fn to_native(self) -> Result<i32> {
        match self {
            KeyValue::Char(c) => {
                let code = c.to_ascii_uppercase() as u32;
                if code < PRINTABLE_LIMIT as u32 {
                    Ok(code as i32)
                } else {
                    Err(BindingError::InvalidArgument(format!(
                        "key {:?} is not a Latin-1 character",
                        c
                    )))
                }
            }
            KeyValue::Code(code) if key_name(code).is_some() => Ok(code),
            KeyValue::Code(code) => Err(BindingError::InvalidArgument(format!(
                "key must be one of the key codes or a one-character Latin-1 string, got {}",
                code
            ))),
        }
    }

    /// The character, if this is a printable key
    pub fn as_char(&self) -> Option<char> {
        match self {
            KeyValue::Char(c) => Some(*c),
            KeyValue::Code(_) => None,
        }
    }
}

impl From<char> for KeyValue {
    fn from(c: char) -> Self {
        KeyValue::Char(c)
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Char(c) => write!(f, "{:?}", c),
            KeyValue::Code(code) => match key_name(*code) {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "{}", code),
            },
        }
    }
}

/// Decode a key code from the key callback
pub fn decode_key(code: i32) -> KeyValue {
    if (0..PRINTABLE_LIMIT).contains(&code) {
        KeyValue::Char(char::from(code as u8))
    } else {
        KeyValue::Code(code)
    }
}

/// Decode a code point from the char callback
///
/// Values below 256 map to the Latin-1 character with the same code point.
/// Anything that is not a Unicode scalar value becomes U+FFFD.
pub fn decode_char(code: u32) -> char {
    char::from_u32(code).unwrap_or_else(|| {
        log::warn!("Char callback delivered invalid code point 0x{:X}", code);
        char::REPLACEMENT_CHARACTER
    })
}
