// src/color.rs

//! Defines the `Color` enum for the 8 base ANSI colors.

use serde::{Deserialize, Serialize};

/// The 8 base ANSI colors selectable via SGR 30-37 (foreground) and
/// 40-47 (background).
///
/// Classic ANSI art targets the 16-color CGA palette, but the bright half is
/// reached through the bold/blink attributes rather than dedicated color
/// codes, so only the base 8 are represented here. Mapping to concrete RGB
/// values is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// Converts an SGR color offset (0-7, i.e. the parameter minus 30 or 40)
    /// to a `Color`. Returns `None` for out-of-range offsets.
    pub fn from_sgr_offset(offset: u16) -> Option<Self> {
        match offset {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }
}
