// src/cell.rs

//! Defines the `Cell` type, its visual attributes (`AttrFlags`, `Attributes`),
//! and related constants.
//!
//! A `Cell` is one character position in the decoded grid: the raw character
//! code plus a snapshot of all styling that was in effect when it was
//! written. Color definitions are found in the `crate::color` module.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text attribute flags toggled by SGR parameters.
    ///
    /// Every flag is independent; the decoder sets and clears them
    /// individually as rendition parameters arrive. Several flags
    /// (proportional, framed, the ideogram group, ...) are rarely honored by
    /// renderers but are tracked faithfully so a capable renderer can use
    /// them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrFlags: u32 {
        const BOLD                      = 1 << 0;
        const FAINT                     = 1 << 1;
        const ITALIC                    = 1 << 2;
        const UNDERLINE                 = 1 << 3;
        const SLOW_BLINK                = 1 << 4;
        const RAPID_BLINK               = 1 << 5;
        const INVERT                    = 1 << 6;
        const CONCEAL                   = 1 << 7;
        const STRIKEOUT                 = 1 << 8;
        const DOUBLE_UNDERLINE          = 1 << 9;
        const PROPORTIONAL              = 1 << 10;
        const FRAMED                    = 1 << 11;
        const ENCIRCLED                 = 1 << 12;
        const OVERLINED                 = 1 << 13;
        const IDEOGRAM_UNDERLINE        = 1 << 14;
        const IDEOGRAM_DOUBLE_UNDERLINE = 1 << 15;
        const IDEOGRAM_OVERLINE         = 1 << 16;
        const IDEOGRAM_DOUBLE_OVERLINE  = 1 << 17;
        const IDEOGRAM_STRESS           = 1 << 18;
        const SUPERSCRIPT               = 1 << 19;
        const SUBSCRIPT                 = 1 << 20;
    }
}

/// The visual attributes of a cell: foreground color, background color, and
/// styling flags. Exactly one fg and one bg value are active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attributes {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Styling flags (bold, underline, blink, ...).
    pub flags: AttrFlags,
}

impl Default for Attributes {
    /// White on black with no flags, the state an ANSI document starts in and
    /// the state SGR 0 restores.
    fn default() -> Self {
        Attributes {
            fg: Color::White,
            bg: Color::Black,
            flags: AttrFlags::empty(),
        }
    }
}

/// A single character position in the decoded grid.
///
/// The character code is a raw byte; code-page interpretation (typically
/// CP437 for BBS art) is left to the renderer. The attributes are an
/// immutable copy of the state at write time: later SGR sequences never
/// retroactively restyle written cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Raw character code as it appeared in the stream.
    pub code: u8,
    /// Snapshot of the attributes active when the cell was written.
    pub attr: Attributes,
}

/// Blank cell used for never-written positions: NUL code, default attributes.
pub const BLANK_CELL: Cell = Cell {
    code: 0,
    attr: Attributes {
        fg: Color::White,
        bg: Color::Black,
        flags: AttrFlags::empty(),
    },
};

impl Default for Cell {
    fn default() -> Self {
        BLANK_CELL
    }
}

impl Cell {
    /// True if this cell was never written (or written as NUL).
    pub fn is_blank(&self) -> bool {
        self.code == 0
    }
}
