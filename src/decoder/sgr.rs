// src/decoder/sgr.rs

//! The graphic-rendition (SGR) resolver.
//!
//! Applies a finished parameter list to the current attribute state, in list
//! order, so later parameters override earlier ones touching the same field.

use log::warn;

use crate::cell::{AttrFlags, Attributes};
use crate::color::Color;
use crate::error::{Anomaly, Unsupported};

/// Applies `params` to `attrs` in order.
///
/// An empty list is a full reset (SGR 0). The first unsupported code aborts
/// the remainder of the list: extended-color selectors (38/48/58) consume the
/// parameters after them as arguments, so applying what follows a code we do
/// not understand would misinterpret the sequence.
pub(super) fn apply(attrs: &mut Attributes, params: &[u16]) -> Option<Anomaly> {
    if params.is_empty() {
        *attrs = Attributes::default();
        return None;
    }

    for &param in params {
        match param {
            0 => *attrs = Attributes::default(),

            // Flag-setting codes.
            1 => attrs.flags.insert(AttrFlags::BOLD),
            2 => attrs.flags.insert(AttrFlags::FAINT),
            3 => attrs.flags.insert(AttrFlags::ITALIC),
            4 => attrs.flags.insert(AttrFlags::UNDERLINE),
            5 => attrs.flags.insert(AttrFlags::SLOW_BLINK),
            6 => attrs.flags.insert(AttrFlags::RAPID_BLINK),
            7 => attrs.flags.insert(AttrFlags::INVERT),
            8 => attrs.flags.insert(AttrFlags::CONCEAL),
            9 => attrs.flags.insert(AttrFlags::STRIKEOUT),
            21 => attrs.flags.insert(AttrFlags::DOUBLE_UNDERLINE),
            51 => attrs.flags.insert(AttrFlags::FRAMED),
            52 => attrs.flags.insert(AttrFlags::ENCIRCLED),
            53 => attrs.flags.insert(AttrFlags::OVERLINED),
            60 => attrs.flags.insert(AttrFlags::IDEOGRAM_UNDERLINE),
            61 => attrs.flags.insert(AttrFlags::IDEOGRAM_DOUBLE_UNDERLINE),
            62 => attrs.flags.insert(AttrFlags::IDEOGRAM_OVERLINE),
            63 => attrs.flags.insert(AttrFlags::IDEOGRAM_DOUBLE_OVERLINE),
            64 => attrs.flags.insert(AttrFlags::IDEOGRAM_STRESS),
            73 => attrs.flags.insert(AttrFlags::SUPERSCRIPT),
            74 => attrs.flags.insert(AttrFlags::SUBSCRIPT),

            // Paired un-set codes.
            22 => attrs.flags.remove(AttrFlags::BOLD | AttrFlags::FAINT),
            23 => attrs.flags.remove(AttrFlags::ITALIC),
            24 => attrs
                .flags
                .remove(AttrFlags::UNDERLINE | AttrFlags::DOUBLE_UNDERLINE),
            25 => attrs
                .flags
                .remove(AttrFlags::SLOW_BLINK | AttrFlags::RAPID_BLINK),
            26 | 50 => attrs.flags.remove(AttrFlags::PROPORTIONAL),
            27 => attrs.flags.remove(AttrFlags::INVERT),
            28 => attrs.flags.remove(AttrFlags::CONCEAL),
            29 => attrs.flags.remove(AttrFlags::STRIKEOUT),
            54 => attrs.flags.remove(AttrFlags::FRAMED | AttrFlags::ENCIRCLED),
            55 => attrs.flags.remove(AttrFlags::OVERLINED),
            65 => attrs.flags.remove(
                AttrFlags::IDEOGRAM_UNDERLINE
                    | AttrFlags::IDEOGRAM_DOUBLE_UNDERLINE
                    | AttrFlags::IDEOGRAM_OVERLINE
                    | AttrFlags::IDEOGRAM_DOUBLE_OVERLINE
                    | AttrFlags::IDEOGRAM_STRESS,
            ),
            75 => attrs
                .flags
                .remove(AttrFlags::SUPERSCRIPT | AttrFlags::SUBSCRIPT),

            // Base colors. The range guards make the offset lookup
            // infallible.
            30..=37 => {
                if let Some(color) = Color::from_sgr_offset(param - 30) {
                    attrs.fg = color;
                }
            }
            40..=47 => {
                if let Some(color) = Color::from_sgr_offset(param - 40) {
                    attrs.bg = color;
                }
            }

            // Fonts (10-20), extended/indexed color (38/48/58), default-color
            // resets (39/49/59), bright aliases (90-97, 100-107), and
            // everything unassigned: not guessed at.
            other => {
                warn!("unsupported SGR code {}", other);
                return Some(Anomaly::UnsupportedSequence(Unsupported::SgrCode(other)));
            }
        }
    }

    None
}
