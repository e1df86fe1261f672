// src/decoder/mod.rs

//! The incremental escape-sequence decoder.
//!
//! Consumes the byte stream one byte at a time, driving the parameter
//! accumulator and dispatching finished sequences to attribute updates or
//! cursor/grid operations. All parser state lives in the [`Decoder`] value
//! and persists across `write` calls, so a sequence split across chunk
//! boundaries decodes exactly as if the stream arrived in one piece.
//!
//! Malformed or unimplemented sequences never abort decoding: the sequence
//! is abandoned, the state machine drops back to [`State::Ground`], and the
//! condition is surfaced as an [`Anomaly`].

mod sgr;

use log::{trace, warn};

use crate::cell::Attributes;
use crate::error::{Anomaly, DecodeError, Unsupported};
use crate::grid::Grid;

// C0 controls recognized in the ground state.
const BEL: u8 = 0x07;
const BS: u8 = 0x08;
const HT: u8 = 0x09;
const LF: u8 = 0x0A;
const FF: u8 = 0x0C;
const CR: u8 = 0x0D;
const SUB: u8 = 0x1A;
const ESC: u8 = 0x1B;
const DEL: u8 = 0x7F;

/// CSI introducer following ESC.
const CSI_INTRODUCER: u8 = b'[';

/// Decoder states.
///
/// `Done` is absorbing: once the SUB end-of-file marker is seen, every
/// remaining byte belongs to trailer metadata (SAUCE and friends), which a
/// separate reader parses. The decoder only discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// Literal bytes and C0 controls.
    #[default]
    Ground,
    /// ESC received, expecting the CSI introducer.
    Escape,
    /// Inside a CSI sequence: parameter and final bytes.
    Csi,
    /// EOF marker seen; all further input is discarded.
    Done,
}

/// The escape-sequence state machine plus the attribute state it maintains.
#[derive(Debug, Default)]
pub(crate) struct Decoder {
    state: State,
    /// Pending decimal value, folded digit by digit.
    accumulator: u32,
    /// Finalized parameters of the sequence being parsed.
    params: Vec<u16>,
    /// Attributes snapshotted into every written cell.
    attrs: Attributes,
    /// Erase-in-display sequences seen. Accepted syntactically, no grid
    /// effect, but observable so callers can detect them.
    erase_requests: usize,
}

impl Decoder {
    pub(crate) fn new() -> Self {
        Decoder::default()
    }

    /// True once the EOF marker has been consumed.
    pub(crate) fn finished(&self) -> bool {
        self.state == State::Done
    }

    pub(crate) fn erase_requests(&self) -> usize {
        self.erase_requests
    }

    #[cfg(test)]
    pub(crate) fn attributes(&self) -> Attributes {
        self.attrs
    }

    /// Feeds one byte through the state machine.
    ///
    /// Returns a recoverable anomaly if the byte exposed one; allocation
    /// failure while growing the grid or the parameter buffer propagates as
    /// `Err`.
    pub(crate) fn feed(
        &mut self,
        byte: u8,
        grid: &mut Grid,
    ) -> Result<Option<Anomaly>, DecodeError> {
        match self.state {
            State::Ground => self.feed_ground(byte, grid),
            State::Escape => Ok(self.feed_escape(byte)),
            State::Csi => self.feed_csi(byte, grid),
            State::Done => Ok(None),
        }
    }

    fn feed_ground(&mut self, byte: u8, grid: &mut Grid) -> Result<Option<Anomaly>, DecodeError> {
        match byte {
            BEL => {}
            BS => grid.backspace(),
            HT => grid.tab(),
            // FF has no meaning without pages; degrade to a line break.
            LF | FF => grid.line_feed(),
            CR => grid.carriage_return(),
            SUB => {
                trace!("EOF marker, entering Done state");
                self.state = State::Done;
            }
            ESC => self.state = State::Escape,
            DEL => {}
            _ => grid.write_cell(byte, self.attrs)?,
        }
        Ok(None)
    }

    fn feed_escape(&mut self, byte: u8) -> Option<Anomaly> {
        if byte == CSI_INTRODUCER {
            self.state = State::Csi;
            self.accumulator = 0;
            self.params.clear();
            return None;
        }
        // Fe sequences other than CSI never show up in ANSI art; abandon and
        // resume at the next byte.
        warn!("unsupported escape introducer 0x{:02X}", byte);
        self.state = State::Ground;
        Some(Anomaly::UnsupportedSequence(Unsupported::EscapeIntroducer(
            byte,
        )))
    }

    fn feed_csi(&mut self, byte: u8, grid: &mut Grid) -> Result<Option<Anomaly>, DecodeError> {
        match byte {
            b'0'..=b'9' => {
                let value = self.accumulator * 10 + u32::from(byte - b'0');
                if value > u32::from(u16::MAX) {
                    warn!("CSI parameter overflow at {}", value);
                    self.abandon();
                    return Ok(Some(Anomaly::ParameterOverflow { value }));
                }
                self.accumulator = value;
                Ok(None)
            }
            b';' => {
                self.flush_param()?;
                Ok(None)
            }
            b':' | 0x3C..=0x3F => {
                warn!("unsupported CSI parameter byte 0x{:02X}", byte);
                self.abandon();
                Ok(Some(Anomaly::UnsupportedSequence(
                    Unsupported::PrivateParameter(byte),
                )))
            }
            0x20..=0x2F => {
                warn!("unsupported CSI intermediate byte 0x{:02X}", byte);
                self.abandon();
                Ok(Some(Anomaly::UnsupportedSequence(Unsupported::Intermediate(
                    byte,
                ))))
            }
            0x40..=0x6F => {
                self.flush_param()?;
                self.state = State::Ground;
                Ok(self.dispatch(byte, grid))
            }
            _ => {
                // Private finals 0x70-0x7E and anything outside the CSI byte
                // ranges.
                warn!("unsupported CSI final byte 0x{:02X}", byte);
                self.abandon();
                Ok(Some(Anomaly::UnsupportedSequence(Unsupported::FinalByte(
                    byte,
                ))))
            }
        }
    }

    /// Flushes the pending accumulator into the parameter list.
    fn flush_param(&mut self) -> Result<(), DecodeError> {
        self.params
            .try_reserve(1)
            .map_err(|source| DecodeError::Allocation {
                what: "parameter buffer",
                source,
            })?;
        self.params.push(self.accumulator as u16);
        self.accumulator = 0;
        Ok(())
    }

    /// Abandons the in-flight sequence and returns to the ground state.
    fn abandon(&mut self) {
        self.accumulator = 0;
        self.params.clear();
        self.state = State::Ground;
    }

    /// `n`-th parameter with `default` substituted for missing or zero
    /// values, the conventional CSI defaulting rule.
    fn param_or(&self, n: usize, default: u16) -> u16 {
        match self.params.get(n).copied() {
            Some(0) | None => default,
            Some(v) => v,
        }
    }

    /// Dispatches a completed sequence on its final byte.
    fn dispatch(&mut self, final_byte: u8, grid: &mut Grid) -> Option<Anomaly> {
        trace!("CSI dispatch 0x{:02X} params {:?}", final_byte, self.params);
        match final_byte {
            b'A' => {
                grid.cursor_up(usize::from(self.param_or(0, 1)));
                None
            }
            b'B' => {
                grid.cursor_down(usize::from(self.param_or(0, 1)));
                None
            }
            b'C' => {
                grid.cursor_forward(usize::from(self.param_or(0, 1)));
                None
            }
            b'G' => {
                // 1-based absolute column.
                grid.set_column(usize::from(self.param_or(0, 1)) - 1);
                None
            }
            b'H' => {
                // 1-based row;col, both defaulting to 1.
                let row = usize::from(self.param_or(0, 1)) - 1;
                let col = usize::from(self.param_or(1, 1)) - 1;
                grid.move_to(row, col);
                None
            }
            b'J' => {
                // Some documents open with an erase; accept it, count it, do
                // nothing. The grid starts blank and never scrolls, so there
                // is nothing to erase.
                self.erase_requests += 1;
                None
            }
            b'm' => sgr::apply(&mut self.attrs, &self.params),
            other => {
                warn!("unimplemented CSI final byte 0x{:02X}", other);
                Some(Anomaly::UnsupportedSequence(Unsupported::FinalByte(other)))
            }
        }
    }
}
