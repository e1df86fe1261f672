// src/error.rs

//! Error and anomaly types for the decoder.
//!
//! Two severities exist. [`DecodeError`] is fatal to the current `write` call
//! (though never to the document, which stays valid and queryable) and is
//! propagated through `Result`. [`Anomaly`] values are recoverable input
//! defects: the offending sequence is abandoned, decoding resumes at the next
//! byte, and the condition is reported to the caller. Legacy documents are
//! full of malformed and vendor-specific sequences, so anomalies must never
//! abort processing.

use std::collections::TryReserveError;

use thiserror::Error;

/// Fatal decoding errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Growing the row index, a row's cell storage, or the parameter buffer
    /// could not be satisfied. Everything written before the failure remains
    /// intact; the in-flight character or sequence is lost.
    #[error("allocation failure while growing {what}")]
    Allocation {
        /// Which storage was being grown.
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

/// A recoverable input defect encountered while decoding.
///
/// Anomalies are collected into the [`WriteReport`](crate::WriteReport) of
/// the `write` call that observed them and also tallied on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// An accumulated numeric parameter exceeded the representable range
    /// (`u16`). The sequence was abandoned. `value` is the partial value at
    /// the point of overflow.
    ParameterOverflow { value: u32 },
    /// A recognized-but-unimplemented or malformed sequence. The sequence
    /// was abandoned.
    UnsupportedSequence(Unsupported),
}

/// What made a sequence unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// The byte following ESC was not the CSI introducer `[`.
    EscapeIntroducer(u8),
    /// A `:` sub-parameter delimiter or private parameter byte (0x3A,
    /// 0x3C-0x3F) appeared in a sequence.
    PrivateParameter(u8),
    /// An intermediate byte (0x20-0x2F) appeared in a sequence.
    Intermediate(u8),
    /// A final command byte with no implementation, including the private
    /// range 0x70-0x7E.
    FinalByte(u8),
    /// A graphic-rendition code outside the implemented set, e.g. extended
    /// color selection (38/48), default-color resets (39/49), or the bright
    /// aixterm aliases (90-97, 100-107).
    SgrCode(u16),
}
