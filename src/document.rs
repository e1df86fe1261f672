// src/document.rs

//! The `Document` façade: decoder + grid + persistent parser state.

use log::trace;

use crate::cell::Cell;
use crate::config::Config;
use crate::decoder::Decoder;
use crate::error::{Anomaly, DecodeError};
use crate::grid::{Grid, Row};

/// Per-call outcome of [`Document::write`].
///
/// Fatal errors travel through `Result`; everything recoverable or merely
/// informational lands here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Recoverable input defects observed in this chunk, in stream order.
    pub anomalies: Vec<Anomaly>,
    /// Offset into this chunk where trailer bytes begin, set when the EOF
    /// marker has been seen. The decoder discards the trailer; callers
    /// wanting SAUCE metadata hand `&chunk[offset..]` to their own reader.
    /// `Some(chunk.len())` means the marker was seen but no trailer bytes
    /// arrived yet.
    pub trailer_start: Option<usize>,
}

impl WriteReport {
    /// True if the chunk decoded without any anomaly.
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }
}

/// A decoded ANSI-art document.
///
/// Feed it raw bytes, possibly in chunks, then query the resolved grid for
/// drawing. Parser state persists across [`write`](Document::write) calls, so
/// any chunking of a stream produces the same grid as one concatenated call.
///
/// Not internally synchronized; `&mut self` on every mutator makes a
/// document single-writer by construction.
#[derive(Debug)]
pub struct Document {
    grid: Grid,
    decoder: Decoder,
    config: Config,
    unsupported_sequences: usize,
    parameter_overflows: usize,
}

impl Document {
    /// Creates an empty document: no rows, default white-on-black attributes,
    /// decoder in its ground state.
    pub fn new(config: Config) -> Self {
        Document {
            grid: Grid::new(&config),
            decoder: Decoder::new(),
            config,
            unsupported_sequences: 0,
            parameter_overflows: 0,
        }
    }

    /// Creates a document and primes it with an initial chunk.
    pub fn with_bytes(config: Config, bytes: &[u8]) -> Result<(Self, WriteReport), DecodeError> {
        let mut doc = Document::new(config);
        let report = doc.write(bytes)?;
        Ok((doc, report))
    }

    /// Decodes a chunk of the stream into the grid.
    ///
    /// On allocation failure the document remains valid and queryable:
    /// everything decoded before the failure is intact, only the in-flight
    /// character or sequence is lost.
    pub fn write(&mut self, bytes: &[u8]) -> Result<WriteReport, DecodeError> {
        let mut report = WriteReport::default();

        for (i, &byte) in bytes.iter().enumerate() {
            if self.decoder.finished() {
                report.trailer_start = Some(i);
                trace!("discarding {} trailer bytes", bytes.len() - i);
                break;
            }
            if let Some(anomaly) = self.decoder.feed(byte, &mut self.grid)? {
                match anomaly {
                    Anomaly::ParameterOverflow { .. } => self.parameter_overflows += 1,
                    Anomaly::UnsupportedSequence(_) => self.unsupported_sequences += 1,
                }
                report.anomalies.push(anomaly);
            }
        }

        if self.decoder.finished() && report.trailer_start.is_none() {
            report.trailer_start = Some(bytes.len());
        }
        Ok(report)
    }

    // --- Read accessors for the renderer ---

    /// Written height of the grid, in rows.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Written width of row `row`, 0 for rows never written.
    pub fn row_width(&self, row: usize) -> usize {
        self.grid.row_width(row)
    }

    /// The row at `row`, if anything was ever written to it.
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.grid.row(row)
    }

    /// The cell at (`row`, `col`), if within the written extent of its row.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.cell(row, col)
    }

    /// The configuration this document was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True once the EOF marker has been consumed; all further input is
    /// trailer metadata and is discarded.
    pub fn finished(&self) -> bool {
        self.decoder.finished()
    }

    /// Number of erase-in-display sequences seen. They have no grid effect
    /// but are counted so callers needing erase semantics can detect them.
    pub fn erase_requests(&self) -> usize {
        self.decoder.erase_requests()
    }

    /// Total unsupported sequences abandoned over the document's lifetime.
    pub fn unsupported_sequences(&self) -> usize {
        self.unsupported_sequences
    }

    /// Total parameter overflows over the document's lifetime.
    pub fn parameter_overflows(&self) -> usize {
        self.parameter_overflows
    }
}
