// src/lib.rs

//! Decodes byte streams of text interleaved with ANSI/VT100 escape sequences
//! into a fully resolved, random-access character grid.
//!
//! This is the rendering-preparation backend for viewers of legacy ANSI art
//! and BBS-style text documents. Callers feed raw bytes in (possibly in
//! chunks) and query the resulting grid for drawing; every cell carries a
//! snapshot of the display attributes active when it was written.
//!
//! ```
//! use ansigrid::{AttrFlags, Config, Document};
//!
//! let mut doc = Document::new(Config::default());
//! let report = doc.write(b"\x1b[1;31mHi\x1b[0m!").unwrap();
//! assert!(report.is_clean());
//!
//! let h = doc.cell(0, 0).unwrap();
//! assert_eq!(h.code, b'H');
//! assert!(h.attr.flags.contains(AttrFlags::BOLD));
//! let bang = doc.cell(0, 2).unwrap();
//! assert!(!bang.attr.flags.contains(AttrFlags::BOLD));
//! ```
//!
//! Out of scope: trailer metadata (SAUCE) parsing, pixel/glyph rendering,
//! and file handling. When the end-of-file marker is seen the decoder stops
//! consuming and reports where the trailer begins so a separate reader can
//! take over.

mod cell;
mod color;
mod config;
mod decoder;
mod document;
mod error;
mod grid;

pub use cell::{AttrFlags, Attributes, Cell, BLANK_CELL};
pub use color::Color;
pub use config::Config;
pub use document::{Document, WriteReport};
pub use error::{Anomaly, DecodeError, Unsupported};
pub use grid::Row;
