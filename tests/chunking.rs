// tests/chunking.rs

//! Integration tests over the public `Document` API: chunk transparency,
//! end-of-stream handling, wrapping, and the recoverable-error policy.

use proptest::collection::vec;
use proptest::prelude::*;

use ansigrid::{Anomaly, AttrFlags, Cell, Color, Config, Document, Unsupported, BLANK_CELL};

fn unbounded() -> Config {
    Config {
        screen_width: 0,
        screen_lines: 0,
    }
}

/// Full written contents of the grid, blanks included.
fn snapshot(doc: &Document) -> Vec<Vec<Cell>> {
    (0..doc.height())
        .map(|row| {
            (0..doc.row_width(row))
                .map(|col| *doc.cell(row, col).unwrap_or(&BLANK_CELL))
                .collect()
        })
        .collect()
}

proptest! {
    // Feeding any stream in any chunking must produce the same grid and the
    // same observable counters as feeding it whole.
    #[test]
    fn chunking_is_transparent(
        bytes in vec(any::<u8>(), 0..256),
        cuts in vec(any::<usize>(), 0..5),
    ) {
        let mut whole = Document::new(Config::default());
        whole.write(&bytes).unwrap();

        let mut chunked = Document::new(Config::default());
        let mut points: Vec<usize> = cuts
            .iter()
            .map(|c| c % (bytes.len() + 1))
            .collect();
        points.sort_unstable();
        points.dedup();
        let mut prev = 0;
        for point in points {
            chunked.write(&bytes[prev..point]).unwrap();
            prev = point;
        }
        chunked.write(&bytes[prev..]).unwrap();

        prop_assert_eq!(snapshot(&whole), snapshot(&chunked));
        prop_assert_eq!(whole.finished(), chunked.finished());
        prop_assert_eq!(whole.erase_requests(), chunked.erase_requests());
        prop_assert_eq!(
            whole.unsupported_sequences(),
            chunked.unsupported_sequences()
        );
        prop_assert_eq!(whole.parameter_overflows(), chunked.parameter_overflows());
    }
}

#[test]
fn sequence_split_across_writes() {
    let mut doc = Document::new(unbounded());
    doc.write(b"\x1b[1;3").unwrap();
    doc.write(b"1mX").unwrap();
    let cell = doc.cell(0, 0).unwrap();
    assert_eq!(cell.code, b'X');
    assert_eq!(cell.attr.fg, Color::Red);
    assert!(cell.attr.flags.contains(AttrFlags::BOLD));
}

#[test]
fn autowrap_places_overflow_on_next_row() {
    let width = 5;
    let mut doc = Document::new(Config {
        screen_width: width,
        screen_lines: 0,
    });
    doc.write(b"abcdef").unwrap();
    assert_eq!(doc.row_width(0), width as usize);
    assert_eq!(doc.cell(1, 0).unwrap().code, b'f');
}

#[test]
fn unbounded_width_never_wraps() {
    let mut doc = Document::new(unbounded());
    doc.write(b"\x1b[1001GX").unwrap();
    assert_eq!(doc.height(), 1);
    assert_eq!(doc.row_width(0), 1001);
    assert_eq!(doc.cell(0, 1000).unwrap().code, b'X');
    assert!(doc.cell(0, 500).unwrap().is_blank());
}

#[test]
fn screen_lines_hint_never_clamps_growth() {
    let mut doc = Document::new(Config {
        screen_width: 0,
        screen_lines: 2,
    });
    doc.write(b"a\nb\nc\nd").unwrap();
    assert_eq!(doc.height(), 4);
}

#[test]
fn recoverable_errors_do_not_lose_trailing_content() {
    let mut doc = Document::new(unbounded());
    let report = doc.write(b"\x1b[31mA\x1b[2KB\x1b[44mC").unwrap();
    assert_eq!(
        report.anomalies,
        vec![Anomaly::UnsupportedSequence(Unsupported::FinalByte(b'K'))]
    );
    assert_eq!(doc.unsupported_sequences(), 1);
    // Both well-formed sequences applied.
    assert_eq!(doc.cell(0, 0).unwrap().attr.fg, Color::Red);
    assert_eq!(doc.cell(0, 2).unwrap().attr.bg, Color::Blue);
}

#[test]
fn eof_marker_stops_consumption() {
    let body: &[u8] = b"line one\r\n\x1b[33mline two";
    let mut with_trailer = body.to_vec();
    with_trailer.push(0x1A);
    with_trailer.extend_from_slice(b"SAUCE00 trailing metadata \x1b[31m junk");

    let (truncated, _) = Document::with_bytes(unbounded(), body).unwrap();
    let (full, report) = Document::with_bytes(unbounded(), &with_trailer).unwrap();

    assert_eq!(snapshot(&truncated), snapshot(&full));
    assert!(full.finished());
    assert_eq!(report.trailer_start, Some(body.len() + 1));
}

#[test]
fn writes_after_eof_are_all_trailer() {
    let mut doc = Document::new(unbounded());
    doc.write(b"art\x1a").unwrap();
    let report = doc.write(b"more trailer").unwrap();
    assert_eq!(report.trailer_start, Some(0));
    assert_eq!(doc.height(), 1);
    assert_eq!(doc.row_width(0), 3);
}

#[test]
fn marker_as_final_byte_reports_empty_trailer() {
    let mut doc = Document::new(unbounded());
    let report = doc.write(b"x\x1a").unwrap();
    assert_eq!(report.trailer_start, Some(2));
}

#[test]
fn attribute_snapshots_survive_later_changes() {
    let mut doc = Document::new(unbounded());
    doc.write(b"\x1b[1mA").unwrap();
    doc.write(b"\x1b[22mB").unwrap();
    assert!(doc.cell(0, 0).unwrap().attr.flags.contains(AttrFlags::BOLD));
    assert!(!doc.cell(0, 1).unwrap().attr.flags.contains(AttrFlags::BOLD));
}

#[test]
fn clean_report_on_plain_text() {
    let (doc, report) = Document::with_bytes(Config::default(), b"plain old text").unwrap();
    assert!(report.is_clean());
    assert_eq!(report.trailer_start, None);
    assert!(!doc.finished());
    assert_eq!(doc.height(), 1);
}

// A miniature artwork exercising positioning, color, and overwrite together.
#[test]
fn small_document_end_to_end() {
    let stream = b"\x1b[2J\x1b[1;1H\x1b[1;44;37m hello \r\n\
                   \x1b[0;31mworld\x1b[0m\x1b[1;4Hi";
    let (doc, report) = Document::with_bytes(Config::default(), stream).unwrap();
    assert!(report.is_clean());
    assert_eq!(doc.erase_requests(), 1);
    assert_eq!(doc.height(), 2);

    let h = doc.cell(0, 1).unwrap();
    assert_eq!(h.code, b'h');
    assert_eq!(h.attr.bg, Color::Blue);
    assert!(h.attr.flags.contains(AttrFlags::BOLD));

    // Repositioned overwrite: 'i' replaced the first 'l' of "hello".
    assert_eq!(doc.cell(0, 3).unwrap().code, b'i');
    assert!(!doc.cell(0, 3).unwrap().attr.flags.contains(AttrFlags::BOLD));

    let w = doc.cell(1, 0).unwrap();
    assert_eq!(w.code, b'w');
    assert_eq!(w.attr.fg, Color::Red);
}
