//! A very simplistic scanner for three-line TLE catalog blocks

use crate::{LINE1_MARKER, LINE2_MARKER};
use tletypes::prelude::*;
use tracing::debug;

/// Scan raw catalog text into element records.
///
/// A block is three consecutive non-blank lines: name, element line 1,
/// element line 2. Blank lines never count toward block boundaries. When
/// the two candidate element lines don't carry their line-type markers the
/// cursor advances by a single line, so one corrupted or missing line
/// doesn't drop the remainder of the catalog.
///
/// Only the markers are checked here; interior field columns are validated
/// at decode time.
pub fn scan_catalog(text: &str) -> Vec<TleRecord> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut records = Vec::new();
    let mut i = 0;
    while i + 2 < lines.len() {
        let (name, line1, line2) = (lines[i], lines[i + 1], lines[i + 2]);
        if line1.starts_with(LINE1_MARKER) && line2.starts_with(LINE2_MARKER) {
            records.push(TleRecord::new(name, line1, line2));
            i += 3;
        } else {
            debug!(line = name, "Resynchronizing past unexpected catalog line");
            i += 1;
        }
    }
    records
}
