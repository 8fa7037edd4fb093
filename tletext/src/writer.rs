//! Export side of the catalog text format

use tletypes::prelude::*;

/// Serialize records back into three-line catalog form.
///
/// Each record contributes exactly three newline-terminated lines (name,
/// element line 1, element line 2) in input order, with no separator lines
/// and nothing after the final terminator. The output of
/// [`crate::scan_catalog`] round-trips through this unchanged.
pub fn write_tle_set(records: &[TleRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.name);
        out.push('\n');
        out.push_str(&record.line1);
        out.push('\n');
        out.push_str(&record.line2);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_catalog;
    use indoc::indoc;

    const CATALOG: &str = indoc! {r#"ISS (ZARYA)
        1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
        2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537
        "#};

    #[test]
    fn three_lines_per_record_no_separators() {
        let records = scan_catalog(CATALOG);
        let out = write_tle_set(&records);
        assert_eq!(out, CATALOG);
        assert!(out.ends_with('\n'));
        assert!(!out.contains("\n\n"));
    }

    #[test]
    fn empty_set_writes_nothing() {
        assert_eq!(write_tle_set(&[]), "");
    }

    #[test]
    fn round_trips_through_the_scanner() {
        let records = scan_catalog(CATALOG);
        let reparsed = scan_catalog(&write_tle_set(&records));
        assert_eq!(records, reparsed);
    }
}
