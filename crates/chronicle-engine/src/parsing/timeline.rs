//! Timeline catalog parsing: one dated record per line, everything else
//! ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use relative_path::RelativePathBuf;

use crate::models::{Catalog, CatalogEntry};

/// One timeline record:
///
/// ```text
/// - [YYYY-MM-DD]:[<rel-path>]
/// - [YYYY-MM-DD]:[<rel-path>](<link text, discarded>)
/// ```
///
/// Leading and trailing whitespace are tolerated; anything else on the line
/// disqualifies it.
static RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*-\s*\[(\d{4}-\d{2}-\d{2})\]:\[(.+?)\](?:\(.*\))?\s*$")
        .expect("record pattern compiles")
});

/// Parses timeline text into a [`Catalog`].
///
/// Total: lines that don't match the record grammar are silently skipped,
/// and empty input yields an empty catalog.
pub fn parse_timeline(text: &str) -> Catalog {
    let mut entries = Vec::new();
    for line in text.lines() {
        let Some(caps) = RECORD.captures(line) else {
            continue;
        };
        let date = &caps[1];
        let rel_path = RelativePathBuf::from(&caps[2]);
        entries.push(CatalogEntry::new(date, rel_path));
    }
    Catalog::from_entries(entries)
}
