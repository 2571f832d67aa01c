//! Process-lifetime memoization of the timeline load.

use once_cell::sync::OnceCell;

use crate::io::{ContentLibrary, LibraryError};
use crate::models::Catalog;
use crate::parsing::parse_timeline;

/// Write-once cache around the one-time timeline read + parse.
///
/// The first call to [`catalog`](TimelineStore::catalog) performs the load;
/// concurrent first callers block on the same initialization rather than
/// issuing their own reads, and every later call observes the cached value.
/// A failed load leaves the cell empty, so the next call retries instead of
/// pinning the failure for the rest of the process.
#[derive(Debug)]
pub struct TimelineStore {
    library: ContentLibrary,
    catalog: OnceCell<Catalog>,
}

impl TimelineStore {
    pub fn new(library: ContentLibrary) -> Self {
        Self {
            library,
            catalog: OnceCell::new(),
        }
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    /// The parsed catalog, loading it on first use.
    pub fn catalog(&self) -> Result<&Catalog, LibraryError> {
        self.catalog.get_or_try_init(|| {
            let text = self.library.read_timeline()?;
            Ok(parse_timeline(&text))
        })
    }
}
