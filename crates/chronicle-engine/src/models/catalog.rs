use std::collections::HashMap;

use relative_path::RelativePathBuf;
use serde::Serialize;

use crate::ident::{canonical_id, encode_article_id};
use crate::paths::article_file_base;

/// One article's metadata, derived entirely from a timeline record line.
///
/// `rel_path` is the source of truth; every other field except `date` is
/// computed from it in [`CatalogEntry::new`] and is not independently
/// settable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Canonical id: the percent-encoded form of `rel_path`.
    pub id: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// First four characters of `date`.
    pub year: String,
    /// Slash-separated path relative to a collection root.
    pub rel_path: RelativePathBuf,
    /// Final path segment of `rel_path`, `.md` suffix stripped.
    pub title: String,
    /// First path segment of `rel_path`; empty when there is no separator.
    pub volume: String,
}

impl CatalogEntry {
    pub fn new(date: &str, rel_path: RelativePathBuf) -> Self {
        let id = encode_article_id(&rel_path);
        let year: String = date.chars().take(4).collect();
        let title = article_file_base(&rel_path).to_string();
        let volume = match rel_path.as_str().split_once('/') {
            Some((volume, _)) => volume.to_string(),
            None => String::new(),
        };
        Self {
            id,
            date: date.to_string(),
            year,
            rel_path,
            title,
            volume,
        }
    }
}

/// Immutable catalog of articles: entries in ascending date order plus an
/// id → entry mapping.
///
/// Built once from a timeline parse and never mutated afterwards. The sort
/// is stable, so entries sharing a date keep their input order. When two
/// records carry the same `rel_path` (hence the same id), the mapping keeps
/// the one later in sorted order.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    #[serde(skip)]
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub(crate) fn from_entries(mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        let mut by_id = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            by_id.insert(entry.id.clone(), index);
        }
        Self { entries, by_id }
    }

    /// All entries in ascending date order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its canonical id.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    /// Looks up an entry by an externally supplied identifier, which may
    /// arrive raw or already percent-encoded.
    pub fn resolve(&self, raw: &str) -> Option<&CatalogEntry> {
        self.get(&canonical_id(raw))
    }

    /// Neighbouring entries in date order, for previous/next navigation.
    pub fn prev_next(&self, id: &str) -> (Option<&CatalogEntry>, Option<&CatalogEntry>) {
        let Some(&index) = self.by_id.get(id) else {
            return (None, None);
        };
        let prev = index.checked_sub(1).and_then(|p| self.entries.get(p));
        let next = self.entries.get(index + 1);
        (prev, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entry_derives_all_fields_from_rel_path() {
        let entry = CatalogEntry::new("1937-07-01", RelativePathBuf::from("卷一/实践论.md"));
        assert_eq!(entry.date, "1937-07-01");
        assert_eq!(entry.year, "1937");
        assert_eq!(entry.title, "实践论");
        assert_eq!(entry.volume, "卷一");
        assert_eq!(entry.id, encode_article_id(&entry.rel_path));
    }

    #[test]
    fn entry_without_separator_has_empty_volume() {
        let entry = CatalogEntry::new("1945-04-24", RelativePathBuf::from("论联合政府.md"));
        assert_eq!(entry.volume, "");
        assert_eq!(entry.title, "论联合政府");
    }

    #[test]
    fn title_strips_md_suffix_case_insensitively() {
        let entry = CatalogEntry::new("1930-01-05", RelativePathBuf::from("v1/Letter.MD"));
        assert_eq!(entry.title, "Letter");
    }

    #[test]
    fn catalog_sorts_ascending_by_date() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("1945-04-24", RelativePathBuf::from("v4/a.md")),
            CatalogEntry::new("1927-03-01", RelativePathBuf::from("v1/b.md")),
            CatalogEntry::new("1937-07-01", RelativePathBuf::from("v2/c.md")),
        ]);
        let dates: Vec<&str> = catalog.entries().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["1927-03-01", "1937-07-01", "1945-04-24"]);
    }

    #[test]
    fn same_date_entries_keep_input_order() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("1927-03-01", RelativePathBuf::from("v1/first.md")),
            CatalogEntry::new("1927-03-01", RelativePathBuf::from("v1/second.md")),
        ]);
        assert_eq!(catalog.entries()[0].title, "first");
        assert_eq!(catalog.entries()[1].title, "second");
    }

    #[test]
    fn duplicate_ids_resolve_to_the_later_sorted_entry() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("1940-01-09", RelativePathBuf::from("v2/dup.md")),
            CatalogEntry::new("1927-03-01", RelativePathBuf::from("v2/dup.md")),
        ]);
        assert_eq!(catalog.len(), 2);
        let id = encode_article_id(relative_path::RelativePath::new("v2/dup.md"));
        assert_eq!(catalog.get(&id).map(|e| e.date.as_str()), Some("1940-01-09"));
    }

    #[test]
    fn resolve_accepts_raw_and_encoded_ids() {
        let catalog = Catalog::from_entries(vec![CatalogEntry::new(
            "1938-05-26",
            RelativePathBuf::from("卷二/论持久战.md"),
        )]);
        let entry = &catalog.entries()[0];
        assert_eq!(catalog.resolve("卷二/论持久战.md"), Some(entry));
        assert_eq!(catalog.resolve(&entry.id), Some(entry));
        assert_eq!(catalog.resolve("卷二/不存在.md"), None);
    }

    #[test]
    fn prev_next_walks_date_order() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("1927-03-01", RelativePathBuf::from("v1/a.md")),
            CatalogEntry::new("1937-07-01", RelativePathBuf::from("v2/b.md")),
            CatalogEntry::new("1945-04-24", RelativePathBuf::from("v3/c.md")),
        ]);
        let middle = &catalog.entries()[1];
        let (prev, next) = catalog.prev_next(&middle.id);
        assert_eq!(prev.map(|e| e.title.as_str()), Some("a"));
        assert_eq!(next.map(|e| e.title.as_str()), Some("c"));

        let first = &catalog.entries()[0];
        let (prev, next) = catalog.prev_next(&first.id);
        assert!(prev.is_none());
        assert_eq!(next.map(|e| e.title.as_str()), Some("b"));

        assert_eq!(catalog.prev_next("unknown"), (None, None));
    }
}
