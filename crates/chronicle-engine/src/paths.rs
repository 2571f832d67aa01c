//! Deterministic derivation of content and media paths from an entry's
//! relative path. Pure string work; no path here is ever checked against a
//! filesystem or fetched.

use crate::models::CatalogEntry;
use relative_path::{RelativePath, RelativePathBuf};

/// Directory holding per-article narration audio under the media base.
pub const AUDIO_DIR: &str = "audio";
/// Directory holding generated imagery under the media base.
pub const IMAGES_DIR: &str = "images";
/// Image collection with one summary infographic per article.
pub const INFO_IMAGE_DIR: &str = "info";
/// Image collection with one explanatory diagram per article.
pub const DIAGRAM_IMAGE_DIR: &str = "diagram";

/// Final path segment of an article path with a trailing `.md` stripped
/// (case-insensitive). Shared stem for display titles and media file names.
pub fn article_file_base(rel_path: &RelativePath) -> &str {
    let name = rel_path.file_name().unwrap_or(rel_path.as_str());
    strip_md_suffix(name)
}

/// Narration audio for an entry: the article path with `.md` swapped for
/// `.mp3`, under [`AUDIO_DIR`].
pub fn audio_path(entry: &CatalogEntry) -> RelativePathBuf {
    let rel = entry.rel_path.as_str();
    let stem = strip_md_suffix(rel);
    if stem.len() == rel.len() {
        // No .md suffix to swap; keep the path as authored.
        RelativePathBuf::from(format!("{AUDIO_DIR}/{rel}"))
    } else {
        RelativePathBuf::from(format!("{AUDIO_DIR}/{stem}.mp3"))
    }
}

/// Summary infographic for an entry, keyed by volume and file stem.
pub fn info_image_path(entry: &CatalogEntry) -> RelativePathBuf {
    image_path(entry, INFO_IMAGE_DIR)
}

/// Explanatory diagram for an entry, keyed by volume and file stem.
pub fn diagram_image_path(entry: &CatalogEntry) -> RelativePathBuf {
    image_path(entry, DIAGRAM_IMAGE_DIR)
}

fn image_path(entry: &CatalogEntry, collection: &str) -> RelativePathBuf {
    let stem = article_file_base(&entry.rel_path);
    RelativePathBuf::from(format!(
        "{IMAGES_DIR}/{collection}/{}/{stem}.jpeg",
        entry.volume
    ))
}

/// Joins a media path onto a base URL, tolerating a trailing slash on the
/// base.
pub fn media_url(base: &str, rel: &RelativePath) -> String {
    format!("{}/{}", base.trim_end_matches('/'), rel)
}

pub(crate) fn strip_md_suffix(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= 3 && bytes[bytes.len() - 3..].eq_ignore_ascii_case(b".md") {
        &name[..name.len() - 3]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogEntry;
    use relative_path::RelativePathBuf;

    fn entry(rel: &str) -> CatalogEntry {
        CatalogEntry::new("1936-12-01", RelativePathBuf::from(rel))
    }

    #[test]
    fn file_base_strips_md_case_insensitively() {
        assert_eq!(article_file_base(RelativePath::new("v1/a.md")), "a");
        assert_eq!(article_file_base(RelativePath::new("v1/a.MD")), "a");
        assert_eq!(article_file_base(RelativePath::new("v1/a.txt")), "a.txt");
    }

    #[test]
    fn file_base_of_bare_file() {
        assert_eq!(article_file_base(RelativePath::new("实践论.md")), "实践论");
    }

    #[test]
    fn audio_swaps_md_for_mp3() {
        assert_eq!(
            audio_path(&entry("v1/中国革命战争的战略问题.md")).as_str(),
            "audio/v1/中国革命战争的战略问题.mp3"
        );
    }

    #[test]
    fn audio_keeps_suffixless_path() {
        assert_eq!(audio_path(&entry("v1/notes")).as_str(), "audio/v1/notes");
    }

    #[test]
    fn image_paths_use_volume_and_stem() {
        let e = entry("v2/矛盾论.md");
        assert_eq!(info_image_path(&e).as_str(), "images/info/v2/矛盾论.jpeg");
        assert_eq!(
            diagram_image_path(&e).as_str(),
            "images/diagram/v2/矛盾论.jpeg"
        );
    }

    #[test]
    fn media_url_tolerates_trailing_slash() {
        let rel = RelativePathBuf::from("audio/v1/a.mp3");
        assert_eq!(
            media_url("https://cdn.example.net/", &rel),
            "https://cdn.example.net/audio/v1/a.mp3"
        );
        assert_eq!(
            media_url("https://cdn.example.net", &rel),
            "https://cdn.example.net/audio/v1/a.mp3"
        );
    }
}
