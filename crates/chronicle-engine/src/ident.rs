//! Canonical article identifiers.
//!
//! An article's id is the percent-encoded form of its relative path. The id
//! is the only join key between the catalog and everything that references
//! it (routes, links, neighbouring-entry lookups), so encoding must be
//! reversible and decoding must never fail hard: a string that doesn't
//! decode is kept as-is and re-encoded, which still yields a stable key.

use relative_path::RelativePath;

/// Encodes a relative path into its canonical id.
pub fn encode_article_id(rel_path: &RelativePath) -> String {
    urlencoding::encode(rel_path.as_str()).into_owned()
}

/// Decodes an id back into the relative path it was built from.
///
/// Best-effort: input that is not valid percent-encoding is returned
/// unchanged rather than rejected.
pub fn decode_article_id(id: &str) -> String {
    match urlencoding::decode(id) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => id.to_string(),
    }
}

/// Canonicalizes an externally supplied identifier.
///
/// Callers may hold an id in raw or already-encoded form (a URL segment
/// arrives either way depending on who produced it). Decoding first and
/// re-encoding maps both forms onto the exact key the catalog uses.
pub fn canonical_id(raw: &str) -> String {
    urlencoding::encode(&decode_article_id(raw)).into_owned()
}
