//! Endpoint-path resolution.
//!
//! A resource path has at most four meaningful segments:
//!
//! ```text
//! /article /5 /relationships /comment
//!  │        │  │              └─ relationship type (required here)
//!  │        │  └─ marks a relationship request (case-insensitive)
//!  │        └─ identifier
//!  └─ resource type
//! ```
//!
//! A three-segment path whose third segment is not `relationships` addresses
//! a related resource directly (`/article/5/comment`), so the third segment
//! still becomes the relationship type, just without the relationship flag.

use crate::error::ParseError;

/// The non-query fields of a request, as resolved from the path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoint {
    pub resource_type: String,
    pub identifier: Option<String>,
    pub is_relationship_request: bool,
    pub relationship_type: Option<String>,
}

/// Strip every leading and trailing `/` from `path`.
///
/// Pure and idempotent; interior separators are left alone (duplicated ones
/// are dropped later, when the path is split into segments).
pub fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

/// Resolve `path` into its endpoint fields.
///
/// An empty path yields an empty resource type rather than an error. The one
/// fatal case is a path that declares `.../relationships` without a following
/// segment: that returns [`ParseError::MissingRelationshipType`].
pub fn resolve_endpoint(path: &str) -> Result<Endpoint, ParseError> {
    let segments: Vec<&str> = trim_slashes(path).split('/').filter(|s| !s.is_empty()).collect();

    let resource_type = segments.first().copied().unwrap_or("").to_string();
    let identifier = segments.get(1).map(|s| (*s).to_string());
    let is_relationship_request = segments.get(2).is_some_and(|s| s.eq_ignore_ascii_case("relationships"));

    let relationship_type = if is_relationship_request {
        match segments.get(3) {
            Some(rel) => Some((*rel).to_string()),
            None => return Err(ParseError::MissingRelationshipType),
        }
    } else if segments.len() == 3 {
        Some(segments[2].to_string())
    } else {
        None
    };

    Ok(Endpoint { resource_type, identifier, is_relationship_request, relationship_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_slashes_strips_both_ends() {
        let cases: Vec<(&str, &str)> = vec![
            ("//a/b//", "a/b"),
            ("/a/b", "a/b"),
            ("a/b/", "a/b"),
            ("a/b", "a/b"),
            ("////", ""),
            ("", ""),
            ("/", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(trim_slashes(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn trim_slashes_is_idempotent() {
        for input in ["//a/b//", "a", "", "///", "/a//b/"] {
            assert_eq!(trim_slashes(trim_slashes(input)), trim_slashes(input));
        }
    }

    #[test]
    fn single_segment_path() {
        let endpoint = resolve_endpoint("article").unwrap();
        assert_eq!(endpoint.resource_type, "article");
        assert_eq!(endpoint.identifier, None);
        assert!(!endpoint.is_relationship_request);
        assert_eq!(endpoint.relationship_type, None);
    }

    #[test]
    fn empty_path_yields_empty_resource_type() {
        let endpoint = resolve_endpoint("").unwrap();
        assert_eq!(endpoint.resource_type, "");
        assert_eq!(endpoint, resolve_endpoint("///").unwrap());
    }

    #[test]
    fn two_segments_set_identifier() {
        let endpoint = resolve_endpoint("/article/5/").unwrap();
        assert_eq!(endpoint.resource_type, "article");
        assert_eq!(endpoint.identifier.as_deref(), Some("5"));
        assert_eq!(endpoint.relationship_type, None);
    }

    #[test]
    fn relationship_request_takes_fourth_segment() {
        // Slash padding and duplication must not change the outcome.
        for input in [
            "article/5/relationships/comment",
            "//article/5/relationships/comment//",
            "/article//5/relationships/comment",
            "article/5/RELATIONSHIPS/comment",
        ] {
            let endpoint = resolve_endpoint(input).unwrap();
            assert_eq!(endpoint.resource_type, "article", "input: {input:?}");
            assert_eq!(endpoint.identifier.as_deref(), Some("5"));
            assert!(endpoint.is_relationship_request);
            assert_eq!(endpoint.relationship_type.as_deref(), Some("comment"));
        }
    }

    #[test]
    fn relationship_without_type_is_fatal() {
        for input in ["article/5/relationships", "article/5/relationships/", "/article/5/Relationships//"] {
            assert_eq!(resolve_endpoint(input), Err(ParseError::MissingRelationshipType), "input: {input:?}");
        }
    }

    #[test]
    fn three_plain_segments_name_a_related_resource() {
        let endpoint = resolve_endpoint("article/5/comment").unwrap();
        assert!(!endpoint.is_relationship_request);
        assert_eq!(endpoint.relationship_type.as_deref(), Some("comment"));
    }

    #[test]
    fn four_plain_segments_have_no_relationship_type() {
        let endpoint = resolve_endpoint("article/5/comment/extra").unwrap();
        assert!(!endpoint.is_relationship_request);
        assert_eq!(endpoint.relationship_type, None);
    }
}
