use thiserror::Error;

/// Errors produced while turning a request URL into a descriptor.
///
/// Malformed query fragments never error: any fragment that matches no known
/// grammar (or names an unknown filter operator) is dropped silently. The only
/// fatal condition is a `relationships` path with nothing after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The path addresses `.../relationships` without naming a relationship.
    #[error("relationship request is missing a relationship type")]
    MissingRelationshipType,
}
