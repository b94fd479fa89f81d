use crate::descriptor::{QueryDescriptor, RequestDescriptor};
use crate::engine::dispatch::parse_query;
use crate::engine::path;
use crate::error::ParseError;

/// Parse a request URL (path plus optional `?`-prefixed query string) into a
/// [`RequestDescriptor`].
///
/// The input is expected to be a clean path+query: a scheme or host is not
/// stripped, and only the first `?` is honored as the separator, so a literal
/// `?` inside a filter value is not supported.
///
/// # Example
/// ```
/// use requery::parse_request;
///
/// let req = parse_request("/article/5?include=user&filter[gt][age]=17").unwrap();
/// assert_eq!(req.resource_type, "article");
/// assert_eq!(req.identifier.as_deref(), Some("5"));
/// assert_eq!(req.query.include, ["user"]);
/// assert_eq!(req.query.filter.condition.gt["age"], "17");
/// ```
///
/// # Errors
/// Returns [`ParseError::MissingRelationshipType`] when the path declares
/// `.../relationships` without a following segment. Nothing else fails:
/// unknown query fragments are dropped.
pub fn parse_request(url: &str) -> Result<RequestDescriptor, ParseError> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let endpoint = resolve_endpoint(path)?;

    let mut query_descriptor = QueryDescriptor::default();
    parse_query(query, &mut query_descriptor);

    Ok(RequestDescriptor {
        resource_type: endpoint.resource_type,
        identifier: endpoint.identifier,
        is_relationship_request: endpoint.is_relationship_request,
        relationship_type: endpoint.relationship_type,
        query: query_descriptor,
    })
}

/// Resolve a bare path (no query string) into its endpoint fields.
///
/// See [`parse_request`] for the full-URL entry point.
pub fn resolve_endpoint(endpoint_path: &str) -> Result<path::Endpoint, ParseError> {
    path::resolve_endpoint(endpoint_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_example() {
        let req = parse_request(
            "//article/5/relationships/comment?include=user,testComment&sort=Age%2CfirstName\
             &fields[user]=name,email&page[limit]=20&filter[name]=john%20doe&filter[gt][age]=17",
        )
        .unwrap();

        assert_eq!(req.resource_type, "article");
        assert_eq!(req.identifier.as_deref(), Some("5"));
        assert!(req.is_relationship_request);
        assert_eq!(req.relationship_type.as_deref(), Some("comment"));

        assert_eq!(req.query.include, ["user", "testComment"]);
        assert_eq!(req.query.sort, ["Age", "firstName"]);
        assert_eq!(req.query.fields["user"], ["name", "email"]);
        assert_eq!(req.query.page["limit"], "20");
        assert_eq!(req.query.filter.condition.equals["name"], "john doe");
        assert_eq!(req.query.filter.condition.gt["age"], "17");
        assert!(req.query.filter.or.is_empty());
    }

    #[test]
    fn url_without_query_string() {
        let req = parse_request("/article/5").unwrap();
        assert_eq!(req.resource_type, "article");
        assert_eq!(req.identifier.as_deref(), Some("5"));
        assert_eq!(req.query, QueryDescriptor::default());
    }

    #[test]
    fn only_the_first_question_mark_separates_path_and_query() {
        let req = parse_request("article?include=user?x").unwrap();
        // The second `?` stays inside the fragment text; `include=user?x`
        // still matches the include grammar and the value is kept verbatim.
        assert_eq!(req.query.include, ["user?x"]);
    }

    #[test]
    fn missing_relationship_type_propagates() {
        assert_eq!(
            parse_request("article/5/relationships/?include=user"),
            Err(ParseError::MissingRelationshipType),
        );
    }

    #[test]
    fn parsing_is_deterministic() {
        let url = "/article/5?include=a,b&fields[x]=a&fields[x]=b&filter[or][0][name]=t&filter[or][0][gt][rate]=1";
        assert_eq!(parse_request(url).unwrap(), parse_request(url).unwrap());
    }

    #[test]
    fn descriptor_serializes_with_camel_case_endpoint_fields() {
        let req = parse_request("article/5/relationships/comment?page[limit]=20").unwrap();
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["resourceType"], "article");
        assert_eq!(json["identifier"], "5");
        assert_eq!(json["isRelationshipRequest"], true);
        assert_eq!(json["relationshipType"], "comment");
        assert_eq!(json["query"]["page"]["limit"], "20");
        // The filter's operator maps are always present, even when empty.
        assert!(json["query"]["filter"]["gte"].as_object().unwrap().is_empty());
        assert!(json["query"]["filter"]["or"].as_array().unwrap().is_empty());
    }
}
