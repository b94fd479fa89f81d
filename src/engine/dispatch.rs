//! Query-string dispatch.
//!
//! Splits the raw query string on `&`, percent-decodes each fragment, and
//! routes it through the grammar table. The descriptor is threaded through
//! every handler call and returned to the caller fully accumulated.
//!
//! Decoding happens before classification, so `sort=Age%2CfirstName` splits
//! into two sort fields. Fragments are dropped without a trace (empty ones
//! from `&&`, fragments matching no grammar, fragments that are not valid
//! UTF-8 once decoded) unless `REQUERY_DEBUG_FRAGMENTS=1` is set.

use super::fragment::{self, Fragment};
use super::{family, filter};
use crate::descriptor::QueryDescriptor;

/// Parse a raw query string (without the leading `?`) into `descriptor`.
pub fn parse_query(query: &str, descriptor: &mut QueryDescriptor) {
    let debug = std::env::var_os("REQUERY_DEBUG_FRAGMENTS").is_some();

    for raw in query.split('&') {
        if raw.is_empty() {
            continue;
        }

        let decoded = match urlencoding::decode(raw) {
            Ok(decoded) => decoded,
            Err(_) => {
                if debug {
                    eprintln!("[fragment:drop] {raw:?} (invalid percent-encoding)");
                }
                continue;
            }
        };

        match fragment::classify(&decoded) {
            Some((grammar, parsed)) => {
                if debug {
                    eprintln!("[fragment:{grammar}] {decoded:?}");
                }
                apply(parsed, descriptor);
            }
            None => {
                if debug {
                    eprintln!("[fragment:drop] {decoded:?} (no grammar)");
                }
            }
        }
    }
}

fn apply(parsed: Fragment, descriptor: &mut QueryDescriptor) {
    match parsed {
        Fragment::Include { values } => family::parse_include(&values, &mut descriptor.include),
        Fragment::Sort { values } => family::parse_sort(&values, &mut descriptor.sort),
        Fragment::Fields { resource, values } => family::parse_fields(&resource, &values, &mut descriptor.fields),
        Fragment::Page { key, value } => family::parse_page(&key, &value, &mut descriptor.page),
        Fragment::FilterEquals { column, value } => {
            filter::apply_equals(column, value, &mut descriptor.filter.condition);
        }
        Fragment::FilterOperator { operator, column, value } => {
            filter::apply_operator(&operator, column, value, &mut descriptor.filter.condition);
        }
        Fragment::FilterOr { index, rest } => filter::apply_or_group(index, &rest, &mut descriptor.filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(query: &str) -> QueryDescriptor {
        let mut descriptor = QueryDescriptor::default();
        parse_query(query, &mut descriptor);
        descriptor
    }

    #[test]
    fn fragments_route_to_their_families() {
        let q = parsed("include=user&sort=-age&fields[user]=name&page[limit]=20&filter[name]=jack");

        assert_eq!(q.include, ["user"]);
        assert_eq!(q.sort, ["-age"]);
        assert_eq!(q.fields["user"], ["name"]);
        assert_eq!(q.page["limit"], "20");
        assert_eq!(q.filter.condition.equals["name"], "jack");
    }

    #[test]
    fn consecutive_separators_produce_no_phantom_fragments() {
        let q = parsed("&&include=user&&&sort=age&");
        assert_eq!(q.include, ["user"]);
        assert_eq!(q.sort, ["age"]);
    }

    #[test]
    fn empty_query_leaves_the_seed_untouched() {
        assert_eq!(parsed(""), QueryDescriptor::default());
    }

    #[test]
    fn fragments_are_decoded_before_classification() {
        let q = parsed("sort=Age%2CfirstName&filter[name]=john%20doe");
        assert_eq!(q.sort, ["Age", "firstName"]);
        assert_eq!(q.filter.condition.equals["name"], "john doe");
    }

    #[test]
    fn unknown_fragments_are_ignored() {
        let q = parsed("limit=20&include=user&utm_source=mail");
        assert_eq!(q.include, ["user"]);
        assert!(q.page.is_empty());
    }

    #[test]
    fn later_fragments_follow_each_familys_accumulation_rule() {
        let q = parsed("include=a,b&include=c&fields[x]=a,b&fields[x]=c&page[limit]=1&page[limit]=2");

        assert_eq!(q.include, ["c"]);
        assert_eq!(q.fields["x"], ["a", "b", "c"]);
        assert_eq!(q.page["limit"], "2");
    }

    #[test]
    fn or_groups_accumulate_across_fragments() {
        let q = parsed("filter[or][0][name]=test&filter[or][0][gt][rate]=1&filter[or][1][like][title]=x");

        assert_eq!(q.filter.or.len(), 2);
        assert_eq!(q.filter.or[0].equals["name"], "test");
        assert_eq!(q.filter.or[0].gt["rate"], "1");
        assert_eq!(q.filter.or[1].like["title"], "x");
    }
}
