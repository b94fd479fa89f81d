//! Fragment classification.
//!
//! Every decoded query fragment is tested against a fixed, ordered table of
//! anchored grammars and assigned to exactly one [`Fragment`] variant. The
//! anchors make the grammars mutually exclusive for well-formed input;
//! ordering only matters for the `filter[or][<index>]...` prefix, which must
//! be claimed before the generic two-bracket operator grammar sees it.
//!
//! A fragment matching no grammar is not an error: the dispatcher drops it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One classified query fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fragment {
    /// `include=a,b.c`
    Include { values: String },
    /// `sort=-created,title`
    Sort { values: String },
    /// `fields[<resource>]=a,b`
    Fields { resource: String, values: String },
    /// `page[<key>]=value`
    Page { key: String, value: String },
    /// `filter[<column>]=value`
    FilterEquals { column: String, value: String },
    /// `filter[<operator>][<column>]=value`; the operator is still unchecked
    /// here, the filter handler drops unknown names.
    FilterOperator { operator: String, column: String, value: String },
    /// `filter[or][<index>]<rest>` where `<rest>` is a plain or operator
    /// suffix, kept verbatim for re-synthesis.
    FilterOr { index: usize, rest: String },
}

/// One grammar: a name (for debug traces), an anchored pattern, and a builder
/// turning the captures into a [`Fragment`].
struct Grammar {
    name: &'static str,
    pattern: &'static Regex,
    build: fn(&Captures) -> Option<Fragment>,
}

fn cap(caps: &Captures, index: usize) -> String {
    caps.get(index).map(|m| m.as_str().to_string()).unwrap_or_default()
}

fn build_include(caps: &Captures) -> Option<Fragment> {
    Some(Fragment::Include { values: cap(caps, 1) })
}

fn build_sort(caps: &Captures) -> Option<Fragment> {
    Some(Fragment::Sort { values: cap(caps, 1) })
}

fn build_fields(caps: &Captures) -> Option<Fragment> {
    Some(Fragment::Fields { resource: cap(caps, 1), values: cap(caps, 2) })
}

fn build_page(caps: &Captures) -> Option<Fragment> {
    Some(Fragment::Page { key: cap(caps, 1), value: cap(caps, 2) })
}

fn build_filter_or(caps: &Captures) -> Option<Fragment> {
    // A parse failure here (an index overflowing usize) falls through to the
    // remaining grammars, which reject the fragment.
    let index = caps.get(1)?.as_str().parse().ok()?;
    Some(Fragment::FilterOr { index, rest: cap(caps, 2) })
}

fn build_filter_operator(caps: &Captures) -> Option<Fragment> {
    Some(Fragment::FilterOperator { operator: cap(caps, 1), column: cap(caps, 2), value: cap(caps, 3) })
}

fn build_filter_equals(caps: &Captures) -> Option<Fragment> {
    Some(Fragment::FilterEquals { column: cap(caps, 1), value: cap(caps, 2) })
}

static GRAMMARS: Lazy<Vec<Grammar>> = Lazy::new(|| {
    vec![
        Grammar { name: "include", pattern: regex!(r"^include=(.*)$"), build: build_include },
        Grammar { name: "sort", pattern: regex!(r"^sort=(.*)$"), build: build_sort },
        Grammar { name: "fields", pattern: regex!(r"^fields\[([^\[\]]+)\]=(.*)$"), build: build_fields },
        Grammar { name: "page", pattern: regex!(r"^page\[([^\[\]]+)\]=(.*)$"), build: build_page },
        // Must precede "filter-operator": `filter[or][0][name]=x` also fits
        // the two-bracket shape with operator `or`.
        Grammar { name: "filter-or", pattern: regex!(r"^filter\[or\]\[(\d+)\](\[.*)$"), build: build_filter_or },
        // The bracketed names exclude `or` by falling through the "filter-or"
        // grammar above, not by inspecting first characters: columns and
        // operators that merely start with `o` or `r` (rate, order, ...) are
        // legitimate and must classify normally.
        Grammar {
            name: "filter-operator",
            pattern: regex!(r"^filter\[([^\[\]]+)\]\[([^\[\]]+)\]=(.*)$"),
            build: build_filter_operator,
        },
        Grammar {
            name: "filter-equals",
            pattern: regex!(r"^filter\[([^\[\]]+)\]=(.*)$"),
            build: build_filter_equals,
        },
    ]
});

/// Classify a decoded fragment against the grammar table, in table order.
///
/// Returns the matched grammar's name alongside the fragment; `None` means no
/// grammar claimed the fragment and it should be dropped.
pub(crate) fn classify(fragment: &str) -> Option<(&'static str, Fragment)> {
    for grammar in GRAMMARS.iter() {
        if let Some(caps) = grammar.pattern.captures(fragment) {
            if let Some(built) = (grammar.build)(&caps) {
                return Some((grammar.name, built));
            }
        }
    }
    None
}
