//! Filter fragment handlers.
//!
//! Three cooperating shapes share the `filter[...]` prefix:
//!
//! ```text
//! filter[<col>]=v            -> equals
//! filter[<op>][<col>]=v      -> one of the six operator maps
//! filter[or][<i>]<rest>      -> OR alternative <i>, <rest> re-parsed as one
//!                               of the two shapes above
//! ```
//!
//! An unrecognized operator name is dropped by the operator-map lookup rather
//! than erroring. OR alternatives compose: two fragments naming the same
//! index merge structurally into one combined condition.

use super::fragment::{self, Fragment};
use super::merge::merge_condition;
use crate::descriptor::{FilterCondition, FilterDescriptor};

/// Parse one decoded `filter...` fragment into `filter`.
///
/// Returns whether the fragment matched a filter grammar; anything else
/// (including a non-filter fragment) leaves `filter` untouched. This is the
/// standalone entry point for the filter family; the query dispatcher calls
/// the individual handlers below directly.
pub fn parse_filter(fragment: &str, filter: &mut FilterDescriptor) -> bool {
    match fragment::classify(fragment) {
        Some((_, Fragment::FilterEquals { column, value })) => {
            apply_equals(column, value, &mut filter.condition);
            true
        }
        Some((_, Fragment::FilterOperator { operator, column, value })) => {
            apply_operator(&operator, column, value, &mut filter.condition);
            true
        }
        Some((_, Fragment::FilterOr { index, rest })) => {
            apply_or_group(index, &rest, filter);
            true
        }
        _ => false,
    }
}

/// `filter[<col>]=value`: record a plain equality.
pub(crate) fn apply_equals(column: String, value: String, condition: &mut FilterCondition) {
    condition.equals.insert(column, value);
}

/// `filter[<op>][<col>]=value`: record an operator-qualified filter.
///
/// The map lookup doubles as the guard: names outside the six reserved
/// operators (including `or`, which reaches here when its index is not a
/// non-negative integer) are silently dropped.
pub(crate) fn apply_operator(operator: &str, column: String, value: String, condition: &mut FilterCondition) {
    if let Some(map) = condition.operator_map_mut(operator) {
        map.insert(column, value);
    }
}

/// `filter[or][<index>]<rest>`: parse `<rest>` as a standalone condition and
/// fold it into the alternative at `<index>`.
///
/// `<rest>` is re-synthesized into a `filter<rest>` fragment and re-classified
/// against a fresh condition, so the plain and operator grammars apply
/// unchanged. A suffix that classifies as anything else (a nested `[or]`, a
/// malformed tail) is dropped like any unknown fragment.
pub(crate) fn apply_or_group(index: usize, rest: &str, filter: &mut FilterDescriptor) {
    let mut element = FilterCondition::default();
    let synthesized = format!("filter{rest}");

    match fragment::classify(&synthesized) {
        Some((_, Fragment::FilterEquals { column, value })) => apply_equals(column, value, &mut element),
        Some((_, Fragment::FilterOperator { operator, column, value })) => {
            apply_operator(&operator, column, value, &mut element);
        }
        _ => return,
    }

    merge_condition(filter.or_slot_mut(index), element);
}
