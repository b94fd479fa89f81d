//! Structural merge for filter conditions.
//!
//! OR-group elements are built up across fragments: `filter[or][0][name]=x`
//! and `filter[or][0][gt][rate]=1` must land in the same alternative. The
//! merge is key-wise over each of the seven maps, with the source value
//! winning on a conflicting key. This is the crate's only structural-merge
//! primitive; sequences elsewhere in the model (include, sort, fieldsets) are
//! replaced or appended by their own handlers, never merged here.

use crate::descriptor::FilterCondition;
use std::collections::HashMap;

/// Fold `source` into `target`, map by map, source wins per key.
pub(crate) fn merge_condition(target: &mut FilterCondition, source: FilterCondition) {
    merge_entries(&mut target.equals, source.equals);
    merge_entries(&mut target.like, source.like);
    merge_entries(&mut target.not, source.not);
    merge_entries(&mut target.lt, source.lt);
    merge_entries(&mut target.lte, source.lte);
    merge_entries(&mut target.gt, source.gt);
    merge_entries(&mut target.gte, source.gte);
}

fn merge_entries(target: &mut HashMap<String, String>, source: HashMap<String, String>) {
    for (key, value) in source {
        target.insert(key, value);
    }
}
