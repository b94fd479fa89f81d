//! Output model for parsed requests.
//!
//! Everything here is plain data: the engine builds a descriptor fragment by
//! fragment, mutating the structures in place, and hands the finished value
//! back to the caller. Nothing in this module parses anything.

use serde::Serialize;
use std::collections::HashMap;

/// A fully parsed request: the endpoint fields plus the query descriptor.
///
/// Produced by [`crate::parse_request`]; never mutated by this crate after it
/// is returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    /// First path segment, e.g. `"article"`. Empty only for an empty path.
    pub resource_type: String,
    /// Second path segment, when the path has at least two.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// True iff the third path segment is `relationships` (case-insensitive).
    pub is_relationship_request: bool,
    /// Fourth segment of a relationship request, or the third segment of a
    /// plain three-segment path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    /// Everything parsed from the query string.
    pub query: QueryDescriptor,
}

/// Parsed query-string parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryDescriptor {
    /// Relationship paths to eager-load, in appearance order. A repeated
    /// `include=` fragment replaces the whole list.
    pub include: Vec<String>,
    /// Sparse fieldsets per resource type. Repeated `fields[x]=` fragments
    /// append to the existing list.
    pub fields: HashMap<String, Vec<String>>,
    /// Sort fields, `-`-prefixed for descending, in appearance order. A
    /// repeated `sort=` fragment replaces the whole list.
    pub sort: Vec<String>,
    /// Pagination directives, last write wins per key. Values stay strings.
    pub page: HashMap<String, String>,
    /// Filter conditions.
    pub filter: FilterDescriptor,
}

/// One self-contained set of filter conditions.
///
/// All seven maps are always present (possibly empty), so consumers never
/// branch on absence. Values are the percent-decoded payloads verbatim; no
/// numeric or boolean coercion happens anywhere in this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCondition {
    /// Plain equality filters (`filter[col]=value`).
    pub equals: HashMap<String, String>,
    pub like: HashMap<String, String>,
    pub not: HashMap<String, String>,
    pub lt: HashMap<String, String>,
    pub lte: HashMap<String, String>,
    pub gt: HashMap<String, String>,
    pub gte: HashMap<String, String>,
}

/// The top-level filter: a base condition plus indexed OR alternatives.
///
/// A record matches when it satisfies the base condition and, if `or` is
/// non-empty, at least one of its elements. OR elements are conditions in
/// their own right but cannot nest another `or` level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterDescriptor {
    #[serde(flatten)]
    pub condition: FilterCondition,
    pub or: Vec<FilterCondition>,
}

impl FilterCondition {
    /// Look up one of the six reserved operator maps by name.
    ///
    /// Returns `None` for anything else, including the `or` group marker;
    /// callers use this as the guard that drops unknown operators.
    pub(crate) fn operator_map_mut(&mut self, operator: &str) -> Option<&mut HashMap<String, String>> {
        match operator {
            "like" => Some(&mut self.like),
            "not" => Some(&mut self.not),
            "lt" => Some(&mut self.lt),
            "lte" => Some(&mut self.lte),
            "gt" => Some(&mut self.gt),
            "gte" => Some(&mut self.gte),
            _ => None,
        }
    }

    /// True when no filter of any kind has been recorded.
    pub fn is_empty(&self) -> bool {
        self.equals.is_empty()
            && self.like.is_empty()
            && self.not.is_empty()
            && self.lt.is_empty()
            && self.lte.is_empty()
            && self.gt.is_empty()
            && self.gte.is_empty()
    }
}

impl FilterDescriptor {
    /// Access the OR element at `index`, growing the vector with empty
    /// conditions as needed. Gaps are not expected in well-formed input, but a
    /// sparse index must not panic or silently re-number the alternatives.
    pub(crate) fn or_slot_mut(&mut self, index: usize) -> &mut FilterCondition {
        if index >= self.or.len() {
            self.or.resize_with(index + 1, FilterCondition::default);
        }
        &mut self.or[index]
    }

    /// True when neither the base condition nor any OR element holds a filter.
    pub fn is_empty(&self) -> bool {
        self.condition.is_empty() && self.or.iter().all(FilterCondition::is_empty)
    }
}
