//! Include / sort / fields / page handlers.
//!
//! Each handler is a pure function of its arguments mutating one slot of the
//! query descriptor. The accumulation rules differ per family and are part of
//! the contract:
//!
//! - `include`, `sort`: a later fragment REPLACES the whole list.
//! - `fields[x]`: a later fragment APPENDS to the list for `x`.
//! - `page[k]`: a later fragment overwrites the value for `k`.

use std::collections::HashMap;

/// Replace `include` with the comma-split `values`.
///
/// No escaping of `,` inside a single value is supported; duplicates and
/// order are preserved as given.
pub fn parse_include(values: &str, include: &mut Vec<String>) {
    *include = split_list(values);
}

/// Replace `sort` with the comma-split `values` (`-` prefixes kept verbatim).
pub fn parse_sort(values: &str, sort: &mut Vec<String>) {
    *sort = split_list(values);
}

/// Append the comma-split `values` to the fieldset for `resource`,
/// creating the entry on first sight.
pub fn parse_fields(resource: &str, values: &str, fields: &mut HashMap<String, Vec<String>>) {
    fields.entry(resource.to_string()).or_default().extend(split_list(values));
}

/// Store `page[key] = value`, overwriting any earlier value. The value is
/// kept whole, commas and all.
pub fn parse_page(key: &str, value: &str, page: &mut HashMap<String, String>) {
    page.insert(key.to_string(), value.to_string());
}

fn split_list(values: &str) -> Vec<String> {
    values.split(',').map(str::to_string).collect()
}
