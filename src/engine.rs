//! Request parsing engine.
//!
//! This module is the operational core of the crate. Parsing a request URL is
//! a short pipeline:
//!
//! ```text
//! url ── split on first '?' ──┬─ path  ── trim_slashes ── resolve_endpoint   (path.rs)
//!                             │
//!                             └─ query ── split on '&'
//!                                         percent-decode each fragment
//!                                         classify (grammar table)           (fragment.rs)
//!                                         apply matching handler             (dispatch.rs)
//!                                           ├─ include/sort/fields/page      (family.rs)
//!                                           └─ filter handlers               (filter.rs)
//!                                                └─ OR slots composed via
//!                                                   structural merge         (merge.rs)
//! ```
//!
//! The descriptor is threaded mutably through the handlers and accumulates
//! fragment by fragment; the dispatcher never looks at more than one fragment
//! at a time, so fragment order only matters where a family's own contract
//! says it does (replace vs. append vs. last-write-wins).
//!
//! ## Responsibilities by module
//!
//! - `path.rs`: slash normalization and endpoint-path resolution.
//! - `fragment.rs`: the ordered grammar table; assigns each decoded fragment
//!   to exactly one [`fragment::Fragment`] variant.
//! - `dispatch.rs`: the query-string loop (split, decode, classify, apply).
//! - `family.rs`: include / sort / fields / page handlers.
//! - `filter.rs`: plain, operator-qualified and OR-grouped filter handlers.
//! - `merge.rs`: key-wise merge used to compose OR-group elements.
//!
//! ## Debugging
//!
//! Setting `REQUERY_DEBUG_FRAGMENTS=1` prints each fragment's classification
//! (or the fact that it was dropped) to stderr.

pub(crate) mod dispatch;
pub(crate) mod family;
pub(crate) mod filter;
pub(crate) mod fragment;
pub(crate) mod merge;
pub(crate) mod path;
