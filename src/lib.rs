#[macro_use]
mod macros;

mod api;
mod descriptor;
mod engine;
mod error;

pub use api::{parse_request, resolve_endpoint};
pub use descriptor::{FilterCondition, FilterDescriptor, QueryDescriptor, RequestDescriptor};
pub use engine::dispatch::parse_query;
pub use engine::family::{parse_fields, parse_include, parse_page, parse_sort};
pub use engine::filter::parse_filter;
pub use engine::path::{Endpoint, trim_slashes};
pub use error::ParseError;
