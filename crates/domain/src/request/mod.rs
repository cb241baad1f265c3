//! HTTP Request domain types

mod body;
mod method;
mod path;
mod query;
mod spec;

pub use body::{FormDataField, RequestBody};
pub use method::HttpMethod;
pub use query::{QueryParam, QueryParams};
pub use spec::RequestSpec;
