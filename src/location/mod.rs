//! URL resolution and `<loc>` encoding.

mod encode;
mod resolve;

pub use encode::{encode_escape_url, encode_query_value, percent_encode_non_ascii};
pub use resolve::resolve_location;
