//! Type-name driven access to the codec, with JSON on the value side. Used
//! by the `colwire` binary to look at captured column bytes.

mod column_type;
mod error;
mod json;


pub use column_type::ColumnType;
pub use error::InspectError;
pub use json::{decode_json, encode_json};
