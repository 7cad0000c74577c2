//! Fixed-width column codec for the ClickHouse native protocol.
//!
//! A received frame is read through one [`Reader`], column by column in
//! schema order; an outgoing frame is built in one [`Buffer`]. Each column
//! is `rows` little-endian values of a fixed width, back to back.

mod buffer;
mod column;
mod datetime;
mod error;
mod fixed;
#[cfg(target_endian = "little")]
mod native;
mod path;
mod portable;
mod reader;
mod value;

#[cfg(test)]
mod fixed_test;
#[cfg(test)]
mod path_test;

pub use buffer::Buffer;
pub use column::{
    ColDate, ColDate32, ColDateTime, ColDateTime64, ColEnum8, ColEnum16, ColFloat32, ColFloat64,
    ColInt8, ColInt16, ColInt32, ColInt64, ColUInt8, ColUInt16, ColUInt32, ColUInt64, Column,
    ColumnData,
};
pub use datetime::{Date, Date32, DateTime, DateTime64, Precision};
pub use error::CodecError;
pub use fixed::{
    Date32Codec, DateCodec, DateTime64Codec, DateTimeCodec, Enum8Codec, Enum16Codec,
    FixedWidthCodec, Float32Codec, Float64Codec, Int8Codec, Int16Codec, Int32Codec, Int64Codec,
    UInt8Codec, UInt16Codec, UInt32Codec, UInt64Codec,
};
#[cfg(target_endian = "little")]
pub use native::NativePath;
pub use path::{SelectedPath, WirePath, selected_path_name};
pub use portable::PortablePath;
pub use reader::Reader;
pub use value::{Enum8, Enum16, FixedWidth};
