use std::marker::PhantomData;

use tracing::{debug, trace};

use super::buffer::Buffer;
use super::datetime::{Date, Date32, DateTime, DateTime64};
use super::error::CodecError;
use super::path::{SelectedPath, WirePath};
use super::reader::Reader;
use super::value::{Enum8, Enum16, FixedWidth};

/// Column codec for one fixed-width value kind.
///
/// Wire layout for `rows` values is `rows` little-endian groups of
/// `T::WIDTH` bytes, with no prefix, padding or separator. The row count
/// always comes from the enclosing block, never from the column bytes.
///
/// `P` picks the memory path; it defaults to the one selected at build
/// time (see [`SelectedPath`]).
pub struct FixedWidthCodec<T, P = SelectedPath> {
    _marker: PhantomData<fn() -> (T, P)>,
}

impl<T: FixedWidth, P: WirePath> FixedWidthCodec<T, P> {
    pub const WIDTH: usize = T::WIDTH;

    /// Decodes exactly `rows` values with a single bounds-checked read.
    ///
    /// A zero-row column does not touch the reader at all, so it can be
    /// decoded after the frame is exhausted.
    pub fn decode(reader: &mut Reader<'_>, rows: usize) -> Result<Vec<T>, CodecError> {
        let mut out = Vec::new();
        Self::decode_append(reader, rows, &mut out)?;
        Ok(out)
    }

    /// Same as [`decode`](Self::decode) but appends to `out`. On error `out`
    /// is left untouched.
    pub fn decode_append(
        reader: &mut Reader<'_>,
        rows: usize,
        out: &mut Vec<T>,
    ) -> Result<(), CodecError> {
        if rows == 0 {
            return Ok(());
        }
        let window = Self::read_window(reader, rows)?;
        P::decode_into(window, out);
        trace!(
            target: "col_wire::codec",
            column = T::TYPE_NAME,
            path = P::NAME,
            rows,
            "decoded column"
        );
        Ok(())
    }

    /// Appends `values.len() * WIDTH` bytes to `buffer` in one growth.
    /// An empty slice leaves the buffer untouched.
    pub fn encode(values: &[T], buffer: &mut Buffer) {
        if values.is_empty() {
            return;
        }
        P::encode_into(values, buffer);
        trace!(
            target: "col_wire::codec",
            column = T::TYPE_NAME,
            path = P::NAME,
            rows = values.len(),
            "encoded column"
        );
    }

    fn read_window<'a>(reader: &mut Reader<'a>, rows: usize) -> Result<&'a [u8], CodecError> {
        let result = match rows.checked_mul(T::WIDTH) {
            Some(byte_len) => reader.read_raw(byte_len),
            None => Err(CodecError::short_read(
                "read raw",
                usize::MAX,
                reader.remaining(),
            )),
        };
        result.map_err(|err| {
            debug!(
                target: "col_wire::codec",
                column = T::TYPE_NAME,
                rows,
                error = %err,
                "column read failed"
            );
            err.within(format!("decode {} column", T::TYPE_NAME))
        })
    }
}

pub type UInt8Codec = FixedWidthCodec<u8>;
pub type Int8Codec = FixedWidthCodec<i8>;
pub type UInt16Codec = FixedWidthCodec<u16>;
pub type Int16Codec = FixedWidthCodec<i16>;
pub type UInt32Codec = FixedWidthCodec<u32>;
pub type Int32Codec = FixedWidthCodec<i32>;
pub type UInt64Codec = FixedWidthCodec<u64>;
pub type Int64Codec = FixedWidthCodec<i64>;
pub type Float32Codec = FixedWidthCodec<f32>;
pub type Float64Codec = FixedWidthCodec<f64>;
pub type Enum8Codec = FixedWidthCodec<Enum8>;
pub type Enum16Codec = FixedWidthCodec<Enum16>;
pub type DateCodec = FixedWidthCodec<Date>;
pub type Date32Codec = FixedWidthCodec<Date32>;
pub type DateTimeCodec = FixedWidthCodec<DateTime>;
pub type DateTime64Codec = FixedWidthCodec<DateTime64>;
