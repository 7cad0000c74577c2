use super::buffer::Buffer;
use super::datetime::{Date, Date32, DateTime, DateTime64};
use super::error::CodecError;
use super::fixed::FixedWidthCodec;
use super::reader::Reader;
use super::value::{Enum8, Enum16, FixedWidth};

/// Object-safe view of a column, so a block writer can hold a mixed list
/// of typed columns and drive them in schema order.
pub trait ColumnData {
    fn type_name(&self) -> &'static str;
    fn rows(&self) -> usize;
    fn reset(&mut self);

    /// Appends `rows` values read from `reader`. Leaves the column unchanged
    /// on error.
    fn decode_column(&mut self, reader: &mut Reader<'_>, rows: usize) -> Result<(), CodecError>;

    fn encode_column(&self, buffer: &mut Buffer);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column<T> {
    values: Vec<T>,
}

impl<T: FixedWidth> Column<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with_capacity(rows: usize) -> Self {
        Self {
            values: Vec::with_capacity(rows),
        }
    }

    pub fn append(&mut self, v: T) {
        self.values.push(v);
    }

    pub fn append_slice(&mut self, vs: &[T]) {
        self.values.extend_from_slice(vs);
    }

    pub fn row(&self, i: usize) -> Option<T> {
        self.values.get(i).copied()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T: FixedWidth> Default for Column<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FixedWidth> From<Vec<T>> for Column<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T: FixedWidth> ColumnData for Column<T> {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn rows(&self) -> usize {
        self.values.len()
    }

    fn reset(&mut self) {
        self.values.clear();
    }

    fn decode_column(&mut self, reader: &mut Reader<'_>, rows: usize) -> Result<(), CodecError> {
        FixedWidthCodec::<T>::decode_append(reader, rows, &mut self.values)
    }

    fn encode_column(&self, buffer: &mut Buffer) {
        FixedWidthCodec::<T>::encode(&self.values, buffer)
    }
}

pub type ColUInt8 = Column<u8>;
pub type ColInt8 = Column<i8>;
pub type ColUInt16 = Column<u16>;
pub type ColInt16 = Column<i16>;
pub type ColUInt32 = Column<u32>;
pub type ColInt32 = Column<i32>;
pub type ColUInt64 = Column<u64>;
pub type ColInt64 = Column<i64>;
pub type ColFloat32 = Column<f32>;
pub type ColFloat64 = Column<f64>;
pub type ColEnum8 = Column<Enum8>;
pub type ColEnum16 = Column<Enum16>;
pub type ColDate = Column<Date>;
pub type ColDate32 = Column<Date32>;
pub type ColDateTime = Column<DateTime>;
pub type ColDateTime64 = Column<DateTime64>;
