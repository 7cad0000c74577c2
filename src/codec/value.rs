/// A scalar with a fixed little-endian wire width.
///
/// Both codec paths are generic over this trait: the portable path goes
/// through `from_le_chunk`/`write_le` one stride at a time, the native path
/// copies the in-memory representation as a block.
///
/// # Safety
///
/// Implementors must be plain data: `size_of::<Self>() == WIDTH`, no padding
/// and no invalid bit patterns, with the in-memory layout of the underlying
/// integer or float. The native path reinterprets `[u8]` as `[Self]` and back.
pub unsafe trait FixedWidth: Copy + Send + Sync + 'static {
    const WIDTH: usize;
    /// Column type name on the wire protocol, e.g. `UInt16`.
    const TYPE_NAME: &'static str;

    /// `chunk.len()` is always `WIDTH`.
    fn from_le_chunk(chunk: &[u8]) -> Self;

    /// `out.len()` is always `WIDTH`.
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_primitive {
    ($($t:ty => $name:literal),* $(,)?) => {$(
        unsafe impl FixedWidth for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();
            const TYPE_NAME: &'static str = $name;

            #[inline(always)]
            fn from_le_chunk(chunk: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(chunk);
                <$t>::from_le_bytes(raw)
            }

            #[inline(always)]
            fn write_le(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_le_bytes());
            }
        }
    )*};
}

impl_primitive! {
    u8 => "UInt8",
    i8 => "Int8",
    u16 => "UInt16",
    i16 => "Int16",
    u32 => "UInt32",
    i32 => "Int32",
    u64 => "UInt64",
    i64 => "Int64",
    f32 => "Float32",
    f64 => "Float64",
}

/// Implements [`FixedWidth`] for a `#[repr(transparent)]` newtype by
/// delegating to its inner integer.
macro_rules! impl_newtype {
    ($($t:ident($inner:ty) => $name:literal),* $(,)?) => {$(
        unsafe impl $crate::codec::value::FixedWidth for $t {
            const WIDTH: usize = <$inner as $crate::codec::value::FixedWidth>::WIDTH;
            const TYPE_NAME: &'static str = $name;

            #[inline(always)]
            fn from_le_chunk(chunk: &[u8]) -> Self {
                $t(<$inner as $crate::codec::value::FixedWidth>::from_le_chunk(chunk))
            }

            #[inline(always)]
            fn write_le(self, out: &mut [u8]) {
                $crate::codec::value::FixedWidth::write_le(self.0, out)
            }
        }

        impl From<$inner> for $t {
            fn from(raw: $inner) -> Self {
                $t(raw)
            }
        }

        impl From<$t> for $inner {
            fn from(v: $t) -> Self {
                v.0
            }
        }
    )*};
}

pub(crate) use impl_newtype;

/// Raw code of an 8-bit enumeration value.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Enum8(pub i8);

/// Raw code of a 16-bit enumeration value.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Enum16(pub i16);

impl_newtype! {
    Enum8(i8) => "Enum8",
    Enum16(i16) => "Enum16",
}
