use std::ptr;

use super::buffer::Buffer;
use super::path::WirePath;
use super::value::FixedWidth;

/// Bulk-copy path for little-endian hosts, where the wire layout of a value
/// slice is its memory layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePath;

impl WirePath for NativePath {
    const NAME: &'static str = "native";

    #[inline]
    fn decode_into<T: FixedWidth>(window: &[u8], out: &mut Vec<T>) {
        debug_assert_eq!(std::mem::size_of::<T>(), T::WIDTH);
        debug_assert_eq!(window.len() % T::WIDTH, 0);
        let rows = window.len() / T::WIDTH;
        out.reserve(rows);
        let len = out.len();
        // SAFETY: `reserve` guarantees room for `rows` more elements past
        // `len`. `FixedWidth` implementors are plain data of exactly
        // `WIDTH` bytes with every bit pattern valid, and the host is
        // little-endian, so copying `rows * WIDTH` raw bytes yields `rows`
        // initialized values. The destination is byte-addressed, so the
        // unaligned source is fine.
        unsafe {
            let dst = out.as_mut_ptr().add(len) as *mut u8;
            ptr::copy_nonoverlapping(window.as_ptr(), dst, window.len());
            out.set_len(len + rows);
        }
    }

    #[inline]
    fn encode_into<T: FixedWidth>(values: &[T], buffer: &mut Buffer) {
        debug_assert_eq!(std::mem::size_of::<T>(), T::WIDTH);
        // SAFETY: `values` is a live slice of plain data without padding,
        // so viewing its `size_of_val` bytes as `u8` is valid for reads.
        let src = unsafe {
            std::slice::from_raw_parts(values.as_ptr() as *const u8, std::mem::size_of_val(values))
        };
        buffer.append(src);
    }
}
