use super::buffer::Buffer;
use super::path::WirePath;
use super::value::FixedWidth;

/// Byte-order-explicit path. Compiles and behaves the same on any target.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortablePath;

impl WirePath for PortablePath {
    const NAME: &'static str = "portable";

    #[inline]
    fn decode_into<T: FixedWidth>(window: &[u8], out: &mut Vec<T>) {
        debug_assert_eq!(window.len() % T::WIDTH, 0);
        out.reserve(window.len() / T::WIDTH);
        // chunks_exact hoists the bounds check out of the loop.
        out.extend(window.chunks_exact(T::WIDTH).map(T::from_le_chunk));
    }

    #[inline]
    fn encode_into<T: FixedWidth>(values: &[T], buffer: &mut Buffer) {
        let out = buffer.grow(values.len() * T::WIDTH);
        for (slot, v) in out.chunks_exact_mut(T::WIDTH).zip(values) {
            v.write_le(slot);
        }
    }
}
