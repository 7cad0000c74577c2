use super::buffer::Buffer;
use super::value::FixedWidth;

/// One way of moving fixed-width values between memory and their
/// little-endian wire form. Every implementation must produce identical
/// bytes for identical input.
///
/// Decoding works on a window already bounds-checked by the caller, with
/// `window.len()` an exact multiple of `T::WIDTH`.
pub trait WirePath {
    const NAME: &'static str;

    /// Appends one value per `T::WIDTH` stride of `window` to `out`.
    fn decode_into<T: FixedWidth>(window: &[u8], out: &mut Vec<T>);

    /// Appends exactly `values.len() * T::WIDTH` bytes to `buffer` with at
    /// most one growth. Earlier bytes are untouched.
    fn encode_into<T: FixedWidth>(values: &[T], buffer: &mut Buffer);
}

#[cfg(all(target_endian = "little", not(feature = "portable")))]
pub type SelectedPath = super::native::NativePath;

#[cfg(not(all(target_endian = "little", not(feature = "portable"))))]
pub type SelectedPath = super::portable::PortablePath;

pub fn selected_path_name() -> &'static str {
    <SelectedPath as WirePath>::NAME
}
