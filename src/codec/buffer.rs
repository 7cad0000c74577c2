use bytes::Bytes;

use crate::shared::config::CONFIG;

/// Append-only byte sink for one outgoing frame.
///
/// Content is always the concatenation of everything appended so far, in
/// call order. Nothing already written can be removed or rewritten.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    buf: Vec<u8>,
}

impl Buffer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Buffer pre-sized with the configured per-frame capacity.
    pub fn for_frame() -> Self {
        Self::with_capacity(CONFIG.codec.sink_capacity)
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Extends the buffer by `n` zeroed bytes and hands back that new tail
    /// for the caller to fill. Bytes before the old end are not reachable.
    ///
    /// The zero fill is a memset the caller then overwrites. Only the
    /// portable path pays it; the native path goes through `append`.
    #[inline]
    pub(crate) fn grow(&mut self, n: usize) -> &mut [u8] {
        let start = self.buf.len();
        self.buf.resize(start + n, 0);
        &mut self.buf[start..]
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    /// Hands the finished frame to the transport without copying.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.buf)
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}
