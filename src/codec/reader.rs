use super::error::CodecError;

/// Forward-only cursor over the raw bytes of one received frame.
///
/// Columns are decoded in protocol order, each taking exactly the bytes it
/// owns through [`Reader::read_raw`]. The cursor is handed from column to
/// column by `&mut`, so a frame is only ever read by one caller at a time.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Returns the next `n` bytes and advances past them.
    ///
    /// Fails with [`CodecError::ShortRead`] when fewer than `n` bytes remain;
    /// the offset is left where it was.
    #[inline]
    pub fn read_raw(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let rest = &self.data[self.offset..];
        if n > rest.len() {
            return Err(CodecError::short_read("read raw", n, rest.len()));
        }
        let (head, _) = rest.split_at(n);
        self.offset += n;
        Ok(head)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset == self.data.len()
    }

    /// Total length of the frame, read or not.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
