use std::ops::Range;

use memchr::memchr;

pub const NEWLINE: u8 = b'\n';

/// A line-aligned slice of the input handed to one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub len: usize,
}

impl Chunk {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Splits `data` into exactly `parts` contiguous chunks.
///
/// Each chunk but the last is `ceil(len / parts)` bytes, extended forward up
/// to and including the next newline. The last chunk takes whatever is left,
/// so a final line without a terminator stays in one piece. Once the file is
/// used up the remaining chunks are empty and start at `data.len()`.
pub fn plan(data: &[u8], parts: usize) -> Vec<Chunk> {
    let parts = parts.max(1);
    let target = data.len().div_ceil(parts);
    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0usize;

    for i in 0..parts {
        let ideal = start + target;
        let end = if i + 1 == parts || ideal >= data.len() {
            data.len()
        } else {
            match memchr(NEWLINE, &data[ideal..]) {
                Some(off) => ideal + off + 1,
                None => data.len(),
            }
        };
        chunks.push(Chunk {
            start,
            len: end - start,
        });
        start = end;
    }

    chunks
}
