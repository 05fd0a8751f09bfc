//! Byte accumulator for one in-flight string or number token.

use alloc::vec::Vec;

/// Bytes of inline storage before the buffer spills to the heap. Most JSON
/// tokens (keys, short strings, numbers) fit without allocating.
const INLINE_CAPACITY: usize = 48;

/// Growable byte buffer with inline small-size optimization.
///
/// The buffer lives for the duration of one token. Its contents are handed
/// to the sink as a borrowed slice via [`ScratchBuffer::as_bytes`] and must
/// not be referenced after the decoding call returns.
#[derive(Debug)]
pub(crate) enum ScratchBuffer {
    Inline { buf: [u8; INLINE_CAPACITY], len: usize },
    Heap(Vec<u8>),
}

impl ScratchBuffer {
    pub(crate) fn new() -> Self {
        Self::Inline {
            buf: [0; INLINE_CAPACITY],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, byte: u8) {
        match self {
            Self::Inline { buf, len } if *len < INLINE_CAPACITY => {
                buf[*len] = byte;
                *len += 1;
            }
            Self::Inline { buf, len } => {
                let mut heap = Vec::with_capacity(INLINE_CAPACITY * 2);
                heap.extend_from_slice(&buf[..*len]);
                heap.push(byte);
                *self = Self::Heap(heap);
            }
            Self::Heap(heap) => heap.push(byte),
        }
    }

    /// Append the UTF-8 encoding of `ch` (1-4 bytes).
    pub(crate) fn push_char(&mut self, ch: char) {
        let mut utf8 = [0_u8; 4];
        for &byte in ch.encode_utf8(&mut utf8).as_bytes() {
            self.push(byte);
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Inline { buf, len } => &buf[..*len],
            Self::Heap(heap) => heap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{INLINE_CAPACITY, ScratchBuffer};

    #[test]
    fn starts_inline() {
        let mut scratch = ScratchBuffer::new();
        scratch.push(b'a');
        scratch.push(b'b');
        assert!(matches!(scratch, ScratchBuffer::Inline { .. }));
        assert_eq!(scratch.as_bytes(), b"ab");
    }

    #[test]
    fn spills_to_heap_preserving_contents() {
        let mut scratch = ScratchBuffer::new();
        for i in 0..=INLINE_CAPACITY {
            scratch.push(u8::try_from(i % 251).unwrap());
        }
        assert!(matches!(scratch, ScratchBuffer::Heap(_)));
        assert_eq!(scratch.as_bytes().len(), INLINE_CAPACITY + 1);
        for (i, byte) in scratch.as_bytes().iter().enumerate() {
            assert_eq!(usize::from(*byte), i % 251);
        }
    }

    #[test]
    fn push_char_appends_utf8_bytes() {
        let mut scratch = ScratchBuffer::new();
        scratch.push_char('A');
        scratch.push_char('é');
        scratch.push_char('\u{1F600}');
        assert_eq!(scratch.as_bytes(), "Aé\u{1F600}".as_bytes());
    }
}
