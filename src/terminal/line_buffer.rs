/// Bytes the buffer is sized for. One slot stays free, mirroring a
/// NUL-terminated line, so at most `CAPACITY - 1` bytes are ever held.
pub const CAPACITY: usize = 256;

/// The line being typed at the prompt.
///
/// Append-only apart from `pop` and `clear`; once full, further pushes are
/// dropped.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    bytes: [u8; CAPACITY],
    len: usize,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; CAPACITY],
            len: 0,
        }
    }

    /// Append `byte`. Returns `false` and leaves the buffer untouched when full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let byte = self.bytes[self.len];
        self.bytes[self.len] = 0;
        Some(byte)
    }

    pub fn is_full(&self) -> bool {
        self.len >= CAPACITY - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn clear(&mut self) {
        self.bytes = [0; CAPACITY];
        self.len = 0;
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
