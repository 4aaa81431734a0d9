//! Growable byte buffer that stages a message before hashing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Owned, growable sequence of bytes with amortized append.
///
/// Capacity climbs in whole 64-byte blocks: whenever an append would exceed
/// the current capacity, one more block is reserved. Every staged message
/// therefore sits in an allocation that is a whole number of compression
/// blocks, and [`BlockBuffer::blocks`] can walk it without a remainder check.
///
/// Dropping the buffer releases its allocation immediately; ownership rules
/// make use-after-release unrepresentable.
#[derive(Clone, Debug)]
pub struct BlockBuffer {
    data: Vec<u8>,
    cap: usize,
}

impl Default for BlockBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuffer {
    /// Create an empty buffer with one block of capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(BLOCK_SIZE)
    }

    /// Create an empty buffer with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cap: capacity,
        }
    }

    /// Append one byte, growing the capacity by one block if it is full.
    pub fn push(&mut self, byte: u8) {
        if self.data.len() + 1 > self.cap {
            self.cap += BLOCK_SIZE;
            self.data.reserve_exact(self.cap - self.data.len());
        }
        self.data.push(byte);
    }

    /// Append a run of bytes, preserving the block-at-a-time growth policy.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    /// Number of bytes currently staged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current capacity in bytes. Always at least `len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Borrow the staged bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over the complete 64-byte blocks currently staged.
    ///
    /// Trailing bytes short of a full block are not yielded; a padded
    /// message has none.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8; BLOCK_SIZE]> {
        self.data
            .chunks_exact(BLOCK_SIZE)
            .map(|chunk| chunk.try_into().expect("chunks_exact yields full blocks"))
    }
}

/// Stage the raw contents of a file into a fresh buffer.
///
/// The file is read as bytes, not text; no decoding or newline translation
/// is applied.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<BlockBuffer> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Input {
        path: path.display().to_string(),
        source,
    })?;

    let mut buffer = BlockBuffer::new();
    buffer.extend_from_slice(&bytes);
    debug!(path = %path.display(), staged = buffer.len(), "staged input file");
    Ok(buffer)
}
