//! SHA-1 engine: padding, block compression, and finalization.

use tracing::debug;

use crate::buffer::BlockBuffer;
use crate::digest::Digest;
use crate::{BLOCK_SIZE, DIGEST_LEN};

const STATE_WORDS: usize = 5;
const ROUNDS: usize = 80;
const LENGTH_BYTES: usize = 8;

const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];

/// The five running state words of one SHA-1 computation.
///
/// Construction is initialization: a fresh state is required per message,
/// and [`Sha1State::finalize`] consumes the state, so a finished hash
/// cannot leak into the next one.
#[derive(Clone, Debug)]
pub struct Sha1State {
    h: [u32; STATE_WORDS],
}

impl Sha1State {
    /// Create a state holding the five SHA-1 initialization constants.
    #[must_use]
    pub fn new() -> Self {
        Self { h: INITIAL_STATE }
    }

    /// Run 80 compression rounds over one 64-byte block.
    ///
    /// The block's 4-byte groups are loaded big-endian, first byte most
    /// significant, exactly once, before the message schedule is expanded.
    /// Blocks of one message must be processed in order; each block's
    /// output state is the next block's input state.
    pub fn process_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut w = [0u32; ROUNDS];
        for (idx, chunk) in block.chunks_exact(4).enumerate() {
            w[idx] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for t in 16..ROUNDS {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let mut a = self.h[0];
        let mut b = self.h[1];
        let mut c = self.h[2];
        let mut d = self.h[3];
        let mut e = self.h[4];

        for (t, word) in w.iter().enumerate() {
            let phase = RoundPhase::of_round(t);
            let temp = e
                .wrapping_add(a.rotate_left(5))
                .wrapping_add(*word)
                .wrapping_add(phase.constant())
                .wrapping_add(phase.mix(b, c, d));

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        self.h[4] = self.h[4].wrapping_add(e);
    }

    /// Serialize the state into the final digest, each word written
    /// most-significant-byte first.
    #[must_use]
    pub fn finalize(self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, value) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&value.to_be_bytes());
        }
        Digest::from_array(out)
    }
}

impl Default for Sha1State {
    fn default() -> Self {
        Self::new()
    }
}

/// Pad a staged message up to a multiple of 64 bytes.
///
/// Appends a single `0x80`, zero bytes until the length is 8 short of a
/// block boundary, then the original bit length as a big-endian 64-bit
/// integer. When fewer than 9 bytes remain free in the last block, the
/// padding spills into a fresh all-zero block ahead of the length field.
pub fn pad_message(buffer: &mut BlockBuffer) {
    let bit_len = (buffer.len() as u64) * 8;

    buffer.push(0x80);
    while buffer.len() % BLOCK_SIZE != BLOCK_SIZE - LENGTH_BYTES {
        buffer.push(0x00);
    }
    for byte in bit_len.to_be_bytes() {
        buffer.push(byte);
    }
}

/// Hash a message in one shot: stage, pad, compress, finalize.
#[must_use]
pub fn sha1(message: &[u8]) -> Digest {
    let mut staged = BlockBuffer::new();
    staged.extend_from_slice(message);
    sha1_buffer(staged)
}

/// Hash an already staged message, padding it in place.
#[must_use]
pub fn sha1_buffer(mut staged: BlockBuffer) -> Digest {
    let message_len = staged.len();
    pad_message(&mut staged);

    let mut state = Sha1State::new();
    for block in staged.blocks() {
        state.process_block(block);
    }
    debug!(
        message_len,
        blocks = staged.len() / BLOCK_SIZE,
        "message compressed"
    );
    state.finalize()
}

/// One of the four round phases, selected from the round index.
///
/// Each phase carries its mixing function and additive constant, so the
/// 80-round loop stays a single body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundPhase {
    /// Rounds [0, 20)
    Choice,
    /// Rounds [20, 40)
    Parity,
    /// Rounds [40, 60)
    Majority,
    /// Rounds [60, 80)
    LateParity,
}

impl RoundPhase {
    fn of_round(round: usize) -> Self {
        match round {
            0..=19 => Self::Choice,
            20..=39 => Self::Parity,
            40..=59 => Self::Majority,
            _ => Self::LateParity,
        }
    }

    const fn constant(self) -> u32 {
        match self {
            Self::Choice => 0x5A82_7999,
            Self::Parity => 0x6ED9_EBA1,
            Self::Majority => 0x8F1B_BCDC,
            Self::LateParity => 0xCA62_C1D6,
        }
    }

    fn mix(self, b: u32, c: u32, d: u32) -> u32 {
        match self {
            Self::Choice => choice(b, c, d),
            Self::Parity | Self::LateParity => parity(b, c, d),
            Self::Majority => majority(b, c, d),
        }
    }
}

#[inline(always)]
fn choice(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn majority(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}
