//! HMAC-SHA1 built on the in-house SHA-1.

use tracing::debug;

use crate::buffer::BlockBuffer;
use crate::digest::Digest;
use crate::sha1::{Sha1State, pad_message, sha1};
use crate::{BLOCK_SIZE, DIGEST_LEN};

const INNER_PAD: u8 = 0x36;
const OUTER_PAD: u8 = 0x5c;

/// Keyed two-pass HMAC composer.
///
/// Construction derives the ipad/opad blocks from the key; signing runs two
/// sequential SHA-1 passes, each over its own transient buffer with its own
/// freshly initialized state. Keys longer than one block are first hashed
/// down to digest length, per RFC 2104; shorter keys are zero-padded on the
/// right.
#[derive(Clone)]
pub struct HmacSha1 {
    inner_pad: [u8; BLOCK_SIZE],
    outer_pad: [u8; BLOCK_SIZE],
}

impl HmacSha1 {
    /// Derive the inner and outer keyed pad blocks from `key`.
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        let mut key_block = [0u8; BLOCK_SIZE];
        if key.len() > BLOCK_SIZE {
            let hashed = sha1(key);
            key_block[..DIGEST_LEN].copy_from_slice(hashed.as_bytes());
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut inner_pad = [0u8; BLOCK_SIZE];
        let mut outer_pad = [0u8; BLOCK_SIZE];
        for (idx, byte) in key_block.iter().enumerate() {
            inner_pad[idx] = byte ^ INNER_PAD;
            outer_pad[idx] = byte ^ OUTER_PAD;
        }

        Self {
            inner_pad,
            outer_pad,
        }
    }

    /// Authenticate `message` with the derived key material.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Digest {
        let inner_digest = keyed_pass(&self.inner_pad, message);
        debug!(message_len = message.len(), "inner pass complete");
        keyed_pass(&self.outer_pad, inner_digest.as_bytes())
    }

    /// One-shot convenience: derive the pads and sign in one call.
    #[must_use]
    pub fn compute(key: &[u8], message: &[u8]) -> Digest {
        Self::new(key).sign(message)
    }
}

/// One hash pass over `pad ++ payload` with a fresh buffer and state.
fn keyed_pass(pad: &[u8; BLOCK_SIZE], payload: &[u8]) -> Digest {
    let mut staged = BlockBuffer::new();
    staged.extend_from_slice(pad);
    staged.extend_from_slice(payload);
    pad_message(&mut staged);

    let mut state = Sha1State::new();
    for block in staged.blocks() {
        state.process_block(block);
    }
    state.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(digest: &Digest) -> String {
        digest
            .as_bytes()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    #[test]
    fn rfc_2202_case_1() {
        let key = [0x0bu8; 20];
        let data = b"Hi There";
        let expected = "b617318655057264e28bc0b6fb378c8ef146be00";
        assert_eq!(hex(&HmacSha1::compute(&key, data)), expected);
    }

    #[test]
    fn rfc_2202_case_2() {
        let key = b"Jefe";
        let data = b"what do ya want for nothing?";
        let expected = "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79";
        assert_eq!(hex(&HmacSha1::compute(key, data)), expected);
    }

    #[test]
    fn rfc_2202_case_3() {
        let key = [0xAAu8; 20];
        let data = [0xDDu8; 50];
        let expected = "125d7342b9ac11cd91a39af48aa17b4f63f175d3";
        assert_eq!(hex(&HmacSha1::compute(&key, &data)), expected);
    }

    #[test]
    fn quick_brown_fox_vector() {
        let tag = HmacSha1::compute(b"key", b"The quick brown fox jumps over the lazy dog");
        assert_eq!(hex(&tag), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
    }

    #[test]
    fn oversized_key_is_hashed_first() {
        // RFC 2202 case 6: an 80-byte key exceeds the block size.
        let key = [0xAAu8; 80];
        let data = b"Test Using Larger Than Block-Size Key - Hash Key First";
        let expected = "aa4ae5e15272d00e95705637ce8a3b55ed402112";
        assert_eq!(hex(&HmacSha1::compute(&key, data)), expected);
    }

    #[test]
    fn differs_from_hash_of_concatenation() {
        let key = b"key";
        let message = b"The quick brown fox jumps over the lazy dog";

        let mut concatenated = key.to_vec();
        concatenated.extend_from_slice(message);
        assert_ne!(HmacSha1::compute(key, message), sha1(&concatenated));
    }

    #[test]
    fn reusable_composer_matches_one_shot() {
        let composer = HmacSha1::new(b"key");
        assert_eq!(
            composer.sign(b"first message"),
            HmacSha1::compute(b"key", b"first message")
        );
        assert_eq!(
            composer.sign(b"second message"),
            HmacSha1::compute(b"key", b"second message")
        );
    }
}
