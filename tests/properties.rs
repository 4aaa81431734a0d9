use proptest::prelude::*;
use sha1mac::{BLOCK_SIZE, BlockBuffer, DIGEST_LEN, HmacSha1, Sha1State, pad_message, sha1};

fn staged(message: &[u8]) -> BlockBuffer {
    let mut buffer = BlockBuffer::new();
    buffer.extend_from_slice(message);
    buffer
}

proptest! {
    #[test]
    fn padded_layout_holds_for_any_message(message in proptest::collection::vec(any::<u8>(), 0..600)) {
        let mut buffer = staged(&message);
        pad_message(&mut buffer);
        let padded = buffer.as_slice();

        // Smallest multiple of 64 that fits message + 0x80 + 8 length bytes.
        let expected_len = (message.len() + 9).div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
        prop_assert_eq!(padded.len(), expected_len);

        prop_assert_eq!(&padded[..message.len()], &message[..]);
        prop_assert_eq!(padded[message.len()], 0x80);
        prop_assert!(padded[message.len() + 1..expected_len - 8].iter().all(|&b| b == 0));

        let bit_len = (message.len() as u64) * 8;
        prop_assert_eq!(&padded[expected_len - 8..], &bit_len.to_be_bytes()[..]);
    }

    #[test]
    fn digest_is_always_twenty_bytes(message in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(sha1(&message).as_bytes().len(), DIGEST_LEN);
    }

    #[test]
    fn independently_initialized_states_agree(message in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(sha1(&message), sha1(&message));

        let mut buffer = staged(&message);
        pad_message(&mut buffer);
        let mut state = Sha1State::new();
        for block in buffer.blocks() {
            state.process_block(block);
        }
        prop_assert_eq!(state.finalize(), sha1(&message));
    }

    #[test]
    fn flipping_one_bit_changes_the_digest(
        message in proptest::collection::vec(any::<u8>(), 1..256),
        bit in any::<usize>(),
    ) {
        let bit = bit % (message.len() * 8);
        let mut flipped = message.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        prop_assert_ne!(sha1(&message), sha1(&flipped));
    }

    #[test]
    fn buffer_growth_preserves_bytes_and_invariants(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut buffer = BlockBuffer::new();
        for &byte in &payload {
            buffer.push(byte);
            prop_assert!(buffer.len() <= buffer.capacity());
            prop_assert_eq!(buffer.capacity() % BLOCK_SIZE, 0);
        }
        prop_assert_eq!(buffer.as_slice(), &payload[..]);
    }

    #[test]
    fn keyed_digest_is_deterministic(
        key in proptest::collection::vec(any::<u8>(), 0..100),
        message in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        prop_assert_eq!(
            HmacSha1::compute(&key, &message),
            HmacSha1::compute(&key, &message)
        );
    }
}
