//! From-scratch SHA-1 and HMAC-SHA-1.
//!
//! This library implements the SHA-1 compression pipeline and the two-pass
//! HMAC construction on top of it, with explicit message staging, block
//! padding, and byte-order handling. Nothing is delegated to a platform
//! crypto backend.
//!
//! # Quick Start
//!
//! ```rust
//! use sha1mac::{HmacSha1, sha1};
//!
//! // Plain SHA-1
//! let digest = sha1(b"abc");
//! assert_eq!(digest.to_string(), "A9993E364706816ABA3E25717850C26C9CD0D89D");
//!
//! // Keyed HMAC-SHA-1
//! let tag = HmacSha1::compute(b"key", b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(tag.to_string(), "DE7C9B85B8B78AA6BC8A7A36F70A90701C9DB4D9");
//! ```
//!
//! # Layout
//!
//! - [`BlockBuffer`] stages raw message bytes and grows one block at a time.
//! - [`Sha1State`] holds the five running state words; one fresh state per
//!   hash, consumed by [`Sha1State::finalize`].
//! - [`HmacSha1`] drives the inner and outer hash passes over ipad/opad
//!   keyed blocks.
//!
//! SHA-1 is not collision resistant; this crate targets protocols that
//! still require it (legacy MACs, content fingerprints), not new designs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod buffer;
pub mod digest;
pub mod error;
pub mod hmac;
pub mod sha1;

pub use buffer::{BlockBuffer, read_file};
pub use digest::Digest;
pub use error::{Error, Result};
pub use hmac::HmacSha1;
pub use sha1::{Sha1State, pad_message, sha1, sha1_buffer};

/// Bytes in one compression block.
pub const BLOCK_SIZE: usize = 64;

/// Bytes in a SHA-1 digest.
pub const DIGEST_LEN: usize = 20;
