//! Reed-Solomon forward error correction over GF(2^8)
//!
//! Encodes byte payloads by appending redundancy symbols and decodes
//! possibly-corrupted codewords back to the original data, correcting up
//! to `check_symbols / 2` symbol errors per block. The decoder never
//! returns data it cannot verify: a corrected codeword is re-checked
//! against its syndromes before it leaves the crate.
//!
//! The usual entry point is [`BlockCodec`], which chunks a payload into
//! fixed-size blocks and protects each independently:
//!
//! ```
//! use rsfec::{BlockCodec, CodecConfig};
//!
//! let codec = BlockCodec::new(CodecConfig::default());
//! let payload = b"some payload worth protecting".to_vec();
//!
//! let mut encoded = codec.encode(&payload)?;
//! encoded[3] ^= 0xFF; // a transmission error
//! let decoded = codec.decode(&encoded, payload.len())?;
//! assert_eq!(decoded, payload);
//! # Ok::<(), rsfec::CodecError>(())
//! ```
//!
//! [`Encoder`] and [`Decoder`] work directly on field symbols for callers
//! that manage their own framing, and [`GaloisField`] / [`FieldPoly`]
//! expose the underlying arithmetic.

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod galois;
pub mod poly;

pub use codec::{BlockCodec, CodecConfig};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{CodecError, DomainError, Result, UncorrectableError};
pub use galois::{byte_field, GaloisField};
pub use poly::FieldPoly;
