//! Byte-oriented block codec
//!
//! Splits arbitrary-length byte payloads into fixed-size blocks, protects
//! each block independently with Reed-Solomon check symbols, and
//! reassembles on decode. Blocks are independent, so both directions fan
//! out across the rayon thread pool; concatenation order is the only
//! ordering constraint.
//!
//! Chunk boundaries are implicit (fixed block size, shorter final block),
//! so decode takes the original payload length to reverse the split. The
//! `rsfec` binary stores that length in its container header; library
//! callers carry it out of band.

use log::debug;
use rayon::prelude::*;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{CodecError, DomainError, Result};
use crate::galois::{byte_field, GaloisField};

/// Block geometry for the codec: how many payload bytes per block and how
/// many check symbols protect each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    block_size: usize,
    check_symbols: usize,
}

impl CodecConfig {
    /// Default payload bytes per block
    pub const DEFAULT_BLOCK_SIZE: usize = 226;
    /// Default check symbols per block, correcting up to 8 errors
    pub const DEFAULT_CHECK_SYMBOLS: usize = 16;

    /// Validate a block geometry. Each block's codeword
    /// (`block_size + check_symbols`) must fit below the byte field size.
    pub fn new(block_size: usize, check_symbols: usize) -> std::result::Result<Self, DomainError> {
        if check_symbols == 0 {
            return Err(DomainError::NoCheckSymbols);
        }
        if block_size == 0 {
            return Err(DomainError::EmptyMessage);
        }
        let codeword_len = block_size + check_symbols;
        if codeword_len >= byte_field().size() {
            return Err(DomainError::CapacityExceeded {
                codeword_len,
                capacity: byte_field().size(),
            });
        }
        Ok(CodecConfig {
            block_size,
            check_symbols,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn check_symbols(&self) -> usize {
        self.check_symbols
    }

    /// Errors correctable per block: `floor(check_symbols / 2)`
    pub fn correctable_per_block(&self) -> usize {
        self.check_symbols / 2
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            block_size: Self::DEFAULT_BLOCK_SIZE,
            check_symbols: Self::DEFAULT_CHECK_SYMBOLS,
        }
    }
}

/// Byte payload codec over the standard GF(256) byte field.
///
/// Bytes map to field symbols by identity. Encode and decode must use the
/// same configuration; the codec cannot detect a mismatch in general.
pub struct BlockCodec {
    field: &'static GaloisField,
    encoder: Encoder<'static>,
    decoder: Decoder<'static>,
    config: CodecConfig,
}

impl BlockCodec {
    pub fn new(config: CodecConfig) -> Self {
        let field = byte_field();
        BlockCodec {
            field,
            encoder: Encoder::new(field),
            decoder: Decoder::new(field),
            config,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Number of blocks a payload of the given length splits into
    pub fn block_count(&self, payload_len: usize) -> usize {
        payload_len.div_ceil(self.config.block_size)
    }

    /// Encoded size of a payload: every block grows by the check region
    pub fn encoded_len(&self, payload_len: usize) -> usize {
        payload_len + self.block_count(payload_len) * self.config.check_symbols
    }

    /// Encode a payload, returning the concatenated per-block codewords.
    ///
    /// The final block may be shorter than `block_size`; an empty payload
    /// encodes to an empty output.
    pub fn encode(&self, payload: &[u8]) -> Result<Vec<u8>> {
        debug!(
            "encoding {} bytes as {} blocks ({} data + {} check symbols each)",
            payload.len(),
            self.block_count(payload.len()),
            self.config.block_size,
            self.config.check_symbols,
        );

        let blocks = payload
            .par_chunks(self.config.block_size)
            .map(|chunk| {
                let symbols: Vec<u16> = chunk.iter().map(|&b| u16::from(b)).collect();
                self.encoder.encode(&symbols, self.config.check_symbols)
            })
            .collect::<std::result::Result<Vec<_>, DomainError>>()?;

        let mut encoded = Vec::with_capacity(self.encoded_len(payload.len()));
        for block in blocks {
            encoded.extend(block.into_iter().map(|symbol| symbol as u8));
        }
        Ok(encoded)
    }

    /// Decode concatenated codewords back to the original payload.
    ///
    /// `payload_len` is the original payload length; together with the
    /// configured block size it determines every block boundary. The call
    /// is all-or-nothing: one uncorrectable block fails the whole decode
    /// and no partial output is returned.
    pub fn decode(&self, encoded: &[u8], payload_len: usize) -> Result<Vec<u8>> {
        let expected = self.encoded_len(payload_len);
        if encoded.len() != expected {
            return Err(DomainError::EncodedLengthMismatch {
                expected,
                actual: encoded.len(),
                payload_len,
            }
            .into());
        }

        let check_symbols = self.config.check_symbols;
        debug!(
            "decoding {} blocks back to {} bytes",
            self.block_count(payload_len),
            payload_len,
        );

        let blocks = encoded
            .par_chunks(self.config.block_size + check_symbols)
            .enumerate()
            .map(|(index, chunk)| {
                let symbols: Vec<u16> = chunk.iter().map(|&b| u16::from(b)).collect();
                let corrected =
                    self.decoder
                        .decode(&symbols, check_symbols)
                        .map_err(|err| match err {
                            CodecError::Uncorrectable(source) => {
                                CodecError::UncorrectableBlock { index, source }
                            }
                            other => other,
                        })?;
                let message = &corrected[..corrected.len() - check_symbols];
                Ok(message.iter().map(|&symbol| symbol as u8).collect::<Vec<u8>>())
            })
            .collect::<Result<Vec<_>>>()?;

        let mut payload = Vec::with_capacity(payload_len);
        for block in blocks {
            payload.extend_from_slice(&block);
        }
        payload.truncate(payload_len);
        Ok(payload)
    }

    /// The field the codec operates in (always the 256-element byte field)
    pub fn field(&self) -> &'static GaloisField {
        self.field
    }
}

impl Default for BlockCodec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}
