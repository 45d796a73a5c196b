//! Error types for Reed-Solomon codec operations

use thiserror::Error;

/// Invalid arithmetic input or codec configuration.
///
/// These are caller errors (bad parameters, out-of-range symbols) and are
/// never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The discrete log of zero is undefined
    #[error("discrete log of zero is undefined")]
    LogOfZero,

    /// Zero has no multiplicative inverse
    #[error("zero has no multiplicative inverse")]
    InverseOfZero,

    /// Exponent outside the field's table range
    #[error("exponent {exponent} outside table range 0..{size}")]
    ExponentOutOfRange { exponent: usize, size: usize },

    /// Symbol value is not an element of the field
    #[error("symbol {symbol} is not an element of a field of size {size}")]
    SymbolOutOfRange { symbol: u16, size: usize },

    /// Polynomials need at least one coefficient
    #[error("a polynomial needs at least one coefficient")]
    EmptyCoefficients,

    /// Division by the zero polynomial
    #[error("division by the zero polynomial")]
    DivideByZeroPolynomial,

    /// Primitive polynomial does not match the field width
    #[error("primitive polynomial {primitive:#x} does not have degree {bits}")]
    InvalidPrimitive { primitive: u32, bits: u32 },

    /// Field width outside the supported range
    #[error("field width {0} is not supported (2..=16 bits)")]
    UnsupportedFieldWidth(u32),

    /// No message symbols were provided to encode
    #[error("no message symbols provided")]
    EmptyMessage,

    /// At least one check symbol is required to encode
    #[error("at least one check symbol is required")]
    NoCheckSymbols,

    /// Codeword does not fit in the field
    #[error("codeword of {codeword_len} symbols exceeds field capacity {capacity}")]
    CapacityExceeded { codeword_len: usize, capacity: usize },

    /// Received codeword too short to carry the check symbols
    #[error("received {received} symbols cannot carry {check_symbols} check symbols")]
    CodewordTooShort {
        received: usize,
        check_symbols: usize,
    },

    /// Encoded input length does not match the block geometry
    #[error("expected {expected} encoded bytes for a {payload_len}-byte payload, got {actual}")]
    EncodedLengthMismatch {
        expected: usize,
        actual: usize,
        payload_len: usize,
    },
}

/// The received data carries more errors than the code can correct.
///
/// Decoding stops at the first inconsistency; the block must be treated as
/// lost. Retrying without new data cannot succeed, so callers should
/// re-fetch the block from another source or give up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UncorrectableError {
    /// Euclidean reduction hit a zero remainder before converging
    #[error("syndrome remainder degenerated to zero during Euclidean reduction")]
    DegenerateRemainder,

    /// Error locator polynomial has a zero constant term
    #[error("error locator polynomial has a zero constant term")]
    DegenerateLocator,

    /// Chien search found a different number of roots than the locator degree
    #[error("located {found} error positions but the locator degree is {expected}")]
    LocatorDegreeMismatch { expected: usize, found: usize },

    /// An error location maps outside the received codeword
    #[error("error location maps outside the received codeword")]
    LocationOutOfRange,

    /// The locator's formal derivative vanished at a root (repeated root)
    #[error("error locator has a repeated root")]
    RepeatedRoot,

    /// Correction left nonzero syndromes behind
    #[error("corrected codeword still has nonzero syndromes")]
    ResidualSyndromes,
}

/// Umbrella error for codec operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Uncorrectable(#[from] UncorrectableError),

    /// A block failed to decode; the whole call is abandoned
    #[error("block {index} is uncorrectable: {source}")]
    UncorrectableBlock {
        index: usize,
        source: UncorrectableError,
    },
}

/// Type alias for Result with CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
