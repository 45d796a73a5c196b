//! Galois Field GF(2^m) arithmetic for Reed-Solomon coding
//!
//! Elements of GF(2^m) are represented as integers whose bits are the
//! coefficients of a polynomial over GF(2), reduced modulo a primitive
//! polynomial. Multiplication and inversion go through discrete log tables
//! built once at construction with the generator fixed at alpha = 2.

use std::sync::OnceLock;

use crate::error::DomainError;
use crate::poly::FieldPoly;

/// Standard 8-bit field used for byte codewords (QR code field):
/// x^8 + x^4 + x^3 + x^2 + 1
pub const QR_CODE_FIELD_256: (u32, u32) = (0x11D, 8);

/// Aztec 12-bit data field: x^12 + x^6 + x^5 + x^3 + 1
pub const AZTEC_DATA_12: (u32, u32) = (0x1069, 12);

/// Aztec 10-bit data field: x^10 + x^3 + 1
pub const AZTEC_DATA_10: (u32, u32) = (0x409, 10);

/// Aztec 8-bit data field: x^8 + x^5 + x^3 + x^2 + 1
pub const AZTEC_DATA_8: (u32, u32) = (0x12D, 8);

/// Precomputed exp/log tables for one GF(2^m) field
///
/// Immutable after construction. Distinct fields (say the 12-bit Aztec
/// field next to the 8-bit byte field) are independent instances with no
/// shared state.
#[derive(Debug)]
pub struct GaloisField {
    size: usize,
    primitive: u32,
    exp: Vec<u16>,
    log: Vec<u16>,
}

impl GaloisField {
    /// Create a field from a bit-packed primitive polynomial and width.
    ///
    /// The polynomial must be of degree `bits`, i.e. its top set bit is
    /// bit `bits`. Tables are built eagerly so a constructed field is
    /// immediately safe to share across threads.
    pub fn new(primitive: u32, bits: u32) -> Result<Self, DomainError> {
        if !(2..=16).contains(&bits) {
            return Err(DomainError::UnsupportedFieldWidth(bits));
        }
        if primitive >> bits != 1 {
            return Err(DomainError::InvalidPrimitive { primitive, bits });
        }

        let size = 1usize << bits;
        let mut field = GaloisField {
            size,
            primitive,
            exp: vec![0; size],
            log: vec![0; size],
        };
        field.build_tables();
        Ok(field)
    }

    /// Build exp and log tables by repeated multiplication with alpha = 2,
    /// reducing by the primitive polynomial on overflow
    fn build_tables(&mut self) {
        let mut x = 1u32;
        for i in 0..self.size {
            self.exp[i] = x as u16;
            x <<= 1;
            if x >= self.size as u32 {
                x ^= self.primitive;
                x &= self.size as u32 - 1;
            }
        }
        for i in 0..self.size - 1 {
            self.log[self.exp[i] as usize] = i as u16;
        }
        // log[0] stays 0 but is never read: log() rejects zero
    }

    /// Number of field elements (2^m)
    pub fn size(&self) -> usize {
        self.size
    }

    /// The bit-packed primitive polynomial this field reduces by
    pub fn primitive(&self) -> u32 {
        self.primitive
    }

    /// alpha^power
    #[inline]
    pub fn exp(&self, power: usize) -> Result<u16, DomainError> {
        if power >= self.size {
            return Err(DomainError::ExponentOutOfRange {
                exponent: power,
                size: self.size,
            });
        }
        Ok(self.exp[power])
    }

    /// Discrete log of a nonzero element
    #[inline]
    pub fn log(&self, x: u16) -> Result<u16, DomainError> {
        if x == 0 {
            return Err(DomainError::LogOfZero);
        }
        self.check_symbol(x)?;
        Ok(self.log[x as usize])
    }

    /// Multiplicative inverse of a nonzero element
    #[inline]
    pub fn inverse(&self, x: u16) -> Result<u16, DomainError> {
        if x == 0 {
            return Err(DomainError::InverseOfZero);
        }
        self.check_symbol(x)?;
        Ok(self.exp[self.size - 1 - self.log[x as usize] as usize])
    }

    /// Multiply two field elements.
    ///
    /// Total over valid elements; the log-sum index is reduced modulo
    /// size - 1, so table access stays in bounds by construction.
    #[inline]
    pub fn multiply(&self, a: u16, b: u16) -> u16 {
        debug_assert!((a as usize) < self.size && (b as usize) < self.size);
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum =
            (self.log[a as usize] as usize + self.log[b as usize] as usize) % (self.size - 1);
        self.exp[log_sum]
    }

    /// Add two field elements - XOR in characteristic 2.
    /// Subtraction is the identical operation.
    #[inline]
    pub fn add(a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// The monomial `coefficient * x^degree`; the zero polynomial when the
    /// coefficient is zero
    pub fn build_monomial(&self, degree: usize, coefficient: u16) -> FieldPoly<'_> {
        FieldPoly::monomial(self, degree, coefficient)
    }

    /// Reject symbols that are not elements of this field
    #[inline]
    pub(crate) fn check_symbol(&self, symbol: u16) -> Result<(), DomainError> {
        if (symbol as usize) >= self.size {
            return Err(DomainError::SymbolOutOfRange {
                symbol,
                size: self.size,
            });
        }
        Ok(())
    }
}

/// Global instance of the standard byte field (primitive 0x11D, size 256)
static BYTE_FIELD: OnceLock<GaloisField> = OnceLock::new();

/// Get the shared GF(256) byte field used by the block codec
pub fn byte_field() -> &'static GaloisField {
    BYTE_FIELD.get_or_init(|| {
        let (primitive, bits) = QR_CODE_FIELD_256;
        GaloisField::new(primitive, bits).expect("standard byte field parameters are valid")
    })
}
