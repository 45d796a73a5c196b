//! Systematic Reed-Solomon encoder
//!
//! Appends check symbols to a message so that the whole codeword is
//! divisible by the generator polynomial `(x - a^0)(x - a^1) ... `. The
//! message symbols are emitted unchanged; the check symbols are the
//! remainder of the shifted message divided by the generator.

use std::sync::Mutex;

use crate::error::DomainError;
use crate::galois::GaloisField;
use crate::poly::FieldPoly;

/// Reed-Solomon encoder for one field.
///
/// Generator polynomials are built incrementally and memoized per degree,
/// so repeated encodes with the same check-symbol count reuse the product.
/// The cache sits behind a mutex; `Encoder` is safe to share across
/// threads.
pub struct Encoder<'f> {
    field: &'f GaloisField,
    generators: Mutex<Vec<FieldPoly<'f>>>,
}

impl<'f> Encoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Encoder {
            field,
            generators: Mutex::new(vec![FieldPoly::one(field)]),
        }
    }

    /// The generator polynomial of the given degree:
    /// product of `(x - a^i)` for `i` in `0..degree`
    fn generator(&self, degree: usize) -> Result<FieldPoly<'f>, DomainError> {
        let mut cache = self.generators.lock().expect("generator cache poisoned");
        while cache.len() <= degree {
            let root = self.field.exp(cache.len() - 1)?;
            // (x - a^i) == (x + a^i) in characteristic 2
            let factor = FieldPoly::from_vec(self.field, vec![1, root]);
            let next = cache.last().expect("cache seeded with one").multiply(&factor);
            cache.push(next);
        }
        Ok(cache[degree].clone())
    }

    /// Encode `message`, returning the message followed by `check_symbols`
    /// check symbols.
    ///
    /// Requires a nonempty message, at least one check symbol, and
    /// `message.len() + check_symbols < field size`.
    pub fn encode(&self, message: &[u16], check_symbols: usize) -> Result<Vec<u16>, DomainError> {
        if message.is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        if check_symbols == 0 {
            return Err(DomainError::NoCheckSymbols);
        }
        let codeword_len = message.len() + check_symbols;
        if codeword_len >= self.field.size() {
            return Err(DomainError::CapacityExceeded {
                codeword_len,
                capacity: self.field.size(),
            });
        }

        let info = FieldPoly::new(self.field, message)?;
        let generator = self.generator(check_symbols)?;
        let shifted = info.multiply_by_monomial(check_symbols, 1);
        let (_, remainder) = shifted.divide(&generator)?;

        // Left-pad the remainder to exactly check_symbols coefficients;
        // a zero remainder pads to an all-zero check region
        let remainder_coefficients = remainder.coefficients();
        let padding = check_symbols - remainder_coefficients.len();

        let mut codeword = Vec::with_capacity(codeword_len);
        codeword.extend_from_slice(message);
        codeword.resize(message.len() + padding, 0);
        codeword.extend_from_slice(remainder_coefficients);
        Ok(codeword)
    }
}
