//! Reed-Solomon syndrome decoder
//!
//! Locates and corrects symbol errors in a received codeword: syndrome
//! computation, error locator via the extended Euclidean algorithm, Chien
//! search for the error positions, Forney's formula for the magnitudes,
//! then an XOR correction pass. Corrects up to `check_symbols / 2` errors;
//! anything beyond that fails rather than returning wrong data, and every
//! corrected codeword is re-verified against its syndromes before it is
//! returned.

use smallvec::SmallVec;

use crate::error::{DomainError, Result, UncorrectableError};
use crate::galois::GaloisField;
use crate::poly::FieldPoly;

/// Error locations and magnitudes per codeword are bounded by
/// check_symbols / 2, which is small; keep them off the heap
type Symbols = SmallVec<[u16; 8]>;

/// Reed-Solomon decoder for one field.
///
/// Stateless; a single instance may decode from any number of threads.
pub struct Decoder<'f> {
    field: &'f GaloisField,
}

impl<'f> Decoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Decoder { field }
    }

    /// Decode a received codeword, returning a corrected copy.
    ///
    /// The input is never mutated; on failure no partial correction
    /// escapes. The leading `received.len() - check_symbols` symbols of
    /// the returned codeword are the recovered message.
    pub fn decode(&self, received: &[u16], check_symbols: usize) -> Result<Vec<u16>> {
        if received.len() <= check_symbols {
            return Err(DomainError::CodewordTooShort {
                received: received.len(),
                check_symbols,
            }
            .into());
        }
        if received.len() >= self.field.size() {
            return Err(DomainError::CapacityExceeded {
                codeword_len: received.len(),
                capacity: self.field.size(),
            }
            .into());
        }

        let poly = FieldPoly::new(self.field, received)?;
        if check_symbols == 0 {
            return Ok(received.to_vec());
        }

        // Syndromes: the received polynomial evaluated at a^0 .. a^(R-1).
        // All zero means the codeword is already valid.
        let mut syndromes = vec![0u16; check_symbols];
        let mut clean = true;
        for i in 0..check_symbols {
            let value = poly.evaluate_at(self.field.exp(i)?);
            syndromes[check_symbols - 1 - i] = value;
            if value != 0 {
                clean = false;
            }
        }
        if clean {
            return Ok(received.to_vec());
        }

        let syndrome_poly = FieldPoly::from_vec(self.field, syndromes);
        let (locator, evaluator) = self.run_euclidean(syndrome_poly, check_symbols)?;
        let locations = self.find_error_locations(&locator)?;
        let magnitudes = self.find_error_magnitudes(&evaluator, &locator, &locations)?;

        let mut corrected = received.to_vec();
        for (&location, &magnitude) in locations.iter().zip(magnitudes.iter()) {
            // log(X) is the error position counted from the end
            let offset = self.field.log(location)? as usize;
            if offset >= corrected.len() {
                return Err(UncorrectableError::LocationOutOfRange.into());
            }
            let position = corrected.len() - 1 - offset;
            corrected[position] = GaloisField::add(corrected[position], magnitude);
        }

        // A decode above the error bound can produce a locator that passes
        // every step yet corrects to garbage; re-verify before returning
        let corrected_poly = FieldPoly::from_vec(self.field, corrected.clone());
        for i in 0..check_symbols {
            if corrected_poly.evaluate_at(self.field.exp(i)?) != 0 {
                return Err(UncorrectableError::ResidualSyndromes.into());
            }
        }

        Ok(corrected)
    }

    /// Extended Euclidean algorithm on `x^R` and the syndrome polynomial,
    /// stopped once the remainder degree drops below `R / 2`. Returns the
    /// error locator (normalized so its constant term is 1) and the error
    /// evaluator.
    fn run_euclidean(
        &self,
        syndromes: FieldPoly<'f>,
        check_symbols: usize,
    ) -> Result<(FieldPoly<'f>, FieldPoly<'f>)> {
        let monomial = self.field.build_monomial(check_symbols, 1);
        let (mut r_last, mut r) = if monomial.degree() >= syndromes.degree() {
            (monomial, syndromes)
        } else {
            (syndromes, monomial)
        };
        let mut t_last = FieldPoly::zero(self.field);
        let mut t = FieldPoly::one(self.field);

        while r.degree() >= check_symbols / 2 && !r.is_zero() {
            let r_last_last = std::mem::replace(&mut r_last, r.clone());
            let t_last_last = std::mem::replace(&mut t_last, t.clone());
            if r_last.is_zero() {
                // Euclid ran out of remainders before converging
                return Err(UncorrectableError::DegenerateRemainder.into());
            }

            // Divide r_last_last by r_last, tracking the quotient
            r = r_last_last;
            let mut quotient = FieldPoly::zero(self.field);
            let leading_inverse = self.field.inverse(r_last.coefficient(r_last.degree()))?;
            while r.degree() >= r_last.degree() && !r.is_zero() {
                let degree_diff = r.degree() - r_last.degree();
                let scale = self
                    .field
                    .multiply(r.coefficient(r.degree()), leading_inverse);
                quotient = quotient.add(&self.field.build_monomial(degree_diff, scale));
                r = r.add(&r_last.multiply_by_monomial(degree_diff, scale));
            }

            t = quotient.multiply(&t_last).add(&t_last_last);
        }

        let constant = t.coefficient(0);
        if constant == 0 {
            return Err(UncorrectableError::DegenerateLocator.into());
        }
        let inverse = self.field.inverse(constant)?;
        let locator = t.multiply_scalar(inverse);
        let evaluator = r.multiply_scalar(inverse);
        Ok((locator, evaluator))
    }

    /// Chien search: error locations are the reciprocals of the locator's
    /// roots. The root count must match the locator degree exactly.
    fn find_error_locations(&self, locator: &FieldPoly<'f>) -> Result<Symbols> {
        let expected = locator.degree();
        if expected == 1 {
            // degree-1 locator 1 + cx has its single location at c
            let mut locations = Symbols::new();
            locations.push(locator.coefficient(1));
            return Ok(locations);
        }

        let mut locations = Symbols::new();
        for element in 1..self.field.size() {
            if locations.len() == expected {
                break;
            }
            if locator.evaluate_at(element as u16) == 0 {
                locations.push(self.field.inverse(element as u16)?);
            }
        }
        if locations.len() != expected {
            return Err(UncorrectableError::LocatorDegreeMismatch {
                expected,
                found: locations.len(),
            }
            .into());
        }
        Ok(locations)
    }

    /// Forney's formula with the locator's formal derivative:
    /// `e_i = X_i * omega(X_i^-1) / lambda'(X_i^-1)` for generator base 0
    fn find_error_magnitudes(
        &self,
        evaluator: &FieldPoly<'f>,
        locator: &FieldPoly<'f>,
        locations: &Symbols,
    ) -> Result<Symbols> {
        let derivative = locator.formal_derivative();
        let mut magnitudes = Symbols::new();
        for &location in locations {
            let location_inverse = self.field.inverse(location)?;
            let denominator = derivative.evaluate_at(location_inverse);
            if denominator == 0 {
                return Err(UncorrectableError::RepeatedRoot.into());
            }
            let numerator = self
                .field
                .multiply(location, evaluator.evaluate_at(location_inverse));
            magnitudes.push(
                self.field
                    .multiply(numerator, self.field.inverse(denominator)?),
            );
        }
        Ok(magnitudes)
    }
}
