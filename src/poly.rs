//! Polynomials with coefficients in a Galois field
//!
//! Coefficients are stored from the highest degree down to the constant
//! term. The leading coefficient is nonzero unless the polynomial is the
//! zero polynomial, which is the single coefficient `[0]`. Polynomials are
//! never mutated after construction; every operation returns a new value.

use crate::error::DomainError;
use crate::galois::GaloisField;

/// An immutable polynomial over one [`GaloisField`]
#[derive(Debug, Clone)]
pub struct FieldPoly<'f> {
    field: &'f GaloisField,
    coefficients: Vec<u16>,
}

impl<'f> FieldPoly<'f> {
    /// Build a polynomial from coefficients ordered highest degree first.
    ///
    /// Validates that every coefficient is an element of the field; leading
    /// zeros are trimmed so the representation invariant holds.
    pub fn new(field: &'f GaloisField, coefficients: &[u16]) -> Result<Self, DomainError> {
        if coefficients.is_empty() {
            return Err(DomainError::EmptyCoefficients);
        }
        for &c in coefficients {
            field.check_symbol(c)?;
        }
        Ok(Self::from_vec(field, coefficients.to_vec()))
    }

    /// Internal constructor for arithmetic results, which are in range by
    /// construction. Trims leading zeros.
    pub(crate) fn from_vec(field: &'f GaloisField, coefficients: Vec<u16>) -> Self {
        debug_assert!(!coefficients.is_empty());
        let leading = coefficients.iter().position(|&c| c != 0);
        let coefficients = match leading {
            Some(0) => coefficients,
            Some(n) => coefficients[n..].to_vec(),
            None => vec![0],
        };
        FieldPoly {
            field,
            coefficients,
        }
    }

    /// The zero polynomial
    pub fn zero(field: &'f GaloisField) -> Self {
        FieldPoly {
            field,
            coefficients: vec![0],
        }
    }

    /// The constant polynomial 1
    pub fn one(field: &'f GaloisField) -> Self {
        FieldPoly {
            field,
            coefficients: vec![1],
        }
    }

    /// `coefficient * x^degree`, or the zero polynomial for a zero
    /// coefficient
    pub(crate) fn monomial(field: &'f GaloisField, degree: usize, coefficient: u16) -> Self {
        if coefficient == 0 {
            return Self::zero(field);
        }
        let mut coefficients = vec![0; degree + 1];
        coefficients[0] = coefficient;
        FieldPoly {
            field,
            coefficients,
        }
    }

    /// The field this polynomial's coefficients live in
    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u16] {
        &self.coefficients
    }

    /// Degree of the polynomial (0 for the zero polynomial)
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Coefficient of the `x^degree` term; zero above the leading term
    pub fn coefficient(&self, degree: usize) -> u16 {
        if degree >= self.coefficients.len() {
            return 0;
        }
        self.coefficients[self.coefficients.len() - 1 - degree]
    }

    /// Add another polynomial term by term.
    ///
    /// Subtraction is the same operation in characteristic 2.
    pub fn add(&self, other: &FieldPoly<'f>) -> FieldPoly<'f> {
        debug_assert!(std::ptr::eq(self.field, other.field));
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let (smaller, larger) = if self.coefficients.len() <= other.coefficients.len() {
            (&self.coefficients, &other.coefficients)
        } else {
            (&other.coefficients, &self.coefficients)
        };
        let offset = larger.len() - smaller.len();

        let mut sum = Vec::with_capacity(larger.len());
        sum.extend_from_slice(&larger[..offset]);
        for (i, &c) in smaller.iter().enumerate() {
            sum.push(GaloisField::add(c, larger[offset + i]));
        }
        FieldPoly::from_vec(self.field, sum)
    }

    /// Multiply by another polynomial (coefficient convolution)
    pub fn multiply(&self, other: &FieldPoly<'f>) -> FieldPoly<'f> {
        debug_assert!(std::ptr::eq(self.field, other.field));
        if self.is_zero() || other.is_zero() {
            return FieldPoly::zero(self.field);
        }

        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product = vec![0u16; a.len() + b.len() - 1];
        for (i, &ac) in a.iter().enumerate() {
            for (j, &bc) in b.iter().enumerate() {
                product[i + j] =
                    GaloisField::add(product[i + j], self.field.multiply(ac, bc));
            }
        }
        FieldPoly::from_vec(self.field, product)
    }

    /// Multiply every coefficient by a scalar
    pub fn multiply_scalar(&self, scalar: u16) -> FieldPoly<'f> {
        if scalar == 0 {
            return FieldPoly::zero(self.field);
        }
        if scalar == 1 {
            return self.clone();
        }
        let product = self
            .coefficients
            .iter()
            .map(|&c| self.field.multiply(c, scalar))
            .collect();
        FieldPoly::from_vec(self.field, product)
    }

    /// Multiply by the monomial `coefficient * x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: u16) -> FieldPoly<'f> {
        if coefficient == 0 || self.is_zero() {
            return FieldPoly::zero(self.field);
        }
        let mut product = Vec::with_capacity(self.coefficients.len() + degree);
        for &c in &self.coefficients {
            product.push(self.field.multiply(c, coefficient));
        }
        product.resize(self.coefficients.len() + degree, 0);
        FieldPoly::from_vec(self.field, product)
    }

    /// Polynomial long division: `self = quotient * divisor + remainder`
    /// with `degree(remainder) < degree(divisor)`
    pub fn divide(
        &self,
        divisor: &FieldPoly<'f>,
    ) -> Result<(FieldPoly<'f>, FieldPoly<'f>), DomainError> {
        debug_assert!(std::ptr::eq(self.field, divisor.field));
        if divisor.is_zero() {
            return Err(DomainError::DivideByZeroPolynomial);
        }

        let mut quotient = FieldPoly::zero(self.field);
        let mut remainder = self.clone();

        let divisor_degree = divisor.degree();
        let leading_inverse = self.field.inverse(divisor.coefficient(divisor_degree))?;

        while remainder.degree() >= divisor_degree && !remainder.is_zero() {
            let degree_diff = remainder.degree() - divisor_degree;
            let scale = self
                .field
                .multiply(remainder.coefficient(remainder.degree()), leading_inverse);
            let term = FieldPoly::monomial(self.field, degree_diff, scale);
            quotient = quotient.add(&term);
            remainder = remainder.add(&divisor.multiply_by_monomial(degree_diff, scale));
        }

        Ok((quotient, remainder))
    }

    /// Evaluate at `x` using Horner's method
    pub fn evaluate_at(&self, x: u16) -> u16 {
        if x == 0 {
            return self.coefficient(0);
        }
        if x == 1 {
            // sum of all coefficients
            return self
                .coefficients
                .iter()
                .fold(0, |acc, &c| GaloisField::add(acc, c));
        }
        let mut result = self.coefficients[0];
        for &c in &self.coefficients[1..] {
            result = GaloisField::add(self.field.multiply(result, x), c);
        }
        result
    }

    /// Formal derivative. In characteristic 2 only the odd-degree terms
    /// survive: d/dx sum(c_k x^k) = sum over odd k of c_k x^(k-1).
    pub fn formal_derivative(&self) -> FieldPoly<'f> {
        let degree = self.degree();
        if degree == 0 {
            return FieldPoly::zero(self.field);
        }
        let mut derivative = vec![0u16; degree];
        let mut d = 1;
        while d <= degree {
            derivative[degree - d] = self.coefficient(d);
            d += 2;
        }
        FieldPoly::from_vec(self.field, derivative)
    }
}
