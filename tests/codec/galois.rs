//! Galois field arithmetic laws
//!
//! Exhaustive checks of the GF(256) byte field used by the codec, plus
//! construction behavior shared fields must uphold.

use rsfec::galois::{byte_field, GaloisField, AZTEC_DATA_12, QR_CODE_FIELD_256};

// ============================================================================
// Field Laws
// ============================================================================

#[test]
fn test_multiplicative_inverse_for_every_nonzero_element() {
    let gf = byte_field();
    for a in 1..256u16 {
        let inverse = gf.inverse(a).unwrap();
        assert_eq!(gf.multiply(a, inverse), 1, "failed for a = {}", a);
    }
}

#[test]
fn test_every_element_is_its_own_additive_inverse() {
    for a in 0..256u16 {
        assert_eq!(GaloisField::add(a, a), 0);
    }
}

#[test]
fn test_exp_log_inverse_for_every_nonzero_element() {
    let gf = byte_field();
    for a in 1..256u16 {
        assert_eq!(gf.exp(gf.log(a).unwrap() as usize).unwrap(), a);
    }
}

#[test]
fn test_exp_is_cyclic_with_period_255() {
    let gf = byte_field();
    // alpha has order size - 1, so exp wraps at 255
    assert_eq!(gf.exp(255).unwrap(), gf.exp(0).unwrap());
}

#[test]
fn test_multiplication_distributes_over_addition() {
    let gf = byte_field();
    for a in [3u16, 29, 142, 255] {
        for b in [1u16, 77, 200] {
            for c in [0u16, 13, 251] {
                let left = gf.multiply(a, GaloisField::add(b, c));
                let right = GaloisField::add(gf.multiply(a, b), gf.multiply(a, c));
                assert_eq!(left, right);
            }
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_repeated_construction_is_idempotent() {
    let (primitive, bits) = QR_CODE_FIELD_256;
    let first = GaloisField::new(primitive, bits).unwrap();
    let second = GaloisField::new(primitive, bits).unwrap();

    for a in 1..256u16 {
        assert_eq!(first.log(a), second.log(a));
        assert_eq!(first.inverse(a), second.inverse(a));
    }
    for i in 0..256usize {
        assert_eq!(first.exp(i), second.exp(i));
    }
}

#[test]
fn test_concurrent_first_use_of_shared_field() {
    // All threads race the OnceLock; everyone must see the same instance
    // and identical arithmetic
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let gf = byte_field();
                let mut values = Vec::with_capacity(255);
                for a in 1..256u16 {
                    values.push(gf.multiply(a, gf.inverse(a).unwrap()));
                }
                values
            })
        })
        .collect();

    for handle in handles {
        let values = handle.join().unwrap();
        assert!(values.iter().all(|&v| v == 1));
    }
}

#[test]
fn test_fields_of_different_widths_are_independent() {
    let (primitive, bits) = AZTEC_DATA_12;
    let wide = GaloisField::new(primitive, bits).unwrap();
    let byte = byte_field();

    assert_eq!(wide.size(), 4096);
    // 300 is a valid symbol in the 12-bit field but not in the byte field
    assert!(wide.log(300).is_ok());
    assert!(byte.log(300).is_err());
}
