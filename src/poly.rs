//! Field polynomial algebra
//!
//! Pure functions over coefficient vectors (lowest degree first):
//! - Lagrange interpolation through arbitrary distinct points,
//! - zero (vanishing) polynomials `∏ (X - x_i)` of a point set,
//! - subtraction / multiplication / **exact** division,
//! - Horner evaluation.
//!
//! Products and long division are delegated to `ark-poly`; interpolation is
//! built here from the vanishing polynomial and synthetic division, so it
//! works for any point set rather than only FFT domains.

#![forbid(unsafe_code)]

use std::collections::HashSet;

use ark_ff::{PrimeField, Zero};
use ark_poly::univariate::{DenseOrSparsePolynomial, DensePolynomial};
use ark_poly::DenseUVPolynomial;

use crate::KzgError;

/// Interpolate the minimal-degree polynomial with `P(xs[i]) = ys[i]`.
///
/// With `Z(X) = ∏ (X - x_j)`, each Lagrange basis polynomial is
/// `L_i(X) = (Z(X) / (X - x_i)) / Z'(x_i)` and `Z'(x_i)` equals the quotient
/// evaluated at `x_i`. Cost is `O(n²)` field operations.
///
/// Fails with [`KzgError::MalformedClaim`] on a length mismatch or repeated
/// abscissae. An empty input yields the zero polynomial.
pub fn interpolate<F: PrimeField>(xs: &[F], ys: &[F]) -> Result<DensePolynomial<F>, KzgError> {
    if xs.len() != ys.len() {
        return Err(KzgError::MalformedClaim(format!(
            "{} points but {} values",
            xs.len(),
            ys.len()
        )));
    }
    ensure_distinct(xs)?;
    if xs.is_empty() {
        return Ok(DensePolynomial::zero());
    }

    let z = zero_polynomial(xs);
    let mut acc = vec![F::zero(); xs.len()];
    for (&x_i, &y_i) in xs.iter().zip(ys) {
        if y_i.is_zero() {
            continue;
        }
        let (basis, rem) = divide_by_linear(&z.coeffs, x_i);
        debug_assert!(rem.is_zero(), "x_i must be a root of Z");

        let denom = evaluate(&basis, x_i);
        let scale = y_i
            * denom
                .inverse()
                .ok_or_else(|| KzgError::MalformedClaim("repeated evaluation point".into()))?;
        for (a, b) in acc.iter_mut().zip(&basis) {
            *a += scale * b;
        }
    }
    Ok(DensePolynomial::from_coefficients_vec(acc))
}

/// Coefficients of the polynomial through `(0, values[0]), …, (n-1, values[n-1])`.
pub fn interpolate_coefficients<F: PrimeField>(values: &[F]) -> Result<Vec<F>, KzgError> {
    let xs: Vec<F> = (0..values.len() as u64).map(F::from).collect();
    let mut coeffs = interpolate(&xs, values)?.coeffs;
    // Keep one coefficient per value so callers can size proofs off the input.
    coeffs.resize(values.len(), F::zero());
    Ok(coeffs)
}

/// The monic polynomial `∏ (X - p)` vanishing exactly on `points`.
///
/// Built by repeated multiplication starting from the first linear factor;
/// an empty set gives the constant `1`.
pub fn zero_polynomial<F: PrimeField>(points: &[F]) -> DensePolynomial<F> {
    let linear = |p: F| DensePolynomial::from_coefficients_vec(vec![-p, F::one()]);

    let mut it = points.iter();
    let Some(&first) = it.next() else {
        return DensePolynomial::from_coefficients_vec(vec![F::one()]);
    };
    it.fold(linear(first), |z, &p| multiply(&z, &linear(p)))
}

/// `a - b`.
pub fn subtract<F: PrimeField>(
    a: &DensePolynomial<F>,
    b: &DensePolynomial<F>,
) -> DensePolynomial<F> {
    a - b
}

/// `a * b`.
pub fn multiply<F: PrimeField>(
    a: &DensePolynomial<F>,
    b: &DensePolynomial<F>,
) -> DensePolynomial<F> {
    a * b
}

/// Exact division `a / b`.
///
/// Fails with [`KzgError::NonDivisiblePolynomial`] when the remainder is not
/// the zero polynomial (or `b` is zero) instead of truncating silently.
pub fn divide<F: PrimeField>(
    a: &DensePolynomial<F>,
    b: &DensePolynomial<F>,
) -> Result<DensePolynomial<F>, KzgError> {
    if b.is_zero() {
        return Err(KzgError::NonDivisiblePolynomial);
    }
    let (q, r) = DenseOrSparsePolynomial::from(a)
        .divide_with_q_and_r(&DenseOrSparsePolynomial::from(b))
        .ok_or(KzgError::NonDivisiblePolynomial)?;
    if !r.is_zero() {
        return Err(KzgError::NonDivisiblePolynomial);
    }
    Ok(q)
}

/// Evaluate `Σ c_i x^i` with Horner's rule.
pub fn evaluate<F: PrimeField>(coeffs: &[F], x: F) -> F {
    coeffs.iter().rev().fold(F::zero(), |acc, &c| acc * x + c)
}

/// Synthetic division by `(X - root)`: returns `(quotient, remainder)` with
/// the remainder equal to `f(root)`.
fn divide_by_linear<F: PrimeField>(coeffs: &[F], root: F) -> (Vec<F>, F) {
    let Some((&lead, rest)) = coeffs.split_last() else {
        return (Vec::new(), F::zero());
    };
    let mut quotient = vec![F::zero(); rest.len()];
    let mut carry = lead;
    for i in (0..rest.len()).rev() {
        quotient[i] = carry;
        carry = rest[i] + carry * root;
    }
    (quotient, carry)
}

fn ensure_distinct<F: PrimeField>(xs: &[F]) -> Result<(), KzgError> {
    let mut seen = HashSet::with_capacity(xs.len());
    for x in xs {
        if !seen.insert(*x) {
            return Err(KzgError::MalformedClaim(format!(
                "evaluation point {} appears more than once",
                x
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;
    use ark_bls12_381::Fr;
    use proptest::prelude::*;

    fn fr(v: u64) -> Fr {
        Fr::from(v)
    }

    #[test]
    fn interpolates_small_values() {
        let values = vec![fr(8), fr(23), fr(52), fr(105)];
        let coeffs = interpolate_coefficients(&values).unwrap();
        assert_eq!(coeffs.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            assert_eq!(evaluate(&coeffs, fr(i as u64)), *v);
        }
    }

    #[test]
    fn interpolates_hashed_values() {
        let values: Vec<Fr> = (0..5)
            .map(|x| field::encode_bytes_to_scalar(format!("randomsalt-{x}").as_bytes()))
            .collect();
        let coeffs = interpolate_coefficients(&values).unwrap();
        for (i, v) in values.iter().enumerate() {
            assert_eq!(evaluate(&coeffs, fr(i as u64)), *v);
        }
    }

    #[test]
    fn interpolation_at_scattered_points_is_minimal() {
        // 3 + 2X + 5X^2 sampled at three non-consecutive points.
        let target = [fr(3), fr(2), fr(5)];
        let xs = [fr(7), fr(1), fr(40)];
        let ys: Vec<Fr> = xs.iter().map(|&x| evaluate(&target, x)).collect();
        let p = interpolate(&xs, &ys).unwrap();
        assert_eq!(p.coeffs, target.to_vec());
    }

    #[test]
    fn interpolation_rejects_bad_claims() {
        assert!(matches!(
            interpolate(&[fr(1), fr(1)], &[fr(2), fr(3)]),
            Err(KzgError::MalformedClaim(_))
        ));
        assert!(matches!(
            interpolate(&[fr(1), fr(2)], &[fr(2)]),
            Err(KzgError::MalformedClaim(_))
        ));
        assert!(interpolate::<Fr>(&[], &[]).unwrap().is_zero());
    }

    #[test]
    fn zero_polynomial_is_monic_and_vanishes() {
        let points = [fr(0), fr(2), fr(9)];
        let z = zero_polynomial(&points);
        assert_eq!(z.coeffs.len(), points.len() + 1);
        assert_eq!(*z.coeffs.last().unwrap(), Fr::from(1u64));
        for p in points {
            assert!(evaluate(&z, p).is_zero());
        }
        assert!(!evaluate(&z, fr(1)).is_zero());
        assert_eq!(zero_polynomial::<Fr>(&[]).coeffs, vec![Fr::from(1u64)]);
    }

    #[test]
    fn exact_division_round_trips_through_multiply() {
        let a = DensePolynomial::from_coefficients_vec(vec![fr(1), fr(4), fr(0), fr(6)]);
        let b = zero_polynomial(&[fr(3), fr(5)]);
        let prod = multiply(&a, &b);
        assert_eq!(divide(&prod, &b).unwrap(), a);
        assert_eq!(subtract(&prod, &prod), DensePolynomial::zero());
    }

    #[test]
    fn inexact_division_is_reported() {
        let a = DensePolynomial::from_coefficients_vec(vec![fr(1), fr(1), fr(1)]);
        let b = zero_polynomial(&[fr(2)]);
        assert_eq!(divide(&a, &b), Err(KzgError::NonDivisiblePolynomial));
        assert_eq!(
            divide(&a, &DensePolynomial::zero()),
            Err(KzgError::NonDivisiblePolynomial)
        );
    }

    proptest! {
        #[test]
        fn interpolation_reproduces_values(raw in prop::collection::vec(any::<u64>(), 1..24)) {
            let values: Vec<Fr> = raw.iter().map(|&v| fr(v)).collect();
            let coeffs = interpolate_coefficients(&values).unwrap();
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(evaluate(&coeffs, fr(i as u64)), *v);
            }
        }

        #[test]
        fn quotient_by_vanishing_poly_is_exact(
            raw in prop::collection::vec(any::<u64>(), 2..16),
            picks in prop::collection::btree_set(0u64..64, 1..6),
        ) {
            let coeffs: Vec<Fr> = raw.iter().map(|&v| fr(v)).collect();
            let xs: Vec<Fr> = picks.iter().map(|&i| fr(i)).collect();
            let ys: Vec<Fr> = xs.iter().map(|&x| evaluate(&coeffs, x)).collect();

            let poly = DensePolynomial::from_coefficients_vec(coeffs);
            let i_poly = interpolate(&xs, &ys).unwrap();
            let z_poly = zero_polynomial(&xs);
            let q = divide(&subtract(&poly, &i_poly), &z_poly).unwrap();
            prop_assert_eq!(&multiply(&q, &z_poly) + &i_poly, poly);
        }
    }
}
