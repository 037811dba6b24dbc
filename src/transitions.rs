//! Bias, shift and reduction transformations.
//!
//! Every function expects its inputs in [0,1] and returns a value in [0,1].
//! Domain violations panic.

use crate::misc::{correct_to_01, vector_in_01, PI};

/// Polynomial bias
pub fn b_poly(y: f64, alpha: f64) -> f64
{
    assert!((0.0..=1.0).contains(&y));
    assert!(alpha > 0.0);
    assert!(alpha != 1.0);

    correct_to_01(y.powf(alpha))
}

/// Flat region bias: values between `b` and `c` map to `a`
pub fn b_flat(y: f64, a: f64, b: f64, c: f64) -> f64
{
    assert!((0.0..=1.0).contains(&y));
    assert!((0.0..=1.0).contains(&a));
    assert!((0.0..=1.0).contains(&b));
    assert!((0.0..=1.0).contains(&c));
    assert!(b < c);
    assert!(b != 0.0 || a == 0.0);
    assert!(b != 0.0 || c != 1.0);
    assert!(c != 1.0 || a == 1.0);
    assert!(c != 1.0 || b != 0.0);

    let tmp1 = f64::min(0.0, (y - b).floor()) * a * (b - y) / b;
    let tmp2 = f64::min(0.0, (c - y).floor()) * (1.0 - a) * (y - c) / (1.0 - c);

    correct_to_01(a + tmp1 - tmp2)
}

/// Parameter dependent bias: the exponent applied to `y` depends on `u`
pub fn b_param(y: f64, u: f64, a: f64, b: f64, c: f64) -> f64
{
    assert!((0.0..=1.0).contains(&y));
    assert!((0.0..=1.0).contains(&u));
    assert!(a > 0.0 && a < 1.0);
    assert!(b > 0.0);
    assert!(b < c);

    let v = a - (1.0 - 2.0 * u) * ((0.5 - u).floor() + a).abs();

    correct_to_01(y.powf(b + (c - b) * v))
}

/// Linear shift, zero at `y == a`
pub fn s_linear(y: f64, a: f64) -> f64
{
    assert!((0.0..=1.0).contains(&y));
    assert!(a > 0.0 && a < 1.0);

    correct_to_01((y - a).abs() / ((a - y).floor() + a).abs())
}

/// Deceptive shift: global optimum at `a`, deceptive optima at 0 and 1
pub fn s_decept(y: f64, a: f64, b: f64, c: f64) -> f64
{
    assert!((0.0..=1.0).contains(&y));
    assert!(a > 0.0 && a < 1.0);
    assert!(b > 0.0 && b < 1.0);
    assert!(c > 0.0 && c < 1.0);
    assert!(a - b > 0.0);
    assert!(a + b < 1.0);

    let tmp1 = (y - a + b).floor() * (1.0 - c + (a - b) / b) / (a - b);
    let tmp2 = (a + b - y).floor() * (1.0 - c + (1.0 - a - b) / b) / (1.0 - a - b);

    correct_to_01(1.0 + ((y - a).abs() - b) * (tmp1 + tmp2 + 1.0 / b))
}

/// Multi-modal shift with `a` hills and hill size controlled by `b`
pub fn s_multi(y: f64, a: usize, b: f64, c: f64) -> f64
{
    assert!((0.0..=1.0).contains(&y));
    assert!(a >= 1);
    assert!(b >= 0.0);
    assert!((4.0 * a as f64 + 2.0) * PI >= 4.0 * b);
    assert!(c > 0.0 && c < 1.0);

    let tmp1 = (y - c).abs() / (2.0 * ((c - y).floor() + c));
    let tmp2 = (4.0 * a as f64 + 2.0) * PI * (0.5 - tmp1);

    correct_to_01((1.0 + tmp2.cos() + 4.0 * b * tmp1.powi(2)) / (b + 2.0))
}

/// Weighted sum reduction
pub fn r_sum(y: &[f64], w: &[f64]) -> f64
{
    assert!(!y.is_empty());
    assert_eq!(w.len(), y.len());
    assert!(vector_in_01(y));

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (y_i, w_i) in y.iter().zip(w)
    {
        assert!(*w_i > 0.0);

        numerator += w_i * y_i;
        denominator += w_i;
    }

    correct_to_01(numerator / denominator)
}

/// Non-separable reduction, `a` is the degree of non-separability
pub fn r_nonsep(y: &[f64], a: usize) -> f64
{
    let y_len = y.len();

    assert!(y_len != 0);
    assert!(vector_in_01(y));
    assert!(a >= 1 && a <= y_len);
    assert!(y_len % a == 0, "|y| = {} is not a multiple of A = {}", y_len, a);

    let mut numerator = 0.0;

    for j in 0..y_len
    {
        numerator += y[j];

        for k in 0..a - 1
        {
            numerator += (y[j] - y[(1 + j + k) % y_len]).abs();
        }
    }

    let a = a as f64;
    let tmp = (a / 2.0).ceil();
    let denominator = y_len as f64 * tmp * (1.0 + 2.0 * a - 2.0 * tmp) / a;

    correct_to_01(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_b_poly_fixed_points()
    {
        assert_eq!(b_poly(1.0, 0.02), 1.0);
        assert_eq!(b_poly(1.0, 50.0), 1.0);
        assert_eq!(b_poly(0.0, 0.02), 0.0);
        assert!((b_poly(0.25, 0.5) - 0.5).abs() < TOL);
    }

    #[test]
    #[should_panic]
    fn test_b_poly_rejects_identity_exponent()
    {
        b_poly(0.5, 1.0);
    }

    #[test]
    fn test_b_flat_plateau_and_edges()
    {
        assert!((b_flat(0.8, 0.8, 0.75, 0.85) - 0.8).abs() < TOL);
        assert!(b_flat(0.0, 0.8, 0.75, 0.85).abs() < TOL);
        assert!((b_flat(1.0, 0.8, 0.75, 0.85) - 1.0).abs() < TOL);
        // below the plateau the map is linear from 0 to A
        assert!((b_flat(0.375, 0.8, 0.75, 0.85) - 0.4).abs() < TOL);
    }

    #[test]
    fn test_b_param_neutral_at_half()
    {
        // u = 0.5 gives exponent B + (C - B) * A == 1 for the WFG constants
        let y = b_param(0.3, 0.5, 0.98 / 49.98, 0.02, 50.0);
        assert!((y - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_s_linear_zero_at_shift()
    {
        assert_eq!(s_linear(0.35, 0.35), 0.0);
        assert!((s_linear(0.0, 0.35) - 1.0).abs() < TOL);
        assert!((s_linear(1.0, 0.35) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_s_decept_global_optimum()
    {
        assert!(s_decept(0.35, 0.35, 0.001, 0.05).abs() < TOL);
        // the deceptive optima sit at the domain edges with value C
        assert!((s_decept(0.0, 0.35, 0.001, 0.05) - 0.05).abs() < 1e-9);
        assert!((s_decept(1.0, 0.35, 0.001, 0.05) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_s_multi_global_optimum()
    {
        assert!(s_multi(0.35, 30, 10.0, 0.35).abs() < TOL);
        assert!(s_multi(0.35, 30, 95.0, 0.35).abs() < TOL);
        let v = s_multi(0.9, 30, 10.0, 0.35);
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn test_r_sum_weighted_mean()
    {
        assert_eq!(r_sum(&[0.5, 0.5], &[1.0, 5.0]), 0.5);
        assert!((r_sum(&[0.0, 1.0], &[1.0, 3.0]) - 0.75).abs() < TOL);
    }

    #[test]
    #[should_panic]
    fn test_r_sum_rejects_length_mismatch()
    {
        r_sum(&[0.5, 0.5], &[1.0]);
    }

    #[test]
    fn test_r_nonsep_degree_one_is_mean()
    {
        assert!((r_nonsep(&[0.2, 0.4, 0.6], 1) - 0.4).abs() < TOL);
    }

    #[test]
    fn test_r_nonsep_pair()
    {
        // numerator 1 + 1 + 0 + 1, denominator 2 * 1 * 3 / 2
        assert!((r_nonsep(&[1.0, 0.0], 2) - 1.0).abs() < TOL);
        assert_eq!(r_nonsep(&[0.0, 0.0, 0.0, 0.0], 2), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_r_nonsep_requires_divisible_length()
    {
        r_nonsep(&[0.1, 0.2, 0.3], 2);
    }
}
