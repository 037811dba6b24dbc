//! Shape functions. Each one computes the normalised value of objective `m`
//! (1-indexed) from the reduced vector `x`.

use crate::misc::{correct_to_01, vector_in_01, PI};

fn shape_args_ok(x: &[f64], m: usize) -> bool
{
    vector_in_01(x) && m >= 1 && m <= x.len()
}

pub fn linear(x: &[f64], m: usize) -> f64
{
    assert!(shape_args_ok(x, m));

    let n_obj = x.len();
    let mut result = 1.0;

    for x_i in &x[..n_obj - m]
    {
        result *= x_i;
    }

    if m != 1
    {
        result *= 1.0 - x[n_obj - m];
    }

    correct_to_01(result)
}

pub fn convex(x: &[f64], m: usize) -> f64
{
    assert!(shape_args_ok(x, m));

    let n_obj = x.len();
    let mut result = 1.0;

    for x_i in &x[..n_obj - m]
    {
        result *= 1.0 - (x_i * PI / 2.0).cos();
    }

    if m != 1
    {
        result *= 1.0 - (x[n_obj - m] * PI / 2.0).sin();
    }

    correct_to_01(result)
}

pub fn concave(x: &[f64], m: usize) -> f64
{
    assert!(shape_args_ok(x, m));

    let n_obj = x.len();
    let mut result = 1.0;

    for x_i in &x[..n_obj - m]
    {
        result *= (x_i * PI / 2.0).sin();
    }

    if m != 1
    {
        result *= (x[n_obj - m] * PI / 2.0).cos();
    }

    correct_to_01(result)
}

/// Mixed convex/concave front with `a` segments
pub fn mixed(x: &[f64], a: usize, alpha: f64) -> f64
{
    assert!(vector_in_01(x));
    assert!(!x.is_empty());
    assert!(a >= 1);
    assert!(alpha > 0.0);

    let tmp = 2.0 * a as f64 * PI;

    correct_to_01((1.0 - x[0] - (tmp * x[0] + PI / 2.0).cos() / tmp).powf(alpha))
}

/// Disconnected front with `a` regions
pub fn disc(x: &[f64], a: usize, alpha: f64, beta: f64) -> f64
{
    assert!(vector_in_01(x));
    assert!(!x.is_empty());
    assert!(a >= 1);
    assert!(alpha > 0.0);
    assert!(beta > 0.0);

    let tmp1 = a as f64 * x[0].powf(beta) * PI;

    correct_to_01(1.0 - x[0].powf(alpha) * tmp1.cos().powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_concave_first_objective_skips_trailing_factor()
    {
        let x = [1.0, 1.0, 1.0];
        // only sin(pi/2) factors, no cos term for m == 1
        assert!((concave(&x, 1) - 1.0).abs() < TOL);
        assert!(concave(&x, 2).abs() < TOL);
        assert!(concave(&x, 3).abs() < TOL);
    }

    #[test]
    fn test_concave_front_is_spherical()
    {
        let x = [0.3, 0.7, 0.0];
        let norm: f64 = (1..=3).map(|m| concave(&x, m).powi(2)).sum();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_front_sums_to_one()
    {
        let x = [0.2, 0.6, 0.0];
        let sum: f64 = (1..=3).map(|m| linear(&x, m)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_convex_corners()
    {
        let x = [0.0, 0.0];
        assert_eq!(convex(&x, 1), 0.0);
        assert!((convex(&x, 2) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_mixed_endpoints()
    {
        assert!((mixed(&[0.0], 5, 1.0) - 1.0).abs() < TOL);
        assert!(mixed(&[1.0], 5, 1.0).abs() < TOL);
    }

    #[test]
    fn test_disc_endpoints()
    {
        assert!((disc(&[0.0], 5, 1.0, 1.0) - 1.0).abs() < TOL);
        // cos(5 pi)^2 == 1
        assert!(disc(&[1.0], 5, 1.0, 1.0).abs() < TOL);
    }

    #[test]
    #[should_panic]
    fn test_shape_rejects_objective_out_of_range()
    {
        concave(&[0.5, 0.5], 3);
    }
}
