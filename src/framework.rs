//! Composition primitives shared by every problem: normalisation of the raw
//! decision vector, degeneracy of the position parameters and assembly of
//! the final fitness vector.

use itertools::izip;
use crate::misc::vector_in_01;

/// Upper bounds `2, 4, ..., 2n` of the WFG decision variables
pub fn wfg_bounds(n: usize) -> Vec<f64>
{
    (1..=n).map(|i| 2.0 * i as f64).collect()
}

/// Scaling constants `S_m = 2m` of the WFG problems
pub fn wfg_scales(n_obj: usize) -> Vec<f64>
{
    (1..=n_obj).map(|m| 2.0 * m as f64).collect()
}

/// Reduces each element of `z` to [0,1] by its bound
pub fn normalize(z: &[f64], bounds: &[f64]) -> Vec<f64>
{
    assert_eq!(z.len(), bounds.len());

    z.iter()
        .zip(bounds)
        .map(|(z_i, bound)| {
            assert!(*bound > 0.0);
            assert!(*z_i >= 0.0 && z_i <= bound, "{} is outside [0, {}]", z_i, bound);

            z_i / bound
        })
        .collect()
}

/// Degeneracy vector: all ones, or only the first position parameter kept
pub fn degeneracy_vector(n_obj: usize, degenerate: bool) -> Vec<u8>
{
    assert!(n_obj >= 2);

    if degenerate
    {
        let mut a = vec![0; n_obj - 1];
        a[0] = 1;
        a
    }
    else
    {
        vec![1; n_obj - 1]
    }
}

/// Degenerates the position values of `t_p` according to `a`
pub fn calculate_x(t_p: &[f64], a: &[u8]) -> Vec<f64>
{
    assert!(vector_in_01(t_p));
    assert!(!t_p.is_empty());
    assert_eq!(a.len(), t_p.len() - 1);

    let last = t_p[t_p.len() - 1];
    let mut result = Vec::with_capacity(t_p.len());

    for (t_i, a_i) in t_p.iter().zip(a)
    {
        assert!(*a_i == 0 || *a_i == 1);

        let tmp1 = f64::max(last, *a_i as f64);
        result.push(tmp1 * (t_i - 0.5) + 0.5);
    }

    result.push(last);

    result
}

/// Fitness vector `f_m = D * x_M + S_m * h_m`
pub fn calculate_f(d: f64, x: &[f64], h: &[f64], s: &[f64]) -> Vec<f64>
{
    assert!(d > 0.0);
    assert!(vector_in_01(x));
    assert!(vector_in_01(h));
    assert_eq!(x.len(), h.len());
    assert_eq!(h.len(), s.len());

    let distance = d * x[x.len() - 1];

    izip!(h, s)
        .map(|(h_i, s_i)| {
            assert!(*s_i > 0.0);

            distance + s_i * h_i
        })
        .collect()
}
