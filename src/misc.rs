pub const PI: f64 = std::f64::consts::PI;

/// Tolerance used to snap values drifting just outside [0,1]
pub const EPSILON: f64 = 1.0e-10;

/// Corrects values in [-EPSILON,0] to 0 and values in [1,1+EPSILON] to 1
pub fn correct_to_01(a: f64) -> f64
{
    correct_to_01_eps(a, EPSILON)
}

pub fn correct_to_01_eps(a: f64, epsilon: f64) -> f64
{
    assert!(epsilon >= 0.0, "epsilon must be non-negative, got {}", epsilon);

    let min = 0.0;
    let max = 1.0;

    if a <= min && a >= min - epsilon
    {
        min
    }
    else if a >= max && a <= max + epsilon
    {
        max
    }
    else
    {
        a
    }
}

pub fn vector_in_01(x: &[f64]) -> bool
{
    x.iter().all(|x_i| (0.0..=1.0).contains(x_i))
}

/// Contiguous view `v[head..tail]`
pub fn subvector(v: &[f64], head: usize, tail: usize) -> &[f64]
{
    assert!(head < tail && tail <= v.len(), "bad subvector [{}, {}) of length {}", head, tail, v.len());

    &v[head..tail]
}

/// Splits the first `k` position parameters into `m - 1` equal contiguous groups
pub fn group_bounds(k: usize, m: usize) -> Vec<(usize, usize)>
{
    assert!(m >= 2);
    assert!(k % (m - 1) == 0, "k = {} is not divisible by M - 1 = {}", k, m - 1);

    let group_len = k / (m - 1);

    (1..m)
        .map(|i| ((i - 1) * group_len, i * group_len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_to_01_snaps_drift()
    {
        assert_eq!(correct_to_01(-1e-11), 0.0);
        assert_eq!(correct_to_01(1.0 + 1e-11), 1.0);
        assert_eq!(correct_to_01(0.5), 0.5);
    }

    #[test]
    fn test_correct_to_01_keeps_real_violations()
    {
        assert_eq!(correct_to_01(-1e-3), -1e-3);
        assert_eq!(correct_to_01(1.5), 1.5);
        assert_eq!(correct_to_01_eps(1.05, 0.1), 1.0);
    }

    #[test]
    fn test_vector_in_01()
    {
        assert!(vector_in_01(&[0.0, 0.3, 1.0]));
        assert!(!vector_in_01(&[0.0, 1.0000001]));
        assert!(!vector_in_01(&[-0.1]));
        assert!(vector_in_01(&[]));
    }

    #[test]
    fn test_group_bounds_are_contiguous()
    {
        assert_eq!(group_bounds(6, 4), vec![(0, 2), (2, 4), (4, 6)]);
        assert_eq!(group_bounds(4, 2), vec![(0, 4)]);
    }

    #[test]
    #[should_panic]
    fn test_group_bounds_rejects_uneven_split()
    {
        group_bounds(5, 3);
    }

    #[test]
    fn test_subvector()
    {
        let v = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(subvector(&v, 1, 3), &[0.2, 0.3]);
    }
}
