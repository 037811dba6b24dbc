use itertools::izip;

/// Value returned when there is nothing to compare against
pub const IGD_EMPTY: f64 = 1.0e6;

fn squared_distance(a: &[f64], b: &[f64]) -> f64
{
    assert_eq!(a.len(), b.len(), "points of different dimension");

    izip!(a, b)
        .map(|(a_i, b_i)| (a_i - b_i).powi(2))
        .sum()
}

/// Inverted generational distance: mean distance from every point of the
/// `reference` front to its nearest point in `obtained`
pub fn igd(reference: &[Vec<f64>], obtained: &[Vec<f64>]) -> f64
{
    if obtained.is_empty() || reference.is_empty()
    {
        return IGD_EMPTY;
    }

    let sum: f64 = reference
        .iter()
        .map(|r| {
            obtained
                .iter()
                .map(|o| squared_distance(r, o))
                .fold(f64::INFINITY, f64::min)
                .sqrt()
        })
        .sum();

    sum / reference.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_igd_of_identical_sets_is_zero()
    {
        let front = vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]];
        assert_eq!(igd(&front, &front), 0.0);
    }

    #[test]
    fn test_igd_nearest_neighbour()
    {
        let reference = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
        let obtained = vec![vec![0.0, 0.0]];
        // distances 0 and 5
        assert!((igd(&reference, &obtained) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_igd_empty()
    {
        assert_eq!(igd(&[vec![1.0]], &[]), IGD_EMPTY);
    }
}
