//! Random Pareto optimal decision vectors.
//!
//! Position parameters are drawn uniformly; distance parameters are chosen so
//! that every distance value reaches the shift optimum 0.35 right before the
//! shift stage, undoing any bias applied to them first.
//!
//! WFG1 amplifies round-off in its normalised distances through the 0.02
//! polynomial bias, so its samples only land on the front when
//! `0.35 * 2i / 2i == 0.35` for every distance index `i`.

use rand::Rng;
use crate::error::Result;
use crate::framework::wfg_bounds;
use crate::problem::wfg::{Wfg, DISTANCE_OPTIMUM};
use crate::problem::{Problem, ProblemKind};
use crate::transitions::r_sum;

/// Exponent of the polynomial bias in WFG1
const WFG1_POLY_INVERSE: f64 = 50.0;

const BIAS_PARAM_A: f64 = 0.98 / 49.98;

fn mean(y: &[f64]) -> f64
{
    r_sum(y, &vec![1.0; y.len()])
}

/// Distances biased by the mean of everything before them (WFG8, I3, I5)
fn fill_head_dependent(result: &mut Vec<f64>, k: usize, l: usize)
{
    for _ in k..k + l
    {
        let u = mean(result);

        let tmp1 = ((0.5 - u).floor() + BIAS_PARAM_A).abs();
        let tmp2 = 0.02 + 49.98 * (BIAS_PARAM_A - (1.0 - 2.0 * u) * tmp1);

        result.push(DISTANCE_OPTIMUM.powf(tmp2.powi(-1)));
    }
}

/// Distances biased by the mean of everything after them (WFG9, I2)
fn fill_tail_dependent(result: &mut Vec<f64>, k: usize, l: usize)
{
    let n = k + l;
    result.resize(n, 0.0);
    result[n - 1] = DISTANCE_OPTIMUM;

    for i in (k..n - 1).rev()
    {
        let tmp1 = mean(&result[i + 1..n]);

        result[i] = DISTANCE_OPTIMUM.powf((0.02 + 1.96 * tmp1).powi(-1));
    }
}

pub fn random_pareto_sample_with<R: Rng + ?Sized>(kind: ProblemKind, k: usize, l: usize, rng: &mut R) -> Vec<f64>
{
    assert!(k >= 1);
    assert!(l >= 1);

    let mut result: Vec<f64> = (0..k).map(|_| rng.gen_range(0.0..=1.0)).collect();

    match kind
    {
        ProblemKind::Wfg1 => {
            for x_i in result.iter_mut()
            {
                *x_i = x_i.powf(WFG1_POLY_INVERSE);
            }
            result.extend(std::iter::repeat(DISTANCE_OPTIMUM).take(l));
        }
        ProblemKind::Wfg8 | ProblemKind::I3 | ProblemKind::I5 => fill_head_dependent(&mut result, k, l),
        ProblemKind::Wfg9 | ProblemKind::I2 => fill_tail_dependent(&mut result, k, l),
        _ => result.extend(std::iter::repeat(DISTANCE_OPTIMUM).take(l)),
    }

    if kind.is_wfg()
    {
        for (x_i, bound) in result.iter_mut().zip(wfg_bounds(k + l))
        {
            *x_i *= bound;
        }
    }

    result
}

pub fn random_pareto_sample(problem_name: &str, k: usize, l: usize) -> Result<Vec<f64>>
{
    let kind: ProblemKind = problem_name.parse()?;

    Ok(random_pareto_sample_with(kind, k, l, &mut rand::thread_rng()))
}

/// Fitness vectors of `count` random Pareto optimal samples of `problem`
pub fn sample_front<R: Rng + ?Sized>(problem: &Wfg, count: usize, rng: &mut R) -> Vec<Vec<f64>>
{
    (0..count)
        .map(|_| {
            let z = random_pareto_sample_with(problem.kind(), problem.k(), problem.l(), rng);
            let mut f = Vec::with_capacity(problem.objectives_len());
            problem.calculate_objectives(&z, &mut f);
            f
        })
        .collect()
}
