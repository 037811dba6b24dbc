//! WFG toolkit problems.
//!
//! A problem is a fixed list of [`Stage`]s applied to the normalised
//! decision vector, followed by a [`Shape`] that turns the final transition
//! vector of length M into the fitness vector.

pub mod instance;
pub mod registry;

pub use instance::Wfg;

use crate::framework::{calculate_f, calculate_x, degeneracy_vector, wfg_scales};
use crate::misc::{group_bounds, subvector, vector_in_01};
use crate::problem::ProblemKind;
use crate::shapes;
use crate::transitions::{b_flat, b_param, b_poly, r_nonsep, r_sum, s_decept, s_linear, s_multi};

/// Distance scaling constant `D`
pub const DISTANCE_SCALE: f64 = 1.0;

/// Ideal value of the distance parameters after normalisation
pub const DISTANCE_OPTIMUM: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasParam {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decept {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multi {
    pub a: usize,
    pub b: f64,
    pub c: f64,
}

/// Weights used by the weighted sum reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weights {
    /// `w_i = 2i` (1-indexed)
    Ascending,
    Uniform,
}

impl Weights {
    fn vector(&self, n: usize) -> Vec<f64> {
        match self {
            Weights::Ascending => (1..=n).map(|i| 2.0 * i as f64).collect(),
            Weights::Uniform => vec![1.0; n],
        }
    }
}

/// One transition of a problem pipeline. The first `k` entries of the input
/// are position parameters, the rest are distance parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    DistanceShiftLinear { a: f64 },
    DistanceBiasFlat { a: f64, b: f64, c: f64 },
    BiasPoly { alpha: f64 },
    ShiftMulti(Multi),
    ShiftDecept(Decept),
    /// Biases each position parameter by the mean of everything after it
    PositionBiasParamFromTail(BiasParam),
    /// Biases each distance parameter by the mean of everything before it
    DistanceBiasParamFromHead(BiasParam),
    /// Biases every parameter but the last by the mean of everything after it
    BiasParamFromTail(BiasParam),
    /// Biases every parameter but the first by the mean of everything before it
    BiasParamFromHead(BiasParam),
    DeceptPositionsMultiDistance { decept: Decept, multi: Multi },
    /// Reduces distance parameters in consecutive pairs
    DistancePairsNonSeparable,
    /// Reduces to M values: one weighted mean per position group and one for the distance block
    WeightedSumReduction(Weights),
    /// Reduces to M values with the non-separable reduction
    NonSeparableReduction,
}

impl Stage {
    /// Whether the stage produces the final vector of length M
    pub fn is_reduction(&self) -> bool {
        matches!(self, Stage::WeightedSumReduction(_) | Stage::NonSeparableReduction)
    }

    pub fn apply(&self, y: &[f64], k: usize, n_obj: usize) -> Vec<f64> {
        let n = y.len();

        assert!(vector_in_01(y));
        assert!(k >= 1 && k < n, "k = {} is outside [1, {})", k, n);

        match *self {
            Stage::DistanceShiftLinear { a } => map_distance(y, k, |y_i| s_linear(y_i, a)),
            Stage::DistanceBiasFlat { a, b, c } => map_distance(y, k, |y_i| b_flat(y_i, a, b, c)),
            Stage::BiasPoly { alpha } => y.iter().map(|y_i| b_poly(*y_i, alpha)).collect(),
            Stage::ShiftMulti(Multi { a, b, c }) => y.iter().map(|y_i| s_multi(*y_i, a, b, c)).collect(),
            Stage::ShiftDecept(Decept { a, b, c }) => y.iter().map(|y_i| s_decept(*y_i, a, b, c)).collect(),
            Stage::PositionBiasParamFromTail(param) => {
                let mut t: Vec<f64> = (0..k)
                    .map(|i| param.apply(y[i], mean(subvector(y, i + 1, n))))
                    .collect();
                t.extend_from_slice(&y[k..]);
                t
            }
            Stage::DistanceBiasParamFromHead(param) => {
                let mut t = y[..k].to_vec();
                t.extend((k..n).map(|i| param.apply(y[i], mean(subvector(y, 0, i)))));
                t
            }
            Stage::BiasParamFromTail(param) => {
                let mut t: Vec<f64> = (0..n - 1)
                    .map(|i| param.apply(y[i], mean(subvector(y, i + 1, n))))
                    .collect();
                t.push(y[n - 1]);
                t
            }
            Stage::BiasParamFromHead(param) => {
                let mut t = vec![y[0]];
                t.extend((1..n).map(|i| param.apply(y[i], mean(subvector(y, 0, i)))));
                t
            }
            Stage::DeceptPositionsMultiDistance { decept, multi } => {
                let mut t: Vec<f64> = y[..k]
                    .iter()
                    .map(|y_i| s_decept(*y_i, decept.a, decept.b, decept.c))
                    .collect();
                t.extend(y[k..].iter().map(|y_i| s_multi(*y_i, multi.a, multi.b, multi.c)));
                t
            }
            Stage::DistancePairsNonSeparable => {
                let l = n - k;
                assert!(l % 2 == 0, "distance parameter count {} is odd", l);

                let mut t = y[..k].to_vec();
                for i in k + 1..=k + l / 2
                {
                    let head = k + 2 * (i - k) - 2;
                    let tail = k + 2 * (i - k);
                    t.push(r_nonsep(subvector(y, head, tail), 2));
                }
                t
            }
            Stage::WeightedSumReduction(weights) => {
                let w = weights.vector(n);
                let mut t: Vec<f64> = group_bounds(k, n_obj)
                    .into_iter()
                    .map(|(head, tail)| r_sum(subvector(y, head, tail), subvector(&w, head, tail)))
                    .collect();
                t.push(r_sum(subvector(y, k, n), subvector(&w, k, n)));
                t
            }
            Stage::NonSeparableReduction => {
                let group_len = k / (n_obj - 1);
                let mut t: Vec<f64> = group_bounds(k, n_obj)
                    .into_iter()
                    .map(|(head, tail)| r_nonsep(subvector(y, head, tail), group_len))
                    .collect();
                t.push(r_nonsep(subvector(y, k, n), n - k));
                t
            }
        }
    }
}

impl BiasParam {
    fn apply(&self, y: f64, u: f64) -> f64 {
        b_param(y, u, self.a, self.b, self.c)
    }
}

fn map_distance<F: Fn(f64) -> f64>(y: &[f64], k: usize, f: F) -> Vec<f64>
{
    let mut t = y[..k].to_vec();
    t.extend(y[k..].iter().map(|y_i| f(*y_i)));
    t
}

fn mean(y: &[f64]) -> f64
{
    r_sum(y, &vec![1.0; y.len()])
}

/// Turns the final transition vector into the fitness vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Convex for the first M-1 objectives, mixed for the last
    ConvexMixed { a: usize, alpha: f64 },
    /// Convex for the first M-1 objectives, disconnected for the last
    ConvexDisc { a: usize, alpha: f64, beta: f64 },
    /// Linear, with all but the first position parameter degenerate
    LinearDegenerate,
    Concave,
    /// Concave with unit scaling constants
    ConcaveUnscaled,
}

impl Shape {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Shape::LinearDegenerate)
    }

    pub fn scales(&self, n_obj: usize) -> Vec<f64> {
        match self {
            Shape::ConcaveUnscaled => vec![1.0; n_obj],
            _ => wfg_scales(n_obj),
        }
    }

    /// Normalised shape values `h` of the reduced vector `x`
    pub fn values(&self, x: &[f64]) -> Vec<f64> {
        let n_obj = x.len();

        match *self {
            Shape::ConvexMixed { a, alpha } => {
                let mut h: Vec<f64> = (1..n_obj).map(|m| shapes::convex(x, m)).collect();
                h.push(shapes::mixed(x, a, alpha));
                h
            }
            Shape::ConvexDisc { a, alpha, beta } => {
                let mut h: Vec<f64> = (1..n_obj).map(|m| shapes::convex(x, m)).collect();
                h.push(shapes::disc(x, a, alpha, beta));
                h
            }
            Shape::LinearDegenerate => (1..=n_obj).map(|m| shapes::linear(x, m)).collect(),
            Shape::Concave | Shape::ConcaveUnscaled => (1..=n_obj).map(|m| shapes::concave(x, m)).collect(),
        }
    }

    pub fn reduced_x(&self, t_p: &[f64]) -> Vec<f64> {
        calculate_x(t_p, &degeneracy_vector(t_p.len(), self.is_degenerate()))
    }

    pub fn fitness(&self, t_p: &[f64]) -> Vec<f64> {
        let x = self.reduced_x(t_p);
        let h = self.values(&x);

        calculate_f(DISTANCE_SCALE, &x, &h, &self.scales(t_p.len()))
    }
}

/// Immutable description of one problem, see [`registry::spec`]
#[derive(Debug, Clone, Copy)]
pub struct ProblemSpec {
    pub kind: ProblemKind,
    /// WFG problems divide each variable by its bound, I problems take [0,1] input
    pub normalize: bool,
    /// Distance parameters are reduced in pairs
    pub even_distance: bool,
    pub stages: &'static [Stage],
    pub shape: Shape,
}

impl ProblemSpec {
    /// Runs every stage and returns the final transition vector of length M
    pub fn transition(&self, y: &[f64], k: usize, n_obj: usize) -> Vec<f64> {
        let mut t = y.to_vec();

        for stage in self.stages
        {
            t = stage.apply(&t, k, n_obj);
            log::trace!("{} {:?} -> {} values", self.kind, stage, t.len());
        }

        assert_eq!(t.len(), n_obj, "{} pipeline ended with {} values", self.kind, t.len());

        t
    }
}
