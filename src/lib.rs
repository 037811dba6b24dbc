//! # wfg_moo
//!
//! The WFG Toolkit of scalable multi-objective test problems: WFG1-WFG9 and
//! I1-I5.
//!
//! A problem maps a decision vector of `k` position parameters followed by
//! `l` distance parameters to `M` objective values. Internally the vector is
//! normalised, passed through the problem's transition stages, degenerated
//! and finally shaped:
//!
//! ```rust,ignore
//! let z = wfg_moo::random_pareto_sample("WFG4", 4, 4)?;
//! let f = wfg_moo::evaluate("WFG4", &z, 4, 3)?;
//! assert_eq!(f.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod framework;
pub mod metrics;
pub mod misc;
pub mod problem;
pub mod sampling;
pub mod shapes;
pub mod transitions;

pub use crate::config::ProblemConfig;
pub use crate::error::{Result, WfgError};
pub use crate::problem::wfg::Wfg;
pub use crate::problem::{Problem, ProblemKind};
pub use crate::sampling::random_pareto_sample;

/// Fitness vector of `z` for the problem called `problem_name`.
///
/// The first `k` entries of `z` are position parameters, the rest are
/// distance parameters; `m` is the number of objectives.
pub fn evaluate(problem_name: &str, z: &[f64], k: usize, m: usize) -> Result<Vec<f64>> {
    Wfg::from_name(problem_name, z.len(), k, m)?.evaluate(z)
}
