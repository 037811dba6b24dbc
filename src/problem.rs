pub mod wfg;

use std::fmt;
use std::str::FromStr;
use dyn_clone::DynClone;
use crate::error::WfgError;

pub trait Problem: DynClone + Send + Sync {
    fn name(&self) -> &str;
    fn problem_class_name(&self) -> &str;

    fn x_len(&self) -> usize;
    fn objectives_len(&self) -> usize;

    /// Upper bounds of the decision variables, lower bounds are all zero
    fn bounds(&self) -> Vec<f64>;

    /// Writes the fitness of `x` into `f`, resizing it to `objectives_len()`.
    ///
    /// Panics when `x` does not fit the problem; use a checked entry point
    /// such as [`wfg::Wfg::evaluate`] for untrusted input.
    fn calculate_objectives(&self, x: &[f64], f: &mut Vec<f64>);

    /// Distance of `x` from the optimal front, equal to `best_metric()` on it
    fn convergence_metric(&self, x: &[f64]) -> f64;
    fn best_metric(&self) -> f64;
}

dyn_clone::clone_trait_object!(Problem);

/// The fourteen problems of the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    Wfg1,
    Wfg2,
    Wfg3,
    Wfg4,
    Wfg5,
    Wfg6,
    Wfg7,
    Wfg8,
    Wfg9,
    I1,
    I2,
    I3,
    I4,
    I5,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 14] = [
        ProblemKind::Wfg1,
        ProblemKind::Wfg2,
        ProblemKind::Wfg3,
        ProblemKind::Wfg4,
        ProblemKind::Wfg5,
        ProblemKind::Wfg6,
        ProblemKind::Wfg7,
        ProblemKind::Wfg8,
        ProblemKind::Wfg9,
        ProblemKind::I1,
        ProblemKind::I2,
        ProblemKind::I3,
        ProblemKind::I4,
        ProblemKind::I5,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProblemKind::Wfg1 => "WFG1",
            ProblemKind::Wfg2 => "WFG2",
            ProblemKind::Wfg3 => "WFG3",
            ProblemKind::Wfg4 => "WFG4",
            ProblemKind::Wfg5 => "WFG5",
            ProblemKind::Wfg6 => "WFG6",
            ProblemKind::Wfg7 => "WFG7",
            ProblemKind::Wfg8 => "WFG8",
            ProblemKind::Wfg9 => "WFG9",
            ProblemKind::I1 => "I1",
            ProblemKind::I2 => "I2",
            ProblemKind::I3 => "I3",
            ProblemKind::I4 => "I4",
            ProblemKind::I5 => "I5",
        }
    }

    /// True for WFG1-WFG9, whose variables live in `[0, 2i]`
    pub fn is_wfg(&self) -> bool {
        !matches!(
            self,
            ProblemKind::I1 | ProblemKind::I2 | ProblemKind::I3 | ProblemKind::I4 | ProblemKind::I5
        )
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProblemKind {
    type Err = WfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        ProblemKind::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| WfgError::UnknownProblem(s.to_string()))
    }
}
