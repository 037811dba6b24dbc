use crate::error::{Result, WfgError};
use crate::framework::{normalize, wfg_bounds};
use crate::problem::wfg::registry;
use crate::problem::wfg::ProblemSpec;
use crate::problem::{Problem, ProblemKind};

/// A WFG or I problem with fixed `k` position parameters, `l` distance
/// parameters and `n_obj` objectives
#[derive(Clone, Debug)]
pub struct Wfg
{
    name: String,
    spec: ProblemSpec,
    k: usize,
    l: usize,
    n_obj: usize
}

impl Wfg {
    pub fn new(kind: ProblemKind, k: usize, l: usize, n_obj: usize) -> Result<Self>
    {
        let spec = registry::spec(kind);
        let n = k + l;

        if k < 1 || k >= n || n_obj < 2 || k % (n_obj - 1) != 0
        {
            return Err(WfgError::InvalidArguments {
                problem: kind.to_string(),
                k,
                n,
                m: n_obj,
            });
        }

        if spec.even_distance && l % 2 != 0
        {
            return Err(WfgError::OddDistanceCount {
                problem: kind.to_string(),
                l,
            });
        }

        log::debug!("created {} with k={} l={} M={}", kind, k, l, n_obj);

        Ok(Wfg {
            name: format!("{} ({} {} {})", kind, k, l, n_obj),
            spec,
            k,
            l,
            n_obj
        })
    }

    /// Resolves `problem_name` and derives `l` from the decision vector length
    pub fn from_name(problem_name: &str, n: usize, k: usize, n_obj: usize) -> Result<Self>
    {
        let kind: ProblemKind = problem_name.parse()?;

        if k >= n
        {
            return Err(WfgError::InvalidArguments {
                problem: kind.to_string(),
                k,
                n,
                m: n_obj,
            });
        }

        Wfg::new(kind, k, n - k, n_obj)
    }

    pub fn kind(&self) -> ProblemKind
    {
        self.spec.kind
    }

    pub fn spec(&self) -> &ProblemSpec
    {
        &self.spec
    }

    pub fn k(&self) -> usize
    {
        self.k
    }

    pub fn l(&self) -> usize
    {
        self.l
    }

    /// Checks the length and bounds of `z` and computes its fitness vector
    pub fn evaluate(&self, z: &[f64]) -> Result<Vec<f64>>
    {
        self.check_domain(z)?;

        let mut f = Vec::with_capacity(self.n_obj);
        self.calculate_objectives(z, &mut f);

        Ok(f)
    }

    /// Final transition vector of length M, before degeneracy and shape
    pub fn transition(&self, z: &[f64]) -> Vec<f64>
    {
        assert_eq!(z.len(), self.x_len());

        let y = if self.spec.normalize
        {
            normalize(z, &wfg_bounds(z.len()))
        }
        else
        {
            z.to_vec()
        };

        self.spec.transition(&y, self.k, self.n_obj)
    }

    fn check_domain(&self, z: &[f64]) -> Result<()>
    {
        if z.len() != self.x_len()
        {
            return Err(WfgError::DimensionMismatch {
                expected: self.x_len(),
                actual: z.len(),
            });
        }

        for (index, (value, bound)) in z.iter().zip(self.bounds()).enumerate()
        {
            if !(0.0..=bound).contains(value)
            {
                return Err(WfgError::OutOfBounds {
                    index,
                    value: *value,
                    bound,
                });
            }
        }

        Ok(())
    }
}

impl Problem for Wfg
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn problem_class_name(&self) -> &str {
        self.spec.kind.name()
    }

    fn x_len(&self) -> usize {
        self.k + self.l
    }

    fn objectives_len(&self) -> usize {
        self.n_obj
    }

    fn bounds(&self) -> Vec<f64> {
        if self.spec.normalize
        {
            wfg_bounds(self.x_len())
        }
        else
        {
            vec![1.0; self.x_len()]
        }
    }

    fn calculate_objectives(&self, x: &[f64], f: &mut Vec<f64>) {
        let t_p = self.transition(x);

        *f = self.spec.shape.fitness(&t_p);
    }

    fn convergence_metric(&self, x: &[f64]) -> f64 {
        let t_p = self.transition(x);

        t_p[t_p.len() - 1]
    }

    fn best_metric(&self) -> f64 {
        0.0
    }
}
