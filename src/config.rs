use serde::{Deserialize, Serialize};
use crate::error::{Result, WfgError};
use crate::problem::wfg::Wfg;
use crate::problem::ProblemKind;

/// Serializable description of a problem instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemConfig {
    pub problem: String,
    /// Number of position parameters
    pub k: usize,
    /// Number of distance parameters
    pub l: usize,
    /// Number of objectives
    pub m: usize,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            problem: "WFG4".to_string(),
            k: 4,
            l: 20,
            m: 3,
        }
    }
}

impl ProblemConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ProblemConfig = serde_json::from_str(json)?;
        config.validate()?;

        log::debug!("loaded problem config {:?}", config);

        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn kind(&self) -> Result<ProblemKind> {
        self.problem.parse()
    }

    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ()).map_err(|err| {
            log::warn!("rejected problem config {:?}: {}", self, err);

            if matches!(err, WfgError::UnknownProblem(_)) {
                err
            } else {
                WfgError::Configuration(err.to_string())
            }
        })
    }

    pub fn build(&self) -> Result<Wfg> {
        Wfg::new(self.kind()?, self.k, self.l, self.m)
    }
}
