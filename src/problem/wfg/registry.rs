//! Stage lists and shapes of WFG1-WFG9 and I1-I5.

use crate::problem::wfg::{BiasParam, Decept, Multi, ProblemSpec, Shape, Stage, Weights};
use crate::problem::ProblemKind;

const SHIFT_LINEAR: Stage = Stage::DistanceShiftLinear { a: 0.35 };

const BIAS_FLAT: Stage = Stage::DistanceBiasFlat { a: 0.8, b: 0.75, c: 0.85 };

const BIAS_POLY: Stage = Stage::BiasPoly { alpha: 0.02 };

const BIAS_PARAM: BiasParam = BiasParam { a: 0.98 / 49.98, b: 0.02, c: 50.0 };

const DECEPT: Decept = Decept { a: 0.35, b: 0.001, c: 0.05 };

const SUM_UNIFORM: Stage = Stage::WeightedSumReduction(Weights::Uniform);

const WFG1_STAGES: &[Stage] = &[
    SHIFT_LINEAR,
    BIAS_FLAT,
    BIAS_POLY,
    Stage::WeightedSumReduction(Weights::Ascending),
];

const WFG2_STAGES: &[Stage] = &[SHIFT_LINEAR, Stage::DistancePairsNonSeparable, SUM_UNIFORM];

const WFG4_STAGES: &[Stage] = &[
    Stage::ShiftMulti(Multi { a: 30, b: 10.0, c: 0.35 }),
    SUM_UNIFORM,
];

const WFG5_STAGES: &[Stage] = &[Stage::ShiftDecept(DECEPT), SUM_UNIFORM];

const WFG6_STAGES: &[Stage] = &[SHIFT_LINEAR, Stage::NonSeparableReduction];

const WFG7_STAGES: &[Stage] = &[
    Stage::PositionBiasParamFromTail(BIAS_PARAM),
    SHIFT_LINEAR,
    SUM_UNIFORM,
];

const WFG8_STAGES: &[Stage] = &[
    Stage::DistanceBiasParamFromHead(BIAS_PARAM),
    SHIFT_LINEAR,
    SUM_UNIFORM,
];

const WFG9_STAGES: &[Stage] = &[
    Stage::BiasParamFromTail(BIAS_PARAM),
    Stage::DeceptPositionsMultiDistance {
        decept: DECEPT,
        multi: Multi { a: 30, b: 95.0, c: 0.35 },
    },
    Stage::NonSeparableReduction,
];

const I1_STAGES: &[Stage] = &[SHIFT_LINEAR, SUM_UNIFORM];

const I2_STAGES: &[Stage] = &[Stage::BiasParamFromTail(BIAS_PARAM), SHIFT_LINEAR, SUM_UNIFORM];

const I3_STAGES: &[Stage] = &[Stage::BiasParamFromHead(BIAS_PARAM), SHIFT_LINEAR, SUM_UNIFORM];

const I4_STAGES: &[Stage] = &[SHIFT_LINEAR, Stage::NonSeparableReduction];

const I5_STAGES: &[Stage] = &[
    Stage::BiasParamFromHead(BIAS_PARAM),
    SHIFT_LINEAR,
    Stage::NonSeparableReduction,
];

const WFG1_SHAPE: Shape = Shape::ConvexMixed { a: 5, alpha: 1.0 };

const WFG2_SHAPE: Shape = Shape::ConvexDisc { a: 5, alpha: 1.0, beta: 1.0 };

pub fn spec(kind: ProblemKind) -> ProblemSpec {
    let (stages, shape) = match kind {
        ProblemKind::Wfg1 => (WFG1_STAGES, WFG1_SHAPE),
        ProblemKind::Wfg2 => (WFG2_STAGES, WFG2_SHAPE),
        ProblemKind::Wfg3 => (WFG2_STAGES, Shape::LinearDegenerate),
        ProblemKind::Wfg4 => (WFG4_STAGES, Shape::Concave),
        ProblemKind::Wfg5 => (WFG5_STAGES, Shape::Concave),
        ProblemKind::Wfg6 => (WFG6_STAGES, Shape::Concave),
        ProblemKind::Wfg7 => (WFG7_STAGES, Shape::Concave),
        ProblemKind::Wfg8 => (WFG8_STAGES, Shape::Concave),
        ProblemKind::Wfg9 => (WFG9_STAGES, Shape::Concave),
        ProblemKind::I1 => (I1_STAGES, Shape::ConcaveUnscaled),
        ProblemKind::I2 => (I2_STAGES, Shape::ConcaveUnscaled),
        ProblemKind::I3 => (I3_STAGES, Shape::ConcaveUnscaled),
        ProblemKind::I4 => (I4_STAGES, Shape::ConcaveUnscaled),
        ProblemKind::I5 => (I5_STAGES, Shape::ConcaveUnscaled),
    };

    ProblemSpec {
        kind,
        normalize: kind.is_wfg(),
        even_distance: matches!(kind, ProblemKind::Wfg2 | ProblemKind::Wfg3),
        stages,
        shape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pipeline_ends_in_one_reduction()
    {
        for kind in ProblemKind::ALL
        {
            let spec = spec(kind);
            let reductions = spec.stages.iter().filter(|stage| stage.is_reduction()).count();

            assert_eq!(reductions, 1, "{}", kind);
            assert!(spec.stages.last().unwrap().is_reduction(), "{}", kind);
        }
    }

    #[test]
    fn test_family_settings()
    {
        assert!(spec(ProblemKind::Wfg1).normalize);
        assert!(!spec(ProblemKind::I1).normalize);
        assert!(spec(ProblemKind::Wfg3).even_distance);
        assert!(spec(ProblemKind::Wfg3).shape.is_degenerate());
        assert!(!spec(ProblemKind::Wfg4).even_distance);
        assert_eq!(spec(ProblemKind::I5).shape, Shape::ConcaveUnscaled);
    }
}
