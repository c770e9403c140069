use crate::model::utility::{PathAttributes, UtilityError};
use std::sync::Arc;

/// origin/destination indices for one evaluator call. semantics depend on the
/// leg: zone-to-tap for access, tap-to-tap for line-haul, tap-to-zone for
/// egress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexPair {
    pub orig: usize,
    pub dest: usize,
}

impl IndexPair {
    pub fn new(orig: usize, dest: usize) -> IndexPair {
        IndexPair { orig, dest }
    }
}

/// evaluates one utility specification for a leg.
///
/// implementations must be deterministic and side-effect-free: the engine
/// memoizes results process-wide and tolerates concurrent recomputation of
/// the same key, which is only sound when every call for identical inputs
/// yields identical outputs. an unresolvable attribute or index pair is a
/// specification/connectivity mismatch and must surface as an error, never a
/// default value.
pub trait UtilityEvaluator: Send + Sync {
    fn evaluate(
        &self,
        index: IndexPair,
        attributes: &PathAttributes,
    ) -> Result<Vec<f64>, UtilityError>;
}

/// the five piecewise utility specifications of the transit path model, one
/// per leg type. access/egress utilities are independent of the skim set;
/// the line-haul specification reads period and skim set off the attribute
/// record.
#[derive(Clone)]
pub struct PiecewiseUtilities {
    pub walk_access: Arc<dyn UtilityEvaluator>,
    pub drive_access: Arc<dyn UtilityEvaluator>,
    pub walk_egress: Arc<dyn UtilityEvaluator>,
    pub drive_egress: Arc<dyn UtilityEvaluator>,
    pub line_haul: Arc<dyn UtilityEvaluator>,
}

impl PiecewiseUtilities {
    /// run one evaluator and take the head of its result vector, the only
    /// element this engine consumes.
    pub fn scalar(
        evaluator: &dyn UtilityEvaluator,
        index: IndexPair,
        attributes: &PathAttributes,
        context: &str,
    ) -> Result<f64, UtilityError> {
        let values = evaluator.evaluate(index, attributes)?;
        values
            .first()
            .copied()
            .ok_or_else(|| UtilityError::EmptyResult(format!("{context} ({}, {})", index.orig, index.dest)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Constant(Vec<f64>);

    impl UtilityEvaluator for Constant {
        fn evaluate(
            &self,
            _index: IndexPair,
            _attributes: &PathAttributes,
        ) -> Result<Vec<f64>, UtilityError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_scalar_reads_head_element() {
        let evaluator = Constant(vec![-1.5, 99.0]);
        let result = PiecewiseUtilities::scalar(
            &evaluator,
            IndexPair::new(1, 2),
            &PathAttributes::default(),
            "test",
        )
        .expect("evaluation failed");
        assert_eq!(result, -1.5);
    }

    #[test]
    fn test_scalar_rejects_empty_result() {
        let evaluator = Constant(vec![]);
        let result = PiecewiseUtilities::scalar(
            &evaluator,
            IndexPair::new(1, 2),
            &PathAttributes::default(),
            "test",
        );
        match result {
            Err(UtilityError::EmptyResult(msg)) => assert!(msg.contains("(1, 2)")),
            other => panic!("expected EmptyResult, got {other:?}"),
        }
    }
}
