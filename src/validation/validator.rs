use tracing::debug;

use crate::models::ProjectSpec;

use super::aggregator::ErrorAggregator;
use super::consistency::CrossFieldConsistencyValidator;
use super::finding::Finding;
use super::identifier::IdentifierValidator;
use super::references::ReferentialIntegrityChecker;
use super::state_machine::StateMachineValidator;
use super::structural::StructuralValidator;

/// Knobs for rules the source schema leaves open.
#[derive(Debug, Clone, Default)]
pub struct ValidationPolicy {
    /// When true, a state machine with more than one entry state gets a
    /// warning. Multiple creation paths are legal by default.
    pub require_single_entry_point: bool,
}

/// Runs every validator over the full document (collect-all, never
/// fail-fast) and returns the aggregated, sorted finding list.
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }

    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn validate(&self, spec: &ProjectSpec) -> Vec<Finding> {
        let mut aggregator = ErrorAggregator::new();

        debug!("Running structural checks");
        aggregator.extend(StructuralValidator::validate(spec));

        debug!("Running identifier checks");
        aggregator.extend(IdentifierValidator::validate(spec));

        debug!("Running state machine checks");
        aggregator.extend(StateMachineValidator::validate(spec, &self.policy));

        debug!("Running cross-field consistency checks");
        aggregator.extend(CrossFieldConsistencyValidator::validate(spec));

        debug!("Running referential integrity checks");
        aggregator.extend(ReferentialIntegrityChecker::validate(spec));

        aggregator.finish()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
