use crate::models::{EntitySpec, ProjectSpec};

use super::finding::{Finding, FindingKind};

/// Conditional-requirement checks that the serde shape cannot express.
/// Runs before the semantic validators; entities that fail here are
/// skipped by the state machine validator.
pub struct StructuralValidator;

impl StructuralValidator {
    pub fn validate(spec: &ProjectSpec) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (di, domain) in spec.domains.iter().enumerate() {
            for (ei, entity) in domain.entities.iter().enumerate() {
                let path = format!("domains[{di}].entities[{ei}]");

                if entity.has_state_transition {
                    let states = entity.states();
                    let transitions = entity.transitions();

                    if states.is_empty() {
                        findings.push(Finding::fatal(
                            format!("{path}.states"),
                            FindingKind::Structural,
                            "hasStateTransition is true but no states are declared",
                        ));
                    } else if states.len() < 2 {
                        findings.push(Finding::fatal(
                            format!("{path}.states"),
                            FindingKind::Structural,
                            "a state machine needs at least 2 states; single-state entities should set hasStateTransition to false",
                        ));
                    }

                    if transitions.is_empty() {
                        findings.push(Finding::fatal(
                            format!("{path}.transitions"),
                            FindingKind::Structural,
                            "hasStateTransition is true but no transitions are declared",
                        ));
                    }
                } else {
                    if !entity.states().is_empty() {
                        findings.push(Finding::fatal(
                            format!("{path}.states"),
                            FindingKind::Structural,
                            "states are declared but hasStateTransition is false",
                        ));
                    }
                    if !entity.transitions().is_empty() {
                        findings.push(Finding::fatal(
                            format!("{path}.transitions"),
                            FindingKind::Structural,
                            "transitions are declared but hasStateTransition is false",
                        ));
                    }
                }
            }
        }

        findings
    }

    /// Whether this entity's machine is well-shaped enough for the deeper
    /// state machine checks to run.
    pub fn machine_is_well_shaped(entity: &EntitySpec) -> bool {
        entity.has_state_transition
            && entity.states().len() >= 2
            && !entity.transitions().is_empty()
    }
}
