use std::collections::HashSet;
use tracing::debug;

use crate::graph::StateGraph;
use crate::models::{EntitySpec, ProjectSpec};

use super::finding::{Finding, FindingKind};
use super::structural::StructuralValidator;
use super::validator::ValidationPolicy;

/// Per-entity state machine checks: dangling endpoints, ambiguous
/// `(from, action)` pairs, isolated states, and advisory reachability.
pub struct StateMachineValidator;

impl StateMachineValidator {
    pub fn validate(spec: &ProjectSpec, policy: &ValidationPolicy) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (di, domain) in spec.domains.iter().enumerate() {
            for (ei, entity) in domain.entities.iter().enumerate() {
                if !StructuralValidator::machine_is_well_shaped(entity) {
                    continue;
                }
                let path = format!("domains[{di}].entities[{ei}]");
                debug!("Checking state machine for entity '{}'", entity.english_name);
                validate_entity(&mut findings, entity, &path, policy);
            }
        }

        findings
    }
}

fn validate_entity(
    findings: &mut Vec<Finding>,
    entity: &EntitySpec,
    entity_path: &str,
    policy: &ValidationPolicy,
) {
    let states = entity.states();
    let transitions = entity.transitions();
    let declared: HashSet<&str> = states.iter().map(|s| s.english_name.as_str()).collect();

    // Endpoint membership gates the graph checks below: a dangling
    // endpoint would make isolation/reachability results meaningless.
    let mut dangling = false;
    for (ti, transition) in transitions.iter().enumerate() {
        for (field, endpoint) in [("from", &transition.from), ("to", &transition.to)] {
            if !declared.contains(endpoint.as_str()) {
                findings.push(Finding::fatal(
                    format!("{entity_path}.transitions[{ti}].{field}"),
                    FindingKind::ReferentialIntegrity,
                    format!(
                        "transition references undeclared state '{endpoint}' (entity '{}')",
                        entity.english_name
                    ),
                ));
                dangling = true;
            }
        }
    }

    // Ambiguity does not depend on graph structure, so it is reported
    // even when some endpoints dangle. Emitted in transition-list order.
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for (ti, transition) in transitions.iter().enumerate() {
        if !seen.insert((transition.from.as_str(), transition.action.as_str())) {
            findings.push(Finding::fatal(
                format!("{entity_path}.transitions[{ti}]"),
                FindingKind::StateMachine,
                format!(
                    "ambiguous transition: ('{}', '{}') is declared more than once",
                    transition.from, transition.action
                ),
            ));
        }
    }

    if dangling {
        return;
    }

    let graph = match StateGraph::new(states, transitions) {
        Ok(graph) => graph,
        // Unreachable after the endpoint check above
        Err(_) => return,
    };

    let isolated: HashSet<&str> = graph.isolated_states().into_iter().collect();
    for (si, state) in states.iter().enumerate() {
        if isolated.contains(state.english_name.as_str()) {
            findings.push(Finding::fatal(
                format!("{entity_path}.states[{si}]"),
                FindingKind::StateMachine,
                format!(
                    "isolated state '{}': no incoming and no outgoing transitions",
                    state.english_name
                ),
            ));
        }
    }

    // Reachability is advisory: multiple entry points are legal, and a
    // state only reachable via a separate entry point is still valid.
    let unreachable: HashSet<&str> = graph.unreachable_states().into_iter().collect();
    for (si, state) in states.iter().enumerate() {
        let name = state.english_name.as_str();
        if unreachable.contains(name) && !isolated.contains(name) {
            findings.push(Finding::warning(
                format!("{entity_path}.states[{si}]"),
                FindingKind::StateMachine,
                format!("state '{name}' is not reachable from any entry state"),
            ));
        }
    }

    if policy.require_single_entry_point {
        let entries = graph.entry_states();
        if entries.len() > 1 {
            findings.push(Finding::warning(
                format!("{entity_path}.transitions"),
                FindingKind::StateMachine,
                format!(
                    "machine has {} entry states ({}); policy expects exactly one",
                    entries.len(),
                    entries.join(", ")
                ),
            ));
        }
    }
}
