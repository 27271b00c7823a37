use serde::Serialize;
use std::collections::HashMap;

use crate::models::{
    BoundaryLayerDefinition, ChecklistSection, ComplianceLevel, ComplianceRequirements,
    DeploymentModel, MultiTenancy, QuickCommands, StateComplexity, SystemClass,
    TechStackDefinition,
};

/// Index handle into a machine's state list. Never dangles: handles are
/// only minted by the builder after a clean validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StateId(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct State {
    pub label: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub action: String,
    pub command_class: Option<String>,
}

/// One entity's workflow as an explicit graph: transitions are resolved to
/// state handles and indexed per source state for O(1) next-state queries.
#[derive(Debug, Clone, Serialize)]
pub struct StateMachine {
    states: Vec<State>,
    transitions: Vec<Transition>,
    /// Per state, the indexes of its outgoing transitions, in declaration
    /// order.
    outgoing: Vec<Vec<usize>>,
    incoming_counts: Vec<usize>,
}

impl StateMachine {
    pub(super) fn new(states: Vec<State>, transitions: Vec<Transition>) -> Self {
        let mut outgoing = vec![Vec::new(); states.len()];
        let mut incoming_counts = vec![0usize; states.len()];
        for (index, transition) in transitions.iter().enumerate() {
            outgoing[transition.from.0].push(index);
            incoming_counts[transition.to.0] += 1;
        }
        Self {
            states,
            transitions,
            outgoing,
            incoming_counts,
        }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name == name)
            .map(StateId)
    }

    /// Outgoing transitions of `from`, in declaration order.
    pub fn transitions_from(&self, from: StateId) -> impl Iterator<Item = &Transition> {
        self.outgoing[from.0].iter().map(|&i| &self.transitions[i])
    }

    /// States with no incoming transitions.
    pub fn entry_states(&self) -> Vec<StateId> {
        (0..self.states.len())
            .filter(|&i| self.incoming_counts[i] == 0)
            .map(StateId)
            .collect()
    }

    /// States with no outgoing transitions.
    pub fn terminal_states(&self) -> Vec<StateId> {
        (0..self.states.len())
            .filter(|&i| self.outgoing[i].is_empty())
            .map(StateId)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Subdomain {
    pub label: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub label: String,
    pub name: String,
    pub machine: Option<StateMachine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Domain {
    pub label: String,
    pub name: String,
    pub subdomains: Vec<Subdomain>,
    pub entities: Vec<Entity>,
}

/// The canonical model handed to the rendering collaborator. Owns all of
/// its data; nothing aliases back into the raw input document.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedProject {
    pub name: String,
    pub description: String,
    pub system: SystemClass,
    pub deployment: DeploymentModel,
    pub state_complexity: StateComplexity,
    pub multi_tenancy: MultiTenancy,
    pub compliance_level: ComplianceLevel,
    pub domains: Vec<Domain>,
    pub tech_stack: Option<TechStackDefinition>,
    pub quick_commands: Option<QuickCommands>,
    pub boundary_layers: Vec<BoundaryLayerDefinition>,
    pub compliance: Option<ComplianceRequirements>,
    pub value_objects: Vec<String>,
    pub checklist: Vec<ChecklistSection>,

    /// Domain english name -> index into `domains`.
    pub(super) domain_index: HashMap<String, usize>,
    /// Entity english name -> (domain index, entity index). Keys are
    /// globally unique, enforced by validation.
    pub(super) entity_index: HashMap<String, (usize, usize)>,
}

impl NormalizedProject {
    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domain_index.get(name).map(|&i| &self.domains[i])
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entity_index
            .get(name)
            .map(|&(di, ei)| &self.domains[di].entities[ei])
    }

    pub fn entity_count(&self) -> usize {
        self.domains.iter().map(|d| d.entities.len()).sum()
    }
}
